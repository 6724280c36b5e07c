//! Built-in demo property datasets, matching the worked examples from the
//! official ptax calculator sheet.

use crate::assessment::{
    ConstructionType, FloorInput, FloorUse, Landuse, MarketRateTable, Occupancy, PropertyInput,
    SiteInput,
};
use rust_decimal_macros::dec;

/// Example A: built-up site with a single recent self-occupied RCC floor.
pub fn example_a() -> PropertyInput {
    PropertyInput {
        property_id: Some("EXAMPLE-A".to_string()),
        site: SiteInput {
            landuse: Landuse::Builtup,
            plot_area: dec!(1200),
            guidance_value: dec!(743.49),
            is_corner_site: false,
            plinth_factor: dec!(1),
            vacant_area: dec!(0),
            tax_rate_percent: dec!(0.4),
            rebate_percent: dec!(5),
            cess_percent: dec!(26),
            market_rates: MarketRateTable {
                rcc: dec!(1576),
                granite: dec!(1421),
                mosaic: dec!(817.84),
                other: dec!(1000),
            },
        },
        floors: vec![FloorInput {
            usage: FloorUse::Residential,
            construction_year: Some(2020),
            construction_type: ConstructionType::Rcc,
            market_rate: Some(dec!(1576)),
            built_up_area: dec!(500),
            occupancy: Occupancy::SelfOccupied,
        }],
    }
}

/// Example B: larger site with two older rented floors and a vacant strip.
pub fn example_b() -> PropertyInput {
    PropertyInput {
        property_id: Some("EXAMPLE-B".to_string()),
        site: SiteInput {
            landuse: Landuse::Builtup,
            plot_area: dec!(2500),
            guidance_value: dec!(900),
            is_corner_site: false,
            plinth_factor: dec!(1),
            vacant_area: dec!(1200),
            tax_rate_percent: dec!(0.8),
            rebate_percent: dec!(0),
            cess_percent: dec!(26),
            market_rates: MarketRateTable {
                rcc: dec!(2000),
                granite: dec!(1800),
                mosaic: dec!(900),
                other: dec!(1100),
            },
        },
        floors: vec![
            FloorInput {
                usage: FloorUse::Residential,
                construction_year: Some(2015),
                construction_type: ConstructionType::Granite,
                market_rate: Some(dec!(1800)),
                built_up_area: dec!(800),
                occupancy: Occupancy::Other,
            },
            FloorInput {
                usage: FloorUse::Commercial,
                construction_year: Some(2000),
                construction_type: ConstructionType::Mosaic,
                market_rate: Some(dec!(900)),
                built_up_area: dec!(700),
                occupancy: Occupancy::Other,
            },
        ],
    }
}
