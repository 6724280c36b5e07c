use super::depreciation::depreciation_factor;
use super::property::{FloorInput, SiteInput};
use super::warnings::AssessmentWarning;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Statutory surcharge applied on top of the base property tax.
///
/// Fixed at 29% per the published ptax rules; whether it should ever be
/// configurable is unconfirmed, so [`assess_with_surcharge`] is the single
/// override point.
pub const ADDITIONAL_TAX_RATE: Decimal = dec!(0.29);

/// Guidance value uplift for corner sites.
const CORNER_PREMIUM_RATE: Decimal = dec!(0.1);

const QUARTER: Decimal = dec!(0.25);
const PERCENT: Decimal = dec!(100);

/// Derived figures for one floor. Transient, recomputed wholly on every
/// pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedFloor {
    pub depreciation_factor: Decimal,
    /// Market rate actually used: the explicit override, or the site table
    /// rate for the floor's construction type.
    pub market_rate: Decimal,
    pub adjusted_market_rate_25pct: Decimal,
    pub land_component: Decimal,
    pub building_component: Decimal,
    pub floor_tax: Decimal,
}

/// Site-level aggregate over all floors plus the vacant-land component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteSummary {
    pub total_built_up_area: Decimal,
    pub corner_premium: Decimal,
    pub total_guidance_value: Decimal,
    pub guidance_value_25pct: Decimal,
    /// Whole plot for vacant sites, the caller-supplied vacant area
    /// otherwise.
    pub effective_vacant_area: Decimal,
    pub vacant_land_tax: Decimal,
    pub sum_floor_tax: Decimal,
    pub base_tax: Decimal,
    pub additional_tax_29pct: Decimal,
    pub total_property_tax: Decimal,
    pub rebate_amount: Decimal,
    pub cess_amount: Decimal,
    pub final_payable: Decimal,
}

/// Result of one assessment pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub floors: Vec<DerivedFloor>,
    pub summary: SiteSummary,
    pub warnings: Vec<AssessmentWarning>,
}

impl Assessment {
    /// The string-or-null warning surface for display callers.
    ///
    /// When both a per-floor and the total-exceeds-plot condition fire, the
    /// total-area message is the one surfaced.
    pub fn validation_message(&self) -> Option<String> {
        self.warnings
            .iter()
            .find(|w| matches!(w, AssessmentWarning::TotalExceedsPlot { .. }))
            .or_else(|| self.warnings.first())
            .map(ToString::to_string)
    }
}

/// Assess a site and its floors with the statutory 29% surcharge.
///
/// Pure: inputs are not mutated, no I/O, and identical inputs (including
/// `current_year`) produce identical outputs.
pub fn assess(site: &SiteInput, floors: &[FloorInput], current_year: i32) -> Assessment {
    assess_with_surcharge(site, floors, current_year, ADDITIONAL_TAX_RATE)
}

/// Assess with an explicit surcharge rate (e.g. 0.29 for 29%).
pub fn assess_with_surcharge(
    site: &SiteInput,
    floors: &[FloorInput],
    current_year: i32,
    surcharge_rate: Decimal,
) -> Assessment {
    let is_vacant = site.landuse.is_vacant();

    // Site-wide guidance figures, computed once per pass and shared by
    // every floor and the vacant-land tax.
    let corner_premium = if site.is_corner_site {
        CORNER_PREMIUM_RATE * site.guidance_value
    } else {
        Decimal::ZERO
    };
    let total_guidance_value = site.guidance_value + corner_premium;
    let guidance_value_25pct = QUARTER * total_guidance_value;

    // Vacant sites have no floor-wise components regardless of what was
    // passed in.
    let floors: &[FloorInput] = if is_vacant { &[] } else { floors };

    let tax_rate = site.tax_rate_percent / PERCENT;
    let derived: Vec<DerivedFloor> = floors
        .iter()
        .map(|floor| derive_floor(floor, site, guidance_value_25pct, tax_rate, current_year))
        .collect();

    let total_built_up_area: Decimal = floors.iter().map(|f| f.built_up_area).sum();
    let sum_floor_tax: Decimal = derived.iter().map(|d| d.floor_tax).sum();

    let effective_vacant_area = if is_vacant {
        site.plot_area
    } else {
        site.vacant_area
    };
    let vacant_land_tax = effective_vacant_area * guidance_value_25pct * tax_rate;

    let base_tax = sum_floor_tax + vacant_land_tax;
    let additional_tax_29pct = base_tax * surcharge_rate;
    let total_property_tax = base_tax + additional_tax_29pct;
    let rebate_amount = total_property_tax * (site.rebate_percent / PERCENT);
    let cess_amount = total_property_tax * (site.cess_percent / PERCENT);
    let final_payable = total_property_tax - rebate_amount + cess_amount;

    let mut warnings = Vec::new();
    if !is_vacant && site.plot_area > Decimal::ZERO {
        for (i, floor) in floors.iter().enumerate() {
            if floor.built_up_area > site.plot_area {
                warnings.push(AssessmentWarning::FloorExceedsPlot {
                    floor: i + 1,
                    built_up_area: floor.built_up_area,
                    plot_area: site.plot_area,
                });
            }
        }
        if total_built_up_area > site.plot_area {
            warnings.push(AssessmentWarning::TotalExceedsPlot {
                total_built_up_area,
                plot_area: site.plot_area,
            });
        }
    }

    Assessment {
        floors: derived,
        summary: SiteSummary {
            total_built_up_area,
            corner_premium,
            total_guidance_value,
            guidance_value_25pct,
            effective_vacant_area,
            vacant_land_tax,
            sum_floor_tax,
            base_tax,
            additional_tax_29pct,
            total_property_tax,
            rebate_amount,
            cess_amount,
            final_payable,
        },
        warnings,
    }
}

fn derive_floor(
    floor: &FloorInput,
    site: &SiteInput,
    guidance_value_25pct: Decimal,
    tax_rate: Decimal,
    current_year: i32,
) -> DerivedFloor {
    let depreciation = depreciation_factor(floor.construction_year, current_year);
    let market_rate = floor
        .market_rate
        .unwrap_or_else(|| site.market_rates.rate(&floor.construction_type));
    let adjusted_market_rate_25pct = QUARTER * market_rate;
    let occupancy = floor.occupancy.factor();

    let land_component =
        floor.built_up_area * guidance_value_25pct * occupancy * site.plinth_factor;
    let building_component =
        floor.built_up_area * adjusted_market_rate_25pct * occupancy * (Decimal::ONE - depreciation);
    let floor_tax = (land_component + building_component) * tax_rate;

    DerivedFloor {
        depreciation_factor: depreciation,
        market_rate,
        adjusted_market_rate_25pct,
        land_component,
        building_component,
        floor_tax,
    }
}
