pub mod depreciation;
pub mod engine;
pub mod property;
pub mod warnings;

// Flat public surface for domain types and functions.
pub use depreciation::depreciation_factor;
pub use engine::{
    assess, assess_with_surcharge, Assessment, DerivedFloor, SiteSummary, ADDITIONAL_TAX_RATE,
};
pub use property::{
    parse_corner_param, ConstructionType, FloorInput, FloorUse, Landuse, MarketRateTable,
    Occupancy, PropertyInput, SiteInput,
};
pub use warnings::AssessmentWarning;
