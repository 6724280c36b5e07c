use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Land-use classification for a site.
///
/// Only "vacant" changes the calculation; every other tag (including
/// caller-defined ones coming from the map layer) is carried through
/// unchanged for display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Landuse {
    #[default]
    Builtup,
    Vacant,
    Other(String),
}

impl Landuse {
    /// Parse a landuse value as supplied in a URL query parameter or form
    /// field. Matching is case-insensitive; unknown non-empty tags are
    /// preserved verbatim.
    pub fn from_param(s: &str) -> Landuse {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "builtup" | "built-up" | "built up" => Landuse::Builtup,
            "vacant" => Landuse::Vacant,
            _ => Landuse::Other(trimmed.to_string()),
        }
    }

    /// Vacant sites are taxed solely on the land component.
    pub fn is_vacant(&self) -> bool {
        matches!(self, Landuse::Vacant)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Landuse::Builtup => "Builtup",
            Landuse::Vacant => "Vacant",
            Landuse::Other(tag) => tag,
        }
    }
}

impl From<String> for Landuse {
    fn from(s: String) -> Self {
        Landuse::from_param(&s)
    }
}

impl From<Landuse> for String {
    fn from(landuse: Landuse) -> Self {
        landuse.as_str().to_string()
    }
}

impl std::fmt::Display for Landuse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse the `corner` URL query parameter. Accepted truthy values are
/// yes/y/1/true, case-insensitively; anything else is not a corner site.
pub fn parse_corner_param(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "yes" | "y" | "1" | "true")
}

/// Construction type of one floor. JSON tags match the market value table
/// column names (RCC, GRANITE, MOSAIC, OTHER).
///
/// Unrecognized tags are kept verbatim rather than rejected; they resolve
/// to a market rate of zero so the calculator stays total.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConstructionType {
    #[default]
    Rcc,
    Granite,
    Mosaic,
    Other,
    Unrecognized(String),
}

impl ConstructionType {
    /// Parse a construction-type tag, case-insensitively. Unknown tags are
    /// preserved as [`ConstructionType::Unrecognized`].
    pub fn from_tag(s: &str) -> ConstructionType {
        match s.trim().to_lowercase().as_str() {
            "rcc" => ConstructionType::Rcc,
            "granite" => ConstructionType::Granite,
            "mosaic" => ConstructionType::Mosaic,
            "other" => ConstructionType::Other,
            _ => ConstructionType::Unrecognized(s.trim().to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            ConstructionType::Rcc => "RCC",
            ConstructionType::Granite => "GRANITE",
            ConstructionType::Mosaic => "MOSAIC",
            ConstructionType::Other => "OTHER",
            ConstructionType::Unrecognized(tag) => tag,
        }
    }
}

impl From<String> for ConstructionType {
    fn from(s: String) -> Self {
        ConstructionType::from_tag(&s)
    }
}

impl From<ConstructionType> for String {
    fn from(construction_type: ConstructionType) -> Self {
        construction_type.tag().to_string()
    }
}

/// Market rate (currency/sq ft) per construction type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MarketRateTable {
    #[schemars(with = "f64")]
    pub rcc: Decimal,
    #[schemars(with = "f64")]
    pub granite: Decimal,
    #[schemars(with = "f64")]
    pub mosaic: Decimal,
    #[schemars(with = "f64")]
    pub other: Decimal,
}

impl MarketRateTable {
    pub fn rate(&self, construction_type: &ConstructionType) -> Decimal {
        match construction_type {
            ConstructionType::Rcc => self.rcc,
            ConstructionType::Granite => self.granite,
            ConstructionType::Mosaic => self.mosaic,
            ConstructionType::Other => self.other,
            ConstructionType::Unrecognized(_) => Decimal::ZERO,
        }
    }

    /// Look up a rate by raw tag string. Unrecognized tags resolve to zero
    /// so the calculator stays total.
    pub fn rate_for_tag(&self, tag: &str) -> Decimal {
        self.rate(&ConstructionType::from_tag(tag))
    }
}

/// What a floor is used for. Display-only; the calculation does not
/// distinguish usages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum FloorUse {
    #[default]
    Residential,
    Commercial,
    Industrial,
    Public,
}

impl FloorUse {
    pub fn label(self) -> &'static str {
        match self {
            FloorUse::Residential => "Residential",
            FloorUse::Commercial => "Commercial",
            FloorUse::Industrial => "Industrial",
            FloorUse::Public => "Public",
        }
    }
}

/// Occupancy of a floor. Self-occupied floors get a 0.5 discount on both
/// tax bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Occupancy {
    #[default]
    SelfOccupied,
    Other,
}

impl Occupancy {
    pub fn factor(self) -> Decimal {
        match self {
            Occupancy::SelfOccupied => dec!(0.5),
            Occupancy::Other => dec!(1),
        }
    }
}

/// Site-level inputs, supplied fresh by the caller on every recompute.
///
/// Missing fields deserialize to zero (plinth factor to 1), keeping the
/// calculator always-computable over partial form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SiteInput {
    #[schemars(with = "String")]
    pub landuse: Landuse,
    /// Plot area in sq ft.
    #[schemars(with = "f64")]
    pub plot_area: Decimal,
    /// Government-notified guidance value, currency/sq ft.
    #[schemars(with = "f64")]
    pub guidance_value: Decimal,
    /// Corner sites attract a 10% guidance value premium.
    pub is_corner_site: bool,
    /// Multiplier on the land component, defaults to 1.
    #[schemars(with = "f64")]
    pub plinth_factor: Decimal,
    /// Unbuilt area in sq ft; ignored for vacant sites, where the whole
    /// plot is treated as vacant land.
    #[schemars(with = "f64")]
    pub vacant_area: Decimal,
    #[schemars(with = "f64")]
    pub tax_rate_percent: Decimal,
    #[schemars(with = "f64")]
    pub rebate_percent: Decimal,
    #[schemars(with = "f64")]
    pub cess_percent: Decimal,
    pub market_rates: MarketRateTable,
}

impl Default for SiteInput {
    fn default() -> Self {
        SiteInput {
            landuse: Landuse::default(),
            plot_area: Decimal::ZERO,
            guidance_value: Decimal::ZERO,
            is_corner_site: false,
            plinth_factor: Decimal::ONE,
            vacant_area: Decimal::ZERO,
            tax_rate_percent: Decimal::ZERO,
            rebate_percent: Decimal::ZERO,
            cess_percent: Decimal::ZERO,
            market_rates: MarketRateTable::default(),
        }
    }
}

/// One physical floor. Ordering is the display sequence only and carries
/// no semantic weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FloorInput {
    /// What the floor is used for; display-only.
    pub usage: FloorUse,
    /// Year of construction; absent or zero means no depreciation.
    pub construction_year: Option<i32>,
    #[schemars(with = "String")]
    pub construction_type: ConstructionType,
    /// Explicit market rate override; when absent the rate comes from the
    /// site market rate table for the construction type.
    #[schemars(with = "Option<f64>")]
    pub market_rate: Option<Decimal>,
    /// Built-up area (BUA) in sq ft.
    #[schemars(with = "f64")]
    pub built_up_area: Decimal,
    pub occupancy: Occupancy,
}

impl Default for FloorInput {
    fn default() -> Self {
        FloorInput {
            usage: FloorUse::default(),
            construction_year: None,
            construction_type: ConstructionType::default(),
            market_rate: None,
            built_up_area: Decimal::ZERO,
            occupancy: Occupancy::default(),
        }
    }
}

/// Input root for a property document: one site plus its floors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PropertyInput {
    pub property_id: Option<String>,
    pub site: SiteInput,
    pub floors: Vec<FloorInput>,
}
