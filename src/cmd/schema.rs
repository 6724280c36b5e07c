//! Schema command - print the expected property input format

use crate::assessment::PropertyInput;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the property document
    JsonSchema,
    /// Plain field descriptions
    Fields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::Fields => self.print_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(PropertyInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_fields(&self) -> anyhow::Result<()> {
        println!("Property Document Format");
        println!("========================");
        println!();
        for (name, required, description) in FIELD_DESCRIPTIONS {
            let req = if *required { "required" } else { "optional" };
            println!("{:32} ({:8})  {}", name, req, description);
        }
        println!();
        println!("Missing numeric fields default to 0 (plinth_factor to 1).");
        println!("Vacant landuse ignores floors; the whole plot is vacant land.");
        Ok(())
    }
}

const FIELD_DESCRIPTIONS: &[(&str, bool, &str)] = &[
    ("property_id", false, "caller-assigned parcel identifier"),
    ("site.landuse", false, "Builtup, Vacant, or any caller-defined tag"),
    ("site.plot_area", false, "plot area in sq ft"),
    ("site.guidance_value", false, "guidance value, currency/sq ft"),
    ("site.is_corner_site", false, "corner sites get a 10% guidance premium"),
    ("site.plinth_factor", false, "land component multiplier, default 1"),
    ("site.vacant_area", false, "unbuilt area in sq ft (non-vacant sites)"),
    ("site.tax_rate_percent", false, "tax rate in percent"),
    ("site.rebate_percent", false, "rebate on total property tax, percent"),
    ("site.cess_percent", false, "cess on total property tax, percent"),
    ("site.market_rates.rcc", false, "market rate for RCC floors"),
    ("site.market_rates.granite", false, "market rate for GRANITE floors"),
    ("site.market_rates.mosaic", false, "market rate for MOSAIC floors"),
    ("site.market_rates.other", false, "market rate for OTHER floors"),
    ("floors[].usage", false, "Residential, Commercial, Industrial or Public (display-only)"),
    ("floors[].construction_year", false, "year built; absent or 0 = no depreciation"),
    ("floors[].construction_type", false, "RCC, GRANITE, MOSAIC or OTHER; unknown tags rate at 0"),
    ("floors[].market_rate", false, "explicit rate override, else from site table"),
    ("floors[].built_up_area", false, "built-up area in sq ft"),
    ("floors[].occupancy", false, "self-occupied (0.5) or other (1.0)"),
];
