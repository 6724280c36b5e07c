//! Assess command - run the tax computation over a property document

use crate::assessment::{
    assess, parse_corner_param, Assessment, AssessmentWarning, DerivedFloor, FloorInput, Landuse,
    PropertyInput, SiteSummary,
};
use crate::cmd::read_property;
use chrono::Datelike;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::{io, path::PathBuf};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct AssessCommand {
    /// JSON file describing the property (site + floors), or "-" for stdin
    #[arg(short, long)]
    property: PathBuf,

    /// Calendar year used for building age (defaults to the current year)
    #[arg(short, long)]
    year: Option<i32>,

    /// Override the landuse, e.g. as passed in a map query string
    #[arg(long)]
    landuse: Option<String>,

    /// Override the corner-site flag; accepts yes/y/1/true (case-insensitive)
    #[arg(long)]
    corner: Option<String>,

    /// Output as JSON instead of formatted tables
    #[arg(long)]
    json: bool,

    /// Output derived floors as CSV
    #[arg(long)]
    csv: bool,
}

impl AssessCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut property = read_property(&self.property)?;

        if let Some(landuse) = &self.landuse {
            property.site.landuse = Landuse::from_param(landuse);
        }
        if let Some(corner) = &self.corner {
            property.site.is_corner_site = parse_corner_param(corner);
        }

        let year = self.year.unwrap_or_else(|| chrono::Utc::now().year());
        log::debug!(
            "assessing property {:?}: landuse={}, {} floor(s), year={}",
            property.property_id,
            property.site.landuse,
            property.floors.len(),
            year
        );

        let assessment = assess(&property.site, &property.floors, year);
        let rows = build_floor_rows(&property.floors, &assessment.floors);

        if self.json {
            self.print_json(&property, &assessment, rows, year)
        } else if self.csv {
            self.write_csv(&rows)
        } else {
            self.print_report(&property, &assessment, rows, year);
            Ok(())
        }
    }

    fn print_report(
        &self,
        property: &PropertyInput,
        assessment: &Assessment,
        rows: Vec<FloorRow>,
        year: i32,
    ) {
        println!();
        println!("PROPERTY TAX ASSESSMENT (year {})", year);
        if let Some(id) = &property.property_id {
            println!("Property ID: {}", id);
        }
        println!("Landuse: {}", property.site.landuse);
        println!();

        if rows.is_empty() {
            if property.site.landuse.is_vacant() {
                println!("Vacant site: entire plot treated as vacant land, no floors assessed.");
            } else {
                println!("No floors supplied.");
            }
        } else {
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
                .to_string();
            println!("{}", table);
        }
        println!();

        let summary = &assessment.summary;
        println!("SUMMARY");
        println!("  Total BUA: {} sq ft", format_amount(summary.total_built_up_area));
        println!(
            "  Corner Premium: {} | Total Guidance: {} | 25% Guidance: {}",
            format_amount(summary.corner_premium),
            format_amount(summary.total_guidance_value),
            format_amount(summary.guidance_value_25pct)
        );
        println!(
            "  Vacant Area Used: {} sq ft | Vacant Land Tax: {}",
            format_amount(summary.effective_vacant_area),
            format_amount(summary.vacant_land_tax)
        );
        println!("  Sum Floor Tax: {}", format_amount(summary.sum_floor_tax));
        println!(
            "  Additional Tax (29%): {}",
            format_amount(summary.additional_tax_29pct)
        );
        println!(
            "  Total Property Tax: {}",
            format_amount(summary.total_property_tax)
        );
        println!(
            "  Rebate: {} | Cess: {}",
            format_amount(summary.rebate_amount),
            format_amount(summary.cess_amount)
        );
        println!("  TOTAL PAYABLE: {}", format_amount(summary.final_payable));
        println!();

        match assessment.validation_message() {
            Some(message) => println!("\u{26A0} {}", message),
            None => println!("\u{2713} OK"),
        }
        println!();
    }

    fn print_json(
        &self,
        property: &PropertyInput,
        assessment: &Assessment,
        rows: Vec<FloorRow>,
        year: i32,
    ) -> anyhow::Result<()> {
        let output = AssessmentData {
            property_id: property.property_id.clone(),
            landuse: property.site.landuse.to_string(),
            year,
            floors: rows,
            summary: SummaryData::from(&assessment.summary),
            warnings: assessment.warnings.clone(),
            validation_message: assessment.validation_message(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn write_csv(&self, rows: &[FloorRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Row for the floor table output
#[derive(Debug, Clone, Tabled, Serialize)]
struct FloorRow {
    #[tabled(rename = "#")]
    #[serde(rename = "floor")]
    num: String,

    #[tabled(rename = "Use")]
    usage: String,

    #[tabled(rename = "Year")]
    construction_year: String,

    #[tabled(rename = "Dep")]
    depreciation_factor: String,

    #[tabled(rename = "Type")]
    construction_type: String,

    #[tabled(rename = "Market")]
    market_rate: String,

    #[tabled(rename = "Market 25%")]
    market_rate_25pct: String,

    #[tabled(rename = "BUA")]
    built_up_area: String,

    #[tabled(rename = "Occ")]
    occupancy: String,

    #[tabled(rename = "Land")]
    land_component: String,

    #[tabled(rename = "Building")]
    building_component: String,

    #[tabled(rename = "Tax")]
    floor_tax: String,
}

fn build_floor_rows(inputs: &[FloorInput], derived: &[DerivedFloor]) -> Vec<FloorRow> {
    inputs
        .iter()
        .zip(derived)
        .enumerate()
        .map(|(i, (input, floor))| FloorRow {
            num: format!("{}", i + 1),
            usage: input.usage.label().to_string(),
            construction_year: input
                .construction_year
                .filter(|y| *y != 0)
                .map_or("-".to_string(), |y| y.to_string()),
            depreciation_factor: format_amount(floor.depreciation_factor),
            construction_type: input.construction_type.tag().to_string(),
            market_rate: format_amount(floor.market_rate),
            market_rate_25pct: format_amount(floor.adjusted_market_rate_25pct),
            built_up_area: format_amount(input.built_up_area),
            occupancy: format_amount(input.occupancy.factor()),
            land_component: format_amount(floor.land_component),
            building_component: format_amount(floor.building_component),
            floor_tax: format_amount(floor.floor_tax),
        })
        .collect()
}

/// JSON output envelope, all monetary/area values formatted to 2 decimals
#[derive(Debug, Serialize)]
struct AssessmentData {
    #[serde(skip_serializing_if = "Option::is_none")]
    property_id: Option<String>,
    landuse: String,
    year: i32,
    floors: Vec<FloorRow>,
    summary: SummaryData,
    warnings: Vec<AssessmentWarning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_message: Option<String>,
}

#[derive(Debug, Serialize)]
struct SummaryData {
    total_built_up_area: String,
    corner_premium: String,
    total_guidance_value: String,
    guidance_value_25pct: String,
    effective_vacant_area: String,
    vacant_land_tax: String,
    sum_floor_tax: String,
    base_tax: String,
    additional_tax_29pct: String,
    total_property_tax: String,
    rebate_amount: String,
    cess_amount: String,
    final_payable: String,
}

impl From<&SiteSummary> for SummaryData {
    fn from(summary: &SiteSummary) -> Self {
        SummaryData {
            total_built_up_area: format_amount(summary.total_built_up_area),
            corner_premium: format_amount(summary.corner_premium),
            total_guidance_value: format_amount(summary.total_guidance_value),
            guidance_value_25pct: format_amount(summary.guidance_value_25pct),
            effective_vacant_area: format_amount(summary.effective_vacant_area),
            vacant_land_tax: format_amount(summary.vacant_land_tax),
            sum_floor_tax: format_amount(summary.sum_floor_tax),
            base_tax: format_amount(summary.base_tax),
            additional_tax_29pct: format_amount(summary.additional_tax_29pct),
            total_property_tax: format_amount(summary.total_property_tax),
            rebate_amount: format_amount(summary.rebate_amount),
            cess_amount: format_amount(summary.cess_amount),
            final_payable: format_amount(summary.final_payable),
        }
    }
}

fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
