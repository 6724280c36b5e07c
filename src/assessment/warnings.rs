use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Advisory warnings emitted during an assessment pass.
///
/// These never block computation; the caller surfaces the message to the
/// user alongside the computed figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AssessmentWarning {
    /// A single floor's built-up area exceeds the total site area.
    FloorExceedsPlot {
        /// 1-based floor index as displayed.
        floor: usize,
        built_up_area: Decimal,
        plot_area: Decimal,
    },
    /// The sum of built-up areas across floors exceeds the plot area.
    TotalExceedsPlot {
        total_built_up_area: Decimal,
        plot_area: Decimal,
    },
}

impl std::fmt::Display for AssessmentWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentWarning::FloorExceedsPlot {
                floor,
                built_up_area,
                plot_area,
            } => write!(
                f,
                "built-up area in floor {} ({:.2} sq ft) exceeds total site area ({:.2} sq ft)",
                floor, built_up_area, plot_area
            ),
            AssessmentWarning::TotalExceedsPlot {
                total_built_up_area,
                plot_area,
            } => write!(
                f,
                "total built-up area ({:.2} sq ft) exceeds plot area ({:.2} sq ft)",
                total_built_up_area, plot_area
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn floor_warning_message() {
        let warning = AssessmentWarning::FloorExceedsPlot {
            floor: 2,
            built_up_area: dec!(1500),
            plot_area: dec!(1200),
        };
        assert_eq!(
            warning.to_string(),
            "built-up area in floor 2 (1500.00 sq ft) exceeds total site area (1200.00 sq ft)"
        );
    }

    #[test]
    fn total_warning_message() {
        let warning = AssessmentWarning::TotalExceedsPlot {
            total_built_up_area: dec!(1300.5),
            plot_area: dec!(1200),
        };
        assert_eq!(
            warning.to_string(),
            "total built-up area (1300.50 sq ft) exceeds plot area (1200.00 sq ft)"
        );
    }
}
