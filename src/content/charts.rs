use crate::color::generate_palette;

use super::figures;
use super::model::{BarEntry, ChartSpec, GroupedChartSpec, Series};

// ---------------------------------------------------------------------------
// Chart builders
// ---------------------------------------------------------------------------
//
// Both builders pass their literal inputs through verbatim: no aggregation,
// scaling, or statistical transformation happens anywhere in this module.

/// Readmission class distribution over the test set. Three fixed categories,
/// literal counts, literal colors.
pub fn distribution_chart() -> ChartSpec {
    let bars = figures::CLASS_LABELS
        .iter()
        .zip(figures::CLASS_COUNTS)
        .zip(figures::CLASS_COLORS)
        .map(|((&label, count), color)| BarEntry {
            label: label.to_string(),
            value: f64::from(count),
            color,
        })
        .collect();

    ChartSpec {
        title: "Readmission Class Distribution (Test Set)".to_string(),
        x_label: "Readmission Class".to_string(),
        y_label: "Number of Patients".to_string(),
        bars,
    }
}

/// Grouped comparison of the two classifiers: four metric series over the
/// model groups, values in percent exactly as the study reported them.
pub fn model_comparison_chart() -> GroupedChartSpec {
    let models = [&figures::BAGGING, &figures::BOOSTING];

    let metrics: [(&str, fn(&figures::ModelFigures) -> f64); 4] = [
        ("Accuracy", |m| m.accuracy_pct),
        ("Macro Precision", |m| m.macro_precision_pct),
        ("Macro Recall", |m| m.macro_recall_pct),
        ("Macro F1", |m| m.macro_f1_pct),
    ];

    let colors = generate_palette(metrics.len());
    let series = metrics
        .iter()
        .zip(colors)
        .map(|(&(name, value_of), color)| Series {
            name: name.to_string(),
            color,
            values: models.iter().map(|&m| value_of(m)).collect(),
        })
        .collect();

    GroupedChartSpec {
        title: "Model Performance Comparison (%)".to_string(),
        x_label: "Model".to_string(),
        y_label: "Score (%)".to_string(),
        groups: models.iter().map(|m| m.name.to_string()).collect(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_has_fixed_categories_and_counts() {
        let chart = distribution_chart();
        let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["NO (0)", ">30 (1)", "<30 (2)"]);

        let values: Vec<f64> = chart.bars.iter().map(|b| b.value).collect();
        assert_eq!(values, [10_973.0, 7_109.0, 2_272.0]);
        assert_eq!(values.iter().sum::<f64>(), 20_354.0);
    }

    #[test]
    fn distribution_uses_literal_class_colors() {
        let chart = distribution_chart();
        for (bar, &color) in chart.bars.iter().zip(figures::CLASS_COLORS.iter()) {
            assert_eq!(bar.color, color);
        }
    }

    #[test]
    fn comparison_has_two_groups_and_four_series() {
        let chart = model_comparison_chart();
        assert_eq!(chart.groups, ["Bagging", "Boosting"]);
        assert_eq!(chart.series.len(), 4);
        for series in &chart.series {
            assert_eq!(series.values.len(), chart.groups.len());
        }
    }

    #[test]
    fn comparison_values_are_verbatim() {
        let chart = model_comparison_chart();
        let accuracy = &chart.series[0];
        assert_eq!(accuracy.name, "Accuracy");
        assert_eq!(accuracy.values, [68.68, 69.82]);

        let f1 = &chart.series[3];
        assert_eq!(f1.name, "Macro F1");
        assert_eq!(f1.values, [73.0, 73.0]);
    }
}
