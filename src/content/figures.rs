use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Literal study results
// ---------------------------------------------------------------------------
//
// Every number displayed by the dashboard lives here, verbatim from the
// readmission study. Nothing is computed from underlying data because no
// underlying data ships with this application.

/// Dataset size before splitting.
pub const TOTAL_RECORDS: u32 = 101_766;
/// Attribute count in the raw dataset.
pub const FEATURE_COUNT: u32 = 47;
/// Features retained after selection.
pub const SELECTED_FEATURE_COUNT: u32 = 35;
/// Number of readmission outcome classes.
pub const TARGET_CLASS_COUNT: u32 = 3;
/// 80% stratified training split.
pub const TRAIN_RECORDS: u32 = 81_413;
/// 20% stratified test split.
pub const TEST_RECORDS: u32 = 20_354;

/// Readmission class labels, in fixed display order.
pub const CLASS_LABELS: [&str; 3] = ["NO (0)", ">30 (1)", "<30 (2)"];

/// Test-set patient counts per class, same order as [`CLASS_LABELS`].
pub const CLASS_COUNTS: [u32; 3] = [10_973, 7_109, 2_272];

/// Bar colors for the distribution chart, same order as [`CLASS_LABELS`].
pub const CLASS_COLORS: [Color32; 3] = [
    Color32::from_rgb(0x63, 0x6E, 0xFA),
    Color32::from_rgb(0xEF, 0x55, 0x3B),
    Color32::from_rgb(0x00, 0xCC, 0x96),
];

/// Share of each class in the full dataset, percent.
pub const CLASS_SHARES_PCT: [f64; 3] = [53.9, 34.9, 11.2];

// ---------------------------------------------------------------------------
// Classifier figures
// ---------------------------------------------------------------------------

/// One row of a classification report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow {
    pub class_label: &'static str,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: u32,
}

/// Precomputed performance figures for one classifier.
///
/// Percent-scaled fields (`accuracy_pct`, `macro_*_pct`) feed the comparison
/// chart; fraction-scaled fields feed the detail bullets. Both scales are
/// kept exactly as the study reported them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelFigures {
    pub name: &'static str,
    pub algorithm: &'static str,
    pub accuracy_pct: f64,
    pub macro_precision_pct: f64,
    pub macro_recall_pct: f64,
    pub macro_f1_pct: f64,
    pub macro_f1: f64,
    pub weighted_f1: f64,
    /// Overall accuracy as shown in the report's accuracy row.
    pub report_accuracy: f64,
    pub report: [ReportRow; 3],
    /// Confusion matrix image resource for this model.
    pub matrix_image: &'static str,
}

pub const BAGGING: ModelFigures = ModelFigures {
    name: "Bagging",
    algorithm: "Bagging with Random Forest",
    accuracy_pct: 68.68,
    macro_precision_pct: 75.0,
    macro_recall_pct: 73.0,
    macro_f1_pct: 73.0,
    macro_f1: 0.73,
    weighted_f1: 0.67,
    report_accuracy: 0.69,
    report: [
        ReportRow { class_label: "NO (0)", precision: 0.67, recall: 0.84, f1: 0.74, support: 10_973 },
        ReportRow { class_label: ">30 (1)", precision: 0.59, recall: 0.35, f1: 0.44, support: 7_109 },
        ReportRow { class_label: "<30 (2)", precision: 1.00, recall: 1.00, f1: 1.00, support: 2_272 },
    ],
    matrix_image: "bagging_classifier.png",
};

pub const BOOSTING: ModelFigures = ModelFigures {
    name: "Boosting",
    algorithm: "Gradient Boosting",
    accuracy_pct: 69.82,
    macro_precision_pct: 76.0,
    macro_recall_pct: 74.0,
    macro_f1_pct: 73.0,
    macro_f1: 0.73,
    weighted_f1: 0.67,
    report_accuracy: 0.70,
    report: [
        ReportRow { class_label: "NO (0)", precision: 0.67, recall: 0.87, f1: 0.76, support: 10_973 },
        ReportRow { class_label: ">30 (1)", precision: 0.62, recall: 0.34, f1: 0.44, support: 7_109 },
        ReportRow { class_label: "<30 (2)", precision: 1.00, recall: 1.00, f1: 1.00, support: 2_272 },
    ],
    matrix_image: "gradient_boosting.png",
};

// ---------------------------------------------------------------------------
// Clustering image resources
// ---------------------------------------------------------------------------

pub const KMEANS_IMAGE: &str = "K-Means Clustering.png";
pub const DENDROGRAM_IMAGE: &str = "Hierarchical Clustering Dendrogram.png";
pub const ACTUAL_CLASSES_IMAGE: &str = "Actual Readmission Classes.png";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_counts_sum_to_test_set() {
        assert_eq!(CLASS_COUNTS.iter().sum::<u32>(), TEST_RECORDS);
    }

    #[test]
    fn report_support_matches_class_counts() {
        for model in [&BAGGING, &BOOSTING] {
            for (row, &count) in model.report.iter().zip(CLASS_COUNTS.iter()) {
                assert_eq!(row.support, count, "{} report", model.name);
            }
        }
    }

}
