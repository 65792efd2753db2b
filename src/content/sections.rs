use super::charts;
use super::figures::{self, ModelFigures};
use super::model::{
    Block, ImageRef, Metric, NoticeLevel, Section, SectionContent, TableSpec, TabPage, TabsSpec,
};

// ---------------------------------------------------------------------------
// Section dispatcher
// ---------------------------------------------------------------------------

impl Section {
    /// Build the renderable content for this section. Exactly one builder
    /// runs per call; each builder reads only literal constants, so repeated
    /// calls yield equal output.
    pub fn content(self) -> SectionContent {
        match self {
            Section::Home => home(),
            Section::DatasetOverview => dataset_overview(),
            Section::ClassificationModels => classification_models(),
            Section::ClusteringResults => clustering_results(),
        }
    }
}

// ---------------------------------------------------------------------------
// Small constructors
// ---------------------------------------------------------------------------

fn para(text: &str) -> Block {
    Block::Paragraph(text.to_string())
}

fn bullets(items: &[&str]) -> Block {
    Block::BulletList(items.iter().map(|s| s.to_string()).collect())
}

fn metric(label: &str, value: &str, caption: &str) -> Metric {
    Metric {
        label: label.to_string(),
        value: value.to_string(),
        caption: caption.to_string(),
    }
}

fn image(file: &str, caption: &str) -> Block {
    Block::Image(ImageRef {
        file: file.to_string(),
        caption: caption.to_string(),
    })
}

fn tabs(id: &str, pages: Vec<(&str, Vec<Block>)>) -> Block {
    Block::Tabs(TabsSpec {
        id: id.to_string(),
        tabs: pages
            .into_iter()
            .map(|(title, blocks)| TabPage {
                title: title.to_string(),
                blocks,
            })
            .collect(),
    })
}

/// Group thousands with commas for display ("10973" -> "10,973").
fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// The per-class classification report of one model, as a display table.
fn report_table(model: &ModelFigures) -> TableSpec {
    let mut rows: Vec<Vec<String>> = model
        .report
        .iter()
        .map(|row| {
            vec![
                row.class_label.to_string(),
                format!("{:.2}", row.precision),
                format!("{:.2}", row.recall),
                format!("{:.2}", row.f1),
                thousands(row.support),
            ]
        })
        .collect();
    rows.push(vec![
        "Accuracy".to_string(),
        String::new(),
        String::new(),
        format!("{:.2}", model.report_accuracy),
        thousands(figures::TEST_RECORDS),
    ]);

    TableSpec {
        headers: ["Class", "Precision", "Recall", "F1-Score", "Support"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows,
    }
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

fn home() -> SectionContent {
    SectionContent {
        title: "Diabetes Readmission Analysis Dashboard".to_string(),
        blocks: vec![
            Block::Metrics(vec![
                metric("Total Records", &thousands(figures::TOTAL_RECORDS), "Dataset Size"),
                metric("Features", &figures::FEATURE_COUNT.to_string(), "Attributes"),
                metric(
                    "Target Classes",
                    &figures::TARGET_CLASS_COUNT.to_string(),
                    "Readmission Types",
                ),
            ]),
            Block::Separator,
            Block::SubHeading("Project Overview".to_string()),
            para(
                "This dashboard presents a comprehensive analysis of diabetes patient \
                 readmission patterns using the Diabetes 130-US Hospitals dataset.",
            ),
            Block::SubHeading("What We Did".to_string()),
            bullets(&[
                "Data Preprocessing: cleaned and engineered features from 47 attributes",
                "Classification: built ensemble models (Bagging & Boosting) to predict readmission",
                "Clustering: discovered patient patterns using K-Means and hierarchical clustering",
            ]),
            Block::SubHeading("Target Variable".to_string()),
            bullets(&[
                "NO: no readmission",
                ">30: readmitted after 30 days",
                "<30: readmitted within 30 days",
            ]),
            para("Use the sidebar to explore the different sections."),
            Block::Separator,
            Block::SubHeading("Target Distribution".to_string()),
            Block::BarChart(charts::distribution_chart()),
        ],
    }
}

// ---------------------------------------------------------------------------
// Dataset Overview
// ---------------------------------------------------------------------------

fn dataset_overview() -> SectionContent {
    let summary = vec![
        Block::SubHeading("Dataset Statistics".to_string()),
        Block::Columns(vec![
            vec![Block::Notice(
                NoticeLevel::Info,
                format!(
                    "Key statistics:\n\
                     Total records: {}\n\
                     Features: {}\n\
                     Missing values: handled\n\
                     Data source: 130 US hospitals\n\
                     Time period: 1999-2008",
                    thousands(figures::TOTAL_RECORDS),
                    figures::FEATURE_COUNT,
                ),
            )],
            vec![Block::Notice(
                NoticeLevel::Info,
                format!(
                    "Target classes:\n\
                     NO: no readmission ({:.1}%)\n\
                     >30: readmitted after 30 days ({:.1}%)\n\
                     <30: readmitted within 30 days ({:.1}%)",
                    figures::CLASS_SHARES_PCT[0],
                    figures::CLASS_SHARES_PCT[1],
                    figures::CLASS_SHARES_PCT[2],
                ),
            )],
        ]),
        Block::SubHeading("Dataset Information".to_string()),
        bullets(&[
            "Patient demographics: age, gender, race",
            "Admission details: admission type, source, discharge disposition",
            "Medical history: number of diagnoses, procedures, medications",
            "Lab results: A1C test results, glucose levels",
            "Medications: changes in medication, diabetic medications prescribed",
            "Hospital stay: time in hospital, number of lab procedures",
        ]),
    ];

    let preprocessing = vec![
        Block::SubHeading("Preprocessing Pipeline".to_string()),
        Block::SubHeading("1. Data Cleaning".to_string()),
        bullets(&[
            "Removed ID columns: encounter_id, patient_nbr",
            "Handled missing values with appropriate imputation",
            "Removed duplicates and outliers",
            "Dropped columns with >50% missing values",
        ]),
        Block::SubHeading("2. Feature Engineering".to_string()),
        bullets(&[
            "Categorical encoding: one-hot and label encoding",
            "Ordinal features: mapped age ranges and A1C results to numeric scales",
            "Feature scaling: StandardScaler for numeric features",
            "Created interaction features between medications and diagnoses",
        ]),
        Block::SubHeading("3. Data Splitting".to_string()),
        bullets(&[
            &format!("Train set: 80% ({} records)", thousands(figures::TRAIN_RECORDS)),
            &format!("Test set: 20% ({} records)", thousands(figures::TEST_RECORDS)),
            "Stratified split to maintain class distribution",
        ]),
        Block::SubHeading("4. Feature Selection".to_string()),
        bullets(&[
            "Removed low-variance features",
            "Correlation analysis for redundancy",
            "Selected most important features for modeling",
            &format!(
                "Final feature count: {} -> {} features used",
                figures::FEATURE_COUNT,
                figures::SELECTED_FEATURE_COUNT
            ),
        ]),
    ];

    SectionContent {
        title: "Dataset Overview".to_string(),
        blocks: vec![tabs(
            "dataset_tabs",
            vec![("Data Summary", summary), ("Preprocessing", preprocessing)],
        )],
    }
}

// ---------------------------------------------------------------------------
// Classification Models
// ---------------------------------------------------------------------------

fn model_tab(model: &ModelFigures, matrix_caption: &str) -> Vec<Block> {
    vec![
        Block::SubHeading(model.algorithm.to_string()),
        Block::Columns(vec![
            vec![bullets(&[
                &format!("Algorithm: {}", model.algorithm),
                &format!("Accuracy: {:.2}%", model.accuracy_pct),
                &format!("Macro F1-score: {:.2}", model.macro_f1),
                &format!("Weighted F1-score: {:.2}", model.weighted_f1),
            ])],
            vec![
                Block::SubHeading("Classification Report".to_string()),
                Block::Table(report_table(model)),
            ],
        ]),
        Block::SubHeading("Confusion Matrix".to_string()),
        image(model.matrix_image, matrix_caption),
    ]
}

fn classification_models() -> SectionContent {
    let comparison = vec![
        Block::SubHeading("Model Comparison".to_string()),
        Block::GroupedBarChart(charts::model_comparison_chart()),
        Block::Notice(
            NoticeLevel::Success,
            format!(
                "Winner: Gradient Boosting with {:.2}% accuracy",
                figures::BOOSTING.accuracy_pct
            ),
        ),
        Block::SubHeading("Key Insights".to_string()),
        bullets(&[
            "Both models achieve perfect precision and recall (1.00) for class 2 (<30 days readmission)",
            "Gradient Boosting slightly outperforms Bagging in overall accuracy (+1.14%)",
            "Class 1 (>30 days) remains the most challenging to predict (lowest F1-score: 0.44)",
            "Class 0 (NO readmission) has the best recall, especially in Boosting (0.87)",
            "Boosting shows better precision for class 1 (0.62 vs 0.59)",
        ]),
        Block::SubHeading("Model Strengths".to_string()),
        bullets(&[
            "Bagging: better balance between precision and recall for class 0",
            "Boosting: superior overall accuracy and better class 0 recall",
        ]),
        Block::SubHeading("Class Imbalance Impact".to_string()),
        bullets(&[
            "Class 2 (smallest class) has perfect scores, possibly due to distinct patterns",
            "Class 1 (middle-sized) is most difficult to predict accurately",
            "Both models struggle with class 1, suggesting feature overlap with class 0",
        ]),
    ];

    SectionContent {
        title: "Classification Models".to_string(),
        blocks: vec![
            para(
                "Objective: predict whether a diabetes patient will be readmitted \
                 using ensemble learning techniques.",
            ),
            Block::SubHeading("Model Performance Comparison".to_string()),
            Block::Columns(vec![
                vec![Block::Metrics(vec![metric(
                    "Bagging Classifier",
                    "68.7%",
                    "Random Forest Base",
                )])],
                vec![Block::Metrics(vec![metric(
                    "Gradient Boosting",
                    "69.8%",
                    "Best Performer",
                )])],
            ]),
            Block::Separator,
            tabs(
                "model_tabs",
                vec![
                    (
                        "Bagging Results",
                        model_tab(&figures::BAGGING, "Bagging Classifier Confusion Matrix"),
                    ),
                    (
                        "Boosting Results",
                        model_tab(&figures::BOOSTING, "Gradient Boosting Confusion Matrix"),
                    ),
                    ("Comparison", comparison),
                ],
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Clustering Results
// ---------------------------------------------------------------------------

fn clustering_results() -> SectionContent {
    let kmeans = vec![
        Block::SubHeading("K-Means Clustering".to_string()),
        Block::Notice(
            NoticeLevel::Info,
            "Algorithm: K-Means\n\
             Number of clusters: 3 (matching target classes)\n\
             Purpose: partition patients into distinct groups based on feature similarity\n\
             Visualization: 2D PCA projection of clusters"
                .to_string(),
        ),
        bullets(&[
            "Assigns each patient to the nearest cluster centroid",
            "Iteratively refines cluster centers to minimize variance",
            "Fast and efficient for large datasets",
        ]),
        image(figures::KMEANS_IMAGE, "K-Means Clustering (PCA Projection)"),
    ];

    let hierarchical = vec![
        Block::SubHeading("Hierarchical Clustering".to_string()),
        Block::Notice(
            NoticeLevel::Info,
            "Algorithm: agglomerative hierarchical clustering\n\
             Linkage method: Ward (minimizes variance)\n\
             Purpose: build a hierarchy of clusters to understand patient relationships\n\
             Visualization: dendrogram showing cluster formation"
                .to_string(),
        ),
        bullets(&[
            "Starts with each patient as a separate cluster",
            "Iteratively merges the closest clusters",
            "Creates a tree structure (dendrogram) showing relationships",
            "Can be cut at different heights for varying cluster numbers",
        ]),
        image(figures::DENDROGRAM_IMAGE, "Hierarchical Clustering Dendrogram"),
    ];

    let insights = vec![
        Block::SubHeading("Clustering vs Actual Classes".to_string()),
        Block::Columns(vec![
            vec![image(figures::ACTUAL_CLASSES_IMAGE, "Actual Readmission Classes")],
            vec![
                Block::Notice(
                    NoticeLevel::Info,
                    "Clustering results:\n\
                     Clusters reveal distinct patient groups based on medical history and \
                     treatment.\n\
                     Some overlap between readmission types suggests similarity in patient \
                     characteristics.\n\
                     Clustering identifies patterns not immediately obvious from supervised \
                     learning."
                        .to_string(),
                ),
                Block::SubHeading("Clinical Applications".to_string()),
                bullets(&[
                    "Patient segmentation for targeted care programs",
                    "Resource allocation optimization",
                    "Personalized treatment planning",
                    "Medication management strategies",
                    "Early warning system for high-risk patients",
                ]),
            ],
        ]),
        Block::Separator,
        Block::SubHeading("K-Means Advantages".to_string()),
        bullets(&[
            "Fast computation, scalable to large datasets",
            "Works well when clusters are spherical and similar in size",
            "Easy to implement and interpret",
            "Good for patient segmentation in real-time systems",
        ]),
        Block::SubHeading("Hierarchical Advantages".to_string()),
        bullets(&[
            "Provides a complete hierarchy of relationships",
            "No need to specify the number of clusters upfront",
            "Dendrogram visualization helps understand data structure",
            "Better for understanding patient similarity at multiple levels",
        ]),
        Block::SubHeading("Practical Use Cases".to_string()),
        bullets(&[
            "Risk stratification: group patients by readmission risk level",
            "Care pathways: design targeted interventions for each cluster",
            "Resource planning: allocate medical resources based on cluster needs",
            "Quality improvement: identify clusters with poor outcomes for focused work",
        ]),
        Block::SubHeading("Model Performance Note".to_string()),
        para(
            "While clustering is unsupervised, comparing clusters to actual readmission \
             classes helps:",
        ),
        bullets(&[
            "Validate whether natural patient groups align with readmission outcomes",
            "Identify additional risk factors not captured by readmission labels",
            "Support development of more nuanced patient classification systems",
        ]),
    ];

    SectionContent {
        title: "Clustering Analysis".to_string(),
        blocks: vec![
            para(
                "Objective: discover hidden patterns and group similar patients using \
                 unsupervised learning techniques.",
            ),
            tabs(
                "clustering_tabs",
                vec![
                    ("K-Means", kmeans),
                    ("Hierarchical", hierarchical),
                    ("Insights", insights),
                ],
            ),
        ],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{GroupedChartSpec, Metric};

    /// Depth-first flatten of a block tree, descending into columns and tabs.
    fn walk(blocks: &[Block]) -> Vec<&Block> {
        let mut out = Vec::new();
        for block in blocks {
            out.push(block);
            match block {
                Block::Columns(cols) => {
                    for col in cols {
                        out.extend(walk(col));
                    }
                }
                Block::Tabs(spec) => {
                    for tab in &spec.tabs {
                        out.extend(walk(&tab.blocks));
                    }
                }
                _ => {}
            }
        }
        out
    }

    fn all_metrics(blocks: &[Block]) -> Vec<&Metric> {
        walk(blocks)
            .into_iter()
            .filter_map(|b| match b {
                Block::Metrics(ms) => Some(ms.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    #[test]
    fn every_section_yields_nonempty_content() {
        for section in Section::ALL {
            let content = section.content();
            assert!(!content.title.is_empty(), "{section} has no title");
            assert!(!content.blocks.is_empty(), "{section} has no blocks");
        }
    }

    #[test]
    fn section_titles_are_distinct() {
        let titles: Vec<String> = Section::ALL.iter().map(|s| s.content().title).collect();
        for (i, a) in titles.iter().enumerate() {
            for b in &titles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn content_is_idempotent() {
        for section in Section::ALL {
            assert_eq!(section.content(), section.content(), "{section}");
        }
    }

    #[test]
    fn default_section_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn home_carries_the_distribution_chart() {
        let content = Section::Home.content();
        let chart = walk(&content.blocks)
            .into_iter()
            .find_map(|b| match b {
                Block::BarChart(spec) => Some(spec),
                _ => None,
            })
            .expect("no bar chart on the home section");
        assert_eq!(chart.bars.len(), 3);
    }

    #[test]
    fn classification_section_has_both_model_cards() {
        let content = Section::ClassificationModels.content();
        let values: Vec<&str> = all_metrics(&content.blocks)
            .iter()
            .map(|m| m.value.as_str())
            .collect();
        assert!(values.contains(&"68.7%"), "missing Bagging card: {values:?}");
        assert!(values.contains(&"69.8%"), "missing Boosting card: {values:?}");
    }

    #[test]
    fn comparison_tab_carries_the_grouped_chart() {
        let content = Section::ClassificationModels.content();
        let comparison: &TabPage = walk(&content.blocks)
            .into_iter()
            .find_map(|b| match b {
                Block::Tabs(spec) => spec.tabs.iter().find(|t| t.title == "Comparison"),
                _ => None,
            })
            .expect("no Comparison tab");

        let chart: &GroupedChartSpec = walk(&comparison.blocks)
            .into_iter()
            .find_map(|b| match b {
                Block::GroupedBarChart(spec) => Some(spec),
                _ => None,
            })
            .expect("no grouped chart on the Comparison tab");

        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Accuracy", "Macro Precision", "Macro Recall", "Macro F1"]);
        assert_eq!(chart.groups, ["Bagging", "Boosting"]);
    }

    #[test]
    fn clustering_section_references_all_three_images() {
        let content = Section::ClusteringResults.content();
        let files: Vec<&str> = walk(&content.blocks)
            .into_iter()
            .filter_map(|b| match b {
                Block::Image(img) => Some(img.file.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            files,
            [
                figures::KMEANS_IMAGE,
                figures::DENDROGRAM_IMAGE,
                figures::ACTUAL_CLASSES_IMAGE
            ]
        );
    }

    /// True when any heading, paragraph, bullet, or notice contains `needle`.
    fn contains_text(blocks: &[Block], needle: &str) -> bool {
        walk(blocks).into_iter().any(|b| match b {
            Block::Heading(t) | Block::SubHeading(t) | Block::Paragraph(t) => t.contains(needle),
            Block::Notice(_, t) => t.contains(needle),
            Block::BulletList(items) => items.iter().any(|i| i.contains(needle)),
            _ => false,
        })
    }

    #[test]
    fn comparison_tab_keeps_the_model_strengths_text() {
        let content = Section::ClassificationModels.content();
        assert!(contains_text(&content.blocks, "Model Strengths"));
        assert!(contains_text(
            &content.blocks,
            "better balance between precision and recall"
        ));
        assert!(contains_text(&content.blocks, "superior overall accuracy"));
    }

    #[test]
    fn insights_tab_keeps_the_clinical_and_performance_text() {
        let content = Section::ClusteringResults.content();
        assert!(contains_text(&content.blocks, "Clinical Applications"));
        assert!(contains_text(
            &content.blocks,
            "Early warning system for high-risk patients"
        ));
        assert!(contains_text(&content.blocks, "Model Performance Note"));
        assert!(contains_text(
            &content.blocks,
            "not captured by readmission labels"
        ));
    }

    #[test]
    fn advantage_lists_carry_all_four_bullets() {
        let content = Section::ClusteringResults.content();
        assert!(contains_text(
            &content.blocks,
            "Good for patient segmentation in real-time systems"
        ));
        assert!(contains_text(
            &content.blocks,
            "patient similarity at multiple levels"
        ));
    }

    #[test]
    fn report_tables_end_with_the_accuracy_row() {
        for model in [&figures::BAGGING, &figures::BOOSTING] {
            let table = report_table(model);
            assert_eq!(table.rows.len(), 4);
            let last = table.rows.last().unwrap();
            assert_eq!(last[0], "Accuracy");
            assert_eq!(last[4], "20,354");
        }
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(2_272), "2,272");
        assert_eq!(thousands(101_766), "101,766");
    }
}
