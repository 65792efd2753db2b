use std::fmt;

use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Section – navigation selection
// ---------------------------------------------------------------------------

/// One entry of the sidebar navigation. Exactly one section is active per
/// render cycle; the dispatcher in [`super::sections`] maps each variant to
/// its content builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    DatasetOverview,
    ClassificationModels,
    ClusteringResults,
}

impl Section {
    /// All sections, in sidebar order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::DatasetOverview,
        Section::ClassificationModels,
        Section::ClusteringResults,
    ];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::DatasetOverview => "Dataset Overview",
            Section::ClassificationModels => "Classification Models",
            Section::ClusteringResults => "Clustering Results",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Chart specifications
// ---------------------------------------------------------------------------

/// One bar of a categorical bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarEntry {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

/// A categorical bar chart: ordered bars plus title and axis labels.
/// Built fresh from literal constants on every render; never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<BarEntry>,
}

/// One named series of a grouped bar chart: one value per group.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub color: Color32,
    pub values: Vec<f64>,
}

/// A grouped bar chart: group labels on the x axis, one bar per series in
/// each group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub groups: Vec<String>,
    pub series: Vec<Series>,
}

// ---------------------------------------------------------------------------
// Renderable content blocks
// ---------------------------------------------------------------------------

/// A headline figure shown as a card (e.g. "Total Records / 101,766").
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub caption: String,
}

/// A plain table: header row plus string cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSpec {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// A reference to an external image resource, looked up by exact filename.
/// Absence of the file is recoverable: the host paints a warning instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRef {
    pub file: String,
    pub caption: String,
}

/// Severity of a [`Block::Notice`], mapped to a tint by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
}

/// A set of named tab pages. The host keeps the selected index per `id`.
#[derive(Debug, Clone, PartialEq)]
pub struct TabsSpec {
    pub id: String,
    pub tabs: Vec<TabPage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabPage {
    pub title: String,
    pub blocks: Vec<Block>,
}

/// The structured output vocabulary handed to the presentation layer.
/// Everything is a plain value so rendered content can be compared for
/// equality across render cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading(String),
    SubHeading(String),
    Paragraph(String),
    BulletList(Vec<String>),
    Metrics(Vec<Metric>),
    Table(TableSpec),
    BarChart(ChartSpec),
    GroupedBarChart(GroupedChartSpec),
    Image(ImageRef),
    Notice(NoticeLevel, String),
    Columns(Vec<Vec<Block>>),
    Tabs(TabsSpec),
    Separator,
}

/// The full renderable output of one section for one render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionContent {
    pub title: String,
    pub blocks: Vec<Block>,
}
