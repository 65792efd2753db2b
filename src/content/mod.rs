/// Content layer: the dashboard's data model, literal figures, and section
/// dispatch. No egui widgets live here; the layer emits plain values the UI
/// paints.
///
/// Architecture:
/// ```text
///   Section (navigation selection)
///        │
///        ▼
///   ┌───────────┐
///   │ sections   │  dispatch → one builder per section
///   └───────────┘
///        │ reads
///        ▼
///   ┌───────────┐   ┌──────────┐
///   │  figures   │   │  charts   │  literal constants → chart specs
///   └───────────┘   └──────────┘
///        │
///        ▼
///   SectionContent (Blocks: text, tables, charts, image refs)
/// ```

pub mod charts;
pub mod figures;
pub mod model;
pub mod sections;
