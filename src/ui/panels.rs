use eframe::egui::{RichText, Ui};

use crate::config::DashboardConfig;
use crate::content::model::Section;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – navigation
// ---------------------------------------------------------------------------

/// Render the navigation sidebar.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("Diabetes Readmission Project");
    ui.separator();

    ui.strong("Navigate to:");
    for section in Section::ALL {
        ui.selectable_value(&mut state.section, section, section.label());
    }

    ui.separator();
    ui.label(
        RichText::new(
            "Tip: use this dashboard to explore diabetes readmission \
             predictions and patterns.",
        )
        .weak(),
    );
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title bar with the active-section indicator.
pub fn top_bar(ui: &mut Ui, config: &DashboardConfig, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(&config.title);
        ui.separator();
        ui.label(state.section.label());
    });
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("Diabetes Readmission Analysis Dashboard").weak());
        ui.label(
            RichText::new(
                "Dataset: Diabetes 130-US Hospitals (1999-2008) | \
                 Models: Bagging & Boosting Classifiers",
            )
            .weak()
            .small(),
        );
    });
}
