use std::path::PathBuf;

use eframe::egui;

use crate::content::model::Section;

// ---------------------------------------------------------------------------
// Process-wide configuration
// ---------------------------------------------------------------------------

/// Visual theme applied once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Dark => egui::Visuals::dark(),
            Theme::Light => egui::Visuals::light(),
        }
    }
}

/// Immutable page-level configuration: built once in `main`, read-only for
/// the lifetime of the app.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Window and top-bar title.
    pub title: String,
    pub theme: Theme,
    /// Directory searched for the pre-rendered plot images.
    pub assets_dir: PathBuf,
    pub initial_section: Section,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Diabetes Readmission Analysis".to_string(),
            theme: Theme::Dark,
            assets_dir: PathBuf::from("."),
            initial_section: Section::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_names_the_dashboard() {
        let config = DashboardConfig::default();
        assert_eq!(config.title, "Diabetes Readmission Analysis");
        assert_eq!(config.initial_section, Section::Home);
    }
}
