use std::collections::BTreeMap;

use crate::assets::ImageCache;
use crate::config::DashboardConfig;
use crate::content::model::Section;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Nothing here survives the
/// process; the active section is re-read at the start of every render pass.
pub struct AppState {
    /// Currently selected navigation section.
    pub section: Section,

    /// Selected tab index per tab group, keyed by the group's id.
    pub tabs: BTreeMap<String, usize>,

    /// Lazily loaded plot images.
    pub images: ImageCache,
}

impl AppState {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            section: config.initial_section,
            tabs: BTreeMap::new(),
            images: ImageCache::new(config.assets_dir.clone()),
        }
    }

    /// Selected tab index for a tab group, clamped to the page count.
    pub fn selected_tab(&self, id: &str, tab_count: usize) -> usize {
        self.tabs
            .get(id)
            .copied()
            .unwrap_or(0)
            .min(tab_count.saturating_sub(1))
    }

    pub fn select_tab(&mut self, id: &str, index: usize) {
        self.tabs.insert(id.to_string(), index);
    }
}
