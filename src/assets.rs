use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Image resources
// ---------------------------------------------------------------------------
//
// The dashboard references a handful of pre-rendered plot images by exact
// filename. A missing file is a recoverable, strictly local condition: the
// caller matches both outcomes and paints a warning in place of the image.

/// The only failure mode of the asset layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("image resource '{name}' is missing or unreadable")]
pub struct ResourceNotFound {
    pub name: String,
}

/// Read an image resource from `root`, converting any I/O failure into
/// [`ResourceNotFound`]. The underlying cause is logged here and does not
/// propagate further.
pub fn load_image(root: &Path, name: &str) -> Result<Arc<[u8]>, ResourceNotFound> {
    match read_bytes(&root.join(name)) {
        Ok(bytes) => Ok(bytes),
        Err(err) => {
            log::warn!("Image resource '{name}' unavailable: {err:#}");
            Err(ResourceNotFound {
                name: name.to_string(),
            })
        }
    }
}

fn read_bytes(path: &Path) -> anyhow::Result<Arc<[u8]>> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("reading image file {}", path.display()))?;
    Ok(bytes.into())
}

// ---------------------------------------------------------------------------
// Cache
// ---------------------------------------------------------------------------

/// Reads each referenced image at most once per process and memoizes the
/// outcome, hit or miss, so re-rendering a section is stable and a missing
/// file is logged once rather than every frame.
pub struct ImageCache {
    root: PathBuf,
    entries: BTreeMap<String, Result<Arc<[u8]>, ResourceNotFound>>,
}

impl ImageCache {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            entries: BTreeMap::new(),
        }
    }

    /// Bytes of `name`, loading on first use.
    pub fn get(&mut self, name: &str) -> &Result<Arc<[u8]>, ResourceNotFound> {
        if !self.entries.contains_key(name) {
            let loaded = load_image(&self.root, name);
            self.entries.insert(name.to_string(), loaded);
        }
        &self.entries[name]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("readmit-dash-test-{tag}"));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_resource_is_an_error_naming_the_file() {
        let err = load_image(&scratch_dir("missing"), "no_such_plot.png").unwrap_err();
        assert_eq!(err.name, "no_such_plot.png");
        assert!(err.to_string().contains("no_such_plot.png"));
    }

    #[test]
    fn present_resource_round_trips() {
        let dir = scratch_dir("present");
        std::fs::write(dir.join("plot.png"), b"not-really-a-png").unwrap();

        let bytes = load_image(&dir, "plot.png").unwrap();
        assert_eq!(&bytes[..], b"not-really-a-png");
    }

    #[test]
    fn cache_memoizes_misses() {
        let mut cache = ImageCache::new(scratch_dir("cache"));
        let first = cache.get("gone.png").clone();
        let second = cache.get("gone.png").clone();
        assert!(first.is_err());
        assert_eq!(first, second);
    }
}
