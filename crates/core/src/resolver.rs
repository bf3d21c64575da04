//! Bundled dependency lookup
//!
//! Maps a dependency name to a payload shipped inside the binary. A miss is a
//! normal outcome: the caller falls back to the platform loader.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone)]
pub struct BundledDependencies {
    payloads: HashMap<String, &'static [u8]>,
}

impl BundledDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a payload under `name`
    pub fn with(mut self, name: &str, bytes: &'static [u8]) -> Self {
        self.payloads.insert(normalize(name), bytes);
        self
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// Look up a dependency, `None` means "use the default loader"
    ///
    /// Accepts qualified names such as `Vlc.DotNet, Version=3.0.0.0` and an
    /// optional `.dll` suffix.
    pub fn resolve(&self, requested: &str) -> Option<&'static [u8]> {
        let key = normalize(requested);
        match self.payloads.get(&key) {
            Some(bytes) => {
                tracing::debug!("Resolved bundled dependency {}", key);
                Some(*bytes)
            }
            None => {
                tracing::debug!("{} is not bundled, deferring to default loader", key);
                None
            }
        }
    }

    /// Write a bundled payload into `dir` and return the written path
    pub fn materialize(&self, requested: &str, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(bytes) = self.resolve(requested) else {
            return Ok(None);
        };

        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

        let path = dir.join(format!("{}.dll", normalize(requested)));
        fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(Some(path))
    }
}

fn normalize(name: &str) -> String {
    let simple = name.split(',').next().unwrap_or_default().trim().to_lowercase();
    match simple.strip_suffix(".dll") {
        Some(stem) => stem.to_string(),
        None => simple,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &[u8] = b"MZ\x90\x00bundled";

    fn bundle() -> BundledDependencies {
        BundledDependencies::new().with("Vlc.DotNet.Core", PAYLOAD)
    }

    #[test]
    fn test_resolve_qualified_name() {
        let deps = bundle();
        assert_eq!(
            deps.resolve("Vlc.DotNet.Core, Version=3.0.0.0, Culture=neutral"),
            Some(PAYLOAD)
        );
        assert_eq!(deps.resolve("vlc.dotnet.core.dll"), Some(PAYLOAD));
    }

    #[test]
    fn test_missing_dependency_is_not_an_error() {
        let deps = bundle();
        assert_eq!(deps.resolve("System.Drawing"), None);
        assert!(BundledDependencies::new().is_empty());
    }

    #[test]
    fn test_materialize() {
        let dir = std::env::temp_dir().join(format!("aerial-libs-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let deps = bundle();

        let path = deps.materialize("Vlc.DotNet.Core", &dir).unwrap().unwrap();
        assert_eq!(fs::read(&path).unwrap(), PAYLOAD);
        assert_eq!(deps.materialize("Other", &dir).unwrap(), None);

        let _ = fs::remove_dir_all(&dir);
    }
}
