//! Asset lookup.
//!
//! Files are searched in bundled storage first and local storage second. A
//! prefix is joined in front of every file name, so a whole catalog can live
//! in a subdirectory.

use std::path::{Path, PathBuf};

use crate::error::{FontError, Result};

/// Where font and atlas files are found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSource {
    prefix: String,
    bundled: PathBuf,
    local: PathBuf,
}

impl Default for AssetSource {
    fn default() -> Self {
        Self::new("assets", ".")
    }
}

impl AssetSource {
    /// Search `bundled` and then `local`, with no prefix.
    pub fn new(bundled: impl Into<PathBuf>, local: impl Into<PathBuf>) -> Self {
        Self {
            prefix: String::new(),
            bundled: bundled.into(),
            local: local.into(),
        }
    }

    /// Set the prefix, builder style.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.set_prefix(prefix);
        self
    }

    /// Set the prefix joined in front of every file name.
    ///
    /// A non-empty prefix always ends in `/`.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        let mut prefix = prefix.into().replace('\\', "/");
        if !prefix.is_empty() && !prefix.ends_with('/') {
            prefix.push('/');
        }
        self.prefix = prefix;
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn bundled_root(&self) -> &Path {
        &self.bundled
    }

    pub fn local_root(&self) -> &Path {
        &self.local
    }

    /// Every path checked for `file`, in search order.
    pub fn candidates(&self, file: &str) -> Vec<PathBuf> {
        let relative = format!("{}{}", self.prefix, file);
        let mut paths = vec![self.bundled.join(&relative)];
        let local = self.local.join(&relative);
        if local != paths[0] {
            paths.push(local);
        }
        paths
    }

    /// The first existing path for `file`.
    pub fn resolve(&self, file: &str) -> Result<PathBuf> {
        let searched = self.candidates(file);
        match searched.iter().find(|p| p.is_file()) {
            Some(found) => Ok(found.clone()),
            None => Err(FontError::MissingAsset {
                file: file.to_string(),
                searched,
            }),
        }
    }

    /// Resolve and read `file` as UTF-8.
    pub fn read_to_string(&self, file: &str) -> Result<(PathBuf, String)> {
        let path = self.resolve(file)?;
        let text = std::fs::read_to_string(&path).map_err(|e| FontError::io(&path, e))?;
        Ok((path, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_normalised() {
        let mut assets = AssetSource::new("a", "b");
        assets.set_prefix("fonts");
        assert_eq!(assets.prefix(), "fonts/");
        assets.set_prefix("fonts\\sub/");
        assert_eq!(assets.prefix(), "fonts/sub/");
        assets.set_prefix("");
        assert_eq!(assets.prefix(), "");
    }

    #[test]
    fn test_bundled_before_local() {
        let bundled = tempfile::tempdir().unwrap();
        let local = tempfile::tempdir().unwrap();
        std::fs::write(bundled.path().join("x.txt"), "bundled").unwrap();
        std::fs::write(local.path().join("x.txt"), "local").unwrap();
        std::fs::write(local.path().join("y.txt"), "local only").unwrap();

        let assets = AssetSource::new(bundled.path(), local.path());
        assert_eq!(assets.read_to_string("x.txt").unwrap().1, "bundled");
        assert_eq!(assets.read_to_string("y.txt").unwrap().1, "local only");
    }

    #[test]
    fn test_missing_names_both_paths() {
        let assets = AssetSource::new("nowhere-bundled", "nowhere-local").with_prefix("fonts");
        let err = assets.resolve("Twemoji.atlas").unwrap_err();
        match err {
            FontError::MissingAsset { file, searched } => {
                assert_eq!(file, "Twemoji.atlas");
                assert_eq!(
                    searched,
                    vec![
                        PathBuf::from("nowhere-bundled/fonts/Twemoji.atlas"),
                        PathBuf::from("nowhere-local/fonts/Twemoji.atlas"),
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
