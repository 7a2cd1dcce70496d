//! Error types for the font crate.

use std::path::PathBuf;

use horizon_textra_render::RenderError;

use crate::distance_field::DistanceFieldType;

/// Result type alias for font operations.
pub type Result<T> = std::result::Result<T, FontError>;

/// Errors that can occur while looking up, loading or configuring fonts.
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// A font was requested with an empty name.
    #[error("font name must not be empty")]
    EmptyName,

    /// The name is not in the font catalog.
    #[error("unknown font '{0}'")]
    UnknownFont(String),

    /// The font's file format cannot provide the requested distance field.
    #[error("font '{name}' is not available as {variant}")]
    UnsupportedVariant {
        name: String,
        variant: DistanceFieldType,
    },

    /// A required asset was not found in any search location.
    #[error("missing asset '{file}' (searched: {})", display_paths(.searched))]
    MissingAsset { file: String, searched: Vec<PathBuf> },

    /// A font or atlas file is malformed.
    #[error("parse error in '{path}'{}: {message}", display_line(.line))]
    Parse {
        path: PathBuf,
        line: Option<usize>,
        message: String,
    },

    /// A JSON font description could not be decoded.
    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File I/O error.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Texture or atlas page error.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The metrics table is not valid TOML or has the wrong shape.
    #[error("invalid metrics table: {0}")]
    MetricsTable(#[from] toml::de::Error),

    /// A metrics entry holds a value that cannot be applied.
    #[error("invalid metrics for '{name}': {message}")]
    InvalidMetrics { name: String, message: String },

    /// Not enough private-use codepoints remain for an atlas.
    #[error("atlas '{atlas}' needs {needed} codepoints but only {available} remain")]
    AtlasCapacity {
        atlas: String,
        needed: usize,
        available: usize,
    },

    /// A font family was built from mismatched or too many members.
    #[error("invalid font family: {0}")]
    InvalidFamily(String),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_line(line: &Option<usize>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

impl FontError {
    /// Create a parse error.
    pub fn parse(path: impl Into<PathBuf>, line: Option<usize>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a metrics error.
    pub fn invalid_metrics(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidMetrics {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Whether this error means an asset file could not be found.
    pub fn is_missing_asset(&self) -> bool {
        match self {
            Self::MissingAsset { .. } => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            Self::Render(RenderError::Io { source, .. }) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
