//! Error types for the render crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading textures and texture atlases.
#[derive(Error, Debug)]
pub enum RenderError {
    /// File I/O error.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image file could not be decoded.
    #[error("failed to decode image '{path}': {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A texture atlas file is malformed.
    #[error("atlas parse error in '{path}' at line {line}: {message}")]
    AtlasParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// A region refers to pixels outside of its page.
    #[error("region '{name}' in '{path}' lies outside its {page_width}x{page_height} page")]
    RegionOutOfBounds {
        path: PathBuf,
        name: String,
        page_width: u32,
        page_height: u32,
    },

    /// Invalid texture dimensions (zero width or height).
    #[error("invalid texture dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The texture has been disposed.
    #[error("texture '{0}' has been disposed")]
    Disposed(String),
}

impl RenderError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an atlas parse error.
    pub fn atlas_parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::AtlasParse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
