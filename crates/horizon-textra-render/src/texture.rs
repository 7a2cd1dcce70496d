//! CPU-side texture pages.
//!
//! A [`Texture`] owns the decoded RGBA pixels of one font or atlas page. Fonts
//! share pages through `Arc<Texture>`, so cloning a font never duplicates pixel
//! data. [`Texture::dispose`] drops the pixels and marks the page unusable;
//! every holder of the `Arc` observes the disposal.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use image::RgbaImage;
use parking_lot::Mutex;

use crate::error::{RenderError, RenderResult};

/// Global texture ID counter.
static TEXTURE_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Sampling filter applied when a texture is drawn scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureFilter {
    /// Nearest-neighbour sampling; crisp pixel art.
    #[default]
    Nearest,
    /// Bilinear sampling.
    Linear,
    /// Mipmapped, driver-chosen.
    MipMap,
    MipMapNearestNearest,
    MipMapLinearNearest,
    MipMapNearestLinear,
    MipMapLinearLinear,
}

impl TextureFilter {
    /// Whether sampling with this filter needs mipmaps.
    pub fn is_mipmap(self) -> bool {
        !matches!(self, Self::Nearest | Self::Linear)
    }
}

impl FromStr for TextureFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "linear" => Ok(Self::Linear),
            "mipmap" => Ok(Self::MipMap),
            "mipmapnearestnearest" => Ok(Self::MipMapNearestNearest),
            "mipmaplinearnearest" => Ok(Self::MipMapLinearNearest),
            "mipmapnearestlinear" => Ok(Self::MipMapNearestLinear),
            "mipmaplinearlinear" => Ok(Self::MipMapLinearLinear),
            other => Err(format!("unknown texture filter '{other}'")),
        }
    }
}

/// Minification and magnification filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FilterPair {
    pub min: TextureFilter,
    pub mag: TextureFilter,
}

impl FilterPair {
    /// Same filter for both directions.
    pub const fn uniform(filter: TextureFilter) -> Self {
        Self {
            min: filter,
            mag: filter,
        }
    }

    /// Bilinear both ways, the usual choice for distance-field fonts.
    pub const LINEAR: Self = Self::uniform(TextureFilter::Linear);
    /// Nearest both ways, the usual choice for pixel fonts.
    pub const NEAREST: Self = Self::uniform(TextureFilter::Nearest);
}

/// A decoded texture page.
pub struct Texture {
    id: usize,
    name: String,
    source: Option<PathBuf>,
    width: u32,
    height: u32,
    pixels: Mutex<Option<RgbaImage>>,
    filter: Mutex<FilterPair>,
    disposed: AtomicBool,
}

impl fmt::Debug for Texture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Texture")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

impl Texture {
    /// Load and decode an image file.
    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| match source {
                image::ImageError::IoError(err) => RenderError::io(path, err),
                source => RenderError::Image {
                    path: path.to_path_buf(),
                    source,
                },
            })?
            .to_rgba8();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        tracing::debug!(
            target: "horizon_textra_render",
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "texture loaded"
        );
        let mut texture = Self::from_image(name, image)?;
        texture.source = Some(path.to_path_buf());
        Ok(texture)
    }

    /// Wrap an already decoded image.
    pub fn from_image(name: impl Into<String>, image: RgbaImage) -> RenderResult<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            id: TEXTURE_ID_COUNTER.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            source: None,
            width,
            height,
            pixels: Mutex::new(Some(image)),
            filter: Mutex::new(FilterPair::default()),
            disposed: AtomicBool::new(false),
        })
    }

    /// Get the unique ID of this texture.
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// The file name (or caller-supplied name) of this page.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The file this page was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Page width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Page height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Current filter pair.
    pub fn filter(&self) -> FilterPair {
        *self.filter.lock()
    }

    /// Change the sampling filter.
    pub fn set_filter(&self, filter: FilterPair) {
        *self.filter.lock() = filter;
    }

    /// Read one pixel as RGBA.
    pub fn pixel(&self, x: u32, y: u32) -> RenderResult<[u8; 4]> {
        let pixels = self.pixels.lock();
        let image = pixels
            .as_ref()
            .ok_or_else(|| RenderError::Disposed(self.name.clone()))?;
        if x >= self.width || y >= self.height {
            return Err(RenderError::InvalidDimensions { width: x, height: y });
        }
        Ok(image.get_pixel(x, y).0)
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Release the pixel data. Idempotent.
    pub fn dispose(&self) {
        if !self.disposed.swap(true, Ordering::SeqCst) {
            self.pixels.lock().take();
            tracing::trace!(target: "horizon_textra_render", name = %self.name, "texture disposed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_fn(w, h, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgba([255, 255, 255, 255])
            } else {
                image::Rgba([0, 0, 0, 0])
            }
        })
    }

    #[test]
    fn test_texture_from_image() {
        let texture = Texture::from_image("page", checker(4, 2)).unwrap();
        assert_eq!((texture.width(), texture.height()), (4, 2));
        assert_eq!(texture.pixel(0, 0).unwrap(), [255, 255, 255, 255]);
        assert_eq!(texture.filter(), FilterPair::NEAREST);
    }

    #[test]
    fn test_zero_sized_texture_rejected() {
        let result = Texture::from_image("empty", RgbaImage::new(0, 4));
        assert!(matches!(
            result,
            Err(RenderError::InvalidDimensions { width: 0, height: 4 })
        ));
    }

    #[test]
    fn test_dispose_releases_pixels() {
        let texture = Texture::from_image("page", checker(2, 2)).unwrap();
        texture.dispose();
        texture.dispose();
        assert!(texture.is_disposed());
        assert!(matches!(texture.pixel(0, 0), Err(RenderError::Disposed(_))));
    }

    #[test]
    fn test_texture_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.png");
        checker(8, 8).save(&path).unwrap();

        let texture = Texture::from_file(&path).unwrap();
        assert_eq!(texture.name(), "page.png");
        assert_eq!(texture.source(), Some(path.as_path()));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Texture::from_file("does/not/exist.png");
        assert!(matches!(result, Err(RenderError::Io { .. })));
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("Linear".parse::<TextureFilter>(), Ok(TextureFilter::Linear));
        assert_eq!(
            "MipMapLinearLinear".parse::<TextureFilter>(),
            Ok(TextureFilter::MipMapLinearLinear)
        );
        assert!("Blurry".parse::<TextureFilter>().is_err());
        assert!(TextureFilter::MipMap.is_mipmap());
    }
}
