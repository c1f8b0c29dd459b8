use std::borrow::Cow;
use std::path::Path;

use iced::widget::image::Handle as ImageHandle;
use image::{DynamicImage, RgbaImage, imageops};

use crate::error::SideMenuError;

pub(crate) const AIRPLANE: &[u8] = include_bytes!("../assets/airplane.png");

/// Longest edge the artwork is reduced to before blurring.
const BLUR_SOURCE_EDGE: u32 = 256;

/// Pre-rendered artwork painted behind the menu list.
///
/// Blurring is done once when the art is loaded; rendering only scales the
/// resulting bitmap to fill the widget.
#[derive(Debug, Clone, Default)]
pub struct BackgroundArt {
    handle: Option<ImageHandle>,
}

impl BackgroundArt {
    /// Art without an image: only the base color is painted.
    pub fn solid() -> Self {
        Self { handle: None }
    }

    /// Load `name` and blur it by `blur_radius` logical pixels.
    ///
    /// `name` is either a built-in image (`"airplane"`) or a path to a PNG
    /// file.
    pub fn load(name: &str, blur_radius: f32) -> Result<Self, SideMenuError> {
        let bytes = source_bytes(name)?;
        let pixels = blurred(&bytes, blur_radius)?;
        let (width, height) = pixels.dimensions();
        Ok(Self {
            handle: Some(ImageHandle::from_rgba(
                width,
                height,
                pixels.into_raw(),
            )),
        })
    }

    /// Load the art, falling back to [`BackgroundArt::solid`] on error.
    pub fn load_or_solid(name: &str, blur_radius: f32) -> Self {
        match Self::load(name, blur_radius) {
            Ok(art) => art,
            Err(err) => {
                log::warn!(
                    "side menu background `{name}` unavailable, \
                     using solid color: {err}"
                );
                Self::solid()
            },
        }
    }

    pub fn handle(&self) -> Option<&ImageHandle> {
        self.handle.as_ref()
    }
}

fn source_bytes(name: &str) -> Result<Cow<'static, [u8]>, SideMenuError> {
    if name == crate::settings::DEFAULT_BACKGROUND_IMAGE {
        return Ok(Cow::Borrowed(AIRPLANE));
    }

    let path = Path::new(name);
    if path.is_file() {
        return Ok(Cow::Owned(std::fs::read(path)?));
    }

    Err(SideMenuError::UnknownImage {
        name: name.to_string(),
    })
}

fn blurred(bytes: &[u8], blur_radius: f32) -> Result<RgbaImage, SideMenuError> {
    let source = image::load_from_memory(bytes)?;
    let (width, height) = (source.width(), source.height());
    let reduced: DynamicImage = if width.max(height) > BLUR_SOURCE_EDGE {
        source.thumbnail(BLUR_SOURCE_EDGE, BLUR_SOURCE_EDGE)
    } else {
        source
    };

    let ratio = if width == 0 {
        1.0
    } else {
        reduced.width() as f32 / width as f32
    };
    let sigma = blur_radius.max(0.0) * 0.5 * ratio;
    let pixels = reduced.to_rgba8();

    if sigma <= f32::EPSILON {
        Ok(pixels)
    } else {
        Ok(imageops::blur(&pixels, sigma))
    }
}
