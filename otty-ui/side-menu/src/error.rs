use thiserror::Error;

/// Errors emitted while preparing side menu settings and artwork.
#[derive(Debug, Error)]
pub enum SideMenuError {
    /// Reading an image or config file failed.
    #[error("side menu IO failed")]
    Io(#[from] std::io::Error),
    /// Background image bytes could not be decoded.
    #[error("failed to decode background image")]
    Decode(#[from] image::ImageError),
    /// Config JSON could not be parsed.
    #[error("side menu config JSON failed")]
    Json(#[from] serde_json::Error),
    /// Neither a built-in image nor an existing file has this name.
    #[error("unknown background image `{name}`")]
    UnknownImage { name: String },
    /// A color string is not a valid hex color.
    #[error("invalid color `{value}`")]
    InvalidColor { value: String },
    /// A field value did not pass validation.
    #[error("validation error: {message}")]
    Validation { message: String },
}
