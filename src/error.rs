//! Error types for palette extraction

use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, PaletteError>;

#[derive(Error, Debug)]
pub enum PaletteError {
    /// The input bytes could not be decoded as an image.
    #[error("unable to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The decoded image has no pixels to sample.
    #[error("image has no pixels")]
    EmptyImage,

    /// Requested palette size is outside `1..=max`.
    #[error("palette size {requested} is out of range (expected 1..={max})")]
    InvalidPaletteSize { requested: usize, max: usize },

    /// A band name did not match any known hue band.
    #[error("unknown hue band: {0:?}")]
    UnknownBand(String),
}
