//! Dominant-colour palettes from hue bands.
//!
//! Every pixel is converted to 8-bit HSV and dropped into one of eight fixed
//! hue bands (red, orange, yellow, green, cyan, blue, purple, pink). The mean
//! colour of each band is tracked, and the `k` most populated bands make up
//! the palette.
//!
//! ```
//! use hue_band_palette::{Sample, compute_palette};
//!
//! let pixels = vec![Sample::new(120, 255, 255); 4];
//! let palette = compute_palette(pixels, 1);
//! assert_eq!(palette[0].hex, "0000FF");
//! ```

pub mod band;
pub mod builder;
pub mod color;
pub mod error;
pub mod image_io;
pub mod select;
pub mod stats;
pub mod wasm;

pub use band::Band;
pub use builder::{PaletteBuilder, PaletteEntry, compute_palette};
pub use color::{Sample, hex_string, hsv_to_rgb};
pub use error::{PaletteError, Result};
pub use image_io::{analyze_bytes, decode_image, extract_palette_bytes, hsv_samples};
pub use select::select_top_k_by_key;
pub use stats::{BandStats, BandTable};
