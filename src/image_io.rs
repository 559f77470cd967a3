//! Decoding images and turning their pixels into HSV samples.

use image::{DynamicImage, GenericImageView, imageops::FilterType};
use palette::Srgb;

use crate::builder::{PaletteBuilder, PaletteEntry};
use crate::color::Sample;
use crate::error::{PaletteError, Result};

/// Decode an encoded image (PNG, JPEG, ...) held in memory.
pub fn decode_image(input: &[u8]) -> Result<DynamicImage> {
    let img = image::load_from_memory(input)?;
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(PaletteError::EmptyImage);
    }
    Ok(img)
}

/// Shrink `img` so its longest side is `scale`, nearest-neighbour.
/// Images already within `scale` are returned as-is.
pub fn downscale(img: DynamicImage, scale: u32) -> DynamicImage {
    let (orig_w, orig_h) = img.dimensions();
    let max_side = orig_w.max(orig_h);
    if scale == 0 || max_side <= scale {
        return img;
    }
    let ratio = scale as f32 / max_side as f32;
    let w = ((orig_w as f32) * ratio).round().max(1.0) as u32;
    let h = ((orig_h as f32) * ratio).round().max(1.0) as u32;
    DynamicImage::ImageRgba8(image::imageops::resize(&img, w, h, FilterType::Nearest))
}

/// One HSV sample per pixel, row-major. Alpha is ignored.
pub fn hsv_samples(img: &DynamicImage) -> impl Iterator<Item = Sample> + '_ {
    img.pixels().map(|(_, _, px)| {
        let [r, g, b, _] = px.0;
        Sample::from_rgb(Srgb::new(r, g, b))
    })
}

/// Decode `input` and accumulate every pixel into hue bands.
pub fn analyze_bytes(input: &[u8], downscale_to: Option<u32>) -> Result<PaletteBuilder> {
    let img = decode_image(input)?;
    let working_img = match downscale_to {
        Some(scale) => downscale(img, scale),
        None => img,
    };

    let builder: PaletteBuilder = hsv_samples(&working_img).collect();
    tracing::debug!(
        width = working_img.width(),
        height = working_img.height(),
        counts = ?builder.counts(),
        "accumulated hue bands"
    );
    Ok(builder)
}

/// Decode `input` and return its `n_colors` dominant hue bands.
pub fn extract_palette_bytes(
    input: &[u8],
    n_colors: usize,
    downscale_to: Option<u32>,
) -> Result<Vec<PaletteEntry>> {
    analyze_bytes(input, downscale_to)?.build(n_colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    fn png(img: RgbImage) -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut std::io::Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        assert!(matches!(
            decode_image(b"definitely not an image"),
            Err(PaletteError::Decode(_))
        ));
    }

    #[test]
    fn zero_sized_image_is_rejected() {
        assert!(matches!(
            decode_image(b"P6\n0 0\n255\n"),
            Err(PaletteError::EmptyImage)
        ));
        assert!(matches!(
            decode_image(b"P6\n0 4\n255\n"),
            Err(PaletteError::EmptyImage)
        ));
        assert!(matches!(
            analyze_bytes(b"P6\n0 0\n255\n", None),
            Err(PaletteError::EmptyImage)
        ));
    }

    #[test]
    fn samples_are_row_major() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 0, 255]));
        let samples: Vec<Sample> = hsv_samples(&DynamicImage::ImageRgb8(img)).collect();
        assert_eq!(samples, vec![Sample::new(0, 255, 255), Sample::new(120, 255, 255)]);
    }

    #[test]
    fn downscale_keeps_aspect_ratio() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(40, 20));
        let small = downscale(img, 10);
        assert_eq!(small.dimensions(), (10, 5));

        let tiny = DynamicImage::ImageRgb8(RgbImage::new(4, 2));
        assert_eq!(downscale(tiny, 10).dimensions(), (4, 2));
    }

    #[test]
    fn analyze_counts_every_pixel() {
        let img = RgbImage::from_pixel(3, 3, Rgb([0, 255, 0]));
        let builder = analyze_bytes(&png(img), None).unwrap();
        assert_eq!(builder.sample_count(), 9);
        assert_eq!(builder.stats(crate::Band::Green).count, 9);
    }
}
