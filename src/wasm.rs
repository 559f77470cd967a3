use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::image_io::analyze_bytes;

/// Extract the `n_colors` dominant hue bands from an encoded image.
///
/// Returns `{ palette: string[], counts: number[] }` where `palette` holds
/// `RRGGBB` strings in selection order and `counts` the raw pixel count of
/// every band, red through pink.
#[wasm_bindgen]
pub fn extract_palette(
    input: Vec<u8>,
    n_colors: usize,
    downscale: Option<u32>,
) -> Result<Object, JsValue> {
    let builder = analyze_bytes(&input, downscale).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let entries = builder
        .build(n_colors)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let palette_js = Array::new();
    for entry in &entries {
        palette_js.push(&JsValue::from_str(&entry.hex));
    }

    let counts_js = Array::new();
    for (_, count) in builder.counts() {
        counts_js.push(&JsValue::from_f64(count as f64));
    }

    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("palette"), &palette_js)?;
    Reflect::set(&result, &JsValue::from_str("counts"), &counts_js)?;

    Ok(result)
}
