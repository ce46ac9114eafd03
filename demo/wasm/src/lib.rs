use rect_coverage::{coverage_pixels as coverage, percent_of, Rect};
use wasm_bindgen::prelude::*;

/// Unpack `[l, t, r, b, l, t, r, b, ...]` into rectangles.
fn unpack_rects(flat: &[i32]) -> Result<Vec<Rect>, String> {
    if flat.len() % 4 != 0 {
        return Err(format!(
            "rectangle array length {} is not a multiple of 4",
            flat.len()
        ));
    }
    Ok(flat
        .chunks_exact(4)
        .map(|c| Rect::new(c[0], c[1], c[2], c[3]))
        .collect())
}

fn unpack_screen(flat: &[i32]) -> Result<Rect, String> {
    match flat {
        [l, t, r, b] => Ok(Rect::new(*l, *t, *r, *b)),
        _ => Err(format!("screen needs 4 values, got {}", flat.len())),
    }
}

fn js_error(msg: String) -> JsValue {
    js_sys::Error::new(&msg).into()
}

/// Count the screen pixels covered by the packed rectangles.
///
/// Returned as `f64` since JavaScript numbers cannot hold every `u64`;
/// counts up to 2^53 are exact.
#[wasm_bindgen]
pub fn coverage_pixels(screen: &[i32], rects: &[i32]) -> Result<f64, JsValue> {
    let screen = unpack_screen(screen).map_err(js_error)?;
    let rects = unpack_rects(rects).map_err(js_error)?;
    Ok(coverage(&screen, &rects) as f64)
}

/// Covered percentage of the screen, truncated. A zero-area screen is an
/// error.
#[wasm_bindgen]
pub fn coverage_percent(screen: &[i32], rects: &[i32]) -> Result<u32, JsValue> {
    let screen = unpack_screen(screen).map_err(js_error)?;
    let rects = unpack_rects(rects).map_err(js_error)?;
    percent_of(coverage(&screen, &rects), screen.area()).map_err(|e| js_error(e.to_string()))
}

/// Get the library version string.
#[wasm_bindgen]
pub fn version() -> String {
    format!("rect-coverage {}", env!("CARGO_PKG_VERSION"))
}
