//! Spectral filter WASM bindings.
//!
//! This module exposes the frequency-domain filter to JavaScript. A filter
//! selection is passed as a plain object:
//!
//! ```typescript
//! { mode: "low_pass" | "high_pass" | "band_pass", radius: number, outer_radius?: number, relative?: boolean }
//! ```
//!
//! With `relative: true`, radii are percentages of the smaller image
//! dimension, matching a 0-100 slider.

use crate::types::JsGrayImage;
use detedge_core::display::{normalize_to_u8, to_u8_saturating};
use detedge_core::{FilterKind, FilterOutput, Image, Shape, SpectralFilter};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Filter variant as named from JavaScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsFilterMode {
    LowPass,
    HighPass,
    BandPass,
}

/// JavaScript-compatible filter selection.
///
/// For band-pass, `radius` is the inner radius and `outer_radius` is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsFilterSpec {
    pub mode: JsFilterMode,
    pub radius: f64,
    #[serde(default)]
    pub outer_radius: Option<f64>,
    /// Interpret radii as percent of `min(width, height)`.
    #[serde(default)]
    pub relative: bool,
}

impl JsFilterSpec {
    /// Resolve into a core filter selection in pixel units for `shape`.
    pub(crate) fn to_kind(&self, shape: Shape) -> Result<FilterKind, String> {
        let kind = match self.mode {
            JsFilterMode::LowPass => FilterKind::LowPass {
                radius: self.radius,
            },
            JsFilterMode::HighPass => FilterKind::HighPass {
                radius: self.radius,
            },
            JsFilterMode::BandPass => {
                let outer = self
                    .outer_radius
                    .ok_or_else(|| "band_pass requires outer_radius".to_string())?;
                FilterKind::BandPass {
                    inner: self.radius,
                    outer,
                }
            }
        };

        Ok(if self.relative {
            kind.to_pixels(shape)
        } else {
            kind
        })
    }
}

/// Filter result accessible from JavaScript.
///
/// Holds the filtered image and both diagnostic spectra as `f64` grids of
/// the input's size, plus 8-bit conversions for drawing to a canvas.
#[wasm_bindgen]
pub struct JsFilterResult {
    width: u32,
    height: u32,
    filtered: Image,
    spectrum: Image,
    masked_spectrum: Image,
}

#[wasm_bindgen]
impl JsFilterResult {
    /// Get the width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Filtered image as Float64Array (unclamped).
    pub fn filtered(&self) -> Vec<f64> {
        self.filtered.as_slice().to_vec()
    }

    /// Spectrum before masking as Float64Array. May contain -Infinity.
    pub fn spectrum(&self) -> Vec<f64> {
        self.spectrum.as_slice().to_vec()
    }

    /// Spectrum after masking as Float64Array. Zeroed bins are -Infinity.
    pub fn masked_spectrum(&self) -> Vec<f64> {
        self.masked_spectrum.as_slice().to_vec()
    }

    /// Filtered image cast to bytes (truncated and clamped to 0-255).
    pub fn filtered_u8(&self) -> Vec<u8> {
        to_u8_saturating(&self.filtered).into_vec()
    }

    /// Spectrum before masking, cast to bytes (truncated and clamped).
    pub fn spectrum_u8(&self) -> Vec<u8> {
        to_u8_saturating(&self.spectrum).into_vec()
    }

    /// Spectrum after masking, cast to bytes (truncated and clamped).
    pub fn masked_spectrum_u8(&self) -> Vec<u8> {
        to_u8_saturating(&self.masked_spectrum).into_vec()
    }

    /// Spectrum before masking, stretched to the full 0-255 range.
    pub fn spectrum_normalized(&self) -> Vec<u8> {
        normalize_to_u8(&self.spectrum).into_vec()
    }

    /// Spectrum after masking, stretched to the full 0-255 range.
    pub fn masked_spectrum_normalized(&self) -> Vec<u8> {
        normalize_to_u8(&self.masked_spectrum).into_vec()
    }
}

impl JsFilterResult {
    fn from_output(width: u32, height: u32, output: FilterOutput) -> Self {
        Self {
            width,
            height,
            filtered: output.filtered,
            spectrum: output.spectrum,
            masked_spectrum: output.masked_spectrum,
        }
    }
}

/// Run the filter natively; errors are rendered to strings for JavaScript.
fn run_filter(image: &JsGrayImage, kind: FilterKind) -> Result<JsFilterResult, String> {
    let core = image.to_image().map_err(|e| e.to_string())?;
    let output = SpectralFilter::default()
        .detect_edges(&core, kind)
        .map_err(|e| e.to_string())?;
    Ok(JsFilterResult::from_output(
        image.width(),
        image.height(),
        output,
    ))
}

fn image_shape(width: u32, height: u32) -> Shape {
    Shape::new(height as usize, width as usize)
}

/// Filter an image with a mask selected from JavaScript.
///
/// # Arguments
/// * `image` - Grayscale source image
/// * `spec` - Filter selection object (see module docs)
///
/// # Example (TypeScript)
/// ```typescript
/// const result = detect_edges(image, { mode: "high_pass", radius: 9, relative: true });
/// ctx.putImageData(toImageData(result.filtered_u8(), result.width, result.height), 0, 0);
/// result.free();
/// ```
#[wasm_bindgen]
pub fn detect_edges(image: &JsGrayImage, spec: JsValue) -> Result<JsFilterResult, JsValue> {
    let spec: JsFilterSpec = serde_wasm_bindgen::from_value(spec)
        .map_err(|e| JsValue::from_str(&format!("Invalid filter spec: {}", e)))?;
    let kind = spec
        .to_kind(image_shape(image.width(), image.height()))
        .map_err(|e| JsValue::from_str(&e))?;
    run_filter(image, kind).map_err(|e| JsValue::from_str(&e))
}

/// Low-pass filter with a radius in pixels.
#[wasm_bindgen]
pub fn low_pass_filter(image: &JsGrayImage, radius: f64) -> Result<JsFilterResult, JsValue> {
    run_filter(image, FilterKind::LowPass { radius }).map_err(|e| JsValue::from_str(&e))
}

/// High-pass filter with a radius in pixels.
#[wasm_bindgen]
pub fn high_pass_filter(image: &JsGrayImage, radius: f64) -> Result<JsFilterResult, JsValue> {
    run_filter(image, FilterKind::HighPass { radius }).map_err(|e| JsValue::from_str(&e))
}

/// Band-pass filter with inner and outer radii in pixels.
#[wasm_bindgen]
pub fn band_pass_filter(
    image: &JsGrayImage,
    inner_radius: f64,
    outer_radius: f64,
) -> Result<JsFilterResult, JsValue> {
    let kind = FilterKind::BandPass {
        inner: inner_radius,
        outer: outer_radius,
    };
    run_filter(image, kind).map_err(|e| JsValue::from_str(&e))
}

/// Build the 0/1 frequency mask for a filter selection, row-major.
///
/// Useful for drawing the mask next to the spectra.
#[wasm_bindgen]
pub fn build_mask(width: u32, height: u32, spec: JsValue) -> Result<Vec<u8>, JsValue> {
    let spec: JsFilterSpec = serde_wasm_bindgen::from_value(spec)
        .map_err(|e| JsValue::from_str(&format!("Invalid filter spec: {}", e)))?;
    let shape = image_shape(width, height);
    let kind = spec.to_kind(shape).map_err(|e| JsValue::from_str(&e))?;
    Ok(kind.build_mask(shape).into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(mode: JsFilterMode, radius: f64, outer: Option<f64>, relative: bool) -> JsFilterSpec {
        JsFilterSpec {
            mode,
            radius,
            outer_radius: outer,
            relative,
        }
    }

    #[test]
    fn test_spec_to_kind_pixels() {
        let shape = Shape::new(100, 200);
        let kind = spec(JsFilterMode::LowPass, 4.0, None, false)
            .to_kind(shape)
            .unwrap();
        assert_eq!(kind, FilterKind::LowPass { radius: 4.0 });
    }

    #[test]
    fn test_spec_to_kind_relative() {
        let shape = Shape::new(100, 200);
        let kind = spec(JsFilterMode::BandPass, 5.0, Some(12.0), true)
            .to_kind(shape)
            .unwrap();
        assert_eq!(
            kind,
            FilterKind::BandPass {
                inner: 5.0,
                outer: 12.0
            }
        );

        let kind = spec(JsFilterMode::HighPass, 9.0, None, true)
            .to_kind(Shape::new(50, 80))
            .unwrap();
        assert_eq!(kind, FilterKind::HighPass { radius: 4.5 });
    }

    #[test]
    fn test_band_pass_requires_outer() {
        let err = spec(JsFilterMode::BandPass, 1.0, None, false)
            .to_kind(Shape::new(8, 8))
            .unwrap_err();
        assert!(err.contains("outer_radius"));
    }

    #[test]
    fn test_run_filter_outputs_match_size() {
        let image = JsGrayImage::new(6, 4, vec![100u8; 24]);
        let result = run_filter(&image, FilterKind::LowPass { radius: 1.0 }).unwrap();

        assert_eq!(result.width(), 6);
        assert_eq!(result.height(), 4);
        assert_eq!(result.filtered().len(), 24);
        assert_eq!(result.spectrum().len(), 24);
        assert_eq!(result.masked_spectrum().len(), 24);
        assert_eq!(result.filtered_u8().len(), 24);
    }

    #[test]
    fn test_run_filter_constant_image_low_pass() {
        let image = JsGrayImage::new(4, 4, vec![100u8; 16]);
        let result = run_filter(&image, FilterKind::LowPass { radius: 0.0 }).unwrap();

        // Rounding may land just below 100, which truncates to 99.
        assert!(result.filtered_u8().iter().all(|&v| v == 99 || v == 100));
    }

    #[test]
    fn test_run_filter_masked_spectrum_bytes() {
        let image = JsGrayImage::new(8, 8, (0..64).map(|i| i as u8).collect());
        let result = run_filter(&image, FilterKind::LowPass { radius: 1.0 }).unwrap();

        // Zeroed bins are -inf and cast to 0.
        let kept = result.masked_spectrum_u8().iter().filter(|&&v| v > 0).count();
        assert!(kept <= 5);
        assert_eq!(result.masked_spectrum_normalized().len(), 64);
    }

    #[test]
    fn test_run_filter_bad_buffer() {
        let image = JsGrayImage::new(4, 4, vec![0u8; 10]);
        let err = run_filter(&image, FilterKind::LowPass { radius: 1.0 })
            .err()
            .unwrap();
        assert!(err.contains("expected 16"));
    }

    #[test]
    fn test_run_filter_empty_image() {
        let image = JsGrayImage::new(0, 0, vec![]);
        let err = run_filter(&image, FilterKind::HighPass { radius: 1.0 })
            .err()
            .unwrap();
        assert!(err.contains("empty"));
    }
}

/// WASM-specific tests that require JsValue.
///
/// These tests pass filter specs as JavaScript objects and can only run on
/// wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn to_js(spec: &JsFilterSpec) -> JsValue {
        serde_wasm_bindgen::to_value(spec).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_detect_edges_from_js_spec() {
        let image = JsGrayImage::new(8, 8, vec![50u8; 64]);
        let spec = JsFilterSpec {
            mode: JsFilterMode::HighPass,
            radius: 9.0,
            outer_radius: None,
            relative: true,
        };
        let result = detect_edges(&image, to_js(&spec)).unwrap();
        assert_eq!(result.width(), 8);
        assert_eq!(result.filtered().len(), 64);
    }

    #[wasm_bindgen_test]
    fn test_detect_edges_rejects_garbage() {
        let image = JsGrayImage::new(2, 2, vec![0u8; 4]);
        let invalid = serde_wasm_bindgen::to_value(&"not a spec").unwrap();
        assert!(detect_edges(&image, invalid).is_err());
    }

    #[wasm_bindgen_test]
    fn test_build_mask_from_js_spec() {
        let spec = JsFilterSpec {
            mode: JsFilterMode::LowPass,
            radius: 0.0,
            outer_radius: None,
            relative: false,
        };
        let mask = build_mask(5, 5, to_js(&spec)).unwrap();
        assert_eq!(mask.iter().filter(|&&v| v == 1).count(), 1);
        assert_eq!(mask[2 * 5 + 2], 1);
    }

    #[wasm_bindgen_test]
    fn test_band_pass_filter_binding() {
        let image = JsGrayImage::new(8, 8, (0..64).map(|i| i as u8).collect());
        let result = band_pass_filter(&image, 1.0, 3.0).unwrap();
        assert_eq!(result.height(), 8);
    }
}
