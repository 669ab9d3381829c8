//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core detedge
//! grids, handling the conversion between Rust and JavaScript data
//! representations.

use detedge_core::{GridError, Image};
use wasm_bindgen::prelude::*;

/// A single-channel 8-bit grayscale image for JavaScript.
///
/// Colour-to-grayscale conversion happens on the JavaScript side; this type
/// carries one byte per pixel in row-major order.
#[wasm_bindgen]
pub struct JsGrayImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsGrayImage {
    /// Create a new JsGrayImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - Grayscale pixel data (1 byte per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsGrayImage {
        JsGrayImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns grayscale pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}

impl JsGrayImage {
    /// Convert to a core floating-point image.
    ///
    /// Fails if the pixel buffer does not hold `width * height` bytes.
    pub(crate) fn to_image(&self) -> Result<Image, GridError> {
        Image::from_u8(self.height as usize, self.width as usize, &self.pixels)
    }
}
