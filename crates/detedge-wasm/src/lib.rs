//! detedge WASM - WebAssembly bindings for detedge
//!
//! This crate provides WASM bindings to expose the detedge-core frequency
//! filter to a JavaScript/TypeScript front end.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for grayscale image data
//! - `filter` - Low/high/band-pass filtering and mask construction
//!
//! # Usage
//!
//! ```typescript
//! import init, { detect_edges, JsGrayImage } from '@detedge/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = new JsGrayImage(width, height, grayBytes);
//! const result = detect_edges(image, { mode: "low_pass", radius: 9, relative: true });
//! console.log(`Filtered ${result.width}x${result.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod filter;
mod types;

// Re-export public types
pub use filter::{
    band_pass_filter, build_mask, detect_edges, high_pass_filter, low_pass_filter,
    JsFilterMode, JsFilterResult, JsFilterSpec,
};
pub use types::JsGrayImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
