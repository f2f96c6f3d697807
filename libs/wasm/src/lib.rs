//! WASM-facing entry points for the angled-edge geometry engine.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the `*_internal` helpers to
//! avoid depending on a JS host.
//!
//! ```
//! let json = angled_wasm::compute_layout_json_internal(r#"{"angle-top": "30"}"#, 1000.0).unwrap();
//! assert!(json.contains("polygon(0% 577.35"));
//! ```

use std::collections::BTreeMap;

use angled_geometry::{recompute, AngledAttributes, AngledConfig, AttributeError, ViewportContext};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::prelude::*;

mod element;
mod layout_handle;

pub use element::AngledElement;
pub use layout_handle::LayoutHandle;

/// Errors surfaced by the JSON entry point.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The attribute document is not valid JSON or not an object.
    #[error("invalid attribute JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// An attribute value has an unsupported JSON type.
    #[error("attribute '{0}' must be a string, number, boolean or null")]
    UnsupportedValue(String),
    /// The attribute is not observed by the element.
    #[error(transparent)]
    Attribute(#[from] AttributeError),
}

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "angled_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the inclusive mobile breakpoint in CSS pixels.
///
/// # Examples
/// ```
/// assert_eq!(angled_wasm::mobile_breakpoint(), 767.0);
/// ```
#[wasm_bindgen]
pub fn mobile_breakpoint() -> f64 {
    config::constants::MOBILE_BREAKPOINT_PX
}

/// Computes a layout from a JSON object of attributes and a width.
///
/// Attribute values may be strings, numbers or booleans; `null` and `false`
/// count as absent. The result is a JSON object with `clipPath`,
/// `paddingTop`, `paddingBottom`, `mobile` and `customProperties`.
///
/// # Errors
/// Returns a JavaScript error value containing a human-readable message
/// when the document is malformed or names an unknown attribute.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const layout = JSON.parse(compute_layout_json('{"angle-top": "4"}', el.clientWidth));
/// // el.style.clipPath = layout.clipPath;
/// ```
#[wasm_bindgen]
pub fn compute_layout_json(attributes_json: &str, width: f64) -> Result<String, JsValue> {
    compute_layout_json_internal(attributes_json, width).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutJson {
    clip_path: String,
    padding_top: f64,
    padding_bottom: f64,
    mobile: bool,
    custom_properties: BTreeMap<&'static str, String>,
}

/// Host-only helper behind [`compute_layout_json`].
///
/// # Examples
/// ```
/// let json = angled_wasm::compute_layout_json_internal("{}", 400.0).unwrap();
/// assert!(json.contains(r#""mobile":true"#));
/// ```
pub fn compute_layout_json_internal(attributes_json: &str, width: f64) -> Result<String, LayoutError> {
    let document: BTreeMap<String, Value> = serde_json::from_str(attributes_json)?;

    let mut attributes = AngledAttributes::default();
    for (name, value) in &document {
        let raw = match value {
            Value::Null | Value::Bool(false) => continue,
            Value::Bool(true) => String::new(),
            Value::String(text) => text.clone(),
            Value::Number(number) => number.to_string(),
            Value::Array(_) | Value::Object(_) => return Err(LayoutError::UnsupportedValue(name.clone())),
        };
        attributes.set_attribute(name, Some(&raw))?;
    }

    let config = AngledConfig::default();
    let layout = recompute(&attributes, ViewportContext::from_width(width, &config), &config);

    let json = LayoutJson {
        clip_path: layout.clip_path.to_css(),
        padding_top: layout.padding_top_px(),
        padding_bottom: layout.padding_bottom_px(),
        mobile: layout.viewport.is_mobile,
        custom_properties: layout.custom_properties().into_iter().collect(),
    };
    Ok(serde_json::to_string(&json)?)
}
