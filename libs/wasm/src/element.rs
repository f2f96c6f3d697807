//! Stateful element wrapper mirroring the custom element's attribute
//! lifecycle.

use angled_geometry::{recompute, AngledAttributes, AngledConfig, AttributeResult, ViewportContext, ATTRIBUTE_NAMES};
use wasm_bindgen::prelude::*;

use crate::layout_handle::LayoutHandle;

/// Attribute state of one `<angled-element>`.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // static get observedAttributes() { return AngledElement.observed_attributes(); }
/// // attributeChangedCallback(name, _old, value) {
/// //   value === null ? this.state.remove_attribute(name) : this.state.set_attribute(name, value);
/// //   this.render();
/// // }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct AngledElement {
    attributes: AngledAttributes,
    config: AngledConfig,
}

#[wasm_bindgen]
impl AngledElement {
    /// Creates an element with no attributes and the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the attribute names the element reacts to.
    pub fn observed_attributes() -> Vec<String> {
        ATTRIBUTE_NAMES.iter().map(|name| name.to_string()).collect()
    }

    /// Applies an attribute change.
    ///
    /// # Errors
    /// Returns a JavaScript error for attributes the element does not observe.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), JsValue> {
        self.set_attribute_internal(name, Some(value))
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Applies an attribute removal.
    ///
    /// # Errors
    /// Returns a JavaScript error for attributes the element does not observe.
    pub fn remove_attribute(&mut self, name: &str) -> Result<(), JsValue> {
        self.set_attribute_internal(name, None)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Computes the layout for the element's current rendered width.
    pub fn render(&self, width: f64) -> LayoutHandle {
        let viewport = ViewportContext::from_width(width, &self.config);
        LayoutHandle::from_layout(recompute(&self.attributes, viewport, &self.config))
    }
}

impl AngledElement {
    /// Creates an element with a custom configuration.
    pub fn with_config(config: AngledConfig) -> Self {
        Self {
            attributes: AngledAttributes::default(),
            config,
        }
    }

    /// Host-only variant of `set_attribute`/`remove_attribute` returning the
    /// Rust error type.
    pub fn set_attribute_internal(&mut self, name: &str, value: Option<&str>) -> AttributeResult<()> {
        self.attributes.set_attribute(name, value)
    }

    /// Borrows the current attribute state.
    pub fn attributes(&self) -> &AngledAttributes {
        &self.attributes
    }
}
