//! # Layout Handle
//!
//! WASM-friendly wrapper for a computed layout that can be handed to
//! JavaScript.

use angled_geometry::AngledLayout;
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

/// A computed layout, ready to be applied to the element.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const layout = element.render(this.getBoundingClientRect().width);
///
/// this.style.clipPath = layout.clip_path();
/// this.style.setProperty("--angled-padding-top", `${layout.padding_top}px`);
/// this.style.setProperty("--angled-padding-bottom", `${layout.padding_bottom}px`);
///
/// // Children that should sit clear of the slant
/// header.style.marginTop = `${layout.margin_top}px`;
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct LayoutHandle {
    layout: AngledLayout,
}

#[wasm_bindgen]
impl LayoutHandle {
    /// Returns the CSS `polygon()` value for `clip-path`.
    pub fn clip_path(&self) -> String {
        self.layout.clip_path.to_css()
    }

    /// Returns the element's top padding in pixels.
    #[wasm_bindgen(getter)]
    pub fn padding_top(&self) -> f64 {
        self.layout.padding_top_px()
    }

    /// Returns the element's bottom padding in pixels.
    #[wasm_bindgen(getter)]
    pub fn padding_bottom(&self) -> f64 {
        self.layout.padding_bottom_px()
    }

    /// Returns the top margin for children kept clear of the slant.
    #[wasm_bindgen(getter)]
    pub fn margin_top(&self) -> f64 {
        self.layout.top.inset_px()
    }

    /// Returns the bottom margin for children kept clear of the slant.
    #[wasm_bindgen(getter)]
    pub fn margin_bottom(&self) -> f64 {
        self.layout.bottom.inset_px()
    }

    /// Returns true if the layout was computed for a mobile width.
    #[wasm_bindgen(getter)]
    pub fn is_mobile(&self) -> bool {
        self.layout.viewport.is_mobile
    }

    /// Converts the layout to a plain JavaScript object.
    ///
    /// The object has a `clipPath` key plus one key per custom property, so
    /// it can be posted between a worker and the main thread.
    pub fn to_js_object(&self) -> Result<JsValue, JsValue> {
        let obj = Object::new();
        Reflect::set(&obj, &JsValue::from_str("clipPath"), &JsValue::from_str(&self.clip_path()))?;
        for (name, value) in self.layout.custom_properties() {
            Reflect::set(&obj, &JsValue::from_str(name), &JsValue::from_str(&value))?;
        }
        Ok(JsValue::from(obj))
    }
}

impl LayoutHandle {
    /// Wraps a computed layout.
    pub fn from_layout(layout: AngledLayout) -> Self {
        Self { layout }
    }

    /// Borrows the underlying layout.
    pub fn layout(&self) -> &AngledLayout {
        &self.layout
    }
}
