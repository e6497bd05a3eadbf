//! WebAssembly module for the FarmArea map client
//!
//! Provides client-side computation for:
//! - Pointer-to-percentage coordinate conversion
//! - Polygon draft building while placing pins
//! - Overlay styling and label layout
//! - Hover/click hit testing

use wasm_bindgen::prelude::*;

use shared::draft::{PlaceOutcome, PolygonDraft};
use shared::geometry::{BoundingBox, Point, ViewportRect};
use shared::overlay::{
    fit_label_font_size, hit_test, polygon_style, render_areas, render_draft, OverlayArea,
};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Convert a pointer event position to the 0-100 percentage space, given
/// the map container's bounding rectangle. Returns `{x, y}` as JSON.
#[wasm_bindgen]
pub fn client_to_map_point(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
) -> Result<String, JsValue> {
    let rect = ViewportRect {
        left: rect_left,
        top: rect_top,
        width: rect_width,
        height: rect_height,
    };
    let point = Point::from_client(client_x, client_y, &rect);
    serde_json::to_string(&point).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compute the fill opacity for one polygon under the current hover state
#[wasm_bindgen]
pub fn area_fill_opacity(is_hovered: bool, any_hovered: bool) -> f64 {
    polygon_style(is_hovered, any_hovered).fill_opacity
}

/// Fit a label font size for a polygon, given its points and the glyph
/// count of the name. Returns 0 for a degenerate polygon.
#[wasm_bindgen]
pub fn label_font_size(points_json: &str, name_glyphs: usize) -> Result<f64, JsValue> {
    let points: Vec<Point> = serde_json::from_str(points_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid points JSON: {}", e)))?;

    Ok(BoundingBox::of(&points)
        .map(|bbox| fit_label_font_size(&bbox, name_glyphs))
        .unwrap_or(0.0))
}

/// Render the full overlay for the given areas and hover state. Takes
/// and returns JSON strings.
#[wasm_bindgen]
pub fn render_overlay(areas_json: &str, hovered_id: Option<String>) -> Result<String, JsValue> {
    let areas: Vec<OverlayArea> = serde_json::from_str(areas_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid areas JSON: {}", e)))?;

    let shapes = render_areas(&areas, hovered_id.as_deref());
    serde_json::to_string(&shapes).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Find the id of the area under the pointer, or null
#[wasm_bindgen]
pub fn area_at_point(
    areas_json: &str,
    x: f64,
    y: f64,
    draft_active: bool,
) -> Result<Option<String>, JsValue> {
    let areas: Vec<OverlayArea> = serde_json::from_str(areas_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid areas JSON: {}", e)))?;

    Ok(hit_test(&areas, Point::new(x, y), draft_active).map(str::to_string))
}

/// Polygon draft builder handle for the create-area flow
#[wasm_bindgen]
pub struct DraftBuilder {
    inner: PolygonDraft,
}

#[wasm_bindgen]
impl DraftBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: PolygonDraft::new(),
        }
    }

    /// Enter create mode with an empty draft
    pub fn begin(&mut self) {
        self.inner.begin();
    }

    /// Place a point. Returns the number of points now held; the caller
    /// should enable its confirm action at four.
    pub fn place(&mut self, x: f64, y: f64) -> usize {
        match self.inner.place(Point::new(x, y)) {
            PlaceOutcome::Accepted { placed } => placed,
            PlaceOutcome::Completed | PlaceOutcome::Ignored => self.inner.points().len(),
        }
    }

    /// Whether the draft holds four points and can be confirmed
    pub fn is_ready(&self) -> bool {
        self.inner.state() == shared::draft::DraftState::Ready
    }

    /// Whether the draft currently takes exclusive input priority
    pub fn is_active(&self) -> bool {
        self.inner.is_active()
    }

    /// Confirm the draft, returning the four points as JSON
    pub fn confirm(&mut self) -> Result<String, JsValue> {
        let polygon = self
            .inner
            .confirm()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_json::to_string(&polygon).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Discard the draft
    pub fn cancel(&mut self) {
        self.inner.cancel();
    }

    /// Render description of the in-progress polyline, or null when no
    /// points are placed
    pub fn render(&self) -> Result<Option<String>, JsValue> {
        match render_draft(self.inner.points()) {
            Some(shape) => serde_json::to_string(&shape)
                .map(Some)
                .map_err(|e| JsValue::from_str(&e.to_string())),
            None => Ok(None),
        }
    }
}

impl Default for DraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}
