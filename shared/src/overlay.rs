//! Area overlay renderer
//!
//! Computes a render description for the persisted area polygons plus an
//! optional in-progress draft, all in the 0-100 coordinate space of the
//! map's SVG viewBox. The output is presentation-toolkit agnostic: the
//! browser layer maps shapes to SVG elements one-to-one.

use serde::{Deserialize, Serialize};

use crate::geometry::{point_in_polygon, BoundingBox, Point, POLYGON_POINTS};

/// Fill opacity of the hovered area
pub const HOVERED_FILL_OPACITY: f64 = 0.65;
/// Fill opacity of every other area while one is hovered
pub const DIMMED_FILL_OPACITY: f64 = 0.10;
/// Fill opacity when nothing is hovered
pub const NEUTRAL_FILL_OPACITY: f64 = 0.30;

/// Own-color stroke widths for the same three tiers
pub const HOVERED_STROKE_WIDTH: f64 = 0.5;
pub const DIMMED_STROKE_WIDTH: f64 = 0.1;
pub const NEUTRAL_STROKE_WIDTH: f64 = 0.2;

/// Outer white highlight stroke, drawn under the color stroke of the
/// hovered area only
pub const HIGHLIGHT_STROKE_WIDTH: f64 = 0.8;
pub const HIGHLIGHT_STROKE_OPACITY: f64 = 0.7;

/// Label fitting heuristic: assumed average glyph width as a fraction of
/// the font size, fraction of the box width the name may fill, fraction
/// of the box height the font may reach, and the absolute cap relative
/// to the 0-100 viewBox.
pub const GLYPH_WIDTH_FACTOR: f64 = 0.7;
pub const LABEL_WIDTH_FRACTION: f64 = 0.8;
pub const LABEL_HEIGHT_FRACTION: f64 = 0.3;
pub const MAX_LABEL_FONT_SIZE: f64 = 3.0;

/// Secondary (hectares) line: size relative to the primary font, and
/// vertical offset below it in multiples of the primary font size
pub const SECONDARY_FONT_SCALE: f64 = 0.6;
pub const SECONDARY_LINE_OFFSET: f64 = 1.2;

/// Draft styling, distinct from committed areas
pub const DRAFT_STROKE_WIDTH: f64 = 0.3;
pub const DRAFT_FILL_OPACITY: f64 = 0.2;

/// Minimal view of a persisted area needed to render the overlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayArea {
    pub id: String,
    pub name: String,
    pub hectares: f64,
    /// Hex color, e.g. "#3b82f6"
    pub color: String,
    pub points: Vec<Point>,
}

/// Per-polygon fill and stroke styling for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolygonStyle {
    pub fill_opacity: f64,
    pub stroke_width: f64,
    pub highlight_stroke_width: f64,
    pub highlight_stroke_opacity: f64,
}

/// Three-tier styling rule: hovered / dimmed-by-other-hover / neutral.
pub fn polygon_style(is_hovered: bool, any_hovered: bool) -> PolygonStyle {
    let (fill_opacity, stroke_width) = if is_hovered {
        (HOVERED_FILL_OPACITY, HOVERED_STROKE_WIDTH)
    } else if any_hovered {
        (DIMMED_FILL_OPACITY, DIMMED_STROKE_WIDTH)
    } else {
        (NEUTRAL_FILL_OPACITY, NEUTRAL_STROKE_WIDTH)
    };

    PolygonStyle {
        fill_opacity,
        stroke_width,
        highlight_stroke_width: if is_hovered { HIGHLIGHT_STROKE_WIDTH } else { 0.0 },
        highlight_stroke_opacity: HIGHLIGHT_STROKE_OPACITY,
    }
}

/// Centered label for one polygon's bounding box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    pub secondary_text: String,
    pub secondary_font_size: f64,
    /// dy of the secondary line relative to the primary baseline
    pub secondary_offset: f64,
}

/// Fit a font size for a name of `glyphs` characters inside `bbox`.
///
/// Minimum of three candidates: the size that fills 80% of the box width
/// at the assumed glyph width, 30% of the box height, and the absolute
/// cap. A heuristic auto-fit that favors not overflowing the box over
/// pixel-perfect sizing.
pub fn fit_label_font_size(bbox: &BoundingBox, glyphs: usize) -> f64 {
    let by_width = if glyphs == 0 {
        MAX_LABEL_FONT_SIZE
    } else {
        bbox.width() * LABEL_WIDTH_FRACTION / (glyphs as f64 * GLYPH_WIDTH_FACTOR)
    };
    let by_height = bbox.height() * LABEL_HEIGHT_FRACTION;
    by_width.min(by_height).min(MAX_LABEL_FONT_SIZE)
}

/// Lay out the name + hectares label for an area. Returns `None` for a
/// malformed polygon.
pub fn layout_label(area: &OverlayArea) -> Option<Label> {
    let bbox = BoundingBox::of(&area.points)?;
    let font_size = fit_label_font_size(&bbox, area.name.chars().count());
    let center = bbox.center();

    Some(Label {
        x: center.x,
        y: center.y,
        text: area.name.clone(),
        font_size,
        secondary_text: format!("{} ha", area.hectares),
        secondary_font_size: font_size * SECONDARY_FONT_SCALE,
        secondary_offset: font_size * SECONDARY_LINE_OFFSET,
    })
}

/// Fully styled polygon ready to hand to the SVG layer
#[derive(Debug, Clone, Serialize)]
pub struct AreaShape {
    pub id: String,
    /// SVG `points` attribute in click order
    pub points_attr: String,
    pub fill: String,
    pub style: PolygonStyle,
    /// Present only while this area is hovered (labels fade in on hover
    /// and stay hidden otherwise)
    pub label: Option<Label>,
}

/// Render description of the in-progress draft
#[derive(Debug, Clone, Serialize)]
pub struct DraftShape {
    /// Open polyline through the placed points, in click order
    pub outline_attr: String,
    /// Closing segment from the fourth point back to the first, present
    /// once the draft is complete
    pub closing_segment: Option<(Point, Point)>,
    /// Translucent fill preview, present once the draft is complete
    pub fill_attr: Option<String>,
    pub stroke_width: f64,
    pub fill_opacity: f64,
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render all committed areas for the current hover state.
///
/// A malformed entry (anything other than four points) renders nothing
/// rather than failing the whole overlay.
pub fn render_areas(areas: &[OverlayArea], hovered_id: Option<&str>) -> Vec<AreaShape> {
    let any_hovered = hovered_id.is_some();

    areas
        .iter()
        .filter(|area| area.points.len() == POLYGON_POINTS)
        .map(|area| {
            let is_hovered = hovered_id == Some(area.id.as_str());
            AreaShape {
                id: area.id.clone(),
                points_attr: points_attr(&area.points),
                fill: area.color.clone(),
                style: polygon_style(is_hovered, any_hovered),
                label: if is_hovered { layout_label(area) } else { None },
            }
        })
        .collect()
}

/// Render the in-progress draft. Returns `None` when no points have been
/// placed yet.
pub fn render_draft(points: &[Point]) -> Option<DraftShape> {
    if points.is_empty() {
        return None;
    }

    let complete = points.len() >= POLYGON_POINTS;
    Some(DraftShape {
        outline_attr: points_attr(points),
        closing_segment: complete.then(|| (points[POLYGON_POINTS - 1], points[0])),
        fill_attr: complete.then(|| points_attr(points)),
        stroke_width: DRAFT_STROKE_WIDTH,
        fill_opacity: DRAFT_FILL_OPACITY,
    })
}

/// Find the area under the pointer, if any.
///
/// The last-rendered (topmost) polygon wins on overlap. Hit testing is
/// suppressed entirely while a draft is in progress: draft mode takes
/// exclusive input priority.
pub fn hit_test<'a>(
    areas: &'a [OverlayArea],
    point: Point,
    draft_active: bool,
) -> Option<&'a str> {
    if draft_active {
        return None;
    }

    areas
        .iter()
        .rev()
        .find(|area| {
            area.points.len() == POLYGON_POINTS && point_in_polygon(point, &area.points)
        })
        .map(|area| area.id.as_str())
}
