//! Tests for the area overlay renderer
//!
//! Verifies the three-tier opacity rule, the hover stroke rule, label
//! visibility, draft rendering, hit testing, and tolerance of malformed
//! polygons.

use shared::{
    hit_test, polygon_style, render_areas, render_draft, OverlayArea, Point,
    DIMMED_FILL_OPACITY, HIGHLIGHT_STROKE_WIDTH, HOVERED_FILL_OPACITY, NEUTRAL_FILL_OPACITY,
};

fn square(id: &str, origin: f64, size: f64) -> OverlayArea {
    OverlayArea {
        id: id.to_string(),
        name: format!("Field {}", id),
        hectares: 12.5,
        color: "#3b82f6".to_string(),
        points: vec![
            Point::new(origin, origin),
            Point::new(origin + size, origin),
            Point::new(origin + size, origin + size),
            Point::new(origin, origin + size),
        ],
    }
}

// =============================================================================
// Opacity invariant: fillOpacity(Ai) = 0.65 if hovered, 0.10 if another
// area is hovered, 0.30 if nothing is hovered
// =============================================================================

mod opacity {
    use super::*;

    #[test]
    fn neutral_baseline_when_nothing_hovered() {
        let areas = vec![square("a", 0.0, 10.0), square("b", 20.0, 10.0)];
        let shapes = render_areas(&areas, None);

        assert_eq!(shapes.len(), 2);
        for shape in &shapes {
            assert_eq!(shape.style.fill_opacity, NEUTRAL_FILL_OPACITY);
        }
    }

    #[test]
    fn hovered_area_brightens_and_dims_the_rest() {
        let areas = vec![
            square("a", 0.0, 10.0),
            square("b", 20.0, 10.0),
            square("c", 40.0, 10.0),
        ];
        let shapes = render_areas(&areas, Some("b"));

        for shape in &shapes {
            let expected = if shape.id == "b" {
                HOVERED_FILL_OPACITY
            } else {
                DIMMED_FILL_OPACITY
            };
            assert_eq!(shape.style.fill_opacity, expected, "area {}", shape.id);
        }
    }

    #[test]
    fn unknown_hover_id_still_dims_everything() {
        // Hover state can outlive a deleted area for one render
        let areas = vec![square("a", 0.0, 10.0)];
        let shapes = render_areas(&areas, Some("gone"));
        assert_eq!(shapes[0].style.fill_opacity, DIMMED_FILL_OPACITY);
    }

    #[test]
    fn style_tiers_are_exhaustive() {
        assert_eq!(polygon_style(true, true).fill_opacity, 0.65);
        assert_eq!(polygon_style(false, true).fill_opacity, 0.10);
        assert_eq!(polygon_style(false, false).fill_opacity, 0.30);
    }
}

// =============================================================================
// Stroke rule
// =============================================================================

mod stroke {
    use super::*;

    #[test]
    fn only_the_hovered_area_gets_the_highlight_stroke() {
        let areas = vec![square("a", 0.0, 10.0), square("b", 20.0, 10.0)];
        let shapes = render_areas(&areas, Some("a"));

        let a = shapes.iter().find(|s| s.id == "a").unwrap();
        let b = shapes.iter().find(|s| s.id == "b").unwrap();

        assert_eq!(a.style.highlight_stroke_width, HIGHLIGHT_STROKE_WIDTH);
        assert_eq!(b.style.highlight_stroke_width, 0.0);
        assert!(a.style.stroke_width > b.style.stroke_width);
    }
}

// =============================================================================
// Label visibility
// =============================================================================

mod labels {
    use super::*;

    #[test]
    fn label_appears_only_on_the_hovered_area() {
        let areas = vec![square("a", 0.0, 40.0), square("b", 50.0, 40.0)];

        let shapes = render_areas(&areas, Some("a"));
        let a = shapes.iter().find(|s| s.id == "a").unwrap();
        let b = shapes.iter().find(|s| s.id == "b").unwrap();
        assert!(a.label.is_some());
        assert!(b.label.is_none());

        let idle = render_areas(&areas, None);
        assert!(idle.iter().all(|s| s.label.is_none()));
    }

    #[test]
    fn label_is_centered_in_the_bounding_box() {
        let areas = vec![square("a", 10.0, 40.0)];
        let shapes = render_areas(&areas, Some("a"));
        let label = shapes[0].label.as_ref().unwrap();

        assert_eq!(label.x, 30.0);
        assert_eq!(label.y, 30.0);
        assert_eq!(label.secondary_text, "12.5 ha");
        assert_eq!(label.secondary_font_size, label.font_size * 0.6);
        assert_eq!(label.secondary_offset, label.font_size * 1.2);
    }
}

// =============================================================================
// Malformed polygons: render nothing rather than panic
// =============================================================================

mod malformed {
    use super::*;

    #[test]
    fn partial_polygons_are_skipped() {
        let mut broken = square("broken", 0.0, 10.0);
        broken.points.truncate(2);

        let areas = vec![broken, square("ok", 20.0, 10.0)];
        let shapes = render_areas(&areas, None);

        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].id, "ok");
    }

    #[test]
    fn empty_polygon_renders_nothing() {
        let mut empty = square("empty", 0.0, 10.0);
        empty.points.clear();

        let shapes = render_areas(&[empty], Some("empty"));
        assert!(shapes.is_empty());
    }
}

// =============================================================================
// Draft rendering
// =============================================================================

mod draft {
    use super::*;

    #[test]
    fn no_shape_without_points() {
        assert!(render_draft(&[]).is_none());
    }

    #[test]
    fn open_polyline_before_completion() {
        let points = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let shape = render_draft(&points).unwrap();

        assert_eq!(shape.outline_attr, "0,0 10,0");
        assert!(shape.closing_segment.is_none());
        assert!(shape.fill_attr.is_none());
    }

    #[test]
    fn completed_draft_closes_and_previews_fill() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let shape = render_draft(&points).unwrap();

        let (from, to) = shape.closing_segment.unwrap();
        assert_eq!(from, Point::new(0.0, 10.0));
        assert_eq!(to, Point::new(0.0, 0.0));
        assert!(shape.fill_attr.is_some());
    }
}

// =============================================================================
// Hit testing
// =============================================================================

mod hits {
    use super::*;

    #[test]
    fn click_routes_to_the_containing_area() {
        let areas = vec![square("a", 0.0, 10.0), square("b", 20.0, 10.0)];

        assert_eq!(hit_test(&areas, Point::new(5.0, 5.0), false), Some("a"));
        assert_eq!(hit_test(&areas, Point::new(25.0, 25.0), false), Some("b"));
        assert_eq!(hit_test(&areas, Point::new(90.0, 90.0), false), None);
    }

    #[test]
    fn topmost_polygon_wins_on_overlap() {
        let areas = vec![square("under", 0.0, 20.0), square("over", 5.0, 20.0)];
        assert_eq!(hit_test(&areas, Point::new(10.0, 10.0), false), Some("over"));
    }

    #[test]
    fn hit_testing_is_suppressed_while_drafting() {
        let areas = vec![square("a", 0.0, 10.0)];
        assert_eq!(hit_test(&areas, Point::new(5.0, 5.0), true), None);
    }

    #[test]
    fn malformed_polygons_are_never_hit() {
        let mut broken = square("broken", 0.0, 10.0);
        broken.points.truncate(3);
        assert_eq!(hit_test(&[broken], Point::new(5.0, 5.0), false), None);
    }
}
