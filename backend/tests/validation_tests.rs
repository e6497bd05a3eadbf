//! Tests for boundary validation and the task status state machine

use shared::{
    validate_area_name, validate_hectares, validate_hex_color, validate_note_content,
    validate_polygon, validate_task_title, Point, TaskStatus,
};

// =============================================================================
// Polygon validation: a committed area needs exactly 4 finite points
// =============================================================================

mod polygon {
    use super::*;

    fn unit_square() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ]
    }

    #[test]
    fn four_points_pass() {
        assert!(validate_polygon(&unit_square()).is_ok());
    }

    #[test]
    fn too_few_points_fail() {
        for count in 0..4 {
            let points = unit_square().into_iter().take(count).collect::<Vec<_>>();
            assert!(validate_polygon(&points).is_err(), "{} points", count);
        }
    }

    #[test]
    fn too_many_points_fail() {
        let mut points = unit_square();
        points.push(Point::new(5.0, 5.0));
        assert!(validate_polygon(&points).is_err());
    }

    #[test]
    fn non_finite_coordinates_fail() {
        let mut points = unit_square();
        points[2].x = f64::NAN;
        assert!(validate_polygon(&points).is_err());

        let mut points = unit_square();
        points[0].y = f64::INFINITY;
        assert!(validate_polygon(&points).is_err());
    }

    #[test]
    fn points_serialize_in_click_order() {
        // Wire round-trip must preserve order and values exactly
        let points = unit_square();
        let json = serde_json::to_string(&points).unwrap();
        assert_eq!(
            json,
            r#"[{"x":0.0,"y":0.0},{"x":10.0,"y":0.0},{"x":10.0,"y":10.0},{"x":0.0,"y":10.0}]"#
        );

        let back: Vec<Point> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, points);
    }
}

// =============================================================================
// Field validations
// =============================================================================

mod fields {
    use super::*;

    #[test]
    fn area_name_must_not_be_blank() {
        assert!(validate_area_name("North Field").is_ok());
        assert!(validate_area_name("").is_err());
        assert!(validate_area_name("   ").is_err());
    }

    #[test]
    fn hectares_must_be_non_negative_and_finite() {
        assert!(validate_hectares(0.0).is_ok());
        assert!(validate_hectares(12.5).is_ok());
        assert!(validate_hectares(-0.1).is_err());
        assert!(validate_hectares(f64::NAN).is_err());
    }

    #[test]
    fn color_must_be_rrggbb_hex() {
        assert!(validate_hex_color("#3b82f6").is_ok());
        assert!(validate_hex_color("#FFFFFF").is_ok());
        assert!(validate_hex_color("3b82f6").is_err());
        assert!(validate_hex_color("#3b82f").is_err());
        assert!(validate_hex_color("#3b82fg").is_err());
        assert!(validate_hex_color("#3b82f6ff").is_err());
    }

    #[test]
    fn task_title_and_note_content_must_not_be_blank() {
        assert!(validate_task_title("Irrigate rows 1-4").is_ok());
        assert!(validate_task_title(" ").is_err());
        assert!(validate_note_content("Soil looks dry").is_ok());
        assert!(validate_note_content("").is_err());
    }
}

// =============================================================================
// Task status state machine
// =============================================================================

mod task_status {
    use super::*;

    #[test]
    fn parses_wire_values() {
        assert_eq!("pending".parse::<TaskStatus>(), Ok(TaskStatus::Pending));
        assert_eq!(
            "in-progress".parse::<TaskStatus>(),
            Ok(TaskStatus::InProgress)
        );
        assert_eq!("completed".parse::<TaskStatus>(), Ok(TaskStatus::Completed));
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn display_matches_wire_values() {
        assert_eq!(TaskStatus::Pending.to_string(), "pending");
        assert_eq!(TaskStatus::InProgress.to_string(), "in-progress");
        assert_eq!(TaskStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn forward_transitions_are_allowed() {
        assert!(TaskStatus::Pending.can_transition_to(TaskStatus::InProgress));
        assert!(TaskStatus::Pending.can_transition_to(TaskStatus::Completed));
        assert!(TaskStatus::InProgress.can_transition_to(TaskStatus::Completed));
    }

    #[test]
    fn single_step_reopens_are_allowed() {
        assert!(TaskStatus::InProgress.can_transition_to(TaskStatus::Pending));
        assert!(TaskStatus::Completed.can_transition_to(TaskStatus::InProgress));
    }

    #[test]
    fn completed_cannot_jump_straight_to_pending() {
        assert!(!TaskStatus::Completed.can_transition_to(TaskStatus::Pending));
    }

    #[test]
    fn self_transitions_are_rejected() {
        for status in [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ] {
            assert!(!status.can_transition_to(status));
        }
    }

    #[test]
    fn serde_uses_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            r#""in-progress""#
        );
        let status: TaskStatus = serde_json::from_str(r#""in-progress""#).unwrap();
        assert_eq!(status, TaskStatus::InProgress);
    }
}
