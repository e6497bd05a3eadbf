//! Boundary validation for request inputs
//!
//! Request bodies are validated before they reach persistence logic, so
//! malformed shapes never turn into malformed rows.

use crate::geometry::{Point, POLYGON_POINTS};

/// Validate the polygon of a committed area: exactly four finite points.
///
/// Range is deliberately not enforced here; the coordinate model does
/// not clamp and producers constrain input to the image bounds.
pub fn validate_polygon(points: &[Point]) -> Result<(), &'static str> {
    if points.len() != POLYGON_POINTS {
        return Err("Area polygon must have exactly 4 points");
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err("Area polygon points must be finite numbers");
    }
    Ok(())
}

/// Validate an area name
pub fn validate_area_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Area name cannot be empty");
    }
    Ok(())
}

/// Validate a hectare count
pub fn validate_hectares(hectares: f64) -> Result<(), &'static str> {
    if !hectares.is_finite() || hectares < 0.0 {
        return Err("Hectares must be a non-negative number");
    }
    Ok(())
}

/// Validate a display color (#rrggbb)
pub fn validate_hex_color(color: &str) -> Result<(), &'static str> {
    let hex = color
        .strip_prefix('#')
        .ok_or("Color must be a #rrggbb hex string")?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("Color must be a #rrggbb hex string");
    }
    Ok(())
}

/// Validate a task title
pub fn validate_task_title(title: &str) -> Result<(), &'static str> {
    if title.trim().is_empty() {
        return Err("Task title cannot be empty");
    }
    Ok(())
}

/// Validate a note body
pub fn validate_note_content(content: &str) -> Result<(), &'static str> {
    if content.trim().is_empty() {
        return Err("Note content cannot be empty");
    }
    Ok(())
}

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    Ok(())
}
