//! Polygon draft builder
//!
//! Collects up to four click points while the user defines a new area on
//! the map, then emits the finished polygon on an explicit confirm. The
//! builder is a small state machine; reaching four points never commits
//! by itself.

use serde::Serialize;
use thiserror::Error;

use crate::geometry::{Point, POLYGON_POINTS};

/// Draft lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftState {
    /// Not in create mode
    Idle,
    /// Create mode, fewer than four points placed
    Collecting,
    /// Four points placed; waiting for confirm or cancel
    Ready,
    /// Polygon emitted to the caller
    Committed,
}

/// Outcome of a point placement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// Point appended; draft still collecting
    Accepted { placed: usize },
    /// Point appended and the draft is now complete (caller should
    /// enable its confirm action)
    Completed,
    /// Draft is not collecting, or already holds four points
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("draft has {placed} of {POLYGON_POINTS} points")]
    Incomplete { placed: usize },

    #[error("no draft in progress")]
    NotActive,
}

/// In-progress area polygon being defined by sequential point placement
#[derive(Debug, Clone)]
pub struct PolygonDraft {
    points: Vec<Point>,
    state: DraftState,
}

impl PolygonDraft {
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(POLYGON_POINTS),
            state: DraftState::Idle,
        }
    }

    /// Enter create mode with an empty draft.
    pub fn begin(&mut self) {
        self.points.clear();
        self.state = DraftState::Collecting;
    }

    /// Append a clicked point.
    ///
    /// Only accepted while collecting; the fourth point moves the draft
    /// to `Ready` and further placements are ignored until confirm or
    /// cancel.
    pub fn place(&mut self, point: Point) -> PlaceOutcome {
        if self.state != DraftState::Collecting {
            return PlaceOutcome::Ignored;
        }

        self.points.push(point);
        if self.points.len() == POLYGON_POINTS {
            self.state = DraftState::Ready;
            PlaceOutcome::Completed
        } else {
            PlaceOutcome::Accepted {
                placed: self.points.len(),
            }
        }
    }

    /// Confirm the draft, emitting the four points in click order.
    ///
    /// Fails unless the draft is `Ready`. On success the builder exits
    /// create mode.
    pub fn confirm(&mut self) -> Result<[Point; POLYGON_POINTS], DraftError> {
        match self.state {
            DraftState::Ready => {
                let polygon: [Point; POLYGON_POINTS] = self
                    .points
                    .as_slice()
                    .try_into()
                    .map_err(|_| DraftError::Incomplete {
                        placed: self.points.len(),
                    })?;
                self.points.clear();
                self.state = DraftState::Committed;
                Ok(polygon)
            }
            DraftState::Collecting => Err(DraftError::Incomplete {
                placed: self.points.len(),
            }),
            DraftState::Idle | DraftState::Committed => Err(DraftError::NotActive),
        }
    }

    /// Discard all accumulated points and leave create mode.
    pub fn cancel(&mut self) {
        self.points.clear();
        self.state = DraftState::Idle;
    }

    /// Points placed so far, in click order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    /// True while the draft takes exclusive input priority on the map.
    pub fn is_active(&self) -> bool {
        matches!(self.state, DraftState::Collecting | DraftState::Ready)
    }
}

impl Default for PolygonDraft {
    fn default() -> Self {
        Self::new()
    }
}
