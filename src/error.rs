//! Error types for layout ingestion and floor-plan construction.

use thiserror::Error;

use crate::plan::program::ProgramType;

/// A rectangle that cannot be used as a room shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("expected 4 bounds [x_min, y_min, x_max, y_max], got {0}")]
    WrongArity(usize),

    #[error("bounds must be finite numbers")]
    NonFinite,

    #[error("bound {0} is outside the supported range")]
    OutOfRange(f64),

    #[error("x_min ({x_min}) must be less than x_max ({x_max})")]
    EmptyWidth { x_min: i64, x_max: i64 },

    #[error("y_min ({y_min}) must be less than y_max ({y_max})")]
    EmptyHeight { y_min: i64, y_max: i64 },
}

/// Errors that reject a layout outright. No partial result is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("invalid rectangle for room {room} ({program}): {source}")]
    InvalidRectangle {
        room: usize,
        program: ProgramType,
        #[source]
        source: GeometryError,
    },

    #[error("invalid program type: '{0}'")]
    InvalidProgramType(String),

    #[error("floor plan has no rooms")]
    EmptyRooms,

    #[error("desired size map is empty")]
    EmptyDesiredSize,

    #[error("malformed layout JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for PlanError {
    fn from(e: serde_json::Error) -> Self {
        PlanError::Json(e.to_string())
    }
}
