//! Room values.
//!
//! A room is a labeled rectangle. Rooms are created once at ingestion and
//! never mutated afterwards.

use crate::error::PlanError;

use super::geometry::Rect;
use super::program::ProgramType;

/// A physical zone of the floor plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    id: usize,
    program: ProgramType,
    shape: Rect,
    area: i64,
}

impl Room {
    /// Creates a room from an already validated shape.
    ///
    /// The synthetic `wall` type is rejected: it only exists as a graph
    /// placeholder.
    pub fn new(id: usize, program: ProgramType, shape: Rect) -> Result<Room, PlanError> {
        if program.is_synthetic() {
            return Err(PlanError::InvalidProgramType(program.label().to_string()));
        }
        Ok(Room {
            id,
            program,
            shape,
            area: shape.area(),
        })
    }

    /// Creates a room from `[x_min, y_min, x_max, y_max]` plan coordinates.
    pub fn from_coords(id: usize, program: ProgramType, coords: &[f64]) -> Result<Room, PlanError> {
        let shape = Rect::from_coords(coords).map_err(|source| PlanError::InvalidRectangle {
            room: id,
            program,
            source,
        })?;
        Room::new(id, program, shape)
    }

    /// Creates a room from a program label and plan coordinates.
    pub fn from_label(id: usize, label: &str, coords: &[f64]) -> Result<Room, PlanError> {
        let program = ProgramType::from_label(label)
            .ok_or_else(|| PlanError::InvalidProgramType(label.to_string()))?;
        Room::from_coords(id, program, coords)
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn program(&self) -> ProgramType {
        self.program
    }

    pub fn shape(&self) -> &Rect {
        &self.shape
    }

    /// Width times height of the rounded shape.
    pub fn area(&self) -> i64 {
        self.area
    }
}
