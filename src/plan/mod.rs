//! Floor-plan representation.
//!
//! Contains the program types, rectangle geometry, rooms, the adjacency
//! graph built from them, and the floor plan that owns it all.

pub mod adjacency;
pub mod floorplan;
pub mod geometry;
pub mod program;
pub mod room;

pub use adjacency::{AdjacencyGraph, Edge, RoomNode, PARALLEL_MIN_ROOMS};
pub use floorplan::{DesiredSize, FloorPlan};
pub use geometry::{intersect_edge_ratio, Direction, Rect, MAX_COORD, WALL_ORDER};
pub use program::{ProgramType, ALL_PROGRAM_TYPES, PROGRAM_TYPE_COUNT, SIZED_PROGRAM_TYPES};
pub use room::Room;
