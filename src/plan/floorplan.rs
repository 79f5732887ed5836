//! Floor plans.
//!
//! A `FloorPlan` owns its rooms, the desired aggregate area per program type,
//! and the adjacency graph derived from the rooms at construction. All of it
//! is read-only afterwards, so scoring can run from any number of threads.

use std::collections::BTreeMap;

use crate::error::PlanError;

use super::adjacency::{AdjacencyGraph, RoomNode};
use super::program::ProgramType;
use super::room::Room;

/// Desired aggregate area per program type.
pub type DesiredSize = BTreeMap<ProgramType, f64>;

/// A validated set of rooms together with their adjacency graph.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorPlan {
    rooms: Vec<Room>,
    desired_size: DesiredSize,
    graph: AdjacencyGraph,
}

impl FloorPlan {
    /// Validates the inputs and builds the adjacency graph.
    ///
    /// Fails with `EmptyRooms` or `EmptyDesiredSize`. Overlapping rooms are
    /// accepted; see [`FloorPlan::overlaps`].
    pub fn new(rooms: Vec<Room>, desired_size: DesiredSize) -> Result<FloorPlan, PlanError> {
        if rooms.is_empty() {
            return Err(PlanError::EmptyRooms);
        }
        if desired_size.is_empty() {
            return Err(PlanError::EmptyDesiredSize);
        }
        let graph = AdjacencyGraph::build(&rooms);
        Ok(FloorPlan {
            rooms,
            desired_size,
            graph,
        })
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn desired_size(&self) -> &DesiredSize {
        &self.desired_size
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    /// Graph nodes paired with the rooms they belong to.
    pub fn nodes(&self) -> impl Iterator<Item = (&Room, &RoomNode)> {
        self.rooms.iter().zip(self.graph.nodes())
    }

    /// Rooms of one program type, in plan order.
    pub fn rooms_of(&self, program: ProgramType) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(move |r| r.program() == program)
    }

    /// Room index pairs whose shapes overlap. Such pairs are not adjacent.
    pub fn overlaps(&self) -> &[(usize, usize)] {
        self.graph.overlaps()
    }
}
