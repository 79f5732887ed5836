//! Room adjacency graph.
//!
//! Each room gets an ordered list of directed edges: one per neighbor it
//! shares a boundary with, followed by synthetic `wall` edges covering
//! whatever fraction of each side no neighbor covers. Uncovered boundary is
//! treated as facing open space, so plan exteriors and literal walls score
//! the same.
//!
//! The pairwise scan is O(n^2). For large plans it runs on rayon, one task
//! per room; the resulting edge order is identical to the sequential scan.

use rayon::prelude::*;
use tracing::{debug, warn};

use super::geometry::{classify, Contact, Direction, WALL_ORDER};
use super::program::ProgramType;
use super::room::Room;

/// Plans with at least this many rooms build their graph in parallel.
pub const PARALLEL_MIN_ROOMS: usize = 64;

/// A directed adjacency from a room to a neighbor type on one side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub direction: Direction,
    pub neighbor: ProgramType,
    pub ratio: f64,
}

impl Edge {
    pub fn new(direction: Direction, neighbor: ProgramType, ratio: f64) -> Self {
        Self {
            direction,
            neighbor,
            ratio,
        }
    }

    /// Returns true for a synthetic uncovered-boundary edge.
    pub fn is_wall(&self) -> bool {
        self.neighbor == ProgramType::Wall
    }
}

/// The edges of one room, keyed by the room's index in the plan.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomNode {
    pub index: usize,
    pub program: ProgramType,
    pub edges: Vec<Edge>,
}

impl RoomNode {
    /// Returns true if any edge touches a neighbor of the given type.
    pub fn touches(&self, neighbor: ProgramType) -> bool {
        self.edges.iter().any(|e| e.neighbor == neighbor)
    }

    /// Iterates over the edges on one side.
    pub fn edges_toward(&self, direction: Direction) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.direction == direction)
    }

    /// Sum of edge ratios on one side, walls included.
    pub fn coverage(&self, direction: Direction) -> f64 {
        self.edges_toward(direction).map(|e| e.ratio).sum()
    }
}

/// Adjacency graph over all rooms of a plan. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyGraph {
    nodes: Vec<RoomNode>,
    overlaps: Vec<(usize, usize)>,
}

/// Scan result for a single room: its neighbor edges and the later rooms it overlaps.
struct RoomScan {
    edges: Vec<Edge>,
    overlaps: Vec<(usize, usize)>,
}

/// Collects the neighbor edges of room `i` against every other room, in room order.
fn scan_room(rooms: &[Room], i: usize) -> RoomScan {
    let room = &rooms[i];
    let mut edges = Vec::new();
    let mut overlaps = Vec::new();

    for (j, other) in rooms.iter().enumerate() {
        if i == j {
            continue;
        }
        match classify(room.shape(), other.shape()) {
            Contact::Adjacent { direction, ratio } => {
                edges.push(Edge::new(direction, other.program(), ratio));
            }
            Contact::Overlap => {
                // Each unordered pair is seen twice; report it once.
                if i < j {
                    warn!(
                        room = room.id(),
                        other = other.id(),
                        shape = %room.shape(),
                        other_shape = %other.shape(),
                        "rooms overlap; treating as not adjacent"
                    );
                    overlaps.push((i, j));
                }
            }
            Contact::Separate => {}
        }
    }

    RoomScan { edges, overlaps }
}

/// Appends a `wall` edge for each side whose neighbor ratios leave a positive remainder.
fn complete_walls(edges: &mut Vec<Edge>) {
    for direction in WALL_ORDER {
        let remainder = edges
            .iter()
            .filter(|e| e.direction == direction)
            .fold(1.0f64, |res, e| res - e.ratio);
        if remainder > 0.0 {
            edges.push(Edge::new(direction, ProgramType::Wall, remainder));
        }
    }
}

impl AdjacencyGraph {
    /// Builds the graph for the given rooms. Node `i` belongs to `rooms[i]`.
    pub fn build(rooms: &[Room]) -> AdjacencyGraph {
        let scans: Vec<RoomScan> = if rooms.len() >= PARALLEL_MIN_ROOMS {
            (0..rooms.len())
                .into_par_iter()
                .map(|i| scan_room(rooms, i))
                .collect()
        } else {
            (0..rooms.len()).map(|i| scan_room(rooms, i)).collect()
        };

        let mut nodes = Vec::with_capacity(rooms.len());
        let mut overlaps = Vec::new();
        for (i, scan) in scans.into_iter().enumerate() {
            let mut edges = scan.edges;
            complete_walls(&mut edges);
            nodes.push(RoomNode {
                index: i,
                program: rooms[i].program(),
                edges,
            });
            overlaps.extend(scan.overlaps);
        }

        let graph = AdjacencyGraph { nodes, overlaps };
        debug!(
            rooms = graph.len(),
            edges = graph.edge_count(),
            overlaps = graph.overlaps.len(),
            "built adjacency graph"
        );
        graph
    }

    /// All nodes in room order.
    pub fn nodes(&self) -> &[RoomNode] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&RoomNode> {
        self.nodes.get(index)
    }

    /// Edges of the room at `index`, empty if out of range.
    pub fn edges(&self, index: usize) -> &[Edge] {
        self.nodes.get(index).map_or(&[], |n| n.edges.as_slice())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of edges, walls included.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }

    /// Room index pairs `(i, j)`, `i < j`, whose shapes overlap.
    pub fn overlaps(&self) -> &[(usize, usize)] {
        &self.overlaps
    }
}
