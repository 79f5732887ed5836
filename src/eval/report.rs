//! Score report types.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::plan::ProgramType;

/// Whether the main lounge touches the core and open space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoungeScore {
    /// Wall edges of the lounge, i.e. sides facing a good view.
    pub touch_gv: u32,
    /// Edges of the lounge that touch a `core` zone.
    pub touch_core: u32,
    /// Index of the room scored as the lounge. `None` when the plan has no
    /// ENTRANCE room, in which case both counters are zero.
    #[serde(skip)]
    pub lounge: Option<usize>,
}

/// Results of every scoring rule for one floor plan, in rule order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    /// Sum of `|ratio - 1|` over the edges of non-CIRC rooms. 0 is best.
    pub align_score: f64,
    /// Desired minus actual area per program type.
    pub size_score: BTreeMap<ProgramType, f64>,
    /// The desired-size targets the plan was scored against.
    pub desired_size: BTreeMap<ProgramType, f64>,
    pub lounge_score: LoungeScore,
    /// Non-CIRC rooms without a CIRC neighbor. 0 is best.
    pub hallway_access_score: usize,
    /// Total area of WORK rooms with at least one wall edge. Higher is better.
    pub work_ext_score: i64,
    /// Sum of ENTRANCE-to-WORK edge ratios. Lower is better.
    pub meet_score: f64,
    /// Number of CIRC rooms. Fewer is better.
    pub hallway_num: usize,
}
