//! Scoring rules.
//!
//! Each rule is an independent read-only pass over a finished `FloorPlan`.
//! None of them touch the graph, so they can be run in any order or in
//! parallel.

use std::collections::BTreeMap;

use crate::plan::{FloorPlan, ProgramType};

use super::report::LoungeScore;

/// Alignment: sum of `|ratio - 1|` over every edge of every non-CIRC room.
///
/// 0 means every side is either fully shared with one neighbor or fully open.
pub fn alignment_check(plan: &FloorPlan) -> f64 {
    plan.graph()
        .nodes()
        .iter()
        .filter(|n| n.program != ProgramType::Circ)
        .flat_map(|n| n.edges.iter())
        .map(|e| (e.ratio - 1.0).abs())
        .sum()
}

/// Size: desired area minus actual area, per program type.
///
/// A positive value means under-provision. Program types with rooms but no
/// target start from zero.
pub fn size_check(plan: &FloorPlan) -> BTreeMap<ProgramType, f64> {
    let mut size_score = plan.desired_size().clone();
    for room in plan.rooms() {
        *size_score.entry(room.program()).or_insert(0.0) -= room.area() as f64;
    }
    size_score
}

/// Lounge: counts the core and wall edges of the largest ENTRANCE room.
///
/// Ties go to the first room of maximal area. Without an ENTRANCE room no
/// room is scored and both counters stay zero.
pub fn lounge_check(plan: &FloorPlan) -> LoungeScore {
    let mut max_area = 0i64;
    let mut lounge = None;
    for (i, room) in plan.rooms().iter().enumerate() {
        if room.program() == ProgramType::Entrance && room.area() > max_area {
            max_area = room.area();
            lounge = Some(i);
        }
    }

    let mut score = LoungeScore {
        lounge,
        ..LoungeScore::default()
    };
    if let Some(i) = lounge {
        for edge in plan.graph().edges(i) {
            match edge.neighbor {
                ProgramType::Core => score.touch_core += 1,
                ProgramType::Wall => score.touch_gv += 1,
                _ => {}
            }
        }
    }
    score
}

/// Hallway access: number of non-CIRC rooms with no CIRC neighbor.
pub fn access_hw_check(plan: &FloorPlan) -> usize {
    plan.graph()
        .nodes()
        .iter()
        .filter(|n| n.program != ProgramType::Circ)
        .filter(|n| !n.touches(ProgramType::Circ))
        .count()
}

/// Exterior work: total area of WORK rooms with at least one wall edge.
pub fn check_ext_work(plan: &FloorPlan) -> i64 {
    plan.nodes()
        .filter(|(room, node)| room.program() == ProgramType::Work && node.touches(ProgramType::Wall))
        .map(|(room, _)| room.area())
        .fold(0, i64::saturating_add)
}

/// Meet separation: sum of ratios of ENTRANCE edges that touch WORK directly.
pub fn check_meet(plan: &FloorPlan) -> f64 {
    plan.graph()
        .nodes()
        .iter()
        .filter(|n| n.program == ProgramType::Entrance)
        .flat_map(|n| n.edges.iter())
        .filter(|e| e.neighbor == ProgramType::Work)
        .map(|e| e.ratio)
        .sum()
}

/// Number of CIRC rooms.
pub fn num_hallway(plan: &FloorPlan) -> usize {
    plan.rooms_of(ProgramType::Circ).count()
}
