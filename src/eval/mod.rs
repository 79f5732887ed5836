//! Floor-plan evaluation.
//!
//! Runs the fixed battery of scoring rules over a finished floor plan:
//! alignment, sizing, lounge placement, hallway access, exterior work,
//! lounge/work separation, and hallway count.

pub mod report;
pub mod rules;

use tracing::debug;

use crate::plan::FloorPlan;

pub use report::{LoungeScore, ScoreReport};
pub use rules::{
    access_hw_check, alignment_check, check_ext_work, check_meet, lounge_check, num_hallway,
    size_check,
};

/// Scores a floor plan with every rule. The desired size is passed through.
pub fn score(plan: &FloorPlan) -> ScoreReport {
    let report = ScoreReport {
        align_score: alignment_check(plan),
        size_score: size_check(plan),
        desired_size: plan.desired_size().clone(),
        lounge_score: lounge_check(plan),
        hallway_access_score: access_hw_check(plan),
        work_ext_score: check_ext_work(plan),
        meet_score: check_meet(plan),
        hallway_num: num_hallway(plan),
    };
    debug!(
        rooms = plan.rooms().len(),
        align = report.align_score,
        hallway_access = report.hallway_access_score,
        "scored floor plan"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{DesiredSize, ProgramType, Rect, Room};

    #[test]
    fn score_matches_individual_rules() {
        let rooms = vec![
            Room::new(0, ProgramType::Entrance, Rect::new(0, 0, 10, 10).unwrap()).unwrap(),
            Room::new(1, ProgramType::Work, Rect::new(10, 0, 20, 5).unwrap()).unwrap(),
            Room::new(2, ProgramType::Circ, Rect::new(0, 10, 20, 12).unwrap()).unwrap(),
        ];
        let desired: DesiredSize = [(ProgramType::Work, 80.0)].into_iter().collect();
        let plan = FloorPlan::new(rooms, desired.clone()).unwrap();

        let report = score(&plan);
        assert_eq!(report.align_score, alignment_check(&plan));
        assert_eq!(report.size_score, size_check(&plan));
        assert_eq!(report.desired_size, desired);
        assert_eq!(report.lounge_score, lounge_check(&plan));
        assert_eq!(report.hallway_access_score, access_hw_check(&plan));
        assert_eq!(report.work_ext_score, 50);
        assert_eq!(report.meet_score, 0.5);
        assert_eq!(report.hallway_num, 1);
    }

    #[test]
    fn score_is_deterministic() {
        let rooms = vec![
            Room::new(0, ProgramType::Work, Rect::new(0, 0, 3, 3).unwrap()).unwrap(),
            Room::new(1, ProgramType::Meet, Rect::new(3, 1, 5, 4).unwrap()).unwrap(),
        ];
        let desired: DesiredSize = [(ProgramType::Meet, 1.0)].into_iter().collect();
        let plan = FloorPlan::new(rooms, desired).unwrap();
        assert_eq!(score(&plan), score(&plan));
    }
}
