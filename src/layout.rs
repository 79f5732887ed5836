//! Layout ingestion.
//!
//! A layout maps program-type labels to lists of `[x_min, y_min, x_max,
//! y_max]` rectangles. Rooms are created in lexicographic label order, then
//! list order, and numbered from 0 in that order, so room ids (and with them
//! the lounge tie-break) are reproducible for a given layout.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlanError;
use crate::eval::{self, ScoreReport};
use crate::plan::{FloorPlan, ProgramType, Room};
use crate::policy::SizePolicy;

/// Rectangles per program-type label, as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    zones: BTreeMap<String, Vec<Vec<f64>>>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one rectangle under `label`.
    pub fn push(&mut self, label: &str, rect: [f64; 4]) -> &mut Self {
        self.zones
            .entry(label.to_string())
            .or_default()
            .push(rect.to_vec());
        self
    }

    /// Parses a layout from a JSON object such as `{"WORK": [[0, 0, 10, 10]]}`.
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn zones(&self) -> &BTreeMap<String, Vec<Vec<f64>>> {
        &self.zones
    }

    /// Number of rectangles across all labels.
    pub fn rect_count(&self) -> usize {
        self.zones.values().map(Vec::len).sum()
    }

    /// Materializes rooms in ingestion order.
    ///
    /// Fails on the first unknown label, synthetic `wall` label, or invalid
    /// rectangle.
    pub fn rooms(&self) -> Result<Vec<Room>, PlanError> {
        let mut rooms = Vec::with_capacity(self.rect_count());
        for (label, rects) in self.zones.iter() {
            let program = ProgramType::from_label(label)
                .filter(|p| !p.is_synthetic())
                .ok_or_else(|| PlanError::InvalidProgramType(label.clone()))?;
            for coords in rects {
                rooms.push(Room::from_coords(rooms.len(), program, coords)?);
            }
        }
        Ok(rooms)
    }
}

/// Area totals accumulated during ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AreaTotals {
    /// Area of all rooms.
    pub total_area: i64,
    /// Area of all rooms except OBS.
    pub total_usable_area: i64,
    /// Accumulated the same way as `total_usable_area`.
    pub total_used_area: i64,
}

impl AreaTotals {
    /// Accumulates the totals over a set of rooms.
    pub fn from_rooms(rooms: &[Room]) -> Self {
        let mut totals = AreaTotals::default();
        for room in rooms {
            totals.total_area = totals.total_area.saturating_add(room.area());
            if room.program().is_usable() {
                totals.total_usable_area = totals.total_usable_area.saturating_add(room.area());
                totals.total_used_area = totals.total_used_area.saturating_add(room.area());
            }
        }
        totals
    }
}

/// The full metrics record returned for one layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    #[serde(flatten)]
    pub scores: ScoreReport,
    #[serde(flatten)]
    pub totals: AreaTotals,
}

/// Builds the floor plan for a layout under the given size policy.
pub fn build_plan(layout: &Layout, policy: &SizePolicy) -> Result<(FloorPlan, AreaTotals), PlanError> {
    let rooms = layout.rooms()?;
    let totals = AreaTotals::from_rooms(&rooms);
    let desired = policy.desired_size(totals.total_usable_area);
    let plan = FloorPlan::new(rooms, desired)?;
    Ok((plan, totals))
}

/// Scores a layout with a caller-supplied size policy.
pub fn evaluate_with_policy(layout: &Layout, policy: &SizePolicy) -> Result<EvaluationReport, PlanError> {
    let (plan, totals) = build_plan(layout, policy)?;
    let scores = eval::score(&plan);
    debug!(
        rooms = plan.rooms().len(),
        total_area = totals.total_area,
        "evaluated layout"
    );
    Ok(EvaluationReport { scores, totals })
}

/// Scores a layout with the default size policy.
pub fn evaluate(layout: &Layout) -> Result<EvaluationReport, PlanError> {
    evaluate_with_policy(layout, &SizePolicy::default())
}

/// Scores independent layouts in parallel. Results keep the input order.
pub fn evaluate_batch(
    layouts: &[Layout],
    policy: &SizePolicy,
) -> Vec<Result<EvaluationReport, PlanError>> {
    layouts
        .par_iter()
        .map(|layout| evaluate_with_policy(layout, policy))
        .collect()
}
