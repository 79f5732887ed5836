//! floorscore library.
//!
//! Scores rectangular floor-plan layouts against a fixed set of design
//! heuristics. A layout is turned into rooms, the rooms into an adjacency
//! graph annotated with shared-edge ratios, and the graph is scored by
//! independent rules.
//!
//! ```
//! use floorscore::{evaluate, Layout};
//!
//! let layout = Layout::from_json(r#"{"WORK": [[0, 0, 10, 10], [10, 0, 20, 10]]}"#).unwrap();
//! let report = evaluate(&layout).unwrap();
//! assert_eq!(report.scores.align_score, 0.0);
//! assert_eq!(report.totals.total_area, 200);
//! ```

pub mod engine;
pub mod error;
pub mod eval;
pub mod layout;
pub mod plan;
pub mod policy;
pub mod protocol;

pub use error::{GeometryError, PlanError};
pub use eval::{LoungeScore, ScoreReport};
pub use layout::{evaluate, evaluate_batch, evaluate_with_policy, AreaTotals, EvaluationReport, Layout};
pub use policy::{PolicyError, SizePolicy};
