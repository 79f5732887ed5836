//! Desired-size policy.
//!
//! Targets are expressed as a fraction of the plan's total usable area per
//! program type. The default policy targets zero area for each of the seven
//! user-facing program types.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::plan::{DesiredSize, ProgramType, SIZED_PROGRAM_TYPES};

/// Errors that can occur when configuring a size policy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    #[error("unknown program type: '{0}'")]
    UnknownProgram(String),

    #[error("program type '{0}' cannot carry a size target")]
    SyntheticProgram(String),

    #[error("invalid fraction '{0}': expected a finite number >= 0")]
    InvalidFraction(String),

    #[error("malformed target '{0}': expected TYPE=FRACTION")]
    Malformed(String),

    #[error("failed to read policy: {0}")]
    Io(String),

    #[error("failed to parse policy JSON: {0}")]
    Json(String),
}

/// Fraction of total usable area targeted for each program type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizePolicy {
    fractions: BTreeMap<ProgramType, f64>,
}

impl Default for SizePolicy {
    fn default() -> Self {
        SizePolicy {
            fractions: SIZED_PROGRAM_TYPES.iter().map(|&p| (p, 0.0)).collect(),
        }
    }
}

fn check_fraction(program: ProgramType, fraction: f64) -> Result<(), PolicyError> {
    if program.is_synthetic() {
        return Err(PolicyError::SyntheticProgram(program.label().to_string()));
    }
    if !fraction.is_finite() || fraction < 0.0 {
        return Err(PolicyError::InvalidFraction(fraction.to_string()));
    }
    Ok(())
}

impl SizePolicy {
    /// A policy with no targets at all. Plans need at least one target, so
    /// this is only useful as a starting point for [`SizePolicy::set`].
    pub fn empty() -> Self {
        SizePolicy {
            fractions: BTreeMap::new(),
        }
    }

    /// Sets the target fraction for one program type.
    pub fn set(&mut self, program: ProgramType, fraction: f64) -> Result<(), PolicyError> {
        check_fraction(program, fraction)?;
        self.fractions.insert(program, fraction);
        Ok(())
    }

    /// Returns the target fraction for a program type, if it has one.
    pub fn fraction(&self, program: ProgramType) -> Option<f64> {
        self.fractions.get(&program).copied()
    }

    pub fn fractions(&self) -> &BTreeMap<ProgramType, f64> {
        &self.fractions
    }

    /// Applies a `TYPE=FRACTION` assignment such as `WORK=0.4`.
    pub fn apply_assignment(&mut self, s: &str) -> Result<(), PolicyError> {
        let (label, value) = s
            .split_once('=')
            .ok_or_else(|| PolicyError::Malformed(s.to_string()))?;
        self.apply_option(label.trim(), value.trim())
    }

    /// Applies a label/value pair, e.g. from a protocol option.
    pub fn apply_option(&mut self, label: &str, value: &str) -> Result<(), PolicyError> {
        let program = ProgramType::from_label(label)
            .ok_or_else(|| PolicyError::UnknownProgram(label.to_string()))?;
        let fraction: f64 = value
            .parse()
            .map_err(|_| PolicyError::InvalidFraction(value.to_string()))?;
        self.set(program, fraction)
    }

    /// Computes the desired aggregate area per program type.
    pub fn desired_size(&self, total_usable_area: i64) -> DesiredSize {
        self.fractions
            .iter()
            .map(|(&p, &f)| (p, f * total_usable_area as f64))
            .collect()
    }

    /// Parses a policy from a JSON object mapping labels to fractions.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: SizePolicy =
            serde_json::from_str(json).map_err(|e| PolicyError::Json(e.to_string()))?;
        for (&p, &f) in policy.fractions.iter() {
            check_fraction(p, f)?;
        }
        Ok(policy)
    }

    /// Loads a policy from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PolicyError> {
        let data = fs::read_to_string(path)
            .map_err(|e| PolicyError::Io(format!("{}: {}", path.display(), e)))?;
        SizePolicy::from_json(&data)
    }
}
