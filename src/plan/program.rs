//! Program types for floor-plan zones.
//!
//! Every rectangle in a layout carries one program type from a closed set.
//! `Wall` is synthetic: it never comes from user input and only appears as
//! the neighbor of an uncovered edge fraction in the adjacency graph.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The number of program types, including the synthetic `Wall`.
pub const PROGRAM_TYPE_COUNT: usize = 9;

/// The functional category of a zone.
///
/// Variant order follows the lexicographic order of the labels, which is the
/// order rooms are ingested in. The `#[repr(u8)]` attribute enables use as an
/// array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ProgramType {
    Circ = 0,     // CIRC: circulation / hallway
    Entrance = 1, // ENTRANCE: lounge
    Meet = 2,     // MEET
    Obs = 3,      // OBS: obstruction, non-usable
    Operate = 4,  // OPERATE
    Wash = 5,     // WASH
    Work = 6,     // WORK
    Core = 7,     // core: elevator / stair core
    Wall = 8,     // wall: synthetic placeholder
}

/// All program types in index order.
pub const ALL_PROGRAM_TYPES: [ProgramType; PROGRAM_TYPE_COUNT] = [
    ProgramType::Circ,
    ProgramType::Entrance,
    ProgramType::Meet,
    ProgramType::Obs,
    ProgramType::Operate,
    ProgramType::Wash,
    ProgramType::Work,
    ProgramType::Core,
    ProgramType::Wall,
];

/// Program types that carry a desired-size target by default.
pub const SIZED_PROGRAM_TYPES: [ProgramType; 7] = [
    ProgramType::Circ,
    ProgramType::Operate,
    ProgramType::Work,
    ProgramType::Entrance,
    ProgramType::Meet,
    ProgramType::Wash,
    ProgramType::Obs,
];

impl ProgramType {
    /// Returns the label used in layouts and reports.
    pub const fn label(self) -> &'static str {
        match self {
            ProgramType::Circ => "CIRC",
            ProgramType::Entrance => "ENTRANCE",
            ProgramType::Meet => "MEET",
            ProgramType::Obs => "OBS",
            ProgramType::Operate => "OPERATE",
            ProgramType::Wash => "WASH",
            ProgramType::Work => "WORK",
            ProgramType::Core => "core",
            ProgramType::Wall => "wall",
        }
    }

    /// Parses a program type from its exact label. Labels are case-sensitive.
    pub fn from_label(label: &str) -> Option<ProgramType> {
        ALL_PROGRAM_TYPES.iter().copied().find(|p| p.label() == label)
    }

    /// Returns true for the graph-only `Wall` placeholder.
    pub const fn is_synthetic(self) -> bool {
        matches!(self, ProgramType::Wall)
    }

    /// Returns true if rooms of this type count toward usable area.
    pub const fn is_usable(self) -> bool {
        !matches!(self, ProgramType::Obs)
    }
}

impl fmt::Display for ProgramType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ProgramType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ProgramType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        ProgramType::from_label(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown program type '{}'", label)))
    }
}
