// src/direction.rs
use std::{fmt, str::FromStr};

/// Which of the two sample relationships a record expresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The queried track contains a sample of the related track.
    ContainsSampleOf,
    /// The queried track was sampled in the related track.
    WasSampledIn,
}

impl Direction {
    /// Detail-page block order.
    pub const ALL: [Direction; 2] = [Direction::ContainsSampleOf, Direction::WasSampledIn];

    pub fn label(self) -> &'static str {
        match self {
            Direction::ContainsSampleOf => "Contains samples of",
            Direction::WasSampledIn => "Was sampled in",
        }
    }

    /// Path segment of the paged sub-listing, e.g. `/Nas/Halftime/samples/`.
    pub fn path_segment(self) -> &'static str {
        match self {
            Direction::ContainsSampleOf => "samples",
            Direction::WasSampledIn => "sampled",
        }
    }

    /// Stable export key.
    pub fn key(self) -> &'static str {
        match self {
            Direction::ContainsSampleOf => "contains_sample_of",
            Direction::WasSampledIn => "was_sampled_in",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contains_sample_of" | "samples" | "contains" => Ok(Direction::ContainsSampleOf),
            "was_sampled_in" | "sampled" => Ok(Direction::WasSampledIn),
            other => Err(format!("Unknown direction: {}", other)),
        }
    }
}
