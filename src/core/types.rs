//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! application, with minimal logic - focusing on data representation.

use std::fmt;
use std::ops::{Add, Sub};

use serde::Serialize;

use crate::constants::input::NO_CYCLE;
use crate::error::CycleStepperError;

/// A cycle detection algorithm that can be traced and played back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Floyd's tortoise and hare: slow moves one node, fast moves two
    Floyd,
    /// Brent's power-of-two search: the tortoise teleports to the hare
    Brent,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Floyd, Algorithm::Brent];

    /// Names this algorithm gives its two pointers
    pub fn pointer_labels(self) -> PointerLabels {
        match self {
            Algorithm::Floyd => PointerLabels {
                slow: "slow",
                fast: "fast",
            },
            Algorithm::Brent => PointerLabels {
                slow: "tortoise",
                fast: "hare",
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Floyd => f.pad("floyd"),
            Algorithm::Brent => f.pad("brent"),
        }
    }
}

/// Display names of the slow and fast pointers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointerLabels {
    pub slow: &'static str,
    pub fast: &'static str,
}

/// A validated list description: the values and where the tail links back to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListInput {
    values: Vec<i64>,
    cycle: Option<usize>,
}

impl ListInput {
    /// Validate a raw cycle index against the values.
    ///
    /// `-1` means no cycle. Any other index must point into `values`.
    pub fn new(values: Vec<i64>, cycle_index: i64) -> Result<Self, CycleStepperError> {
        let cycle = if cycle_index == NO_CYCLE {
            None
        } else {
            match usize::try_from(cycle_index) {
                Ok(index) if index < values.len() => Some(index),
                _ => {
                    return Err(CycleStepperError::InvalidCycleIndex {
                        index: cycle_index,
                        len: values.len(),
                    });
                }
            }
        };

        Ok(Self { values, cycle })
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn cycle(&self) -> Option<usize> {
        self.cycle
    }

    /// The cycle index in its raw form, `-1` when there is no cycle
    pub fn raw_cycle_index(&self) -> i64 {
        self.cycle.map_or(NO_CYCLE, |index| index as i64)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A logical 2-D position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
