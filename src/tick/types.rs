use std::fmt;

use crate::{
    pool::types::PoolTickSpacing,
    tick::{get_max_tick, get_min_tick},
};

/// Lower and upper tick of a liquidity position, both inclusive.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct TickRange {
    tick_lower: i32,
    tick_upper: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTickRange {
    pub tick_lower: i32,
    pub tick_upper: i32,
}

impl TickRange {
    pub fn new(tick_lower: i32, tick_upper: i32) -> Result<Self, InvalidTickRange> {
        if tick_lower >= tick_upper {
            return Err(InvalidTickRange {
                tick_lower,
                tick_upper,
            });
        }
        Ok(Self {
            tick_lower,
            tick_upper,
        })
    }

    // callers guarantee tick_lower < tick_upper
    pub(crate) const fn from_bounds(tick_lower: i32, tick_upper: i32) -> Self {
        Self {
            tick_lower,
            tick_upper,
        }
    }

    pub fn tick_lower(&self) -> i32 {
        self.tick_lower
    }

    pub fn tick_upper(&self) -> i32 {
        self.tick_upper
    }

    /// True when both boundaries sit on the spacing grid and inside the
    /// usable tick bounds for that spacing.
    pub fn is_usable_with(&self, tick_spacing: PoolTickSpacing) -> bool {
        let spacing = tick_spacing.get();
        self.tick_lower % spacing == 0
            && self.tick_upper % spacing == 0
            && self.tick_lower >= get_min_tick(spacing)
            && self.tick_upper <= get_max_tick(spacing)
    }
}

impl fmt::Display for TickRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.tick_lower, self.tick_upper)
    }
}

/// Whether a planned position is the pool-wide one or a narrow one placed
/// on top of it. Decides the deposited amounts.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum RangeKind {
    FullRange,
    Auxiliary,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct PlannedRange {
    pub range: TickRange,
    pub kind: RangeKind,
}
