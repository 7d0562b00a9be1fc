use serde::{Deserialize, Serialize};

use crate::{
    libraries::constants::{MAX_TICK, MIN_TICK},
    pool::types::PoolTickSpacing,
};
use types::{PlannedRange, RangeKind, TickRange};

pub mod types;


/// Lowest tick usable at `tick_spacing`, MIN_TICK rounded towards zero onto
/// the spacing grid. `tick_spacing` must be positive.
pub fn get_min_tick(tick_spacing: i32) -> i32 {
    (MIN_TICK / tick_spacing) * tick_spacing
}

/// Highest tick usable at `tick_spacing`. `tick_spacing` must be positive.
pub fn get_max_tick(tick_spacing: i32) -> i32 {
    (MAX_TICK / tick_spacing) * tick_spacing
}

pub fn full_range(tick_spacing: PoolTickSpacing) -> TickRange {
    // a valid spacing never exceeds MAX_TICK, so min < 0 < max
    TickRange::from_bounds(
        get_min_tick(tick_spacing.get()),
        get_max_tick(tick_spacing.get()),
    )
}

/// Which positions a bootstrapped pool receives.
///
/// Every policy starts with the full range position so the pool is liquid
/// before any narrower position lands on it. The narrow boundaries are fixed
/// and sit on the grid of the MEDIUM tier (spacing 60); they are not checked
/// against other spacings here.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickRangePolicy {
    FullRange,
    /// Full range, then [-60, 60], then [-120, 120].
    Symmetric,
    /// Full range, then [0, 60], then [-120, 0]. Both narrow positions touch
    /// tick zero, one from each side, so tick zero gets initialized.
    ZeroStraddling,
}

impl TickRangePolicy {
    pub fn ranges(self, tick_spacing: PoolTickSpacing) -> Vec<PlannedRange> {
        let mut planned = vec![PlannedRange {
            range: full_range(tick_spacing),
            kind: RangeKind::FullRange,
        }];

        let auxiliary: &[(i32, i32)] = match self {
            TickRangePolicy::FullRange => &[],
            TickRangePolicy::Symmetric => &[(-60, 60), (-120, 120)],
            TickRangePolicy::ZeroStraddling => &[(0, 60), (-120, 0)],
        };

        planned.extend(
            auxiliary
                .iter()
                .map(|&(tick_lower, tick_upper)| PlannedRange {
                    range: TickRange::from_bounds(tick_lower, tick_upper),
                    kind: RangeKind::Auxiliary,
                }),
        );

        planned
    }
}
