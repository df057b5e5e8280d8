// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timing rules injected into the calculator.
//!
//! [`BrevetRules`] holds every constant the algorithm reads: the two speed
//! tables, the neutralised-start rule for controls near the start, and the
//! overall time limit of each sanctioned distance. [`BrevetRules::ACP`] is
//! the built-in table from the ACP / RUSA control-time rules:
//!
//! | Brevet | Overall limit |
//! |--------|---------------|
//! | 200 km | 13h30 |
//! | 300 km | 20h00 |
//! | 400 km | 27h00 |
//! | 600 km | 40h00 |
//! | 1000 km | 75h00 |

use crate::distance::BrevetDistance;
use crate::elapsed::Elapsed;
use crate::error::ControlTimeError;
use crate::speed::{self, Speed, SpeedTable, ACP_MAXIMUM_SPEEDS, ACP_MINIMUM_SPEEDS};
use qtty::Kilometers;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closing-time rule for controls close to the start.
///
/// A control at distance `d ≤ distance_km` closes at `d / speed + grace`.
/// This also makes the start control close `grace` after the start.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NeutralStart {
    /// Last distance, in kilometres, covered by the rule.
    pub distance_km: f64,
    /// Speed used inside the neutralised zone.
    pub speed: Speed,
    /// Fixed time added on top of the riding time.
    pub grace: Elapsed,
}

impl NeutralStart {
    /// Whether a control at `distance` falls under this rule.
    #[inline]
    pub fn covers(&self, distance: Kilometers) -> bool {
        distance.value() <= self.distance_km
    }

    /// Closing offset for a control covered by this rule.
    pub fn close_after(&self, distance: Kilometers) -> Elapsed {
        (Elapsed::at_speed(distance, self.speed) + self.grace).carry()
    }
}

/// Complete rule set for computing control times.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BrevetRules {
    /// Maximum speeds, for opening times.
    pub maximum_speeds: SpeedTable,
    /// Minimum speeds, for closing times.
    pub minimum_speeds: SpeedTable,
    /// Closing rule for controls near the start.
    pub neutral_start: NeutralStart,
    /// Overall time limit per distance, ordered like [`BrevetDistance::ALL`].
    pub time_limits: [Elapsed; 5],
}

impl BrevetRules {
    /// ACP / RUSA rules.
    pub const ACP: Self = Self {
        maximum_speeds: Cow::Borrowed(&ACP_MAXIMUM_SPEEDS),
        minimum_speeds: Cow::Borrowed(&ACP_MINIMUM_SPEEDS),
        neutral_start: NeutralStart {
            distance_km: 60.0,
            speed: Speed::new(20.0),
            grace: Elapsed::new(1, 0.0),
        },
        time_limits: [
            Elapsed::new(13, 30.0),
            Elapsed::new(20, 0.0),
            Elapsed::new(27, 0.0),
            Elapsed::new(40, 0.0),
            Elapsed::new(75, 0.0),
        ],
    };

    /// Overall time limit for `brevet`.
    #[inline]
    pub fn time_limit(&self, brevet: BrevetDistance) -> Elapsed {
        self.time_limits[brevet.index()]
    }

    /// Check the rules for internal consistency.
    ///
    /// Both speed tables must reach the longest nominal distance, the
    /// neutralised start must be well formed, and every time limit must be
    /// at least the opening offset of the nominal distance, so that a final
    /// control never closes before it opens.
    pub fn validate(&self) -> Result<(), ControlTimeError> {
        let longest = BrevetDistance::Km1000.km();
        speed::validate("maximum speed", &self.maximum_speeds, longest)?;
        speed::validate("minimum speed", &self.minimum_speeds, longest)?;

        let neutral = &self.neutral_start;
        let distance_ok = neutral.distance_km.is_finite() && neutral.distance_km >= 0.0;
        if !distance_ok || !neutral.speed.is_valid() {
            return Err(ControlTimeError::InvalidRules {
                reason: format!(
                    "neutralised start must have a non-negative distance and positive speed, got {} km at {}",
                    neutral.distance_km, neutral.speed
                ),
            });
        }

        for brevet in BrevetDistance::ALL {
            let limit = self.time_limit(brevet).round_to_minute();
            let open = speed::accumulate(&self.maximum_speeds, brevet.nominal()).round_to_minute();
            if limit < open {
                return Err(ControlTimeError::InvalidRules {
                    reason: format!(
                        "time limit {limit} for {brevet} is shorter than its opening offset {open}"
                    ),
                });
            }
        }
        Ok(())
    }
}

impl Default for BrevetRules {
    fn default() -> Self {
        Self::ACP
    }
}
