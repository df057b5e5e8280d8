// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Speed tiers and band accumulation.
//!
//! A speed table is an ordered list of `(upper bound, speed)` pairs. Band `i`
//! covers `(upper[i-1], upper[i]]` (the first band starts at 0 km) and is
//! ridden at `speed[i]`. The time to reach a control is the sum of the time
//! spent in every band up to the control; distance past the last upper bound
//! is not counted.
//!
//! # ACP tables
//!
//! | Band | Maximum speed | Minimum speed |
//! |------|---------------|---------------|
//! | 0–200 km | 34 km/h | 15 km/h |
//! | 200–400 km | 32 km/h | 15 km/h |
//! | 400–600 km | 30 km/h | 15 km/h |
//! | 600–1000 km | 28 km/h | 11.428 km/h |

use crate::elapsed::Elapsed;
use crate::error::ControlTimeError;
use qtty::Kilometers;
use std::borrow::Cow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A constant average speed in kilometres per hour.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Speed(f64);

impl Speed {
    /// Create from a value in km/h.
    #[inline]
    pub const fn new(kmh: f64) -> Self {
        Self(kmh)
    }

    /// Speed in km/h.
    #[inline]
    pub const fn kmh(self) -> f64 {
        self.0
    }

    /// Strictly positive and finite.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km/h", self.0)
    }
}

/// One band of a speed table.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpeedTier {
    /// Upper bound of the band, in kilometres from the start.
    pub upper_km: f64,
    /// Speed used for the distance inside the band.
    pub speed: Speed,
}

impl SpeedTier {
    /// Band ending at `upper_km`, ridden at `kmh`.
    #[inline]
    pub const fn new(upper_km: f64, kmh: f64) -> Self {
        Self {
            upper_km,
            speed: Speed::new(kmh),
        }
    }
}

/// An ordered speed table, either borrowed from a built-in constant or owned.
pub type SpeedTable = Cow<'static, [SpeedTier]>;

/// Maximum average speeds, used for opening times.
pub const ACP_MAXIMUM_SPEEDS: [SpeedTier; 4] = [
    SpeedTier::new(200.0, 34.0),
    SpeedTier::new(400.0, 32.0),
    SpeedTier::new(600.0, 30.0),
    SpeedTier::new(1000.0, 28.0),
];

/// Minimum average speeds, used for closing times.
pub const ACP_MINIMUM_SPEEDS: [SpeedTier; 2] = [
    SpeedTier::new(600.0, 15.0),
    SpeedTier::new(1000.0, 11.428),
];

/// Time needed to cover `distance` through the bands of `tiers`.
///
/// Minutes are summed without rounding; the result is carried but not
/// rounded.
pub fn accumulate(tiers: &[SpeedTier], distance: Kilometers) -> Elapsed {
    let target = distance.value();
    let mut lower = 0.0;
    let mut total = Elapsed::ZERO;
    for tier in tiers {
        if target <= lower {
            break;
        }
        let span = target.min(tier.upper_km) - lower;
        total += Elapsed::at_speed(Kilometers::new(span), tier.speed);
        lower = tier.upper_km;
    }
    total.carry()
}

/// Check that `tiers` is usable and reaches at least `reach_km`.
pub(crate) fn validate(
    name: &str,
    tiers: &[SpeedTier],
    reach_km: f64,
) -> Result<(), ControlTimeError> {
    let invalid = |reason: String| Err(ControlTimeError::InvalidRules { reason });

    let Some(last) = tiers.last() else {
        return invalid(format!("{name} table is empty"));
    };
    let mut lower = 0.0;
    for tier in tiers {
        if !tier.speed.is_valid() {
            return invalid(format!(
                "{name} table has non-positive speed {}",
                tier.speed
            ));
        }
        if !tier.upper_km.is_finite() || tier.upper_km <= lower {
            return invalid(format!(
                "{name} table bounds must increase strictly, got {} km after {lower} km",
                tier.upper_km
            ));
        }
        lower = tier.upper_km;
    }
    if last.upper_km < reach_km {
        return invalid(format!(
            "{name} table stops at {} km, short of {reach_km} km",
            last.upper_km
        ));
    }
    Ok(())
}
