// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Elapsed riding time as whole hours plus fractional minutes.
//!
//! [`Elapsed`] is the intermediate quantity of the band accumulation. Each
//! band contributes `((d - d mod v) / v, (d mod v) / v × 60)`; the minute parts are
//! summed as real numbers and rounded **once**, after the last band, so that
//! per-band rounding never compounds. [`Elapsed::carry`] folds minute
//! overflow into the hour count.

use crate::speed::Speed;
use qtty::*;
use std::fmt;
use std::ops::{Add, AddAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: f64 = 60.0;

/// Hours and minutes since the brevet start.
///
/// `minutes` may be fractional and may exceed 59 until [`Elapsed::carry`]
/// is applied.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Elapsed {
    hours: i64,
    minutes: f64,
}

impl Elapsed {
    /// No time at all.
    pub const ZERO: Self = Self::new(0, 0.0);

    /// Create from an hour count and a (possibly fractional) minute count.
    #[inline]
    pub const fn new(hours: i64, minutes: f64) -> Self {
        Self { hours, minutes }
    }

    /// Time to ride `distance` at constant `speed`.
    ///
    /// The leftover distance `d mod v` is turned into fractional minutes and
    /// the whole hours are counted from what remains, so both parts agree
    /// even when `d / v` rounds up to the next integer.
    pub fn at_speed(distance: Kilometers, speed: Speed) -> Self {
        let d = distance.value();
        let v = speed.kmh();
        let rem = d % v;
        let hours = ((d - rem) / v).round();
        Self::new(hours as i64, rem / v * MINUTES_PER_HOUR)
    }

    /// Fold whole multiples of 60 minutes into the hour count.
    pub fn carry(self) -> Self {
        let spill = (self.minutes / MINUTES_PER_HOUR).floor();
        Self::new(
            self.hours + spill as i64,
            self.minutes - spill * MINUTES_PER_HOUR,
        )
    }

    /// Round the minute part to the nearest whole minute (half away from
    /// zero) and carry.
    pub fn round_to_minute(self) -> Self {
        Self::new(self.hours, self.minutes.round()).carry()
    }

    /// Whole hours.
    #[inline]
    pub const fn hours(&self) -> i64 {
        self.hours
    }

    /// Minute part, not carried.
    #[inline]
    pub fn minutes(&self) -> Minutes {
        Minutes::new(self.minutes)
    }

    /// Hours and minutes folded into a single minute count.
    pub fn total_minutes(&self) -> Minutes {
        Hours::new(self.hours as f64).to::<Minute>() + self.minutes()
    }

    /// Round to the minute and convert into a [`chrono::Duration`].
    ///
    /// Returns `None` if the value does not fit in a `chrono::Duration`.
    pub fn to_duration(self) -> Option<chrono::Duration> {
        let rounded = self.round_to_minute();
        let hours = chrono::Duration::try_hours(rounded.hours)?;
        let minutes = chrono::Duration::try_minutes(rounded.minutes as i64)?;
        hours.checked_add(&minutes)
    }
}

impl Add for Elapsed {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.hours + rhs.hours, self.minutes + rhs.minutes)
    }
}

impl AddAssign for Elapsed {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for Elapsed {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.round_to_minute();
        write!(f, "{}h{:02}", shown.hours, shown.minutes as i64)
    }
}
