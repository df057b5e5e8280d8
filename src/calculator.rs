// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Control open and close times.
//!
//! [`ControlTimeCalculator`] turns a control distance, a brevet distance and
//! a start instant into the control's opening and closing instants:
//!
//! - **open**: time at the band maximum speeds. A control in the overage
//!   past the nominal distance opens as if it were placed at the nominal
//!   distance (200 km → 5h53, 400 km → 12h08, 600 km → 18h48, …).
//! - **close**: time at the band minimum speeds, except that controls in the
//!   first 60 km close at 20 km/h plus one hour, and final controls close at
//!   the brevet's overall time limit.
//!
//! Both offsets are rounded to the nearest minute once, after every band has
//! been summed, and added to the start instant without changing its
//! timezone.

use crate::distance::BrevetDistance;
use crate::elapsed::Elapsed;
use crate::error::ControlTimeError;
use crate::rules::BrevetRules;
use crate::speed;
use crate::window::ControlWindow;
use chrono::{DateTime, TimeZone};
use qtty::Kilometers;
use tracing::debug;

/// Computes control times from an immutable [`BrevetRules`].
#[derive(Debug, Clone, PartialEq)]
pub struct ControlTimeCalculator {
    rules: BrevetRules,
}

impl ControlTimeCalculator {
    /// Calculator using the built-in ACP rules.
    pub const ACP: Self = Self {
        rules: BrevetRules::ACP,
    };

    /// Build a calculator from custom rules after validating them.
    pub fn new(rules: BrevetRules) -> Result<Self, ControlTimeError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Rules this calculator reads.
    #[inline]
    pub fn rules(&self) -> &BrevetRules {
        &self.rules
    }

    /// Instant at which the control opens.
    pub fn open_time<Tz: TimeZone>(
        &self,
        control_km: f64,
        brevet: BrevetDistance,
        start: &DateTime<Tz>,
    ) -> Result<DateTime<Tz>, ControlTimeError> {
        let control = checked_control(control_km, brevet)?;
        let offset = self.open_offset(control, brevet);
        debug!(control_km, brevet = %brevet, offset = %offset, "open time");
        shift(start, offset)
    }

    /// Instant at which the control closes.
    pub fn close_time<Tz: TimeZone>(
        &self,
        control_km: f64,
        brevet: BrevetDistance,
        start: &DateTime<Tz>,
    ) -> Result<DateTime<Tz>, ControlTimeError> {
        let control = checked_control(control_km, brevet)?;
        let offset = self.close_offset(control, brevet);
        debug!(control_km, brevet = %brevet, offset = %offset, "close time");
        shift(start, offset)
    }

    /// Both instants of the control, validated once.
    pub fn control_window<Tz: TimeZone>(
        &self,
        control_km: f64,
        brevet: BrevetDistance,
        start: &DateTime<Tz>,
    ) -> Result<ControlWindow<Tz>, ControlTimeError> {
        let control = checked_control(control_km, brevet)?;
        let open = shift(start, self.open_offset(control, brevet))?;
        let close = shift(start, self.close_offset(control, brevet))?;
        Ok(ControlWindow::new(open, close))
    }

    /// Rounded time from the start until the control opens.
    ///
    /// `control` must already have passed `checked_control`.
    pub(crate) fn open_offset(&self, control: Kilometers, brevet: BrevetDistance) -> Elapsed {
        if control.value() == 0.0 {
            return Elapsed::ZERO;
        }
        let effective = Kilometers::new(control.value().min(brevet.km()));
        speed::accumulate(&self.rules.maximum_speeds, effective).round_to_minute()
    }

    /// Rounded time from the start until the control closes.
    ///
    /// `control` must already have passed `checked_control`.
    pub(crate) fn close_offset(&self, control: Kilometers, brevet: BrevetDistance) -> Elapsed {
        let neutral = &self.rules.neutral_start;
        let offset = if control >= brevet.nominal() {
            self.rules.time_limit(brevet)
        } else if neutral.covers(control) {
            neutral.close_after(control)
        } else {
            speed::accumulate(&self.rules.minimum_speeds, control)
        };
        offset.round_to_minute()
    }
}

impl Default for ControlTimeCalculator {
    fn default() -> Self {
        Self::ACP
    }
}

/// Reject negative, non-finite, and over-long control distances.
fn checked_control(
    control_km: f64,
    brevet: BrevetDistance,
) -> Result<Kilometers, ControlTimeError> {
    let max = brevet.max_control();
    if control_km.is_finite() && control_km >= 0.0 && control_km <= max.value() {
        return Ok(Kilometers::new(control_km));
    }
    debug!(control_km, max_km = max.value(), brevet = %brevet, "control distance rejected");
    Err(ControlTimeError::InvalidDistance {
        control_km,
        max_km: max.value(),
    })
}

fn shift<Tz: TimeZone>(
    start: &DateTime<Tz>,
    offset: Elapsed,
) -> Result<DateTime<Tz>, ControlTimeError> {
    let delta = offset.to_duration().ok_or(ControlTimeError::OutOfRange)?;
    start
        .clone()
        .checked_add_signed(delta)
        .ok_or(ControlTimeError::OutOfRange)
}
