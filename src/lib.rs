// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Brevet control times
//!
//! This crate computes the opening and closing instants of controls on an
//! ACP brevet, following the tiered-speed algorithm used by RUSA and the
//! Audax Club Parisien.
//!
//! # Core types
//!
//! - [`ControlTimeCalculator`] — computes open and close times from injected [`BrevetRules`].
//! - [`BrevetRules`] — speed tables, neutralised start, and overall time limits.
//! - [`BrevetDistance`] — the sanctioned nominal distances.
//! - [`Elapsed`] — hours plus fractional minutes, the intermediate of the accumulation.
//! - [`SpeedTier`] / [`Speed`] — one band of a speed table.
//! - [`ControlWindow`] — opening and closing instants of one control.
//! - [`ControlTimeError`] — typed validation errors.
//!
//! # Quick example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//!
//! let start = Utc.with_ymd_and_hms(2021, 2, 20, 14, 0, 0).unwrap();
//! let open = brevet::open_time(100.0, 200.0, &start).unwrap();
//! let close = brevet::close_time(100.0, 200.0, &start).unwrap();
//!
//! assert_eq!(open, Utc.with_ymd_and_hms(2021, 2, 20, 16, 56, 0).unwrap());
//! assert_eq!(close, Utc.with_ymd_and_hms(2021, 2, 20, 20, 40, 0).unwrap());
//! assert!(brevet::open_time(1300.0, 1000.0, &start).is_err());
//! ```

mod calculator;
mod distance;
mod elapsed;
mod error;
mod rules;
mod speed;
mod window;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calculator::ControlTimeCalculator;
pub use distance::{BrevetDistance, OVERAGE_ALLOWANCE};
pub use elapsed::Elapsed;
pub use error::ControlTimeError;
pub use rules::{BrevetRules, NeutralStart};
pub use speed::{accumulate, Speed, SpeedTable, SpeedTier, ACP_MAXIMUM_SPEEDS, ACP_MINIMUM_SPEEDS};
pub use window::ControlWindow;

use chrono::{DateTime, TimeZone};

/// Opening instant of a control, using the ACP rules.
///
/// `brevet_dist_km` must be one of 200, 300, 400, 600 or 1000. The result is
/// rounded to the minute and carries the timezone of `brevet_start_time`.
pub fn open_time<Tz: TimeZone>(
    control_dist_km: f64,
    brevet_dist_km: f64,
    brevet_start_time: &DateTime<Tz>,
) -> Result<DateTime<Tz>, ControlTimeError> {
    let brevet = BrevetDistance::from_km(brevet_dist_km)?;
    ControlTimeCalculator::ACP.open_time(control_dist_km, brevet, brevet_start_time)
}

/// Closing instant of a control, using the ACP rules.
///
/// A control at 0 km closes one hour after the start; a final control closes
/// at the brevet's overall time limit.
pub fn close_time<Tz: TimeZone>(
    control_dist_km: f64,
    brevet_dist_km: f64,
    brevet_start_time: &DateTime<Tz>,
) -> Result<DateTime<Tz>, ControlTimeError> {
    let brevet = BrevetDistance::from_km(brevet_dist_km)?;
    ControlTimeCalculator::ACP.close_time(control_dist_km, brevet, brevet_start_time)
}
