// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Open/close pair of a single control.

use chrono::{DateTime, TimeZone};
use std::fmt;

/// Opening and closing instants of a control, in the start's timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlWindow<Tz: TimeZone> {
    /// Earliest instant a rider may be validated.
    pub open: DateTime<Tz>,
    /// Latest instant a rider may be validated.
    pub close: DateTime<Tz>,
}

impl<Tz: TimeZone> ControlWindow<Tz> {
    /// Pair an opening and a closing instant.
    pub fn new(open: DateTime<Tz>, close: DateTime<Tz>) -> Self {
        ControlWindow { open, close }
    }

    /// Time the control stays open.
    pub fn duration(&self) -> chrono::Duration {
        self.close.clone().signed_duration_since(self.open.clone())
    }
}

impl<Tz: TimeZone> fmt::Display for ControlWindow<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.open, self.close)
    }
}
