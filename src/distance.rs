// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sanctioned brevet distances.
//!
//! | Variant | Nominal | Longest final control |
//! |---------|---------|-----------------------|
//! | [`BrevetDistance::Km200`] | 200 km | 240 km |
//! | [`BrevetDistance::Km300`] | 300 km | 360 km |
//! | [`BrevetDistance::Km400`] | 400 km | 480 km |
//! | [`BrevetDistance::Km600`] | 600 km | 720 km |
//! | [`BrevetDistance::Km1000`] | 1000 km | 1200 km |
//!
//! A route may run up to 20 % longer than its nominal distance; controls in
//! that overage are final controls and are timed as if placed exactly at the
//! nominal distance.

use crate::error::ControlTimeError;
use qtty::Kilometers;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fraction of the nominal distance a route may exceed it by.
pub const OVERAGE_ALLOWANCE: f64 = 0.2;

/// Nominal length of an ACP brevet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BrevetDistance {
    Km200,
    Km300,
    Km400,
    Km600,
    Km1000,
}

impl BrevetDistance {
    /// All sanctioned distances, shortest first.
    pub const ALL: [Self; 5] = [
        Self::Km200,
        Self::Km300,
        Self::Km400,
        Self::Km600,
        Self::Km1000,
    ];

    /// Match a raw kilometre value against the sanctioned set.
    pub fn from_km(km: f64) -> Result<Self, ControlTimeError> {
        Self::ALL
            .into_iter()
            .find(|d| d.km() == km)
            .ok_or(ControlTimeError::InvalidBrevetDistance { km })
    }

    /// Nominal distance in kilometres as a bare number.
    #[inline]
    pub const fn km(self) -> f64 {
        match self {
            Self::Km200 => 200.0,
            Self::Km300 => 300.0,
            Self::Km400 => 400.0,
            Self::Km600 => 600.0,
            Self::Km1000 => 1000.0,
        }
    }

    /// Nominal distance.
    #[inline]
    pub const fn nominal(self) -> Kilometers {
        Kilometers::new(self.km())
    }

    /// Longest control distance accepted for this brevet.
    #[inline]
    pub fn max_control(self) -> Kilometers {
        Kilometers::new(self.km() * (1.0 + OVERAGE_ALLOWANCE))
    }

    /// Position of this distance in [`BrevetDistance::ALL`].
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<f64> for BrevetDistance {
    type Error = ControlTimeError;

    fn try_from(km: f64) -> Result<Self, Self::Error> {
        Self::from_km(km)
    }
}

impl From<BrevetDistance> for Kilometers {
    #[inline]
    fn from(distance: BrevetDistance) -> Self {
        distance.nominal()
    }
}

impl fmt::Display for BrevetDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.km())
    }
}
