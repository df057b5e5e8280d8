// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every calculator operation.

use thiserror::Error;

/// Errors returned when computing control times.
///
/// Every variant is an input-validation failure detected before any time
/// is accumulated, except [`ControlTimeError::OutOfRange`], which is raised
/// when the resulting timestamp cannot be represented.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlTimeError {
    /// Control distance is negative, not finite, or beyond the permitted
    /// overage (120 % of the nominal brevet distance).
    #[error("invalid control distance {control_km} km (allowed range is 0..={max_km} km)")]
    InvalidDistance {
        /// Control distance supplied by the caller.
        control_km: f64,
        /// Largest distance accepted for the brevet.
        max_km: f64,
    },

    /// Brevet distance is not one of the sanctioned ACP distances.
    #[error("invalid brevet distance {km} km (expected one of 200, 300, 400, 600, 1000)")]
    InvalidBrevetDistance {
        /// Nominal distance supplied by the caller.
        km: f64,
    },

    /// Injected rules are inconsistent.
    #[error("invalid brevet rules: {reason}")]
    InvalidRules {
        /// What the validation rejected.
        reason: String,
    },

    /// The computed instant falls outside chrono's representable range.
    #[error("control time is out of the representable timestamp range")]
    OutOfRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = ControlTimeError::InvalidDistance {
            control_km: 1300.0,
            max_km: 1200.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("1300"));
        assert!(msg.contains("1200"));

        let err = ControlTimeError::InvalidBrevetDistance { km: 250.0 };
        assert!(err.to_string().contains("250"));
    }
}
