/*
Copyright 2022 Jakub Lewandowski

This file is part of Polygonal Aerial Route Scorer (PARS).

Polygonal Aerial Route Scorer (PARS) is a free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation; either version 3 of the License, or
(at your option) any later version.

Polygonal Aerial Route Scorer (PARS) is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with Polygonal Aerial Route Scorer (PARS). If not, see https://www.gnu.org/licenses/.
*/

//! Module responsible for holding and checking the scoring rules.
//!
//! The configuration uses `serde` to enforce strong typing and
//! automatic type checking, so callers can deserialize it straight
//! from whatever rule file their application carries. Every field has
//! a default matching the current contest convention.

use crate::constants::{DEFAULT_HEIGHT_LIMIT, DEFAULT_LEGS, DEFAULT_MAX_FIXES};
use crate::errors::ConfigError;
use crate::Float;
use serde::Deserialize;

/// Fields with the scoring rules applied to every flight.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Deserialize)]
pub struct Config {
    /// Number of straight legs in the scored route. The route visits
    /// `legs + 1` turnpoints including its start and finish.
    ///
    /// Cannot be smaller than `1`. Defaults to `6`; legacy rule sets
    /// scored `7` legs.
    #[serde(default = "Config::default_legs")]
    pub legs: usize,

    /// Maximal altitude loss (in metres) allowed between the start
    /// and the finish of the route.
    ///
    /// Must be finite and non-negative. Defaults to `1000.0`.
    #[serde(default = "Config::default_height_limit")]
    pub height_limit: Float,

    /// Ceiling on the number of fixes accepted for scoring.
    ///
    /// The dense distance matrix takes `max_fixes * max_fixes` floats,
    /// so this bound is what keeps a long recording from exhausting
    /// memory. Flights above it are refused and should be thinned
    /// (for example with a Ramer-Douglas-Peucker pass) by the caller.
    ///
    /// Cannot be smaller than `2`. Defaults to `15 000`.
    #[serde(default = "Config::default_max_fixes")]
    pub max_fixes: usize,
}

impl Config {
    fn default_legs() -> usize {
        DEFAULT_LEGS
    }

    fn default_height_limit() -> Float {
        DEFAULT_HEIGHT_LIMIT
    }

    fn default_max_fixes() -> usize {
        DEFAULT_MAX_FIXES
    }

    /// Checks if the scoring rules follow conventions and limits.
    pub fn check_bounds(&self) -> Result<(), ConfigError> {
        if self.legs < 1 {
            return Err(ConfigError::OutOfBounds(
                "Number of legs cannot be less than 1",
            ));
        }

        if !self.height_limit.is_finite() || self.height_limit < 0.0 {
            return Err(ConfigError::OutOfBounds(
                "Height limit must be finite and non-negative",
            ));
        }

        if self.max_fixes < 2 {
            return Err(ConfigError::OutOfBounds(
                "Fix ceiling cannot be less than 2",
            ));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            legs: Config::default_legs(),
            height_limit: Config::default_height_limit(),
            max_fixes: Config::default_max_fixes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_are_in_bounds() {
        let config = Config::default();

        assert_eq!(config.legs, 6);
        assert!(config.check_bounds().is_ok());
    }

    #[test]
    fn zero_legs_rejected() {
        let config = Config {
            legs: 0,
            ..Config::default()
        };

        assert!(config.check_bounds().is_err());
    }

    #[test]
    fn negative_height_limit_rejected() {
        let config = Config {
            height_limit: -1.0,
            ..Config::default()
        };

        assert!(config.check_bounds().is_err());
    }

    #[test]
    fn tiny_fix_ceiling_rejected() {
        let config = Config {
            max_fixes: 1,
            ..Config::default()
        };

        assert!(config.check_bounds().is_err());
    }
}
