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

//! Module with error definitions for all
//! structs and functions in the scorer.

use crate::Float;
use thiserror::Error;

/// General errors gathering all errors that can be
/// returned by the scorer.
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Error in scorer configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(
        "Flight has {fixes} fixes but the scorer is capped at {limit}, thin the fix sequence before scoring"
    )]
    TooManyFixes { fixes: usize, limit: usize },

    #[error("Error while searching for a height-legal route: {0}")]
    Solver(#[from] SolverError),
}

/// Errors related to checking the scorer configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration component is out of bounds: {0}")]
    OutOfBounds(&'static str),
}

/// Errors reported when the height-constrained search contradicts
/// its own invariants. They always indicate a bug in the score table
/// and never a problem with the input data.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Route reconstructed for endpoint {endpoint} starts at forbidden fix {start}")]
    ForbiddenStart { endpoint: usize, start: usize },

    #[error(
        "Route reconstructed for endpoint {endpoint} loses more than {limit} m between start and finish"
    )]
    HeightExceeded { endpoint: usize, limit: Float },
}
