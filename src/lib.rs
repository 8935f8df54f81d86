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

//! Polygonal Aerial Route Scorer (PARS) is the scoring engine for
//! recorded glider flights, finding the free-distance route with a
//! fixed number of legs in the style of decentralised online contests.
//!
//! Given the latitudes, longitudes and pressure altitudes of a flight
//! already trimmed to the scorable window, the scorer selects the
//! turnpoints that maximise the total great-circle distance, with the
//! rule that the route may not lose more than a configured amount of
//! altitude between its start and finish.
//!
//! Reading IGC files and selecting the scorable window (tow release,
//! engine start) are left to the caller, which hands in three plain
//! arrays of equal length.

pub mod constants;
pub mod errors;
mod scorer;

pub use crate::scorer::configuration::Config;
pub use crate::scorer::distance::{haversine, path_distance};
pub use crate::scorer::Scorer;

/// Convenience type to set the floating-point precision
/// used on the public surface of the scorer.
pub type Float = f64;

/// Element type of the pairwise distance matrix.
///
/// The matrix is the only quadratically sized allocation the scorer
/// makes, so without the `double_precision` feature it is stored in
/// single precision, halving the footprint for long flights. The
/// rounding error of `f32` stays well below the error of the flat
/// projection the matrix is built from.
#[cfg(feature = "double_precision")]
pub(crate) type MatrixElement = f64;

#[cfg(not(feature = "double_precision"))]
pub(crate) type MatrixElement = f32;
