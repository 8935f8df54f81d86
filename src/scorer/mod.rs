/*
Copyright 2022 - 2023 Jakub Lewandowski

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

//! Module containing the actual scoring engine.
//!
//! Scoring a flight runs through a fixed pipeline: the fixes are
//! projected to a plane, a dense matrix of pairwise plane distances
//! is built, a layered sweep fills the score table, and the winning
//! turnpoints are read back out of the table. The height-constrained
//! variants add an outer search that re-runs the sweep with forbidden
//! starting fixes until the altitude rule holds.
//!
//! Routes can also be searched against the reversed fix sequence. The
//! sweep only ever connects a fix to earlier ones, so on many flights
//! whose best endpoint lies close to the start the reversed run
//! retires its endpoint candidates much faster; the results are
//! mapped back to the original fix order before they are returned.

pub mod configuration;
pub mod distance;
mod graph;
mod height;
mod path;
mod projection;


use log::debug;
use ndarray::Array2;
use rustc_hash::FxHashSet;

use self::configuration::Config;
use self::projection::FlatProjection;
use crate::errors::{ConfigError, ScoreError};
use crate::{Float, MatrixElement};

/// Front-facing struct of the scoring engine, holding the checked
/// scoring rules. All tables live only for the duration of a single
/// call; the engine itself is cheap to keep around and reuse.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct Scorer {
    config: Config,
}

impl Scorer {
    /// Scorer constructor. The configuration is checked once here so
    /// the scoring methods can rely on it.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.check_bounds()?;

        Ok(Scorer { config })
    }

    /// Function finding the route of maximal total distance, ignoring
    /// the altitude rule.
    ///
    /// Returns the indices of `legs + 1` turnpoints in fix order. When
    /// the input arrays differ in length or hold fewer than two fixes
    /// there is nothing to score and the route is empty.
    pub fn score(
        &self,
        lat: &[Float],
        lon: &[Float],
        alt: &[Float],
    ) -> Result<Vec<usize>, ScoreError> {
        if !scorable(lat, lon, alt) {
            return Ok(vec![]);
        }

        let dist_matrix = self.distance_matrix(lat, lon)?;
        let graph = graph::build(dist_matrix.view(), self.config.legs, &FxHashSet::default());

        Ok(path::reconstruct(&graph, dist_matrix.view(), None))
    }

    /// Like [`Scorer::score`], but searching the flight back to front.
    /// The returned indices refer to the original fix order.
    pub fn score_backwards(
        &self,
        lat: &[Float],
        lon: &[Float],
        alt: &[Float],
    ) -> Result<Vec<usize>, ScoreError> {
        if !scorable(lat, lon, alt) {
            return Ok(vec![]);
        }

        let lat_rev = reversed(lat);
        let lon_rev = reversed(lon);

        let dist_matrix = self.distance_matrix(&lat_rev, &lon_rev)?;
        let graph = graph::build(dist_matrix.view(), self.config.legs, &FxHashSet::default());
        let route = path::reconstruct(&graph, dist_matrix.view(), None);

        Ok(flip_route(&route, lat.len()))
    }

    /// Function finding the best route whose starting turnpoint is at
    /// most `height_limit` metres above its finishing turnpoint.
    ///
    /// The unconstrained optimum is tried first; flights that gain
    /// altitude overall are scored in that single pass. Otherwise
    /// candidate endpoints are searched until no endpoint could beat
    /// the best legal route found.
    pub fn score_with_height(
        &self,
        lat: &[Float],
        lon: &[Float],
        alt: &[Float],
    ) -> Result<Vec<usize>, ScoreError> {
        if !scorable(lat, lon, alt) {
            return Ok(vec![]);
        }

        let dist_matrix = self.distance_matrix(lat, lon)?;
        let graph = graph::build(dist_matrix.view(), self.config.legs, &FxHashSet::default());

        let search = height::solve(
            dist_matrix.view(),
            graph,
            alt,
            self.config.legs,
            self.config.height_limit,
        )?;

        Ok(search.route)
    }

    /// Like [`Scorer::score_with_height`], but searching the flight
    /// back to front. The returned indices refer to the original fix
    /// order.
    pub fn score_with_height_backwards(
        &self,
        lat: &[Float],
        lon: &[Float],
        alt: &[Float],
    ) -> Result<Vec<usize>, ScoreError> {
        if !scorable(lat, lon, alt) {
            return Ok(vec![]);
        }

        let lat_rev = reversed(lat);
        let lon_rev = reversed(lon);
        let alt_rev = reversed(alt);

        let dist_matrix = self.distance_matrix(&lat_rev, &lon_rev)?;
        let graph = graph::build(dist_matrix.view(), self.config.legs, &FxHashSet::default());

        let search = height::solve(
            dist_matrix.view(),
            graph,
            &alt_rev,
            self.config.legs,
            self.config.height_limit,
        )?;

        Ok(flip_route(&search.route, lat.len()))
    }

    /// Function scoring the flight in both directions and returning
    /// the height-legal route with the larger great-circle total.
    ///
    /// Which direction wins depends on where the flight's best
    /// endpoint lies, so running both is the safe default for callers
    /// that just want the final score. The two passes run one after
    /// the other, keeping a single distance matrix alive at a time.
    pub fn score_best(
        &self,
        lat: &[Float],
        lon: &[Float],
        alt: &[Float],
    ) -> Result<Vec<usize>, ScoreError> {
        let forward = self.score_with_height(lat, lon, alt)?;
        let backward = self.score_with_height_backwards(lat, lon, alt)?;

        let forward_km = distance::path_distance(&forward, lat, lon);
        let backward_km = distance::path_distance(&backward, lat, lon);

        debug!(
            "Forward route scores {:.2} km, backward route {:.2} km",
            forward_km, backward_km
        );

        if backward_km > forward_km {
            Ok(backward)
        } else {
            Ok(forward)
        }
    }

    /// Function building the plane distance matrix for a fix window,
    /// refusing windows above the configured fix ceiling before the
    /// quadratic allocation is attempted.
    fn distance_matrix(
        &self,
        lat: &[Float],
        lon: &[Float],
    ) -> Result<Array2<MatrixElement>, ScoreError> {
        if lat.len() > self.config.max_fixes {
            return Err(ScoreError::TooManyFixes {
                fixes: lat.len(),
                limit: self.config.max_fixes,
            });
        }

        debug!("Building distance matrix for {} fixes", lat.len());

        let projection = FlatProjection::new(lat);
        let projected = projection.project_all(lat, lon);

        Ok(distance::distance_matrix(&projected))
    }
}

/// The caller-provided arrays must describe one fix sequence; when
/// they do not, or when the flight is shorter than two fixes, there
/// is nothing to score.
fn scorable(lat: &[Float], lon: &[Float], alt: &[Float]) -> bool {
    lat.len() == lon.len() && lon.len() == alt.len() && lat.len() >= 2
}

/// Function mapping a route found on the reversed fix sequence back
/// to indices of the original one.
fn flip_route(route: &[usize], fixes: usize) -> Vec<usize> {
    route.iter().rev().map(|&index| fixes - 1 - index).collect()
}

fn reversed(values: &[Float]) -> Vec<Float> {
    values.iter().rev().copied().collect()
}
