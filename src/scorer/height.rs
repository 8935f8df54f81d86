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

//! Module with the iterative search for the best route that also
//! satisfies the altitude rule.
//!
//! The table sweep only knows the fix a partial route currently ends
//! at, so it cannot enforce a rule coupling the start and the finish.
//! The search instead fixes one candidate endpoint at a time, forbids
//! every fix too high to legally start a route finishing there, and
//! re-runs the sweep under that mask. The unconstrained table is kept
//! as an upper bound: once no unvisited endpoint scores above the best
//! legal route found, nothing better can exist and the search stops.
//! Each iteration retires one endpoint, so at most one iteration per
//! fix is ever run.

use log::debug;
use ndarray::{Array2, ArrayView2};
use rustc_hash::FxHashSet;

use super::{graph, path};
use crate::errors::SolverError;
use crate::{Float, MatrixElement};

/// Outcome of the height-constrained search.
#[derive(Clone, PartialEq, Debug)]
pub(super) struct Search {
    pub(super) route: Vec<usize>,
    pub(super) iterations: usize,
}

/// The altitude rule: a route may not lose more than `height_limit`
/// metres between its starting and finishing turnpoint.
fn height_legal(alt: &[Float], route: &[usize], height_limit: Float) -> bool {
    alt[route[0]] - alt[*route.last().unwrap()] <= height_limit
}

/// Function running the branch-and-bound search over candidate
/// endpoints. Consumes the unconstrained score table built by the
/// caller; the distance matrix is shared by all iterations and never
/// rebuilt.
pub(super) fn solve(
    dist_matrix: ArrayView2<MatrixElement>,
    mut graph: Array2<Float>,
    alt: &[Float],
    legs: usize,
    height_limit: Float,
) -> Result<Search, SolverError> {
    let route = path::reconstruct(&graph, dist_matrix, None);

    if height_legal(alt, &route, height_limit) {
        return Ok(Search {
            route,
            iterations: 0,
        });
    }

    debug!("Unconstrained optimum breaks the altitude rule, searching endpoint candidates");

    // snapshot of the unconstrained table, used purely as an upper
    // bound on what any endpoint could still score
    let mut original_graph = graph.clone();

    let mut visited: FxHashSet<usize> = FxHashSet::default();
    let mut lower_bound: Float = 0.0;
    let mut best_route: Vec<usize> = vec![];
    let mut iterations = 0;

    loop {
        iterations += 1;

        let endpoint = {
            let last_row = graph.row(legs);
            path::argmax(
                last_row
                    .to_slice()
                    .expect("score table row is not contiguous"),
            )
        };

        // fixes higher than the endpoint allows can never legally
        // start a route finishing there
        let forbidden_starts: FxHashSet<usize> = alt
            .iter()
            .enumerate()
            .filter(|&(_, &fix_alt)| fix_alt - alt[endpoint] > height_limit)
            .map(|(index, _)| index)
            .collect();

        graph = graph::build(dist_matrix, legs, &forbidden_starts);
        let route = path::reconstruct(&graph, dist_matrix, Some(endpoint));

        if forbidden_starts.contains(&route[0]) {
            return Err(SolverError::ForbiddenStart {
                endpoint,
                start: route[0],
            });
        }

        if !height_legal(alt, &route, height_limit) {
            return Err(SolverError::HeightExceeded {
                endpoint,
                limit: height_limit,
            });
        }

        let distance = graph[[legs, endpoint]];
        if distance > lower_bound {
            lower_bound = distance;
            best_route = route;
        }

        // retire the endpoint in both tables so it is neither picked
        // again nor counted as a live candidate
        visited.insert(endpoint);
        for &retired in &visited {
            graph[[legs, retired]] = 0.0;
            original_graph[[legs, retired]] = 0.0;
        }

        let remaining = original_graph
            .row(legs)
            .iter()
            .filter(|&&score| score > lower_bound)
            .count();

        if remaining == 0 {
            debug!(
                "Height-constrained search finished after {} iterations",
                iterations
            );

            return Ok(Search {
                route: best_route,
                iterations,
            });
        }

        debug!("Candidate endpoints remaining: {}", remaining);
    }
}
