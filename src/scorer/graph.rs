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

//! Module with the layered sweep that fills the score table.
//!
//! The table has one row per leg count and one column per fix. Entry
//! `[l, k]` holds the best total plane distance over all routes of
//! `l` legs whose turnpoint indices never decrease and whose last
//! turnpoint is fix `k`. Row zero is all zeros (a route of no legs
//! scores nothing), and each following row is derived from the
//! previous one, so the whole table is filled in one pass over the
//! fixes.

use crate::{Float, MatrixElement};
use ndarray::{Array2, ArrayView2};
use rustc_hash::FxHashSet;

/// Score planted in row zero for fixes that may not start a route.
///
/// Negative infinity survives any later addition, so a route through
/// a forbidden start can never win a maximum. A large negative
/// sentinel would mostly work too but can be washed out by long
/// flights; infinity cannot.
pub(super) const FORBIDDEN: Float = Float::NEG_INFINITY;

/// Function calculating the `(legs + 1, fixes)` shaped score table
/// for a distance matrix.
///
/// A leg ending at fix `k` must depart from an earlier (or the same)
/// fix, so the inner maximum runs over the row prefix `..=k`. A leg
/// from a fix to itself costs nothing, which keeps the table well
/// defined even for flights shorter than the requested leg count.
pub(super) fn build(
    dist_matrix: ArrayView2<MatrixElement>,
    legs: usize,
    forbidden_starts: &FxHashSet<usize>,
) -> Array2<Float> {
    let fixes = dist_matrix.nrows();
    let mut graph: Array2<Float> = Array2::zeros((legs + 1, fixes));

    for &start in forbidden_starts {
        graph[[0, start]] = FORBIDDEN;
    }

    for k in 0..fixes {
        let dist_row = dist_matrix.row(k);
        let dist_row = dist_row
            .to_slice()
            .expect("distance matrix row is not contiguous");

        for l in 0..legs {
            let prev_row = graph.row(l);
            let prev_scores = prev_row
                .to_slice()
                .expect("score table row is not contiguous");

            let mut best = FORBIDDEN;
            for (&score, &leg_dist) in prev_scores[..=k].iter().zip(&dist_row[..=k]) {
                let option = score + Float::from(leg_dist);
                if option > best {
                    best = option;
                }
            }

            graph[[l + 1, k]] = best;
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use ndarray::arr2;
    use rustc_hash::FxHashSet;

    use super::{build, FORBIDDEN};
    use crate::{Float, MatrixElement};

    // three collinear fixes one unit apart
    fn line_matrix() -> ndarray::Array2<MatrixElement> {
        arr2(&[[0.0, 1.0, 2.0], [1.0, 0.0, 1.0], [2.0, 1.0, 0.0]])
    }

    #[test]
    fn zero_legs_score_nothing() {
        let matrix = line_matrix();

        let graph = build(matrix.view(), 2, &FxHashSet::default());

        for k in 0..3 {
            assert_eq!(graph[[0, k]], 0.0);
        }
    }

    #[test]
    fn one_leg_reaches_back_to_the_farthest_fix() {
        let matrix = line_matrix();

        let graph = build(matrix.view(), 2, &FxHashSet::default());

        assert_approx_eq!(Float, graph[[1, 0]], 0.0);
        assert_approx_eq!(Float, graph[[1, 1]], 1.0);
        assert_approx_eq!(Float, graph[[1, 2]], 2.0);
    }

    #[test]
    fn extra_legs_never_lower_the_score() {
        let matrix = line_matrix();

        let graph = build(matrix.view(), 3, &FxHashSet::default());

        for k in 0..3 {
            for l in 0..3 {
                assert!(graph[[l + 1, k]] >= graph[[l, k]]);
            }
        }
    }

    #[test]
    fn forbidden_start_is_never_profitable() {
        let matrix = line_matrix();
        let forbidden: FxHashSet<usize> = [0].into_iter().collect();

        let graph = build(matrix.view(), 2, &forbidden);

        assert_eq!(graph[[0, 0]], FORBIDDEN);
        // best two-leg route ending at fix 2 now starts at fix 1
        assert_approx_eq!(Float, graph[[2, 2]], 1.0);
    }
}
