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

//! Module walking the score table backwards to recover the turnpoint
//! indices that realise a table optimum.
//!
//! The table only stores scores, not the choices behind them, so the
//! winning predecessor of each layer is recomputed from the table and
//! the distance matrix. With a handful of legs against tens of
//! thousands of fixes this costs far less than keeping a full
//! back-pointer table alive during the sweep.

use crate::{Float, MatrixElement};
use ndarray::{Array2, ArrayView2};

/// Index of the first maximal score in a row.
///
/// Resolving ties to the smallest index keeps route reconstruction
/// deterministic.
pub(super) fn argmax(scores: &[Float]) -> usize {
    let mut best_index = 0;
    let mut best = Float::NEG_INFINITY;

    for (index, &score) in scores.iter().enumerate() {
        if score > best {
            best = score;
            best_index = index;
        }
    }

    best_index
}

/// Function recovering the turnpoint indices behind a score table
/// optimum, ending at `endpoint` or, when no endpoint is requested,
/// at the best-scored fix of the last row.
pub(super) fn reconstruct(
    graph: &Array2<Float>,
    dist_matrix: ArrayView2<MatrixElement>,
    endpoint: Option<usize>,
) -> Vec<usize> {
    let legs = graph.nrows() - 1;

    let last_row = graph.row(legs);
    let last_row = last_row
        .to_slice()
        .expect("score table row is not contiguous");

    let mut current = endpoint.unwrap_or_else(|| argmax(last_row));

    let mut route = Vec::with_capacity(legs + 1);
    route.push(current);

    for l in (0..legs).rev() {
        let dist_row = dist_matrix.row(current);
        let prev_row = graph.row(l);

        let mut best = Float::NEG_INFINITY;
        let mut best_fix = 0;
        for j in 0..=current {
            let option = prev_row[j] + Float::from(dist_row[j]);
            if option > best {
                best = option;
                best_fix = j;
            }
        }

        route.push(best_fix);
        current = best_fix;
    }

    route.reverse();
    route
}

#[cfg(test)]
mod tests {
    use ndarray::arr2;
    use rustc_hash::FxHashSet;

    use super::{argmax, reconstruct};
    use crate::scorer::graph;
    use crate::MatrixElement;

    #[test]
    fn argmax_takes_first_of_equals() {
        assert_eq!(argmax(&[0.0, 3.0, 3.0, 1.0]), 1);
        assert_eq!(argmax(&[2.0, 2.0]), 0);
        assert_eq!(argmax(&[-1.0]), 0);
    }

    #[test]
    fn route_follows_the_table_optimum() {
        // fix 1 sits off the 0-2 axis, so the best two-leg route
        // bends through it
        let matrix: ndarray::Array2<MatrixElement> = arr2(&[
            [0.0, 1.5, 2.0],
            [1.5, 0.0, 1.5],
            [2.0, 1.5, 0.0],
        ]);

        let graph = graph::build(matrix.view(), 2, &FxHashSet::default());
        let route = reconstruct(&graph, matrix.view(), None);

        assert_eq!(route, vec![0, 1, 2]);
    }

    #[test]
    fn requested_endpoint_is_honoured() {
        let matrix: ndarray::Array2<MatrixElement> = arr2(&[
            [0.0, 1.5, 2.0],
            [1.5, 0.0, 1.5],
            [2.0, 1.5, 0.0],
        ]);

        let graph = graph::build(matrix.view(), 2, &FxHashSet::default());
        let route = reconstruct(&graph, matrix.view(), Some(1));

        assert_eq!(route.last(), Some(&1));
        assert_eq!(route.len(), 3);
    }

    #[test]
    fn degenerate_flight_loops_on_one_fix() {
        let matrix: ndarray::Array2<MatrixElement> = arr2(&[[0.0]]);

        let graph = graph::build(matrix.view(), 3, &FxHashSet::default());
        let route = reconstruct(&graph, matrix.view(), None);

        assert_eq!(route, vec![0, 0, 0, 0]);
    }
}
