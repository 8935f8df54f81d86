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

//! Module computing distances between fixes, both the plane
//! approximation driving the optimisation and the great-circle
//! distances credited to the final route.

use crate::constants::EARTH_RADIUS_KM;
use crate::{Float, MatrixElement};
use ndarray::parallel::prelude::*;
use ndarray::{Array2, Axis};

/// Function computing the dense matrix of pairwise Euclidean
/// distances between projected fixes.
///
/// The matrix is symmetric with a zero diagonal. The full square is
/// stored (rather than a condensed triangle) so the optimisation can
/// run over contiguous rows. Entries keep the radian units of the
/// projection; the Earth-radius scale is applied only when a route
/// is reported back in kilometres.
///
/// Rows are independent, so they are filled on the rayon thread pool.
pub(super) fn distance_matrix(points: &[(Float, Float)]) -> Array2<MatrixElement> {
    let fixes = points.len();
    let mut matrix = Array2::zeros((fixes, fixes));

    matrix
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut row)| {
            let (x_i, y_i) = points[i];

            for (j, &(x_j, y_j)) in points.iter().enumerate() {
                let dist = ((x_i - x_j).powi(2) + (y_i - y_j).powi(2)).sqrt();
                row[j] = dist as MatrixElement;
            }
        });

    matrix
}

/// Function computing the great-circle distance (in kilometres)
/// between two points specified in decimal degrees.
pub fn haversine(lat1: Float, lon1: Float, lat2: Float, lon2: Float) -> Float {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let arc = (d_lat * 0.5).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lon * 0.5).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * arc.sqrt().asin()
}

/// Function computing the distance (in kilometres) credited to a
/// route of fix indices.
///
/// The score table only holds plane approximations, so the
/// authoritative total has to be calculated back from the indices by
/// summing great-circle legs.
pub fn path_distance(path: &[usize], lat: &[Float], lon: &[Float]) -> Float {
    path.windows(2)
        .map(|leg| haversine(lat[leg[0]], lon[leg[0]], lat[leg[1]], lon[leg[1]]))
        .sum()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::{distance_matrix, haversine, path_distance};
    use crate::Float;

    #[test]
    fn one_degree_of_equator() {
        let dist = haversine(0.0, 0.0, 0.0, 1.0);

        assert_approx_eq!(Float, dist, 111.194_926, epsilon = 1e-3);
    }

    #[test]
    fn haversine_is_symmetric() {
        let there = haversine(50.1, 14.3, 51.2, 15.9);
        let back = haversine(51.2, 15.9, 50.1, 14.3);

        assert_approx_eq!(Float, there, back, epsilon = 1e-12);
    }

    #[test]
    fn matrix_is_symmetric_with_zero_diagonal() {
        let points = [(0.1, 0.2), (0.3, 0.1), (0.15, 0.35)];

        let matrix = distance_matrix(&points);

        for i in 0..points.len() {
            assert_eq!(matrix[[i, i]], 0.0);

            for j in 0..points.len() {
                assert_eq!(matrix[[i, j]], matrix[[j, i]]);
            }
        }
    }

    #[test]
    fn route_distance_sums_legs() {
        let lat = [0.0, 0.0, 0.0];
        let lon = [0.0, 1.0, 3.0];

        let total = path_distance(&[0, 1, 2], &lat, &lon);
        let legs = haversine(0.0, 0.0, 0.0, 1.0) + haversine(0.0, 1.0, 0.0, 3.0);

        assert_approx_eq!(Float, total, legs, epsilon = 1e-12);
    }

    #[test]
    fn empty_route_has_no_distance() {
        assert_eq!(path_distance(&[], &[], &[]), 0.0);
    }
}
