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

//! Module with methods to do computations of the flat geographical
//! projection used by the scorer.
//!
//! The projection is an equirectangular approximation centred on the
//! mean latitude of the fix window: latitude maps to `x` unchanged and
//! longitude is compressed by the cosine of the mean latitude. Plane
//! Euclidean distances then stand in for great-circle arcs while
//! candidate routes are compared, which is much cheaper than a
//! haversine evaluation per fix pair. The approximation holds for
//! windows spanning a few degrees of latitude (error below about
//! 0.3%); flights crossing whole continents would need a proper
//! spherical distance matrix instead.

use crate::Float;

/// Front-facing struct of the flat projection.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub(super) struct FlatProjection {
    mean_lat_cos: Float,
}

impl FlatProjection {
    /// Projection constructor from the latitudes (in degrees) of the
    /// scored window. The window must contain at least one fix.
    pub(super) fn new(lat: &[Float]) -> Self {
        let mean_lat =
            lat.iter().map(|&fix_lat| fix_lat.to_radians()).sum::<Float>() / lat.len() as Float;

        FlatProjection {
            mean_lat_cos: mean_lat.cos(),
        }
    }

    /// Function to project the geographic coordinates of one fix
    /// (in degrees) to plane coordinates in radian units.
    pub(super) fn project(&self, lat: Float, lon: Float) -> (Float, Float) {
        (lat.to_radians(), lon.to_radians() * self.mean_lat_cos)
    }

    /// Function to project a whole fix window. Caller-owned arrays
    /// are only read, never mutated.
    pub(super) fn project_all(&self, lat: &[Float], lon: &[Float]) -> Vec<(Float, Float)> {
        lat.iter()
            .zip(lon)
            .map(|(&fix_lat, &fix_lon)| self.project(fix_lat, fix_lon))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::FlatProjection;
    use crate::constants::EARTH_RADIUS_KM;
    use crate::scorer::distance::haversine;
    use crate::Float;

    #[test]
    fn latitude_maps_unchanged() {
        let proj = FlatProjection::new(&[54.0, 56.0]);

        let (x, _) = proj.project(55.0, 18.0);

        assert_approx_eq!(Float, x, (55.0 as Float).to_radians());
    }

    #[test]
    fn longitude_compressed_by_mean_latitude() {
        let proj = FlatProjection::new(&[60.0, 60.0]);

        let (_, y) = proj.project(60.0, 10.0);

        // cos 60 deg = 0.5
        assert_approx_eq!(Float, y, (10.0 as Float).to_radians() * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn plane_distance_close_to_great_circle() {
        let lat = [50.3, 50.7];
        let lon = [14.2, 15.1];

        let proj = FlatProjection::new(&lat);
        let (x1, y1) = proj.project(lat[0], lon[0]);
        let (x2, y2) = proj.project(lat[1], lon[1]);

        let plane_km =
            ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt() * EARTH_RADIUS_KM;
        let sphere_km = haversine(lat[0], lon[0], lat[1], lon[1]);

        let relative_error = (plane_km - sphere_km).abs() / sphere_km;
        assert!(relative_error < 0.003);
    }
}
