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

//! Module containing constants used by the scorer.

use crate::Float;

/// Mean Earth radius in kilometres.
///
/// All distances credited to a flight are great-circle distances on
/// the sphere of this radius, following the scoring convention of
/// online contests.
pub const EARTH_RADIUS_KM: Float = 6371.0;

/// Default number of legs in a scored route.
///
/// The route then visits `DEFAULT_LEGS + 1` turnpoints including its
/// start and finish. Legacy rule sets scored 7 legs.
pub const DEFAULT_LEGS: usize = 6;

/// Default limit (in metres) on the altitude lost between the start
/// and the finish of a route.
pub const DEFAULT_HEIGHT_LIMIT: Float = 1000.0;

/// Default ceiling on the number of fixes accepted for scoring.
///
/// The scorer allocates a dense fixes-by-fixes distance matrix, so
/// memory use grows quadratically with the flight length. Recorded
/// flights longer than the ceiling should be thinned by the caller
/// before scoring.
pub const DEFAULT_MAX_FIXES: usize = 15_000;
