// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::Coordinate;

/// Mean radius of Earth, in meters, rounded down.
const EARTH_RADIUS: f64 = 6_371_000.0;

const EARTH_DIAMETER: f64 = EARTH_RADIUS + EARTH_RADIUS;

/// Micro-degrees per degree.
const COORDINATE_SCALE: f64 = 1e6;

/// Calculates the great-circle distance between two positions on Earth
/// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
/// Returns the result in meters, never negative.
pub fn earth_distance(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = to_radians(a.lat);
    let lon1 = to_radians(a.lon);
    let lat2 = to_radians(b.lat);
    let lon2 = to_radians(b.lon);

    let sin_dlat_half = ((lat2 - lat1) * 0.5).sin();
    let sin_dlon_half = ((lon2 - lon1) * 0.5).sin();

    let h = sin_dlat_half * sin_dlat_half + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;

    // Rounding can push h marginally outside of [0, 1]
    let d = EARTH_DIAMETER * h.clamp(0.0, 1.0).sqrt().asin();
    d.max(0.0)
}

#[inline]
fn to_radians(micro_degrees: i32) -> f64 {
    (micro_degrees as f64 / COORDINATE_SCALE).to_radians()
}
