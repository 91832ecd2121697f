//! PM2.5 Air Quality Index.

use crate::constants::OUT_OF_RANGE;
use crate::types::Breakpoint;

/// EPA PM2.5 breakpoints. Index bounds at the seams (50 then 51, ...) are
/// taken as published.
pub static PM2_5_BREAKPOINTS: [Breakpoint; 7] = [
    Breakpoint::new(0.0, 12.1, 0.0, 50.0),
    Breakpoint::new(12.1, 35.5, 51.0, 100.0),
    Breakpoint::new(35.5, 55.5, 101.0, 150.0),
    Breakpoint::new(55.5, 150.5, 151.0, 200.0),
    Breakpoint::new(150.5, 250.5, 201.0, 300.0),
    Breakpoint::new(250.5, 350.5, 301.0, 400.0),
    Breakpoint::new(350.5, 500.5, 401.0, 500.0),
];

/// Truncates (not rounds) a concentration to 0.1 µg/m³.
fn truncate(concentration: f32) -> f32 {
    floor(concentration * 10.0) / 10.0
}

// `f32::floor` is not available without std.
fn floor(x: f32) -> f32 {
    let t = x as i64 as f32;
    if t > x {
        t - 1.0
    } else {
        t
    }
}

/// Looks up `concentration` in `table` and interpolates the index.
///
/// Returns `None` when no segment contains the truncated concentration.
pub fn index_from_table(table: &[Breakpoint], concentration: f32) -> Option<f32> {
    if concentration.is_nan() {
        return None;
    }
    let c = truncate(concentration);
    table
        .iter()
        .find(|bp| bp.contains(c))
        .map(|bp| bp.interpolate(c))
}

/// PM2.5 AQI, or `None` outside `[0, 500.5)`.
pub fn try_aqi(concentration: f32) -> Option<f32> {
    index_from_table(&PM2_5_BREAKPOINTS, concentration)
}

/// PM2.5 AQI, or [`OUT_OF_RANGE`] (`-1.0`) outside `[0, 500.5)`.
pub fn aqi(concentration: f32) -> f32 {
    try_aqi(concentration).unwrap_or(OUT_OF_RANGE)
}

/// Samples `(concentration, aqi)` pairs from 0 to just below 500 µg/m³ in
/// increments of `step`. A non-positive step yields nothing.
pub fn curve(step: f32) -> impl Iterator<Item = (f32, f32)> {
    // A sample within step/1000 of 500 is treated as 500 itself.
    let limit = if step > 0.0 { 500.0 - step * 1e-3 } else { 0.0 };
    (0u32..)
        .map(move |n| n as f32 * step)
        .take_while(move |&c| c < limit)
        .map(|c| (c, aqi(c)))
}
