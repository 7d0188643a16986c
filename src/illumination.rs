use chrono::Duration;
use log::trace;

use crate::ephemeris::{rad_to_deg, Ephemeris, MS_PER_DAY};
use crate::error::{Error, Result};
use crate::types::{Coordinate, IlluminationSeries, Instant};

pub const DEFAULT_SLICES: usize = 72;

pub fn slice_span(index: usize, slice_count: usize) -> (f64, f64) {
    let n = slice_count as f64;
    (index as f64 / n, (index + 1) as f64 / n)
}

/// Midpoint of slice `index` when a fixed 24h day from `anchor` is cut into `slice_count` slices.
pub fn sample_instant(anchor: Instant, index: usize, slice_count: usize) -> Result<Instant> {
    let fraction = (index as f64 + 0.5) / slice_count as f64;
    let nanos = (fraction * MS_PER_DAY as f64 * 1e6).round() as i64;
    anchor
        .checked_add_signed(Duration::nanoseconds(nanos))
        .ok_or(Error::InstantOutOfRange {
            millis: anchor.timestamp_millis(),
        })
}

pub fn sample<E: Ephemeris>(
    ephemeris: &E,
    location: &Coordinate,
    anchor: Instant,
    slice_count: usize,
) -> Result<IlluminationSeries> {
    let location = location.or_zero();
    trace!(
        "sampling {} slices from {} at ({}, {})",
        slice_count,
        anchor,
        location.latitude,
        location.longitude
    );

    (0..slice_count)
        .map(|i| {
            let query = sample_instant(anchor, i, slice_count)?;
            let pos = ephemeris.position(query, location.latitude, location.longitude)?;
            Ok(rad_to_deg(pos.altitude))
        })
        .collect()
}
