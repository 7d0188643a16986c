use chrono::{DateTime, Utc};

use crate::illumination::DEFAULT_SLICES;

pub type Instant = DateTime<Utc>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Components a sensor left undefined (NaN or infinite) fall back to 0.
    pub fn or_zero(&self) -> Self {
        fn zeroed(v: f64) -> f64 {
            if v.is_finite() {
                v
            } else {
                0.0
            }
        }
        Self::new(zeroed(self.latitude), zeroed(self.longitude))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    pub altitude: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub solar_noon: Instant,
    pub nadir: Instant,
    pub sunrise: Option<Instant>,
    pub sunset: Option<Instant>,
    pub dawn: Option<Instant>,
    pub dusk: Option<Instant>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialInfo {
    /// Fraction of the solar day elapsed since solar noon, in [0, 1).
    pub day_percent: f64,
    pub dawn_percent: Option<f64>,
    pub dusk_percent: Option<f64>,
    /// Current sun altitude in radians.
    pub sun_angle: f64,
}

pub type IlluminationSeries = Vec<f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn paint(&self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialFace {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Default for DialFace {
    fn default() -> Self {
        Self {
            cx: 50.0,
            cy: 50.0,
            radius: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SundialConfig {
    pub slice_count: usize,
    pub face: DialFace,
    pub tick_length: f64,
    pub tick_offset: f64,
    pub indicator_radius: f64,
    pub lookahead_hours: Vec<f64>,
    pub lookahead_radius: f64,
}

impl Default for SundialConfig {
    fn default() -> Self {
        Self {
            slice_count: DEFAULT_SLICES,
            face: DialFace::default(),
            tick_length: 3.0,
            tick_offset: 0.0,
            indicator_radius: 2.0,
            lookahead_hours: vec![4.0, 8.0],
            lookahead_radius: 0.5,
        }
    }
}
