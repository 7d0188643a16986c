use std::fmt;

use log::debug;

use crate::colour::altitude_to_color;
use crate::ephemeris::{rad_to_deg, Ephemeris, MS_PER_DAY};
use crate::error::Result;
use crate::illumination::{sample, slice_span};
use crate::scene::{Paint, Primitive, Scene};
use crate::types::{Coordinate, DialInfo, Instant, SundialConfig, SunTimes};

pub fn day_fraction(from: Instant, to: Instant) -> f64 {
    (to - from).num_milliseconds() as f64 / MS_PER_DAY as f64
}

impl DialInfo {
    pub fn new(instant: Instant, times: &SunTimes, sun_angle: f64) -> Self {
        let noon = times.solar_noon;
        Self {
            day_percent: day_fraction(noon, instant).rem_euclid(1.0),
            dawn_percent: times.dawn.map(|dawn| day_fraction(noon, dawn)),
            dusk_percent: times.dusk.map(|dusk| day_fraction(noon, dusk)),
            sun_angle,
        }
    }
}

// undefined coordinate components are read as 0 before the oracle sees them
fn observe<E: Ephemeris>(
    ephemeris: &E,
    instant: Instant,
    location: &Coordinate,
) -> Result<(SunTimes, DialInfo)> {
    let location = location.or_zero();
    let times = ephemeris.times(instant, location.latitude, location.longitude)?;
    let sun = ephemeris.position(instant, location.latitude, location.longitude)?;
    Ok((times, DialInfo::new(instant, &times, sun.altitude)))
}

pub fn dial_info<E: Ephemeris>(
    ephemeris: &E,
    instant: Instant,
    location: &Coordinate,
) -> Result<DialInfo> {
    observe(ephemeris, instant, location).map(|(_, info)| info)
}

pub fn compose(info: &DialInfo, series: &[f64], config: &SundialConfig) -> Scene {
    let face = &config.face;
    let len = series.len();

    let ring = series
        .iter()
        .enumerate()
        .map(|(i, &altitude)| {
            let (start, end) = slice_span(i, len);
            face.wedge(0.0, face.radius, start, end, altitude_to_color(altitude))
        })
        .collect();

    // solar noon, then whichever twilight boundaries the day actually has
    let mut marks: Vec<Primitive> = std::iter::once(0.0)
        .chain(info.dawn_percent)
        .chain(info.dusk_percent)
        .map(|angle| face.radial_mark(angle, config.tick_length, config.tick_offset))
        .collect();

    marks.extend(config.lookahead_hours.iter().map(|hours| Primitive::Disk {
        placement: face.place_at(info.day_percent + hours / 24.0, face.radius),
        radius: config.lookahead_radius,
        fill: Paint::Face,
        stroke: None,
    }));

    let indicator = Primitive::Disk {
        placement: face.place_at(info.day_percent, face.radius),
        radius: config.indicator_radius,
        fill: Paint::Color(altitude_to_color(rad_to_deg(info.sun_angle))),
        stroke: Some(Paint::Face),
    };

    Scene {
        face: *face,
        ring,
        marks,
        indicator,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dial {
    Ready(Scene),
    /// No location fix yet.
    Waiting,
}

impl fmt::Display for Dial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dial::Ready(scene) => write!(f, "{}", scene.to_document()),
            Dial::Waiting => write!(f, "waiting for location"),
        }
    }
}

pub fn render<E: Ephemeris>(
    ephemeris: &E,
    instant: Instant,
    location: Option<Coordinate>,
    config: &SundialConfig,
) -> Result<Dial> {
    let Some(location) = location else {
        debug!("no location at {}, dial waiting", instant);
        return Ok(Dial::Waiting);
    };

    let (times, info) = observe(ephemeris, instant, &location)?;
    let series = sample(ephemeris, &location, times.solar_noon, config.slice_count)?;

    debug!(
        "dial at {}: day {:.4}, dawn {:?}, dusk {:?}, sun {:.2}°",
        instant,
        info.day_percent,
        info.dawn_percent,
        info.dusk_percent,
        rad_to_deg(info.sun_angle)
    );

    Ok(Dial::Ready(compose(&info, &series, config)))
}
