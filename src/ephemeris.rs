use chrono::{DateTime, Datelike, Duration, NaiveTime, Timelike};

use crate::error::{Error, Result};
use crate::types::{Instant, SunPosition, SunTimes};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

pub const CIVIL_TWILIGHT_ALTITUDE: f64 = -6.0;
// refraction and disc radius included
pub const SUNRISE_ALTITUDE: f64 = -0.833;

/// Sun position and the named events of a day. Errors are handed back to the caller unchanged.
pub trait Ephemeris {
    fn position(&self, at: Instant, latitude: f64, longitude: f64) -> Result<SunPosition>;

    fn times(&self, at: Instant, latitude: f64, longitude: f64) -> Result<SunTimes>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn position(&self, at: Instant, latitude: f64, longitude: f64) -> Result<SunPosition> {
        (**self).position(at, latitude, longitude)
    }

    fn times(&self, at: Instant, latitude: f64, longitude: f64) -> Result<SunTimes> {
        (**self).times(at, latitude, longitude)
    }
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn instant_from_millis(millis: i64) -> Result<Instant> {
    DateTime::from_timestamp_millis(millis).ok_or(Error::InstantOutOfRange { millis })
}

pub fn offset_hours(at: Instant, hours: f64) -> Result<Instant> {
    let nanos = (hours * 3_600_000_000_000.0).round();
    if !nanos.is_finite() || nanos.abs() >= i64::MAX as f64 {
        return Err(Error::InstantOutOfRange {
            millis: at.timestamp_millis(),
        });
    }
    at.checked_add_signed(Duration::nanoseconds(nanos as i64))
        .ok_or(Error::InstantOutOfRange {
            millis: at.timestamp_millis(),
        })
}

pub fn intermediate_angle_b(n: i32) -> f64 {
    deg_to_rad((n - 1) as f64 * (360.0 / 365.0))
}

pub fn equation_of_time(n: i32) -> f64 {
    let b = intermediate_angle_b(n);
    229.18
        * (0.000075
            + 0.001868 * b.cos()
            - 0.032077 * b.sin()
            - 0.014615 * (2.0 * b).cos()
            - 0.040849 * (2.0 * b).sin())
}

pub fn utc_lst_correction(longitude: f64, eot: f64) -> f64 {
    (4.0 * longitude + eot) / 60.0
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad(360.0 * ((284 + n) as f64 / 365.0)).sin()
}

pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let cos_zenith =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

pub fn solar_altitude(zenith_angle: f64) -> f64 {
    90.0 - zenith_angle
}

pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_az = -dec_rad.cos() * ha_rad.sin();
    let cos_az = dec_rad.sin() * lat_rad.cos() - dec_rad.cos() * lat_rad.sin() * ha_rad.cos();
    normalize_angle(rad_to_deg(sin_az.atan2(cos_az)))
}

pub fn event_hour_angle(latitude: f64, declination: f64, altitude: f64) -> Option<f64> {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let cos_h = (deg_to_rad(altitude).sin() - lat_rad.sin() * dec_rad.sin())
        / (lat_rad.cos() * dec_rad.cos());
    if (-1.0..=1.0).contains(&cos_h) {
        Some(rad_to_deg(cos_h.acos()))
    } else {
        None
    }
}

fn utc_hours(at: &Instant) -> f64 {
    at.hour() as f64
        + at.minute() as f64 / 60.0
        + (at.second() as f64 + at.nanosecond() as f64 / 1e9) / 3600.0
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Almanac;

impl Almanac {
    pub fn new() -> Self {
        Self
    }

    fn event_pair(
        solar_noon: Instant,
        latitude: f64,
        declination: f64,
        altitude: f64,
    ) -> Result<(Option<Instant>, Option<Instant>)> {
        match event_hour_angle(latitude, declination, altitude) {
            Some(h) => {
                let half = h / DEGREES_PER_HOUR;
                Ok((
                    Some(offset_hours(solar_noon, -half)?),
                    Some(offset_hours(solar_noon, half)?),
                ))
            }
            None => Ok((None, None)),
        }
    }
}

impl Ephemeris for Almanac {
    fn position(&self, at: Instant, latitude: f64, longitude: f64) -> Result<SunPosition> {
        let n = at.ordinal() as i32;
        let eot = equation_of_time(n);
        let decl = solar_declination(n);
        let lst = (utc_hours(&at) + utc_lst_correction(longitude, eot)).rem_euclid(24.0);
        let ha = hour_angle(lst);
        let zenith = solar_zenith_angle(latitude, decl, ha);
        Ok(SunPosition {
            altitude: deg_to_rad(solar_altitude(zenith)),
            azimuth: deg_to_rad(solar_azimuth(latitude, decl, ha)),
        })
    }

    fn times(&self, at: Instant, latitude: f64, longitude: f64) -> Result<SunTimes> {
        let local = offset_hours(at, longitude / DEGREES_PER_HOUR)?;
        let date = local.date_naive();
        let n = date.ordinal() as i32;
        let eot = equation_of_time(n);
        let decl = solar_declination(n);

        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        let solar_noon = offset_hours(midnight, 12.0 - utc_lst_correction(longitude, eot))?;
        let nadir = offset_hours(solar_noon, -12.0)?;

        let (sunrise, sunset) = Self::event_pair(solar_noon, latitude, decl, SUNRISE_ALTITUDE)?;
        let (dawn, dusk) = Self::event_pair(solar_noon, latitude, decl, CIVIL_TWILIGHT_ALTITUDE)?;

        Ok(SunTimes {
            solar_noon,
            nadir,
            sunrise,
            sunset,
            dawn,
            dusk,
        })
    }
}
