pub mod colour;
pub mod dial;
pub mod ephemeris;
pub mod error;
pub mod geometry;
pub mod illumination;
pub mod scene;
pub mod types;

pub use colour::{altitude_to_color, clamped_illumination, illumination_fraction, DAY, NIGHT};

pub use dial::{compose, day_fraction, dial_info, render, Dial};

pub use ephemeris::{
    deg_to_rad, equation_of_time, event_hour_angle, hour_angle, instant_from_millis,
    normalize_angle, offset_hours, rad_to_deg, solar_altitude, solar_azimuth, solar_declination,
    solar_zenith_angle, Almanac, Ephemeris, CIVIL_TWILIGHT_ALTITUDE, DEGREES_PER_HOUR,
    EARTH_AXIAL_TILT, MS_PER_DAY, SUNRISE_ALTITUDE,
};

pub use error::{Error, Result};

pub use geometry::{wrap, Placement, Point};

pub use illumination::{sample, sample_instant, slice_span, DEFAULT_SLICES};

pub use scene::{Paint, Primitive, Scene};

pub use types::{
    Coordinate, DialFace, DialInfo, IlluminationSeries, Instant, Rgb, SunPosition, SunTimes,
    SundialConfig,
};
