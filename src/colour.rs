use crate::types::Rgb;

pub const NIGHT: Rgb = Rgb::new(20.0, 15.0, 97.0);
pub const DAY: Rgb = Rgb::new(252.0, 223.0, 3.0);

/// Maps altitude (degrees) to [0, 1]: -6° and below is full night, +6° and above full day.
pub fn illumination_fraction(altitude: f64) -> f64 {
    (altitude / 6.0 + 1.0) / 2.0
}

pub fn clamped_illumination(altitude: f64) -> f64 {
    illumination_fraction(altitude).clamp(0.0, 1.0)
}

fn mix(day: f64, night: f64, illum: f64) -> f64 {
    illum * day + (1.0 - illum) * night
}

pub fn altitude_to_color(altitude: f64) -> Rgb {
    let illum = clamped_illumination(altitude);
    Rgb::new(
        mix(DAY.r, NIGHT.r, illum),
        mix(DAY.g, NIGHT.g, illum),
        mix(DAY.b, NIGHT.b, illum),
    )
}
