//! Polar dial geometry on the drawing surface.
//!
//! Angles are fractions of a revolution: 0 points up (12 o'clock) and values grow
//! clockwise. Every angle is wrapped into [0, 1) before it is used.

use std::f64::consts::TAU;

use crate::scene::{Paint, Primitive};
use crate::types::{DialFace, Rgb};

// 1.4 - 0.4 is one ulp short of a full turn
const FULL_TURN_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub angle: f64,
    pub radius: f64,
    pub center: Point,
}

impl Placement {
    pub fn transform(&self) -> String {
        format!(
            "rotate({} {} {}) translate({} {})",
            self.angle * 360.0,
            self.center.x,
            self.center.y,
            self.center.x,
            self.center.y - self.radius
        )
    }

    pub fn origin(&self) -> Point {
        let a = TAU * self.angle;
        Point {
            x: self.center.x + a.sin() * self.radius,
            y: self.center.y - a.cos() * self.radius,
        }
    }
}

pub fn wrap(fraction: f64) -> f64 {
    fraction.rem_euclid(1.0)
}

fn coord(p: Point) -> String {
    format!("{} {}", p.x, p.y)
}

impl DialFace {
    pub fn center(&self) -> Point {
        Point {
            x: self.cx,
            y: self.cy,
        }
    }

    pub fn polar_point(&self, angle: f64, radius: f64) -> Point {
        let a = TAU * wrap(angle);
        Point {
            x: self.cx + a.sin() * radius,
            y: self.cy - a.cos() * radius,
        }
    }

    /// Annular sector from `start` clockwise to `end`; a whole turn becomes a circle or annulus.
    pub fn wedge(&self, inner: f64, outer: f64, start: f64, end: f64, fill: Rgb) -> Primitive {
        let span = end - start;
        if span >= 1.0 - FULL_TURN_EPSILON {
            return if inner > 0.0 {
                Primitive::Annulus {
                    center: self.center(),
                    inner,
                    outer,
                    fill,
                }
            } else {
                Primitive::Circle {
                    center: self.center(),
                    radius: outer,
                    fill,
                }
            };
        }

        let span = span.rem_euclid(1.0);
        let start = wrap(start);
        let end = start + span;
        let large = if span >= 0.5 { 1 } else { 0 };

        let d = format!(
            "M {} A {} {} 0 {} 0 {} L {} A {} {} 0 {} 1 {} Z",
            coord(self.polar_point(end, inner)),
            inner,
            inner,
            large,
            coord(self.polar_point(start, inner)),
            coord(self.polar_point(start, outer)),
            outer,
            outer,
            large,
            coord(self.polar_point(end, outer)),
        );

        Primitive::Wedge {
            d,
            inner,
            outer,
            start,
            span,
            fill,
        }
    }

    pub fn place_at(&self, angle: f64, radius: f64) -> Placement {
        Placement {
            angle: wrap(angle),
            radius,
            center: self.center(),
        }
    }

    // base sits `offset_from_rim` inside the rim, the tick runs outward
    pub fn radial_mark(&self, angle: f64, length: f64, offset_from_rim: f64) -> Primitive {
        Primitive::Mark {
            placement: self.place_at(angle, self.radius - offset_from_rim),
            length,
            stroke: Paint::Face,
        }
    }
}
