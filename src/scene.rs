use std::f64::consts::PI;
use std::path::Path as FsPath;

use log::trace;
use svg::node::element::{Circle, ClipPath, Definitions, Group, Line, Path};
use svg::Document;

use crate::error::Result;
use crate::geometry::{Placement, Point};
use crate::types::{DialFace, Rgb};

const CLIP_ID: &str = "dial-clip";
const SURFACE: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Color(Rgb),
    Face,
}

impl Paint {
    pub fn paint(&self) -> String {
        match self {
            Paint::Color(rgb) => rgb.paint(),
            Paint::Face => "currentColor".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Annular sector; `d` is ready-made SVG path data.
    Wedge {
        d: String,
        inner: f64,
        outer: f64,
        start: f64,
        span: f64,
        fill: Rgb,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Rgb,
    },
    Annulus {
        center: Point,
        inner: f64,
        outer: f64,
        fill: Rgb,
    },
    Mark {
        placement: Placement,
        length: f64,
        stroke: Paint,
    },
    Disk {
        placement: Placement,
        radius: f64,
        fill: Paint,
        stroke: Option<Paint>,
    },
}

impl Primitive {
    pub fn area(&self) -> f64 {
        match self {
            Primitive::Wedge {
                inner, outer, span, ..
            } => span * PI * (outer * outer - inner * inner),
            Primitive::Circle { radius, .. } => PI * radius * radius,
            Primitive::Annulus { inner, outer, .. } => PI * (outer * outer - inner * inner),
            Primitive::Mark { .. } => 0.0,
            Primitive::Disk { radius, .. } => PI * radius * radius,
        }
    }

    fn draw(&self, group: Group) -> Group {
        match self {
            Primitive::Wedge { d, fill, .. } => {
                group.add(Path::new().set("d", d.as_str()).set("fill", fill.paint()))
            }
            Primitive::Circle {
                center,
                radius,
                fill,
            } => group.add(
                Circle::new()
                    .set("cx", center.x)
                    .set("cy", center.y)
                    .set("r", *radius)
                    .set("fill", fill.paint()),
            ),
            Primitive::Annulus {
                center,
                inner,
                outer,
                fill,
            } => group.add(
                Path::new()
                    .set("d", annulus_path(*center, *inner, *outer))
                    .set("fill-rule", "evenodd")
                    .set("fill", fill.paint()),
            ),
            Primitive::Mark {
                placement,
                length,
                stroke,
            } => group.add(
                Group::new().set("transform", placement.transform()).add(
                    Line::new()
                        .set("x1", 0)
                        .set("y1", -*length)
                        .set("x2", 0)
                        .set("y2", 0)
                        .set("stroke", stroke.paint()),
                ),
            ),
            Primitive::Disk {
                placement,
                radius,
                fill,
                stroke,
            } => {
                let mut disk = Circle::new().set("r", *radius).set("fill", fill.paint());
                if let Some(stroke) = stroke {
                    disk = disk.set("stroke", stroke.paint());
                }
                group.add(
                    Group::new()
                        .set("transform", placement.transform())
                        .add(disk),
                )
            }
        }
    }
}

fn annulus_path(c: Point, inner: f64, outer: f64) -> String {
    let ring = |r: f64| {
        format!(
            "M {} {} A {r} {r} 0 1 1 {} {} A {r} {r} 0 1 1 {} {} Z",
            c.x,
            c.y - r,
            c.x,
            c.y + r,
            c.x,
            c.y - r,
            r = r
        )
    };
    format!("{} {}", ring(outer), ring(inner))
}

/// Everything drawn for one tick, back to front: ring, marks, indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub face: DialFace,
    pub ring: Vec<Primitive>,
    pub marks: Vec<Primitive>,
    pub indicator: Primitive,
}

impl Scene {
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.ring
            .iter()
            .chain(self.marks.iter())
            .chain(std::iter::once(&self.indicator))
    }

    pub fn to_document(&self) -> Document {
        let clip = ClipPath::new().set("id", CLIP_ID).add(
            Circle::new()
                .set("cx", self.face.cx)
                .set("cy", self.face.cy)
                .set("r", "50%"),
        );

        let ring = self.ring.iter().fold(
            Group::new()
                .set("shape-rendering", "crispEdges")
                .set("clip-path", format!("url(#{})", CLIP_ID)),
            |group, primitive| primitive.draw(group),
        );

        let overlay = self
            .marks
            .iter()
            .chain(std::iter::once(&self.indicator))
            .fold(Group::new(), |group, primitive| primitive.draw(group));

        Document::new()
            .set("viewBox", (0, 0, SURFACE, SURFACE))
            .add(Definitions::new().add(clip))
            .add(ring)
            .add(overlay)
    }

    pub fn save<P: AsRef<FsPath>>(&self, path: P) -> Result<()> {
        trace!("writing dial to {}", path.as_ref().display());
        svg::save(path, &self.to_document())?;
        Ok(())
    }
}
