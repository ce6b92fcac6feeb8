// Bundled B-spline through a tree path.
//
// The control points are the tree path's node positions. Each point is first
// pulled toward the straight chord between the two endpoints by `tension`:
//
//   beta = 1 - tension
//   p'[i] = beta * p[i] + (1 - beta) * (p[0] + i/n * (p[n] - p[0]))
//
// With tension 0 the curve hugs the tree skeleton; with tension 1 it
// collapses onto the chord. The straightened points are then drawn as a
// uniform cubic B-spline, which starts and ends exactly on the two leaves.

use std::fmt::Write;

use serde::Serialize;

use crate::hierarchy::Position;

/// Bundling tension used by the chart.
pub const DEFAULT_BUNDLE_TENSION: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Cartesian point for a polar position (angle 0 points up, clockwise).
    pub fn from_polar(position: Position) -> Self {
        Self {
            x: position.radius * position.angle.sin(),
            y: -position.radius * position.angle.cos(),
        }
    }

    fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(self.x + t * (other.x - self.x), self.y + t * (other.y - self.y))
    }

    fn blend(self, other: Point, weight: f64) -> Point {
        Point::new(
            weight * self.x + (1.0 - weight) * other.x,
            weight * self.y + (1.0 - weight) * other.y,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Segment {
    Line(Point),
    Cubic { c1: Point, c2: Point, to: Point },
}

/// Path geometry: a start point followed by line and cubic segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BundleCurve {
    pub start: Point,
    pub segments: Vec<Segment>,
}

impl BundleCurve {
    /// Bundle a control polygon with `tension` (clamped to [0, 1]).
    ///
    /// Returns None for an empty polygon.
    pub fn bundle(points: &[Point], tension: f64) -> Option<Self> {
        let (&first, &last) = (points.first()?, points.last()?);
        let tension = if tension.is_nan() { DEFAULT_BUNDLE_TENSION } else { tension };
        let beta = 1.0 - tension.clamp(0.0, 1.0);
        let n = points.len() - 1;

        let straightened: Vec<Point> = points
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let t = if n == 0 { 0.0 } else { i as f64 / n as f64 };
                p.blend(first.lerp(last, t), beta)
            })
            .collect();

        Some(basis_spline(&straightened))
    }

    /// Last point the curve reaches.
    pub fn end(&self) -> Point {
        match self.segments.last() {
            Some(Segment::Line(to)) | Some(Segment::Cubic { to, .. }) => *to,
            None => self.start,
        }
    }

    /// SVG path data (`M ... L ... C ...`).
    pub fn to_svg_path(&self) -> String {
        let mut d = String::new();
        let _ = write!(d, "M{},{}", fmt_coord(self.start.x), fmt_coord(self.start.y));
        for segment in &self.segments {
            let _ = match segment {
                Segment::Line(to) => write!(d, "L{},{}", fmt_coord(to.x), fmt_coord(to.y)),
                Segment::Cubic { c1, c2, to } => write!(
                    d,
                    "C{},{},{},{},{},{}",
                    fmt_coord(c1.x),
                    fmt_coord(c1.y),
                    fmt_coord(c2.x),
                    fmt_coord(c2.y),
                    fmt_coord(to.x),
                    fmt_coord(to.y)
                ),
            };
        }
        d
    }
}

/// Uniform cubic B-spline through a control polygon, clamped at both ends.
fn basis_spline(points: &[Point]) -> BundleCurve {
    let start = points[0];
    let mut segments = Vec::new();

    match points.len() {
        1 => {}
        2 => segments.push(Segment::Line(points[1])),
        _ => {
            let (p0, p1) = (points[0], points[1]);
            segments.push(Segment::Line(Point::new(
                (5.0 * p0.x + p1.x) / 6.0,
                (5.0 * p0.y + p1.y) / 6.0,
            )));

            let mut prev = p0;
            let mut current = p1;
            for &next in &points[2..] {
                segments.push(basis_segment(prev, current, next));
                prev = current;
                current = next;
            }
            // Repeat the last point to pull the curve onto it
            segments.push(basis_segment(prev, current, current));
            segments.push(Segment::Line(current));
        }
    }

    BundleCurve { start, segments }
}

fn basis_segment(p0: Point, p1: Point, p2: Point) -> Segment {
    Segment::Cubic {
        c1: Point::new((2.0 * p0.x + p1.x) / 3.0, (2.0 * p0.y + p1.y) / 3.0),
        c2: Point::new((p0.x + 2.0 * p1.x) / 3.0, (p0.y + 2.0 * p1.y) / 3.0),
        to: Point::new(
            (p0.x + 4.0 * p1.x + p2.x) / 6.0,
            (p0.y + 4.0 * p1.y + p2.y) / 6.0,
        ),
    }
}

/// Three decimals is well below a pixel at chart scale; trailing zeros dropped.
fn fmt_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded}")
}
