// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use alloc::vec::Vec;

use arrayvec::ArrayVec;

use crate::floating_point::NonZeroPositiveF32;
use crate::painter;
use crate::polygon::{Corner, JoinPolygon};
use crate::scalar::Scalar;
use crate::{Canvas, Color, Point};

#[cfg(all(not(feature = "std"), feature = "no-std-float"))]
use crate::NoStdFloat;

// Offset edges with a cross product below this are treated as parallel.
// A tunable constant, not a hard correctness boundary.
const PARALLEL_EPSILON: f32 = 1e-5;

/// Stroke properties.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Stroke {
    /// A stroke thickness.
    ///
    /// Must be > 0.
    ///
    /// Default: 1.0
    pub width: f32,

    /// The limit at which a sharp corner is drawn beveled.
    ///
    /// Must be >= 1.
    ///
    /// Default: 4.0
    pub miter_limit: f32,

    /// A stroke line cap.
    ///
    /// Default: Butt
    pub line_cap: LineCap,

    /// A stroke line join.
    ///
    /// Default: Miter
    pub line_join: LineJoin,
}

impl Default for Stroke {
    fn default() -> Self {
        Stroke {
            width: 1.0,
            miter_limit: 4.0,
            line_cap: LineCap::default(),
            line_join: LineJoin::default(),
        }
    }
}

/// Draws at the beginning and end of the path.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum LineCap {
    /// No stroke extension.
    Butt,
    /// Adds a half-disk.
    Round,
    /// Extends both outer segments by half the stroke width.
    Square,
}

impl Default for LineCap {
    fn default() -> Self {
        LineCap::Butt
    }
}

/// Specifies how corners are drawn when a polyline is stroked.
///
/// Choose miter join to draw sharp corners. Choose round join to draw a circle
/// with a radius equal to the stroke width on top of the corner. Choose bevel
/// join to minimally connect the thick strokes.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum LineJoin {
    /// Extends to miter limit.
    Miter,
    /// Adds circle.
    Round,
    /// Connects outside edges.
    Bevel,
}

impl Default for LineJoin {
    fn default() -> Self {
        LineJoin::Miter
    }
}

/// The 4-corner offset rectangle of one path segment.
///
/// Corners are ordered right-start, right-end, left-end, left-start
/// relative to the segment direction.
type Contour = [Corner; 4];

// The join state carried from one interior vertex to the next. A polygon's
// bridged shape depends only on its two contours and on this.
#[derive(Copy, Clone, Debug)]
struct PendingJoin {
    // Keeps its arc mark when the join was degenerate and right-bending.
    corner: Corner,
    // The left-edge intersection factor; < 1 means the bend favors the
    // right side.
    t: f32,
}

/// Strokes a polyline, filling it with a gradient interpolated between the
/// per-vertex `colors`, and emits the result into `canvas`.
///
/// A shorthand for [`GradientStroker::stroke`]. If you plan stroking
/// multiple paths, use [`GradientStroker`] directly, which will preserve
/// temporary allocations required during stroking.
///
/// Returns `None`, without emitting anything, when the input violates the
/// preconditions listed in [`GradientStroker::stroke`].
pub fn stroke_gradient(
    path: &[Point],
    colors: &[Color],
    stroke: &Stroke,
    canvas: &mut dyn Canvas,
) -> Option<()> {
    GradientStroker::new().stroke(path, colors, stroke, canvas)
}

/// A polyline gradient stroker.
///
/// Decomposes the stroke into [`JoinPolygon`]s in a single left-to-right
/// pass over the segments and either hands them to a [`Canvas`]
/// ([`stroke`](Self::stroke)) or exposes them directly
/// ([`polygonize`](Self::polygonize)).
#[derive(Clone, Default, Debug)]
pub struct GradientStroker {
    polygons: Vec<JoinPolygon>,
}

impl GradientStroker {
    /// Creates a new `GradientStroker`.
    pub fn new() -> Self {
        GradientStroker {
            polygons: Vec::new(),
        }
    }

    /// Strokes the path.
    ///
    /// One polygon is filled per path segment, each with a linear gradient
    /// running from `colors[i]` at vertex `i` to `colors[i + 1]` at vertex
    /// `i + 1`. Round caps add a half-disk fan before the first and after
    /// the last polygon.
    ///
    /// Returns `None`, without emitting anything, when:
    ///
    /// - `path` has fewer than two points, non-finite points
    ///   or zero-length segments
    /// - `colors.len() != path.len()`
    /// - `stroke.width` is not positive
    /// - `stroke.miter_limit` is below 1
    ///
    /// Can be called multiple times to reuse allocated buffers.
    pub fn stroke(
        &mut self,
        path: &[Point],
        colors: &[Color],
        stroke: &Stroke,
        canvas: &mut dyn Canvas,
    ) -> Option<()> {
        if colors.len() != path.len() {
            log::warn!(
                "one color per path point expected: {} points, {} colors",
                path.len(),
                colors.len()
            );
            return None;
        }

        self.polygonize_inner(path, stroke)?;

        let radius = stroke.width.half();
        if stroke.line_cap == LineCap::Round {
            painter::round_cap(canvas, path[0], path[1], radius, colors[0]);
        }

        for i in 0..self.polygons.len() {
            painter::emit_polygon(canvas, &self.polygons, i, path, colors, stroke, radius);
        }

        if stroke.line_cap == LineCap::Round {
            painter::round_cap(
                canvas,
                path[path.len() - 1],
                path[path.len() - 2],
                radius,
                colors[colors.len() - 1],
            );
        }

        Some(())
    }

    /// Decomposes the stroked path into polygons without drawing anything.
    ///
    /// Produces exactly `path.len() - 1` polygons. Callers with their own
    /// emission or tessellation pipeline can consume them directly.
    ///
    /// Validates the same preconditions as [`stroke`](Self::stroke),
    /// except that no colors are involved.
    pub fn polygonize(&mut self, path: &[Point], stroke: &Stroke) -> Option<&[JoinPolygon]> {
        self.polygonize_inner(path, stroke)?;
        Some(&self.polygons)
    }

    fn polygonize_inner(&mut self, path: &[Point], stroke: &Stroke) -> Option<()> {
        let width = match NonZeroPositiveF32::new(stroke.width) {
            Some(width) => width,
            None => {
                log::warn!("stroke width must be positive");
                return None;
            }
        };

        if path.len() < 2 {
            log::warn!("a stroked path requires at least two points");
            return None;
        }

        if path.iter().any(|p| !p.is_finite()) {
            log::warn!("path points must be finite");
            return None;
        }

        if !(stroke.miter_limit >= 1.0) {
            log::warn!("miter limit must be >= 1");
            return None;
        }

        let radius = width.get().half();

        self.polygons.clear();
        self.polygons.reserve(path.len() - 1);

        let mut contour = if stroke.line_cap == LineCap::Square {
            let start = outset(path[0], path[1], radius)?;
            build_contour(start, path[1], radius)?
        } else {
            build_contour(path[0], path[1], radius)?
        };

        let mut prev_join: Option<PendingJoin> = None;

        for i in 1..path.len() - 1 {
            let mut next_contour = if i == path.len() - 2 && stroke.line_cap == LineCap::Square {
                let end = outset(path[i + 1], path[i], radius)?;
                build_contour(path[i], end, radius)?
            } else {
                build_contour(path[i], path[i + 1], radius)?
            };

            let (shape, join, degenerate) = resolve_join(&mut contour, &mut next_contour, stroke);
            self.polygons.push(bridge(shape, prev_join, degenerate));

            prev_join = join;
            contour = next_contour;
        }

        // Flush the trailing segment.
        let shape = contour.iter().copied().collect();
        self.polygons.push(bridge(shape, prev_join, false));

        Some(())
    }
}

// Builds the offset rectangle of the `p1`..`p2` segment.
//
// Fails on a zero-length (or non-finite) segment.
fn build_contour(p1: Point, p2: Point, radius: f32) -> Option<Contour> {
    let mut normal = Point::zero();
    if !normal.set_normalize(p2.x - p1.x, p2.y - p1.y) {
        log::warn!("a stroked path must not contain zero-length segments");
        return None;
    }
    normal.rotate_cw();
    let normal = normal.scaled(radius);

    Some([
        Corner::new(p1 - normal),
        Corner::new(p2 - normal),
        Corner::new(p2 + normal),
        Corner::new(p1 + normal),
    ])
}

// Moves `p` away from `away_from` by `radius`. Square caps lengthen the
// outer segments with this before their contours are built.
fn outset(p: Point, away_from: Point, radius: f32) -> Option<Point> {
    let mut v = p - away_from;
    if !v.set_length(radius) {
        return None;
    }
    Some(p + v)
}

// Resolves the join between `contour` and `next` at their shared vertex and
// assembles the current segment's polygon shape.
//
// Both contours may be adjusted in place: the reversal branch arc-marks the
// facing corners, and a clean join clamps the matching corner of `next` to
// the shared intersection point so consecutive polygons tile without gaps.
//
// Returns the shape (before bridging), the join state to carry to the next
// vertex and the degeneracy flag.
fn resolve_join(
    contour: &mut Contour,
    next: &mut Contour,
    stroke: &Stroke,
) -> (ArrayVec<Corner, 6>, Option<PendingJoin>, bool) {
    let v1l = contour[2].point - contour[3].point;
    let v2l = next[2].point - next[3].point;
    let det1 = v1l.cross(v2l);
    if det1.abs() < PARALLEL_EPSILON {
        // Left edges are parallel: a straight pass-through. A negative dot
        // product means the path reverses on itself; round out the facing
        // corners so the turnaround is capped.
        if v1l.dot(v2l) < 0.0 {
            contour[2].arc = true;
            next[0].arc = true;
        }
        return (contour.iter().copied().collect(), None, false);
    }

    // The left intersection point, which may lie outside of each segment.
    let t = (next[3].point - contour[3].point).cross(v2l) / det1;
    let left = contour[3].point + v1l.scaled(t);

    let v1r = contour[1].point - contour[0].point;
    let v2r = next[1].point - next[0].point;
    let det2 = v1r.cross(v2r);
    if det2.abs() < PARALLEL_EPSILON {
        return (contour.iter().copied().collect(), None, false);
    }

    // Same for the right side.
    let u = (next[0].point - contour[0].point).cross(v2r) / det2;
    let right = contour[0].point + v1r.scaled(u);
    let v = v1l.cross(contour[3].point - next[3].point) / det1;

    // The join is degenerate if the intersections fall outside of the
    // usable span on either side.
    let degenerate = t <= 0.0 || u <= 0.0 || v >= 1.0 || v <= -1.0;

    let is_bevel = match stroke.line_join {
        LineJoin::Miter => {
            // Switch to a beveled join beyond the miter limit.
            let norm = v1l.length() * v2l.length();
            (2.0 * norm / (norm + v1l.dot(v2l))).sqrt() > stroke.miter_limit
        }
        _ => true,
    };

    let mut shape = ArrayVec::new();
    let join_point;
    let mut join_arc = false;
    if t < 1.0 {
        // The left intersection is on both left edges; the join wedge
        // opens to the right.
        join_point = if is_bevel {
            (contour[1].point + next[0].point).scaled(0.5)
        } else {
            right
        };

        if degenerate {
            shape.push(contour[0]);
            shape.push(contour[1]);
            shape.push(Corner::marked(join_point));
            shape.push(contour[2]);
            shape.push(contour[3]);
            join_arc = true;
        } else {
            shape.push(contour[0]);
            shape.push(contour[1]);
            shape.push(Corner::marked(join_point));
            shape.push(Corner::new(left));
            shape.push(contour[3]);
            // The next polygon starts from the shared intersection.
            next[3] = Corner::new(left);
        }
    } else {
        join_point = if is_bevel {
            (contour[2].point + next[3].point).scaled(0.5)
        } else {
            left
        };

        contour[2].arc = true;
        if degenerate {
            shape.push(contour[0]);
            shape.push(contour[1]);
            shape.push(Corner::new(join_point));
            shape.push(contour[2]);
            shape.push(contour[3]);
        } else {
            shape.push(contour[0]);
            shape.push(Corner::new(right));
            shape.push(Corner::new(join_point));
            shape.push(contour[2]);
            shape.push(contour[3]);
            next[0] = Corner::new(right);
        }
    }

    let join = PendingJoin {
        corner: Corner { point: join_point, arc: join_arc },
        t,
    };
    (shape, Some(join), degenerate)
}

// Bridges the previous vertex's join point into the current shape.
fn bridge(
    mut corners: ArrayVec<Corner, 6>,
    prev: Option<PendingJoin>,
    degenerate: bool,
) -> JoinPolygon {
    let right_join = match prev {
        None => None,
        Some(prev) => {
            if prev.t < 1.0 {
                // A right-bending predecessor: its join point becomes the
                // new first corner and what used to be the first corner
                // takes the arc mark.
                corners[0].arc = true;
                corners.insert(0, prev.corner);
                Some(true)
            } else {
                // A left-bending predecessor: its join point trails the
                // polygon and holds the mark itself.
                corners.push(Corner::marked(prev.corner.point));
                Some(false)
            }
        }
    };

    JoinPolygon {
        corners,
        right_join,
        degenerate,
    }
}
