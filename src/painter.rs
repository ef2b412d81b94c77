// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::gradient::{self, GradientStop};
use crate::polygon::{wrap, JoinPolygon};
use crate::stroker::{LineJoin, Stroke};
use crate::{Canvas, Color, Point};

// Draws a half-disk fan at `pivot`, swept between the normal of the
// `pivot`..`toward` segment and its negation.
pub(crate) fn round_cap(
    canvas: &mut dyn Canvas,
    pivot: Point,
    toward: Point,
    radius: f32,
    color: Color,
) {
    let mut normal = Point::zero();
    if !normal.set_normalize(toward.x - pivot.x, toward.y - pivot.y) {
        return;
    }
    normal.rotate_cw();

    canvas.begin_path();
    canvas.set_fill_color(color);
    canvas.arc(pivot, radius, normal, -normal);
    canvas.fill();
}

// Marked corners at indices 0, 1 and last are bridged or pass-through
// corners sitting at the polygon's first path vertex; marks anywhere else
// join at the second one.
fn at_first_vertex(j: usize, len: usize) -> bool {
    j == 0 || j == 1 || j == len - 1
}

// The path vertex an arc through corner `j` is centered on.
fn arc_center(path: &[Point], i: usize, j: usize, len: usize) -> Point {
    if at_first_vertex(j, len) {
        path[i]
    } else {
        path[i + 1]
    }
}

// Traces polygon `i` into the canvas and fills it with its gradient.
//
// Straight edges become line segments; an edge into an arc-marked corner
// becomes a circular arc around the relevant path vertex when the join
// style is round. When a neighboring polygon is degenerate, the traversal
// skips or retargets one corner so the shared wedge is drawn exactly once.
pub(crate) fn emit_polygon(
    canvas: &mut dyn Canvas,
    polygons: &[JoinPolygon],
    i: usize,
    path: &[Point],
    colors: &[Color],
    stroke: &Stroke,
    radius: f32,
) {
    let polygon = &polygons[i];
    let corners = &polygon.corners;
    let len = corners.len();

    let (start, end) = gradient::anchors(polygons, i, path);
    canvas.set_fill_linear_gradient(
        start,
        end,
        [
            GradientStop::new(0.0, colors[i]),
            GradientStop::new(1.0, colors[i + 1]),
        ],
    );

    canvas.begin_path();

    // Start tracing at a corner that is entered with a straight edge, so
    // arcs are drawn on the way around instead of being skipped over.
    let first = if corners[0].arc {
        if corners[len - 1].arc {
            1
        } else {
            len - 1
        }
    } else {
        0
    };

    canvas.move_to(corners[first].point);
    let mut first_iteration = true;
    let mut j = wrap(first + 1, len);
    while j != first {
        let corner = corners[j];
        if stroke.line_join == LineJoin::Round && corner.arc {
            let center = arc_center(path, i, j, len);
            let mut from = corners[wrap(j + len - 1, len)].point;
            if polygon.degenerate && !at_first_vertex(j, len) {
                // The neighbor covers part of this wedge.
                if polygons.get(i + 1).map_or(false, |p| p.right_join == Some(true)) {
                    j = wrap(j + 1, len);
                } else {
                    from = corners[wrap(j + len - 2, len)].point;
                }
            }
            if i > 0 && polygons[i - 1].degenerate && (j == 0 || j == len - 1) {
                if polygon.right_join == Some(false) {
                    j = wrap(j + 1, len);
                }
            }
            canvas.arc(center, radius, from - center, corners[j].point - center);
        } else {
            canvas.line_to(corner.point);
        }

        if !first_iteration && j == first {
            break;
        }
        j = wrap(j + 1, len);
        first_iteration = false;
    }

    canvas.close_path();
    canvas.fill();
}
