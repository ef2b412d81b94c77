// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::{Color, JoinPolygon, NormalizedF32, Point};

// Two neighboring polygons whose anchor projections are farther apart than
// this share a "wide" bridge and get clamped projections; anything closer
// falls back to a normal-direction projection. An empirical constant.
const PROJECTION_GAP: f32 = 0.3;

/// A gradient point.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct GradientStop {
    position: NormalizedF32,
    color: Color,
}

impl GradientStop {
    /// Creates a new gradient point.
    ///
    /// `position` will be clamped to a 0..=1 range.
    pub fn new(position: f32, color: Color) -> Self {
        GradientStop {
            position: NormalizedF32::new_clamped(position),
            color,
        }
    }

    /// Returns stop's position.
    pub fn position(&self) -> f32 {
        self.position.get()
    }

    /// Returns stop's color.
    pub fn color(&self) -> Color {
        self.color
    }
}

/// Selects the two points anchoring polygon `i`'s linear gradient.
///
/// `colors[i]` lands on the first point, `colors[i + 1]` on the second.
/// Anchors are picked so that the color transition stays visually
/// continuous across the shared corner with the neighboring polygons.
pub(crate) fn anchors(polygons: &[JoinPolygon], i: usize, path: &[Point]) -> (Point, Point) {
    let polygon = &polygons[i];
    let last = i == polygons.len() - 1;
    match polygon.len() {
        5 => five_corner_anchors(polygons, i, path, last),
        6 => six_corner_anchors(polygons, i, last),
        // A plain contour: the segment's own end points.
        _ => (path[i], path[i + 1]),
    }
}

fn five_corner_anchors(
    polygons: &[JoinPolygon],
    i: usize,
    path: &[Point],
    last: bool,
) -> (Point, Point) {
    let corners = &polygons[i].corners;
    match polygons[i].right_join {
        None => {
            if last {
                // Nothing to align with; reuse the first segment's anchors.
                (path[0], path[1])
            } else if polygons[i + 1].right_join == Some(true) {
                (corners[4].point, corners[3].point)
            } else {
                (corners[0].point, corners[1].point)
            }
        }
        Some(right) => {
            let (start, mut end) = if right {
                (corners[4].point, corners[3].point)
            } else {
                (corners[0].point, corners[1].point)
            };
            if !last {
                let next = &polygons[i + 1];
                // Snap onto the neighbor's shared corner.
                match next.right_join {
                    Some(true) => end = next.corners[0].point,
                    Some(false) => end = next.corners[next.len() - 1].point,
                    None => {}
                }
            }
            (start, end)
        }
    }
}

fn six_corner_anchors(polygons: &[JoinPolygon], i: usize, last: bool) -> (Point, Point) {
    let corners = &polygons[i].corners;
    let right = polygons[i].right_join == Some(true);

    let start;
    let v2;
    if right {
        start = corners[5].point;
        v2 = corners[0].point - start;
    } else {
        start = corners[0].point;
        v2 = corners[5].point - start;
    }

    let end;
    let v3;
    if last {
        if right {
            end = corners[4].point;
            v3 = corners[1].point - start;
        } else {
            end = corners[1].point;
            v3 = corners[4].point - start;
        }
    } else {
        let next = &polygons[i + 1];
        if next.right_join == Some(true) {
            end = next.corners[next.len() - 1].point;
            v3 = next.corners[0].point - start;
        } else {
            end = next.corners[0].point;
            v3 = next.corners[next.len() - 1].point - start;
        }
    }

    let v1 = end - start;
    let t = v1.dot(v2) / v1.dot(v1);
    let u = v1.dot(v3) / v1.dot(v1);
    if u - t > PROJECTION_GAP {
        // A wide bridge: clamp both anchors to their in-range projections
        // onto the start..end axis.
        let mut clamped_start = start;
        let mut clamped_end = end;
        if t > 0.0 && t < 1.0 {
            clamped_start = start + v1.scaled(t);
        }
        if u > 0.0 && u < 1.0 {
            clamped_end = start + v1.scaled(u);
        }
        (clamped_start, clamped_end)
    } else {
        // A narrow or degenerate bridge: project onto the averaged normal
        // direction instead, anchored at corner 5.
        let mut n = (corners[0].point - corners[5].point) + (corners[2].point - corners[3].point);
        if n.normalize() {
            n.rotate_cw();
        }
        let start = corners[5].point;
        let end = start + n.scaled((corners[2].point - start).dot(n));
        (start, end)
    }
}
