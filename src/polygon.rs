// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use arrayvec::ArrayVec;

use crate::Point;

/// A single polygon corner.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Corner {
    /// Corner position.
    pub point: Point,
    /// When set, the edge into this corner is rendered as a circular arc
    /// around the nearest path vertex instead of a straight edge,
    /// provided the join style is round.
    pub arc: bool,
}

impl Corner {
    pub(crate) fn new(point: Point) -> Self {
        Corner { point, arc: false }
    }

    pub(crate) fn marked(point: Point) -> Self {
        Corner { point, arc: true }
    }
}

/// The filled region of one path segment.
///
/// A plain segment is its 4-corner offset rectangle. Joining with a
/// neighboring segment replaces corners with intersection points and may
/// add a 5th corner; bridging the join point carried over from the
/// previous segment may add a 6th.
#[derive(Clone, PartialEq, Debug)]
pub struct JoinPolygon {
    /// Corner points in drawing order.
    pub corners: ArrayVec<Corner, 6>,
    /// Which side the join bridged from the previous polygon favors:
    /// `Some(true)` when the predecessor bent right, `Some(false)` when it
    /// bent left, `None` when nothing was bridged.
    pub right_join: Option<bool>,
    /// The join at the trailing vertex fell outside the usable span of one
    /// of the adjacent segments.
    pub degenerate: bool,
}

impl JoinPolygon {
    /// Returns the number of corners. Always in a 4..=6 range.
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    /// Returns true when the polygon has no corners. Never the case for
    /// polygons produced by the stroker.
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }
}

/// Circular corner indexing.
pub(crate) fn wrap(i: usize, len: usize) -> usize {
    i % len
}
