// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use crate::{Color, GradientStop, Point};

/// A polygon fill backend.
///
/// The stroker emits its polygons through this trait and never touches
/// pixels itself. The surface is modeled after a 2D canvas API: a current
/// path is built up between [`begin_path`](Self::begin_path) and
/// [`fill`](Self::fill), and the fill style is whatever was set last.
///
/// Implementations define their own sweep orientation for
/// [`arc`](Self::arc) and their own thread-affinity rules.
pub trait Canvas {
    /// Starts a new path, discarding any path built so far.
    fn begin_path(&mut self);

    /// Closes the current subpath with a straight edge back to its start.
    fn close_path(&mut self);

    /// Starts a new subpath at `p`.
    fn move_to(&mut self, p: Point);

    /// Adds a straight edge from the current point to `p`.
    ///
    /// Implementations may ignore a `p` identical to the current point.
    fn line_to(&mut self, p: Point);

    /// Adds a circular arc around `center` with the given `radius`.
    ///
    /// The arc sweeps from the direction of `from` to the direction of
    /// `to`, both taken relative to `center`. The vectors do not have to
    /// be normalized.
    fn arc(&mut self, center: Point, radius: f32, from: Point, to: Point);

    /// Sets the fill style to a solid color.
    fn set_fill_color(&mut self, color: Color);

    /// Sets the fill style to a two-stop linear gradient.
    ///
    /// The gradient is interpolated along `start`..`end` and is constant
    /// in the perpendicular direction.
    fn set_fill_linear_gradient(&mut self, start: Point, end: Point, stops: [GradientStop; 2]);

    /// Fills the current path with the current fill style.
    fn fill(&mut self);
}
