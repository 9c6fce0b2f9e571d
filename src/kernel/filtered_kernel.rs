// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Filtered predicates: exact answers at close to floating-point cost.
//!
//! [`FilteredKernel`] evaluates each formula over [`LazyExact`]. Every
//! intermediate carries a certified error bound; a sign is read from the
//! bound when it excludes zero and recomputed with GMP rationals otherwise.
//! The free functions below take plain `f64` coordinates for callers that
//! do not want to build `LazyExact` points themselves.

use crate::geometry::Point2;
use crate::kernel::enums::{BoundedSide, Comparison, Orientation, OrientedSide};
use crate::kernel::kernel::Kernel2;
use crate::kernel::predicates;
use crate::numeric::lazy_exact::LazyExact;

/// Exact predicates over double-precision input, filtered.
pub struct FilteredKernel;

impl Kernel2 for FilteredKernel {
    type FT = LazyExact;
}

/// Leaf point for the filtered kernel. Coordinates must be finite.
pub fn point(x: f64, y: f64) -> Point2<LazyExact> {
    Point2::new(x, y)
}

pub fn orientation_f64(p: [f64; 2], q: [f64; 2], r: [f64; 2]) -> Orientation {
    predicates::orientation(
        &point(p[0], p[1]),
        &point(q[0], q[1]),
        &point(r[0], r[1]),
    )
}

pub fn side_of_oriented_circle_f64(
    p: [f64; 2],
    q: [f64; 2],
    r: [f64; 2],
    t: [f64; 2],
) -> OrientedSide {
    predicates::side_of_oriented_circle(
        &point(p[0], p[1]),
        &point(q[0], q[1]),
        &point(r[0], r[1]),
        &point(t[0], t[1]),
    )
}

pub fn side_of_bounded_circle_f64(
    p: [f64; 2],
    q: [f64; 2],
    r: [f64; 2],
    t: [f64; 2],
) -> BoundedSide {
    predicates::side_of_bounded_circle(
        &point(p[0], p[1]),
        &point(q[0], q[1]),
        &point(r[0], r[1]),
        &point(t[0], t[1]),
    )
}

pub fn cmp_dist_to_point_f64(p: [f64; 2], q: [f64; 2], r: [f64; 2]) -> Comparison {
    predicates::cmp_dist_to_point(
        &point(p[0], p[1]),
        &point(q[0], q[1]),
        &point(r[0], r[1]),
    )
}
