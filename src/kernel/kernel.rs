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

use crate::geometry::{Direction2, Line2, Point2};
use crate::kernel::enums::{BoundedSide, Comparison, Orientation, OrientedSide};
use crate::kernel::predicates;
use crate::numeric::scalar::{RefArith, Scalar};

/// A choice of number type for the 2D predicate set.
///
/// All predicates are provided methods over the same generic formulas;
/// kernels differ only in `FT`, which decides speed and robustness.
pub trait Kernel2
where
    for<'a> &'a Self::FT: RefArith<Self::FT>,
{
    type FT: Scalar;

    fn orientation(
        p: &Point2<Self::FT>,
        q: &Point2<Self::FT>,
        r: &Point2<Self::FT>,
    ) -> Orientation {
        predicates::orientation(p, q, r)
    }

    fn collinear(p: &Point2<Self::FT>, q: &Point2<Self::FT>, r: &Point2<Self::FT>) -> bool {
        Self::orientation(p, q, r) == Orientation::Collinear
    }

    fn collinear_are_ordered_along_line(
        p: &Point2<Self::FT>,
        q: &Point2<Self::FT>,
        r: &Point2<Self::FT>,
    ) -> bool {
        predicates::collinear_are_ordered_along_line(p, q, r)
    }

    fn collinear_are_strictly_ordered_along_line(
        p: &Point2<Self::FT>,
        q: &Point2<Self::FT>,
        r: &Point2<Self::FT>,
    ) -> bool {
        predicates::collinear_are_strictly_ordered_along_line(p, q, r)
    }

    fn side_of_oriented_circle(
        p: &Point2<Self::FT>,
        q: &Point2<Self::FT>,
        r: &Point2<Self::FT>,
        t: &Point2<Self::FT>,
    ) -> OrientedSide {
        predicates::side_of_oriented_circle(p, q, r, t)
    }

    fn side_of_bounded_circle(
        p: &Point2<Self::FT>,
        q: &Point2<Self::FT>,
        r: &Point2<Self::FT>,
        t: &Point2<Self::FT>,
    ) -> BoundedSide {
        predicates::side_of_bounded_circle(p, q, r, t)
    }

    fn compare_x(p: &Point2<Self::FT>, q: &Point2<Self::FT>) -> Comparison {
        predicates::compare_x(p, q)
    }

    fn compare_y(p: &Point2<Self::FT>, q: &Point2<Self::FT>) -> Comparison {
        predicates::compare_y(p, q)
    }

    fn compare_xy(p: &Point2<Self::FT>, q: &Point2<Self::FT>) -> Comparison {
        predicates::compare_lexicographically_xy(p, q)
    }

    fn compare_x_at_intersection(
        px: &Self::FT,
        l1: &Line2<Self::FT>,
        l2: &Line2<Self::FT>,
    ) -> Comparison {
        predicates::compare_x_at_intersection(px, l1, l2)
    }

    fn compare_x_of_intersections(
        l1: &Line2<Self::FT>,
        l2: &Line2<Self::FT>,
        h1: &Line2<Self::FT>,
        h2: &Line2<Self::FT>,
    ) -> Comparison {
        predicates::compare_x_of_intersections(l1, l2, h1, h2)
    }

    fn compare_y_at_x(p: &Point2<Self::FT>, l: &Line2<Self::FT>) -> Comparison {
        predicates::compare_y_at_x(p, l)
    }

    fn compare_y_at_x_of_lines(
        px: &Self::FT,
        l1: &Line2<Self::FT>,
        l2: &Line2<Self::FT>,
    ) -> Comparison {
        predicates::compare_y_at_x_of_lines(px, l1, l2)
    }

    fn compare_y_at_intersection(
        l1: &Line2<Self::FT>,
        l2: &Line2<Self::FT>,
        h: &Line2<Self::FT>,
    ) -> Comparison {
        predicates::compare_y_at_intersection(l1, l2, h)
    }

    fn compare_y_at_intersection_of_lines(
        l1: &Line2<Self::FT>,
        l2: &Line2<Self::FT>,
        h1: &Line2<Self::FT>,
        h2: &Line2<Self::FT>,
    ) -> Comparison {
        predicates::compare_y_at_intersection_of_lines(l1, l2, h1, h2)
    }

    fn compare_deltax_deltay(
        px: &Self::FT,
        qx: &Self::FT,
        ry: &Self::FT,
        sy: &Self::FT,
    ) -> Comparison {
        predicates::compare_deltax_deltay(px, qx, ry, sy)
    }

    fn cmp_dist_to_point(
        p: &Point2<Self::FT>,
        q: &Point2<Self::FT>,
        r: &Point2<Self::FT>,
    ) -> Comparison {
        predicates::cmp_dist_to_point(p, q, r)
    }

    fn cmp_signed_dist_to_direction(
        d: &Direction2<Self::FT>,
        p: &Point2<Self::FT>,
        q: &Point2<Self::FT>,
    ) -> Comparison {
        predicates::cmp_signed_dist_to_direction(d, p, q)
    }

    fn cmp_signed_dist_to_line(
        p: &Point2<Self::FT>,
        q: &Point2<Self::FT>,
        r: &Point2<Self::FT>,
        s: &Point2<Self::FT>,
    ) -> Comparison {
        predicates::cmp_signed_dist_to_line(p, q, r, s)
    }
}
