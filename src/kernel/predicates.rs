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

//! The 2D predicate set.
//!
//! Every predicate is the sign of a division-free polynomial in the input
//! coordinates: intersections of implicit lines are compared through their
//! Cramer numerators and denominators, and the denominator sign is folded in
//! instead of dividing. Over an exact number type (or [`LazyExact`]) each
//! answer is therefore exact.
//!
//! [`LazyExact`]: crate::numeric::lazy_exact::LazyExact

use crate::geometry::{Direction2, Line2, Point2};
use crate::kernel::constructions::{
    scaled_distance_to_direction, scaled_distance_to_line, squared_distance,
};
use crate::kernel::determinant::{det2x2, sign_of_determinant2x2, sign_of_determinant3x3};
use crate::kernel::enums::{BoundedSide, Comparison, Orientation, OrientedSide, Sign};
use crate::numeric::scalar::{RefArith, Scalar};
use crate::operations::Abs;

/* ========= Implicit lines ========= */

/// Compares `px` with the abscissa of `l1 ∩ l2`.
///
/// Precondition: `l1` and `l2` are not parallel.
pub fn compare_x_at_intersection<T>(px: &T, l1: &Line2<T>, l2: &Line2<T>) -> Comparison
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    // The abscissa of the intersection point is num/den.
    let num = det2x2(&l1.b, &l1.c, &l2.b, &l2.c);
    let den = det2x2(&l1.a, &l1.b, &l2.a, &l2.b);
    let s = den.sign();
    crate::kernel_precondition!(s != Sign::Zero, "compare_x: parallel lines");
    Comparison::from(s * (px * &den).compare(&num).sign())
}

/// Compares the abscissae of `l1 ∩ l2` and `h1 ∩ h2`.
pub fn compare_x_of_intersections<T>(
    l1: &Line2<T>,
    l2: &Line2<T>,
    h1: &Line2<T>,
    h2: &Line2<T>,
) -> Comparison
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    let numl = det2x2(&l1.b, &l1.c, &l2.b, &l2.c);
    let denl = det2x2(&l1.a, &l1.b, &l2.a, &l2.b);
    let numh = det2x2(&h1.b, &h1.c, &h2.b, &h2.c);
    let denh = det2x2(&h1.a, &h1.b, &h2.a, &h2.b);
    let s = denl.sign() * denh.sign();
    crate::kernel_precondition!(s != Sign::Zero, "compare_x: parallel lines");
    Comparison::from(s * sign_of_determinant2x2(&denh, &numh, &denl, &numl))
}

/// Compares `p.y` with the ordinate of `l` at `p.x`.
///
/// Precondition: `l` is not vertical.
pub fn compare_y_at_x<T>(p: &Point2<T>, l: &Line2<T>) -> Comparison
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    let s = l.b.sign();
    crate::kernel_precondition!(s != Sign::Zero, "compare_y_at_x: vertical line");
    let v = &(&(&l.a * &p.x) + &(&l.b * &p.y)) + &l.c;
    Comparison::from(s * v.sign())
}

/// Compares the ordinates of `l1` and `l2` at abscissa `px`.
pub fn compare_y_at_x_of_lines<T>(px: &T, l1: &Line2<T>, l2: &Line2<T>) -> Comparison
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    let s = l1.b.sign() * l2.b.sign();
    crate::kernel_precondition!(s != Sign::Zero, "compare_y_at_x: vertical line");
    let e1 = &(&l1.a * px) + &l1.c;
    let e2 = &(&l2.a * px) + &l2.c;
    Comparison::from(s * sign_of_determinant2x2(&e2, &l2.b, &e1, &l1.b))
}

/// Compares the ordinate of `l1 ∩ l2` with the ordinate of `h` at the same
/// abscissa.
pub fn compare_y_at_intersection<T>(l1: &Line2<T>, l2: &Line2<T>, h: &Line2<T>) -> Comparison
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    let s = sign_of_determinant2x2(&l1.a, &l1.b, &l2.a, &l2.b) * h.b.sign();
    crate::kernel_precondition!(
        s != Sign::Zero,
        "compare_y_at_x: parallel lines or vertical query line"
    );
    Comparison::from(
        s * sign_of_determinant3x3(
            &l1.a, &l1.b, &l1.c, &l2.a, &l2.b, &l2.c, &h.a, &h.b, &h.c,
        ),
    )
}

/// Compares the ordinates of `h1` and `h2` at the abscissa of `l1 ∩ l2`.
pub fn compare_y_at_intersection_of_lines<T>(
    l1: &Line2<T>,
    l2: &Line2<T>,
    h1: &Line2<T>,
    h2: &Line2<T>,
) -> Comparison
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    // The abscissa of the intersection point is num/den.
    let num = det2x2(&l1.b, &l1.c, &l2.b, &l2.c);
    let den = det2x2(&l1.a, &l1.b, &l2.a, &l2.b);
    let s = h1.b.sign() * h2.b.sign() * den.sign();
    crate::kernel_precondition!(
        s != Sign::Zero,
        "compare_y_at_x: parallel lines or vertical query line"
    );
    let e1 = &(&h1.a * &num) + &(&h1.c * &den);
    let e2 = &(&h2.a * &num) + &(&h2.c * &den);
    Comparison::from(s * sign_of_determinant2x2(&e2, &h2.b, &e1, &h1.b))
}

/* ========= Points ========= */

pub fn compare_x<T: Scalar>(p: &Point2<T>, q: &Point2<T>) -> Comparison {
    p.x.compare(&q.x)
}

pub fn compare_y<T: Scalar>(p: &Point2<T>, q: &Point2<T>) -> Comparison {
    p.y.compare(&q.y)
}

pub fn compare_lexicographically_xy<T: Scalar>(p: &Point2<T>, q: &Point2<T>) -> Comparison {
    match compare_x(p, q) {
        Comparison::Equal => compare_y(p, q),
        c => c,
    }
}

/// Compares `|px - qx|` with `|ry - sy|`.
pub fn compare_deltax_deltay<T>(px: &T, qx: &T, ry: &T, sy: &T) -> Comparison
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    (px - qx).abs().compare(&(ry - sy).abs())
}

pub fn orientation<T>(p: &Point2<T>, q: &Point2<T>, r: &Point2<T>) -> Orientation
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    Orientation::from(sign_of_determinant2x2(
        &(&p.x - &r.x),
        &(&p.y - &r.y),
        &(&q.x - &r.x),
        &(&q.y - &r.y),
    ))
}

/// Whether `q` lies on the closed segment `[p, r]`, for collinear inputs.
///
/// Only the coordinates along one separating axis are compared, so the
/// result is meaningless if the points are not collinear.
pub fn collinear_are_ordered_along_line<T>(p: &Point2<T>, q: &Point2<T>, r: &Point2<T>) -> bool
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    crate::kernel_precondition!(
        !T::IS_EXACT || orientation(p, q, r) == Orientation::Collinear,
        "collinear_are_ordered_along_line: points are not collinear"
    );
    use Comparison::*;
    match p.x.compare(&q.x) {
        Smaller => return r.x.compare(&q.x) != Smaller,
        Larger => return q.x.compare(&r.x) != Smaller,
        Equal => {}
    }
    match p.y.compare(&q.y) {
        Smaller => r.y.compare(&q.y) != Smaller,
        Larger => q.y.compare(&r.y) != Smaller,
        // p == q
        Equal => true,
    }
}

/// Whether `q` lies strictly between `p` and `r`, for collinear inputs.
pub fn collinear_are_strictly_ordered_along_line<T>(
    p: &Point2<T>,
    q: &Point2<T>,
    r: &Point2<T>,
) -> bool
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    crate::kernel_precondition!(
        !T::IS_EXACT || orientation(p, q, r) == Orientation::Collinear,
        "collinear_are_strictly_ordered_along_line: points are not collinear"
    );
    use Comparison::*;
    match p.x.compare(&q.x) {
        Smaller => return q.x.compare(&r.x) == Smaller,
        Larger => return r.x.compare(&q.x) == Smaller,
        Equal => {}
    }
    match p.y.compare(&q.y) {
        Smaller => q.y.compare(&r.y) == Smaller,
        Larger => r.y.compare(&q.y) == Smaller,
        Equal => false,
    }
}

/* ========= Circles ========= */

/// Side of `t` relative to the circle through `p, q, r`, oriented by the
/// winding of `p, q, r`: positive inside a counterclockwise circle.
/// Cocircular points give `OnOrientedBoundary`.
pub fn side_of_oriented_circle<T>(
    p: &Point2<T>,
    q: &Point2<T>,
    r: &Point2<T>,
    t: &Point2<T>,
) -> OrientedSide
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    // Translate so that t is the origin; the lifted 3x3 incircle
    // determinant then reduces to a 2x2 one.
    let ptx = &p.x - &t.x;
    let pty = &p.y - &t.y;
    let qtx = &q.x - &t.x;
    let qty = &q.y - &t.y;
    let rtx = &r.x - &t.x;
    let rty = &r.y - &t.y;
    let a00 = det2x2(&ptx, &pty, &qtx, &qty);
    let a01 = &(&qtx * &(&q.x - &p.x)) + &(&qty * &(&q.y - &p.y));
    let a10 = det2x2(&ptx, &pty, &rtx, &rty);
    let a11 = &(&rtx * &(&r.x - &p.x)) + &(&rty * &(&r.y - &p.y));
    OrientedSide::from(sign_of_determinant2x2(&a00, &a01, &a10, &a11))
}

/// Winding-independent version of [`side_of_oriented_circle`].
pub fn side_of_bounded_circle<T>(
    p: &Point2<T>,
    q: &Point2<T>,
    r: &Point2<T>,
    t: &Point2<T>,
) -> BoundedSide
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    side_of_oriented_circle(p, q, r, t) * orientation(p, q, r)
}

/* ========= Distances ========= */

/// Compares `|p - q|` with `|p - r|`.
pub fn cmp_dist_to_point<T>(p: &Point2<T>, q: &Point2<T>, r: &Point2<T>) -> Comparison
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    squared_distance(p, q).compare(&squared_distance(p, r))
}

/// Whether `q` is farther from `p` than `r` is.
pub fn has_larger_dist_to_point<T>(p: &Point2<T>, q: &Point2<T>, r: &Point2<T>) -> bool
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    cmp_dist_to_point(p, q, r) == Comparison::Larger
}

pub fn has_smaller_dist_to_point<T>(p: &Point2<T>, q: &Point2<T>, r: &Point2<T>) -> bool
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    cmp_dist_to_point(p, q, r) == Comparison::Smaller
}

/// Compares the signed distances of `p` and `q` along `d`. Both are
/// scaled by `|d|`, so only their order is meaningful.
pub fn cmp_signed_dist_to_direction<T>(d: &Direction2<T>, p: &Point2<T>, q: &Point2<T>) -> Comparison
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    scaled_distance_to_direction(d, p).compare(&scaled_distance_to_direction(d, q))
}

pub fn has_larger_signed_dist_to_direction<T>(
    d: &Direction2<T>,
    p: &Point2<T>,
    q: &Point2<T>,
) -> bool
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    cmp_signed_dist_to_direction(d, p, q) == Comparison::Larger
}

pub fn has_smaller_signed_dist_to_direction<T>(
    d: &Direction2<T>,
    p: &Point2<T>,
    q: &Point2<T>,
) -> bool
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    cmp_signed_dist_to_direction(d, p, q) == Comparison::Smaller
}

/// Compares the signed distances of `r` and `s` to the line through `p`
/// and `q` (positive on the left). Both are scaled by `|q - p|`.
pub fn cmp_signed_dist_to_line<T>(
    p: &Point2<T>,
    q: &Point2<T>,
    r: &Point2<T>,
    s: &Point2<T>,
) -> Comparison
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    scaled_distance_to_line(p, q, r).compare(&scaled_distance_to_line(p, q, s))
}

pub fn has_larger_signed_dist_to_line<T>(
    p: &Point2<T>,
    q: &Point2<T>,
    r: &Point2<T>,
    s: &Point2<T>,
) -> bool
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    cmp_signed_dist_to_line(p, q, r, s) == Comparison::Larger
}

pub fn has_smaller_signed_dist_to_line<T>(
    p: &Point2<T>,
    q: &Point2<T>,
    r: &Point2<T>,
    s: &Point2<T>,
) -> bool
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    cmp_signed_dist_to_line(p, q, r, s) == Comparison::Smaller
}
