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

//! Unnormalized distance quantities compared by the distance predicates.
//! None of them takes a square root or divides.

use crate::geometry::{Direction2, Point2};
use crate::kernel::determinant::det2x2;
use crate::numeric::scalar::{RefArith, Scalar};

pub fn squared_distance<T>(p: &Point2<T>, q: &Point2<T>) -> T
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    let dx = &p.x - &q.x;
    let dy = &p.y - &q.y;
    &(&dx * &dx) + &(&dy * &dy)
}

/// Signed distance of `p` along `d`, scaled by `|d|`.
pub fn scaled_distance_to_direction<T>(d: &Direction2<T>, p: &Point2<T>) -> T
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    &(&d.dx * &p.x) + &(&d.dy * &p.y)
}

/// Signed distance of `r` to the line through `p` and `q`, scaled by
/// `|q - p|`. Positive when `r` lies to the left of `p -> q`.
pub fn scaled_distance_to_line<T>(p: &Point2<T>, q: &Point2<T>, r: &Point2<T>) -> T
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    det2x2(&(&p.x - &r.x), &(&p.y - &r.y), &(&q.x - &r.x), &(&q.y - &r.y))
}
