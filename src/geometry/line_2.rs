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

use crate::geometry::point_2::Point2;
use crate::numeric::scalar::Scalar;
use std::ops::{Mul, Sub};

/// Implicit line `a·x + b·y + c = 0`.
///
/// Predicates on lines reason about intersections through the coefficients
/// only; the intersection point is never constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Line2<T>
where
    T: Scalar,
{
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T> Line2<T>
where
    T: Scalar,
{
    pub fn new<A, B, C>(a: A, b: B, c: C) -> Self
    where
        A: Into<T>,
        B: Into<T>,
        C: Into<T>,
    {
        Self {
            a: a.into(),
            b: b.into(),
            c: c.into(),
        }
    }

    /// Line through `p` and `q`, oriented from `p` to `q` (positive side on
    /// the left).
    pub fn through(p: &Point2<T>, q: &Point2<T>) -> Self
    where
        for<'a> &'a T: Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
    {
        let a = &p.y - &q.y;
        let b = &q.x - &p.x;
        let c = &(&p.x * &q.y) - &(&p.y * &q.x);
        Self { a, b, c }
    }

    pub fn is_vertical(&self) -> bool {
        self.b.sign().is_zero()
    }
}
