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

use crate::numeric::scalar::Scalar;

#[derive(Debug, Clone, PartialEq)]
pub struct Point2<T>
where
    T: Scalar,
{
    pub x: T,
    pub y: T,
}

impl<T> Point2<T>
where
    T: Scalar,
{
    pub fn new<X, Y>(x: X, y: Y) -> Self
    where
        X: Into<T>,
        Y: Into<T>,
    {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Re-expresses the coordinates in another number type, e.g. to run the
    /// same configuration through an exact kernel.
    pub fn convert<U>(&self) -> Point2<U>
    where
        U: Scalar + for<'a> From<&'a T>,
    {
        Point2 {
            x: U::from(&self.x),
            y: U::from(&self.y),
        }
    }
}

impl<T> From<(T, T)> for Point2<T>
where
    T: Scalar,
{
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}
