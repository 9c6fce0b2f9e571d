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

//! Small determinants by direct cofactor expansion.
//!
//! No pivoting and no division: the polynomial degree of every result is
//! fixed (2 for 2x2, 3 for 3x3), which keeps the error bound of a filtered
//! evaluation small and predictable.

use crate::kernel::enums::Sign;
use crate::numeric::scalar::{RefArith, Scalar};

/// `| a00 a01 |`
/// `| a10 a11 |`
#[inline]
pub fn det2x2<T>(a00: &T, a01: &T, a10: &T, a11: &T) -> T
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    &(a00 * a11) - &(a10 * a01)
}

/// Third-column expansion over the three 2x2 minors of the first two
/// columns.
#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub fn det3x3<T>(
    a00: &T, a01: &T, a02: &T,
    a10: &T, a11: &T, a12: &T,
    a20: &T, a21: &T, a22: &T,
) -> T
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    let m01 = det2x2(a00, a01, a10, a11);
    let m02 = det2x2(a00, a01, a20, a21);
    let m12 = det2x2(a10, a11, a20, a21);
    &(&(a02 * &m12) - &(a12 * &m02)) + &(a22 * &m01)
}

#[inline]
pub fn sign_of_determinant2x2<T>(a00: &T, a01: &T, a10: &T, a11: &T) -> Sign
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    det2x2(a00, a01, a10, a11).sign()
}

#[allow(clippy::too_many_arguments)]
#[rustfmt::skip]
pub fn sign_of_determinant3x3<T>(
    a00: &T, a01: &T, a02: &T,
    a10: &T, a11: &T, a12: &T,
    a20: &T, a21: &T, a22: &T,
) -> Sign
where
    T: Scalar,
    for<'a> &'a T: RefArith<T>,
{
    det3x3(a00, a01, a02, a10, a11, a12, a20, a21, a22).sign()
}
