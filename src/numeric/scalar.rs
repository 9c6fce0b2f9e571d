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

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

use crate::kernel::enums::{Comparison, Sign};
use crate::operations::{Abs, One, Zero};

/// Number type a predicate can be evaluated over.
///
/// Only ring operations and ordering are required: every predicate in the
/// kernel is division free, so the same formula runs unchanged over
/// floating point, exact rationals, or the filtered [`LazyExact`] type.
///
/// By-reference arithmetic (`&a + &b`) is expected as well; generic code
/// states it as `for<'a> &'a T: RefArith<T>`.
///
/// [`LazyExact`]: crate::numeric::lazy_exact::LazyExact
pub trait Scalar:
    Clone
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
    + Abs
    + From<i32>
{
    /// Whether every ring operation on this type is exact. Preconditions that
    /// are only meaningful under exact arithmetic (e.g. collinearity of the
    /// inputs) are checked for exact types only.
    const IS_EXACT: bool;

    fn sign(&self) -> Sign;

    fn compare(&self, other: &Self) -> Comparison {
        Comparison::from((self.clone() - other.clone()).sign())
    }
}

/// Arithmetic on references, `&a op &b -> T`, in the manner of
/// `num_traits::RefNum` but without division.
pub trait RefArith<T>:
    Sized + Add<Self, Output = T> + Sub<Self, Output = T> + Mul<Self, Output = T> + Neg<Output = T>
{
}

impl<'a, T: 'a> RefArith<T> for &'a T where
    &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T> + Neg<Output = T>
{
}
