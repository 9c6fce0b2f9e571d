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

use crate::{
    kernel::enums::{Comparison, Sign},
    numeric::{cgar_rational::CgarRational, lazy_exact::LazyExact, scalar::Scalar},
    operations::{Abs, One, Zero},
};

use std::{
    cmp::Ordering,
    ops::{Add, Mul, Neg, Sub},
};

/// Plain double precision. Fast, but signs of near-degenerate expressions
/// may be wrong; use it as the inexact reference, not for robust code.
#[derive(Clone, Copy, Debug, Default)]
pub struct CgarF64(pub f64);

impl Scalar for CgarF64 {
    const IS_EXACT: bool = false;

    /// Returns the sign of the stored double. NaN violates the kernel
    /// preconditions and maps to `Zero` when checks are disabled.
    fn sign(&self) -> Sign {
        crate::kernel_precondition!(!self.0.is_nan(), "NaN coordinate");
        if self.0 > 0.0 {
            Sign::Positive
        } else if self.0 < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    #[inline(always)]
    fn compare(&self, other: &Self) -> Comparison {
        match self.0.partial_cmp(&other.0) {
            Some(o) => Comparison::from(o),
            None => {
                crate::kernel_precondition!(false, "NaN coordinate in comparison");
                Comparison::Equal
            }
        }
    }
}

impl<'a, 'b> Add<&'b CgarF64> for &'a CgarF64 {
    type Output = CgarF64;

    fn add(self, rhs: &'b CgarF64) -> CgarF64 {
        CgarF64(self.0 + rhs.0)
    }
}

impl Add for CgarF64 {
    type Output = CgarF64;
    fn add(self, rhs: CgarF64) -> CgarF64 {
        &self + &rhs
    }
}

impl<'a, 'b> Sub<&'b CgarF64> for &'a CgarF64 {
    type Output = CgarF64;

    fn sub(self, rhs: &'b CgarF64) -> CgarF64 {
        CgarF64(self.0 - rhs.0)
    }
}

impl Sub for CgarF64 {
    type Output = CgarF64;
    fn sub(self, rhs: CgarF64) -> CgarF64 {
        &self - &rhs
    }
}

impl<'a, 'b> Mul<&'b CgarF64> for &'a CgarF64 {
    type Output = CgarF64;

    fn mul(self, rhs: &'b CgarF64) -> CgarF64 {
        CgarF64(self.0 * rhs.0)
    }
}

impl Mul for CgarF64 {
    type Output = CgarF64;
    fn mul(self, rhs: CgarF64) -> CgarF64 {
        &self * &rhs
    }
}

impl Neg for CgarF64 {
    type Output = CgarF64;

    fn neg(self) -> CgarF64 {
        CgarF64(-self.0)
    }
}

impl<'a> Neg for &'a CgarF64 {
    type Output = CgarF64;

    fn neg(self) -> CgarF64 {
        CgarF64(-self.0)
    }
}

impl From<i32> for CgarF64 {
    fn from(value: i32) -> Self {
        CgarF64(value as f64)
    }
}

impl From<f64> for CgarF64 {
    fn from(value: f64) -> Self {
        CgarF64(value)
    }
}

impl From<CgarF64> for f64 {
    fn from(value: CgarF64) -> Self {
        value.0
    }
}

impl From<&CgarRational> for CgarF64 {
    fn from(value: &CgarRational) -> Self {
        CgarF64(value.0.to_f64())
    }
}

impl From<&LazyExact> for CgarF64 {
    fn from(value: &LazyExact) -> Self {
        CgarF64(value.approx().m)
    }
}

impl PartialEq for CgarF64 {
    fn eq(&self, other: &CgarF64) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for CgarF64 {
    fn partial_cmp(&self, other: &CgarF64) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Zero for CgarF64 {
    fn zero() -> Self {
        CgarF64(0.0)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
    fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
    fn is_negative(&self) -> bool {
        self.0 < 0.0
    }
}

impl One for CgarF64 {
    fn one() -> Self {
        CgarF64(1.0)
    }
}

impl Abs for CgarF64 {
    fn abs(&self) -> Self {
        CgarF64(self.0.abs())
    }
}
