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

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use rug::Rational;

use crate::kernel::enums::{Comparison, Sign};
use crate::numeric::cgar_f64::CgarF64;
use crate::numeric::lazy_exact::LazyExact;
use crate::numeric::scalar::Scalar;
use crate::operations::{Abs, One, Zero};

/// Arbitrary-precision rational backed by GMP. Every ring operation is exact,
/// so signs computed over this type are always correct.
#[derive(Clone, Debug, Default, Hash)]
pub struct CgarRational(pub Rational);

/// Returned when a NaN or infinite double is converted to an exact value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NonFiniteError(pub f64);

impl fmt::Display for NonFiniteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} has no exact rational value", self.0)
    }
}

impl std::error::Error for NonFiniteError {}

impl CgarRational {
    pub fn from_num_den(num: i32, den: i32) -> Self {
        crate::kernel_precondition!(den != 0, "zero denominator");
        CgarRational(Rational::from((num, den)))
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }
}

impl Scalar for CgarRational {
    const IS_EXACT: bool = true;

    fn sign(&self) -> Sign {
        Sign::from(self.0.cmp0())
    }

    fn compare(&self, other: &Self) -> Comparison {
        Comparison::from(self.0.cmp(&other.0))
    }
}

impl<'a, 'b> Add<&'b CgarRational> for &'a CgarRational {
    type Output = CgarRational;

    fn add(self, rhs: &'b CgarRational) -> CgarRational {
        // in-place API on rug::Rational: result = self + rhs
        let mut result = self.0.clone();
        result += &rhs.0;
        CgarRational(result)
    }
}

impl Add for CgarRational {
    type Output = CgarRational;
    fn add(mut self, rhs: CgarRational) -> CgarRational {
        self.0 += rhs.0;
        self
    }
}

impl<'a, 'b> Sub<&'b CgarRational> for &'a CgarRational {
    type Output = CgarRational;

    fn sub(self, rhs: &'b CgarRational) -> CgarRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        CgarRational(result)
    }
}

impl Sub for CgarRational {
    type Output = CgarRational;
    fn sub(mut self, rhs: CgarRational) -> CgarRational {
        self.0 -= rhs.0;
        self
    }
}

impl<'a, 'b> Mul<&'b CgarRational> for &'a CgarRational {
    type Output = CgarRational;

    fn mul(self, rhs: &'b CgarRational) -> CgarRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        CgarRational(result)
    }
}

impl Mul for CgarRational {
    type Output = CgarRational;
    fn mul(mut self, rhs: CgarRational) -> CgarRational {
        self.0 *= rhs.0;
        self
    }
}

impl Neg for CgarRational {
    type Output = CgarRational;

    fn neg(self) -> CgarRational {
        CgarRational(-self.0)
    }
}

impl<'a> Neg for &'a CgarRational {
    type Output = CgarRational;

    fn neg(self) -> CgarRational {
        CgarRational(-self.0.clone())
    }
}

impl From<i32> for CgarRational {
    fn from(value: i32) -> Self {
        CgarRational(Rational::from(value))
    }
}

impl TryFrom<f64> for CgarRational {
    type Error = NonFiniteError;

    /// Every finite double is a dyadic rational, so the conversion is exact.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rational::from_f64(value)
            .map(CgarRational)
            .ok_or(NonFiniteError(value))
    }
}

impl From<f64> for CgarRational {
    /// Panics on non-finite input; use `try_from` to handle it.
    fn from(value: f64) -> Self {
        match CgarRational::try_from(value) {
            Ok(r) => r,
            Err(e) => panic!("kernel precondition violated: {e}"),
        }
    }
}

impl From<Rational> for CgarRational {
    fn from(value: Rational) -> Self {
        CgarRational(value)
    }
}

impl From<&CgarF64> for CgarRational {
    fn from(value: &CgarF64) -> Self {
        CgarRational::from(value.0)
    }
}

impl From<&LazyExact> for CgarRational {
    fn from(value: &LazyExact) -> Self {
        value.exact().clone()
    }
}

impl PartialEq for CgarRational {
    fn eq(&self, other: &CgarRational) -> bool {
        self.0 == other.0
    }
}

impl Eq for CgarRational {}

impl PartialOrd for CgarRational {
    fn partial_cmp(&self, other: &CgarRational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CgarRational {
    fn cmp(&self, other: &CgarRational) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Zero for CgarRational {
    fn zero() -> Self {
        CgarRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
    fn is_positive(&self) -> bool {
        self.0.cmp0() == Ordering::Greater
    }
    fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }
}

impl One for CgarRational {
    fn one() -> Self {
        CgarRational(Rational::from(1))
    }
}

impl Abs for CgarRational {
    fn abs(&self) -> Self {
        CgarRational(self.0.clone().abs())
    }
}
