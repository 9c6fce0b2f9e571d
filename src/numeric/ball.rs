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

use crate::kernel::enums::Sign;

/// Midpoint-radius enclosure: the true value lies in `[m - r, m + r]`.
///
/// Arithmetic propagates the input radii and adds the exact rounding error
/// of each operation (recovered with `two_sum` / FMA `two_prod`). Radius
/// updates are rounded upward, so the enclosure holds for every finite
/// result and the bound grows with the degree and operation count of the
/// evaluated formula.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ball {
    pub m: f64,
    pub r: f64,
}

/// Smallest positive subnormal. Covers the rounding error of a product
/// whose FMA residual underflows.
const ETA: f64 = f64::from_bits(1);

/// 2^-969: below this magnitude the FMA residual of a product may itself
/// be rounded.
const UNDERFLOW_GUARD: f64 = f64::from_bits(54 << 52);

#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    (s, err)
}

#[inline]
fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    // exact as long as a * b neither overflows nor underflows
    let err = f64::mul_add(a, b, -p);
    (p, err)
}

/// Next double towards +inf. Only used on non-negative radii.
#[inline(always)]
fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return ETA;
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Upper bound on `a + b` for non-negative operands.
#[inline(always)]
fn add_up(a: f64, b: f64) -> f64 {
    let (s, e) = two_sum(a, b);
    if e == 0.0 { s } else { next_up(s) }
}

/// Upper bound on `a * b` for non-negative operands.
#[inline(always)]
fn mul_up(a: f64, b: f64) -> f64 {
    if a == 0.0 || b == 0.0 {
        return 0.0;
    }
    next_up(a * b)
}

impl Ball {
    /// An exactly known double.
    #[inline]
    pub fn from_f64(x: f64) -> Self {
        Ball { m: x, r: 0.0 }
    }

    /// Enclosure of a value `x` was rounded from (one ulp either side).
    #[inline]
    pub fn rounded(x: f64) -> Self {
        Ball {
            m: x,
            r: add_up(mul_up(x.abs(), f64::EPSILON), ETA),
        }
    }

    #[inline]
    pub fn add(self, o: Self) -> Self {
        let (s, e) = two_sum(self.m, o.m);
        Ball {
            m: s,
            r: add_up(add_up(self.r, o.r), e.abs()),
        }
    }

    #[inline]
    pub fn sub(self, o: Self) -> Self {
        self.add(o.neg())
    }

    #[inline]
    pub fn neg(self) -> Self {
        Ball {
            m: -self.m,
            r: self.r,
        }
    }

    /// `||v| - |m|| <= |v - m|`, so the radius carries over unchanged.
    #[inline]
    pub fn abs(self) -> Self {
        Ball {
            m: self.m.abs(),
            r: self.r,
        }
    }

    #[inline]
    pub fn mul(self, o: Self) -> Self {
        let (p, e) = two_prod(self.m, o.m);
        let spread = add_up(
            add_up(mul_up(self.m.abs(), o.r), mul_up(o.m.abs(), self.r)),
            mul_up(self.r, o.r),
        );
        let mut r = add_up(spread, e.abs());
        if p.abs() < UNDERFLOW_GUARD && self.m != 0.0 && o.m != 0.0 {
            r = add_up(r, ETA);
        }
        Ball { m: p, r }
    }

    /// Certified sign, or `None` when the enclosure touches zero or the
    /// evaluation left the finite range.
    #[inline]
    pub fn sign_if_certain(self) -> Option<Sign> {
        if !self.m.is_finite() || !self.r.is_finite() {
            return None;
        }
        if self.r == 0.0 {
            return Some(if self.m > 0.0 {
                Sign::Positive
            } else if self.m < 0.0 {
                Sign::Negative
            } else {
                Sign::Zero
            });
        }
        if self.m > self.r {
            Some(Sign::Positive)
        } else if self.m < -self.r {
            Some(Sign::Negative)
        } else {
            None
        }
    }
}
