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

//! Result vocabulary shared by every predicate.
//!
//! All five enums are isomorphic to [`Sign`]; converting through `Sign` is how
//! predicates combine partial results (e.g. `sign(den) * compare(...)`).

use std::cmp::Ordering;
use std::ops::{Mul, Neg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    pub fn from_i8(v: i8) -> Self {
        match v.signum() {
            -1 => Sign::Negative,
            0 => Sign::Zero,
            _ => Sign::Positive,
        }
    }

    pub fn as_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    pub fn is_zero(self) -> bool {
        self == Sign::Zero
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        Sign::from_i8(self.as_i8() * rhs.as_i8())
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        Sign::from_i8(-self.as_i8())
    }
}

impl From<Ordering> for Sign {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Less => Sign::Negative,
            Ordering::Equal => Sign::Zero,
            Ordering::Greater => Sign::Positive,
        }
    }
}

/// Winding of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Collinear,
    CounterClockwise,
}

/// Outcome of comparing two quantities; antisymmetric under operand swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Smaller,
    Equal,
    Larger,
}

impl Comparison {
    pub fn opposite(self) -> Self {
        Comparison::from(-self.sign())
    }
}

impl From<Ordering> for Comparison {
    fn from(o: Ordering) -> Self {
        Comparison::from(Sign::from(o))
    }
}

impl From<Comparison> for Ordering {
    fn from(c: Comparison) -> Self {
        match c {
            Comparison::Smaller => Ordering::Less,
            Comparison::Equal => Ordering::Equal,
            Comparison::Larger => Ordering::Greater,
        }
    }
}

/// Side of a point relative to an oriented circle or line. The sign depends
/// on the winding of the defining points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrientedSide {
    OnNegativeSide,
    OnOrientedBoundary,
    OnPositiveSide,
}

/// Side of a point relative to a bounded region, independent of winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundedSide {
    OnUnboundedSide,
    OnBoundary,
    OnBoundedSide,
}

macro_rules! sign_isomorphism {
    ($ty:ident, $neg:ident, $zero:ident, $pos:ident) => {
        impl $ty {
            pub fn sign(self) -> Sign {
                match self {
                    $ty::$neg => Sign::Negative,
                    $ty::$zero => Sign::Zero,
                    $ty::$pos => Sign::Positive,
                }
            }
        }

        impl From<Sign> for $ty {
            fn from(s: Sign) -> Self {
                match s {
                    Sign::Negative => $ty::$neg,
                    Sign::Zero => $ty::$zero,
                    Sign::Positive => $ty::$pos,
                }
            }
        }

        impl From<$ty> for Sign {
            fn from(v: $ty) -> Self {
                v.sign()
            }
        }

        impl Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $ty::from(-self.sign())
            }
        }
    };
}

sign_isomorphism!(Orientation, Clockwise, Collinear, CounterClockwise);
sign_isomorphism!(Comparison, Smaller, Equal, Larger);
sign_isomorphism!(OrientedSide, OnNegativeSide, OnOrientedBoundary, OnPositiveSide);
sign_isomorphism!(BoundedSide, OnUnboundedSide, OnBoundary, OnBoundedSide);

/// Normalizes an oriented side by the winding of the defining triangle.
impl Mul<Orientation> for OrientedSide {
    type Output = BoundedSide;

    fn mul(self, rhs: Orientation) -> BoundedSide {
        BoundedSide::from(self.sign() * rhs.sign())
    }
}
