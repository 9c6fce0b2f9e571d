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

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use rug::Rational;

use crate::kernel::enums::{Comparison, Sign};
use crate::numeric::ball::Ball;
use crate::numeric::cgar_f64::CgarF64;
use crate::numeric::cgar_rational::CgarRational;
use crate::numeric::scalar::Scalar;
use crate::operations::{Abs, One, Zero};

/// A lazily-evaluated, filtered scalar expression:
/// - carries a certified floating-point enclosure ([`Ball`]) computed eagerly
/// - computes the exact value ([`CgarRational`]) only on demand, memoized
///
/// Sign queries answer from the enclosure when it excludes zero and promote
/// to the exact value otherwise, so every sign is the infinite-precision
/// sign of the expression over the input values.
///
/// Expression nodes are immutable and shared via `Arc`; clones are cheap.
#[derive(Clone)]
pub struct LazyExact(Arc<Node>);

struct Node {
    kind: Kind,
    approx: Ball,
    exact: OnceCell<CgarRational>,
}

enum Kind {
    LeafApprox(f64),
    LeafExact,
    Add(LazyExact, LazyExact),
    Sub(LazyExact, LazyExact),
    Mul(LazyExact, LazyExact),
    Neg(LazyExact),
    Abs(LazyExact),
}

/// Per-thread count of sign queries, split by the tier that answered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub certified: u64,
    pub escalated: u64,
}

thread_local! {
    static STATS: Cell<FilterStats> = const {
        Cell::new(FilterStats { certified: 0, escalated: 0 })
    };
}

impl FilterStats {
    pub fn current() -> Self {
        STATS.with(|s| s.get())
    }

    pub fn reset() {
        STATS.with(|s| s.set(FilterStats::default()));
    }

    fn record(escalated: bool) {
        STATS.with(|s| {
            let mut v = s.get();
            if escalated {
                v.escalated += 1;
            } else {
                v.certified += 1;
            }
            s.set(v);
        });
    }
}

impl LazyExact {
    /* ========= Constructors ========= */

    /// Leaf holding a double. The double is its own exact value.
    pub fn from_f64(v: f64) -> Self {
        crate::kernel_precondition!(v.is_finite(), "non-finite coordinate {v}");
        LazyExact(Arc::new(Node {
            kind: Kind::LeafApprox(v),
            approx: Ball::from_f64(v),
            exact: OnceCell::new(),
        }))
    }

    pub fn from_i32(v: i32) -> Self {
        // every i32 is exactly representable as a double
        Self::from_f64(v as f64)
    }

    pub fn from_rug_rational(r: Rational) -> Self {
        Self::from_cgar_rational(CgarRational(r))
    }

    pub fn from_cgar_rational(v: CgarRational) -> Self {
        let d = v.to_f64();
        let approx = if Rational::from_f64(d).is_some_and(|r| r == v.0) {
            Ball::from_f64(d)
        } else {
            Ball::rounded(d)
        };
        LazyExact(Arc::new(Node {
            kind: Kind::LeafExact,
            approx,
            exact: OnceCell::with_value(v),
        }))
    }

    /* ========= Basic queries ========= */

    /// Certified enclosure of the value.
    pub fn approx(&self) -> Ball {
        self.0.approx
    }

    /// Exact value; computed lazily and cached.
    pub fn exact(&self) -> &CgarRational {
        self.0.exact.get_or_init(|| match &self.0.kind {
            Kind::LeafApprox(a) => CgarRational::from(*a),
            Kind::LeafExact => unreachable!("exact leaves are built with their value"),
            Kind::Add(a, b) => a.exact() + b.exact(),
            Kind::Sub(a, b) => a.exact() - b.exact(),
            Kind::Mul(a, b) => a.exact() * b.exact(),
            Kind::Neg(x) => -x.exact(),
            Kind::Abs(x) => x.exact().abs(),
        })
    }

    pub fn has_exact(&self) -> bool {
        self.0.exact.get().is_some()
    }

    /// Sign with lazy exact fallback:
    /// - if the enclosure excludes zero (or is a single point), use it
    /// - else compute the exact value and use its sign
    pub fn sign(&self) -> Sign {
        if let Some(s) = self.exact_sign_if_known() {
            crate::kernel_assertion!(
                self.0.approx.sign_if_certain().is_none_or(|a| a == s),
                "enclosure [{:e} ± {:e}] excludes the exact sign {s:?}",
                self.0.approx.m,
                self.0.approx.r
            );
            return s;
        }
        if let Some(s) = self.0.approx.sign_if_certain() {
            FilterStats::record(false);
            return s;
        }
        FilterStats::record(true);
        #[cfg(feature = "logging")]
        log::trace!(
            "filter failed (approx={:e}, radius={:e}); evaluating exactly",
            self.0.approx.m,
            self.0.approx.r
        );
        self.exact().sign()
    }

    fn exact_sign_if_known(&self) -> Option<Sign> {
        self.0.exact.get().map(|e| e.sign())
    }

    /// Interior node; leaves are built by the constructors above.
    #[inline]
    fn new(kind: Kind) -> Self {
        let approx = match &kind {
            Kind::LeafApprox(_) | Kind::LeafExact => {
                unreachable!("leaves are not built through LazyExact::new")
            }
            Kind::Add(a, b) => a.approx().add(b.approx()),
            Kind::Sub(a, b) => a.approx().sub(b.approx()),
            Kind::Mul(a, b) => a.approx().mul(b.approx()),
            Kind::Neg(x) => x.approx().neg(),
            Kind::Abs(x) => x.approx().abs(),
        };
        LazyExact(Arc::new(Node {
            kind,
            approx,
            exact: OnceCell::new(),
        }))
    }
}

impl Scalar for LazyExact {
    const IS_EXACT: bool = true;

    fn sign(&self) -> Sign {
        LazyExact::sign(self)
    }

    fn compare(&self, other: &Self) -> Comparison {
        Comparison::from((self - other).sign())
    }
}

/* ========= Operator overloads (build expression DAGs) ========= */

impl Add for LazyExact {
    type Output = LazyExact;
    fn add(self, rhs: LazyExact) -> LazyExact {
        LazyExact::new(Kind::Add(self, rhs))
    }
}

impl<'a, 'b> Add<&'b LazyExact> for &'a LazyExact {
    type Output = LazyExact;
    fn add(self, rhs: &'b LazyExact) -> LazyExact {
        LazyExact::new(Kind::Add(self.clone(), rhs.clone()))
    }
}

impl Sub for LazyExact {
    type Output = LazyExact;
    fn sub(self, rhs: LazyExact) -> LazyExact {
        LazyExact::new(Kind::Sub(self, rhs))
    }
}

impl<'a, 'b> Sub<&'b LazyExact> for &'a LazyExact {
    type Output = LazyExact;
    fn sub(self, rhs: &'b LazyExact) -> LazyExact {
        LazyExact::new(Kind::Sub(self.clone(), rhs.clone()))
    }
}

impl Mul for LazyExact {
    type Output = LazyExact;
    fn mul(self, rhs: LazyExact) -> LazyExact {
        LazyExact::new(Kind::Mul(self, rhs))
    }
}

impl<'a, 'b> Mul<&'b LazyExact> for &'a LazyExact {
    type Output = LazyExact;
    fn mul(self, rhs: &'b LazyExact) -> LazyExact {
        LazyExact::new(Kind::Mul(self.clone(), rhs.clone()))
    }
}

impl Neg for LazyExact {
    type Output = LazyExact;
    fn neg(self) -> LazyExact {
        LazyExact::new(Kind::Neg(self))
    }
}

impl<'a> Neg for &'a LazyExact {
    type Output = LazyExact;
    fn neg(self) -> LazyExact {
        LazyExact::new(Kind::Neg(self.clone()))
    }
}

impl Abs for LazyExact {
    fn abs(&self) -> Self {
        LazyExact::new(Kind::Abs(self.clone()))
    }
}

impl Zero for LazyExact {
    fn zero() -> Self {
        Self::from_i32(0)
    }

    fn is_zero(&self) -> bool {
        self.sign() == Sign::Zero
    }
    fn is_positive(&self) -> bool {
        self.sign() == Sign::Positive
    }
    fn is_negative(&self) -> bool {
        self.sign() == Sign::Negative
    }
}

impl One for LazyExact {
    fn one() -> Self {
        Self::from_i32(1)
    }
}

impl PartialEq for LazyExact {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Comparison::Equal
    }
}

impl PartialOrd for LazyExact {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ordering::from(self.compare(other)))
    }
}

/* ========= Conversions ========= */

impl From<f64> for LazyExact {
    fn from(v: f64) -> Self {
        Self::from_f64(v)
    }
}
impl From<i32> for LazyExact {
    fn from(v: i32) -> Self {
        Self::from_i32(v)
    }
}
impl From<Rational> for LazyExact {
    fn from(v: Rational) -> Self {
        Self::from_rug_rational(v)
    }
}
impl From<&CgarF64> for LazyExact {
    fn from(v: &CgarF64) -> Self {
        Self::from_f64(v.0)
    }
}
impl From<&CgarRational> for LazyExact {
    fn from(v: &CgarRational) -> Self {
        Self::from_cgar_rational(v.clone())
    }
}
impl From<CgarRational> for LazyExact {
    fn from(v: CgarRational) -> Self {
        Self::from_cgar_rational(v)
    }
}

/* ========= Debug ========= */

impl fmt::Debug for LazyExact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Show approx eagerly; exact only if already realized
        let a = self.0.approx;
        if let Some(e) = self.0.exact.get() {
            write!(f, "LazyExact(approx={:e}±{:e}, exact={:?})", a.m, a.r, e.0)
        } else {
            write!(f, "LazyExact(approx={:e}±{:e}, exact=<lazy>)", a.m, a.r)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_separated_sign_stays_in_fast_tier() {
        FilterStats::reset();
        let a = LazyExact::from_f64(0.1);
        let b = LazyExact::from_f64(0.2);
        let s = &(&a * &b) - &LazyExact::from_f64(0.01);
        assert_eq!(s.sign(), Sign::Positive);
        assert!(!s.has_exact());
        assert_eq!(FilterStats::current().escalated, 0);
    }

    #[test]
    fn hidden_cancellation_escalates() {
        FilterStats::reset();
        // fl(1/3) * 3 is exactly 1 - 2^-54 but rounds to 1.0 in doubles
        let third = LazyExact::from_f64(1.0 / 3.0);
        let d = &(&third * &LazyExact::from_i32(3)) - &LazyExact::one();
        assert_eq!(d.approx().m, 0.0);
        assert_eq!(d.sign(), Sign::Negative);
        assert!(d.has_exact());
        assert_eq!(FilterStats::current().escalated, 1);
    }

    #[test]
    fn exact_leaf_from_non_dyadic_rational() {
        let tenth = LazyExact::from_cgar_rational(CgarRational::from_num_den(1, 10));
        let ten = LazyExact::from_i32(10);
        let d = &(&tenth * &ten) - &LazyExact::one();
        assert_eq!(d.sign(), Sign::Zero);
        assert!(tenth.approx().r > 0.0);
    }

    #[test]
    fn abs_and_neg_follow_exact_value() {
        let x = &LazyExact::from_f64(1.0 / 3.0) * &LazyExact::from_i32(3);
        let d = &x - &LazyExact::one();
        assert_eq!((-&d).sign(), Sign::Positive);
        assert_eq!(d.abs().sign(), Sign::Positive);
        assert_eq!(d.abs().exact(), &(-d.exact()));
    }

    #[test]
    fn ordering_is_exact() {
        let a = LazyExact::from_f64(1.0 / 3.0) * LazyExact::from_i32(3);
        let one = LazyExact::one();
        assert!(a < one);
        assert_ne!(a, one);
        assert_eq!(one.compare(&LazyExact::from_i32(1)), Comparison::Equal);
    }
}
