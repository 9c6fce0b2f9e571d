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

use cgar_predicates::geometry::Point2;
use cgar_predicates::kernel::{
    BigRationalKernel, Comparison, FilteredKernel, Kernel2, Orientation, OrientedSide,
};
use cgar_predicates::numeric::cgar_rational::CgarRational;
use cgar_predicates::numeric::lazy_exact::LazyExact;
use proptest::prelude::*;

type P = Point2<LazyExact>;

fn coord() -> impl Strategy<Value = f64> {
    prop_oneof![
        // small integers hit exact degeneracies often
        (-4i32..=4).prop_map(f64::from),
        -1.0e3..1.0e3f64,
    ]
}

fn pt() -> impl Strategy<Value = (f64, f64)> {
    (coord(), coord())
}

fn lazy((x, y): (f64, f64)) -> P {
    Point2::new(x, y)
}

fn exact((x, y): (f64, f64)) -> Point2<CgarRational> {
    Point2::new(CgarRational::from(x), CgarRational::from(y))
}

proptest! {
    #[test]
    fn orientation_is_invariant_under_cyclic_shift(a in pt(), b in pt(), c in pt()) {
        let (p, q, r) = (lazy(a), lazy(b), lazy(c));
        let o = FilteredKernel::orientation(&p, &q, &r);
        prop_assert_eq!(o, FilteredKernel::orientation(&q, &r, &p));
        prop_assert_eq!(o, FilteredKernel::orientation(&r, &p, &q));
    }

    #[test]
    fn orientation_flips_under_transposition(a in pt(), b in pt(), c in pt()) {
        let (p, q, r) = (lazy(a), lazy(b), lazy(c));
        let o = FilteredKernel::orientation(&p, &q, &r);
        prop_assert_eq!(FilteredKernel::orientation(&q, &p, &r), -o);
        prop_assert_eq!(FilteredKernel::orientation(&p, &r, &q), -o);
    }

    #[test]
    fn repeated_point_is_collinear(a in pt(), b in pt()) {
        let (p, q) = (lazy(a), lazy(b));
        prop_assert_eq!(FilteredKernel::orientation(&p, &p, &q), Orientation::Collinear);
        prop_assert_eq!(FilteredKernel::orientation(&p, &q, &q), Orientation::Collinear);
    }

    #[test]
    fn bounded_side_is_oriented_side_times_orientation(
        a in pt(), b in pt(), c in pt(), d in pt()
    ) {
        let (p, q, r, t) = (lazy(a), lazy(b), lazy(c), lazy(d));
        let oriented = FilteredKernel::side_of_oriented_circle(&p, &q, &r, &t);
        let o = FilteredKernel::orientation(&p, &q, &r);
        prop_assert_eq!(FilteredKernel::side_of_bounded_circle(&p, &q, &r, &t), oriented * o);
    }

    #[test]
    fn bounded_side_ignores_vertex_order(a in pt(), b in pt(), c in pt(), d in pt()) {
        let (p, q, r, t) = (lazy(a), lazy(b), lazy(c), lazy(d));
        prop_assume!(FilteredKernel::orientation(&p, &q, &r) != Orientation::Collinear);
        let side = FilteredKernel::side_of_bounded_circle(&p, &q, &r, &t);
        prop_assert_eq!(side, FilteredKernel::side_of_bounded_circle(&q, &r, &p, &t));
        prop_assert_eq!(side, FilteredKernel::side_of_bounded_circle(&q, &p, &r, &t));
        prop_assert_eq!(side, FilteredKernel::side_of_bounded_circle(&r, &q, &p, &t));
        prop_assert_eq!(side, FilteredKernel::side_of_bounded_circle(&r, &p, &q, &t));
        prop_assert_eq!(side, FilteredKernel::side_of_bounded_circle(&p, &r, &q, &t));
    }

    #[test]
    fn oriented_side_follows_permutation_parity(a in pt(), b in pt(), c in pt(), d in pt()) {
        let (p, q, r, t) = (lazy(a), lazy(b), lazy(c), lazy(d));
        let side = FilteredKernel::side_of_oriented_circle(&p, &q, &r, &t);
        prop_assert_eq!(side, FilteredKernel::side_of_oriented_circle(&r, &p, &q, &t));
        prop_assert_eq!(-side, FilteredKernel::side_of_oriented_circle(&q, &p, &r, &t));
        prop_assert_eq!(-side, FilteredKernel::side_of_oriented_circle(&p, &r, &q, &t));
    }

    #[test]
    fn defining_points_lie_on_their_circle(a in pt(), b in pt(), c in pt()) {
        let (p, q, r) = (lazy(a), lazy(b), lazy(c));
        for t in [&p, &q, &r] {
            prop_assert_eq!(
                FilteredKernel::side_of_oriented_circle(&p, &q, &r, t),
                OrientedSide::OnOrientedBoundary
            );
        }
    }

    #[test]
    fn cmp_dist_to_point_is_antisymmetric(a in pt(), b in pt(), c in pt()) {
        let (p, q, r) = (lazy(a), lazy(b), lazy(c));
        let c1 = FilteredKernel::cmp_dist_to_point(&p, &q, &r);
        prop_assert_eq!(FilteredKernel::cmp_dist_to_point(&p, &r, &q), c1.opposite());
        prop_assert_eq!(FilteredKernel::cmp_dist_to_point(&p, &q, &q), Comparison::Equal);
    }

    #[test]
    fn filtered_and_exact_kernels_agree(a in pt(), b in pt(), c in pt(), d in pt()) {
        let (p, q, r, t) = (lazy(a), lazy(b), lazy(c), lazy(d));
        let (ep, eq, er, et) = (exact(a), exact(b), exact(c), exact(d));
        prop_assert_eq!(
            FilteredKernel::orientation(&p, &q, &r),
            BigRationalKernel::orientation(&ep, &eq, &er)
        );
        prop_assert_eq!(
            FilteredKernel::side_of_oriented_circle(&p, &q, &r, &t),
            BigRationalKernel::side_of_oriented_circle(&ep, &eq, &er, &et)
        );
        prop_assert_eq!(
            FilteredKernel::cmp_dist_to_point(&p, &q, &r),
            BigRationalKernel::cmp_dist_to_point(&ep, &eq, &er)
        );
        prop_assert_eq!(
            FilteredKernel::compare_xy(&p, &q),
            BigRationalKernel::compare_xy(&ep, &eq)
        );
    }
}
