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

use cgar_predicates::geometry::{Direction2, Line2, Point2};
use cgar_predicates::kernel::determinant::det2x2;
use cgar_predicates::kernel::filtered_kernel::{
    cmp_dist_to_point_f64, orientation_f64, side_of_bounded_circle_f64, side_of_oriented_circle_f64,
};
use cgar_predicates::kernel::{
    BigRationalKernel, BoundedSide, Comparison, FilteredKernel, Kernel2, Orientation, OrientedSide,
};
use cgar_predicates::numeric::cgar_rational::CgarRational;
use cgar_predicates::numeric::lazy_exact::{FilterStats, LazyExact};
use cgar_predicates::numeric::scalar::Scalar;
use cgar_predicates::operations::Zero;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rug::Rational;

/// `|a - b|²` straight from the input doubles, without the kernel.
fn squared_distance(a: [f64; 2], b: [f64; 2]) -> Rational {
    let dx = Rational::from_f64(a[0]).unwrap() - Rational::from_f64(b[0]).unwrap();
    let dy = Rational::from_f64(a[1]).unwrap() - Rational::from_f64(b[1]).unwrap();
    dx.clone() * &dx + dy.clone() * &dy
}

fn exact(p: [f64; 2]) -> Point2<CgarRational> {
    Point2::new(CgarRational::from(p[0]), CgarRational::from(p[1]))
}

fn lazy(p: [f64; 2]) -> Point2<LazyExact> {
    Point2::new(p[0], p[1])
}

/// Points near the line through two random anchors, pushed off it by at
/// most `noise`. Most land within a few ulps of collinear.
fn near_collinear(rng: &mut StdRng, noise: f64) -> [[f64; 2]; 3] {
    let p = [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)];
    let q = [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)];
    let t: f64 = rng.random_range(-2.0..3.0);
    let r = [
        p[0] + t * (q[0] - p[0]) + rng.random_range(-noise..=noise),
        p[1] + t * (q[1] - p[1]) + rng.random_range(-noise..=noise),
    ];
    [p, q, r]
}

/// Four points near a common random circle.
fn near_cocircular(rng: &mut StdRng, noise: f64) -> [[f64; 2]; 4] {
    let c = [rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)];
    let radius: f64 = rng.random_range(0.5..5.0);
    std::array::from_fn(|_| {
        let a: f64 = rng.random_range(0.0..std::f64::consts::TAU);
        let rr = radius + rng.random_range(-noise..=noise);
        [c[0] + rr * a.cos(), c[1] + rr * a.sin()]
    })
}

#[test]
fn filtered_orientation_matches_exact_on_near_degenerate_corpus() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0001);
    let mut collinear = 0;
    for i in 0..2000 {
        let noise = if i % 2 == 0 { 0.0 } else { 1e-9 };
        let [p, q, r] = near_collinear(&mut rng, noise);
        let expected = BigRationalKernel::orientation(&exact(p), &exact(q), &exact(r));
        assert_eq!(orientation_f64(p, q, r), expected, "inputs {p:?} {q:?} {r:?}");
        if expected == Orientation::Collinear {
            collinear += 1;
        }
    }
    // sanity: the corpus is not trivially separated
    assert!(collinear < 2000);
}

#[test]
fn filtered_incircle_matches_exact_on_near_degenerate_corpus() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0002);
    for i in 0..1000 {
        let noise = if i % 2 == 0 { 0.0 } else { 1e-9 };
        let [p, q, r, t] = near_cocircular(&mut rng, noise);
        let (ep, eq, er, et) = (exact(p), exact(q), exact(r), exact(t));
        assert_eq!(
            side_of_oriented_circle_f64(p, q, r, t),
            BigRationalKernel::side_of_oriented_circle(&ep, &eq, &er, &et),
            "inputs {p:?} {q:?} {r:?} {t:?}"
        );
        assert_eq!(
            side_of_bounded_circle_f64(p, q, r, t),
            BigRationalKernel::side_of_bounded_circle(&ep, &eq, &er, &et)
        );
    }
}

#[test]
fn filtered_distance_comparison_matches_exact() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0003);
    for _ in 0..1000 {
        let p = [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)];
        let q = [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)];
        // mirror q through p and nudge by a few ulps, or not at all
        let nudge = f64::EPSILON * rng.random_range(-4..=4) as f64;
        let r = [2.0 * p[0] - q[0] + nudge, 2.0 * p[1] - q[1]];
        let expected = Comparison::from(squared_distance(p, q).cmp(&squared_distance(p, r)));
        assert_eq!(cmp_dist_to_point_f64(p, q, r), expected, "inputs {p:?} {q:?} {r:?}");
    }
}

#[test]
fn certified_enclosures_never_contradict_exact_sign() {
    let mut rng = StdRng::seed_from_u64(0x5eed_0004);
    let mut certified = 0;
    for i in 0..2000 {
        let noise = if i % 4 == 0 { 0.0 } else { 1e-12 };
        let [p, q, r] = near_collinear(&mut rng, noise);
        let (p, q, r) = (lazy(p), lazy(q), lazy(r));
        let det = det2x2(
            &(&p.x - &r.x),
            &(&p.y - &r.y),
            &(&q.x - &r.x),
            &(&q.y - &r.y),
        );
        if let Some(s) = det.approx().sign_if_certain() {
            certified += 1;
            assert_eq!(s, det.exact().sign());
        }
    }
    assert!(certified > 0);
}

#[test]
fn shifted_diagonal_points_are_exactly_collinear() {
    // p, q, r on y = x, with q one ulp above 0.5; naive doubles get
    // this wrong for many offsets
    let p = [0.5, 0.5];
    let r = [12.0, 12.0];
    let mut x: f64 = 0.5;
    for _ in 0..64 {
        x = f64::from_bits(x.to_bits() + 1);
        assert_eq!(orientation_f64(p, [x, x], r), Orientation::Collinear);
        assert_eq!(
            orientation_f64(p, [x, 0.5], r),
            Orientation::CounterClockwise
        );
    }
}

#[test]
fn escalation_happens_only_on_hard_inputs() {
    FilterStats::reset();
    let mut rng = StdRng::seed_from_u64(0x5eed_0005);
    for _ in 0..500 {
        let p = [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)];
        let q = [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)];
        let r = [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)];
        orientation_f64(p, q, r);
    }
    let easy = FilterStats::current();
    assert_eq!(easy.certified, 500);
    assert_eq!(easy.escalated, 0);

    FilterStats::reset();
    // exactly collinear but with inexact intermediate products
    let p = [0.1, 0.1];
    let q = [0.3, 0.3];
    let r = [0.7, 0.7];
    assert_eq!(orientation_f64(p, q, r), Orientation::Collinear);
    assert_eq!(FilterStats::current().escalated, 1);
}

#[test]
fn exact_kernel_accepts_rational_coordinates() {
    // circle through (0,0), (1,0), (0,1) has center (1/2, 1/2)
    let p = Point2::<CgarRational>::new(0, 0);
    let q = Point2::<CgarRational>::new(1, 0);
    let r = Point2::<CgarRational>::new(0, 1);
    let t = Point2::new(CgarRational::from_num_den(1, 1), CgarRational::from_num_den(1, 1));
    assert_eq!(
        BigRationalKernel::side_of_oriented_circle(&p, &q, &r, &t),
        OrientedSide::OnOrientedBoundary
    );

    let third = Point2::new(CgarRational::from_num_den(1, 3), CgarRational::from_num_den(1, 3));
    let two_thirds = Point2::new(CgarRational::from_num_den(2, 3), CgarRational::from_num_den(2, 3));
    assert_eq!(
        BigRationalKernel::orientation(&p, &third, &two_thirds),
        Orientation::Collinear
    );

    // the same configuration through the filtered kernel
    let lp: Point2<LazyExact> = p.convert();
    let lthird: Point2<LazyExact> = third.convert();
    let ltwo: Point2<LazyExact> = two_thirds.convert();
    assert_eq!(
        FilteredKernel::orientation(&lp, &lthird, &ltwo),
        Orientation::Collinear
    );
    assert_eq!(
        FilteredKernel::side_of_bounded_circle(&lp, &q.convert(), &r.convert(), &t.convert()),
        BoundedSide::OnBoundary
    );
    assert_eq!(
        FilteredKernel::cmp_dist_to_point(&lp, &q.convert(), &r.convert()),
        Comparison::Equal
    );
}

fn random_point(rng: &mut StdRng) -> [f64; 2] {
    [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)]
}

fn jitter(rng: &mut StdRng, p: [f64; 2], noise: f64) -> [f64; 2] {
    [
        p[0] + rng.random_range(-noise..=noise),
        p[1] + rng.random_range(-noise..=noise),
    ]
}

/// The same line through `a` and `b` in both number types.
fn line_through(a: [f64; 2], b: [f64; 2]) -> (Line2<LazyExact>, Line2<CgarRational>) {
    (
        Line2::through(&lazy(a), &lazy(b)),
        Line2::through(&exact(a), &exact(b)),
    )
}

/// Intersection of two exact lines rounded to doubles, or `None` when they
/// are parallel.
fn meet(l1: &Line2<CgarRational>, l2: &Line2<CgarRational>) -> Option<[f64; 2]> {
    let den = det2x2(&l1.a, &l1.b, &l2.a, &l2.b);
    if den.is_zero() {
        return None;
    }
    let xnum = det2x2(&l1.b, &l1.c, &l2.b, &l2.c);
    let ynum = det2x2(&l1.c, &l1.a, &l2.c, &l2.a);
    let x = Rational::from(&xnum.0 / &den.0);
    let y = Rational::from(&ynum.0 / &den.0);
    Some([x.to_f64(), y.to_f64()])
}

#[test]
fn filtered_line_predicates_match_exact_near_intersections() {
    FilterStats::reset();
    let mut rng = StdRng::seed_from_u64(0x5eed_0006);
    let mut checked = 0;
    for i in 0..600 {
        let noise = [0.0, 1e-12, 1e-9][i % 3];
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);
        // every fourth pair is nearly parallel: l2 runs close to l1
        let (c, d) = if i % 4 == 0 {
            let t: f64 = rng.random_range(-2.0..3.0);
            let u: f64 = rng.random_range(-2.0..3.0);
            let on = |s: f64| [a[0] + s * (b[0] - a[0]), a[1] + s * (b[1] - a[1])];
            (jitter(&mut rng, on(t), 1e-6), jitter(&mut rng, on(u), 1e-6))
        } else {
            (random_point(&mut rng), random_point(&mut rng))
        };
        let (f1, e1) = line_through(a, b);
        let (f2, e2) = line_through(c, d);
        let Some(ip) = meet(&e1, &e2) else { continue };

        // a query abscissa within `noise` of the intersection
        let px = ip[0] + rng.random_range(-noise..=noise);
        let (fx, ex) = (LazyExact::from_f64(px), CgarRational::from(px));
        assert_eq!(
            FilteredKernel::compare_x_at_intersection(&fx, &f1, &f2),
            BigRationalKernel::compare_x_at_intersection(&ex, &e1, &e2),
            "px {px:e} against {a:?}{b:?} x {c:?}{d:?}"
        );

        // a second pair of lines crossing close to the first intersection
        let hub = jitter(&mut rng, ip, noise);
        let (g1, h1) = line_through(hub, random_point(&mut rng));
        let (g2, h2) = line_through(random_point(&mut rng), hub);
        if meet(&h1, &h2).is_none() {
            continue;
        }
        assert_eq!(
            FilteredKernel::compare_x_of_intersections(&f1, &f2, &g1, &g2),
            BigRationalKernel::compare_x_of_intersections(&e1, &e2, &h1, &h2)
        );

        if [&e1, &e2, &h1, &h2].iter().any(|l| l.b.is_zero()) {
            continue;
        }
        let near = jitter(&mut rng, ip, noise);
        assert_eq!(
            FilteredKernel::compare_y_at_x(&lazy(near), &f1),
            BigRationalKernel::compare_y_at_x(&exact(near), &e1)
        );
        assert_eq!(
            FilteredKernel::compare_y_at_x_of_lines(&fx, &f1, &f2),
            BigRationalKernel::compare_y_at_x_of_lines(&ex, &e1, &e2)
        );
        assert_eq!(
            FilteredKernel::compare_y_at_intersection(&f1, &f2, &g1),
            BigRationalKernel::compare_y_at_intersection(&e1, &e2, &h1)
        );
        assert_eq!(
            FilteredKernel::compare_y_at_intersection_of_lines(&f1, &f2, &g1, &g2),
            BigRationalKernel::compare_y_at_intersection_of_lines(&e1, &e2, &h1, &h2)
        );
        checked += 1;
    }
    assert!(checked > 300);
    // the corpus must reach both tiers
    let stats = FilterStats::current();
    assert!(stats.certified > 0);
    assert!(stats.escalated > 0);
}

#[test]
fn filtered_signed_distances_match_exact_near_ties() {
    FilterStats::reset();
    let mut rng = StdRng::seed_from_u64(0x5eed_0007);
    for i in 0..1000 {
        let noise = [0.0, 1e-12, 1e-9][i % 3];

        // q is p moved across d, so both sit at nearly the same distance
        let d = random_point(&mut rng);
        let p = random_point(&mut rng);
        let t: f64 = rng.random_range(-1.0..1.0);
        let q = jitter(&mut rng, [p[0] - t * d[1], p[1] + t * d[0]], noise);
        let fd = Direction2::<LazyExact>::new(d[0], d[1]);
        let ed = Direction2::<CgarRational>::new(
            CgarRational::from(d[0]),
            CgarRational::from(d[1]),
        );
        let expected = BigRationalKernel::cmp_signed_dist_to_direction(&ed, &exact(p), &exact(q));
        assert_eq!(
            FilteredKernel::cmp_signed_dist_to_direction(&fd, &lazy(p), &lazy(q)),
            expected,
            "direction {d:?}, points {p:?} {q:?}"
        );

        // s is r moved along p -> q, so both sit at nearly the same distance
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);
        let r = random_point(&mut rng);
        let u: f64 = rng.random_range(-2.0..2.0);
        let s = jitter(&mut rng, [r[0] + u * (b[0] - a[0]), r[1] + u * (b[1] - a[1])], noise);
        let expected =
            BigRationalKernel::cmp_signed_dist_to_line(&exact(a), &exact(b), &exact(r), &exact(s));
        assert_eq!(
            FilteredKernel::cmp_signed_dist_to_line(&lazy(a), &lazy(b), &lazy(r), &lazy(s)),
            expected,
            "line {a:?} -> {b:?}, points {r:?} {s:?}"
        );
    }
    assert!(FilterStats::current().escalated > 0);
}
