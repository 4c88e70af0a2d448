use super::*;
use std::cmp::Ordering;

fn p(x: i32, y: i32) -> KineticPoint {
    KineticPoint::new(x, y, 0, 0)
}

#[test]
fn point_ordering_y_then_x() {
    assert_eq!(p(5, 1).cmp_start(&p(0, 2)), Ordering::Less);
    assert_eq!(p(1, 3).cmp_start(&p(2, 3)), Ordering::Less);
    assert_eq!(p(2, 3).cmp_start(&p(2, 3)), Ordering::Equal);
    // Motion never participates in the ordering.
    assert_eq!(
        KineticPoint::new(2, 3, 7, 0).cmp_start(&KineticPoint::new(2, 3, -7, 0)),
        Ordering::Equal
    );
}

#[test]
fn coincidence_and_starts_equal() {
    let a = KineticPoint::new(1, 2, 3, 0);
    assert!(a.coincides(&KineticPoint::new(1, 2, 3, 0)));
    assert!(!a.coincides(&KineticPoint::new(1, 2, 4, 0)));
    assert!(a.starts_equal(&KineticPoint::new(1, 2, 4, 0)));
    assert!(!a.starts_equal(&KineticPoint::new(1, 3, 3, 0)));
}

#[test]
fn angle_sign_follows_orientation() {
    // At (0,0), (1,0) to (0,1) turns counterclockwise: positive determinant.
    let pivot = p(0, 0);
    let a = pivot.angle(&p(1, 0), &p(0, 1));
    assert!((a - 90.0).abs() < 1e-12);
    let b = pivot.angle(&p(0, 1), &p(1, 0));
    assert!((b + 90.0).abs() < 1e-12);
}

#[test]
fn sign_has_exact_zero() {
    assert_eq!(sign(0.0), 0.0);
    assert_eq!(sign(-0.0), 0.0);
    assert_eq!(sign(3.5), 1.0);
    assert_eq!(sign(-0.1), -1.0);
}

#[test]
fn line_parallel_identical_and_vertical() {
    let g1 = Line2::through(0, 0, 2, 2);
    let g2 = Line2::through(0, 1, 2, 3);
    assert!(g1.intersection(&g2).is_none());
    assert!(!g1.is_identical(&g2));

    // Same line from different sample points.
    let g3 = Line2::through(1, 1, 3, 3);
    assert!(g1.is_identical(&g3));
    assert!(g1.intersection(&g3).is_some());

    // Vertical sentinel resolves by substitution.
    let v = Line2::through(3, 0, 3, 9);
    let steep = Line2::through(0, 0, 1, 2);
    let cut = v.intersection(&steep).unwrap();
    assert!((cut.x - 3.0).abs() < 1e-12);
    assert!((cut.y - 6.0).abs() < 1e-12);
    let cut2 = steep.intersection(&v).unwrap();
    assert_eq!(cut, cut2);

    // Horizontal lines carry the infinite x-intercept exactly.
    let h1 = Line2::through(0, 5, 10, 5);
    let h2 = Line2::through(2, 5, 7, 5);
    assert!(h1.is_identical(&h2));
    assert_eq!(h1.x_icept, f64::INFINITY);
}

#[test]
fn segment_canonical_round_trip() {
    let a = KineticPoint::new(3, 5, 1, 0);
    let b = KineticPoint::new(1, 2, -4, 0);
    let s1 = Segment::new(a, b);
    let s2 = Segment::new(b, a);
    assert_eq!(s1, s2);
    assert_eq!(s1.start(), s2.start());
    assert_eq!(s1.len_at_start(), s2.len_at_start());
    // The start is the (y, x)-smaller endpoint.
    assert_eq!(s1.start().cmp_start(s1.end()), Ordering::Less);
}

#[test]
fn interior_crossing_detected() {
    let s1 = Segment::new(p(0, 0), p(10, 10));
    let s2 = Segment::new(p(0, 10), p(10, 0));
    assert!(s1.crosses(&s2));
    assert!(s2.crosses(&s1));
}

#[test]
fn shared_endpoint_only_touches() {
    let s1 = Segment::new(p(0, 0), p(5, 5));
    let s2 = Segment::new(p(0, 0), p(5, 1));
    assert!(!s1.crosses(&s2));
    assert!(!s2.crosses(&s1));
    // Velocity at the shared endpoint does not matter.
    let s3 = Segment::new(KineticPoint::new(0, 0, 9, 0), p(5, 1));
    assert!(!s1.crosses(&s3));
}

#[test]
fn t_junction_at_endpoint_rejected() {
    let base = Segment::new(p(0, 0), p(10, 0));
    let stem = Segment::new(p(5, 0), p(5, 8));
    assert!(!base.crosses(&stem));
    assert!(!stem.crosses(&base));
}

#[test]
fn vertical_crossing_uses_degenerate_span() {
    let v = Segment::new(p(5, 0), p(5, 10));
    let h = Segment::new(p(0, 5), p(10, 5));
    assert!(v.crosses(&h));
    assert!(h.crosses(&v));
}

#[test]
fn collinear_overlap_cases() {
    // Partial overlap on the line y = x.
    let s1 = Segment::new(p(0, 0), p(6, 6));
    let s2 = Segment::new(p(4, 4), p(10, 10));
    assert!(s1.crosses(&s2));
    assert!(s2.crosses(&s1));

    // Containment.
    let outer = Segment::new(p(0, 0), p(10, 10));
    let inner = Segment::new(p(4, 4), p(6, 6));
    assert!(outer.crosses(&inner));
    assert!(inner.crosses(&outer));

    // Disjoint collinear.
    let s3 = Segment::new(p(0, 0), p(2, 2));
    let s4 = Segment::new(p(4, 4), p(6, 6));
    assert!(!s3.crosses(&s4));

    // Collinear, touching in one endpoint.
    let s5 = Segment::new(p(0, 0), p(4, 4));
    let s6 = Segment::new(p(4, 4), p(8, 8));
    assert!(!s5.crosses(&s6));
}

#[test]
fn point_criterion_flags_side_flip() {
    let seg = Segment::new(p(0, 0), p(10, 2));
    // Carried across the support line between t=0 and t=1.
    assert!(seg.violates_point_criterion(&KineticPoint::new(2, 1, 100, 0)));
    // Stays on one side throughout.
    assert!(!seg.violates_point_criterion(&KineticPoint::new(2, 1, 0, 0)));
    assert!(!seg.violates_point_criterion(&KineticPoint::new(2, 1, 2, 0)));
}

#[test]
fn point_criterion_y_range_precondition() {
    let seg = Segment::new(p(0, 0), p(10, 2));
    // Outside the initial y-range of the endpoints: never a violation, even
    // with motion that would cross the line (dy=0 approximation).
    assert!(!seg.violates_point_criterion(&KineticPoint::new(2, 30, 0, -100)));
    assert!(!seg.violates_point_criterion(&KineticPoint::new(2, -5, 100, 0)));
}

#[test]
fn swept_area_static_is_zero() {
    let seg = Segment::new(p(0, 0), p(4, 3));
    assert_eq!(seg.swept_area(), 0.0);
}

#[test]
fn swept_area_one_pinned_endpoint_is_triangle() {
    // (0,0) moves to (2,0); (4,3) is pinned: triangle of area 3.
    let seg = Segment::new(KineticPoint::new(0, 0, 2, 0), p(4, 3));
    assert!((seg.swept_area() - 3.0).abs() < 1e-9);
    // Pinned start instead: (4,3) moves to (6,3), again area 3.
    let seg2 = Segment::new(p(0, 0), KineticPoint::new(4, 3, 2, 0));
    assert!((seg2.swept_area() - 3.0).abs() < 1e-9);
}

#[test]
fn swept_area_parallel_motion_is_parallelogram() {
    // Both endpoints shift right by 2 over a vertical extent of 3.
    let seg = Segment::new(
        KineticPoint::new(0, 0, 2, 0),
        KineticPoint::new(0, 3, 2, 0),
    );
    assert!((seg.swept_area() - 6.0).abs() < 1e-9);
}

#[test]
fn swept_area_opposite_motion_splits_at_crossing() {
    // The segment sweeps over its own support: two unit triangles.
    let seg = Segment::new(
        KineticPoint::new(0, 0, 2, 0),
        KineticPoint::new(0, 2, -2, 0),
    );
    assert!((seg.swept_area() - 2.0).abs() < 1e-9);
}

mod props {
    use super::*;
    use proptest::prelude::*;

    fn static_point() -> impl Strategy<Value = KineticPoint> {
        (-20i32..20, -20i32..20).prop_map(|(x, y)| KineticPoint::new(x, y, 0, 0))
    }

    fn moving_point() -> impl Strategy<Value = KineticPoint> {
        (-20i32..20, -20i32..20, -10i32..10)
            .prop_map(|(x, y, dx)| KineticPoint::new(x, y, dx, 0))
    }

    proptest! {
        #[test]
        fn crossing_is_symmetric(
            a in static_point(),
            b in static_point(),
            c in static_point(),
            d in static_point(),
        ) {
            let s1 = Segment::new(a, b);
            let s2 = Segment::new(c, d);
            prop_assert_eq!(s1.crosses(&s2), s2.crosses(&s1));
        }

        #[test]
        fn canonicalization_is_order_independent(a in moving_point(), b in moving_point()) {
            let s1 = Segment::new(a, b);
            let s2 = Segment::new(b, a);
            prop_assert_eq!(s1, s2);
            prop_assert_eq!(s1.len_at_start(), s2.len_at_start());
        }
    }
}
