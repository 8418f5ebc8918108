extern crate orion;

use orion::cosmic::{Geoid, Orbit};
use orion::md::{window, Visibility};
use orion::time::{Epoch, Unit};

const H_COLLISION: f64 = 700.0e3;
const H_OFFSET: f64 = 50.0e3;

fn epoch() -> Epoch {
    Epoch::from_gregorian_tai_at_midnight(2025, 1, 1)
}

fn engagement_geometry(geoid: &Geoid) -> Visibility {
    // 300 km slant range, ~28.6 deg incidence, 0.5 rad full cone
    Visibility::new(300.0e3, 0.5, 0.5, geoid, H_COLLISION, H_OFFSET)
}

/// Platform on the offset shell, fragment on the collision shell trailing it
/// by `trail` radians of phase, co-planar equatorial. The fragment is below
/// and behind, closing in: the head-on illumination case.
fn coplanar_pair(geoid: &Geoid, trail: f64) -> (Orbit, Orbit) {
    let sc = Orbit::keplerian(
        geoid.radius + H_COLLISION + H_OFFSET,
        0.0,
        0.0,
        0.0,
        0.0,
        trail,
        epoch(),
    );
    let fragment = Orbit::keplerian(geoid.radius + H_COLLISION, 1e-3, 0.0, 0.0, 0.0, 0.0, epoch());
    (sc, fragment)
}

/// Moving the fragment radially away from an in-range geometry flips the
/// range condition exactly once.
#[test]
fn range_predicate_flips_once() {
    let geoid = Geoid::earth();
    let vis = engagement_geometry(&geoid);
    let (sc, fragment) = coplanar_pair(&geoid, 0.0311);
    let (r_sc, v_sc) = sc.to_cartesian(&geoid);
    let (r_d, v_d) = fragment.to_cartesian(&geoid);
    let boresight = vis.boresight(&r_sc, &v_sc);

    let mut flips = 0;
    let mut prev = vis.in_view(&boresight, &r_sc, &r_d, &v_d);
    assert!(prev, "the reference geometry must start in view");
    for step in 1..4000 {
        // Walk the fragment outward along the line of sight, leaving the
        // incidence and FoV angles untouched.
        let away = r_d + (r_d - r_sc) * (step as f64 * 1e-3);
        let now = vis.in_view(&boresight, &r_sc, &away, &v_d);
        if now != prev {
            flips += 1;
            prev = now;
        }
    }
    assert_eq!(flips, 1, "the range predicate must flip exactly once");
    assert!(!prev);
}

/// The composite predicate demands all three conditions at once.
#[test]
fn composite_needs_all_three() {
    let geoid = Geoid::earth();
    let vis = engagement_geometry(&geoid);
    let (sc, fragment) = coplanar_pair(&geoid, 0.0311);
    let (r_sc, v_sc) = sc.to_cartesian(&geoid);
    let (r_d, v_d) = fragment.to_cartesian(&geoid);
    let boresight = vis.boresight(&r_sc, &v_sc);

    assert!(vis.in_view(&boresight, &r_sc, &r_d, &v_d));
    // Reversing the fragment velocity breaks the incidence condition alone.
    assert!(!vis.in_view(&boresight, &r_sc, &r_d, &(-v_d)));
    // A trailing fragment *above* the platform shell still passes range and
    // incidence but sits outside the downward-pitched cone.
    let above = Orbit::keplerian(
        geoid.radius + H_COLLISION + H_OFFSET + 100.0e3,
        1e-3,
        0.0,
        0.0,
        0.0,
        0.0,
        epoch(),
    );
    let (r_a, v_a) = above.to_cartesian(&geoid);
    assert!((r_sc - r_a).norm() < vis.range_max);
    assert!(!vis.in_view(&boresight, &r_sc, &r_a, &v_a));
}

/// The window solver must pin the entry crossing to within the tolerance and
/// see opposite predicate values on either side of it.
#[test]
fn bisection_pins_the_crossing() {
    let geoid = Geoid::earth();
    let vis = engagement_geometry(&geoid);
    // Trail far enough that the fragment is out of range at first, closing
    // to an engagement over the next half hour.
    let sc = Orbit::keplerian(
        geoid.radius + H_COLLISION + H_OFFSET,
        0.0,
        0.0,
        0.0,
        0.0,
        0.12,
        epoch(),
    );
    let fragment = Orbit::keplerian(geoid.radius + H_COLLISION, 1e-3, 0.0, 0.0, 0.0, 0.0, epoch());

    // The lower orbit catches up: find an epoch where the pair is in view.
    let mut seen: Option<Epoch> = None;
    for minute in 0..240 {
        let t = epoch() + (minute as f64) * Unit::Minute;
        if window::in_view_at(&sc, &fragment, t, &vis, &geoid) {
            seen = Some(t);
            break;
        }
    }
    let t_ref = seen.expect("the trailing fragment never entered the window");
    assert!(
        !window::in_view_at(&sc, &fragment, t_ref - 30.0 * Unit::Minute, &vis, &geoid),
        "the bracket must start out of view"
    );

    let tol = 1e-3 * Unit::Second;
    let entry = window::crossing(
        &sc,
        &fragment,
        t_ref - 30.0 * Unit::Minute,
        t_ref,
        t_ref,
        &vis,
        &geoid,
        tol,
    );
    // Opposite predicate values by one tolerance on either side
    assert!(!window::in_view_at(&sc, &fragment, entry - tol, &vis, &geoid));
    assert!(window::in_view_at(&sc, &fragment, entry + tol, &vis, &geoid));
}

/// When the predicate agrees at both interval endpoints, the solver returns
/// the outer endpoint: any window shorter than the interval is discarded.
#[test]
fn bisection_agreement_returns_outer_endpoint() {
    let geoid = Geoid::earth();
    let vis = engagement_geometry(&geoid);
    let (sc, fragment) = coplanar_pair(&geoid, 0.0311);
    let t_ref = epoch();
    let tol = 1e-3 * Unit::Second;

    // In view at both t_ref and one second before it.
    let outer = t_ref - 1.0 * Unit::Second;
    assert!(window::in_view_at(&sc, &fragment, t_ref, &vis, &geoid));
    assert!(window::in_view_at(&sc, &fragment, outer, &vis, &geoid));
    let entry = window::crossing(&sc, &fragment, outer, t_ref, t_ref, &vis, &geoid, tol);
    assert_eq!(entry, outer);
}
