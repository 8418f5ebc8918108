/*
    Orion, laser-ablation debris removal simulation
    Copyright (C) 2025 Orion contributors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

//! Resolves the boundaries of a visibility window by bisection.
//!
//! The driver only samples the composite predicate once per epoch, so when a
//! fragment shows up in view it needs the actual entry and exit times to
//! decide whether the pass is long enough for a scan plus an ablation train.
//! Both boundaries are found by re-propagating *from the cached reference
//! states* to every candidate time (never incrementally), which keeps the
//! search free of accumulation error.

use super::Visibility;
use crate::cosmic::{Geoid, Orbit};
use crate::time::{Duration, Epoch, Unit};

/// Evaluates the composite visibility predicate at an arbitrary time, from
/// reference element states. Owns its temporary copies; the references are
/// left untouched.
pub fn in_view_at(
    sc: &Orbit,
    fragment: &Orbit,
    t: Epoch,
    vis: &Visibility,
    geoid: &Geoid,
) -> bool {
    let sc_t = sc.at(t, geoid);
    let frag_t = fragment.at(t, geoid);
    let (r_sc, v_sc) = sc_t.to_cartesian(geoid);
    let (r_d, v_d) = frag_t.to_cartesian(geoid);
    let boresight = vis.boresight(&r_sc, &v_sc);
    vis.in_view(&boresight, &r_sc, &r_d, &v_d)
}

/// Finds the time within `[t_left, t_right]` at which the composite predicate
/// transitions between the values it takes at the two endpoints, to within
/// `tol`. One of the endpoints **must** be `t_ref`, the epoch at which the
/// caller already knows the predicate value.
///
/// If the predicate agrees at both endpoints, the **outer** endpoint (the one
/// that is not `t_ref`) is returned: a window shorter than the interval
/// width, if present at all, is discarded on conservative grounds.
pub fn crossing(
    sc: &Orbit,
    fragment: &Orbit,
    t_left: Epoch,
    t_right: Epoch,
    t_ref: Epoch,
    vis: &Visibility,
    geoid: &Geoid,
    tol: Duration,
) -> Epoch {
    debug_assert!(t_left == t_ref || t_right == t_ref);

    let left_value = in_view_at(sc, fragment, t_left, vis, geoid);
    let right_value = in_view_at(sc, fragment, t_right, vis, geoid);

    if left_value == right_value {
        return if t_left == t_ref { t_right } else { t_left };
    }

    let mut left = t_left;
    let mut right = t_right;
    let mut midpoint = left + (right - left).to_seconds() * 0.5 * Unit::Second;
    while right - left > tol {
        midpoint = left + (right - left).to_seconds() * 0.5 * Unit::Second;
        if in_view_at(sc, fragment, midpoint, vis, geoid) == left_value {
            left = midpoint;
        } else {
            right = midpoint;
        }
    }
    midpoint
}
