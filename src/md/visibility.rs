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

use crate::cosmic::Geoid;
use crate::linalg::Vector3;
use crate::utils::{cos_angle, rodrigues};
use std::fmt;

/// The laser engagement geometry: the three conditions under which a pulse
/// can couple with a fragment, and the fixed boresight tilt of the optics.
///
/// All three tests operate on ECI position/velocity pairs. With `p⃗ = r⃗_sc −
/// r⃗_d`:
///
/// - **range**: `|p⃗| < range_max`;
/// - **incidence**: the angle between the fragment velocity and `p⃗` is under
///   `incidence_max` (near head-on illumination, the retrograde coupling
///   condition);
/// - **field of view**: the angle between the boresight and the spacecraft to
///   fragment direction is under half the cone angle.
///
/// The boresight is the anti-velocity direction pitched down by the offset
/// angle `acos((R_e + h_col) / (R_e + h_col + h_off))`, i.e. aimed at the
/// shell the debris cloud lives on.
#[derive(Copy, Clone, Debug)]
pub struct Visibility {
    /// Maximum slant range in m
    pub range_max: f64,
    /// Maximum incidence angle in rad
    pub incidence_max: f64,
    /// Half of the full field-of-view cone angle, in rad
    pub half_fov: f64,
    /// Fixed pitch of the boresight below the anti-velocity direction, in rad
    pub boresight_pitch: f64,
}

impl Visibility {
    /// Builds the engagement geometry from the configured laser limits and the
    /// collision/platform altitudes.
    pub fn new(
        range_max: f64,
        incidence_max: f64,
        fov: f64,
        geoid: &Geoid,
        h_collision: f64,
        h_offset: f64,
    ) -> Self {
        let shell = geoid.radius + h_collision;
        Self {
            range_max,
            incidence_max,
            half_fov: fov / 2.0,
            boresight_pitch: (shell / (shell + h_offset)).acos(),
        }
    }

    /// Returns the laser pointing direction for the provided platform state:
    /// `−v̂_sc` rotated by the boresight pitch about `r̂_sc × −v̂_sc`
    /// (Rodrigues' formula).
    pub fn boresight(&self, r_sc: &Vector3<f64>, v_sc: &Vector3<f64>) -> Vector3<f64> {
        let anti_vel = -v_sc / v_sc.norm();
        let axis = r_sc.cross(&anti_vel).normalize();
        rodrigues(&anti_vel, &axis, self.boresight_pitch)
    }

    /// Composite predicate: all three geometric conditions at once.
    ///
    /// Branch-free on purpose — the campaign driver evaluates this for every
    /// fragment of the population inside the data-parallel phase.
    pub fn in_view(
        &self,
        boresight: &Vector3<f64>,
        r_sc: &Vector3<f64>,
        r_d: &Vector3<f64>,
        v_d: &Vector3<f64>,
    ) -> bool {
        let p = r_sc - r_d;
        let range_ok = p.norm() < self.range_max;
        let incidence_ok = cos_angle(v_d, &p).acos() < self.incidence_max;
        let fov_ok = cos_angle(boresight, &(-p)).acos() < self.half_fov;
        range_ok && incidence_ok && fov_ok
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Visibility {{ range < {:.1} km, incidence < {:.2} deg, FoV {:.2} deg, pitch {:.3} deg }}",
            self.range_max / 1e3,
            self.incidence_max.to_degrees(),
            (2.0 * self.half_fov).to_degrees(),
            self.boresight_pitch.to_degrees()
        )
    }
}

#[cfg(test)]
mod ut_visibility {
    use super::Visibility;
    use crate::cosmic::Geoid;
    use crate::linalg::Vector3;

    /// With no altitude offset the boresight is exactly anti-velocity.
    #[test]
    fn boresight_no_offset() {
        let geoid = Geoid::earth();
        let vis = Visibility::new(1.0e5, 0.5, 0.3, &geoid, 7.0e5, 0.0);
        let r = Vector3::new(geoid.radius + 7.0e5, 0.0, 0.0);
        let v = Vector3::new(0.0, 7.5e3, 0.0);
        let bore = vis.boresight(&r, &v);
        assert!((bore - Vector3::new(0.0, -1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn boresight_pitches_toward_nadir() {
        let geoid = Geoid::earth();
        let vis = Visibility::new(1.0e5, 0.5, 0.3, &geoid, 7.0e5, 1.0e5);
        let r = Vector3::new(geoid.radius + 8.0e5, 0.0, 0.0);
        let v = Vector3::new(0.0, 7.45e3, 0.0);
        let bore = vis.boresight(&r, &v);
        // Unit vector, tilted below the local horizontal by the pitch angle
        assert!((bore.norm() - 1.0).abs() < 1e-12);
        let down = bore.dot(&(-r / r.norm()));
        assert!((down - vis.boresight_pitch.sin()).abs() < 1e-12);
    }
}
