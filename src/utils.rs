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

use crate::linalg::Vector3;
use std::f64::consts::TAU;

/// Returns the provided angle bounded between 0.0 and 2π radians
pub fn between_0_tau(angle: f64) -> f64 {
    let mut bounded = angle;
    while bounded > TAU {
        bounded -= TAU;
    }
    while bounded < 0.0 {
        bounded += TAU;
    }
    bounded
}

/// Rotates the vector `v` by `angle` radians about the unit vector `axis` (Rodrigues' formula).
///
/// The axis **must** be of unit norm: no normalization is performed here.
pub fn rodrigues(v: &Vector3<f64>, axis: &Vector3<f64>, angle: f64) -> Vector3<f64> {
    let (sin_a, cos_a) = angle.sin_cos();
    v * cos_a + axis.cross(v) * sin_a + axis * (axis.dot(v)) * (1.0 - cos_a)
}

/// Returns the cosine of the angle between both vectors, clamped to [-1, 1] so that
/// an `acos` of the result is always finite.
pub fn cos_angle(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    (a.dot(b) / (a.norm() * b.norm())).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod ut_utils {
    use super::{between_0_tau, rodrigues};
    use crate::linalg::Vector3;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn angle_bounding() {
        assert!((between_0_tau(3.0 * TAU + 0.25) - 0.25).abs() < 1e-12);
        assert!((between_0_tau(-PI) - PI).abs() < 1e-12);
    }

    #[test]
    fn rodrigues_quarter_turn() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);
        let y = rodrigues(&x, &z, FRAC_PI_2);
        assert!((y - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-14);
    }
}
