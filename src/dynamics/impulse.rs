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

use crate::cosmic::{Geoid, Orbit};
use crate::linalg::Vector3;

/// Builds the orthonormal radial / transverse / out-of-plane frame attached to
/// an orbiting body, from its ECI position and velocity.
///
/// Returns `(R̂, T̂, Ô)` where `R̂` points radially outward, `Ô` along the
/// orbit normal, and `T̂ = Ô × R̂` completes the in-plane, prograde-ish
/// direction.
pub fn rto_frame(radius: &Vector3<f64>, velocity: &Vector3<f64>) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
    let r_hat = radius / radius.norm();
    let o_hat = r_hat.cross(velocity).normalize();
    let t_hat = o_hat.cross(&r_hat);
    (r_hat, t_hat, o_hat)
}

/// Applies a finite ΔV to the provided element state, as if an impulsive
/// maneuver of magnitude `delta_v` (m/s) were executed along the **unit** ECI
/// `direction`, via stepped integration of the Gaussian variational equations.
///
/// The thrust direction is projected onto the RTO frame of `(radius,
/// velocity)` once; the element rates are re-evaluated on each sub-step of at
/// most `max_dv`. The true anomaly is **not** recomputed inside the loop: the
/// caller must `resolve_ta` after this returns.
///
/// No allocation, and no failure path: an impulse that drives the orbit out
/// of the bound element domain leaves NaNs behind, which the caller's removal
/// check treats as a decayed object.
pub fn apply_impulse(
    orbit: &mut Orbit,
    radius: &Vector3<f64>,
    velocity: &Vector3<f64>,
    direction: &Vector3<f64>,
    delta_v: f64,
    max_dv: f64,
    geoid: &Geoid,
) {
    let (r_hat, t_hat, o_hat) = rto_frame(radius, velocity);
    let f_r = direction.dot(&r_hat);
    let f_t = direction.dot(&t_hat);
    let f_o = direction.dot(&o_hat);

    let mut remaining = delta_v;
    while remaining > 0.0 {
        let dv = remaining.min(max_dv);
        let n = orbit.mean_motion(geoid);
        let sqrt_a_gm = (orbit.sma / geoid.gm).sqrt();
        let one_m_ecc2 = 1.0 - orbit.ecc.powi(2);
        let sqrt_one_m_ecc2 = one_m_ecc2.sqrt();
        let (sin_ta, cos_ta) = orbit.ta.sin_cos();
        let (sin_aop_ta, cos_aop_ta) = (orbit.aop + orbit.ta).sin_cos();
        // p / r expressed through the true anomaly
        let p_on_r = 1.0 + orbit.ecc * cos_ta;

        let delta_sma = (2.0 * orbit.sma / sqrt_one_m_ecc2)
            * sqrt_a_gm
            * (orbit.ecc * sin_ta * f_r + p_on_r * f_t)
            * dv;
        let delta_ecc = sqrt_one_m_ecc2
            * sqrt_a_gm
            * (sin_ta * f_r
                + ((orbit.ecc + 2.0 * cos_ta + orbit.ecc * cos_ta.powi(2)) / p_on_r) * f_t)
            * dv;
        let delta_inc = sqrt_one_m_ecc2 * sqrt_a_gm * cos_aop_ta / p_on_r * f_o * dv;
        let delta_raan =
            sqrt_one_m_ecc2 * sqrt_a_gm * sin_aop_ta / (p_on_r * orbit.inc.sin()) * f_o * dv;
        let delta_aop = sqrt_one_m_ecc2 * sqrt_a_gm / orbit.ecc
            * (-cos_ta * f_r + ((2.0 + orbit.ecc * cos_ta) / p_on_r) * sin_ta * f_t)
            * dv
            - orbit.inc.cos() * delta_raan;
        let delta_ma = one_m_ecc2 / (n * orbit.sma * orbit.ecc)
            * ((cos_ta - 2.0 * orbit.ecc / p_on_r) * f_r
                - ((2.0 + orbit.ecc * cos_ta) / p_on_r) * sin_ta * f_t)
            * dv;

        orbit.sma += delta_sma;
        orbit.ecc += delta_ecc;
        orbit.inc += delta_inc;
        orbit.raan += delta_raan;
        orbit.aop += delta_aop;
        orbit.ma += delta_ma;

        // NOTE: fixed-grid decrement; the min above keeps the delivered total exact.
        remaining -= max_dv;
    }
}
