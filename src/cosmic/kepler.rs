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

use super::Geoid;
use crate::linalg::Vector3;
use crate::time::Epoch;
use crate::utils::between_0_tau;
use std::f64::consts::TAU;
use std::fmt;

/// Number of Newton iterations of the anomaly solver. Empirically sufficient
/// for the eccentricities of collision fragment catalogues (e < ~0.3); larger
/// eccentricities must be filtered upstream.
const KEPLER_NEWTON_ITERS: usize = 5;

/// Solves Kepler's equation `E - e sin E = M` by Newton iteration from `E = 0`
/// and returns the true anomaly in radians.
///
/// The mean anomaly is reduced modulo 2π before solving so that the fixed
/// iteration count holds for arbitrarily large mean anomalies.
///
/// For `e >= 1` the result is undefined: hyperbolic objects must be rejected
/// by the caller.
pub fn true_anomaly(ecc: f64, mean_anom: f64) -> f64 {
    let ma = between_0_tau(mean_anom);
    let mut ecc_anom = 0.0_f64;
    for _ in 0..KEPLER_NEWTON_ITERS {
        ecc_anom -= (ecc_anom - ecc * ecc_anom.sin() - ma) / (1.0 - ecc * ecc_anom.cos());
    }
    2.0 * (((1.0 + ecc) / (1.0 - ecc)).sqrt() * (ecc_anom / 2.0).tan()).atan()
}

/// Orbit defines an orbital state as Keplerian elements tagged with an epoch.
///
/// All lengths are in meters and all angles in radians. The cheap secular
/// model stores elements directly (contrary to a Cartesian-first design, the
/// per-epoch propagation is then two multiply-adds per angle), and converts to
/// Cartesian coordinates on demand.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orbit {
    /// Semi-major axis in m
    pub sma: f64,
    /// Eccentricity (dimensionless), 0 <= ecc < 1 for a bound orbit
    pub ecc: f64,
    /// Inclination in rad
    pub inc: f64,
    /// Right ascension of the ascending node in rad
    pub raan: f64,
    /// Argument of periapsis in rad
    pub aop: f64,
    /// Mean anomaly in rad
    pub ma: f64,
    /// True anomaly in rad; always the Kepler solution of `(ecc, ma)`.
    /// Mutating `ecc` or `ma` requires a `resolve_ta` before the next use.
    pub ta: f64,
    /// Epoch at which these elements are osculating
    pub epoch: Epoch,
}

impl Orbit {
    /// Creates a new Orbit from its Keplerian orbital elements.
    ///
    /// **Units:** m, none, rad, rad, rad, rad
    ///
    /// The true anomaly is resolved from `(ecc, ma)` on construction.
    pub fn keplerian(sma: f64, ecc: f64, inc: f64, raan: f64, aop: f64, ma: f64, epoch: Epoch) -> Self {
        if ecc < 0.0 {
            warn!("eccentricity is negative ({ecc}): expect math errors downstream");
        } else if ecc >= 1.0 {
            warn!("orbit is not bound (ecc = {ecc}): the anomaly solver is undefined here");
        }
        let mut orbit = Self {
            sma,
            ecc,
            inc,
            raan,
            aop,
            ma,
            ta: 0.0,
            epoch,
        };
        orbit.resolve_ta();
        orbit
    }

    /// Re-solves the true anomaly from the current `(ecc, ma)` pair.
    pub fn resolve_ta(&mut self) {
        self.ta = true_anomaly(self.ecc, self.ma);
    }

    /// Returns the mean motion `n = sqrt(mu / a^3)` in rad/s.
    pub fn mean_motion(&self, geoid: &Geoid) -> f64 {
        (geoid.gm / self.sma.powi(3)).sqrt()
    }

    /// Returns the orbital period in seconds.
    pub fn period(&self, geoid: &Geoid) -> f64 {
        TAU / self.mean_motion(geoid)
    }

    /// Returns the radius of periapsis `a (1 - e)` in m.
    pub fn periapsis_radius(&self) -> f64 {
        self.sma * (1.0 - self.ecc)
    }

    /// Returns the radius of apoapsis `a (1 + e)` in m.
    pub fn apoapsis_radius(&self) -> f64 {
        self.sma * (1.0 + self.ecc)
    }

    /// Returns the periapsis altitude above the geoid equatorial radius, in m.
    pub fn periapsis_altitude(&self, geoid: &Geoid) -> f64 {
        self.periapsis_radius() - geoid.radius
    }

    /// Returns the apoapsis altitude above the geoid equatorial radius, in m.
    pub fn apoapsis_altitude(&self, geoid: &Geoid) -> f64 {
        self.apoapsis_radius() - geoid.radius
    }

    /// Returns whether this orbit is elliptical with a positive semi-major axis.
    ///
    /// Written so that a NaN eccentricity (driven there by an impulse) reports
    /// not bound.
    pub fn is_bound(&self) -> bool {
        self.ecc >= 0.0 && self.ecc < 1.0 && self.sma > 0.0
    }

    /// Converts this element state to ECI position and velocity vectors, in m and m/s.
    ///
    /// Standard perifocal-to-inertial transform with `p = a (1 - e^2)`,
    /// `r = p / (1 + e cos ν)` and `sqrt(mu / p)` velocity scaling. Algorithm
    /// from GMAT's `StateConversionUtil::ComputeKeplToCart`. Stack vectors
    /// only: no allocation.
    pub fn to_cartesian(&self, geoid: &Geoid) -> (Vector3<f64>, Vector3<f64>) {
        let p = self.sma * (1.0 - self.ecc.powi(2));
        let radius = p / (1.0 + self.ecc * self.ta.cos());
        let (sin_aop_ta, cos_aop_ta) = (self.aop + self.ta).sin_cos();
        let (sin_inc, cos_inc) = self.inc.sin_cos();
        let (sin_raan, cos_raan) = self.raan.sin_cos();
        let (sin_aop, cos_aop) = self.aop.sin_cos();
        let x = radius * (cos_aop_ta * cos_raan - cos_inc * sin_aop_ta * sin_raan);
        let y = radius * (cos_aop_ta * sin_raan + cos_inc * sin_aop_ta * cos_raan);
        let z = radius * sin_aop_ta * sin_inc;
        let sqrt_gm_p = (geoid.gm / p).sqrt();
        let cos_ta_ecc = self.ta.cos() + self.ecc;
        let sin_ta = self.ta.sin();
        let vx = sqrt_gm_p * cos_ta_ecc * (-sin_aop * cos_raan - cos_inc * sin_raan * cos_aop)
            - sqrt_gm_p * sin_ta * (cos_aop * cos_raan - cos_inc * sin_raan * sin_aop);
        let vy = sqrt_gm_p * cos_ta_ecc * (-sin_aop * sin_raan + cos_inc * cos_raan * cos_aop)
            - sqrt_gm_p * sin_ta * (cos_aop * sin_raan + cos_inc * cos_raan * sin_aop);
        let vz = sqrt_gm_p * (cos_ta_ecc * sin_inc * cos_aop - sin_ta * sin_inc * sin_aop);
        (Vector3::new(x, y, z), Vector3::new(vx, vy, vz))
    }

    /// Propagates these elements to the target epoch with the J2 secular model,
    /// in place. Works for negative time offsets as well.
    ///
    /// Secular-only: `a`, `e`, `i` are held constant while the node regresses,
    /// the periapsis precesses and the mean anomaly advances at the mean
    /// motion. Short-periodic terms are deliberately omitted.
    pub fn propagate_to(&mut self, target: Epoch, geoid: &Geoid) {
        let dt = (target - self.epoch).to_seconds();
        let n = self.mean_motion(geoid);
        let sec = n * geoid.radius.powi(2) * geoid.j2
            / (self.sma.powi(2) * (1.0 - self.ecc.powi(2)).powi(2));
        self.raan -= 1.5 * sec * self.inc.cos() * dt;
        self.aop += 0.75 * sec * (4.0 - 5.0 * self.inc.sin().powi(2)) * dt;
        self.ma = between_0_tau(self.ma + n * dt);
        self.epoch = target;
        self.resolve_ta();
    }

    /// Returns a copy of these elements propagated to the target epoch.
    ///
    /// Used by the window solver to evaluate candidate times from a cached
    /// reference state without error accumulation.
    pub fn at(&self, target: Epoch, geoid: &Geoid) -> Self {
        let mut copy = *self;
        copy.propagate_to(target, geoid);
        copy
    }
}

impl fmt::Display for Orbit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}] sma {:.3} km  ecc {:.6}  inc {:.4} deg  raan {:.4} deg  aop {:.4} deg  ma {:.4} deg",
            self.epoch,
            self.sma / 1e3,
            self.ecc,
            self.inc.to_degrees(),
            self.raan.to_degrees(),
            self.aop.to_degrees(),
            self.ma.to_degrees()
        )
    }
}

#[cfg(test)]
mod ut_kepler {
    use super::{true_anomaly, Orbit};
    use crate::cosmic::Geoid;
    use crate::time::Epoch;

    #[test]
    fn anomaly_zero_ecc_is_identity() {
        // For a circular orbit the true and mean anomalies coincide (up to branch).
        for ma in [0.0, 0.5, 2.0, 4.25] {
            let ta = true_anomaly(0.0, ma);
            let diff = (ta - ma).rem_euclid(std::f64::consts::TAU);
            assert!(diff < 1e-10 || (std::f64::consts::TAU - diff) < 1e-10);
        }
    }

    #[test]
    fn apsis_radii() {
        let epoch = Epoch::from_gregorian_tai_at_midnight(2025, 1, 1);
        let geoid = Geoid::earth();
        let orbit = Orbit::keplerian(7.0e6, 0.01, 1.2, 0.3, 0.1, 0.0, epoch);
        assert!((orbit.periapsis_radius() - 7.0e6 * 0.99).abs() < 1e-6);
        assert!((orbit.apoapsis_radius() - 7.0e6 * 1.01).abs() < 1e-6);
        assert!(orbit.periapsis_altitude(&geoid) < orbit.apoapsis_altitude(&geoid));
        assert!(orbit.is_bound());
    }
}
