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

use super::{Geoid, Orbit};
use crate::linalg::Vector3;
use crate::time::Epoch;
use std::fmt;

/// The laser platform: a single spacecraft on a circular orbit a configured
/// offset above the collision shell, with its derived Cartesian state and the
/// epoch of its last laser pulse.
///
/// Invariant: the altitude at the semi-major axis is the collision altitude
/// plus the configured offset (enforced by the harness when seeding).
#[derive(Copy, Clone, Debug)]
pub struct Spacecraft {
    /// Osculating elements of the platform
    pub orbit: Orbit,
    /// ECI position in m, derived from `orbit` by `update_cartesian`
    pub radius: Vector3<f64>,
    /// ECI velocity in m/s, derived from `orbit` by `update_cartesian`
    pub velocity: Vector3<f64>,
    /// Epoch of the last laser pulse, if any was fired yet
    pub last_pulse: Option<Epoch>,
}

impl Spacecraft {
    /// Builds the platform on a circular orbit (`ecc = 0`, `aop = 0`).
    ///
    /// The derived vectors start zeroed: call `update_cartesian` once the
    /// elements are propagated to the epoch of interest.
    pub fn circular(sma: f64, inc: f64, raan: f64, ma: f64, epoch: Epoch) -> Self {
        let orbit = Orbit::keplerian(sma, 0.0, inc, raan, 0.0, ma, epoch);
        Self {
            orbit,
            radius: Vector3::zeros(),
            velocity: Vector3::zeros(),
            last_pulse: None,
        }
    }

    /// Refreshes the derived position and velocity vectors from the elements.
    pub fn update_cartesian(&mut self, geoid: &Geoid) {
        let (radius, velocity) = self.orbit.to_cartesian(geoid);
        self.radius = radius;
        self.velocity = velocity;
    }
}

impl fmt::Display for Spacecraft {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Platform {{ {} }}", self.orbit)
    }
}
