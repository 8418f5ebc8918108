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

mod fragment;
mod kepler;
mod spacecraft;

pub use self::fragment::Fragment;
pub use self::kepler::{true_anomaly, Orbit};
pub use self::spacecraft::Spacecraft;

/// Earth equatorial radius in meters (WGS-84), used when no configuration overrides it.
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Earth gravitational parameter in m^3/s^2.
pub const EARTH_GM_M3_S2: f64 = 3.986_004_418e14;

/// Earth second zonal harmonic.
pub const EARTH_J2: f64 = 1.082_63e-3;

/// Central body parameters needed by the secular propagation model.
///
/// Everything is in SI units (meters). This is a deliberately small subset of
/// a full geopotential description: the campaign model only needs the
/// gravitational parameter, the equatorial radius and J2.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geoid {
    /// Gravitational parameter in m^3/s^2
    pub gm: f64,
    /// Equatorial radius in m
    pub radius: f64,
    /// Second zonal harmonic (dimensionless)
    pub j2: f64,
}

impl Geoid {
    /// Earth with the WGS-84 radius and EGM2008 J2.
    pub fn earth() -> Self {
        Self {
            gm: EARTH_GM_M3_S2,
            radius: EARTH_RADIUS_M,
            j2: EARTH_J2,
        }
    }
}

impl Default for Geoid {
    fn default() -> Self {
        Self::earth()
    }
}
