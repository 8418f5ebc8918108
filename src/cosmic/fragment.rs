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

use super::Orbit;
use std::fmt;

/// A single debris fragment: its orbit, its ballistic properties, and its
/// campaign status flags.
///
/// Status transitions are owned by the campaign driver: a fragment is ACTIVE
/// until the laser fires at it (`shot`), at which point it is either REMOVED
/// (perigee or apogee driven below the removal altitude, or the orbit left
/// the bound domain) or remains on a degraded orbit. Either way it is never
/// targeted again and becomes eligible for compaction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fragment {
    /// Osculating elements of this fragment
    pub orbit: Orbit,
    /// Mass in kg
    pub mass_kg: f64,
    /// Area to mass ratio in m^2/kg, the handle the laser coupling model grabs
    pub area_to_mass_m2_kg: f64,
    /// Set when the laser has fired at this fragment
    pub shot: bool,
    /// Set when this fragment's orbit decayed below the removal altitude or degenerated
    pub removed: bool,
}

impl Fragment {
    pub fn new(orbit: Orbit, mass_kg: f64, area_to_mass_m2_kg: f64) -> Self {
        Self {
            orbit,
            mass_kg,
            area_to_mass_m2_kg,
            shot: false,
            removed: false,
        }
    }

    /// A fragment may be targeted only while it has never been lased and is not removed.
    pub fn targetable(&self) -> bool {
        !self.shot && !self.removed
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Fragment {{ {}  mass {:.3} kg  A/M {:.4} m^2/kg  shot: {}  removed: {} }}",
            self.orbit, self.mass_kg, self.area_to_mass_m2_kg, self.shot, self.removed
        )
    }
}
