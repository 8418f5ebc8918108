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

/*! # orion

Orion simulates a laser-based debris removal campaign in low Earth orbit,
after the ORION laser-broom concept: a single spacecraft with a pulsed laser
flies slightly above a cloud of collision fragments and, on each geometrically
valid encounter, imparts a small retrograde impulse until the fragment's
perigee drops below a removal altitude.

The orbital model is Keplerian with J2 secular rates only. Laser impulses are
applied through the Gaussian variational equations as a train of small
sub-impulses. Per-epoch fragment propagation and visibility evaluation are
data-parallel across the population; the campaign clock is event driven (scan
versus shot epochs).
*/

/// Provides the central body parameters, the Keplerian element state, and the fragment and spacecraft records.
pub mod cosmic;

/// Provides the impulsive maneuver model based on the Gaussian variational equations.
pub mod dynamics;

/// Provides the laser visibility geometry and the window boundary solver.
pub mod md;

/// Provides the campaign driver and the run harness.
pub mod campaign;

/// All the input/output needs for this library: campaign configurations, fragment catalogues, result records.
pub mod io;

/// Utility functions shared by different modules.
pub mod utils;

mod errors;
pub use self::errors::OrionError;

#[macro_use]
extern crate log;
extern crate nalgebra as na;

/// Re-export of hifitime
pub mod time {
    pub use hifitime::*;
}

/// Re-export nalgebra
pub mod linalg {
    pub use na::base::*;
}

/// Re-export some useful things
pub use self::cosmic::{Fragment, Geoid, Orbit, Spacecraft};
