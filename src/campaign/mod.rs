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

mod driver;
mod harness;

pub use self::driver::Campaign;
pub use self::harness::{filter_catalog, reference_epoch, run_campaign, seed_spacecraft};

use crate::time::Duration;
use std::fmt;

/// What happened during one epoch of the campaign loop. The time advance is
/// event driven: a fired shot costs a second scan-plus-ablation slot and the
/// laser cooldown on top of the epoch itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EpochEvent {
    /// The laser fired at the first in-view fragment of the scan
    ShotFired,
    /// No fragment satisfied the engagement conditions long enough
    ScanOnly,
}

/// Removal progress, sampled exactly once per epoch iteration: elapsed
/// campaign seconds and the cumulative removed fraction, as parallel series.
#[derive(Clone, Debug, Default)]
pub struct RemovalSeries {
    pub elapsed_s: Vec<f64>,
    pub removed_fraction: Vec<f64>,
}

impl RemovalSeries {
    pub fn len(&self) -> usize {
        self.elapsed_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elapsed_s.is_empty()
    }
}

/// Outcome of one campaign run.
#[derive(Clone, Debug)]
pub struct CampaignResults {
    /// Removal progress over the whole run
    pub series: RemovalSeries,
    /// Fragments removed by the campaign
    pub removed: usize,
    /// Fragments the campaign started with
    pub total: usize,
    /// Laser shots fired (including those that only degraded the orbit)
    pub shots: usize,
    /// Epoch iterations simulated
    pub epochs: usize,
    /// Simulated campaign duration
    pub elapsed: Duration,
}

impl CampaignResults {
    /// Cumulative removed fraction at the end of the run; zero for an empty
    /// population.
    pub fn removed_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.removed as f64 / self.total as f64
        }
    }
}

impl fmt::Display for CampaignResults {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "removed {}/{} fragments ({:.2}%) in {} with {} shots over {} epochs",
            self.removed,
            self.total,
            100.0 * self.removed_fraction(),
            self.elapsed,
            self.shots,
            self.epochs
        )
    }
}
