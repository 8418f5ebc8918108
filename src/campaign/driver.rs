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

use super::{EpochEvent, RemovalSeries};
use crate::cosmic::{Fragment, Geoid, Spacecraft};
use crate::dynamics::apply_impulse;
use crate::io::CampaignConfig;
use crate::linalg::Vector3;
use crate::md::{window, Visibility};
use crate::time::{Duration, Epoch, Unit};
use rayon::prelude::*;

/// Per-fragment Cartesian state and predicate result for the current epoch.
/// Kept in an array parallel to the fragment array, indexed by fragment,
/// never by pointer.
#[derive(Copy, Clone, Debug)]
struct EpochGeometry {
    radius: Vector3<f64>,
    velocity: Vector3<f64>,
    in_view: bool,
}

impl Default for EpochGeometry {
    fn default() -> Self {
        Self {
            radius: Vector3::zeros(),
            velocity: Vector3::zeros(),
            in_view: false,
        }
    }
}

/// The campaign driver: owns the platform, the fragment population and the
/// progress series, and sequences the epoch loop.
///
/// Loop invariant: at the top of each iteration the platform and all
/// non-removed fragments carry element states osculating at `epoch`.
#[derive(Clone, Debug)]
pub struct Campaign {
    geoid: Geoid,
    vis: Visibility,
    /// Scan plus ablation: the base epoch length
    scan_abl: Duration,
    cooldown: Duration,
    t_max: Duration,
    bisect_tol: Duration,
    /// `fluence · Cm · freq · ablation_time`, scaled by each target's A/M
    coupling_dv: f64,
    max_dv: f64,
    min_perigee: f64,
    target_fraction: f64,
    filter_percent: f64,
    /// Compaction can be disabled; the progress series must not change either way.
    pub compaction_enabled: bool,

    pub spacecraft: Spacecraft,
    pub fragments: Vec<Fragment>,
    geometry: Vec<EpochGeometry>,

    epoch: Epoch,
    start: Epoch,
    total: usize,
    removed: usize,
    shots: usize,
    epochs: usize,
    last_compaction_pct: f64,

    pub series: RemovalSeries,
}

impl Campaign {
    /// Builds the driver for a population already propagated to the campaign
    /// start epoch. The platform must be consistent at the same epoch.
    pub fn new(config: &CampaignConfig, spacecraft: Spacecraft, fragments: Vec<Fragment>) -> Self {
        let total = fragments.len();
        let geometry = vec![EpochGeometry::default(); total];
        let start = spacecraft.orbit.epoch;
        Self {
            geoid: config.geoid(),
            vis: Visibility::new(
                config.range,
                config.incidence_angle,
                config.fov,
                &config.geoid(),
                config.h_collision,
                config.h_offset,
            ),
            scan_abl: config.scan_abl(),
            cooldown: config.cooldown_time * Unit::Second,
            t_max: config.t_max * Unit::Second,
            bisect_tol: config.bisect_tol * Unit::Second,
            coupling_dv: config.coupling_dv(),
            max_dv: config.max_dv,
            min_perigee: config.min_perigee,
            target_fraction: config.target_fraction,
            filter_percent: config.filter_percent,
            compaction_enabled: true,
            spacecraft,
            fragments,
            geometry,
            epoch: start,
            start,
            total,
            removed: 0,
            shots: 0,
            epochs: 0,
            last_compaction_pct: 0.0,
            series: RemovalSeries::default(),
        }
    }

    /// Elapsed simulated time since the campaign start.
    pub fn elapsed(&self) -> Duration {
        self.epoch - self.start
    }

    pub fn removed_count(&self) -> usize {
        self.removed
    }

    /// Size of the population the campaign started with; the denominator of
    /// the removed fraction, invariant under compaction.
    pub fn population(&self) -> usize {
        self.total
    }

    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    pub fn epochs_run(&self) -> usize {
        self.epochs
    }

    pub fn removed_fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.removed as f64 / self.total as f64
        }
    }

    /// Whether the campaign met its removal objective.
    pub fn achieved(&self) -> bool {
        self.removed_fraction() >= self.target_fraction
    }

    /// Whether the simulated time cap is spent.
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.t_max
    }

    /// Runs epochs until the target fraction is achieved or the time cap is
    /// reached.
    pub fn run(&mut self) {
        info!(
            "campaign start: {} fragments, target {:.1}%, cap {}",
            self.total,
            100.0 * self.target_fraction,
            self.t_max
        );
        while !self.achieved() && !self.expired() {
            self.step();
        }
        info!(
            "campaign end: removed {}/{} ({:.2}%) after {} epochs, {} shots, {}",
            self.removed,
            self.total,
            100.0 * self.removed_fraction(),
            self.epochs,
            self.shots,
            self.elapsed()
        );
    }

    /// One epoch of the campaign loop. Returns which event advanced the clock.
    pub fn step(&mut self) -> EpochEvent {
        // Progress sample for this epoch: time first, fraction after the scan.
        self.series
            .elapsed_s
            .push((self.epoch - self.start).to_seconds());

        // Advance everything one scan-plus-ablation slot.
        let target = self.epoch + self.scan_abl;
        self.spacecraft.orbit.propagate_to(target, &self.geoid);
        self.spacecraft.update_cartesian(&self.geoid);
        let boresight = self.vis.boresight(&self.spacecraft.radius, &self.spacecraft.velocity);
        let sc_radius = self.spacecraft.radius;
        let geoid = self.geoid;
        let vis = self.vis;

        // Data-parallel phase: propagate, convert, evaluate. Disjoint
        // per-fragment slices only; the join below is the single sync point.
        self.fragments
            .par_iter_mut()
            .zip(self.geometry.par_iter_mut())
            .for_each(|(fragment, geom)| {
                fragment.orbit.propagate_to(target, &geoid);
                let (radius, velocity) = fragment.orbit.to_cartesian(&geoid);
                geom.radius = radius;
                geom.velocity = velocity;
                geom.in_view = vis.in_view(&boresight, &sc_radius, &radius, &velocity);
            });
        self.epoch = target;

        // Sequential scan, ascending fragment index: the first candidate whose
        // resolved window covers a full scan-plus-ablation slot gets the shot.
        let mut event = EpochEvent::ScanOnly;
        for idx in 0..self.fragments.len() {
            if !self.fragments[idx].targetable() || !self.geometry[idx].in_view {
                continue;
            }
            let entry = window::crossing(
                &self.spacecraft.orbit,
                &self.fragments[idx].orbit,
                self.epoch - self.scan_abl,
                self.epoch,
                self.epoch,
                &self.vis,
                &self.geoid,
                self.bisect_tol,
            );
            let exit = window::crossing(
                &self.spacecraft.orbit,
                &self.fragments[idx].orbit,
                self.epoch,
                self.epoch + self.scan_abl,
                self.epoch,
                &self.vis,
                &self.geoid,
                self.bisect_tol,
            );
            if exit - entry >= self.scan_abl {
                self.fire(idx);
                event = EpochEvent::ShotFired;
                break;
            }
        }

        // Event-driven advance: a shot consumes a second slot plus cooldown.
        if event == EpochEvent::ShotFired {
            self.epoch = self.epoch + self.scan_abl + self.cooldown;
        }

        self.series.removed_fraction.push(self.removed_fraction());
        self.epochs += 1;

        // Compact at every `filter_percent` integer points of progress.
        if self.compaction_enabled {
            let pct = (100.0 * self.removed_fraction()).floor();
            if pct >= self.last_compaction_pct + self.filter_percent {
                self.compact();
                self.last_compaction_pct = pct;
            }
        }
        event
    }

    /// Fires the laser at fragment `idx`: applies the coupling ΔV antiparallel
    /// to the fragment velocity, re-solves the anomaly, and decides removal.
    fn fire(&mut self, idx: usize) {
        let geom = self.geometry[idx];
        let fragment = &mut self.fragments[idx];
        let delta_v = self.coupling_dv * fragment.area_to_mass_m2_kg;
        let direction = -geom.velocity / geom.velocity.norm();
        apply_impulse(
            &mut fragment.orbit,
            &geom.radius,
            &geom.velocity,
            &direction,
            delta_v,
            self.max_dv,
            &self.geoid,
        );
        // The impulse leaves ν stale relative to the new (e, M).
        fragment.orbit.resolve_ta();
        fragment.shot = true;
        self.shots += 1;
        self.spacecraft.last_pulse = Some(self.epoch);

        let perigee_alt = fragment.orbit.periapsis_altitude(&self.geoid);
        let apogee_alt = fragment.orbit.apoapsis_altitude(&self.geoid);
        if perigee_alt < self.min_perigee || apogee_alt < self.min_perigee || !fragment.orbit.is_bound()
        {
            fragment.removed = true;
            self.removed += 1;
            debug!(
                "shot #{} removed fragment {idx}: perigee {:.1} km, apogee {:.1} km",
                self.shots,
                perigee_alt / 1e3,
                apogee_alt / 1e3
            );
        } else {
            debug!(
                "shot #{} degraded fragment {idx} to perigee {:.1} km ({:.4} m/s)",
                self.shots,
                perigee_alt / 1e3,
                delta_v
            );
        }
    }

    /// Drops every fragment the laser has already fired at, rewriting the
    /// fragment and geometry arrays in place behind a boolean mask.
    fn compact(&mut self) {
        let before = self.fragments.len();
        let keep: Vec<bool> = self.fragments.iter().map(|f| !f.shot).collect();
        let mut mask = keep.iter();
        self.fragments.retain(|_| *mask.next().unwrap());
        let mut mask = keep.iter();
        self.geometry.retain(|_| *mask.next().unwrap());
        debug!(
            "compaction at {:.1}%: {} -> {} fragments",
            100.0 * self.removed_fraction(),
            before,
            self.fragments.len()
        );
    }
}
