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

use super::{Campaign, CampaignResults, RemovalSeries};
use crate::cosmic::{Fragment, Orbit, Spacecraft};
use crate::io::{CampaignConfig, CatalogRecord};
use crate::time::{Duration, Epoch, Unit};
use rayon::prelude::*;
use std::time::Instant;

/// Fragments with an equivalent diameter at or above this are left to the
/// rendezvous-and-capture missions; the laser campaign only sweeps the small
/// stuff.
pub const MAX_DIAMETER_M: f64 = 0.1;

/// The epoch at which catalogue elements are osculating (`t = 0` of a
/// campaign). Only epoch differences matter to the secular model.
pub fn reference_epoch() -> Epoch {
    Epoch::from_gregorian_tai_at_midnight(2025, 1, 1)
}

/// Filters the catalogue down to the lasable fragments of the configured
/// collision and caps the count at `d_n`:
///
/// - the name tag matches;
/// - equivalent diameter under 0.1 m;
/// - bound, non-degenerate eccentricity `0 < e < 1`;
/// - both apsides above the removal altitude (naturally decaying fragments
///   are not this campaign's business).
pub fn filter_catalog(records: &[CatalogRecord], config: &CampaignConfig) -> Vec<Fragment> {
    let geoid = config.geoid();
    let epoch = reference_epoch();
    let removal_radius = geoid.radius + config.min_perigee;
    let mut fragments: Vec<Fragment> = records
        .iter()
        .filter(|rec| {
            rec.name == config.fragment_tag
                && rec.d_eq < MAX_DIAMETER_M
                && rec.e > 0.0
                && rec.e < 1.0
                && rec.a * (1.0 - rec.e) > removal_radius
                && rec.a * (1.0 + rec.e) > removal_radius
        })
        .map(|rec| {
            Fragment::new(
                Orbit::keplerian(rec.a, rec.e, rec.i, rec.long_asc, rec.arg_peri, rec.mean_anom, epoch),
                rec.mass_kg,
                rec.area_to_mass,
            )
        })
        .collect();
    if fragments.len() > config.d_n {
        fragments.truncate(config.d_n);
    }
    info!(
        "{} of {} catalogue entries pass the `{}` filters (cap {})",
        fragments.len(),
        records.len(),
        config.fragment_tag,
        config.d_n
    );
    fragments
}

/// Seeds the laser platform from the initial fragment population: circular
/// orbit at the collision altitude plus the configured offset, in the
/// collision plane (population mean inclination), phased at the population
/// means of Ω and M.
pub fn seed_spacecraft(fragments: &[Fragment], config: &CampaignConfig) -> Spacecraft {
    let count = fragments.len() as f64;
    let mean_inc = fragments.iter().map(|f| f.orbit.inc).sum::<f64>() / count;
    let mean_raan = fragments.iter().map(|f| f.orbit.raan).sum::<f64>() / count;
    let mean_ma = fragments.iter().map(|f| f.orbit.ma).sum::<f64>() / count;
    let sma = config.r_e + config.h_collision + config.h_offset;
    Spacecraft::circular(sma, mean_inc, mean_raan, mean_ma, reference_epoch())
}

/// Runs one full campaign for this configuration: filter, seed, prime the
/// population at `t0`, then drive epochs until the removal objective or the
/// time cap. An empty filtered population returns immediately with a zero
/// removal fraction.
pub fn run_campaign(records: &[CatalogRecord], config: &CampaignConfig) -> CampaignResults {
    let geoid = config.geoid();
    let t0 = reference_epoch() + config.t0 * Unit::Second;

    let mut fragments = filter_catalog(records, config);
    if fragments.is_empty() {
        warn!("no fragment passes the filters: nothing to remove");
        return CampaignResults {
            series: RemovalSeries::default(),
            removed: 0,
            total: 0,
            shots: 0,
            epochs: 0,
            elapsed: Duration::ZERO,
        };
    }

    let mut spacecraft = seed_spacecraft(&fragments, config);

    // Prime the population: catalogue epoch to campaign start, in parallel.
    let wall = Instant::now();
    fragments
        .par_iter_mut()
        .for_each(|fragment| fragment.orbit.propagate_to(t0, &geoid));
    spacecraft.orbit.propagate_to(t0, &geoid);
    spacecraft.update_cartesian(&geoid);
    debug!(
        "primed {} fragments to t0 in {:.3} s",
        fragments.len(),
        wall.elapsed().as_secs_f64()
    );

    let mut campaign = Campaign::new(config, spacecraft, fragments);
    let wall = Instant::now();
    campaign.run();
    info!(
        "campaign wall clock: {:.3} s for {} epochs",
        wall.elapsed().as_secs_f64(),
        campaign.epochs_run()
    );

    CampaignResults {
        removed: campaign.removed_count(),
        total: campaign.population(),
        shots: campaign.shots_fired(),
        epochs: campaign.epochs_run(),
        elapsed: campaign.elapsed(),
        series: campaign.series,
    }
}
