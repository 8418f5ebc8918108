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

use super::{ConfigError, ConfigParseSnafu, ConfigReadSnafu};
use crate::cosmic::{Geoid, EARTH_GM_M3_S2, EARTH_J2, EARTH_RADIUS_M};
use crate::time::{Duration, Unit};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::fs::File;
use std::path::Path;

fn default_radius() -> f64 {
    EARTH_RADIUS_M
}

fn default_j2() -> f64 {
    EARTH_J2
}

fn default_gm() -> f64 {
    EARTH_GM_M3_S2
}

fn default_filter_percent() -> f64 {
    1.0
}

/// One campaign configuration record, in SI units (m, rad, s).
///
/// A configuration file is a YAML sequence of these records; each record is a
/// full campaign and they are executed in order. `R_e`, `J2` and `mu` default
/// to the Earth values when omitted.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CampaignConfig {
    /// Central body equatorial radius in m
    #[serde(rename = "R_e", default = "default_radius")]
    pub r_e: f64,
    /// Second zonal harmonic
    #[serde(rename = "J2", default = "default_j2")]
    pub j2: f64,
    /// Gravitational parameter in m^3/s^2
    #[serde(default = "default_gm")]
    pub mu: f64,
    /// Name tag of the collision whose fragments are the campaign targets
    pub fragment_tag: String,
    /// Collision altitude in m
    pub h_collision: f64,
    /// Maximum number of fragments simulated
    pub d_n: usize,
    /// Campaign start, in seconds after the catalogue epoch
    pub t0: f64,
    /// Platform altitude above the collision shell, in m
    pub h_offset: f64,
    /// Removed fraction at which the campaign halts (0..1]
    pub target_fraction: f64,
    /// Impulse integrator sub-step in m/s
    pub max_dv: f64,
    /// Full field-of-view cone angle in rad
    #[serde(rename = "FoV")]
    pub fov: f64,
    /// Maximum slant range in m
    pub range: f64,
    /// Maximum incidence angle in rad
    pub incidence_angle: f64,
    /// Ablation dwell per engagement in s
    pub ablation_time: f64,
    /// Scan time per epoch in s
    pub scan_time: f64,
    /// Laser cooldown after a shot in s
    pub cooldown_time: f64,
    /// Laser fluence on target in J/m^2
    pub fluence: f64,
    /// Momentum coupling coefficient in N.s/J
    #[serde(rename = "Cm")]
    pub cm: f64,
    /// Pulse repetition rate in Hz
    pub freq: f64,
    /// Removal altitude in m: a fragment with an apsis below this is gone
    pub min_perigee: f64,
    /// Simulated time cap in s
    pub t_max: f64,
    /// Window boundary resolution in s
    pub bisect_tol: f64,
    /// Compaction cadence, in integer percentage points of removal progress
    #[serde(default = "default_filter_percent")]
    pub filter_percent: f64,
}

impl CampaignConfig {
    /// Central body built from this configuration.
    pub fn geoid(&self) -> Geoid {
        Geoid {
            gm: self.mu,
            radius: self.r_e,
            j2: self.j2,
        }
    }

    /// Scan plus ablation: the base epoch length of the campaign loop.
    pub fn scan_abl(&self) -> Duration {
        (self.scan_time + self.ablation_time) * Unit::Second
    }

    /// ΔV delivered to a fragment of unit area-to-mass ratio:
    /// `fluence · Cm · freq · ablation_time`. Multiply by `A/M` per target.
    pub fn coupling_dv(&self) -> f64 {
        self.fluence * self.cm * self.freq * self.ablation_time
    }

    /// Checks this record for values no campaign can run with. Called by the
    /// loader on every record before anything is simulated.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("mu", self.mu),
            ("R_e", self.r_e),
            ("target_fraction", self.target_fraction),
            ("max_dv", self.max_dv),
            ("FoV", self.fov),
            ("range", self.range),
            ("incidence_angle", self.incidence_angle),
            ("ablation_time", self.ablation_time),
            ("scan_time", self.scan_time),
            ("t_max", self.t_max),
            ("bisect_tol", self.bisect_tol),
        ];
        for (param, value) in positive {
            if value <= 0.0 || !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    param: param.to_string(),
                    reason: format!("must be strictly positive, got {value}"),
                });
            }
        }
        let non_negative = [
            ("t0", self.t0),
            ("cooldown_time", self.cooldown_time),
            ("h_offset", self.h_offset),
            ("min_perigee", self.min_perigee),
            ("h_collision", self.h_collision),
        ];
        for (param, value) in non_negative {
            if value < 0.0 || !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    param: param.to_string(),
                    reason: format!("must not be negative, got {value}"),
                });
            }
        }
        if self.target_fraction > 1.0 {
            return Err(ConfigError::InvalidValue {
                param: "target_fraction".to_string(),
                reason: format!("must be within (0, 1], got {}", self.target_fraction),
            });
        }
        if self.d_n == 0 {
            return Err(ConfigError::InvalidValue {
                param: "d_n".to_string(),
                reason: "must allow at least one fragment".to_string(),
            });
        }
        if self.fragment_tag.is_empty() {
            return Err(ConfigError::InvalidValue {
                param: "fragment_tag".to_string(),
                reason: "must name the collision to target".to_string(),
            });
        }
        Ok(())
    }
}

/// Loads and validates a YAML sequence of campaign configurations.
pub fn load_campaigns<P: AsRef<Path>>(path: P) -> Result<Vec<CampaignConfig>, ConfigError> {
    let path_str = path.as_ref().display().to_string();
    let file = File::open(path.as_ref()).context(ConfigReadSnafu {
        path: path_str.clone(),
    })?;
    let campaigns: Vec<CampaignConfig> =
        serde_yaml::from_reader(file).context(ConfigParseSnafu {
            path: path_str.clone(),
        })?;
    for campaign in &campaigns {
        campaign.validate()?;
    }
    info!("loaded {} campaign(s) from {path_str}", campaigns.len());
    Ok(campaigns)
}
