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

use super::{CampaignConfig, OutputError, OutputOpenSnafu, OutputReadSnafu, OutputWriteSnafu};
use approx::relative_eq;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::fs::OpenOptions;
use std::path::Path;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// One row of the result file: the thirteen configuration echo columns
/// followed by the two campaign outcomes. Times are echoed in days and angles
/// in degrees, the units the result file is eyeballed in.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ResultRecord {
    pub h_collision: f64,
    pub fragments: f64,
    pub t0_days: f64,
    pub h_offset: f64,
    pub target_fraction: f64,
    pub fov_deg: f64,
    pub range: f64,
    pub incidence_deg: f64,
    pub ablation_time: f64,
    pub scan_time: f64,
    pub cooldown_time: f64,
    pub fluence: f64,
    pub min_perigee: f64,
    pub time_days: f64,
    pub fraction_removed: f64,
}

impl ResultRecord {
    /// Builds a row for the provided configuration and campaign outcome
    /// (elapsed simulated seconds, removed fraction).
    pub fn new(config: &CampaignConfig, elapsed_s: f64, fraction_removed: f64) -> Self {
        Self {
            h_collision: config.h_collision,
            fragments: config.d_n as f64,
            t0_days: config.t0 / SECONDS_PER_DAY,
            h_offset: config.h_offset,
            target_fraction: config.target_fraction,
            fov_deg: config.fov.to_degrees(),
            range: config.range,
            incidence_deg: config.incidence_angle.to_degrees(),
            ablation_time: config.ablation_time,
            scan_time: config.scan_time,
            cooldown_time: config.cooldown_time,
            fluence: config.fluence,
            min_perigee: config.min_perigee,
            time_days: elapsed_s / SECONDS_PER_DAY,
            fraction_removed,
        }
    }

    /// The configuration echo columns, in file order.
    fn config_columns(&self) -> [f64; 13] {
        [
            self.h_collision,
            self.fragments,
            self.t0_days,
            self.h_offset,
            self.target_fraction,
            self.fov_deg,
            self.range,
            self.incidence_deg,
            self.ablation_time,
            self.scan_time,
            self.cooldown_time,
            self.fluence,
            self.min_perigee,
        ]
    }

    /// Whether both rows came from the same configuration, to within floating
    /// point round-trip noise through the CSV.
    pub fn same_configuration(&self, other: &Self) -> bool {
        self.config_columns()
            .iter()
            .zip(other.config_columns().iter())
            .all(|(a, b)| relative_eq!(*a, *b, epsilon = 1e-9, max_relative = 1e-9))
    }
}

/// Returns whether the result file already holds a row for this
/// configuration. A missing file means no run is recorded yet.
pub fn already_recorded<P: AsRef<Path>>(
    path: P,
    config: &CampaignConfig,
) -> Result<bool, OutputError> {
    if !path.as_ref().exists() {
        return Ok(false);
    }
    let path_str = path.as_ref().display().to_string();
    let probe = ResultRecord::new(config, 0.0, 0.0);
    let mut reader = csv::Reader::from_path(path.as_ref()).context(OutputReadSnafu {
        path: path_str.clone(),
    })?;
    for row in reader.deserialize() {
        let record: ResultRecord = row.context(OutputReadSnafu {
            path: path_str.clone(),
        })?;
        if record.same_configuration(&probe) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Appends one result row, writing the header first when the file is new or
/// empty.
pub fn append_result<P: AsRef<Path>>(path: P, record: &ResultRecord) -> Result<(), OutputError> {
    let path_str = path.as_ref().display().to_string();
    let write_header = match std::fs::metadata(path.as_ref()) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())
        .context(OutputOpenSnafu {
            path: path_str.clone(),
        })?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(write_header)
        .from_writer(file);
    writer.serialize(record).context(OutputWriteSnafu {
        path: path_str.clone(),
    })?;
    writer.flush().map_err(csv::Error::from).context(OutputWriteSnafu { path: path_str })?;
    Ok(())
}
