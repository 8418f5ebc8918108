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

use snafu::Snafu;
use std::io::Error as IoError;

mod catalog;
mod config;
mod results;

pub use self::catalog::{load_catalog, CatalogRecord};
pub use self::config::{load_campaigns, CampaignConfig};
pub use self::results::{already_recorded, append_result, ResultRecord};

/// Errors on the campaign configuration boundary: no run is attempted when one
/// of these surfaces.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(display("could not read configuration {path}: {source}"))]
    ConfigRead { path: String, source: IoError },

    #[snafu(display("could not parse configuration {path}: {source}"))]
    ConfigParse {
        path: String,
        source: serde_yaml::Error,
    },

    #[snafu(display("invalid configuration value for `{param}`: {reason}"))]
    InvalidValue { param: String, reason: String },
}

/// Errors on the fragment catalogue boundary.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CatalogError {
    #[snafu(display("could not read catalogue {path}: {source}"))]
    CatalogRead { path: String, source: csv::Error },

    #[snafu(display("catalogue {path} row {row}: {source}"))]
    CatalogRow {
        path: String,
        row: usize,
        source: csv::Error,
    },
}

/// Errors on the result file boundary. The in-memory campaign state is
/// discarded after each configuration regardless, so a failed append only
/// loses that configuration's row.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum OutputError {
    #[snafu(display("could not open result file {path}: {source}"))]
    OutputOpen { path: String, source: IoError },

    #[snafu(display("could not append to result file {path}: {source}"))]
    OutputWrite { path: String, source: csv::Error },

    #[snafu(display("could not re-read result file {path}: {source}"))]
    OutputRead { path: String, source: csv::Error },
}
