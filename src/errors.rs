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

use crate::io::{CatalogError, ConfigError, OutputError};
use snafu::Snafu;
use std::convert::From;

/// Represents all possible errors that can occur in the Orion library.
///
/// The simulation kernels themselves never fail: numerical degeneracies
/// (hyperbolic or decayed fragments) are regular removal outcomes. Errors only
/// arise at the configuration, catalogue, and result boundaries.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum OrionError {
    /// Occurs when a campaign configuration is missing, ill-typed, or inconsistent.
    #[snafu(display("configuration error: {source}"))]
    Config { source: ConfigError },

    /// Occurs when the fragment catalogue cannot be read or parsed.
    #[snafu(display("catalogue error: {source}"))]
    Catalog { source: CatalogError },

    /// Occurs when the result file cannot be read or appended to.
    #[snafu(display("result output error: {source}"))]
    Output { source: OutputError },
}

impl From<ConfigError> for OrionError {
    fn from(source: ConfigError) -> Self {
        OrionError::Config { source }
    }
}

impl From<CatalogError> for OrionError {
    fn from(source: CatalogError) -> Self {
        OrionError::Catalog { source }
    }
}

impl From<OutputError> for OrionError {
    fn from(source: OutputError) -> Self {
        OrionError::Output { source }
    }
}
