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

use super::{CatalogError, CatalogReadSnafu, CatalogRowSnafu};
use serde::Deserialize;
use snafu::ResultExt;
use std::path::Path;

/// One row of the fragment catalogue CSV, in SI units: semi-major axis in m,
/// angles in rad, `M` the fragment mass in kg, `A_M` the area-to-mass ratio
/// in m^2/kg, `d_eq` the equivalent diameter in m. Elements are osculating at
/// the catalogue epoch (`t = 0`).
#[derive(Clone, Debug, Deserialize)]
pub struct CatalogRecord {
    /// Collision tag this fragment belongs to
    #[serde(rename = "Name")]
    pub name: String,
    pub d_eq: f64,
    pub a: f64,
    pub e: f64,
    pub i: f64,
    pub long_asc: f64,
    pub arg_peri: f64,
    pub mean_anom: f64,
    #[serde(rename = "M")]
    pub mass_kg: f64,
    #[serde(rename = "A_M")]
    pub area_to_mass: f64,
}

/// Loads the full fragment catalogue. Missing columns or unparseable numbers
/// surface as errors: a partially read catalogue is never returned.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<CatalogRecord>, CatalogError> {
    let path_str = path.as_ref().display().to_string();
    let mut reader = csv::Reader::from_path(path.as_ref()).context(CatalogReadSnafu {
        path: path_str.clone(),
    })?;
    let mut records = Vec::new();
    for (row, result) in reader.deserialize().enumerate() {
        let record: CatalogRecord = result.context(CatalogRowSnafu {
            path: path_str.clone(),
            // Header is line 1
            row: row + 2,
        })?;
        records.push(record);
    }
    info!("loaded {} catalogue entries from {path_str}", records.len());
    Ok(records)
}
