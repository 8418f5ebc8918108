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

extern crate clap;
extern crate log;
extern crate orion;
extern crate pretty_env_logger;

use clap::{Arg, Command};
use log::{info, warn};
use orion::campaign::run_campaign;
use orion::io::{already_recorded, append_result, load_campaigns, load_catalog, ResultRecord};
use orion::OrionError;
use std::env::{set_var, var};

const LOG_VAR: &str = "ORION_LOG";

fn main() -> Result<(), OrionError> {
    if var(LOG_VAR).is_err() {
        set_var(LOG_VAR, "info");
    }
    if pretty_env_logger::try_init_custom_env(LOG_VAR).is_err() {
        eprintln!("could not init logger");
    }

    let app = Command::new("orion")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Laser-ablation debris removal campaign simulation for low Earth orbit.")
        .arg(
            Arg::new("CONFIG")
                .help("Sets the campaign configuration file to use (YAML sequence of campaigns)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("catalog")
                .short('d')
                .long("catalog")
                .value_name("CSV")
                .help("Fragment catalogue with Keplerian elements and area/mass")
                .required(true),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("CSV")
                .default_value("results.csv")
                .help("Result file, appended one row per campaign"),
        );

    let matches = app.get_matches();
    let config_path = matches.get_one::<String>("CONFIG").unwrap();
    let catalog_path = matches.get_one::<String>("catalog").unwrap();
    let output_path = matches.get_one::<String>("output").unwrap();

    let campaigns = load_campaigns(config_path)?;
    let catalog = load_catalog(catalog_path)?;

    for (seq, config) in campaigns.iter().enumerate() {
        if already_recorded(output_path, config)? {
            warn!(
                "campaign {}/{} already recorded in {output_path}: skipping",
                seq + 1,
                campaigns.len()
            );
            continue;
        }
        info!(
            "running campaign {}/{} (`{}`, h_collision {:.1} km, offset {:.1} km)",
            seq + 1,
            campaigns.len(),
            config.fragment_tag,
            config.h_collision / 1e3,
            config.h_offset / 1e3
        );
        let results = run_campaign(&catalog, config);
        info!("campaign {}/{}: {results}", seq + 1, campaigns.len());
        let record = ResultRecord::new(
            config,
            results.elapsed.to_seconds(),
            results.removed_fraction(),
        );
        append_result(output_path, &record)?;
    }

    Ok(())
}
