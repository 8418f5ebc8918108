extern crate orion;

use orion::io::{
    already_recorded, append_result, load_campaigns, load_catalog, CampaignConfig, ResultRecord,
};
use std::fs;
use std::io::Write;

const GOOD_CAMPAIGN: &str = r#"
- fragment_tag: COSMOS-2251-DEB
  h_collision: 700000.0
  d_n: 500
  t0: 0.0
  h_offset: 50000.0
  target_fraction: 0.5
  max_dv: 0.01
  FoV: 0.5
  range: 300000.0
  incidence_angle: 0.5
  ablation_time: 15.0
  scan_time: 15.0
  cooldown_time: 60.0
  fluence: 10000.0
  Cm: 0.0001
  freq: 133.0
  min_perigee: 400000.0
  t_max: 86400.0
  bisect_tol: 0.001
"#;

const GOOD_CATALOG: &str = "\
Name,d_eq,a,e,i,long_asc,arg_peri,mean_anom,M,A_M
COSMOS-2251-DEB,0.05,7078137.0,0.001,1.2,0.4,0.1,2.0,1.0,0.05
FENGYUN-1C-DEB,0.08,7120000.0,0.02,1.7,0.2,0.3,1.0,0.5,0.11
";

fn write_temp(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn campaign_defaults_and_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(&dir, "campaigns.yaml", GOOD_CAMPAIGN);
    let campaigns = load_campaigns(&path).unwrap();
    assert_eq!(campaigns.len(), 1);
    let config = &campaigns[0];
    // Earth constants default when omitted
    assert_eq!(config.r_e, 6_378_137.0);
    assert_eq!(config.j2, 1.082_63e-3);
    assert_eq!(config.mu, 3.986_004_418e14);
    assert_eq!(config.filter_percent, 1.0);
    assert_eq!(config.fragment_tag, "COSMOS-2251-DEB");
    assert_eq!(config.scan_abl().to_seconds(), 30.0);
}

#[test]
fn negative_duration_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let bad = GOOD_CAMPAIGN.replace("ablation_time: 15.0", "ablation_time: -15.0");
    let path = write_temp(&dir, "campaigns.yaml", &bad);
    assert!(load_campaigns(&path).is_err());
}

#[test]
fn out_of_range_target_fraction_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let bad = GOOD_CAMPAIGN.replace("target_fraction: 0.5", "target_fraction: 1.5");
    let path = write_temp(&dir, "campaigns.yaml", &bad);
    assert!(load_campaigns(&path).is_err());
}

#[test]
fn missing_option_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let bad = GOOD_CAMPAIGN.replace("  range: 300000.0\n", "");
    let path = write_temp(&dir, "campaigns.yaml", &bad);
    assert!(load_campaigns(&path).is_err());
}

#[test]
fn catalog_loads_all_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(&dir, "catalog.csv", GOOD_CATALOG);
    let records = load_catalog(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "COSMOS-2251-DEB");
    assert_eq!(records[0].a, 7_078_137.0);
    assert_eq!(records[1].area_to_mass, 0.11);
}

#[test]
fn catalog_missing_column_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let truncated = GOOD_CATALOG
        .replace(",A_M", "")
        .replace(",0.05\n", "\n")
        .replace(",0.11\n", "\n");
    let path = write_temp(&dir, "catalog.csv", &truncated);
    assert!(load_catalog(&path).is_err());
}

#[test]
fn catalog_bad_number_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let bad = GOOD_CATALOG.replace("7078137.0", "not-a-number");
    let path = write_temp(&dir, "catalog.csv", &bad);
    assert!(load_catalog(&path).is_err());
}

fn loaded_config() -> CampaignConfig {
    let dir = tempfile::tempdir().unwrap();
    let path = write_temp(&dir, "campaigns.yaml", GOOD_CAMPAIGN);
    load_campaigns(&path).unwrap().remove(0)
}

#[test]
fn results_header_is_written_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    let config = loaded_config();

    append_result(&path, &ResultRecord::new(&config, 86_400.0, 0.5)).unwrap();
    let mut other = config.clone();
    other.h_offset = 60_000.0;
    append_result(&path, &ResultRecord::new(&other, 172_800.0, 0.4)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3, "one header and two data rows");
    assert!(lines[0].starts_with("h_collision,"));
}

#[test]
fn recorded_configuration_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    let config = loaded_config();

    assert!(!already_recorded(&path, &config).unwrap(), "no file yet");
    append_result(&path, &ResultRecord::new(&config, 86_400.0, 0.5)).unwrap();
    assert!(already_recorded(&path, &config).unwrap());

    let mut other = config.clone();
    other.range = 2.0 * config.range;
    assert!(!already_recorded(&path, &other).unwrap());
}
