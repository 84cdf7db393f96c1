use std::path::PathBuf;

use serde::Deserialize;

/// Top-level nereus configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NereusConfig {
    /// Global bootstrap seed.
    #[serde(default)]
    pub seed: Option<u64>,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Analysis settings.
    pub analysis: AnalysisToml,

    /// Bootstrap settings.
    #[serde(default)]
    pub bootstrap: BootstrapToml,

    /// Strength-risk grid settings.
    #[serde(default)]
    pub strength: StrengthToml,

    /// Time-risk grid settings.
    #[serde(default)]
    pub time: TimeToml,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Daily observed SST Parquet file.
    pub obs: Option<PathBuf>,
    /// Long-format hindcast ensemble Parquet file.
    pub model: Option<PathBuf>,
    #[serde(default = "default_strength_output")]
    pub strength_output: PathBuf,
    #[serde(default = "default_time_output")]
    pub time_output: PathBuf,
    #[serde(default = "default_time_extrapolated_output")]
    pub time_extrapolated_output: PathBuf,
    #[serde(default = "default_moments_output")]
    pub moments_output: PathBuf,
}

fn default_strength_output() -> PathBuf {
    PathBuf::from("strength_risk.parquet")
}
fn default_time_output() -> PathBuf {
    PathBuf::from("time_risk.parquet")
}
fn default_time_extrapolated_output() -> PathBuf {
    PathBuf::from("time_risk_extrapolated.parquet")
}
fn default_moments_output() -> PathBuf {
    PathBuf::from("moment_summary.parquet")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    /// Region names, in output order.
    pub regions: Vec<String>,
    /// Season month numbers, in season order (e.g. [12, 1, 2] for DJF).
    #[serde(default = "default_season_months")]
    pub season_months: Vec<u8>,
    /// Rolling-mean window for the seasonal extremes, in days.
    #[serde(default = "default_window_days")]
    pub window_days: usize,
    /// First hindcast year.
    #[serde(default = "default_first_year")]
    pub first_year: i32,
    /// Last hindcast year.
    #[serde(default = "default_last_year")]
    pub last_year: i32,
    /// Detrending pivot year; defaults to the last hindcast year.
    #[serde(default)]
    pub pivot_year: Option<i32>,
    /// Which seasonal-mean series the trend is fitted to: "obs" or
    /// "model".
    #[serde(default = "default_trend_source")]
    pub trend_source: String,
    /// Focus-event window start, `YYYY-MM-DD`.
    #[serde(default = "default_event_start")]
    pub event_start: String,
    /// Focus-event window end, `YYYY-MM-DD`.
    #[serde(default = "default_event_end")]
    pub event_end: String,
}

fn default_season_months() -> Vec<u8> {
    vec![6, 7, 8]
}
fn default_window_days() -> usize {
    14
}
fn default_first_year() -> i32 {
    1993
}
fn default_last_year() -> i32 {
    2016
}
fn default_trend_source() -> String {
    "obs".to_string()
}
fn default_event_start() -> String {
    "2023-06-01".to_string()
}
fn default_event_end() -> String {
    "2023-06-30".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BootstrapToml {
    #[serde(default = "default_n_iterations")]
    pub n_iterations: usize,
}

impl Default for BootstrapToml {
    fn default() -> Self {
        Self {
            n_iterations: default_n_iterations(),
        }
    }
}

fn default_n_iterations() -> usize {
    10_000
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StrengthToml {
    #[serde(default = "default_max_increment")]
    pub max_increment: f64,
    #[serde(default = "default_step")]
    pub step: f64,
}

impl Default for StrengthToml {
    fn default() -> Self {
        Self {
            max_increment: default_max_increment(),
            step: default_step(),
        }
    }
}

fn default_max_increment() -> f64 {
    2.0
}
fn default_step() -> f64 {
    0.05
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TimeToml {
    /// First pivot year of the hindcast pass; defaults to the first
    /// hindcast year.
    #[serde(default)]
    pub first_pivot: Option<i32>,
    /// Last pivot year of the hindcast pass; defaults to the last
    /// hindcast year.
    #[serde(default)]
    pub last_pivot: Option<i32>,
    /// First year of the optional extrapolated pass.
    #[serde(default)]
    pub extrapolate_first: Option<i32>,
    /// Last year of the optional extrapolated pass.
    #[serde(default)]
    pub extrapolate_last: Option<i32>,
}
