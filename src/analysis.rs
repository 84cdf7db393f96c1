//! Shared pipeline steps: config loading, input reading, season
//! extraction, and the focus event.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use nereus_calendar::{Date, SeasonWindow};
use nereus_field::{
    EnsembleField, RegionValues, SeasonalField, SeasonalMeans, extract_season,
};
use nereus_io::{read_ensemble, read_region_series};
use nereus_unseen::observed_event_peak;

use crate::config::NereusConfig;

/// Everything the estimator commands share.
pub struct AnalysisData {
    /// Pooled hindcast ensemble over the season.
    pub model: EnsembleField,
    /// Observed daily series over the season, per hindcast year.
    pub obs_seasonal: SeasonalField,
    /// Seasonal-mean trend reference, per the configured source.
    pub trend: SeasonalMeans,
    /// Focus-event peak anomaly per region.
    pub focus: RegionValues,
    /// Hindcast years.
    pub years: Vec<i32>,
    /// Detrending pivot year.
    pub pivot_year: i32,
}

/// Loads and parses the TOML configuration.
pub fn load_config(path: &Path) -> Result<NereusConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config: NereusConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    if config.analysis.regions.is_empty() {
        bail!("config lists no regions");
    }
    if config.analysis.first_year > config.analysis.last_year {
        bail!(
            "first_year {} is after last_year {}",
            config.analysis.first_year,
            config.analysis.last_year
        );
    }
    Ok(config)
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<Date> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        bail!("invalid date '{s}': expected YYYY-MM-DD");
    }
    let year: i32 = parts[0].parse().with_context(|| format!("invalid date '{s}'"))?;
    let month: u8 = parts[1].parse().with_context(|| format!("invalid date '{s}'"))?;
    let day: u8 = parts[2].parse().with_context(|| format!("invalid date '{s}'"))?;
    Ok(Date::new(year, month, day)?)
}

/// Reads the observed and model files and assembles the shared inputs.
pub fn load_inputs(config: &NereusConfig) -> Result<AnalysisData> {
    let obs_path = config
        .io
        .obs
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no observation path: set [io].obs in config"))?;
    let model_path = config
        .io
        .model
        .as_ref()
        .ok_or_else(|| anyhow::anyhow!("no model path: set [io].model in config"))?;

    let analysis = &config.analysis;
    let years: Vec<i32> = (analysis.first_year..=analysis.last_year).collect();
    let season = SeasonWindow::new(&analysis.season_months)?;

    info!(path = %obs_path.display(), "reading observed series");
    let obs = read_region_series(obs_path, &analysis.regions, None)?;
    let obs_seasonal = extract_season(&obs, &years, &season)?;

    info!(path = %model_path.display(), "reading hindcast ensemble");
    let model = read_ensemble(model_path, &analysis.regions)?.pool();
    if model.years() != years {
        bail!(
            "model years {:?}..{:?} do not cover the configured hindcast period {}..{}",
            model.years().first(),
            model.years().last(),
            analysis.first_year,
            analysis.last_year
        );
    }

    let trend = match analysis.trend_source.as_str() {
        "obs" => obs_seasonal.mean_over_time(),
        "model" => model.realisation_mean_seasonal(),
        other => bail!("trend_source must be 'obs' or 'model', got '{other}'"),
    };

    let event_start = parse_date(&analysis.event_start)?;
    let event_end = parse_date(&analysis.event_end)?;
    let event = read_region_series(obs_path, &analysis.regions, Some((event_start, event_end)))?;
    let focus = observed_event_peak(&event, &obs_seasonal, analysis.window_days)?;
    for (region, peak) in focus.regions().iter().zip(focus.values()) {
        info!(region, peak, "focus event magnitude");
    }

    let pivot_year = analysis.pivot_year.unwrap_or(analysis.last_year);
    Ok(AnalysisData {
        model,
        obs_seasonal,
        trend,
        focus,
        years,
        pivot_year,
    })
}
