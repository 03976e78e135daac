use anyhow::Context;
use cadence_app::request::ExpandRequest;
use cadence_app::telemetry::{apply_log_level, init_tracing};
use cadence_core::config::load_config;
use cadence_recur::recur::ExpansionLimits;

fn main() -> anyhow::Result<()> {
    let filter_handle = init_tracing("warn");

    let config = load_config()?;
    apply_log_level(&filter_handle, &config.logging.level);
    tracing::debug!(config = ?config, "Configuration loaded");

    let path = std::env::args()
        .nth(1)
        .context("usage: cadence <request.json>")?;
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;

    let request = ExpandRequest::from_json(&text).with_context(|| format!("parsing {path}"))?;
    let response = request.run(ExpansionLimits::from(&config.expansion))?;

    tracing::info!(
        meeting_id = %response.recurring_meeting_id,
        instances = response.instances.len(),
        "Expansion complete"
    );

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
