use crate::commands::Out;
use crate::fetch::{
    fetch_core_metrics, fetch_extended_metrics, fetch_funder_details, load_funder_limits,
};
use crate::model::{CoreMetrics, Dashboard, ExtendedMetrics, FunderDetail, FunderLimit};
use crate::query::QueryTool;
use crate::{utils, Config, Result};
use chrono::{Local, NaiveDate};
use std::path::Path;
use tracing::info;

const DONE: &str = "Done! Run `cd remotion-dashboard && npm run render` to rebuild the video.";

/// Fetches everything the dashboard shows and writes it to `config.output()`, dated today.
///
/// Core metrics are fetched first; if they fail nothing else is queried and no file is written.
/// Extended metrics and funder details are then fetched concurrently and fall back to defaults on
/// failure. Funder limits come from `config.funders_json()` or the built-in list.
///
/// # Errors
/// - Core metrics could not be fetched.
/// - A funders file was given but is missing or malformed.
/// - The output file could not be written.
pub async fn fetch_dashboard(config: &Config, tool: &dyn QueryTool) -> Result<Out<Dashboard>> {
    fetch_dashboard_as_of(config, tool, Local::now().date_naive()).await
}

/// Same as [`fetch_dashboard`] with an explicit as-of date.
pub async fn fetch_dashboard_as_of(
    config: &Config,
    tool: &dyn QueryTool,
    date: NaiveDate,
) -> Result<Out<Dashboard>> {
    info!("Fetching dashboard metrics via the Lightdash CLI (reporting replica)...");

    info!("[1/5] Core metrics");
    let metrics = fetch_core_metrics(tool).await?.into_value();
    log_core_metrics(&metrics);

    let (extended, funder_details) =
        tokio::join!(fetch_extended_metrics(tool), fetch_funder_details(tool));

    info!("[2/5] Extended metrics");
    let mut extended = extended.into_value();
    log_extended_metrics(&extended);

    info!("[3/5] Funder details");
    extended.funder_details = funder_details.into_value();
    log_funder_details(&extended.funder_details);

    info!("[4/5] Funder limits");
    let funders = load_funder_limits(config.funders_json())
        .await?
        .into_value();
    log_funder_limits(&funders);

    info!("[5/5] Writing output");
    let dashboard = Dashboard::new(metrics, extended, funders, date);
    write_dashboard(config.output(), &dashboard).await?;
    info!("  Written to {}", config.output().display());

    Ok(Out::new(DONE, dashboard))
}

async fn write_dashboard(path: &Path, dashboard: &Dashboard) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        utils::make_dir(parent).await?;
    }
    utils::write(path, dashboard.to_json()?).await
}

fn log_core_metrics(m: &CoreMetrics) {
    info!("  Completions:     {}", utils::thousands(m.completions as f64));
    info!("  Total Owners:    {}", utils::thousands(m.total_owners as f64));
    info!("  NBB Offers:      {}", utils::thousands(m.nbb_offers as f64));
    info!("  Total Offers:    {}", utils::thousands(m.total_offers as f64));
    info!("  Income Boosters: {}", utils::thousands(m.income_boosters as f64));
    info!("  Active Loans:    {}", utils::thousands(m.active_loans as f64));
}

fn log_extended_metrics(e: &ExtendedMetrics) {
    let s = &e.scalars;
    info!("  Avg Loan Size:   £{}", utils::thousands(s.avg_loan_size as f64));
    info!("  Avg LTV:         {:.1}%", s.avg_ltv);
    info!("  Total Book:      £{}", utils::thousands(s.total_book_size as f64));
    info!("  Avg Rate:        {:.2}%", s.weighted_avg_rate);
    info!("  Arrears:         {}", s.arrears_count);
    info!("  Conversion:      {:.1}%", s.offer_to_completion_rate);
    info!("  Avg Days:        {}", s.avg_days_offer_to_completion);
    info!("  Income Booster:  {:.1}%", s.income_booster_pct);
    let monthly: Vec<String> = e
        .monthly_completions
        .iter()
        .map(|m| format!("{}:{}", m.month, m.value))
        .collect();
    info!("  Monthly:         {}", monthly.join(", "));
}

fn log_funder_details(details: &[FunderDetail]) {
    for d in details {
        info!(
            "  {}: {} loans, £{}",
            d.name,
            d.active_loans,
            utils::thousands(d.current_principal as f64)
        );
    }
}

fn log_funder_limits(funders: &[FunderLimit]) {
    for f in funders {
        info!(
            "  {}: {} / {}",
            f.name(),
            utils::thousands(f.current().as_f64().unwrap_or_default()),
            utils::thousands(f.limit().as_f64().unwrap_or_default())
        );
    }
}
