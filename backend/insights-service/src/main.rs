use anyhow::{Context, Result};
use insights_service::{logging, Config, HttpRecordSource, Pipeline};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;

    info!(
        service = %config.service.service_name,
        base_url = %config.source.base_url,
        timeout_secs = config.source.timeout_secs,
        "Starting insights run"
    );

    let source = HttpRecordSource::from_config(&config).context("Failed to build record source")?;
    let pipeline = Pipeline::new(source);

    let insights = match pipeline.run().await {
        Ok(insights) => insights,
        Err(e) => {
            error!(error = %e, retryable = e.is_retryable(), "Insights run failed");
            return Err(e).context("Insights run failed");
        }
    };

    let stdout = std::io::stdout();
    insights
        .report()
        .write_to(&mut stdout.lock())
        .context("Failed to write report")?;

    info!(
        users = insights.post_counts.len(),
        duplicated_titles = insights.duplicated_titles.len(),
        "Insights run completed"
    );

    Ok(())
}
