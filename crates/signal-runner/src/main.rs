use market_data::YahooClient;
use notification_service::{NotificationConfig, NotificationService};
use signal_core::Notifier;
use signal_runner::{should_dispatch, RunnerConfig, SignalRunner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = RunnerConfig::from_env();
    let always_send = config.always_send;

    let client = YahooClient::new(config.http_timeout);
    let runner = SignalRunner::new(config, client.clone(), client)?;

    let report = runner.run_once().await;
    let rendered = report.render();
    println!("{}", rendered);

    if should_dispatch(report.tally(), always_send) {
        let notifier = NotificationService::new(&NotificationConfig::from_env());
        if notifier.send("Daily Stock Signals", &rendered).await {
            tracing::info!("Report emailed");
        } else {
            tracing::info!("Report not emailed (missing transport configuration)");
        }
    } else {
        tracing::info!("No BUY/SELL signals today; email suppressed");
    }

    Ok(())
}
