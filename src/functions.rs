// Standard library
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use tokio::sync::broadcast;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{info, warn};

// Project imports
use crate::monitor::types::Monitor;
use crate::probe::types::HealthProber;
use crate::providers::cloudflare::types::Cloudflare;
use crate::reporter::types::StatusPage;
use crate::settings::types::ConfigManager;

/// Main application loop driving the periodic health-check cycles.
///
/// This function:
/// - Resolves the monitored zone once at startup (fatal on failure)
/// - Runs one enumerate/probe/aggregate/report cycle per timer tick
/// - Never overlaps cycles: the cycle is awaited inline and missed
///   ticks are skipped, with a warning when a cycle overruns
/// - Implements graceful shutdown on signal
pub async fn run(
    config: Arc<ConfigManager>,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> Result<(), Box<dyn Error>> {
    let settings = config.get_settings().await;
    let check_interval: u64 = settings.check.interval;
    let probe_timeout: u64 = settings.check.probe_timeout;

    info!(
        "🕰️ Checking {} every {} seconds ({}s probe timeout)",
        settings.cloudflare.domain, check_interval, probe_timeout
    );

    let cloudflare: Cloudflare = Cloudflare::new(settings.cloudflare.clone())?;
    let statuspage: StatusPage = StatusPage::new(settings.statuspage.clone())?;
    let prober: HealthProber = HealthProber::new(Duration::from_secs(probe_timeout))?;

    let domain: String = settings.cloudflare.domain.clone();
    let drain_domain: String = settings.cloudflare.drain_domain.clone();

    // Drop the settings lock
    drop(settings);

    // Zone resolution is the only fatal runtime dependency.
    let monitor = Monitor::init(cloudflare, prober, statuspage, domain, drain_domain).await?;

    let interval: Duration = Duration::from_secs(check_interval);
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // The first tick fires immediately, so the first cycle runs up front.
    loop {
        tokio::select! {
            // Handle shutdown signal
            Ok(_) = shutdown_rx.recv() => {
                info!("Received shutdown signal, stopping health checks...");
                break;
            }

            // Handle periodic health checks
            _ = ticker.tick() => {
                let started = Instant::now();
                monitor.run_cycle().await;

                let elapsed = started.elapsed();
                if elapsed > interval {
                    warn!(
                        "Cycle took {:.1}s, longer than the {}s interval; missed ticks are skipped",
                        elapsed.as_secs_f64(),
                        check_interval
                    );
                }
            }
        }
    }

    Ok(())
}
