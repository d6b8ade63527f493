// 3rd party crates
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use tracing::{debug, error, info, warn};

// Project imports
use crate::probe::types::{HealthProber, ProbeResult};
use crate::providers::cloudflare::types::DnsRecord;
use crate::providers::NodeDirectory;
use crate::reporter::functions::{push_metric, unix_now};
use crate::reporter::types::{Metric, StatusPage};
use crate::stats::functions::aggregate;
use crate::stats::types::CycleStats;

// Current module imports
use super::functions::cycle_datapoints;
use super::types::Monitor;

impl<D: NodeDirectory> Monitor<D> {
    /// Resolves the zone once and builds the cycle driver.
    ///
    /// Zone resolution failure is fatal: without an id there is nothing
    /// to enumerate, so the error propagates to startup.
    pub async fn init(
        directory: D,
        prober: HealthProber,
        statuspage: StatusPage,
        domain: String,
        drain_domain: String,
    ) -> Result<Self, D::Error> {
        let zone_id: String = directory.resolve_zone_id().await?;

        Ok(Self {
            directory,
            prober,
            statuspage,
            zone_id,
            domain,
            drain_domain,
        })
    }

    /// Runs one full cycle: enumerate, probe, aggregate, report.
    ///
    /// Steady-state failures never escape: a dead node becomes an
    /// unresponsive count, a failed drain enumeration an unknown drain
    /// count, and a failed main enumeration skips the cycle entirely
    /// rather than publish a misleading zero.
    pub async fn run_cycle(&self) {
        debug!(domain = %self.domain, "Starting health-check cycle");

        // Enumerate both pools; neither blocks on the other's outcome.
        let (main_records, drain_records) = tokio::join!(
            self.directory
                .list_address_records(&self.zone_id, &self.domain),
            self.directory
                .list_address_records(&self.zone_id, &self.drain_domain),
        );

        let records: Vec<DnsRecord> = match main_records {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    domain = %self.domain,
                    error = %e,
                    "Main pool enumeration failed, skipping cycle"
                );
                return;
            }
        };

        let drain_nodes: Option<usize> = match drain_records {
            Ok(records) => Some(records.len()),
            Err(e) => {
                warn!(
                    domain = %self.drain_domain,
                    error = %e,
                    "Drain pool enumeration failed, drain count unknown this cycle"
                );
                None
            }
        };

        let results: Vec<ProbeResult> = self.probe_pool(records).await;
        let stats: CycleStats = aggregate(&results, drain_nodes);

        info!(
            domain = %self.domain,
            total = stats.total_nodes,
            unresponsive = stats.unresponsive_nodes,
            drain = ?stats.drain_nodes,
            "Cycle aggregated"
        );

        self.report(&stats).await;
    }

    /// Fans out one probe per record and collects results as they land.
    ///
    /// Completion order is not meaningful; aggregation downstream is
    /// order-independent.
    async fn probe_pool(&self, records: Vec<DnsRecord>) -> Vec<ProbeResult> {
        let mut futures = FuturesUnordered::new();

        for record in records {
            futures.push(self.prober.probe(record));
        }

        let mut results: Vec<ProbeResult> = Vec::new();
        while let Some(result) = futures.next().await {
            if result.success {
                if let Some(status) = result.status.filter(|s| *s >= 400) {
                    debug!(
                        node = %result.record.content,
                        status = status,
                        "Node answered with an error status"
                    );
                }
            } else {
                warn!(
                    node = %result.record.content,
                    record_id = %result.record.id,
                    error = result.error.as_deref().unwrap_or("unknown"),
                    "Node is unresponsive"
                );
            }
            results.push(result);
        }

        results
    }

    /// Publishes the cycle's metrics, one isolated push per metric.
    async fn report(&self, stats: &CycleStats) {
        let timestamp: u64 = unix_now();
        let drain_bound: bool = self.statuspage.has_binding(Metric::DrainNodes);

        if !drain_bound {
            if let Some(drain) = stats.drain_nodes {
                debug!(
                    count = drain,
                    "Drain pool counted, no dashboard metric bound"
                );
            }
        }

        for (metric, value) in cycle_datapoints(stats, drain_bound) {
            if let Err(e) = push_metric(&self.statuspage, metric, value, timestamp).await {
                error!(metric = metric.name(), error = %e, "Failed to push metric");
            }
        }
    }
}
