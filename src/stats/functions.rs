// Project imports
use crate::probe::types::ProbeResult;

// Current module imports
use super::types::CycleStats;

/// Reduces a batch of probe results into cycle statistics.
///
/// Pure and order-independent: probe results arrive in whatever order the
/// fan-out completes, and permuting the input yields identical stats.
pub fn aggregate(results: &[ProbeResult], drain_nodes: Option<usize>) -> CycleStats {
    let total_nodes: usize = results.len();
    let unresponsive_nodes: usize = results.iter().filter(|r| !r.success).count();

    let latencies: Vec<f64> = results
        .iter()
        .filter(|r| r.success)
        .filter_map(|r| r.latency_ms)
        .collect();

    let (average_latency_ms, min_latency_ms, max_latency_ms) = if latencies.is_empty() {
        (None, None, None)
    } else {
        let sum: f64 = latencies.iter().sum();
        let min: f64 = latencies.iter().copied().fold(f64::INFINITY, f64::min);
        let max: f64 = latencies.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (Some(sum / latencies.len() as f64), Some(min), Some(max))
    };

    CycleStats {
        total_nodes,
        unresponsive_nodes,
        average_latency_ms,
        min_latency_ms,
        max_latency_ms,
        drain_nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::cloudflare::types::DnsRecord;

    fn record(n: usize) -> DnsRecord {
        DnsRecord {
            id: format!("rec-{}", n),
            name: "pool.example.org".to_string(),
            record_type: "A".to_string(),
            content: format!("203.0.113.{}", n),
        }
    }

    fn responsive(n: usize, latency_ms: f64) -> ProbeResult {
        ProbeResult {
            record: record(n),
            success: true,
            latency_ms: Some(latency_ms),
            status: Some(200),
            error: None,
        }
    }

    fn unresponsive(n: usize) -> ProbeResult {
        ProbeResult {
            record: record(n),
            success: false,
            latency_ms: None,
            status: None,
            error: Some("connection refused".to_string()),
        }
    }

    #[test]
    fn all_successful_probes() {
        let results = vec![responsive(1, 10.0), responsive(2, 20.0), responsive(3, 30.0)];
        let stats = aggregate(&results, Some(2));

        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.unresponsive_nodes, 0);
        assert_eq!(stats.average_latency_ms, Some(20.0));
        assert_eq!(stats.min_latency_ms, Some(10.0));
        assert_eq!(stats.max_latency_ms, Some(30.0));
        assert_eq!(stats.drain_nodes, Some(2));
    }

    #[test]
    fn mixed_probes_exclude_failures_from_latency() {
        let results = vec![
            unresponsive(1),
            responsive(2, 50.0),
            responsive(3, 100.0),
            unresponsive(4),
            responsive(5, 150.0),
        ];
        let stats = aggregate(&results, None);

        assert_eq!(stats.total_nodes, 5);
        assert_eq!(stats.unresponsive_nodes, 2);
        assert_eq!(stats.average_latency_ms, Some(100.0));
        assert_eq!(stats.min_latency_ms, Some(50.0));
        assert_eq!(stats.max_latency_ms, Some(150.0));
    }

    #[test]
    fn all_failed_probes_omit_latency_stats() {
        let results = vec![unresponsive(1), unresponsive(2)];
        let stats = aggregate(&results, Some(0));

        assert_eq!(stats.total_nodes, 2);
        assert_eq!(stats.unresponsive_nodes, 2);
        assert_eq!(stats.average_latency_ms, None);
        assert_eq!(stats.min_latency_ms, None);
        assert_eq!(stats.max_latency_ms, None);
    }

    #[test]
    fn empty_pool_aggregates_to_zeros() {
        let stats = aggregate(&[], None);

        assert_eq!(stats.total_nodes, 0);
        assert_eq!(stats.unresponsive_nodes, 0);
        assert_eq!(stats.average_latency_ms, None);
    }

    #[test]
    fn responsive_and_unresponsive_counts_partition_the_pool() {
        let results = vec![
            responsive(1, 12.0),
            unresponsive(2),
            responsive(3, 31.0),
            unresponsive(4),
            unresponsive(5),
        ];
        let stats = aggregate(&results, None);

        let responsive_count = results.iter().filter(|r| r.success).count();
        assert_eq!(
            stats.unresponsive_nodes + responsive_count,
            stats.total_nodes
        );
    }

    #[test]
    fn aggregation_is_order_independent() {
        let results = vec![
            responsive(1, 10.0),
            unresponsive(2),
            responsive(3, 20.0),
            responsive(4, 30.0),
        ];

        let mut permuted = results.clone();
        permuted.reverse();
        permuted.swap(0, 2);

        assert_eq!(aggregate(&results, Some(1)), aggregate(&permuted, Some(1)));
    }
}
