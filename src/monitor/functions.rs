// Project imports
use crate::reporter::types::Metric;
use crate::stats::types::CycleStats;

/// Chooses which metrics to publish for a cycle.
///
/// Latency figures missing from the stats are omitted, never zeroed. The
/// drain count is only published when the dashboard has a metric bound
/// for it; an unknown drain count publishes nothing.
pub fn cycle_datapoints(stats: &CycleStats, drain_bound: bool) -> Vec<(Metric, f64)> {
    let mut datapoints: Vec<(Metric, f64)> = vec![
        (Metric::ActiveNodes, stats.total_nodes as f64),
        (Metric::UnresponsiveNodes, stats.unresponsive_nodes as f64),
    ];

    if let Some(average) = stats.average_latency_ms {
        datapoints.push((Metric::AverageResponse, average));
    }
    if let Some(max) = stats.max_latency_ms {
        datapoints.push((Metric::MaxResponse, max));
    }
    if let Some(min) = stats.min_latency_ms {
        datapoints.push((Metric::MinResponse, min));
    }

    if drain_bound {
        if let Some(drain) = stats.drain_nodes {
            datapoints.push((Metric::DrainNodes, drain as f64));
        }
    }

    datapoints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> CycleStats {
        CycleStats {
            total_nodes: 5,
            unresponsive_nodes: 2,
            average_latency_ms: Some(100.0),
            min_latency_ms: Some(50.0),
            max_latency_ms: Some(150.0),
            drain_nodes: Some(3),
        }
    }

    fn value_of(datapoints: &[(Metric, f64)], metric: Metric) -> Option<f64> {
        datapoints
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, v)| *v)
    }

    #[test]
    fn active_nodes_carries_the_full_pool_size() {
        let datapoints = cycle_datapoints(&stats(), true);

        assert_eq!(value_of(&datapoints, Metric::ActiveNodes), Some(5.0));
        assert_eq!(value_of(&datapoints, Metric::UnresponsiveNodes), Some(2.0));
        assert_eq!(value_of(&datapoints, Metric::AverageResponse), Some(100.0));
        assert_eq!(value_of(&datapoints, Metric::DrainNodes), Some(3.0));
        assert_eq!(datapoints.len(), 6);
    }

    #[test]
    fn missing_latency_stats_are_not_published() {
        let stats = CycleStats {
            average_latency_ms: None,
            min_latency_ms: None,
            max_latency_ms: None,
            ..stats()
        };
        let datapoints = cycle_datapoints(&stats, true);

        assert_eq!(value_of(&datapoints, Metric::AverageResponse), None);
        assert_eq!(value_of(&datapoints, Metric::MinResponse), None);
        assert_eq!(value_of(&datapoints, Metric::MaxResponse), None);
        assert_eq!(value_of(&datapoints, Metric::ActiveNodes), Some(5.0));
    }

    #[test]
    fn unknown_drain_count_is_not_published_as_zero() {
        let stats = CycleStats {
            drain_nodes: None,
            ..stats()
        };

        assert_eq!(
            value_of(&cycle_datapoints(&stats, true), Metric::DrainNodes),
            None
        );
    }

    #[test]
    fn unbound_drain_metric_is_not_published() {
        assert_eq!(
            value_of(&cycle_datapoints(&stats(), false), Metric::DrainNodes),
            None
        );
    }
}
