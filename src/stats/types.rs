/// Aggregate view of one health-check cycle over the main pool.
///
/// Latency figures cover only the probes that answered; when every node
/// was unresponsive they are `None` and the corresponding metrics are
/// omitted rather than published as zero. The drain count is `None` when
/// the drain pool could not be enumerated this cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleStats {
    pub total_nodes: usize,
    pub unresponsive_nodes: usize,
    pub average_latency_ms: Option<f64>,
    pub min_latency_ms: Option<f64>,
    pub max_latency_ms: Option<f64>,
    pub drain_nodes: Option<usize>,
}
