// 3rd party crates
use reqwest::Client;
use serde::Deserialize;

/// Represents a client for pushing metric datapoints to the status
/// dashboard.
#[derive(Debug, Clone)]
pub struct StatusPage {
    pub config: SpConfig,
    pub client: Client,
}

/// Configuration for the status dashboard API.
#[derive(Debug, Deserialize, Clone)]
pub struct SpConfig {
    pub api_key: String,
    pub page_id: String,
    pub metrics: MetricBindings,
}

/// Fixed mapping from metric names to the dashboard's metric ids.
///
/// Resolved and validated once at startup. The drain binding is optional;
/// without it the drain count is only logged.
#[derive(Debug, Deserialize, Clone)]
pub struct MetricBindings {
    pub active_nodes: String,
    pub unresponsive_nodes: String,
    pub average_response: String,
    pub max_response: String,
    pub min_response: String,
    #[serde(default)]
    pub drain_nodes: Option<String>,
}

/// The metrics published once per cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    ActiveNodes,
    UnresponsiveNodes,
    AverageResponse,
    MaxResponse,
    MinResponse,
    DrainNodes,
}
