// Current module imports
use super::errors::{StatusPageError, StatusPageValidationError};
use super::functions::create_reqwest_client;
use super::types::{Metric, MetricBindings, SpConfig, StatusPage};

impl StatusPage {
    /// Builds a client bound to the configured page and API key.
    pub fn new(config: SpConfig) -> Result<Self, StatusPageError> {
        let client = create_reqwest_client(&config)?;
        Ok(Self { config, client })
    }

    /// Whether a dashboard metric id is bound for `metric`.
    pub fn has_binding(&self, metric: Metric) -> bool {
        self.config.metrics.id_for(metric).is_some()
    }
}

impl Metric {
    /// Human-readable metric name, as shown on the dashboard.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::ActiveNodes => "active nodes",
            Metric::UnresponsiveNodes => "unresponsive nodes",
            Metric::AverageResponse => "average response",
            Metric::MaxResponse => "max response",
            Metric::MinResponse => "min response",
            Metric::DrainNodes => "drain nodes",
        }
    }
}

impl MetricBindings {
    /// Looks up the provider-side id for a metric.
    pub fn id_for(&self, metric: Metric) -> Option<&str> {
        match metric {
            Metric::ActiveNodes => Some(self.active_nodes.as_str()),
            Metric::UnresponsiveNodes => Some(self.unresponsive_nodes.as_str()),
            Metric::AverageResponse => Some(self.average_response.as_str()),
            Metric::MaxResponse => Some(self.max_response.as_str()),
            Metric::MinResponse => Some(self.min_response.as_str()),
            Metric::DrainNodes => self.drain_nodes.as_deref(),
        }
    }

    pub fn validate(&self) -> Result<(), StatusPageValidationError> {
        let required = [
            (Metric::ActiveNodes, &self.active_nodes),
            (Metric::UnresponsiveNodes, &self.unresponsive_nodes),
            (Metric::AverageResponse, &self.average_response),
            (Metric::MaxResponse, &self.max_response),
            (Metric::MinResponse, &self.min_response),
        ];

        for (metric, id) in required {
            if id.trim().is_empty() {
                return Err(StatusPageValidationError::EmptyMetricId(metric.name()));
            }
        }

        if let Some(drain_id) = &self.drain_nodes {
            if drain_id.trim().is_empty() {
                return Err(StatusPageValidationError::EmptyMetricId(
                    Metric::DrainNodes.name(),
                ));
            }
        }

        Ok(())
    }
}

impl SpConfig {
    pub fn validate(&self) -> Result<(), StatusPageValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(StatusPageValidationError::MissingApiKey);
        }

        if self.page_id.trim().is_empty() {
            return Err(StatusPageValidationError::MissingPageId);
        }

        self.metrics.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings() -> MetricBindings {
        MetricBindings {
            active_nodes: "m-active".to_string(),
            unresponsive_nodes: "m-unresponsive".to_string(),
            average_response: "m-avg".to_string(),
            max_response: "m-max".to_string(),
            min_response: "m-min".to_string(),
            drain_nodes: None,
        }
    }

    #[test]
    fn required_metrics_resolve_to_their_ids() {
        let bindings = bindings();

        assert_eq!(bindings.id_for(Metric::ActiveNodes), Some("m-active"));
        assert_eq!(bindings.id_for(Metric::MinResponse), Some("m-min"));
    }

    #[test]
    fn unbound_drain_metric_resolves_to_none() {
        assert_eq!(bindings().id_for(Metric::DrainNodes), None);

        let mut bound = bindings();
        bound.drain_nodes = Some("m-drain".to_string());
        assert_eq!(bound.id_for(Metric::DrainNodes), Some("m-drain"));
    }

    #[test]
    fn empty_required_metric_id_fails_validation() {
        let mut bindings = bindings();
        bindings.max_response = String::new();

        assert!(matches!(
            bindings.validate(),
            Err(StatusPageValidationError::EmptyMetricId("max response"))
        ));
    }

    #[test]
    fn metric_names_match_the_dashboard_labels() {
        assert_eq!(Metric::ActiveNodes.name(), "active nodes");
        assert_eq!(Metric::UnresponsiveNodes.name(), "unresponsive nodes");
        assert_eq!(Metric::AverageResponse.name(), "average response");
        assert_eq!(Metric::MaxResponse.name(), "max response");
        assert_eq!(Metric::MinResponse.name(), "min response");
    }
}
