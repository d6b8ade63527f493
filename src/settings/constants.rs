/// Example configuration
pub const DEFAULT_CONFIG: &str = r#"
# Logging configuration
[log]
# Level can be "error", "warn", "info", "debug", or "trace"
level = "info"

# Health-check cycle configuration
[check]
# Cycle interval in seconds
interval = 60
# Per-probe timeout in seconds; keep it well below the interval
probe_timeout = 15

# Cloudflare account configuration
[cloudflare]
api_key = "your_api_key"
email = "you@example.org"
zone = "example.org"
# Pool currently serving live traffic
domain = "pool.example.org"
# Pool removed from serving, pending decommission
drain_domain = "drain.example.org"

# Status dashboard configuration
[statuspage]
api_key = "your_statuspage_key"
page_id = "your_page_id"

# Dashboard metric ids, one per published metric
[statuspage.metrics]
active_nodes = "metric_id"
unresponsive_nodes = "metric_id"
average_response = "metric_id"
max_response = "metric_id"
min_response = "metric_id"
# Optional: also publish the drain pool count
# drain_nodes = "metric_id"
"#;
