// Project imports
use crate::probe::types::HealthProber;
use crate::providers::NodeDirectory;
use crate::reporter::types::StatusPage;

/// Drives the periodic health-check cycle: enumerate both pools, fan out
/// probes over the main pool, aggregate, and publish.
///
/// Owns all cycle-local data; records, probe results, and stats never
/// survive past the cycle that produced them. The resolved zone id is
/// the only state shared across cycles, written exactly once at init.
pub struct Monitor<D: NodeDirectory> {
    pub directory: D,
    pub prober: HealthProber,
    pub statuspage: StatusPage,
    pub zone_id: String,
    pub domain: String,
    pub drain_domain: String,
}
