//! Dashboard synthesis context
use hifitime::Epoch;

use crate::fix::{Fix, FixState};
use crate::metadata::SatelliteMetadata;

/// [DashboardContext] bundles everything one dashboard synthesis consumes:
/// the anomaly snapshot, the current fix and the observation instant.
/// All of it is pulled synchronously by the host per synthesis, there is
/// no subscription to tear down.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    /// Pre-classified signal anomalies
    pub metadata: SatelliteMetadata,
    /// Most recent position solution
    pub fix: Fix,
    /// Whether that solution is currently valid
    pub fix_state: FixState,
    /// Instant the snapshot was taken, used to judge receiver time validity
    pub now: Epoch,
}

impl DashboardContext {
    /// Builds a new [DashboardContext] observed at instant "now"
    pub fn new(metadata: SatelliteMetadata, fix: Fix, fix_state: FixState, now: Epoch) -> Self {
        Self {
            metadata,
            fix,
            fix_state,
            now,
        }
    }
}
