//! Satellite metadata snapshots
use std::collections::HashMap;

use crate::status::{SatelliteStatus, HZ_PER_MHZ};
use gnss::prelude::SV;

/// [SignalKey] identifies one signal: a satellite vehicle and the carrier
/// it was received on. Two reports of the same signal collapse onto the
/// same entry of a [SatelliteMetadata] grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignalKey(String);

impl SignalKey {
    /// Builds the key identifying (sv, carrier)
    pub fn new(sv: SV, carrier_frequency_hz: f64) -> Self {
        Self(format!("{} {:.3}", sv, carrier_frequency_hz / HZ_PER_MHZ))
    }
}

impl From<&SatelliteStatus> for SignalKey {
    fn from(status: &SatelliteStatus) -> Self {
        Self::new(status.sv, status.carrier_frequency_hz)
    }
}

impl std::fmt::Display for SignalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// [SatelliteMetadata] is an immutable snapshot of pre-classified signal
/// anomalies, built by the upstream aggregator and consumed wholesale by
/// one dashboard synthesis. Empty groupings are the healthy case.
#[derive(Debug, Clone, Default)]
pub struct SatelliteMetadata {
    /// Signals whose carrier frequency matched no known band
    pub unknown_carriers: HashMap<SignalKey, SatelliteStatus>,
    /// Distinct signals reported with the same carrier frequency
    pub duplicate_carriers: HashMap<SignalKey, SatelliteStatus>,
    /// Signals from one satellite reported at diverging azimuth/elevation
    pub mismatched_azimuth_elevation: HashMap<SignalKey, SatelliteStatus>,
    /// Total satellites in view
    pub num_sats_total: usize,
    /// Total signals in view
    pub num_signals_total: usize,
}

impl SatelliteMetadata {
    /// Builds a clean snapshot: totals only, no anomaly recorded
    pub fn new(num_sats_total: usize, num_signals_total: usize) -> Self {
        Self {
            num_sats_total,
            num_signals_total,
            ..Default::default()
        }
    }
    /// Records a signal received on an unknown carrier frequency
    pub fn insert_unknown_carrier(&mut self, status: SatelliteStatus) {
        self.unknown_carriers.insert(SignalKey::from(&status), status);
    }
    /// Records a signal sharing its carrier frequency with another one
    pub fn insert_duplicate_carrier(&mut self, status: SatelliteStatus) {
        self.duplicate_carriers.insert(SignalKey::from(&status), status);
    }
    /// Records a signal whose almanac angles diverge from its siblings
    pub fn insert_mismatched_azimuth_elevation(&mut self, status: SatelliteStatus) {
        self.mismatched_azimuth_elevation
            .insert(SignalKey::from(&status), status);
    }
}
