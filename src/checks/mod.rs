//! Signal quality checks.
//!
//! Each check is a pure, total function of its inputs: it derives a
//! [Verdict], two text identifiers and the list of offending signals,
//! and nothing here can fail or caches anything between syntheses.
use std::collections::HashMap;

use itertools::Itertools;
use log::debug;
use strum_macros::EnumIter;

use crate::context::DashboardContext;
use crate::metadata::SignalKey;
use crate::status::{format_carrier_mhz, format_degrees, SatelliteStatus};
use crate::text::{resolved, TextKey, TextResolver};

pub mod carrier;
pub mod geometry;
pub mod rollover;

/// [Verdict] is the tri-state outcome of one quality check
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Check passed
    Pass,
    /// Check failed, offending signals listed as evidence
    Fail,
    /// Cannot be concluded from current inputs
    Unknown,
}

/// The quality checks this dashboard performs, in rendition order
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum CheckKind {
    ValidCarrierFrequencies,
    DuplicateCarrierFrequencies,
    MismatchedAzimuthElevation,
    GpsWeekRollover,
}

/// [EvidenceRow] is one offending signal backing a failed check
#[derive(Debug, Clone, PartialEq)]
pub struct EvidenceRow {
    /// The offending signal
    pub status: SatelliteStatus,
    // only the azimuth/elevation check reports the diverging angles
    include_angles: bool,
}

impl EvidenceRow {
    fn new(status: SatelliteStatus) -> Self {
        Self {
            status,
            include_angles: false,
        }
    }
    fn with_angles(status: SatelliteStatus) -> Self {
        Self {
            status,
            include_angles: true,
        }
    }
    /// Formats this row as one bullet line: constellation, PRN#, carrier
    /// frequency, and (azimuth/elevation check only) the almanac angles.
    pub fn format(&self, resolver: &dyn TextResolver) -> String {
        let mut line = format!(
            "{:X}, ID {}, {}",
            self.status.sv.constellation,
            self.status.sv.prn,
            format_carrier_mhz(self.status.carrier_frequency_hz),
        );
        if self.include_angles {
            if let Some(elevation) = self.status.elevation_degrees {
                line.push_str(&format!(
                    ", {} {}",
                    resolved(resolver, TextKey::ElevationLabel),
                    format_degrees(elevation),
                ));
            }
            if let Some(azimuth) = self.status.azimuth_degrees {
                line.push_str(&format!(
                    ", {} {}",
                    resolved(resolver, TextKey::AzimuthLabel),
                    format_degrees(azimuth),
                ));
            }
        }
        line
    }
}

/// [CheckReport] is the outcome of one quality check, ready for rendition
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Which check produced this report
    pub kind: CheckKind,
    /// Derived outcome
    pub verdict: Verdict,
    /// Title text identifier
    pub title: TextKey,
    /// Description text identifier, matching the verdict
    pub description: TextKey,
    /// Offending signals, constellation first then PRN# ascending.
    /// Always empty when the check passes.
    pub evidence: Vec<EvidenceRow>,
}

/// Runs every check over this context, in dashboard order
pub fn synthesize(ctx: &DashboardContext) -> Vec<CheckReport> {
    let reports = vec![
        carrier::valid_carrier_frequencies(&ctx.metadata),
        carrier::duplicate_carrier_frequencies(&ctx.metadata),
        geometry::mismatched_azimuth_elevation(&ctx.metadata),
        rollover::gps_week_rollover(&ctx.fix, ctx.fix_state, ctx.now),
    ];
    for report in &reports {
        debug!(
            "{:?}: {:?} ({} offending signals)",
            report.kind,
            report.verdict,
            report.evidence.len()
        );
    }
    reports
}

/*
 * Sorts a grouping's signals by constellation first,
 * then PRN# ascending within each constellation.
 */
fn sorted_signals(grouping: &HashMap<SignalKey, SatelliteStatus>) -> Vec<SatelliteStatus> {
    grouping
        .values()
        .copied()
        .sorted_by_key(|status| (status.sv.constellation, status.sv.prn))
        .collect()
}

fn verdict_from_emptiness(grouping: &HashMap<SignalKey, SatelliteStatus>) -> Verdict {
    if grouping.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::metadata::SatelliteMetadata;
    use crate::text::EnglishText;
    use gnss::prelude::{Constellation, SV};

    #[test]
    fn evidence_sorted_by_gnss_then_prn() {
        let mut metadata = SatelliteMetadata::new(6, 6);
        for (constellation, prn) in [
            (Constellation::Glonass, 7),
            (Constellation::GPS, 30),
            (Constellation::Galileo, 1),
            (Constellation::GPS, 2),
            (Constellation::Glonass, 3),
        ] {
            metadata.insert_unknown_carrier(SatelliteStatus::new(
                SV::new(constellation, prn),
                1575420000.0,
            ));
        }
        let sorted = sorted_signals(&metadata.unknown_carriers);
        let order: Vec<_> = sorted
            .iter()
            .map(|s| (s.sv.constellation, s.sv.prn))
            .collect();
        assert_eq!(
            order,
            vec![
                (Constellation::GPS, 2),
                (Constellation::GPS, 30),
                (Constellation::Glonass, 3),
                (Constellation::Glonass, 7),
                (Constellation::Galileo, 1),
            ],
        );
    }
    #[test]
    fn row_formatting() {
        let status = SatelliteStatus::new(SV::new(Constellation::GPS, 5), 1575420000.0);
        let row = EvidenceRow::new(status);
        assert_eq!(row.format(&EnglishText {}), "GPS, ID 5, 1575.420 MHz");
    }
    #[test]
    fn angles_reported_only_when_requested() {
        let status = SatelliteStatus::new(SV::new(Constellation::Glonass, 12), 1602000000.0)
            .with_azimuth_elevation(13.4, 25.0);
        // angle fields exist on the record, plain rows still omit them
        let row = EvidenceRow::new(status);
        assert_eq!(row.format(&EnglishText {}), "GLO, ID 12, 1602.000 MHz");
        let row = EvidenceRow::with_angles(status);
        assert_eq!(
            row.format(&EnglishText {}),
            "GLO, ID 12, 1602.000 MHz, Elev: 25°, Az: 13.4°",
        );
    }
    #[test]
    fn angles_missing_from_record() {
        let status = SatelliteStatus::new(SV::new(Constellation::BeiDou, 20), 1561098000.0);
        let row = EvidenceRow::with_angles(status);
        assert_eq!(row.format(&EnglishText {}), "BDS, ID 20, 1561.098 MHz");
    }
}
