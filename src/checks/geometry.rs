//! Almanac geometry consistency check
use crate::checks::{sorted_signals, verdict_from_emptiness, CheckKind, CheckReport, EvidenceRow, Verdict};
use crate::metadata::SatelliteMetadata;
use crate::text::TextKey;

/// Passes when no satellite was reported at diverging azimuth/elevation by
/// two of its own signals. This is the only check whose evidence rows carry
/// the almanac angles.
pub fn mismatched_azimuth_elevation(metadata: &SatelliteMetadata) -> CheckReport {
    let verdict = verdict_from_emptiness(&metadata.mismatched_azimuth_elevation);
    CheckReport {
        kind: CheckKind::MismatchedAzimuthElevation,
        verdict,
        title: TextKey::MismatchAzimuthElevationTitle,
        description: match verdict {
            Verdict::Pass => TextKey::MismatchAzimuthElevationPass,
            _ => TextKey::MismatchAzimuthElevationFail,
        },
        evidence: sorted_signals(&metadata.mismatched_azimuth_elevation)
            .into_iter()
            .map(EvidenceRow::with_angles)
            .collect(),
    }
}
