//! Carrier frequency sanity checks
use crate::checks::{sorted_signals, verdict_from_emptiness, CheckKind, CheckReport, EvidenceRow, Verdict};
use crate::metadata::SatelliteMetadata;
use crate::text::TextKey;

/// Passes when every observed signal was received on a known carrier
/// frequency. Offending signals are listed as evidence otherwise.
pub fn valid_carrier_frequencies(metadata: &SatelliteMetadata) -> CheckReport {
    let verdict = verdict_from_emptiness(&metadata.unknown_carriers);
    CheckReport {
        kind: CheckKind::ValidCarrierFrequencies,
        verdict,
        title: TextKey::ValidCfsTitle,
        description: match verdict {
            Verdict::Pass => TextKey::ValidCfsDescriptionPass,
            _ => TextKey::ValidCfsDescriptionFail,
        },
        evidence: sorted_signals(&metadata.unknown_carriers)
            .into_iter()
            .map(EvidenceRow::new)
            .collect(),
    }
}

/// Passes when no carrier frequency was reported twice for one satellite
pub fn duplicate_carrier_frequencies(metadata: &SatelliteMetadata) -> CheckReport {
    let verdict = verdict_from_emptiness(&metadata.duplicate_carriers);
    CheckReport {
        kind: CheckKind::DuplicateCarrierFrequencies,
        verdict,
        title: TextKey::DuplicateCfsTitle,
        description: match verdict {
            Verdict::Pass => TextKey::DuplicateCfsDescriptionPass,
            _ => TextKey::DuplicateCfsDescriptionFail,
        },
        evidence: sorted_signals(&metadata.duplicate_carriers)
            .into_iter()
            .map(EvidenceRow::new)
            .collect(),
    }
}
