//! Receiver date validity (GPS week rollover faults)
use hifitime::{Epoch, Unit};

use crate::checks::{CheckKind, CheckReport, Verdict};
use crate::fix::{Fix, FixState};
use crate::text::TextKey;

/// Receiver dates farther than this from the observation instant are
/// considered wrong. A week rollover fault shifts the receiver date by
/// 1024 weeks, far outside this window.
pub const VALIDITY_WINDOW_DAYS: f64 = 15.0;

/// True if this receiver timestamp is plausible at instant "now"
pub fn is_time_valid(epoch: Epoch, now: Epoch) -> bool {
    (now - epoch).abs() < VALIDITY_WINDOW_DAYS * Unit::Day
}

/// Concludes on the receiver date. Without a fix the receiver date proves
/// nothing yet, so the verdict remains [Verdict::Unknown] whatever the
/// timestamp says. This check never produces evidence rows.
pub fn gps_week_rollover(fix: &Fix, fix_state: FixState, now: Epoch) -> CheckReport {
    let (verdict, description) = match fix_state {
        FixState::NotAcquired => (Verdict::Unknown, TextKey::GpsWeekRolloverUnknown),
        FixState::Acquired => {
            if is_time_valid(fix.epoch, now) {
                (Verdict::Pass, TextKey::GpsWeekRolloverPass)
            } else {
                (Verdict::Fail, TextKey::GpsWeekRolloverFail)
            }
        },
    };
    CheckReport {
        kind: CheckKind::GpsWeekRollover,
        verdict,
        title: TextKey::GpsWeekRolloverTitle,
        description,
        evidence: Vec::new(),
    }
}
