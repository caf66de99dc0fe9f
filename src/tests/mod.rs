//! Whole-dashboard tests
use crate::prelude::*;

fn observation_instant() -> Epoch {
    Epoch::from_gregorian_utc_at_midnight(2024, 3, 1)
}

fn clean_context() -> DashboardContext {
    DashboardContext::new(
        SatelliteMetadata::new(12, 31),
        Fix::new(observation_instant()),
        FixState::Acquired,
        observation_instant(),
    )
}

#[test]
fn synthesis_covers_every_check_in_order() {
    let reports = crate::checks::synthesize(&clean_context());
    let kinds: Vec<_> = reports.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CheckKind::ValidCarrierFrequencies,
            CheckKind::DuplicateCarrierFrequencies,
            CheckKind::MismatchedAzimuthElevation,
            CheckKind::GpsWeekRollover,
        ],
    );
    for report in &reports {
        assert_eq!(report.verdict, Verdict::Pass);
        assert!(report.evidence.is_empty());
    }
}

#[test]
fn verdicts_never_cached_across_syntheses() {
    let mut ctx = clean_context();
    assert_eq!(crate::checks::synthesize(&ctx)[0].verdict, Verdict::Pass);
    ctx.metadata.insert_unknown_carrier(SatelliteStatus::new(
        SV::new(Constellation::GPS, 7),
        1575000000.0,
    ));
    assert_eq!(crate::checks::synthesize(&ctx)[0].verdict, Verdict::Fail);
}

#[cfg(feature = "html")]
mod html {
    use super::*;
    use hifitime::Unit;
    use maud::Render;

    #[test]
    fn clean_dashboard_renders_all_green() {
        let report = DashboardReport::new(&clean_context(), DashboardConfig::default());
        let page = report.render().into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("Error check"));
        assert!(page.contains("Valid carrier frequencies"));
        assert!(page.contains("Duplicate carrier frequencies"));
        assert!(page.contains("Azimuth and elevation mismatch"));
        assert!(page.contains("GPS week rollover"));
        assert_eq!(page.matches("is-success").count(), 4);
        assert!(!page.contains("is-danger"));
        assert!(!page.contains("progress"));
    }

    #[test]
    fn awaiting_fix_shows_indeterminate_indicator() {
        let mut ctx = clean_context();
        ctx.fix_state = FixState::NotAcquired;
        let report = DashboardReport::new(&ctx, DashboardConfig::default());
        let page = report.render().into_string();
        assert_eq!(page.matches("is-success").count(), 3);
        assert!(!page.contains("is-danger"));
        assert_eq!(page.matches("progress is-small").count(), 1);
    }

    #[test]
    fn failing_check_expands_and_lists_offenders() {
        let mut ctx = clean_context();
        ctx.metadata.insert_unknown_carrier(SatelliteStatus::new(
            SV::new(Constellation::Glonass, 9),
            1601000000.0,
        ));
        ctx.metadata.insert_unknown_carrier(SatelliteStatus::new(
            SV::new(Constellation::GPS, 22),
            1575000000.0,
        ));
        let report = DashboardReport::new(&ctx, DashboardConfig::default());
        let page = report.render().into_string();
        assert!(page.contains("is-danger"));
        let gps = page.find("GPS, ID 22, 1575.000 MHz").expect("missing GPS row");
        let glonass = page
            .find("GLO, ID 9, 1601.000 MHz")
            .expect("missing Glonass row");
        assert!(gps < glonass, "evidence rows out of order");
        // only the geometry check ever renders angles
        assert!(!page.contains("Elev:"));
        assert!(!page.contains("Az:"));
    }

    #[test]
    fn mismatch_evidence_carries_angles() {
        let mut ctx = clean_context();
        ctx.metadata.insert_mismatched_azimuth_elevation(
            SatelliteStatus::new(SV::new(Constellation::BeiDou, 14), 1561098000.0)
                .with_azimuth_elevation(200.0, 35.5),
        );
        let report = DashboardReport::new(&ctx, DashboardConfig::default());
        let page = report.render().into_string();
        assert!(page.contains("BDS, ID 14, 1561.098 MHz, Elev: 35.5°, Az: 200°"));
    }

    #[test]
    fn collapsed_failure_hides_evidence_until_toggled() {
        let mut ctx = clean_context();
        ctx.metadata.insert_duplicate_carrier(SatelliteStatus::new(
            SV::new(Constellation::Galileo, 5),
            1575420000.0,
        ));
        let cfg = DashboardConfig {
            expand_failures: false,
            ..Default::default()
        };
        let mut report = DashboardReport::new(&ctx, cfg);
        let page = report.render().into_string();
        assert!(!page.contains("GAL, ID 5"));
        assert!(page.contains("rotate(0deg)"));

        let panel = report
            .panel_mut(CheckKind::DuplicateCarrierFrequencies)
            .expect("missing panel");
        assert!(panel.toggle());
        let page = report.render().into_string();
        assert!(page.contains("GAL, ID 5, 1575.420 MHz"));
        assert!(page.contains("rotate(180deg)"));
    }

    #[test]
    fn stale_receiver_date_fails_without_evidence() {
        let mut ctx = clean_context();
        ctx.fix = Fix::new(observation_instant() - 1024.0 * Unit::Week);
        let report = DashboardReport::new(&ctx, DashboardConfig::default());
        assert_eq!(report.checks()[3].verdict, Verdict::Fail);
        assert!(report.checks()[3].evidence.is_empty());
        let page = report.render().into_string();
        assert_eq!(page.matches("is-danger").count(), 1);
    }

    #[test]
    fn external_localization_table() {
        struct Table;
        impl TextResolver for Table {
            fn resolve(&self, key: TextKey) -> Option<&str> {
                match key {
                    TextKey::DashboardErrorCheck => Some("Vérification des erreurs"),
                    _ => None,
                }
            }
        }
        let report = DashboardReport::new(&clean_context(), DashboardConfig::default())
            .with_resolver(Box::new(Table {}));
        let page = report.render().into_string();
        assert!(page.contains("Vérification des erreurs"));
        // untranslated keys fall back to English
        assert!(page.contains("Valid carrier frequencies"));
    }
}
