//! User visible text identifiers
use strum_macros::EnumIter;

/// [TextKey] identifies one user visible string. The dashboard only ever
/// emits identifiers: the hosting application resolves them against its own
/// localized tables through [TextResolver], and [TextKey::english] is the
/// built-in fallback.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum TextKey {
    DashboardErrorCheck,
    SatellitesLabel,
    SignalsLabel,
    ValidCfsTitle,
    ValidCfsDescriptionPass,
    ValidCfsDescriptionFail,
    DuplicateCfsTitle,
    DuplicateCfsDescriptionPass,
    DuplicateCfsDescriptionFail,
    MismatchAzimuthElevationTitle,
    MismatchAzimuthElevationPass,
    MismatchAzimuthElevationFail,
    GpsWeekRolloverTitle,
    GpsWeekRolloverPass,
    GpsWeekRolloverFail,
    GpsWeekRolloverUnknown,
    ElevationLabel,
    AzimuthLabel,
    PassChip,
    FailChip,
}

impl TextKey {
    /// Stable identifier, for lookup in external localization tables
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::DashboardErrorCheck => "dashboard_error_check",
            Self::SatellitesLabel => "dashboard_satellites_label",
            Self::SignalsLabel => "dashboard_signals_label",
            Self::ValidCfsTitle => "dashboard_valid_cfs_title",
            Self::ValidCfsDescriptionPass => "dashboard_valid_cfs_description_pass",
            Self::ValidCfsDescriptionFail => "dashboard_valid_cfs_description_fail",
            Self::DuplicateCfsTitle => "dashboard_duplicate_cfs_title",
            Self::DuplicateCfsDescriptionPass => "dashboard_duplicate_cfs_description_pass",
            Self::DuplicateCfsDescriptionFail => "dashboard_duplicate_cfs_description_fail",
            Self::MismatchAzimuthElevationTitle => "dashboard_mismatch_azimuth_elevation_title",
            Self::MismatchAzimuthElevationPass => "dashboard_mismatch_azimuth_elevation_pass",
            Self::MismatchAzimuthElevationFail => "dashboard_mismatch_azimuth_elevation_fail",
            Self::GpsWeekRolloverTitle => "dashboard_gps_week_rollover_title",
            Self::GpsWeekRolloverPass => "dashboard_gps_week_rollover_pass",
            Self::GpsWeekRolloverFail => "dashboard_gps_week_rollover_fail",
            Self::GpsWeekRolloverUnknown => "dashboard_gps_week_rollover_unknown",
            Self::ElevationLabel => "elevation_column_label",
            Self::AzimuthLabel => "azimuth_column_label",
            Self::PassChip => "dashboard_pass",
            Self::FailChip => "dashboard_fail",
        }
    }
    /// Built-in English text for this key
    pub fn english(&self) -> &'static str {
        match self {
            Self::DashboardErrorCheck => "Error check",
            Self::SatellitesLabel => "Satellites",
            Self::SignalsLabel => "Signals",
            Self::ValidCfsTitle => "Valid carrier frequencies",
            Self::ValidCfsDescriptionPass => {
                "All signal carrier frequencies match known frequencies"
            },
            Self::ValidCfsDescriptionFail => {
                "Signals were observed on unknown carrier frequencies"
            },
            Self::DuplicateCfsTitle => "Duplicate carrier frequencies",
            Self::DuplicateCfsDescriptionPass => "No duplicate signal carrier frequencies",
            Self::DuplicateCfsDescriptionFail => {
                "The same carrier frequency was reported for several signals of one satellite"
            },
            Self::MismatchAzimuthElevationTitle => "Azimuth and elevation mismatch",
            Self::MismatchAzimuthElevationPass => {
                "Signals from the same satellite agree on azimuth and elevation"
            },
            Self::MismatchAzimuthElevationFail => {
                "Signals from the same satellite disagree on azimuth or elevation"
            },
            Self::GpsWeekRolloverTitle => "GPS week rollover",
            Self::GpsWeekRolloverPass => "Receiver date looks correct",
            Self::GpsWeekRolloverFail => {
                "Receiver date is wrong, possibly a GPS week rollover fault"
            },
            Self::GpsWeekRolloverUnknown => "Waiting for a fix to check the receiver date",
            Self::ElevationLabel => "Elev:",
            Self::AzimuthLabel => "Az:",
            Self::PassChip => "Pass",
            Self::FailChip => "Fail",
        }
    }
}

/// External string lookup by identifier. Return None to fall back to the
/// built-in English table.
pub trait TextResolver {
    fn resolve(&self, key: TextKey) -> Option<&str>;
}

/// [EnglishText] is the built-in resolver: every key falls back to
/// [TextKey::english].
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishText;

impl TextResolver for EnglishText {
    fn resolve(&self, _key: TextKey) -> Option<&str> {
        None
    }
}

pub(crate) fn resolved(resolver: &dyn TextResolver, key: TextKey) -> String {
    resolver
        .resolve(key)
        .map(str::to_string)
        .unwrap_or_else(|| key.english().to_string())
}
