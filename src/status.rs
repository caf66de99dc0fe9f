//! Satellite signal records and numeric formatting
use gnss::prelude::SV;

pub(crate) const HZ_PER_MHZ: f64 = 1.0E6;

/// [SatelliteStatus] is one received signal, as classified by the upstream
/// aggregator. Read-only input to every check: this crate never recomputes
/// or repairs any of its fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteStatus {
    /// Satellite vehicle this signal was received from
    pub sv: SV,
    /// Carrier frequency [Hz]
    pub carrier_frequency_hz: f64,
    /// Azimuth at reception time [°], when the almanac provided one
    pub azimuth_degrees: Option<f64>,
    /// Elevation at reception time [°], when the almanac provided one
    pub elevation_degrees: Option<f64>,
}

impl SatelliteStatus {
    /// Builds a new [SatelliteStatus] without almanac angles
    pub fn new(sv: SV, carrier_frequency_hz: f64) -> Self {
        Self {
            sv,
            carrier_frequency_hz,
            azimuth_degrees: None,
            elevation_degrees: None,
        }
    }
    /// Copies Self with almanac azimuth and elevation [°]
    pub fn with_azimuth_elevation(&self, azimuth_degrees: f64, elevation_degrees: f64) -> Self {
        let mut s = *self;
        s.azimuth_degrees = Some(azimuth_degrees);
        s.elevation_degrees = Some(elevation_degrees);
        s
    }
    /// Carrier frequency scaled to MHz
    pub fn carrier_frequency_mhz(&self) -> f64 {
        self.carrier_frequency_hz / HZ_PER_MHZ
    }
}

/// Formats a carrier frequency in MHz with fixed millihertz resolution,
/// like "1575.420 MHz".
pub fn format_carrier_mhz(carrier_frequency_hz: f64) -> String {
    format!("{:.3} MHz", carrier_frequency_hz / HZ_PER_MHZ)
}

/// Formats an angle in degrees, trimming meaningless trailing decimals:
/// 25.0 becomes "25°", 13.4 stays "13.4°".
pub fn format_degrees(value: f64) -> String {
    let text = format!("{:.1}", value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    format!("{}°", trimmed)
}
