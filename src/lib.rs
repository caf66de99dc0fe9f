//! GNSS signal quality error checks with HTML dashboard rendition.
//!
//! This library consumes pre-classified satellite signal anomalies
//! ([SatelliteMetadata]) together with the current position fix, derives a
//! tri-state verdict for each quality check and renders the outcome as an
//! HTML dashboard. Signal classification itself (matching carriers against
//! known bands, spotting duplicates, comparing almanac angles) belongs to
//! the upstream aggregator, never to this crate.
#![cfg_attr(docrs, feature(doc_cfg))]
extern crate gnss_rs as gnss;

mod cfg;
mod context;
mod fix;
mod metadata;
mod status;
mod text;

pub mod checks;
pub mod panel;

#[cfg(feature = "html")]
#[cfg_attr(docrs, doc(cfg(feature = "html")))]
pub mod report;

#[cfg(test)]
mod tests;

pub use cfg::{ConfigError, DashboardConfig, DashboardStyle};
pub use context::DashboardContext;
pub use fix::{Fix, FixState};
pub use metadata::{SatelliteMetadata, SignalKey};
pub use status::SatelliteStatus;
pub use text::{EnglishText, TextKey, TextResolver};

pub mod prelude {
    pub use crate::cfg::{ConfigError, DashboardConfig, DashboardStyle};
    pub use crate::checks::{CheckKind, CheckReport, EvidenceRow, Verdict};
    pub use crate::context::DashboardContext;
    pub use crate::fix::{Fix, FixState};
    pub use crate::metadata::{SatelliteMetadata, SignalKey};
    pub use crate::panel::CollapsiblePanel;
    #[cfg(feature = "html")]
    pub use crate::panel::PanelCard;
    #[cfg(feature = "html")]
    pub use crate::report::DashboardReport;
    pub use crate::status::SatelliteStatus;
    pub use crate::text::{EnglishText, TextKey, TextResolver};
    // Pub re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch};
}
