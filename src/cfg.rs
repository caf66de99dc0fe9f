//! Dashboard configuration
#[cfg(feature = "html")]
use maud::{html, Markup, Render};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::panel::{DEFAULT_EASING, DEFAULT_TRANSITION_MS};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parsing(#[from] serde_json::Error),
}

fn default_pass_class() -> String {
    "is-success".to_string()
}

fn default_fail_class() -> String {
    "is-danger".to_string()
}

fn default_transition_ms() -> u32 {
    DEFAULT_TRANSITION_MS
}

fn default_easing() -> String {
    DEFAULT_EASING.to_string()
}

fn default_true() -> bool {
    true
}

/// [DashboardStyle] carries every style value the rendition consumes.
/// There is no ambient theme: hosts that restyle the dashboard pass their
/// values here explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStyle {
    /// CSS class of the Pass chip
    #[serde(default = "default_pass_class")]
    pub pass_class: String,
    /// CSS class of the Fail chip
    #[serde(default = "default_fail_class")]
    pub fail_class: String,
    /// Chevron transition duration [ms]
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u32,
    /// Chevron transition easing
    #[serde(default = "default_easing")]
    pub easing: String,
}

impl Default for DashboardStyle {
    fn default() -> Self {
        Self {
            pass_class: default_pass_class(),
            fail_class: default_fail_class(),
            transition_ms: default_transition_ms(),
            easing: default_easing(),
        }
    }
}

/// [DashboardConfig] parametrizes one dashboard synthesis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Rendition style values
    #[serde(default)]
    pub style: DashboardStyle,
    /// Panels of failing checks start expanded
    #[serde(default = "default_true")]
    pub expand_failures: bool,
    /// Every panel starts expanded, regardless of verdict
    #[serde(default)]
    pub expand_all: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            style: DashboardStyle::default(),
            expand_failures: true,
            expand_all: false,
        }
    }
}

impl DashboardConfig {
    /// Parses a [DashboardConfig] from JSON content
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let cfg = serde_json::from_str(content)?;
        Ok(cfg)
    }
    /// Copies Self with custom style values
    pub fn with_style(&self, style: DashboardStyle) -> Self {
        let mut s = self.clone();
        s.style = style;
        s
    }
}

#[cfg(feature = "html")]
impl Render for DashboardConfig {
    fn render(&self) -> Markup {
        html! {
            div class="table-container" {
                table class="table is-bordered" {
                    tbody {
                        tr {
                            th class="is-info" {
                                "Expand failing panels"
                            }
                            td {
                                (self.expand_failures.to_string())
                            }
                        }
                        tr {
                            th class="is-info" {
                                "Expand all panels"
                            }
                            td {
                                (self.expand_all.to_string())
                            }
                        }
                        tr {
                            th class="is-info" {
                                "Chevron transition"
                            }
                            td {
                                (format!("{} ms {}", self.style.transition_ms, self.style.easing))
                            }
                        }
                    }
                }
            }
        }
    }
}
