//! Dashboard synthesis and HTML rendition
use maud::{html, Markup, Render, DOCTYPE};

use crate::cfg::DashboardConfig;
use crate::checks::{self, CheckKind, CheckReport, Verdict};
use crate::context::DashboardContext;
use crate::panel::{CollapsiblePanel, PanelCard};
use crate::text::{resolved, EnglishText, TextKey, TextResolver};

/// [DashboardReport] runs every quality check over one context and renders
/// the outcome as a standalone HTML page. Check verdicts are derived once
/// per synthesis; panel expanded states are retained across renditions and
/// only change through [DashboardReport::panel_mut] + toggle.
pub struct DashboardReport {
    cfg: DashboardConfig,
    checks: Vec<CheckReport>,
    // one panel per check, indexed like self.checks
    panels: Vec<CollapsiblePanel>,
    resolver: Box<dyn TextResolver>,
    num_sats_total: usize,
    num_signals_total: usize,
}

impl DashboardReport {
    /// Synthesizes a new dashboard: runs every check and seeds one
    /// collapsible panel per check. Failing checks start expanded when the
    /// configuration says so.
    pub fn new(ctx: &DashboardContext, cfg: DashboardConfig) -> Self {
        let checks = checks::synthesize(ctx);
        let panels = checks
            .iter()
            .map(|check| {
                let expanded = match check.verdict {
                    Verdict::Fail => cfg.expand_all || cfg.expand_failures,
                    _ => cfg.expand_all,
                };
                CollapsiblePanel::new(expanded)
                    .with_transition(cfg.style.transition_ms, &cfg.style.easing)
            })
            .collect();
        Self {
            checks,
            panels,
            num_sats_total: ctx.metadata.num_sats_total,
            num_signals_total: ctx.metadata.num_signals_total,
            resolver: Box::new(EnglishText {}),
            cfg,
        }
    }
    /// Replaces the built-in English table with an external localization
    /// source
    pub fn with_resolver(mut self, resolver: Box<dyn TextResolver>) -> Self {
        self.resolver = resolver;
        self
    }
    /// Synthesized check outcomes, in dashboard order
    pub fn checks(&self) -> &[CheckReport] {
        &self.checks
    }
    /// Mutable access to one check's panel, for the host to wire its
    /// tap/activation interaction to [CollapsiblePanel::toggle]
    pub fn panel_mut(&mut self, kind: CheckKind) -> Option<&mut CollapsiblePanel> {
        let index = self.checks.iter().position(|check| check.kind == kind)?;
        self.panels.get_mut(index)
    }
    fn text(&self, key: TextKey) -> String {
        resolved(self.resolver.as_ref(), key)
    }
    /*
     * Verdict to visual mapping, total: one visual state per verdict,
     * no fallback arm.
     */
    fn chip(&self, verdict: Verdict) -> Markup {
        match verdict {
            Verdict::Pass => html! {
                span class=(format!("tag {}", self.cfg.style.pass_class)) {
                    (self.text(TextKey::PassChip))
                }
            },
            Verdict::Fail => html! {
                span class=(format!("tag {}", self.cfg.style.fail_class)) {
                    (self.text(TextKey::FailChip))
                }
            },
            Verdict::Unknown => html! {
                progress class="progress is-small is-info" max="100" {}
            },
        }
    }
    fn section(&self, check: &CheckReport, panel: &CollapsiblePanel) -> Markup {
        let top = html! {
            div class="level" {
                div class="level-left" {
                    div {
                        p class="title is-5" {
                            (self.text(check.title))
                        }
                        p class="subtitle is-6" {
                            (self.text(check.description))
                        }
                    }
                }
                div class="level-right" {
                    (self.chip(check.verdict))
                }
            }
        };
        let evidence = html! {
            ul {
                @for row in check.evidence.iter() {
                    li {
                        (row.format(self.resolver.as_ref()))
                    }
                }
            }
        };
        PanelCard::new(panel, top, evidence).render()
    }
}

impl Render for DashboardReport {
    fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@0.9.4/css/bulma.min.css";
                    script defer src="https://use.fontawesome.com/releases/v5.3.1/js/all.js" {}
                    title {
                        (self.text(TextKey::DashboardErrorCheck))
                    }
                }
                body {
                    div class="section" {
                        h2 class="title" {
                            (self.text(TextKey::DashboardErrorCheck))
                        }
                        div class="table-container" {
                            table class="table is-bordered" {
                                tbody {
                                    tr {
                                        th {
                                            (self.text(TextKey::SatellitesLabel))
                                        }
                                        td {
                                            (self.num_sats_total.to_string())
                                        }
                                        th {
                                            (self.text(TextKey::SignalsLabel))
                                        }
                                        td {
                                            (self.num_signals_total.to_string())
                                        }
                                    }
                                }
                            }
                        }
                        @for (check, panel) in self.checks.iter().zip(self.panels.iter()) {
                            div class="block" {
                                (self.section(check, panel))
                            }
                        }
                    }
                }
            }
        }
    }
}
