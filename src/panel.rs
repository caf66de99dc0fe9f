//! Collapsible panel state
#[cfg(feature = "html")]
use maud::{html, Markup, Render};

/// Chevron rotation target when expanded [°]
pub const EXPANDED_ROTATION_DEGREES: f64 = 180.0;
/// Chevron rotation target when collapsed [°]
pub const COLLAPSED_ROTATION_DEGREES: f64 = 0.0;
/// Default chevron transition duration [ms]
pub const DEFAULT_TRANSITION_MS: u32 = 300;
/// Default chevron transition easing
pub const DEFAULT_EASING: &str = "ease-in-out";

/// Observer notified on every toggle, with the new expanded state
pub type ToggleObserver = Box<dyn FnMut(bool)>;

/// [CollapsiblePanel] holds the one bit of retained state an expandable
/// card carries: whether it is currently expanded. The state is seeded
/// once at construction and survives every later rendition, it only ever
/// changes through [CollapsiblePanel::toggle]. The chevron rotation target
/// is a pure function of the expanded state: 180° expanded, 0° collapsed.
/// Scheduling the actual transition belongs to the hosting renderer, this
/// type only declares the target angle and the transition parameters.
pub struct CollapsiblePanel {
    expanded: bool,
    observer: Option<ToggleObserver>,
    transition_ms: u32,
    easing: String,
}

impl CollapsiblePanel {
    /// Builds a new panel, seeded expanded or collapsed. The seed applies
    /// on construction only: it never resets an existing panel.
    pub fn new(initial_expanded: bool) -> Self {
        Self {
            expanded: initial_expanded,
            observer: None,
            transition_ms: DEFAULT_TRANSITION_MS,
            easing: DEFAULT_EASING.to_string(),
        }
    }
    /// Registers the observer notified on every toggle
    pub fn on_toggle(mut self, observer: ToggleObserver) -> Self {
        self.observer = Some(observer);
        self
    }
    /// Copies Self with custom transition parameters
    pub fn with_transition(mut self, duration_ms: u32, easing: &str) -> Self {
        self.transition_ms = duration_ms;
        self.easing = easing.to_string();
        self
    }
    /// Flips the expanded state, synchronously notifies the observer with
    /// the new value, and returns it. Cannot fail.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        if let Some(observer) = self.observer.as_mut() {
            observer(self.expanded);
        }
        self.expanded
    }
    /// Current expanded state
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
    /// Chevron rotation target [°], tracking the expanded state only
    pub fn rotation_degrees(&self) -> f64 {
        if self.expanded {
            EXPANDED_ROTATION_DEGREES
        } else {
            COLLAPSED_ROTATION_DEGREES
        }
    }
    /// Declared transition duration [ms]
    pub fn transition_ms(&self) -> u32 {
        self.transition_ms
    }
    /// Declared transition easing
    pub fn easing(&self) -> &str {
        &self.easing
    }
}

impl std::fmt::Debug for CollapsiblePanel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("CollapsiblePanel")
            .field("expanded", &self.expanded)
            .field("transition_ms", &self.transition_ms)
            .field("easing", &self.easing)
            .finish()
    }
}

/// [PanelCard] pairs a panel's retained state with its content for one
/// rendition: the top content is always shown, the expanded content only
/// when the panel is expanded.
#[cfg(feature = "html")]
#[cfg_attr(docrs, doc(cfg(feature = "html")))]
pub struct PanelCard<'a> {
    panel: &'a CollapsiblePanel,
    top: Markup,
    expanded_content: Markup,
}

#[cfg(feature = "html")]
impl<'a> PanelCard<'a> {
    /// Builds a new card over this panel's state
    pub fn new(panel: &'a CollapsiblePanel, top: Markup, expanded_content: Markup) -> Self {
        Self {
            panel,
            top,
            expanded_content,
        }
    }
}

#[cfg(feature = "html")]
impl Render for PanelCard<'_> {
    fn render(&self) -> Markup {
        html! {
            div class="card" {
                div class="card-content" {
                    (self.top.clone())
                    @if self.panel.is_expanded() {
                        div class="content" {
                            (self.expanded_content.clone())
                        }
                    }
                }
                span class="icon card-chevron" style=(format!(
                    "display:inline-block;transform:rotate({}deg);transition:transform {}ms {};",
                    self.panel.rotation_degrees(),
                    self.panel.transition_ms(),
                    self.panel.easing(),
                )) {
                    i class="fa-solid fa-chevron-down" {}
                }
            }
        }
    }
}
