use crate::anchor::AnchorOutcome;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavMenu {
    #[default]
    Closed,
    Open,
}

impl NavMenu {
    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// State after a link click has been handled.
    pub fn after_anchor(self, outcome: AnchorOutcome) -> Self {
        match outcome {
            AnchorOutcome::Intercepted => Self::Closed,
            AnchorOutcome::PassThrough => self,
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn links_class(self) -> &'static str {
        match self {
            Self::Closed => "nav-links",
            Self::Open => "nav-links active",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Closed => "fas fa-bars",
            Self::Open => "fas fa-times",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Closed => "Open navigation menu",
            Self::Open => "Close navigation menu",
        }
    }
}
