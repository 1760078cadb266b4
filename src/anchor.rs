use crate::nav::NavMenu;
use crate::surface::{fragment_id, RenderSurface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnchorOutcome {
    /// Same-page link: the browser's jump must be suppressed.
    Intercepted,
    /// Any other link: default navigation proceeds.
    PassThrough,
}

impl AnchorOutcome {
    pub fn suppresses_default(self) -> bool {
        matches!(self, Self::Intercepted)
    }
}

/// What the page does with a link click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnchorClick {
    pub prevent_default: bool,
    pub menu: NavMenu,
}

/// Handle a click on a link whose target is `href`.
///
/// Fragment links scroll to the element with the matching id when one exists.
/// The returned outcome tells the caller whether to cancel the click event.
pub fn intercept_anchor<S: RenderSurface>(surface: &S, href: Option<&str>) -> AnchorOutcome {
    let Some(id) = href.and_then(fragment_id) else {
        return AnchorOutcome::PassThrough;
    };

    let target = if id.is_empty() {
        None
    } else {
        surface.element_by_id(id)
    };

    if let Some(target) = target.as_ref() {
        surface.smooth_scroll_to(target);
    }

    AnchorOutcome::Intercepted
}

/// Run the interceptor for a click and derive the next menu state from it.
pub fn handle_anchor_click<S: RenderSurface>(
    surface: &S,
    menu: NavMenu,
    href: Option<&str>,
) -> AnchorClick {
    let outcome = intercept_anchor(surface, href);

    AnchorClick {
        prevent_default: outcome.suppresses_default(),
        menu: menu.after_anchor(outcome),
    }
}
