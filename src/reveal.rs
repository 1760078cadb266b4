//! Scroll-triggered reveal of content blocks.

use std::rc::Rc;

use crate::surface::{RenderSurface, ACTIVE_MARKER, REVEAL_MARKER};

#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionReport<E> {
    pub target: E,
    pub is_intersecting: bool,
}

pub type ReportHandler<E> = Box<dyn Fn(Vec<IntersectionReport<E>>)>;

/// Host service that watches elements cross a visible-area threshold.
///
/// Dropping the returned registration releases every observation; the handler
/// is not called afterward.
pub trait IntersectionService<E> {
    type Registration;

    fn watch(
        &self,
        threshold: f64,
        targets: &[E],
        on_report: ReportHandler<E>,
    ) -> Option<Self::Registration>;
}

/// Mark every intersecting target `active`. Returns how many were newly marked.
pub fn apply_reveal_reports<S: RenderSurface>(
    surface: &S,
    reports: &[IntersectionReport<S::Element>],
) -> usize {
    let mut activated = 0;

    for report in reports.iter().filter(|report| report.is_intersecting) {
        if surface.has_marker(&report.target, ACTIVE_MARKER) {
            continue;
        }

        surface.add_marker(&report.target, ACTIVE_MARKER);
        activated += 1;
    }

    activated
}

pub fn start_reveal<S, I>(surface: &Rc<S>, service: &I, threshold: f64) -> Option<I::Registration>
where
    S: RenderSurface + 'static,
    I: IntersectionService<S::Element>,
{
    let targets = surface.elements_with_marker(REVEAL_MARKER);
    let handler_surface = Rc::clone(surface);

    service.watch(
        threshold,
        &targets,
        Box::new(move |reports: Vec<IntersectionReport<S::Element>>| {
            apply_reveal_reports(&*handler_surface, &reports);
        }),
    )
}
