//! In-memory stand-ins for the browser pieces the behavior modules talk to.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::entrance::Scheduler;
use crate::reveal::{IntersectionReport, IntersectionService, ReportHandler};
use crate::surface::RenderSurface;

struct FakeNode {
    id: Option<String>,
    classes: Vec<String>,
}

/// Flat list of nodes in document order. Elements are indices into it.
#[derive(Default)]
pub struct FakeSurface {
    nodes: RefCell<Vec<FakeNode>>,
    mutations: RefCell<Vec<(usize, String)>>,
    scrolled: RefCell<Vec<usize>>,
}

impl FakeSurface {
    pub fn push(&self, classes: &[&str]) -> usize {
        self.insert(None, classes)
    }

    pub fn push_with_id(&self, id: &str, classes: &[&str]) -> usize {
        self.insert(Some(id.to_string()), classes)
    }

    fn insert(&self, id: Option<String>, classes: &[&str]) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            id,
            classes: classes.iter().map(ToString::to_string).collect(),
        });
        nodes.len() - 1
    }

    pub fn has(&self, element: usize, marker: &str) -> bool {
        self.nodes
            .borrow()
            .get(element)
            .is_some_and(|node| node.classes.iter().any(|class| class == marker))
    }

    /// Every `add_marker` call, in order.
    pub fn mutations(&self) -> Vec<(usize, String)> {
        self.mutations.borrow().clone()
    }

    pub fn scrolled_ids(&self) -> Vec<String> {
        let nodes = self.nodes.borrow();
        self.scrolled
            .borrow()
            .iter()
            .filter_map(|&element| nodes.get(element).and_then(|node| node.id.clone()))
            .collect()
    }
}

impl RenderSurface for FakeSurface {
    type Element = usize;

    fn elements_with_marker(&self, marker: &str) -> Vec<usize> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.classes.iter().any(|class| class == marker))
            .map(|(index, _)| index)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.nodes
            .borrow()
            .iter()
            .position(|node| node.id.as_deref() == Some(id))
    }

    fn has_marker(&self, element: &usize, marker: &str) -> bool {
        self.has(*element, marker)
    }

    fn add_marker(&self, element: &usize, marker: &str) {
        self.mutations
            .borrow_mut()
            .push((*element, marker.to_string()));

        if let Some(node) = self.nodes.borrow_mut().get_mut(*element) {
            if !node.classes.iter().any(|class| class == marker) {
                node.classes.push(marker.to_string());
            }
        }
    }

    fn smooth_scroll_to(&self, element: &usize) {
        self.scrolled.borrow_mut().push(*element);
    }
}

struct PendingAction {
    id: u64,
    due: Duration,
    action: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct SchedulerState {
    now: Duration,
    next_id: u64,
    refuse: bool,
    pending: Vec<PendingAction>,
    fired_at: Vec<Duration>,
}

/// Virtual clock. Nothing fires until the test advances time.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<SchedulerState>>,
}

impl ManualScheduler {
    /// A scheduler whose host rejects every timer.
    pub fn refusing() -> Self {
        let scheduler = Self::default();
        scheduler.state.borrow_mut().refuse = true;
        scheduler
    }

    pub fn advance_to(&self, until: Duration) {
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let position = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, pending)| pending.due <= until)
                    .min_by_key(|(_, pending)| (pending.due, pending.id))
                    .map(|(position, _)| position);

                position.map(|position| {
                    let pending = state.pending.remove(position);
                    state.now = pending.due;
                    state.fired_at.push(pending.due);
                    pending.action
                })
            };

            match next {
                Some(action) => action(),
                None => break,
            }
        }

        let mut state = self.state.borrow_mut();
        state.now = state.now.max(until);
    }

    pub fn pending(&self) -> usize {
        self.state.borrow().pending.len()
    }

    pub fn fired_at(&self) -> Vec<Duration> {
        self.state.borrow().fired_at.clone()
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&self, delay: Duration, action: Box<dyn FnOnce()>) -> Option<u64> {
        let mut state = self.state.borrow_mut();
        if state.refuse {
            return None;
        }

        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.pending.push(PendingAction { id, due, action });
        Some(id)
    }

    fn cancel(&self, handle: u64) {
        self.state
            .borrow_mut()
            .pending
            .retain(|pending| pending.id != handle);
    }
}

struct Watch {
    threshold: f64,
    targets: Vec<usize>,
    handler: Rc<dyn Fn(Vec<IntersectionReport<usize>>)>,
}

/// Viewport that reports intersections only when the test says so.
#[derive(Clone, Default)]
pub struct FakeViewport {
    watch: Rc<RefCell<Option<Watch>>>,
}

pub struct FakeRegistration {
    watch: Rc<RefCell<Option<Watch>>>,
}

impl Drop for FakeRegistration {
    fn drop(&mut self) {
        self.watch.borrow_mut().take();
    }
}

impl FakeViewport {
    pub fn is_watching(&self) -> bool {
        self.watch.borrow().is_some()
    }

    pub fn threshold(&self) -> Option<f64> {
        self.watch.borrow().as_ref().map(|watch| watch.threshold)
    }

    pub fn targets(&self) -> Vec<usize> {
        self.watch
            .borrow()
            .as_ref()
            .map(|watch| watch.targets.clone())
            .unwrap_or_default()
    }

    /// Deliver `(element, is_intersecting)` pairs if a watch is registered.
    pub fn report(&self, entries: &[(usize, bool)]) {
        let handler = self
            .watch
            .borrow()
            .as_ref()
            .map(|watch| Rc::clone(&watch.handler));

        if let Some(handler) = handler {
            handler(
                entries
                    .iter()
                    .map(|&(target, is_intersecting)| IntersectionReport {
                        target,
                        is_intersecting,
                    })
                    .collect(),
            );
        }
    }
}

impl IntersectionService<usize> for FakeViewport {
    type Registration = FakeRegistration;

    fn watch(
        &self,
        threshold: f64,
        targets: &[usize],
        on_report: ReportHandler<usize>,
    ) -> Option<FakeRegistration> {
        *self.watch.borrow_mut() = Some(Watch {
            threshold,
            targets: targets.to_vec(),
            handler: Rc::from(on_report),
        });

        Some(FakeRegistration {
            watch: Rc::clone(&self.watch),
        })
    }
}
