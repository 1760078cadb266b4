//! Staggered entrance of the hero elements.
//!
//! At mount every element marked `hidden` gets a one-shot action that adds
//! the `show` marker, the i-th one `i × stagger` after mount. The actions are
//! owned by a [`TimerGroup`]; dropping the group cancels whatever is still
//! pending.

use std::rc::Rc;
use std::time::Duration;

use crate::surface::{RenderSurface, HIDDEN_MARKER, SHOW_MARKER};

pub trait Scheduler {
    type Handle;

    /// Run `action` once after `delay`. `None` if the host refused the timer.
    fn schedule(&self, delay: Duration, action: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

pub struct TimerGroup<T: Scheduler> {
    scheduler: T,
    handles: Vec<T::Handle>,
}

impl<T: Scheduler> TimerGroup<T> {
    pub fn new(scheduler: T) -> Self {
        Self {
            scheduler,
            handles: Vec::new(),
        }
    }

    pub fn push(&mut self, delay: Duration, action: Box<dyn FnOnce()>) {
        if let Some(handle) = self.scheduler.schedule(delay, action) {
            self.handles.push(handle);
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            self.scheduler.cancel(handle);
        }
    }
}

impl<T: Scheduler> Drop for TimerGroup<T> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

pub fn stagger_delay(index: usize, stagger: Duration) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    stagger.saturating_mul(index)
}

pub fn start_entrance<S, T>(surface: &Rc<S>, scheduler: T, stagger: Duration) -> TimerGroup<T>
where
    S: RenderSurface + 'static,
    T: Scheduler,
{
    let mut group = TimerGroup::new(scheduler);

    for (index, element) in surface
        .elements_with_marker(HIDDEN_MARKER)
        .into_iter()
        .enumerate()
    {
        let surface = Rc::clone(surface);
        group.push(
            stagger_delay(index, stagger),
            Box::new(move || surface.add_marker(&element, SHOW_MARKER)),
        );
    }

    group
}
