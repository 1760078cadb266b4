use std::rc::Rc;
use std::time::Duration;

use crate::entrance::{start_entrance, Scheduler, TimerGroup};
use crate::reveal::{start_reveal, IntersectionService};
use crate::surface::RenderSurface;

pub const HERO_STAGGER: Duration = Duration::from_millis(200);
pub const REVEAL_THRESHOLD: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    pub stagger: Duration,
    pub reveal_threshold: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            stagger: HERO_STAGGER,
            reveal_threshold: REVEAL_THRESHOLD,
        }
    }
}

/// Everything the page acquires at mount.
///
/// Dropping it cancels pending entrance timers and disconnects the reveal
/// watcher, so nothing touches the page after it is gone.
pub struct PageEffects<T: Scheduler, R> {
    _entrance: TimerGroup<T>,
    _reveal: Option<R>,
}

impl<T: Scheduler, R> PageEffects<T, R> {
    pub fn mount<S, I>(surface: Rc<S>, scheduler: T, viewport: &I, config: AnimationConfig) -> Self
    where
        S: RenderSurface + 'static,
        I: IntersectionService<S::Element, Registration = R>,
    {
        let entrance = start_entrance(&surface, scheduler, config.stagger);
        let reveal = start_reveal(&surface, viewport, config.reveal_threshold);

        Self {
            _entrance: entrance,
            _reveal: reveal,
        }
    }
}
