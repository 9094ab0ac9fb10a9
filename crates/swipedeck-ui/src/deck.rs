use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use swipedeck_animation::{Animatable, AnimationEnd, AnimationType, Interpolation};
use swipedeck_core::RuntimeHandle;
use swipedeck_foundation::{PanGestureEvent, PanGestureRecognizer, PointerEvent, ScreenMetrics};
use swipedeck_ui_graphics::Point;

use crate::config::DeckConfig;
use crate::content::{DeckContent, DeckItem};
use crate::error::DeckError;
use crate::render::{render_stack, CardGeometry, DeckFrame, DeckFrameContent, LayoutTransition};
use crate::state::{DeckAction, DeckPhase, DeckState, SwipeDecision, SwipeDirection};

/// Gesture outcome reported by [`Deck::handle_pointer_event`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeckGesture {
    Started,
    Moved(Point),
    Released(SwipeDecision),
    Cancelled,
}

struct DeckCore<T> {
    data: Rc<[T]>,
    state: DeckState,
    /// Bumped whenever the data is replaced; completions from an older
    /// generation are dropped.
    generation: u64,
    layout_dirty: bool,
}

struct DeckInner<T, C> {
    content: C,
    config: DeckConfig,
    metrics: ScreenMetrics,
    threshold: f32,
    rotation: Interpolation,
    position: Animatable<Point>,
    core: RefCell<DeckCore<T>>,
    pan: RefCell<PanGestureRecognizer>,
}

/// Swipeable card deck.
///
/// All methods must be called from the thread that drives the runtime.
/// Animations advance when the host drains the runtime's frame callbacks.
/// Clones are handles to the same deck.
pub struct Deck<T, C> {
    inner: Rc<DeckInner<T, C>>,
}

impl<T, C> Clone for Deck<T, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T, C> Deck<T, C>
where
    T: DeckItem + 'static,
    C: DeckContent<T> + 'static,
{
    pub fn new(
        data: impl Into<Rc<[T]>>,
        content: C,
        metrics: ScreenMetrics,
        config: DeckConfig,
        runtime: RuntimeHandle,
    ) -> Result<Self, DeckError> {
        if !metrics.is_valid() {
            return Err(DeckError::InvalidScreenMetrics {
                width: metrics.width,
                height: metrics.height,
            });
        }
        config.validate()?;
        let rotation = config.rotation_for(metrics)?;
        let threshold = metrics.swipe_threshold(config.swipe_threshold_fraction);

        let data = data.into();
        warn_on_duplicate_ids(&data);
        log::debug!(
            "deck created with {} cards, swipe threshold {threshold}px",
            data.len()
        );

        Ok(Self {
            inner: Rc::new(DeckInner {
                content,
                config,
                metrics,
                threshold,
                rotation,
                position: Animatable::new(Point::ZERO, runtime),
                core: RefCell::new(DeckCore {
                    state: DeckState::new(data.len()),
                    data,
                    generation: 0,
                    layout_dirty: false,
                }),
                pan: RefCell::new(PanGestureRecognizer::new()),
            }),
        })
    }

    pub fn with_defaults(
        data: impl Into<Rc<[T]>>,
        content: C,
        metrics: ScreenMetrics,
        runtime: RuntimeHandle,
    ) -> Result<Self, DeckError> {
        Self::new(data, content, metrics, DeckConfig::default(), runtime)
    }

    pub fn state(&self) -> DeckState {
        self.inner.core.borrow().state
    }

    pub fn index(&self) -> usize {
        self.state().index
    }

    pub fn phase(&self) -> DeckPhase {
        self.state().phase
    }

    pub fn is_exhausted(&self) -> bool {
        self.state().is_exhausted()
    }

    pub fn data(&self) -> Rc<[T]> {
        Rc::clone(&self.inner.core.borrow().data)
    }

    pub fn content(&self) -> &C {
        &self.inner.content
    }

    pub fn config(&self) -> &DeckConfig {
        &self.inner.config
    }

    pub fn metrics(&self) -> ScreenMetrics {
        self.inner.metrics
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.inner.threshold
    }

    /// Current displacement of the active card from its resting place.
    pub fn position(&self) -> Point {
        self.inner.position.value()
    }

    /// Rotation of the active card, derived from its horizontal offset.
    pub fn rotation_degrees(&self) -> f32 {
        self.inner.rotation.apply(self.position().x)
    }

    /// Replaces the item list, starting over from its first card.
    pub fn set_data(&self, data: impl Into<Rc<[T]>>) {
        self.inner.replace_data(data.into());
    }

    /// Like [`Deck::set_data`], but keeps the deck untouched when handed
    /// the list it already shows. Returns whether the deck was reset.
    pub fn sync_data(&self, data: &Rc<[T]>) -> bool {
        if Rc::ptr_eq(&self.inner.core.borrow().data, data) {
            return false;
        }
        self.inner.replace_data(Rc::clone(data));
        true
    }

    /// Claims a new gesture on the active card.
    pub fn on_gesture_start(&self) -> Result<(), DeckError> {
        let previous = self.inner.dispatch(DeckAction::GestureStarted)?;
        if previous.phase == DeckPhase::AnimatingCancel {
            // Grab the card where the spring left it.
            self.inner.position.stop();
        }
        Ok(())
    }

    /// Moves the active card to exactly `delta`, the displacement since the
    /// gesture started.
    pub fn on_gesture_move(&self, delta: Point) -> Result<(), DeckError> {
        self.inner.dispatch(DeckAction::GestureMoved)?;
        self.inner.position.snap_to(delta);
        Ok(())
    }

    /// Ends the gesture, committing or cancelling based on `delta.x`.
    pub fn on_gesture_end(&self, delta: Point) -> Result<SwipeDecision, DeckError> {
        let decision = SwipeDecision::for_release(delta.x, self.inner.threshold);
        self.inner.dispatch(DeckAction::GestureReleased(decision))?;
        log::debug!("released at dx {:.1}: {decision:?}", delta.x);
        match decision {
            SwipeDecision::Commit(direction) => DeckInner::start_swipe_out(&self.inner, direction),
            SwipeDecision::Cancel => DeckInner::start_reset(&self.inner),
        }
        Ok(decision)
    }

    /// The host took the gesture away; the card springs back.
    pub fn on_gesture_cancel(&self) -> Result<(), DeckError> {
        self.inner
            .dispatch(DeckAction::GestureReleased(SwipeDecision::Cancel))?;
        DeckInner::start_reset(&self.inner);
        Ok(())
    }

    /// Feeds a raw pointer event through the deck's pan recognizer.
    pub fn handle_pointer_event(
        &self,
        event: &PointerEvent,
    ) -> Result<Option<DeckGesture>, DeckError> {
        let gesture = self.inner.pan.borrow_mut().on_pointer_event(event);
        let result = match gesture {
            None => return Ok(None),
            Some(PanGestureEvent::Started { .. }) => {
                self.on_gesture_start().map(|_| DeckGesture::Started)
            }
            Some(PanGestureEvent::Moved { delta }) => {
                self.on_gesture_move(delta).map(|_| DeckGesture::Moved(delta))
            }
            Some(PanGestureEvent::Ended { delta }) => {
                self.on_gesture_end(delta).map(DeckGesture::Released)
            }
            Some(PanGestureEvent::Cancelled { .. }) => {
                self.on_gesture_cancel().map(|_| DeckGesture::Cancelled)
            }
        };
        if result.is_err() {
            // A rejected start must not leave later moves attributed to it.
            self.inner.pan.borrow_mut().reset();
        }
        result.map(Some)
    }

    /// Flies the active card off screen in `direction`, then commits it.
    pub fn force_swipe(&self, direction: SwipeDirection) -> Result<(), DeckError> {
        self.inner.dispatch(DeckAction::ForceSwipe(direction))?;
        self.inner.pan.borrow_mut().reset();
        DeckInner::start_swipe_out(&self.inner, direction);
        Ok(())
    }

    /// Springs the active card back to its resting place.
    pub fn reset_position(&self) -> Result<(), DeckError> {
        self.inner.dispatch(DeckAction::ResetRequested)?;
        self.inner.pan.borrow_mut().reset();
        DeckInner::start_reset(&self.inner);
        Ok(())
    }

    /// Produces the visual stack for the current state.
    pub fn render(&self) -> DeckFrame<T::Id, C::View> {
        let inner = &self.inner;
        let (data, state, layout_dirty) = {
            let mut core = inner.core.borrow_mut();
            let dirty = std::mem::take(&mut core.layout_dirty);
            (Rc::clone(&core.data), core.state, dirty)
        };
        let layout_transition =
            layout_dirty.then_some(LayoutTransition::Spring(inner.config.layout_transition));

        if state.is_exhausted() {
            return DeckFrame {
                content: DeckFrameContent::Exhausted(inner.content.render_empty()),
                layout_transition,
            };
        }

        let offset = inner.position.value();
        let geometry = CardGeometry {
            width: inner.metrics.width,
            top: inner.metrics.height * inner.config.card_top_fraction,
            stack_offset: inner.config.stack_offset,
        };
        let cards = render_stack(
            &data,
            state.index,
            offset,
            inner.rotation.apply(offset.x),
            &geometry,
            |item| inner.content.render_item(item),
        );
        DeckFrame {
            content: DeckFrameContent::Cards(cards),
            layout_transition,
        }
    }
}

impl<T, C> DeckInner<T, C>
where
    T: DeckItem + 'static,
    C: DeckContent<T> + 'static,
{
    /// Applies `action` and returns the state it replaced.
    fn dispatch(&self, action: DeckAction) -> Result<DeckState, DeckError> {
        let mut core = self.core.borrow_mut();
        let previous = core.state;
        match previous.reduce(action) {
            Ok(next) => {
                if next.index != previous.index {
                    core.layout_dirty = true;
                }
                if next.phase != previous.phase {
                    log::debug!("deck {} -> {} on {action:?}", previous.phase, next.phase);
                }
                core.state = next;
                Ok(previous)
            }
            Err(err) => {
                log::warn!("{err}");
                Err(err)
            }
        }
    }

    fn replace_data(&self, data: Rc<[T]>) {
        warn_on_duplicate_ids(&data);
        {
            let mut core = self.core.borrow_mut();
            let len = data.len();
            let previous = core.state;
            // Replacing data is accepted from every phase.
            core.state = DeckState::new(len);
            core.data = data;
            core.generation += 1;
            if previous.index != 0 {
                core.layout_dirty = true;
            }
            log::debug!(
                "deck data replaced ({len} cards), index {} -> 0",
                previous.index
            );
        }
        self.pan.borrow_mut().reset();
        self.position.snap_to(Point::ZERO);
    }

    fn start_swipe_out(this: &Rc<Self>, direction: SwipeDirection) {
        let target = Point::new(direction.sign() * this.metrics.width, 0.0);
        let generation = this.core.borrow().generation;
        let weak: Weak<Self> = Rc::downgrade(this);
        this.position.animate_to_then(
            target,
            AnimationType::Tween(this.config.swipe_out),
            move |end| {
                if end != AnimationEnd::Finished {
                    return;
                }
                if let Some(inner) = weak.upgrade() {
                    inner.complete_swipe(direction, generation);
                }
            },
        );
    }

    fn start_reset(this: &Rc<Self>) {
        let generation = this.core.borrow().generation;
        let weak: Weak<Self> = Rc::downgrade(this);
        this.position.animate_to_then(
            Point::ZERO,
            AnimationType::Spring(this.config.reset_spring),
            move |end| {
                if end != AnimationEnd::Finished {
                    return;
                }
                if let Some(inner) = weak.upgrade() {
                    if inner.core.borrow().generation == generation {
                        if inner.dispatch(DeckAction::CancelSettled).is_err() {
                            log::debug!("reset settled after the deck left Resetting");
                        }
                    }
                }
            },
        );
    }

    /// Reports the swiped item, advances the index and recenters the offset.
    fn complete_swipe(&self, direction: SwipeDirection, generation: u64) {
        let (data, index) = {
            let core = self.core.borrow();
            if core.generation != generation {
                log::debug!("dropping swipe completion from replaced data");
                return;
            }
            (Rc::clone(&core.data), core.state.index)
        };

        if let Some(item) = data.get(index) {
            log::debug!("card {:?} swiped {direction}", item.id());
            self.content.on_commit(direction, item);
        }

        // The callback may have replaced the data, which already reset us.
        if self.core.borrow().generation != generation {
            return;
        }
        if self.dispatch(DeckAction::CommitFinished).is_ok() {
            self.position.snap_to(Point::ZERO);
        }
    }
}

fn warn_on_duplicate_ids<T: DeckItem>(data: &[T]) {
    let mut seen = HashSet::with_capacity(data.len());
    for item in data {
        let id = item.id();
        if !seen.insert(id.clone()) {
            log::warn!("duplicate deck item id {id:?}; cards will share a key");
        }
    }
}

#[cfg(test)]
#[path = "tests/deck_tests.rs"]
mod tests;
