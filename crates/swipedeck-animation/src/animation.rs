//! Frame-clock driven value animation.
//!
//! An [`Animatable`] keeps one callback registered with the runtime's frame
//! clock for as long as it moves. Tweens are a pure function of the time
//! since their first frame. Springs integrate a damped oscillator over the
//! time since the previous frame.

use std::cell::RefCell;
use std::rc::Rc;

use swipedeck_core::{FrameCallbackRegistration, MutableState, RuntimeHandle, State};
use swipedeck_ui_graphics::Point;

const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: f32 = 1_000_000_000.0;

/// Fixed integration step for springs, in seconds.
const SPRING_STEP_SECONDS: f32 = 0.016;

pub trait Lerp {
    /// Value `fraction` of the way from `self` to `target`.
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, to: &f32, t: f32) -> f32 {
        *self + (*to - *self) * t
    }
}

impl Lerp for f64 {
    fn lerp(&self, to: &f64, t: f32) -> f64 {
        *self + (*to - *self) * f64::from(t)
    }
}

impl Lerp for Point {
    fn lerp(&self, to: &Point, t: f32) -> Point {
        *self + (*to - *self) * t
    }
}

/// Values an [`Animatable`] can drive.
///
/// Animations travel the straight line between the start value and the
/// target, so a value only has to be interpolable and measurable.
pub trait AnimationValue: Lerp + Clone {
    fn distance(a: &Self, b: &Self) -> f32;
}

impl AnimationValue for f32 {
    fn distance(a: &Self, b: &Self) -> f32 {
        (a - b).abs()
    }
}

impl AnimationValue for f64 {
    fn distance(a: &Self, b: &Self) -> f32 {
        (a - b).abs() as f32
    }
}

impl AnimationValue for Point {
    fn distance(a: &Self, b: &Self) -> f32 {
        a.distance_to(*b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve: quick start, long settle.
    FastOutSlowIn,
}

impl Easing {
    /// Maps linear time in `[0, 1]` onto eased progress.
    pub fn transform(&self, fraction: f32) -> f32 {
        let curve = match self {
            Easing::Linear => return fraction,
            Easing::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0),
            Easing::FastOutSlowIn => CubicBezier::new(0.4, 0.0, 0.2, 1.0),
        };
        curve.y_for_x(fraction)
    }
}

/// Unit cubic bezier through (0, 0) and (1, 1) with two control points.
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    x: [f32; 3],
    y: [f32; 3],
}

impl CubicBezier {
    const EPSILON: f32 = 1e-6;

    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: Self::coefficients(x1, x2),
            y: Self::coefficients(y1, y2),
        }
    }

    /// `[a, b, c]` of `((a t + b) t + c) t` for one axis.
    fn coefficients(p1: f32, p2: f32) -> [f32; 3] {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        [1.0 - c - b, b, c]
    }

    fn eval([a, b, c]: [f32; 3], t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn slope([a, b, c]: [f32; 3], t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    fn y_for_x(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        Self::eval(self.y, self.solve_t(x))
    }

    /// Newton's method, falling back to bisection on a flat slope.
    fn solve_t(&self, x: f32) -> f32 {
        let mut t = x;
        for _ in 0..8 {
            let error = Self::eval(self.x, t) - x;
            if error.abs() < Self::EPSILON {
                return t;
            }
            let slope = Self::slope(self.x, t);
            if slope.abs() < Self::EPSILON {
                break;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }

        let (mut low, mut high) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..24 {
            let error = Self::eval(self.x, t) - x;
            if error.abs() < Self::EPSILON {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        t
    }
}

/// Tween timing: duration, easing curve and start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
    pub delay_millis: u64,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Holds the start value for `delay_millis` before moving.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

/// Damped spring pulling the value onto its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// 1.0 is critically damped; lower values overshoot.
    pub damping_ratio: f32,
    pub stiffness: f32,
    /// Rest speed, in fractions of the start-to-target distance per second.
    pub velocity_threshold: f32,
    /// Rest distance from the target, in value units.
    pub position_threshold: f32,
}

impl SpringSpec {
    pub fn new(damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            damping_ratio,
            stiffness,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    pub fn default_spring() -> Self {
        Self::new(1.0, 1500.0)
    }

    pub fn bouncy() -> Self {
        Self::new(0.5, 1500.0)
    }

    pub fn stiff() -> Self {
        Self::new(1.0, 3000.0)
    }

    /// Advances a unit spring resting at 1.0 by `dt` seconds.
    fn integrate(&self, progress: &mut f32, velocity: &mut f32, dt: f32) {
        let damping = 2.0 * self.damping_ratio * self.stiffness.sqrt();
        let mut remaining = dt;
        while remaining > 0.0 {
            let step = remaining.min(SPRING_STEP_SECONDS);
            let acceleration = -self.stiffness * (*progress - 1.0) - damping * *velocity;
            // Semi-implicit Euler: velocity first, then position.
            *velocity += acceleration * step;
            *progress = (*progress + *velocity * step).clamp(0.0, 2.0);
            remaining -= step;
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationType {
    Tween(AnimationSpec),
    Spring(SpringSpec),
}

impl Default for AnimationType {
    fn default() -> Self {
        AnimationType::Tween(AnimationSpec::default())
    }
}

/// How an animation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEnd {
    /// Reached its target.
    Finished,
    /// Superseded by another `animate_to`, a `snap_to` or `stop`.
    Interrupted,
}

type EndListener = Box<dyn FnOnce(AnimationEnd) + 'static>;

enum Tick {
    Waiting,
    Moved(f32),
    Settled,
}

/// Per-animation progress bookkeeping.
enum Driver {
    Tween {
        spec: AnimationSpec,
        started_at: Option<u64>,
    },
    Spring {
        spec: SpringSpec,
        progress: f32,
        velocity: f32,
        last_frame: Option<u64>,
    },
}

impl Driver {
    fn new(animation: AnimationType) -> Self {
        match animation {
            AnimationType::Tween(spec) => Driver::Tween {
                spec,
                started_at: None,
            },
            AnimationType::Spring(spec) => Driver::Spring {
                spec,
                progress: 0.0,
                velocity: 0.0,
                last_frame: None,
            },
        }
    }

    /// `span` is the start-to-target distance in value units.
    fn advance(&mut self, now: u64, span: f32) -> Tick {
        match self {
            Driver::Tween { spec, started_at } => {
                let started = *started_at.get_or_insert(now);
                let elapsed = now.saturating_sub(started);
                let delay = spec.delay_millis * NANOS_PER_MILLI;
                if elapsed < delay {
                    return Tick::Waiting;
                }
                let duration = (spec.duration_millis * NANOS_PER_MILLI).max(1);
                let linear = (elapsed - delay) as f32 / duration as f32;
                if linear >= 1.0 {
                    Tick::Settled
                } else {
                    Tick::Moved(spec.easing.transform(linear))
                }
            }
            Driver::Spring {
                spec,
                progress,
                velocity,
                last_frame,
            } => {
                if span < spec.position_threshold {
                    return Tick::Settled;
                }
                let previous = last_frame.replace(now).unwrap_or(now);
                let dt = now.saturating_sub(previous) as f32 / NANOS_PER_SECOND;
                if dt == 0.0 {
                    return Tick::Waiting;
                }
                spec.integrate(progress, velocity, dt);

                let at_rest = velocity.abs() < spec.velocity_threshold;
                let remaining = (1.0 - *progress).abs() * span;
                if at_rest && remaining < spec.position_threshold {
                    Tick::Settled
                } else {
                    Tick::Moved(*progress)
                }
            }
        }
    }
}

struct Motion<T: AnimationValue + 'static> {
    state: MutableState<T>,
    runtime: RuntimeHandle,
    value: T,
    from: T,
    to: T,
    driver: Option<Driver>,
    pending_frame: Option<FrameCallbackRegistration>,
    on_end: Option<EndListener>,
}

impl<T: AnimationValue + 'static> Motion<T> {
    /// Drops the running animation and hands back its end listener.
    fn halt(&mut self) -> Option<EndListener> {
        if let Some(registration) = self.pending_frame.take() {
            registration.cancel();
        }
        self.driver = None;
        self.on_end.take()
    }

    fn place(&mut self, value: T) {
        self.value = value.clone();
        self.state.set(value);
    }

    fn settle(&mut self) -> Option<EndListener> {
        let target = self.to.clone();
        self.from = target.clone();
        self.driver = None;
        self.place(target);
        self.on_end.take()
    }
}

fn notify(listener: Option<EndListener>, end: AnimationEnd) {
    if let Some(listener) = listener {
        listener(end);
    }
}

/// A value that animates towards targets on the runtime's frame clock.
///
/// Clones share the same value. End listeners run after the animatable has
/// released its internal borrow, so they may start new animations.
pub struct Animatable<T: AnimationValue + 'static> {
    motion: Rc<RefCell<Motion<T>>>,
}

impl<T: AnimationValue + 'static> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let motion = Motion {
            state: MutableState::with_runtime(initial.clone(), runtime.clone()),
            runtime,
            value: initial.clone(),
            from: initial.clone(),
            to: initial,
            driver: None,
            pending_frame: None,
            on_end: None,
        };
        Self {
            motion: Rc::new(RefCell::new(motion)),
        }
    }

    /// Starts moving from the current value to `target`, interrupting any
    /// animation in flight.
    pub fn animate_to(&self, target: T, animation: AnimationType) {
        self.start(target, animation, None);
    }

    /// Like [`Animatable::animate_to`]; `on_end` runs once when the
    /// animation finishes or is interrupted.
    pub fn animate_to_then(
        &self,
        target: T,
        animation: AnimationType,
        on_end: impl FnOnce(AnimationEnd) + 'static,
    ) {
        self.start(target, animation, Some(Box::new(on_end)));
    }

    fn start(&self, target: T, animation: AnimationType, on_end: Option<EndListener>) {
        let interrupted = {
            let mut motion = self.motion.borrow_mut();
            let interrupted = motion.halt();
            motion.from = motion.value.clone();
            motion.to = target;
            motion.driver = Some(Driver::new(animation));
            motion.on_end = on_end;
            interrupted
        };
        notify(interrupted, AnimationEnd::Interrupted);
        Self::request_frame(&self.motion);
    }

    /// Jumps to `target` immediately.
    pub fn snap_to(&self, target: T) {
        let interrupted = {
            let mut motion = self.motion.borrow_mut();
            let interrupted = motion.halt();
            motion.from = target.clone();
            motion.to = target.clone();
            motion.place(target);
            interrupted
        };
        notify(interrupted, AnimationEnd::Interrupted);
    }

    /// Freezes the value where it currently is.
    pub fn stop(&self) {
        let interrupted = {
            let mut motion = self.motion.borrow_mut();
            let interrupted = motion.halt();
            let here = motion.value.clone();
            motion.from = here.clone();
            motion.to = here;
            interrupted
        };
        notify(interrupted, AnimationEnd::Interrupted);
    }

    pub fn value(&self) -> T {
        self.motion.borrow().value.clone()
    }

    pub fn target(&self) -> T {
        self.motion.borrow().to.clone()
    }

    pub fn is_running(&self) -> bool {
        self.motion.borrow().driver.is_some()
    }

    pub fn state(&self) -> State<T> {
        self.motion.borrow().state.as_state()
    }

    fn request_frame(motion: &Rc<RefCell<Motion<T>>>) {
        let clock = {
            let motion = motion.borrow();
            if motion.pending_frame.is_some() || motion.driver.is_none() {
                return;
            }
            motion.runtime.frame_clock()
        };
        let weak = Rc::downgrade(motion);
        let registration = clock.with_frame_nanos(move |frame_time_nanos| {
            if let Some(motion) = weak.upgrade() {
                Self::tick(&motion, frame_time_nanos);
            }
        });
        motion.borrow_mut().pending_frame = Some(registration);
    }

    fn tick(motion: &Rc<RefCell<Motion<T>>>, frame_time_nanos: u64) {
        let finished = {
            let mut motion = motion.borrow_mut();
            motion.pending_frame = None;
            let span = T::distance(&motion.from, &motion.to);
            let Some(driver) = motion.driver.as_mut() else {
                return;
            };
            match driver.advance(frame_time_nanos, span) {
                Tick::Waiting => None,
                Tick::Moved(progress) => {
                    log::trace!("animation at {frame_time_nanos}ns, progress {progress:.4}");
                    let value = motion.from.lerp(&motion.to, progress);
                    motion.place(value);
                    None
                }
                Tick::Settled => Some(motion.settle()),
            }
        };
        match finished {
            Some(listener) => notify(listener, AnimationEnd::Finished),
            None => Self::request_frame(motion),
        }
    }
}

impl<T: AnimationValue + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            motion: Rc::clone(&self.motion),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
