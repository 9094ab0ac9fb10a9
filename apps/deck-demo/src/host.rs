//! Frame loop that stands in for a platform vsync source.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use swipedeck_core::{Clock, Runtime, RuntimeScheduler};
use web_time::Instant;

const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

/// Guards against animations that never settle.
const MAX_FRAMES_PER_SETTLE: usize = 600;

/// Scheduler that remembers whether a frame was requested.
#[derive(Debug, Default)]
pub struct HostScheduler {
    frame_requested: Cell<bool>,
}

impl HostScheduler {
    /// Returns whether a frame has been requested since the last call.
    pub fn take_frame_request(&self) -> bool {
        self.frame_requested.replace(false)
    }
}

impl RuntimeScheduler for HostScheduler {
    fn schedule_frame(&self) {
        self.frame_requested.set(true);
    }
}

/// Clock backed by [`web_time::Instant`].
#[derive(Debug, Default, Clone, Copy)]
pub struct HostClock;

impl Clock for HostClock {
    type Instant = Instant;

    fn now(&self) -> Instant {
        Instant::now()
    }

    fn elapsed_nanos(&self, since: Instant) -> u64 {
        since.elapsed().as_nanos() as u64
    }
}

/// Runtime plus the wall clock its frames are stamped with.
pub struct Host {
    scheduler: Rc<HostScheduler>,
    runtime: Runtime,
    clock: HostClock,
    started: Instant,
    frames: u64,
}

impl Host {
    pub fn new() -> Self {
        let scheduler = Rc::new(HostScheduler::default());
        let runtime = Runtime::new(scheduler.clone());
        let clock = HostClock;
        Self {
            scheduler,
            runtime,
            started: clock.now(),
            clock,
            frames: 0,
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Milliseconds since the host started, for stamping pointer events.
    pub fn uptime_millis(&self) -> u64 {
        self.clock.elapsed_nanos(self.started) / 1_000_000
    }

    /// Sleeps one frame interval and drains callbacks at the real frame time.
    pub fn frame(&mut self) {
        std::thread::sleep(FRAME_INTERVAL);
        self.scheduler.take_frame_request();
        let frame_time = self.clock.elapsed_nanos(self.started);
        self.runtime.drain_frame_callbacks(frame_time);
        self.frames += 1;
    }

    /// Runs frames until nothing is animating. Returns the frames spent.
    pub fn settle(&mut self) -> usize {
        let mut frames = 0;
        while self.runtime.has_frame_callbacks() {
            if frames == MAX_FRAMES_PER_SETTLE {
                log::warn!("animations still running after {frames} frames");
                break;
            }
            self.frame();
            frames += 1;
        }
        frames
    }
}
