use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use smallvec::SmallVec;

use crate::frame_clock::FrameClock;
use crate::platform::RuntimeScheduler;
use crate::FrameCallbackId;

type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

/// Callbacks waiting for the next frame, in registration order.
#[derive(Default)]
struct FrameQueue {
    entries: SmallVec<[(FrameCallbackId, FrameCallback); 4]>,
    last_id: FrameCallbackId,
}

impl FrameQueue {
    fn push(&mut self, callback: FrameCallback) -> FrameCallbackId {
        self.last_id += 1;
        self.entries.push((self.last_id, callback));
        self.last_id
    }

    fn remove(&mut self, id: FrameCallbackId) {
        self.entries.retain(|(entry, _)| *entry != id);
    }

    fn take_all(&mut self) -> SmallVec<[(FrameCallbackId, FrameCallback); 4]> {
        std::mem::take(&mut self.entries)
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct Shared {
    scheduler: Rc<dyn RuntimeScheduler>,
    queue: RefCell<FrameQueue>,
    needs_frame: Cell<bool>,
    last_frame_nanos: Cell<Option<u64>>,
}

impl Shared {
    fn request_frame(&self) {
        self.needs_frame.set(true);
        self.scheduler.schedule_frame();
    }

    fn enqueue(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.queue.borrow_mut().push(callback);
        self.request_frame();
        id
    }

    fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }

    fn run_frame(&self, frame_time_nanos: u64) {
        self.last_frame_nanos.set(Some(frame_time_nanos));
        // Anything enqueued by these callbacks waits for the following frame.
        let due = self.queue.borrow_mut().take_all();
        log::trace!("frame at {frame_time_nanos}ns runs {} callbacks", due.len());
        for (_, callback) in due {
            callback(frame_time_nanos);
        }
        if !self.has_pending() {
            self.needs_frame.set(false);
        }
    }
}

/// Owner of the runtime. Dropping it invalidates every [`RuntimeHandle`].
pub struct Runtime {
    shared: Rc<Shared>,
}

impl Runtime {
    pub fn new(scheduler: Rc<dyn RuntimeScheduler>) -> Self {
        Self {
            shared: Rc::new(Shared {
                scheduler,
                queue: RefCell::new(FrameQueue::default()),
                needs_frame: Cell::new(false),
                last_frame_nanos: Cell::new(None),
            }),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// Whether something asked for a frame that has not run yet.
    pub fn needs_frame(&self) -> bool {
        self.shared.needs_frame.get()
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.shared.has_pending()
    }

    /// Runs every callback queued for the frame at `frame_time_nanos`.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        self.shared.run_frame(frame_time_nanos);
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.handle().frame_clock()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(Rc::new(DefaultScheduler))
    }
}

/// Scheduler for hosts that poll [`Runtime::needs_frame`] themselves.
#[derive(Debug, Default)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

/// Weak reference to a [`Runtime`]. Calls on a dead runtime do nothing.
#[derive(Clone)]
pub struct RuntimeHandle {
    shared: Weak<Shared>,
}

impl RuntimeHandle {
    /// Asks the host for a frame.
    pub fn schedule(&self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.request_frame();
        }
    }

    pub fn is_alive(&self) -> bool {
        self.shared.strong_count() > 0
    }

    /// Queues `callback` for the next frame. `None` once the runtime is gone.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        let shared = self.shared.upgrade()?;
        Some(shared.enqueue(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(shared) = self.shared.upgrade() {
            shared.queue.borrow_mut().remove(id);
        }
    }

    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(shared) = self.shared.upgrade() {
            shared.run_frame(frame_time_nanos);
        }
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| shared.has_pending())
    }

    /// Time of the most recently drained frame, if any frame ran yet.
    pub fn last_frame_nanos(&self) -> Option<u64> {
        self.shared
            .upgrade()
            .and_then(|shared| shared.last_frame_nanos.get())
    }

    pub fn needs_frame(&self) -> bool {
        self.shared
            .upgrade()
            .is_some_and(|shared| shared.needs_frame.get())
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}
