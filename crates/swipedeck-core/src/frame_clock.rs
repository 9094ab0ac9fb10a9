use crate::runtime::RuntimeHandle;
use crate::FrameCallbackId;

/// Entry point for code that wants to run once per frame.
#[derive(Clone)]
pub struct FrameClock {
    handle: RuntimeHandle,
}

impl FrameClock {
    pub fn new(handle: RuntimeHandle) -> Self {
        Self { handle }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Runs `callback` once, on the next frame, with the frame time in nanoseconds.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let pending = self
            .handle
            .register_frame_callback(callback)
            .map(|id| (self.handle.clone(), id));
        FrameCallbackRegistration { pending }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        self.with_frame_nanos(move |frame_time_nanos| callback(frame_time_nanos / 1_000_000))
    }
}

/// Pending frame callback. Dropping or cancelling it unregisters the callback.
///
/// Inactive when the runtime was already gone at registration time.
#[must_use = "dropping the registration cancels the callback"]
pub struct FrameCallbackRegistration {
    pending: Option<(RuntimeHandle, FrameCallbackId)>,
}

impl FrameCallbackRegistration {
    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(mut self) {
        self.unregister();
    }

    fn unregister(&mut self) {
        if let Some((handle, id)) = self.pending.take() {
            handle.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.unregister();
    }
}
