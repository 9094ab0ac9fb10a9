use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct CountingScheduler {
    requests: Cell<usize>,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

#[test]
fn frame_callbacks_run_once_in_registration_order() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let log = Rc::new(RefCell::new(Vec::new()));

    let _first = {
        let log = Rc::clone(&log);
        clock.with_frame_nanos(move |time| log.borrow_mut().push(("first", time)))
    };
    let _second = {
        let log = Rc::clone(&log);
        clock.with_frame_millis(move |time| log.borrow_mut().push(("second", time)))
    };

    assert!(runtime.needs_frame());
    runtime.drain_frame_callbacks(16_000_000);
    runtime.drain_frame_callbacks(32_000_000);

    assert_eq!(&*log.borrow(), &[("first", 16_000_000), ("second", 16)]);
    assert!(!runtime.needs_frame());
}

#[test]
fn cancelled_registration_never_fires() {
    let runtime = Runtime::default();
    let fired = Rc::new(Cell::new(false));

    let registration = {
        let fired = Rc::clone(&fired);
        runtime
            .frame_clock()
            .with_frame_nanos(move |_| fired.set(true))
    };
    assert!(registration.is_active());
    registration.cancel();

    runtime.drain_frame_callbacks(1);
    assert!(!fired.get());
    assert!(!runtime.has_frame_callbacks());
}

#[test]
fn dropping_registration_unregisters_callback() {
    let runtime = Runtime::default();
    let fired = Rc::new(Cell::new(false));
    {
        let fired = Rc::clone(&fired);
        let _registration = runtime
            .frame_clock()
            .with_frame_nanos(move |_| fired.set(true));
    }
    runtime.drain_frame_callbacks(1);
    assert!(!fired.get());
}

#[test]
fn callbacks_registered_during_a_frame_wait_for_the_next_one() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let frames = Rc::new(RefCell::new(Vec::new()));
    let keep = Rc::new(RefCell::new(Vec::new()));

    let registration = {
        let frames = Rc::clone(&frames);
        let keep = Rc::clone(&keep);
        let handle = handle.clone();
        runtime.frame_clock().with_frame_nanos(move |time| {
            frames.borrow_mut().push(time);
            let frames = Rc::clone(&frames);
            let next = handle
                .frame_clock()
                .with_frame_nanos(move |time| frames.borrow_mut().push(time));
            keep.borrow_mut().push(next);
        })
    };

    runtime.drain_frame_callbacks(10);
    assert_eq!(&*frames.borrow(), &[10]);
    assert!(runtime.needs_frame());

    runtime.drain_frame_callbacks(20);
    assert_eq!(&*frames.borrow(), &[10, 20]);
    assert_eq!(handle.last_frame_nanos(), Some(20));
    drop(registration);
}

#[test]
fn state_writes_bump_version_and_request_frames() {
    let scheduler = Rc::new(CountingScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let state = MutableState::with_runtime(1, runtime.handle());
    let view = state.as_state();

    state.set(2);
    state.update(|value| *value += 1);

    assert_eq!(view.get(), 3);
    assert_eq!(view.version(), 2);
    assert_eq!(scheduler.requests.get(), 2);
    assert!(runtime.needs_frame());
}

#[test]
fn handle_outliving_runtime_is_inert() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    drop(runtime);

    assert!(!handle.is_alive());
    let registration = handle.frame_clock().with_frame_nanos(|_| {});
    assert!(!registration.is_active());
    assert!(!handle.needs_frame());
}
