use crate::runtime::RuntimeHandle;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

struct StateCell<T> {
    value: RefCell<T>,
    version: Cell<u64>,
    runtime: Option<RuntimeHandle>,
}

/// Observable value cell.
///
/// Every write bumps the version and asks the runtime for a frame, so a host
/// can tell that whatever reads this value must be rendered again.
pub struct MutableState<T> {
    cell: Rc<StateCell<T>>,
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn new(value: T) -> Self {
        Self::from_parts(value, None)
    }

    pub fn with_runtime(value: T, runtime: RuntimeHandle) -> Self {
        Self::from_parts(value, Some(runtime))
    }

    fn from_parts(value: T, runtime: Option<RuntimeHandle>) -> Self {
        Self {
            cell: Rc::new(StateCell {
                value: RefCell::new(value),
                version: Cell::new(0),
                runtime,
            }),
        }
    }

    pub fn get(&self) -> T {
        self.cell.value.borrow().clone()
    }

    pub fn set(&self, value: T) {
        *self.cell.value.borrow_mut() = value;
        self.mark_changed();
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.cell.value.borrow_mut());
        self.mark_changed();
        result
    }

    pub fn version(&self) -> u64 {
        self.cell.version.get()
    }

    pub fn as_state(&self) -> State<T> {
        State {
            cell: Rc::clone(&self.cell),
        }
    }

    fn mark_changed(&self) {
        self.cell.version.set(self.cell.version.get() + 1);
        if let Some(runtime) = &self.cell.runtime {
            runtime.schedule();
        }
    }
}

impl<T> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MutableState")
            .field("value", &*self.cell.value.borrow())
            .field("version", &self.cell.version.get())
            .finish()
    }
}

/// Read-only view of a [`MutableState`].
pub struct State<T> {
    cell: Rc<StateCell<T>>,
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.cell.value.borrow().clone()
    }

    pub fn version(&self) -> u64 {
        self.cell.version.get()
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State")
            .field(&*self.cell.value.borrow())
            .finish()
    }
}
