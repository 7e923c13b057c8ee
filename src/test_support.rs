//! Fakes shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::status::ClearTimer;

type Pending = (Duration, Box<dyn FnOnce()>);

/// A [`ClearTimer`] driven by virtual time.
#[derive(Default)]
pub struct ManualTimer {
    now: Cell<Duration>,
    slot: RefCell<Option<Pending>>,
}

impl ManualTimer {
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
        let due = matches!(&*self.slot.borrow(), Some((deadline, _)) if *deadline <= self.now.get());
        if !due {
            return;
        }
        let pending = self.slot.borrow_mut().take();
        if let Some((_, callback)) = pending {
            callback();
        }
    }

    pub fn is_armed(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl ClearTimer for ManualTimer {
    fn rearm(&self, after: Duration, on_expire: Box<dyn FnOnce()>) {
        *self.slot.borrow_mut() = Some((self.now.get() + after, on_expire));
    }
}
