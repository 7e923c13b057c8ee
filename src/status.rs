use std::rc::Rc;
use std::time::Duration;

/// How long a status message stays up.
pub const STATUS_TIMEOUT: Duration = Duration::from_millis(2500);

/// One pending callback slot. Arming it again drops whatever was pending.
pub trait ClearTimer {
    fn rearm(&self, after: Duration, on_expire: Box<dyn FnOnce()>);
}

impl ClearTimer for slint::Timer {
    fn rearm(&self, after: Duration, on_expire: Box<dyn FnOnce()>) {
        let mut on_expire = Some(on_expire);
        self.start(slint::TimerMode::SingleShot, after, move || {
            if let Some(callback) = on_expire.take() {
                callback();
            }
        });
    }
}

impl<T: ClearTimer + ?Sized> ClearTimer for Rc<T> {
    fn rearm(&self, after: Duration, on_expire: Box<dyn FnOnce()>) {
        (**self).rearm(after, on_expire)
    }
}

pub trait StatusSink {
    fn set_status(&self, text: &str);
}

/// The status line under the form, with its auto-clear.
pub struct StatusLine<T: ClearTimer> {
    pending_clear: T,
}

impl<T: ClearTimer> StatusLine<T> {
    pub fn new(pending_clear: T) -> Self {
        Self { pending_clear }
    }

    /// Shows `msg`. A non-empty message clears itself after [`STATUS_TIMEOUT`],
    /// replacing any clear still pending from an earlier message.
    pub fn show<S: StatusSink + 'static>(&self, sink: &Rc<S>, msg: &str) {
        sink.set_status(msg);
        if msg.is_empty() {
            return;
        }
        let sink = Rc::downgrade(sink);
        self.pending_clear.rearm(
            STATUS_TIMEOUT,
            Box::new(move || {
                if let Some(sink) = sink.upgrade() {
                    sink.set_status("");
                }
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ManualTimer;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Line(RefCell<String>);

    impl StatusSink for Line {
        fn set_status(&self, text: &str) {
            *self.0.borrow_mut() = text.to_string();
        }
    }

    impl Line {
        fn text(&self) -> String {
            self.0.borrow().clone()
        }
    }

    #[test]
    fn message_clears_after_timeout() {
        let timer = Rc::new(ManualTimer::default());
        let status = StatusLine::new(timer.clone());
        let line = Rc::new(Line::default());

        status.show(&line, "saved");
        timer.advance(Duration::from_millis(2499));
        assert_eq!(line.text(), "saved");
        timer.advance(Duration::from_millis(1));
        assert_eq!(line.text(), "");
    }

    #[test]
    fn second_message_replaces_first_clear() {
        let timer = Rc::new(ManualTimer::default());
        let status = StatusLine::new(timer.clone());
        let line = Rc::new(Line::default());

        status.show(&line, "first");
        timer.advance(Duration::from_millis(1000));
        status.show(&line, "second");

        // nominal expiry of "first"
        timer.advance(Duration::from_millis(1500));
        assert_eq!(line.text(), "second");

        timer.advance(Duration::from_millis(1000));
        assert_eq!(line.text(), "");
    }

    #[test]
    fn empty_message_clears_without_arming() {
        let timer = Rc::new(ManualTimer::default());
        let status = StatusLine::new(timer.clone());
        let line = Rc::new(Line::default());

        status.show(&line, "");
        assert_eq!(line.text(), "");
        assert!(!timer.is_armed());
    }
}
