use std::cell::RefCell;

use yew::Callback;

use crate::models::ToastKind;

/// Where the controller sends user-facing outcome messages. Fire-and-forget.
pub trait Notifier {
    fn notify(&self, message: String, kind: ToastKind);
}

/// The toast hook's push callback.
impl Notifier for Callback<(String, ToastKind)> {
    fn notify(&self, message: String, kind: ToastKind) {
        self.emit((message, kind));
    }
}

/// Collects notices while the controller is borrowed so they can be pushed
/// to the toast once the borrow is released.
#[derive(Default, Debug)]
pub struct NoticeBuffer {
    notices: RefCell<Vec<(String, ToastKind)>>,
}

impl NoticeBuffer {
    pub fn flush(self, sink: &impl Notifier) {
        for (message, kind) in self.notices.into_inner() {
            sink.notify(message, kind);
        }
    }
}

#[cfg(test)]
impl NoticeBuffer {
    pub fn take(&self) -> Vec<(String, ToastKind)> {
        self.notices.borrow_mut().drain(..).collect()
    }

    pub fn kinds(&self) -> Vec<ToastKind> {
        self.notices.borrow().iter().map(|(_, k)| k.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }
}

impl Notifier for NoticeBuffer {
    fn notify(&self, message: String, kind: ToastKind) {
        self.notices.borrow_mut().push((message, kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_flushes_in_order() {
        let buffer = NoticeBuffer::default();
        buffer.notify("first".into(), ToastKind::Success);
        buffer.notify("second".into(), ToastKind::Error);

        let sink = NoticeBuffer::default();
        buffer.flush(&sink);
        assert_eq!(
            sink.take(),
            vec![
                ("first".to_string(), ToastKind::Success),
                ("second".to_string(), ToastKind::Error),
            ]
        );
        assert!(sink.is_empty());
    }
}
