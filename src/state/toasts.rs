// Bounded queue of operator notifications, newest first.

use std::rc::Rc;

use yew::Reducible;

use crate::config::TOAST_LIMIT;
use crate::model::Notification;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToastAction {
    Push { id: u64, notification: Notification },
    Dismiss(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(TOAST_LIMIT)
    }
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            limit,
        }
    }

    pub fn push(&mut self, id: u64, notification: Notification) {
        if self.toasts.iter().any(|t| t.id == id) {
            return;
        }
        self.toasts.insert(
            0,
            Toast {
                id,
                title: notification.title,
                description: notification.description,
            },
        );
        self.toasts.truncate(self.limit);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push { id, notification } => next.push(id, notification),
            ToastAction::Dismiss(id) => {
                if !next.toasts.iter().any(|t| t.id == id) {
                    return self;
                }
                next.dismiss(id);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str) -> Notification {
        Notification {
            title: title.into(),
            description: String::new(),
        }
    }

    #[test]
    fn newest_first_and_bounded() {
        let mut q = ToastQueue::with_limit(2);
        q.push(1, note("a"));
        q.push(2, note("b"));
        q.push(3, note("c"));
        let ids: Vec<_> = q.toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, [3, 2]);
    }

    #[test]
    fn duplicate_ids_are_ignored() {
        let mut q = ToastQueue::default();
        q.push(1, note("a"));
        q.push(1, note("a"));
        assert_eq!(q.toasts.len(), 1);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let mut q = ToastQueue::default();
        q.push(1, note("a"));
        q.push(2, note("b"));
        q.dismiss(1);
        assert_eq!(q.toasts.len(), 1);
        assert_eq!(q.toasts[0].title, "b");
    }

    #[test]
    fn dismissing_expired_toast_keeps_instance() {
        let q = Rc::new(ToastQueue::default());
        let next = q.clone().reduce(ToastAction::Dismiss(9));
        assert!(Rc::ptr_eq(&q, &next));
    }
}
