// ============================================================================
// TOAST STATE - transient notifications
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    pub toasts: Vec<Toast>,
    next_id: u32,
}

pub enum ToastAction {
    Push { kind: ToastKind, message: String },
    Dismiss(u32),
}

impl ToastQueue {
    /// Id the next pushed toast will get
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut queue = (*self).clone();
        match action {
            ToastAction::Push { kind, message } => {
                // Same message already on screen
                if queue.toasts.iter().any(|t| t.kind == kind && t.message == message) {
                    return self;
                }
                queue.toasts.push(Toast {
                    id: queue.next_id,
                    kind,
                    message,
                });
                queue.next_id = queue.next_id.wrapping_add(1);
            }
            ToastAction::Dismiss(id) => {
                queue.toasts.retain(|t| t.id != id);
            }
        }
        Rc::new(queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(queue: Rc<ToastQueue>, kind: ToastKind, message: &str) -> Rc<ToastQueue> {
        queue.reduce(ToastAction::Push {
            kind,
            message: message.to_string(),
        })
    }

    #[test]
    fn push_and_dismiss() {
        let queue = Rc::new(ToastQueue::default());
        let queue = push(queue, ToastKind::Error, "Failed to fetch analytics data");
        let queue = push(queue, ToastKind::Success, "Logged in");
        assert_eq!(queue.toasts.len(), 2);
        assert_eq!(queue.next_id(), 2);

        let queue = queue.reduce(ToastAction::Dismiss(0));
        assert_eq!(queue.toasts.len(), 1);
        assert_eq!(queue.toasts[0].message, "Logged in");
    }

    #[test]
    fn duplicate_messages_are_collapsed() {
        let queue = Rc::new(ToastQueue::default());
        let queue = push(queue, ToastKind::Error, "Network error");
        let queue = push(queue, ToastKind::Error, "Network error");
        assert_eq!(queue.toasts.len(), 1);
    }
}
