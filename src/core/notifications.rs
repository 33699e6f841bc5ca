//! Bounded queue backing the toast region.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    capacity: usize,
}

impl ToastQueue {
    pub fn new(capacity: usize) -> Self {
        Self { toasts: Vec::new(), next_id: 1, capacity: capacity.max(1) }
    }

    /// Adds a toast, evicting the oldest ones past capacity. Returns its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, kind, message: message.into() });
        if self.toasts.len() > self.capacity {
            let overflow = self.toasts.len() - self.capacity;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::new(4);
        let id = queue.push(ToastKind::Success, "Task removed");
        assert_eq!(queue.toasts()[0].message, "Task removed");
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.toasts().is_empty());
    }

    #[test]
    fn test_oldest_evicted_past_capacity() {
        let mut queue = ToastQueue::new(2);
        queue.push(ToastKind::Error, "first");
        queue.push(ToastKind::Error, "second");
        queue.push(ToastKind::Success, "third");
        let messages: Vec<_> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, ["second", "third"]);
    }
}
