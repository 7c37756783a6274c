//! Transient notifications shown in the bottom-right corner
//!
//! `NotificationService` is provided via context;
//! `NotificationHost` renders it once inside the layout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Display time before a notification disappears on its own
pub const AUTO_DISMISS_MS: u32 = 4000;
/// Older entries are dropped beyond this
const MAX_VISIBLE: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

/// Ordered queue of visible notifications
#[derive(Clone, Debug, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push(Notification {
            id: self.next_id,
            kind,
            text: text.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NotificationQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn notify(&self, kind: NotificationKind, text: impl Into<String>) {
        let mut id = 0;
        let text = text.into();
        self.queue.update(|q| id = q.push(kind, text));

        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    pub fn info(&self, text: impl Into<String>) {
        self.notify(NotificationKind::Info, text);
    }

    pub fn success(&self, text: impl Into<String>) {
        self.notify(NotificationKind::Success, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.notify(NotificationKind::Error, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

fn intent(kind: NotificationKind) -> MessageBarIntent {
    match kind {
        NotificationKind::Info => MessageBarIntent::Info,
        NotificationKind::Success => MessageBarIntent::Success,
        NotificationKind::Error => MessageBarIntent::Error,
    }
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notification-host">
            <For
                each=move || service.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class="notification" on:click=move |_| service.dismiss(id)>
                            <MessageBar intent=intent(n.kind)>
                                <MessageBarBody>{n.text}</MessageBarBody>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_push_and_dismiss() {
        let mut q = NotificationQueue::default();
        let a = q.push(NotificationKind::Info, "a");
        let b = q.push(NotificationKind::Error, "b");
        assert_ne!(a, b);
        q.dismiss(a);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].text, "b");
        // Unknown ids are ignored
        q.dismiss(999);
        assert_eq!(q.items().len(), 1);
    }

    #[test]
    fn test_queue_drops_oldest() {
        let mut q = NotificationQueue::default();
        for i in 0..8 {
            q.push(NotificationKind::Info, format!("n{}", i));
        }
        assert_eq!(q.items().len(), MAX_VISIBLE);
        assert_eq!(q.items()[0].text, "n3");
        assert_eq!(q.items()[MAX_VISIBLE - 1].text, "n7");
    }
}
