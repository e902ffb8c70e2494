use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// Toast queue shared through context. Each toast removes itself after
/// `lifetime_ms`.
#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
    lifetime_ms: u32,
}

impl Notifications {
    pub fn new(lifetime_ms: u32) -> Self {
        Self {
            items: RwSignal::new(vec![]),
            next_id: StoredValue::new(0),
            lifetime_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message.into(), NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message.into(), NotificationKind::Error);
    }

    fn push(&self, message: String, kind: NotificationKind) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| items.push(Notification { id, message, kind }));

        let items = self.items;
        let callback = wasm_bindgen::closure::Closure::once(move || {
            items.try_update(|items| items.retain(|n| n.id != id));
        });
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                self.lifetime_ms as i32,
            );
        }
        callback.forget();
    }
}

#[component]
pub fn NotificationTray() -> impl IntoView {
    let notifications = expect_context::<Notifications>();

    view! {
        <div class="notification-tray">
            {move || notifications.items.get().into_iter().map(|n| {
                let class = match n.kind {
                    NotificationKind::Success => "notification success",
                    NotificationKind::Error => "notification error",
                };
                view! { <div class=class>{n.message}</div> }
            }).collect::<Vec<_>>()}
        </div>
    }
}
