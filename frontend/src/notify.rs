//! 通知提示（Toast）
//!
//! 队列里只保存文案键，渲染时按当前语言翻译。

use std::time::Duration;

use leptos::prelude::*;

use crate::i18n::{Msg, use_i18n};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn alert_class(&self) -> &'static str {
        match self {
            Self::Success => "alert alert-success shadow-lg",
            Self::Error => "alert alert-error shadow-lg",
            Self::Info => "alert alert-info shadow-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub msg: Msg,
}

/// 同时可见多条提示
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, msg: Msg) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, msg });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

// =========================================================
// Leptos 集成
// =========================================================

#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
    duration: Duration,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration,
        }
    }

    /// 添加一条提示，到期后自动移除
    pub fn push(&self, kind: ToastKind, msg: Msg) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, msg));

        let queue = self.queue;
        set_timeout(move || queue.update(|q| q.dismiss(id)), self.duration);
    }

    pub fn success(&self, msg: Msg) {
        self.push(ToastKind::Success, msg);
    }

    pub fn error(&self, msg: Msg) {
        self.push(ToastKind::Error, msg);
    }

    pub fn info(&self, msg: Msg) {
        self.push(ToastKind::Info, msg);
    }

    fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

pub fn provide_notifier(duration: Duration) -> Notifier {
    let notifier = Notifier::new(duration);
    provide_context(notifier);
    notifier
}

pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier should be provided")
}

/// 右上角的提示堆叠，点击可提前关闭
#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = use_notifier();
    let i18n = use_i18n();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || notifier.queue.with(|q| q.items().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div
                            role="alert"
                            class=toast.kind.alert_class()
                            on:click=move |_| notifier.dismiss(toast.id)
                        >
                            <span>{move || i18n.t(toast.msg)}</span>
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
    fn several_toasts_stay_visible_until_dismissed() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, Msg::ProductCreated);
        let second = queue.push(ToastKind::Error, Msg::DeleteFailed);
        assert_ne!(first, second);
        assert_eq!(queue.items().len(), 2);

        queue.dismiss(first);
        assert_eq!(
            queue.items(),
            &[Toast {
                id: second,
                kind: ToastKind::Error,
                msg: Msg::DeleteFailed
            }]
        );
    }

    #[test]
    fn dismissing_twice_is_harmless() {
        let mut queue = ToastQueue::default();
        let id = queue.push(ToastKind::Info, Msg::SessionExpired);
        queue.dismiss(id);
        queue.dismiss(id);
        assert!(queue.items().is_empty());
    }
}
