//! トースト通知

use authentic_eye_common::Notifier;
use gloo::timers::callback::Timeout;
use leptos::prelude::*;

/// 表示時間
pub const TOAST_DURATION_MS: u32 = 5_000;
/// 同時に表示する最大数
pub const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Error,
}

impl ToastTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastTone::Success => "success",
            ToastTone::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub tone: ToastTone,
    pub message: String,
}

/// 追加。古いものから捨てて MAX_TOASTS 件に収める
pub fn push_toast(list: &mut Vec<Toast>, toast: Toast) {
    list.push(toast);
    if list.len() > MAX_TOASTS {
        let excess = list.len() - MAX_TOASTS;
        list.drain(..excess);
    }
}

pub fn dismiss_toast(list: &mut Vec<Toast>, id: u64) {
    list.retain(|t| t.id != id);
}

/// シグナルにトーストを積む Notifier
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<Vec<Toast>>) -> Self {
        Self {
            toasts,
            next_id: StoredValue::new(0),
        }
    }

    fn show(&self, tone: ToastTone, message: &str) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.toasts.update(|list| {
            push_toast(
                list,
                Toast {
                    id,
                    tone,
                    message: message.to_string(),
                },
            )
        });

        let toasts = self.toasts;
        Timeout::new(TOAST_DURATION_MS, move || {
            toasts.try_update(|list| dismiss_toast(list, id));
        })
        .forget();
    }
}

impl Notifier for ToastNotifier {
    fn notify_success(&self, message: &str) {
        self.show(ToastTone::Success, message);
    }

    fn notify_error(&self, message: &str) {
        tracing::warn!(message, "error toast");
        self.show(ToastTone::Error, message);
    }
}
