//! 通知の境界
//!
//! セッションはトーストを直接描画しない。注入された Notifier に渡すだけ。

/// セッションが発行する通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    PredictionSucceeded,
    PredictionFailed,
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Notification::PredictionSucceeded => "Predicted Successfully",
            Notification::PredictionFailed => "API Error!",
        }
    }

    pub fn dispatch<N: Notifier + ?Sized>(&self, notifier: &N) {
        match self {
            Notification::PredictionSucceeded => notifier.notify_success(self.message()),
            Notification::PredictionFailed => notifier.notify_error(self.message()),
        }
    }
}

/// トースト等の通知手段
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}
