//! 端末への通知出力

use authentic_eye_common::Notifier;

/// 通知を標準エラーに出す（標準出力は結果用）
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify_success(&self, message: &str) {
        eprintln!("✔ {}", message);
    }

    fn notify_error(&self, message: &str) {
        eprintln!("✖ {}", message);
    }
}
