//! アップロードセッション（状態機械）
//!
//! Idle → Previewing → Pending → Resolved の一本道。
//! Previewing / Resolved からは reset で Idle に戻る。
//! Pending の間はファイル選択・推論開始・リセットをすべて拒否する。
//!
//! 同期の遷移メソッド（begin_selection / accept_media / begin_prediction /
//! complete_prediction / reset）と、それを使う非同期ドライバ
//! （select_media / submit_for_prediction）がある。
//! リアクティブUIはシグナル越しに同期メソッドを呼び、I/Oだけを非同期で走らせる。
//!
//! ファイル読込は begin_selection で受け取ったチケット付きで反映する。
//! 後から別の選択・リセット・推論開始があったチケットは古いものとして拒否する。

use tracing::{debug, info, warn};

use crate::client::{InferenceClient, PredictionRequest};
use crate::error::{Error, Result};
use crate::media::{LoadedMedia, MediaFile, MediaKind, PreviewReader, PreviewSource};
use crate::notify::{Notification, Notifier};
use crate::render::{RenderState, View};
use crate::verdict::Verdict;

/// セッションの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Previewing,
    Pending,
    Resolved,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::Previewing => "previewing",
            Mode::Pending => "pending",
            Mode::Resolved => "resolved",
        }
    }
}

/// ファイル選択の受付番号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket(u64);

/// 選択中のファイル。種別・ファイル・プレビューは常に揃って存在する
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum Selection {
    #[default]
    None,
    Chosen {
        kind: MediaKind,
        file: MediaFile,
        preview: PreviewSource,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadSession {
    mode: Mode,
    selection: Selection,
    verdict: Option<Verdict>,
    /// 最新の受付番号
    selection_seq: u64,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// 推論リクエストの送信中か
    pub fn is_busy(&self) -> bool {
        self.mode == Mode::Pending
    }

    pub fn media_kind(&self) -> Option<MediaKind> {
        match &self.selection {
            Selection::Chosen { kind, .. } => Some(*kind),
            Selection::None => None,
        }
    }

    pub fn selected_file(&self) -> Option<&MediaFile> {
        match &self.selection {
            Selection::Chosen { file, .. } => Some(file),
            Selection::None => None,
        }
    }

    pub fn preview(&self) -> Option<&PreviewSource> {
        match &self.selection {
            Selection::Chosen { preview, .. } => Some(preview),
            Selection::None => None,
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        self.verdict.as_ref()
    }

    /// ファイル選択の開始。以前に発行したチケットはすべて無効になる
    ///
    /// Pending では None。
    pub fn begin_selection(&mut self) -> Option<SelectionTicket> {
        if self.is_busy() {
            warn!("selection rejected while a prediction is in flight");
            return None;
        }
        Some(SelectionTicket(self.invalidate_selections()))
    }

    /// チケットが最新か（読込失敗を通知するかどうかの判断用）
    pub fn is_current_selection(&self, ticket: SelectionTicket) -> bool {
        ticket.0 == self.selection_seq
    }

    fn invalidate_selections(&mut self) -> u64 {
        self.selection_seq += 1;
        self.selection_seq
    }

    /// 読込済みのファイルを受け入れて Previewing に遷移
    ///
    /// Resolved からはリセットしてから受け入れる。
    /// Pending では `SessionBusy`、最新でないチケットは `StaleSelection`。どちらも状態は変えない。
    pub fn accept_media(
        &mut self,
        ticket: SelectionTicket,
        kind: MediaKind,
        loaded: LoadedMedia,
    ) -> Result<()> {
        if self.is_busy() {
            warn!(file = loaded.file.name(), "selection rejected while a prediction is in flight");
            return Err(Error::SessionBusy);
        }
        if !self.is_current_selection(ticket) {
            debug!(file = loaded.file.name(), "superseded selection dropped");
            return Err(Error::StaleSelection);
        }
        self.invalidate_selections();
        if self.mode == Mode::Resolved {
            self.clear();
        }

        debug!(
            kind = kind.as_str(),
            file = loaded.file.name(),
            bytes = loaded.file.len(),
            from = self.mode.as_str(),
            "media selected"
        );
        self.selection = Selection::Chosen {
            kind,
            file: loaded.file,
            preview: loaded.preview,
        };
        self.verdict = None;
        self.mode = Mode::Previewing;
        Ok(())
    }

    /// 非同期の読込結果を反映し、利用者に知らせるべきエラーを返す
    ///
    /// 古いチケットの結果は成功・失敗とも黙って捨てる。
    pub fn finish_selection(
        &mut self,
        ticket: SelectionTicket,
        kind: MediaKind,
        read: Result<LoadedMedia>,
    ) -> Option<Error> {
        let outcome = match read {
            Ok(loaded) => self.accept_media(ticket, kind, loaded),
            Err(err) if self.is_current_selection(ticket) => {
                warn!(error = %err, "preview read failed");
                Err(err)
            }
            Err(err) => {
                debug!(error = %err, "read failure of superseded selection dropped");
                Ok(())
            }
        };
        match outcome {
            Err(Error::StaleSelection) | Ok(()) => None,
            Err(err) => Some(err),
        }
    }

    /// Previewing → Pending。送信内容を返す。それ以外の状態では何もしない
    pub fn begin_prediction(&mut self) -> Option<PredictionRequest> {
        if self.mode != Mode::Previewing {
            debug!(mode = self.mode.as_str(), "prediction trigger ignored");
            return None;
        }
        let Selection::Chosen { kind, file, .. } = &self.selection else {
            return None;
        };

        let request = PredictionRequest {
            kind: *kind,
            file: file.clone(),
        };
        self.mode = Mode::Pending;
        self.invalidate_selections();
        info!(kind = request.kind.as_str(), file = request.file.name(), "prediction started");
        Some(request)
    }

    /// 推論結果を反映する
    ///
    /// 成功なら Resolved、失敗なら Previewing に戻る（ファイルは残るので再送できる）。
    /// Pending 以外で呼ばれた場合は無視して None。
    pub fn complete_prediction(&mut self, outcome: Result<Verdict>) -> Option<Notification> {
        if self.mode != Mode::Pending {
            warn!(mode = self.mode.as_str(), "prediction outcome arrived outside pending; dropped");
            return None;
        }

        match outcome {
            Ok(verdict) => {
                info!(label = ?verdict.label, code = ?verdict.code, "prediction resolved");
                self.verdict = Some(verdict);
                self.mode = Mode::Resolved;
                Some(Notification::PredictionSucceeded)
            }
            Err(err) => {
                warn!(error = %err, "prediction failed");
                self.verdict = None;
                self.mode = Mode::Previewing;
                Some(Notification::PredictionFailed)
            }
        }
    }

    /// Idle に戻す。Pending では何もせず false
    pub fn reset(&mut self) -> bool {
        if self.is_busy() {
            warn!("reset rejected while a prediction is in flight");
            return false;
        }
        if self.mode != Mode::Idle {
            debug!(from = self.mode.as_str(), "session reset");
        }
        self.clear();
        self.invalidate_selections();
        true
    }

    fn clear(&mut self) {
        self.selection = Selection::None;
        self.verdict = None;
        self.mode = Mode::Idle;
    }

    pub fn render_state(&self) -> RenderState {
        let view = match self.mode {
            Mode::Idle => View::Picker,
            Mode::Previewing => View::Preview,
            Mode::Pending => View::Busy,
            Mode::Resolved => View::Verdict,
        };
        let predict_action = match self.mode {
            Mode::Previewing => self.media_kind(),
            _ => None,
        };

        RenderState {
            view,
            media_kind: self.media_kind(),
            preview: self.preview().cloned(),
            verdict: self.verdict,
            show_try_another: self.media_kind().is_some() && !self.is_busy(),
            predict_action,
        }
    }

    /// ファイルを読み込んでから選択する
    ///
    /// 読込に失敗した場合、セッションは元の状態のまま。
    pub async fn select_media<R: PreviewReader>(
        &mut self,
        kind: MediaKind,
        source: R::Source,
        reader: &R,
    ) -> Result<()> {
        let ticket = self.begin_selection().ok_or(Error::SessionBusy)?;

        let loaded = reader.read(source, kind).await.map_err(|err| {
            warn!(error = %err, kind = kind.as_str(), "preview could not be read");
            err
        })?;
        self.accept_media(ticket, kind, loaded)
    }

    /// 推論を1回実行し、結果を通知する
    ///
    /// Previewing 以外では何もせず None。
    pub async fn submit_for_prediction<C, N>(&mut self, client: &C, notifier: &N) -> Option<Notification>
    where
        C: InferenceClient,
        N: Notifier + ?Sized,
    {
        let request = self.begin_prediction()?;
        let outcome = client.predict(&request).await;
        let notification = self.complete_prediction(outcome)?;
        notification.dispatch(notifier);
        Some(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::InMemoryReader;
    use crate::verdict::VerdictLabel;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    /// 決まった結果を返すクライアント
    struct StubClient {
        outcome: Result<Verdict>,
        calls: RefCell<Vec<PredictionRequest>>,
    }

    impl StubClient {
        fn returning_code(code: i64) -> Self {
            Self {
                outcome: Ok(Verdict::from_code(code)),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn failing(err: Error) -> Self {
            Self {
                outcome: Err(err),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl InferenceClient for StubClient {
        async fn predict(&self, request: &PredictionRequest) -> Result<Verdict> {
            self.calls.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        successes: Cell<usize>,
        errors: Cell<usize>,
    }

    impl Notifier for RecordingNotifier {
        fn notify_success(&self, _message: &str) {
            self.successes.set(self.successes.get() + 1);
        }
        fn notify_error(&self, _message: &str) {
            self.errors.set(self.errors.get() + 1);
        }
    }

    struct UnreadableReader;

    impl PreviewReader for UnreadableReader {
        type Source = &'static str;

        async fn read(&self, source: &'static str, _kind: MediaKind) -> Result<LoadedMedia> {
            Err(Error::PreviewRead(format!("{}: permission denied", source)))
        }
    }

    fn image() -> MediaFile {
        MediaFile::new("face.jpg", "image/jpeg", vec![0xff, 0xd8, 0xff, 0xe0])
    }

    fn video() -> MediaFile {
        MediaFile::new("clip.mp4", "video/mp4", vec![0, 0, 0, 0x18, b'f', b't', b'y', b'p'])
    }

    fn selected(kind: MediaKind, file: MediaFile) -> UploadSession {
        let mut session = UploadSession::new();
        block_on(session.select_media(kind, file, &InMemoryReader)).unwrap();
        session
    }

    fn assert_idle(session: &UploadSession) {
        assert_eq!(session.mode(), Mode::Idle);
        assert_eq!(session.media_kind(), None);
        assert!(session.selected_file().is_none());
        assert!(session.preview().is_none());
        assert!(session.verdict().is_none());
        assert!(!session.is_busy());
    }

    #[test]
    fn test_new_session_is_idle() {
        assert_idle(&UploadSession::new());
    }

    #[test]
    fn test_select_image_enters_previewing() {
        let session = selected(MediaKind::Image, image());
        assert_eq!(session.mode(), Mode::Previewing);
        assert_eq!(session.media_kind(), Some(MediaKind::Image));
        assert_eq!(session.selected_file().unwrap().name(), "face.jpg");
        assert!(session.preview().unwrap().as_str().starts_with("data:image/jpeg;base64,"));
        assert!(session.verdict().is_none());
    }

    #[test]
    fn test_select_replaces_previous_file() {
        let mut session = selected(MediaKind::Image, image());
        block_on(session.select_media(MediaKind::Video, video(), &InMemoryReader)).unwrap();

        assert_eq!(session.media_kind(), Some(MediaKind::Video));
        assert_eq!(session.selected_file().unwrap().name(), "clip.mp4");
        assert_eq!(session.preview().unwrap().mime_type(), "video/mp4");
    }

    #[test]
    fn test_preview_failure_keeps_prior_state() {
        let mut session = selected(MediaKind::Image, image());
        let before = session.render_state();

        let result = block_on(session.select_media(MediaKind::Video, "locked.mp4", &UnreadableReader));
        assert!(matches!(result, Err(Error::PreviewRead(_))));
        assert_eq!(session.render_state(), before);
        assert_eq!(session.selected_file().unwrap().name(), "face.jpg");

        let mut idle = UploadSession::new();
        let result = block_on(idle.select_media(MediaKind::Image, "x.png", &UnreadableReader));
        assert!(result.is_err());
        assert_idle(&idle);
    }

    #[test]
    fn test_empty_file_is_not_accepted() {
        let mut session = UploadSession::new();
        let empty = MediaFile::new("empty.jpg", "image/jpeg", Vec::new());
        let result = block_on(session.select_media(MediaKind::Image, empty, &InMemoryReader));
        assert!(matches!(result, Err(Error::PreviewRead(_))));
        assert_idle(&session);
    }

    #[test]
    fn test_scenario_image_authentic() {
        let mut session = selected(MediaKind::Image, image());
        let client = StubClient::returning_code(0);
        let notifier = RecordingNotifier::default();

        let note = block_on(session.submit_for_prediction(&client, &notifier));

        assert_eq!(note, Some(Notification::PredictionSucceeded));
        assert_eq!(session.mode(), Mode::Resolved);
        assert_eq!(session.verdict().unwrap().label, VerdictLabel::Authentic);
        assert!(!session.is_busy());
        assert_eq!(notifier.successes.get(), 1);
        assert_eq!(notifier.errors.get(), 0);

        let calls = client.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].kind, MediaKind::Image);
        assert_eq!(calls[0].form_field(), "image");
    }

    #[test]
    fn test_scenario_video_manipulated() {
        let mut session = selected(MediaKind::Video, video());
        let client = StubClient::returning_code(1);
        let notifier = RecordingNotifier::default();

        block_on(session.submit_for_prediction(&client, &notifier));

        assert_eq!(session.verdict().unwrap().label, VerdictLabel::Manipulated);
        assert_eq!(client.calls.borrow()[0].kind, MediaKind::Video);
    }

    #[test]
    fn test_scenario_unrecognized_code() {
        let mut session = selected(MediaKind::Image, image());
        let client = StubClient::returning_code(7);
        let notifier = RecordingNotifier::default();

        block_on(session.submit_for_prediction(&client, &notifier));

        assert_eq!(session.mode(), Mode::Resolved);
        assert_eq!(session.verdict().unwrap().label, VerdictLabel::Undetected);
    }

    #[test]
    fn test_scenario_transport_failure() {
        let mut session = selected(MediaKind::Video, video());
        let client = StubClient::failing(Error::PredictionTransport("connection refused".into()));
        let notifier = RecordingNotifier::default();

        let note = block_on(session.submit_for_prediction(&client, &notifier));

        assert_eq!(note, Some(Notification::PredictionFailed));
        assert_eq!(session.mode(), Mode::Previewing);
        assert!(session.verdict().is_none());
        assert!(!session.is_busy());
        assert_eq!(notifier.errors.get(), 1);
        assert_eq!(notifier.successes.get(), 0);
        // ファイルとプレビューは残る
        assert_eq!(session.selected_file().unwrap().name(), "clip.mp4");
        assert!(session.preview().is_some());
    }

    #[test]
    fn test_decode_failure_recovers_like_transport_failure() {
        let mut session = selected(MediaKind::Image, image());
        let client = StubClient::failing(Error::PredictionDecode("not json".into()));
        let notifier = RecordingNotifier::default();

        block_on(session.submit_for_prediction(&client, &notifier));

        assert_eq!(session.mode(), Mode::Previewing);
        assert_eq!(notifier.errors.get(), 1);
    }

    #[test]
    fn test_retry_after_failure() {
        let mut session = selected(MediaKind::Image, image());
        let notifier = RecordingNotifier::default();

        block_on(session.submit_for_prediction(
            &StubClient::failing(Error::PredictionTransport("HTTP 503".into())),
            &notifier,
        ));
        block_on(session.submit_for_prediction(&StubClient::returning_code(1), &notifier));

        assert_eq!(session.mode(), Mode::Resolved);
        assert_eq!(session.verdict().unwrap().label, VerdictLabel::Manipulated);
        assert_eq!(notifier.errors.get(), 1);
        assert_eq!(notifier.successes.get(), 1);
    }

    #[test]
    fn test_scenario_submit_without_file() {
        let mut session = UploadSession::new();
        let client = StubClient::returning_code(0);
        let notifier = RecordingNotifier::default();

        let note = block_on(session.submit_for_prediction(&client, &notifier));

        assert_eq!(note, None);
        assert_eq!(session.mode(), Mode::Idle);
        assert!(client.calls.borrow().is_empty());
        assert_eq!(notifier.successes.get() + notifier.errors.get(), 0);
    }

    #[test]
    fn test_submit_after_resolved_is_ignored() {
        let mut session = selected(MediaKind::Image, image());
        let client = StubClient::returning_code(0);
        let notifier = RecordingNotifier::default();
        block_on(session.submit_for_prediction(&client, &notifier));

        let note = block_on(session.submit_for_prediction(&client, &notifier));
        assert_eq!(note, None);
        assert_eq!(client.calls.borrow().len(), 1);
    }

    #[test]
    fn test_reset_from_every_interactive_mode() {
        let mut idle = UploadSession::new();
        assert!(idle.reset());
        assert_idle(&idle);

        let mut previewing = selected(MediaKind::Video, video());
        assert!(previewing.reset());
        assert_idle(&previewing);

        let mut resolved = selected(MediaKind::Image, image());
        block_on(resolved.submit_for_prediction(&StubClient::returning_code(1), &RecordingNotifier::default()));
        assert_eq!(resolved.mode(), Mode::Resolved);
        assert!(resolved.reset());
        assert_idle(&resolved);
    }

    #[test]
    fn test_pending_rejects_everything() {
        let mut session = selected(MediaKind::Image, image());
        let request = session.begin_prediction().expect("should start");
        assert_eq!(request.file.name(), "face.jpg");
        assert!(session.is_busy());
        assert_eq!(session.mode(), Mode::Pending);

        // 2回目の開始は無視
        assert!(session.begin_prediction().is_none());
        // リセット拒否
        assert!(!session.reset());
        assert_eq!(session.mode(), Mode::Pending);
        // 選択拒否（開始時・反映時とも）
        assert_eq!(session.begin_selection(), None);
        let loaded = LoadedMedia::from_file(video(), MediaKind::Video).unwrap();
        let ticket = SelectionTicket(session.selection_seq);
        assert_eq!(session.accept_media(ticket, MediaKind::Video, loaded), Err(Error::SessionBusy));
        let result = block_on(session.select_media(MediaKind::Video, video(), &InMemoryReader));
        assert_eq!(result, Err(Error::SessionBusy));
        assert_eq!(session.media_kind(), Some(MediaKind::Image));

        let note = session.complete_prediction(Ok(Verdict::from_code(0)));
        assert_eq!(note, Some(Notification::PredictionSucceeded));
        assert!(!session.is_busy());
    }

    #[test]
    fn test_outcome_outside_pending_is_dropped() {
        let mut session = selected(MediaKind::Image, image());
        assert_eq!(session.complete_prediction(Ok(Verdict::from_code(1))), None);
        assert_eq!(session.mode(), Mode::Previewing);
        assert!(session.verdict().is_none());
    }

    #[test]
    fn test_new_selection_after_resolved_discards_verdict() {
        let mut session = selected(MediaKind::Image, image());
        block_on(session.submit_for_prediction(&StubClient::returning_code(1), &RecordingNotifier::default()));
        assert!(session.verdict().is_some());

        block_on(session.select_media(MediaKind::Video, video(), &InMemoryReader)).unwrap();

        assert_eq!(session.mode(), Mode::Previewing);
        assert!(session.verdict().is_none());
        assert_eq!(session.media_kind(), Some(MediaKind::Video));
    }

    #[test]
    fn test_render_state_per_mode() {
        let idle = UploadSession::new().render_state();
        assert_eq!(idle.view, View::Picker);
        assert!(idle.shows_picker());
        assert!(!idle.show_try_another);
        assert_eq!(idle.predict_action, None);

        let mut session = selected(MediaKind::Video, video());
        let previewing = session.render_state();
        assert_eq!(previewing.view, View::Preview);
        assert!(previewing.show_try_another);
        assert_eq!(previewing.predict_action, Some(MediaKind::Video));
        assert!(previewing.preview.is_some());

        session.begin_prediction();
        let busy = session.render_state();
        assert!(busy.is_busy());
        assert!(!busy.show_try_another);
        assert_eq!(busy.predict_action, None);

        session.complete_prediction(Ok(Verdict::from_code(0)));
        let resolved = session.render_state();
        assert_eq!(resolved.view, View::Verdict);
        assert!(resolved.show_try_another);
        assert_eq!(resolved.predict_action, None);
        assert_eq!(resolved.verdict.unwrap().label, VerdictLabel::Authentic);
    }

    fn loaded(file: MediaFile, kind: MediaKind) -> LoadedMedia {
        LoadedMedia::from_file(file, kind).unwrap()
    }

    fn old_image() -> MediaFile {
        MediaFile::new("old.jpg", "image/jpeg", vec![0xff, 0xd8, 0x00])
    }

    #[test]
    fn test_read_landing_after_reset_is_dropped() {
        let mut session = UploadSession::new();
        let first = session.begin_selection().unwrap();
        let second = session.begin_selection().unwrap();

        session.accept_media(second, MediaKind::Video, loaded(video(), MediaKind::Video)).unwrap();
        assert!(session.reset());

        let result = session.accept_media(first, MediaKind::Image, loaded(old_image(), MediaKind::Image));
        assert_eq!(result, Err(Error::StaleSelection));
        assert_idle(&session);
    }

    #[test]
    fn test_read_started_before_reset_is_dropped() {
        let mut session = UploadSession::new();
        let ticket = session.begin_selection().unwrap();
        assert!(session.reset());

        let result = session.accept_media(ticket, MediaKind::Image, loaded(old_image(), MediaKind::Image));
        assert_eq!(result, Err(Error::StaleSelection));
        assert!(!session.is_current_selection(ticket));
        assert_idle(&session);
    }

    #[test]
    fn test_older_read_finishing_last_does_not_replace_newer() {
        let mut session = UploadSession::new();
        let first = session.begin_selection().unwrap();
        let second = session.begin_selection().unwrap();

        session.accept_media(second, MediaKind::Video, loaded(video(), MediaKind::Video)).unwrap();
        let result = session.accept_media(first, MediaKind::Image, loaded(old_image(), MediaKind::Image));

        assert_eq!(result, Err(Error::StaleSelection));
        assert_eq!(session.media_kind(), Some(MediaKind::Video));
        assert_eq!(session.selected_file().unwrap().name(), "clip.mp4");
    }

    #[test]
    fn test_older_read_finishing_first_is_dropped() {
        let mut session = UploadSession::new();
        let first = session.begin_selection().unwrap();
        let second = session.begin_selection().unwrap();

        let result = session.accept_media(first, MediaKind::Image, loaded(old_image(), MediaKind::Image));
        assert_eq!(result, Err(Error::StaleSelection));
        assert_idle(&session);

        session.accept_media(second, MediaKind::Video, loaded(video(), MediaKind::Video)).unwrap();
        assert_eq!(session.selected_file().unwrap().name(), "clip.mp4");
    }

    #[test]
    fn test_ticket_is_single_use() {
        let mut session = UploadSession::new();
        let ticket = session.begin_selection().unwrap();
        session.accept_media(ticket, MediaKind::Image, loaded(image(), MediaKind::Image)).unwrap();

        let again = session.accept_media(ticket, MediaKind::Video, loaded(video(), MediaKind::Video));
        assert_eq!(again, Err(Error::StaleSelection));
        assert_eq!(session.media_kind(), Some(MediaKind::Image));
    }

    #[test]
    fn test_read_overlapping_prediction_never_lands() {
        let mut session = selected(MediaKind::Image, image());
        let ticket = session.begin_selection().unwrap();

        session.begin_prediction().expect("should start");
        let during = session.accept_media(ticket, MediaKind::Video, loaded(video(), MediaKind::Video));
        assert_eq!(during, Err(Error::SessionBusy));

        session.complete_prediction(Ok(Verdict::from_code(0)));
        let after = session.accept_media(ticket, MediaKind::Video, loaded(video(), MediaKind::Video));
        assert_eq!(after, Err(Error::StaleSelection));
        assert_eq!(session.mode(), Mode::Resolved);
        assert_eq!(session.verdict().unwrap().label, VerdictLabel::Authentic);
        assert_eq!(session.selected_file().unwrap().name(), "face.jpg");
    }

    #[test]
    fn test_finish_selection_applies_current_read() {
        let mut session = UploadSession::new();
        let ticket = session.begin_selection().unwrap();

        let surfaced = session.finish_selection(ticket, MediaKind::Image, Ok(loaded(image(), MediaKind::Image)));
        assert_eq!(surfaced, None);
        assert_eq!(session.mode(), Mode::Previewing);
    }

    #[test]
    fn test_finish_selection_reports_current_read_failure() {
        let mut session = selected(MediaKind::Image, image());
        let ticket = session.begin_selection().unwrap();

        let surfaced = session.finish_selection(ticket, MediaKind::Video, Err(Error::PreviewRead("broken".into())));
        assert_eq!(surfaced, Some(Error::PreviewRead("broken".into())));
        assert_eq!(session.selected_file().unwrap().name(), "face.jpg");
    }

    #[test]
    fn test_finish_selection_after_reset_is_silent() {
        let mut session = UploadSession::new();
        let ok_ticket = session.begin_selection().unwrap();
        let failing_ticket = session.begin_selection().unwrap();
        assert!(session.reset());

        assert_eq!(
            session.finish_selection(ok_ticket, MediaKind::Image, Ok(loaded(image(), MediaKind::Image))),
            None
        );
        assert_eq!(
            session.finish_selection(failing_ticket, MediaKind::Video, Err(Error::PreviewRead("gone".into()))),
            None
        );
        assert_idle(&session);
    }

    #[test]
    fn test_finish_selection_while_pending_reports_busy() {
        let mut session = selected(MediaKind::Image, image());
        let ticket = session.begin_selection().unwrap();
        session.begin_prediction().expect("should start");

        let surfaced = session.finish_selection(ticket, MediaKind::Video, Ok(loaded(video(), MediaKind::Video)));
        assert_eq!(surfaced, Some(Error::SessionBusy));
        assert_eq!(session.mode(), Mode::Pending);
        assert_eq!(session.media_kind(), Some(MediaKind::Image));
    }

    #[test]
    fn test_finish_selection_overlapping_reads_keep_latest() {
        let mut session = UploadSession::new();
        let first = session.begin_selection().unwrap();
        let second = session.begin_selection().unwrap();

        assert_eq!(
            session.finish_selection(second, MediaKind::Video, Ok(loaded(video(), MediaKind::Video))),
            None
        );
        assert_eq!(
            session.finish_selection(first, MediaKind::Image, Err(Error::PreviewRead("late".into()))),
            None
        );
        assert_eq!(session.mode(), Mode::Previewing);
        assert_eq!(session.selected_file().unwrap().name(), "clip.mp4");
    }
}
