use std::path::PathBuf;
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use iced::{Element, Subscription, Task, Theme};

use phraselator_core::faq::domain::faq_table::{FaqTable, QuestionRecord};
use phraselator_core::faq::domain::match_candidate::MatchCandidate;
use phraselator_core::shared::constants::{FAQ_SOURCE_URL, QUERY_FILENAME};
use phraselator_core::speech::domain::language::Language;

use crate::settings::{Appearance, Settings};
use crate::theme;
use crate::views;
use crate::workers::query_worker::{self, QueryMessage, QueryParams};

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(Language),
    AppearanceChanged(Appearance),
    Record,
    PollWorker,
    CandidateSelected(String),
    Confirm,
    ShowListing(Language),
    CloseListing,
    OpenFaqWebsite,
    PollSystemTheme,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    pub table: FaqTable,
    pub settings: Settings,
    pub language: Language,
    pub listing: Option<Language>,
    pub recording: bool,
    pub error: Option<String>,
    pub transcription: Option<String>,
    pub candidates: Vec<MatchCandidate>,
    pub selected: Option<String>,
    pub confirmed: Option<QuestionRecord>,
    model_dir: Option<PathBuf>,
    debug: bool,
    worker_rx: Option<Receiver<QueryMessage>>,
}

impl App {
    pub fn new(table: FaqTable, model_dir: Option<PathBuf>, debug: bool) -> (Self, Task<Message>) {
        let settings = Settings::load();
        let language = settings.query_language.into();
        (
            Self {
                table,
                settings,
                language,
                listing: None,
                recording: false,
                error: None,
                transcription: None,
                candidates: Vec::new(),
                selected: None,
                confirmed: None,
                model_dir,
                debug,
                worker_rx: None,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::LanguageSelected(language) => {
                self.language = language;
                self.settings.query_language = language.into();
                self.settings.save();
                // Candidate labels are minted in the query language, so a
                // stale selection cannot survive a language switch.
                self.candidates.clear();
                self.selected = None;
                self.confirmed = None;
                self.transcription = None;
            }
            Message::AppearanceChanged(appearance) => {
                self.settings.appearance = appearance;
                self.settings.save();
            }
            Message::Record => {
                if self.recording {
                    return Task::none();
                }
                self.recording = true;
                self.error = None;
                self.transcription = None;
                self.candidates.clear();
                self.selected = None;
                self.confirmed = None;
                self.worker_rx = Some(query_worker::spawn(QueryParams {
                    table: self.table.clone(),
                    language: self.language,
                    query_path: PathBuf::from(QUERY_FILENAME),
                    model_dir: self.model_dir.clone(),
                    debug: self.debug,
                }));
            }
            Message::PollWorker => {
                let received = self.worker_rx.as_ref().map(|rx| rx.try_recv());
                match received {
                    Some(Ok(QueryMessage::Ranked {
                        transcription,
                        candidates,
                    })) => {
                        self.recording = false;
                        self.worker_rx = None;
                        self.selected = candidates.first().map(|c| c.label(self.language));
                        self.transcription = Some(transcription);
                        self.candidates = candidates;
                    }
                    Some(Ok(QueryMessage::Error(e))) => {
                        self.recording = false;
                        self.worker_rx = None;
                        self.error = Some(e);
                    }
                    // The worker died without reporting; stop showing the
                    // listening state.
                    Some(Err(TryRecvError::Disconnected)) => {
                        self.recording = false;
                        self.worker_rx = None;
                        self.error = Some("recording stopped unexpectedly".to_string());
                    }
                    Some(Err(TryRecvError::Empty)) | None => {}
                }
            }
            Message::CandidateSelected(label) => {
                self.selected = Some(label);
                self.confirmed = None;
            }
            Message::Confirm => {
                self.confirmed = self
                    .selected
                    .as_ref()
                    .and_then(|label| {
                        self.candidates
                            .iter()
                            .find(|c| c.label(self.language) == *label)
                    })
                    .map(|c| c.record.clone());
            }
            Message::ShowListing(language) => {
                self.listing = Some(language);
            }
            Message::CloseListing => {
                self.listing = None;
            }
            Message::OpenFaqWebsite => {
                let _ = open::that(FAQ_SOURCE_URL);
            }
            Message::PollSystemTheme => {
                // Theme is resolved fresh in theme() on every render,
                // so just requesting a redraw is enough.
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self.listing {
            Some(language) => views::listing_view::view(&self.table, language),
            None => views::query_view::view(self),
        }
    }

    pub fn theme(&self) -> Theme {
        theme::resolve_theme(self.settings.appearance)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();
        if self.worker_rx.is_some() {
            subscriptions
                .push(iced::time::every(Duration::from_millis(100)).map(|_| Message::PollWorker));
        }
        if self.settings.appearance == Appearance::System {
            subscriptions
                .push(iced::time::every(Duration::from_secs(2)).map(|_| Message::PollSystemTheme));
        }
        Subscription::batch(subscriptions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_app() -> (App, crossbeam_channel::Sender<QueryMessage>) {
        let (mut app, _) = App::new(FaqTable::default(), None, false);
        let (tx, rx) = crossbeam_channel::unbounded();
        app.recording = true;
        app.worker_rx = Some(rx);
        (app, tx)
    }

    #[test]
    fn test_poll_with_no_message_keeps_listening() {
        let (mut app, _tx) = recording_app();
        app.update(Message::PollWorker);
        assert!(app.recording);
        assert!(app.worker_rx.is_some());
    }

    #[test]
    fn test_dead_worker_clears_listening_state() {
        let (mut app, tx) = recording_app();
        drop(tx);
        app.update(Message::PollWorker);
        assert!(!app.recording);
        assert!(app.worker_rx.is_none());
        assert!(app.error.is_some());
    }
}
