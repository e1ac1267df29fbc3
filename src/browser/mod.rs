//! # Record Browser
//!
//! The view over the record service: it lists every record on mount, narrows the
//! display to one record on search, and adds records through a validated form.
//!
//! ## Operations
//!
//! | Operation | Request(s) | Display afterwards |
//! |-----------|------------|--------------------|
//! | [`mount`](RecordBrowser::mount) | `list_all` (first call only) | full list |
//! | [`show_all`](RecordBrowser::show_all) | `list_all` | full list |
//! | [`search`](RecordBrowser::search) | `find_by_id` | the match, or nothing |
//! | [`submit`](RecordBrowser::submit) | `add`, then `list_all` | full list |
//!
//! Service failures are logged through `tracing` and leave the display as it
//! was; the only user-visible sign is the loading indicator going away.
//! Validation problems (empty form fields, malformed search text) are shown
//! inline and never reach the service.
//!
//! ## Sequencing
//!
//! Every operation borrows the browser mutably, so operations on one browser
//! run one after another and a slow response can never overwrite the result of
//! a later one.
//!
//! ## Observing the view
//!
//! [`RecordBrowser::subscribe`] yields a stream of [`ViewEvent`]s, which is how a
//! renderer learns that the progress indicator should appear or disappear.

pub mod form;
pub mod state;
pub mod table;

pub use form::{Field, RecordForm};
pub use state::ViewState;
pub use table::{Column, RecordTable, SortDirection};

use crate::clients::RecordService;
use crate::model::{TaxRecord, Tid, INVALID_TID_MESSAGE};
use tokio::sync::broadcast;
use tracing::{debug, error, info, instrument};

const EVENT_CAPACITY: usize = 64;

/// What an operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to do (empty search box, already mounted).
    Skipped,
    /// Input failed validation; no request was made.
    Rejected,
    /// Every request succeeded and the display was updated.
    Completed,
    /// A request failed; the error was logged.
    Failed,
}

/// Changes a renderer needs to know about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    LoadingStarted,
    LoadingFinished,
    RecordsReplaced { count: usize },
    FormCleared,
    ValidationFailed { fields: Vec<Field> },
}

/// The view component. Owns the view state and the form; talks to `S`.
pub struct RecordBrowser<S> {
    service: S,
    state: ViewState,
    form: RecordForm,
    mounted: bool,
    events: broadcast::Sender<ViewEvent>,
}

impl<S: RecordService> RecordBrowser<S> {
    pub fn new(service: S) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            service,
            state: ViewState::default(),
            form: RecordForm::new(),
            mounted: false,
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ViewEvent> {
        self.events.subscribe()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn records(&self) -> &[TaxRecord] {
        &self.state.records
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn form(&self) -> &RecordForm {
        &self.form
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Initial load. Only the first call issues a request.
    pub async fn mount(&mut self) -> Outcome {
        if self.mounted {
            return Outcome::Skipped;
        }
        self.mounted = true;
        self.show_all().await
    }

    /// Replaces the display with every record the service holds.
    #[instrument(skip(self))]
    pub async fn show_all(&mut self) -> Outcome {
        self.begin_loading();
        let outcome = self.refresh().await;
        self.finish_loading();
        outcome
    }

    /// Looks up the TID typed into the search box.
    #[instrument(skip(self))]
    pub async fn search(&mut self) -> Outcome {
        self.state.search_error = None;
        if self.state.search_text.is_empty() {
            debug!("Search box is empty");
            return Outcome::Skipped;
        }

        let tid: Tid = match self.state.search_text.parse() {
            Ok(tid) => tid,
            Err(e) => {
                debug!(search_text = %self.state.search_text, error = %e, "Search rejected");
                self.state.search_error = Some(INVALID_TID_MESSAGE);
                return Outcome::Rejected;
            }
        };

        self.begin_loading();
        let outcome = match self.service.find_by_id(tid).await {
            Ok(found) => {
                debug!(%tid, found = found.is_some(), "Search settled");
                self.replace_records(found.into_iter().collect());
                Outcome::Completed
            }
            Err(e) => {
                error!(%tid, error = %e, "Error searching tax record");
                Outcome::Failed
            }
        };
        self.finish_loading();
        outcome
    }

    /// Validates the form, adds the record and refreshes the full list.
    ///
    /// The form is only cleared once the add has succeeded.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Outcome {
        let params = match self.form.validate() {
            Ok(params) => params,
            Err(fields) => {
                debug!(?fields, "Form rejected");
                self.emit(ViewEvent::ValidationFailed { fields });
                return Outcome::Rejected;
            }
        };

        self.begin_loading();
        let added = self
            .service
            .add(&params.first_name, &params.last_name, &params.address)
            .await;
        let outcome = match added {
            Ok(tid) => {
                info!(%tid, "Tax record added");
                self.form.reset();
                self.emit(ViewEvent::FormCleared);
                self.refresh().await
            }
            Err(e) => {
                error!(error = %e, "Error adding tax record");
                Outcome::Failed
            }
        };
        self.finish_loading();
        outcome
    }

    /// `list_all` without touching the loading flag.
    async fn refresh(&mut self) -> Outcome {
        match self.service.list_all().await {
            Ok(records) => {
                self.replace_records(records);
                Outcome::Completed
            }
            Err(e) => {
                error!(error = %e, "Error fetching tax records");
                Outcome::Failed
            }
        }
    }

    fn replace_records(&mut self, records: Vec<TaxRecord>) {
        let count = records.len();
        self.state.records = records;
        self.emit(ViewEvent::RecordsReplaced { count });
    }

    fn begin_loading(&mut self) {
        self.state.loading = true;
        self.emit(ViewEvent::LoadingStarted);
    }

    fn finish_loading(&mut self) {
        self.state.loading = false;
        self.emit(ViewEvent::LoadingFinished);
    }

    fn emit(&self, event: ViewEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
