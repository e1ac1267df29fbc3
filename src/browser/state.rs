use crate::model::TaxRecord;

/// Client-only view state. Replaced piecemeal by [`RecordBrowser`](super::RecordBrowser)
/// operations and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// The record set currently on display.
    pub records: Vec<TaxRecord>,
    /// While set, the progress indicator is shown instead of the table.
    pub loading: bool,
    /// Raw text of the search box.
    pub search_text: String,
    /// Inline message under the search box after a malformed search.
    pub search_error: Option<&'static str>,
}

impl Default for ViewState {
    /// Starts out loading so nothing is shown before the first fetch settles.
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            search_text: String::new(),
            search_error: None,
        }
    }
}
