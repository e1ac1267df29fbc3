use std::fmt::Write;

use crate::browser::{Field, RecordBrowser, RecordTable};
use crate::clients::RecordService;

use super::commands::{PageCommand, HELP};

const HEADING: &str = "TaxPayer Management System";
const PROGRESS: &str = "Loading...";

/// Whether the input loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs one command against the browser and table.
///
/// Extra text for the user (only `help` has any) is returned alongside the flow.
pub async fn apply<S: RecordService>(
    browser: &mut RecordBrowser<S>,
    table: &mut RecordTable,
    command: PageCommand,
) -> (Flow, Option<&'static str>) {
    match command {
        PageCommand::Search(text) => {
            browser.set_search_text(text);
            browser.search().await;
        }
        PageCommand::ShowAll => {
            browser.show_all().await;
        }
        PageCommand::SetField(field, value) => browser.set_field(field, value),
        PageCommand::Submit => {
            browser.submit().await;
        }
        PageCommand::Sort(column) => table.sort_by(column),
        PageCommand::Page(page) => table.set_page(page),
        PageCommand::Show => {}
        PageCommand::Help => return (Flow::Continue, Some(HELP)),
        PageCommand::Quit => return (Flow::Quit, None),
    }
    (Flow::Continue, None)
}

/// The whole page: search box, table (or progress indicator), then the form.
pub fn render_page<S: RecordService>(browser: &RecordBrowser<S>, table: &RecordTable) -> String {
    let state = browser.state();
    let mut out = String::new();

    let _ = writeln!(out, "{HEADING}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Search by TID: [{}]   (search | all)", state.search_text);
    if let Some(message) = state.search_error {
        let _ = writeln!(out, "  ! {message}");
    }
    let _ = writeln!(out);

    if state.loading {
        let _ = writeln!(out, "{PROGRESS}");
    } else {
        out.push_str(&table.render(&state.records));
    }
    let _ = writeln!(out);

    let form = browser.form();
    let _ = writeln!(out, "Add New TaxPayer   (first | last | address, then submit)");
    for field in Field::ALL {
        let _ = writeln!(out, "  {}: [{}]", field.label(), form.value(field));
        if let Some(message) = form.error(field) {
            let _ = writeln!(out, "    ! {message}");
        }
    }
    out
}
