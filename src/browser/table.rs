//! Text table for the current record set, with sortable columns and pagination.

use crate::model::TaxRecord;
use std::cmp::Ordering;
use std::fmt::Write;
use std::str::FromStr;

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

const TITLE: &str = "TaxPayer Records";
const NO_DATA: &str = "There are no records to display";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Tid,
    FirstName,
    LastName,
    Address,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::Tid,
        Column::FirstName,
        Column::LastName,
        Column::Address,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Tid => "TID",
            Column::FirstName => "First Name",
            Column::LastName => "Last Name",
            Column::Address => "Address",
        }
    }

    fn cell(self, record: &TaxRecord) -> String {
        match self {
            Column::Tid => record.tid.to_string(),
            Column::FirstName => record.first_name.clone(),
            Column::LastName => record.last_name.clone(),
            Column::Address => record.address.clone(),
        }
    }

    /// TIDs compare numerically; text compares case-insensitively, then exactly.
    fn compare(self, a: &TaxRecord, b: &TaxRecord) -> Ordering {
        let text = |x: &str, y: &str| x.to_lowercase().cmp(&y.to_lowercase()).then_with(|| x.cmp(y));
        match self {
            Column::Tid => a.tid.cmp(&b.tid),
            Column::FirstName => text(&a.first_name, &b.first_name),
            Column::LastName => text(&a.last_name, &b.last_name),
            Column::Address => text(&a.address, &b.address),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column {0:?} (expected tid, first, last or address)")]
pub struct UnknownColumn(pub String);

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tid" | "id" => Ok(Column::Tid),
            "first" | "first_name" | "firstname" => Ok(Column::FirstName),
            "last" | "last_name" | "lastname" => Ok(Column::LastName),
            "address" => Ok(Column::Address),
            _ => Err(UnknownColumn(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One page worth of rows, after sorting.
#[derive(Debug, PartialEq, Eq)]
pub struct TablePage<'a> {
    pub rows: Vec<&'a TaxRecord>,
    /// 1-based, already clamped to `1..=page_count`.
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

/// Display settings for the record table. Holds no records itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTable {
    rows_per_page: usize,
    sort: Option<(Column, SortDirection)>,
    page: usize,
}

impl Default for RecordTable {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}

impl RecordTable {
    /// A zero page size is treated as one row per page.
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            rows_per_page: rows_per_page.max(1),
            sort: None,
            page: 1,
        }
    }

    pub fn sort(&self) -> Option<(Column, SortDirection)> {
        self.sort
    }

    /// Sorts by `column`, ascending first; selecting the same column again flips
    /// the direction. Always returns to the first page.
    pub fn sort_by(&mut self, column: Column) {
        let direction = match self.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.sort = Some((column, direction));
        self.page = 1;
    }

    /// Requests a 1-based page. Out-of-range values are clamped when a page is built.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.rows_per_page).max(1)
    }

    pub fn page_of<'a>(&self, records: &'a [TaxRecord]) -> TablePage<'a> {
        let mut rows: Vec<&TaxRecord> = records.iter().collect();
        if let Some((column, direction)) = self.sort {
            rows.sort_by(|a, b| {
                let ord = column.compare(a, b);
                match direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }

        let total = rows.len();
        let page_count = self.page_count(total);
        let page = self.page.min(page_count);
        let rows = rows
            .into_iter()
            .skip((page - 1) * self.rows_per_page)
            .take(self.rows_per_page)
            .collect();

        TablePage {
            rows,
            page,
            page_count,
            total,
        }
    }

    pub fn render(&self, records: &[TaxRecord]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{TITLE}");

        let page = self.page_of(records);
        if page.total == 0 {
            let _ = writeln!(out, "{NO_DATA}");
            return out;
        }

        let headers: Vec<String> = Column::ALL.iter().map(|c| self.header_label(*c)).collect();
        let cells: Vec<Vec<String>> = page
            .rows
            .iter()
            .map(|r| Column::ALL.iter().map(|c| c.cell(r)).collect())
            .collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_row(&mut out, &headers, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_row(&mut out, &rule, &widths);
        for row in &cells {
            write_row(&mut out, row, &widths);
        }

        let noun = if page.total == 1 { "record" } else { "records" };
        let _ = writeln!(
            out,
            "Page {} of {} ({} {noun})",
            page.page, page.page_count, page.total
        );
        out
    }

    fn header_label(&self, column: Column) -> String {
        match self.sort {
            Some((sorted, SortDirection::Ascending)) if sorted == column => {
                format!("{} ^", column.header())
            }
            Some((sorted, SortDirection::Descending)) if sorted == column => {
                format!("{} v", column.header())
            }
            _ => column.header().to_string(),
        }
    }
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tid;

    fn records() -> Vec<TaxRecord> {
        vec![
            TaxRecord::new(Tid::new(3), "carol", "Zeta", "3 Elm St"),
            TaxRecord::new(Tid::new(1), "Alice", "Young", "1 Oak St"),
            TaxRecord::new(Tid::new(2), "Bob", "Xu", "2 Pine St"),
        ]
    }

    fn tids(page: &TablePage<'_>) -> Vec<u64> {
        page.rows.iter().map(|r| r.tid.get()).collect()
    }

    #[test]
    fn test_unsorted_keeps_service_order() {
        let data = records();
        let table = RecordTable::default();
        assert_eq!(tids(&table.page_of(&data)), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_toggles_direction() {
        let data = records();
        let mut table = RecordTable::default();

        table.sort_by(Column::Tid);
        assert_eq!(tids(&table.page_of(&data)), vec![1, 2, 3]);

        table.sort_by(Column::Tid);
        assert_eq!(table.sort(), Some((Column::Tid, SortDirection::Descending)));
        assert_eq!(tids(&table.page_of(&data)), vec![3, 2, 1]);

        table.sort_by(Column::Tid);
        assert_eq!(table.sort(), Some((Column::Tid, SortDirection::Ascending)));
    }

    #[test]
    fn test_text_sort_ignores_case() {
        let data = records();
        let mut table = RecordTable::default();
        table.sort_by(Column::FirstName);
        assert_eq!(tids(&table.page_of(&data)), vec![1, 2, 3]);
    }

    #[test]
    fn test_pagination_clamps_page() {
        let data: Vec<TaxRecord> = (1..=25)
            .map(|n| TaxRecord::new(Tid::new(n), "F", "L", "A"))
            .collect();
        let mut table = RecordTable::new(10);
        assert_eq!(table.page_count(data.len()), 3);

        table.set_page(3);
        let page = table.page_of(&data);
        assert_eq!(page.page, 3);
        assert_eq!(page.rows.len(), 5);

        table.set_page(9);
        assert_eq!(table.page_of(&data).page, 3);

        // A narrower result set pulls the page back in range.
        assert_eq!(table.page_of(&data[..4]).page, 1);
    }

    #[test]
    fn test_sorting_returns_to_first_page() {
        let mut table = RecordTable::new(1);
        table.set_page(2);
        table.sort_by(Column::LastName);
        assert_eq!(table.page_of(&records()).page, 1);
    }

    #[test]
    fn test_render_empty_set() {
        let rendered = RecordTable::default().render(&[]);
        assert_eq!(rendered, "TaxPayer Records\nThere are no records to display\n");
    }

    #[test]
    fn test_render_rows_and_footer() {
        let data = vec![TaxRecord::new(Tid::new(42), "Jane", "Doe", "1 Main St")];
        let rendered = RecordTable::default().render(&data);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "TaxPayer Records",
                "TID | First Name | Last Name | Address",
                "--- | ---------- | --------- | ---------",
                "42  | Jane       | Doe       | 1 Main St",
                "Page 1 of 1 (1 record)",
            ]
        );
    }

    #[test]
    fn test_column_parsing() {
        assert_eq!("first".parse::<Column>(), Ok(Column::FirstName));
        assert_eq!("TID".parse::<Column>(), Ok(Column::Tid));
        assert!("phone".parse::<Column>().is_err());
    }
}
