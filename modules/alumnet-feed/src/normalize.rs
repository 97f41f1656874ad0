use std::collections::HashMap;

/// One normalized spreadsheet record: header label → trimmed cell value.
pub type SheetRecord = HashMap<String, String>;

/// Convert raw rows (first row = headers) into header→value records.
///
/// Blank rows (every cell trims to empty) are dropped, preserving the order
/// of the rest. Cells beyond the header width are ignored; missing trailing
/// cells become empty strings. An absent or empty header row yields no
/// records — that is not an error.
pub fn rows_to_records(rows: &[Vec<String>]) -> Vec<SheetRecord> {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Vec::new();
    };

    let headers: Vec<String> = header_row.iter().map(|h| h.trim().to_string()).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Vec::new();
    }

    data_rows
        .iter()
        .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = row.get(i).map(|c| c.trim()).unwrap_or("");
                    (header.clone(), value.to_string())
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn no_rows_yields_no_records() {
        assert!(rows_to_records(&[]).is_empty());
    }

    #[test]
    fn empty_header_row_yields_no_records() {
        let input = rows(&[&["", " "], &["data", "here"]]);
        assert!(rows_to_records(&input).is_empty());
    }

    #[test]
    fn header_only_yields_no_records() {
        let input = rows(&[&["Name", "City"]]);
        assert!(rows_to_records(&input).is_empty());
    }

    #[test]
    fn blank_rows_dropped_order_preserved() {
        let input = rows(&[
            &["Name"],
            &["first"],
            &["  "],
            &["second"],
            &[""],
            &["third"],
        ]);
        let records = rows_to_records(&input);
        assert_eq!(records.len(), 3, "only non-blank rows survive");
        assert_eq!(records[0]["Name"], "first");
        assert_eq!(records[1]["Name"], "second");
        assert_eq!(records[2]["Name"], "third");
    }

    #[test]
    fn cells_and_headers_trimmed() {
        let input = rows(&[&[" Name ", "City"], &["  Ada  ", " London "]]);
        let records = rows_to_records(&input);
        assert_eq!(records[0]["Name"], "Ada");
        assert_eq!(records[0]["City"], "London");
    }

    #[test]
    fn short_row_pads_missing_columns_empty() {
        let input = rows(&[&["Name", "City", "Country"], &["Ada"]]);
        let records = rows_to_records(&input);
        assert_eq!(records[0]["Name"], "Ada");
        assert_eq!(records[0]["City"], "");
        assert_eq!(records[0]["Country"], "");
    }

    #[test]
    fn long_row_drops_excess_cells() {
        let input = rows(&[&["Name"], &["Ada", "extra", "cells"]]);
        let records = rows_to_records(&input);
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0]["Name"], "Ada");
    }
}
