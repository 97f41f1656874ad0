use csv::ReaderBuilder;

use alumnet_common::AlumnetError;

/// Parse raw CSV text into rows of cells. RFC-4180 quoting (embedded commas,
/// escaped quotes, multiline cells) is handled by the reader; ragged rows are
/// tolerated and reconciled against the header by the normalizer.
pub fn parse_sheet(csv_text: &str) -> Result<Vec<Vec<String>>, AlumnetError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AlumnetError::Csv(format!("unreadable row: {e}")))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(parse_sheet("").unwrap().is_empty());
    }

    #[test]
    fn quoted_comma_stays_one_cell() {
        let rows = parse_sheet("a,\"b, c\",d\n").unwrap();
        assert_eq!(rows, vec![vec!["a", "b, c", "d"]]);
    }

    #[test]
    fn escaped_quote_decodes() {
        let rows = parse_sheet("\"say \"\"hi\"\"\",x\n").unwrap();
        assert_eq!(rows[0][0], "say \"hi\"");
    }

    #[test]
    fn multiline_quoted_cell_decodes() {
        let rows = parse_sheet("\"line one\nline two\",x\n").unwrap();
        assert_eq!(rows[0][0], "line one\nline two");
        assert_eq!(rows.len(), 1);
    }
}
