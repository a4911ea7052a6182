//! Row-noise classification: empty rows, repeated header rows, and
//! summary rows (Subtotal / Total / Opening Balance).
//!
//! All three predicates are heuristic. Keyword matching is substring-based,
//! so a description like "TOTAL WINE & MORE" will fire — accepted trade-off,
//! kept for compatibility with the upstream cleaning rules.

use tidyledger_core::{Cell, Table};
use tracing::debug;

/// True iff every cell in the row is the absent marker.
///
/// Whitespace-only text counts as present data; blanking is an upstream
/// normalization decision.
pub fn is_empty_row(row: &[Cell]) -> bool {
    row.iter().all(Cell::is_empty)
}

/// True iff the row is an echo of the header: every cell, trimmed and
/// lower-cased, equals the corresponding header label. Full match only;
/// an arity mismatch is never a match.
pub fn is_repeated_header(row: &[Cell], header_labels: &[String]) -> bool {
    if row.len() != header_labels.len() {
        return false;
    }
    row.iter().zip(header_labels).all(|(cell, label)| {
        cell.to_text().trim().to_lowercase() == label.trim().to_lowercase()
    })
}

/// True iff any configured keyword appears as a substring of the row's
/// concatenated text (non-empty cells, lower-cased, single-space joined).
/// Keywords are expected to be lower-cased already.
pub fn is_summary_row(row: &[Cell], keywords: &[String]) -> bool {
    let row_text = row
        .iter()
        .filter(|cell| !cell.is_empty())
        .map(|cell| cell.to_text().to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");
    keywords.iter().any(|kw| row_text.contains(kw.as_str()))
}

/// Drop every row for which any noise predicate fires, preserving the
/// relative order of survivors. Each predicate sees the original row.
pub fn filter_noise(table: &Table, header_labels: &[String], keywords: &[String]) -> Table {
    let kept = table.retain_rows(|row| {
        !(is_empty_row(row)
            || is_repeated_header(row, header_labels)
            || is_summary_row(row, keywords))
    });
    debug!(
        kept = kept.len(),
        dropped = table.len() - kept.len(),
        "filtered noise rows"
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        vec!["Date".into(), "Desc".into(), "Amount".into()]
    }

    fn keywords() -> Vec<String> {
        vec!["subtotal".into(), "total".into(), "opening balance".into()]
    }

    #[test]
    fn test_empty_row_all_absent() {
        assert!(is_empty_row(&[Cell::Empty, Cell::Empty, Cell::Empty]));
    }

    #[test]
    fn test_whitespace_text_is_not_empty() {
        assert!(!is_empty_row(&[Cell::Empty, Cell::Text("  ".into()), Cell::Empty]));
    }

    #[test]
    fn test_repeated_header_case_and_whitespace_insensitive() {
        let row = vec![
            Cell::Text(" date ".into()),
            Cell::Text("DESC".into()),
            Cell::Text("amount".into()),
        ];
        assert!(is_repeated_header(&row, &headers()));
    }

    #[test]
    fn test_partial_header_is_not_repeated() {
        let row = vec![
            Cell::Text("Date".into()),
            Cell::Text("Desc".into()),
            Cell::Text("Balance".into()),
        ];
        assert!(!is_repeated_header(&row, &headers()));
    }

    #[test]
    fn test_arity_mismatch_is_not_repeated_header() {
        let row = vec![Cell::Text("Date".into()), Cell::Text("Desc".into())];
        assert!(!is_repeated_header(&row, &headers()));
    }

    #[test]
    fn test_summary_row_keyword_in_any_cell() {
        let row = vec![
            Cell::Text("Opening Balance".into()),
            Cell::Empty,
            Cell::Text("1000.00".into()),
        ];
        assert!(is_summary_row(&row, &keywords()));
    }

    #[test]
    fn test_summary_substring_false_positive_is_intentional() {
        // "total" inside a merchant name still fires.
        let row = vec![
            Cell::Text("2024-01-01".into()),
            Cell::Text("TOTAL WINE & MORE".into()),
            Cell::Text("$19.99".into()),
        ];
        assert!(is_summary_row(&row, &keywords()));
    }

    #[test]
    fn test_plain_data_row_is_not_summary() {
        let row = vec![
            Cell::Text("2024-01-01".into()),
            Cell::Text("Coffee".into()),
            Cell::Text("$5.00".into()),
        ];
        assert!(!is_summary_row(&row, &keywords()));
    }

    #[test]
    fn test_filter_drops_noise_and_keeps_order() {
        let mut t = Table::new(headers());
        t.push_row(vec![Cell::Empty, Cell::Empty, Cell::Empty]).unwrap();
        t.push_row(vec!["2024-01-01".into(), "Coffee".into(), "$5.00".into()])
            .unwrap();
        t.push_row(vec!["Date".into(), "Desc".into(), "Amount".into()])
            .unwrap();
        t.push_row(vec!["2024-01-02".into(), "Lunch".into(), "$12.00".into()])
            .unwrap();
        t.push_row(vec!["Subtotal".into(), Cell::Empty, "$17.00".into()])
            .unwrap();

        let kept = filter_noise(&t, &headers(), &keywords());
        assert_eq!(kept.len(), 2);
        assert_eq!(kept.rows()[0][1], Cell::Text("Coffee".into()));
        assert_eq!(kept.rows()[1][1], Cell::Text("Lunch".into()));
    }

    #[test]
    fn test_filter_empty_table() {
        let t = Table::new(headers());
        let kept = filter_noise(&t, &headers(), &keywords());
        assert!(kept.is_empty());
        assert_eq!(kept.columns(), t.columns());
    }
}
