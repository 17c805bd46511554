//! CSV export of list rows
//!
//! Exports are assembled client-side from the currently filtered rows;
//! there is no server round-trip. Fields containing commas, quotes, or
//! newlines are quoted with RFC-4180-style quote doubling.

/// Rows that can be exported declare their column headers and values.
pub trait CsvRecord {
    fn csv_headers() -> Vec<&'static str>;
    fn csv_record(&self) -> Vec<String>;
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn join_row(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build a CSV blob from typed rows, header line first.
pub fn to_csv<T: CsvRecord>(rows: &[T]) -> String {
    let headers: Vec<String> = T::csv_headers().iter().map(|h| h.to_string()).collect();
    let mut lines = vec![join_row(&headers)];
    for row in rows {
        lines.push(join_row(&row.csv_record()));
    }
    lines.join("\n")
}

/// Build a CSV blob from untyped rows, e.g. a report table.
pub fn to_csv_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
    let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut lines = vec![join_row(&headers)];
    for row in rows {
        lines.push(join_row(row));
    }
    lines.join("\n")
}

/// Split a CSV blob back into rows and fields, respecting quoted fields.
/// The inverse of [`to_csv`] for round-trip checks and re-imports.
pub fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(c),
            }
            continue;
        }
        match c {
            '"' => in_quotes = true,
            ',' => {
                row.push(std::mem::take(&mut field));
            }
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            '\n' => {
                row.push(std::mem::take(&mut field));
                rows.push(std::mem::take(&mut row));
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}
