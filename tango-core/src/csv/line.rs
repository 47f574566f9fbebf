//! Single-line CSV tokenizer

/// Split one CSV line into trimmed cells
///
/// A minimal RFC 4180 style splitter: double quotes toggle quoted mode,
/// a doubled quote inside a quoted section is a literal `"`, and commas only
/// separate cells outside of quotes. Quotes are never required for plain
/// cells. Every cell is trimmed before it is returned.
///
/// ```rust
/// use tango_core::split_csv_line;
///
/// let cells = split_csv_line(r#""a,b","He said ""Hi""""#);
/// assert_eq!(cells, vec!["a,b", "He said \"Hi\""]);
/// ```
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    cells.push(current);

    cells
        .into_iter()
        .map(|cell| cell.trim().to_string())
        .collect()
}
