// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Delimited text encoding for table files
//!
//! One record per line, fields separated by a single delimiter character.
//! Fields containing the delimiter, a double quote or a line break are wrapped
//! in double quotes with inner quotes doubled, so they may span lines.

/// Decoding failure with the 1-based line where the offending record starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    pub line: usize,
    pub reason: String,
}

/// A decoded record and the 1-based line it starts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Split file contents into records
///
/// Blank lines are skipped. Accepts both `\n` and `\r\n` line endings.
pub fn decode(text: &str, delimiter: char) -> Result<Vec<DecodedRecord>, DecodeError> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut line = 1;
    let mut record_line = 1;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() && !quoted => {
                in_quotes = true;
                quoted = true;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                finish_record(&mut records, &mut fields, quoted, record_line);
                quoted = false;
                line += 1;
                record_line = line;
            }
            c if c == delimiter => {
                fields.push(std::mem::take(&mut field));
                quoted = false;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(DecodeError {
            line: record_line,
            reason: "unterminated quoted field".to_string(),
        });
    }

    if !field.is_empty() || !fields.is_empty() || quoted {
        fields.push(field);
        finish_record(&mut records, &mut fields, quoted, record_line);
    }

    Ok(records)
}

fn finish_record(
    records: &mut Vec<DecodedRecord>,
    fields: &mut Vec<String>,
    last_quoted: bool,
    line: usize,
) {
    let record = std::mem::take(fields);
    let blank = record.len() == 1 && record[0].is_empty() && !last_quoted;
    if !blank {
        records.push(DecodedRecord {
            line,
            fields: record,
        });
    }
}

/// Append one encoded record, terminated by `\n`, to `out`
pub fn encode_record<S: AsRef<str>>(fields: &[S], delimiter: char, out: &mut String) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        let field = field.as_ref();
        // A lone empty field would otherwise read back as a blank line.
        let lone_empty = fields.len() == 1 && field.is_empty();
        if lone_empty || needs_quotes(field, delimiter) {
            out.push('"');
            out.push_str(&field.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}

fn needs_quotes(field: &str, delimiter: char) -> bool {
    field
        .chars()
        .any(|c| c == delimiter || c == '"' || c == '\n' || c == '\r')
}
