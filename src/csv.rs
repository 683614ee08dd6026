// src/csv.rs
// Delimited-text writer for roster exports. std-only; the quoting rules
// are the usual RFC-ish ones (quote when the delimiter, a quote or a line
// break appears in the field; double embedded quotes).

use std::io::{self, Write};

use crate::config::options::ExportOptions;
use crate::scrape::DataSet;

fn needs_quotes(field: &str, delim: char) -> bool {
    field.chars().any(|c| c == delim || c == '"' || c == '\n' || c == '\r')
}

/// Write a single delimited row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], delim: char) -> io::Result<()> {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            write!(w, "{delim}")?;
        }
        if needs_quotes(cell, delim) {
            write!(w, "\"{}\"", cell.replace('"', "\"\""))?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

/// Render a dataset with the export options applied (header policy,
/// delimiter). Infallible: writing into a Vec cannot fail.
pub fn dataset_to_string(data: &DataSet, export: &ExportOptions) -> String {
    let delim = export.format.delim();
    let mut buf: Vec<u8> = Vec::new();

    if export.include_headers {
        if let Some(headers) = &data.headers {
            let _ = write_row(&mut buf, headers, delim);
        }
    }
    for row in &data.rows {
        let _ = write_row(&mut buf, row, delim);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
