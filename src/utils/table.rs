//! Table rendering utilities for CLI outputs.
//!
//! Column widths grow to fit the widest cell, measured in terminal columns
//! so accented or CJK client names stay aligned.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub right_align: bool,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: false,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| UnicodeWidthStr::width(cell.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self, separator: &str) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
        push_line(&mut out, &self.columns, &widths, &header);

        let total: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        if !separator.is_empty() {
            out.push_str(&separator.repeat(total));
            out.push('\n');
        }

        for row in &self.rows {
            push_line(&mut out, &self.columns, &widths, row);
        }

        out
    }
}

fn push_line(out: &mut String, columns: &[Column], widths: &[usize], cells: &[String]) {
    let mut parts = Vec::with_capacity(columns.len());
    for (i, col) in columns.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = widths[i].saturating_sub(UnicodeWidthStr::width(cell));
        if col.right_align {
            parts.push(format!("{}{}", " ".repeat(pad), cell));
        } else {
            parts.push(format!("{}{}", cell, " ".repeat(pad)));
        }
    }
    out.push_str(parts.join(" ").trim_end());
    out.push('\n');
}
