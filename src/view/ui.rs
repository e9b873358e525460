//! Plain-text building blocks for terminal pages: tables, cards and bars.

use crate::utils::clamp_percent;

const BAR_WIDTH: usize = 20;

/// Risk bands of the overall score bar: rose, orange, yellow, emerald
pub const RISK_BANDS: [(u8, char); 4] = [(25, '▓'), (25, '▒'), (25, '░'), (25, '·')];

fn width(text: &str) -> usize {
    text.chars().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Text table with a header row and per-column alignment
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
    placeholder: Option<String>,
}

impl Table {
    /// Create a new table with the given headers, all left aligned
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| width(h)).collect();
        let aligns = vec![Align::Left; headers.len()];
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            aligns,
            rows: Vec::new(),
            col_widths,
            placeholder: None,
        }
    }

    pub fn align(mut self, column: usize, align: Align) -> Self {
        if let Some(slot) = self.aligns.get_mut(column) {
            *slot = align;
        }
        self
    }

    /// Text shown in place of the body when the table has no rows
    pub fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(width(col));
            }
        }

        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut lines = vec![self.render_row(&self.headers), self.render_separator()];

        if self.rows.is_empty() {
            if let Some(placeholder) = &self.placeholder {
                lines.push(placeholder.clone());
            }
        }

        for row in &self.rows {
            lines.push(self.render_row(row));
        }

        lines.join("\n")
    }

    fn render_row(&self, row: &[String]) -> String {
        let cells: Vec<String> = row
            .iter()
            .zip(self.col_widths.iter().zip(self.aligns.iter()))
            .map(|(col, (&w, align))| {
                let pad = " ".repeat(w.saturating_sub(width(col)));
                match align {
                    Align::Left => format!("{}{}", col, pad),
                    Align::Right => format!("{}{}", pad, col),
                }
            })
            .collect();
        cells.join(" | ").trim_end().to_string()
    }

    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

/// Boxed card around the given lines
pub fn card(lines: &[String]) -> String {
    let inner = lines.iter().map(|l| width(l)).max().unwrap_or(0);
    let border = "─".repeat(inner + 2);

    let mut out = vec![format!("┌{}┐", border)];
    for line in lines {
        let pad = " ".repeat(inner - width(line));
        out.push(format!("│ {}{} │", line, pad));
    }
    out.push(format!("└{}┘", border));
    out.join("\n")
}

pub fn badge(text: &str) -> String {
    format!("[{}]", text)
}

/// Title followed by an underline of the same width
pub fn heading(text: &str) -> String {
    format!("{}\n{}", text, "=".repeat(width(text)))
}

/// Horizontal bar filled to `percent`
pub fn progress_bar(percent: u8) -> String {
    let percent = clamp_percent(percent) as usize;
    let filled = (percent * BAR_WIDTH + 50) / 100;
    format!(
        "{}{} {}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        percent
    )
}

/// Badge and banded bar for an overall risk score
pub fn overall_score_lines(score: u8) -> Vec<String> {
    let mut lines = vec![format!(
        "Overall Sybil Risk Score {}",
        badge(&format!("{}%", score))
    )];
    lines.extend(category_bar(&RISK_BANDS, score).lines().map(str::to_string));
    lines
}

/// Segmented bar with a marker under the position of `percent`.
///
/// Each segment is drawn with its own fill character so the bands stay
/// distinguishable without color.
pub fn category_bar(segments: &[(u8, char)], percent: u8) -> String {
    let total: usize = segments.iter().map(|(share, _)| *share as usize).sum();
    if total == 0 {
        return String::new();
    }

    let bar: String = segments
        .iter()
        .flat_map(|(share, fill)| {
            let cells = (*share as usize * BAR_WIDTH * 2 + total / 2) / total;
            std::iter::repeat(*fill).take(cells)
        })
        .collect();

    let cells = width(&bar);
    let position = (clamp_percent(percent) as usize * cells / 100).min(cells.saturating_sub(1));
    format!("{}\n{}▲ {}%", bar, " ".repeat(position), percent)
}
