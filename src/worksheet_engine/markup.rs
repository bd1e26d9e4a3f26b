//! Structured builders for the LaTeX fragments every generator emits.
//!
//! Generators describe a problem as rows and cells; the builders own the
//! separators, row terminators, and rules so that all fragments share one
//! formatting path.

use std::fmt::Display;

use crate::worksheet_engine::models::GridStyle;

/// Verbatim number, so minus signs and digits keep their typewriter look.
pub fn verb(value: impl Display) -> String {
    format!("\\verb|{value}|")
}

/// Vertical gap in millimetres, on its own line.
pub fn vspace(mm: u32) -> String {
    format!("\\vspace{{{mm}mm}}\n")
}

/// `{\large ...}` group.
pub fn large(body: &str) -> String {
    format!("{{\\large {body}}}")
}

/// Inline display-style formula.
pub fn display_math(body: &str) -> String {
    format!("$\\displaystyle {body}$")
}

#[derive(Debug, Clone)]
enum Line {
    Cells(Vec<String>),
    Rule,
    Cline(usize, usize),
}

/// A `tabular` environment built row by row.
#[derive(Debug, Clone)]
pub struct Tabular {
    columns: String,
    lines: Vec<Line>,
}

impl Tabular {
    pub fn new(columns: &str) -> Self {
        Tabular { columns: columns.to_string(), lines: Vec::new() }
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.push(Line::Cells(cells.into_iter().map(Into::into).collect()));
        self
    }

    /// Full-width `\hline`.
    pub fn rule(mut self) -> Self {
        self.lines.push(Line::Rule);
        self
    }

    /// Partial rule across columns `from..=to` (1-based, as LaTeX counts).
    pub fn cline(mut self, from: usize, to: usize) -> Self {
        self.lines.push(Line::Cline(from, to));
        self
    }

    /// One source line per row, with the first column padded so the `&`
    /// separators line up.
    pub fn render(&self) -> String {
        let width = self
            .lines
            .iter()
            .filter_map(|line| match line {
                Line::Cells(cells) if cells.len() > 1 => Some(cells[0].len()),
                _ => None,
            })
            .max()
            .unwrap_or(0);

        let mut out = format!("\\begin{{tabular}}{{{}}}\n", self.columns);
        for line in &self.lines {
            match line {
                Line::Cells(cells) => {
                    let mut cells = cells.clone();
                    if let Some(first) = cells.first_mut() {
                        *first = format!("{first:<width$}");
                    }
                    out.push_str(&cells.join(" & "));
                    out.push_str(" \\\\\n");
                }
                Line::Rule => out.push_str("\\hline\n"),
                Line::Cline(from, to) => out.push_str(&format!("\\cline{{{from}-{to}}}\n")),
            }
        }
        out.push_str("\\end{tabular}");
        out
    }

    /// The whole table on a single line, for tables nested inside a cell.
    pub fn render_inline(&self) -> String {
        let mut parts = vec![format!("\\begin{{tabular}}{{{}}}", self.columns)];
        for line in &self.lines {
            match line {
                Line::Cells(cells) => {
                    parts.push(format!("{} \\\\", cells.join(" & ").trim()));
                }
                Line::Rule => parts.push("\\hline".to_string()),
                Line::Cline(from, to) => parts.push(format!("\\cline{{{from}-{to}}}")),
            }
        }
        parts.push("\\end{tabular}".to_string());
        parts.join(" ")
    }
}

const CELL_COLUMN: &str = ">{\\centering\\arraybackslash}p{4cm}";

/// The page grid: fixed-width centred columns filled row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    style: GridStyle,
    columns: usize,
    cells: Vec<String>,
}

impl Grid {
    pub fn new(style: GridStyle, columns: usize) -> Self {
        Grid { style, columns, cells: Vec::new() }
    }

    pub fn push(&mut self, cell: impl Into<String>) {
        self.cells.push(cell.into());
    }

    pub fn render(&self) -> String {
        let (colspec, top, row_end) = match self.style {
            GridStyle::Bordered => (
                format!("|{}|", vec![CELL_COLUMN; self.columns].join("|")),
                "\\hline\n",
                "\\\\ \\hline\n",
            ),
            GridStyle::Borderless => (CELL_COLUMN.repeat(self.columns), "", "\\\\ \n"),
        };

        let mut out = format!("\\begin{{center}}\n\\begin{{tabular}}{{{colspec}}}\n{top}");
        for row in self.cells.chunks(self.columns.max(1)) {
            out.push_str(&row.join("&\n"));
            out.push_str(row_end);
        }
        out.push_str("\\end{tabular}\n\\end{center}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabular_pads_first_column_and_terminates_rows() {
        let t = Tabular::new("cr")
            .row(["", verb(12).as_str()])
            .row(["$+$", verb(34).as_str()])
            .rule();
        assert_eq!(
            t.render(),
            "\\begin{tabular}{cr}\n    & \\verb|12| \\\\\n$+$ & \\verb|34| \\\\\n\\hline\n\\end{tabular}"
        );
    }

    #[test]
    fn inline_tabular_stays_on_one_line() {
        let t = Tabular::new("rr")
            .row(["", "\\verb|3|"])
            .row(["$\\times$", "\\verb|4|"])
            .rule()
            .row(["", ""]);
        let s = t.render_inline();
        assert!(!s.contains('\n'));
        assert_eq!(
            s,
            "\\begin{tabular}{rr} & \\verb|3| \\\\ $\\times$ & \\verb|4| \\\\ \\hline & \\\\ \\end{tabular}"
        );
    }

    #[test]
    fn cline_is_rendered_with_range() {
        let t = Tabular::new("rcl").row(["", "", ""]).cline(2, 3);
        assert!(t.render().contains("\\cline{2-3}\n"));
    }

    #[test]
    fn bordered_grid_rules_every_row() {
        let mut g = Grid::new(GridStyle::Bordered, 4);
        for i in 0..8 {
            g.push(format!("c{i}\n"));
        }
        let s = g.render();
        assert!(s.starts_with("\\begin{center}\n\\begin{tabular}{|"));
        // one rule on top plus one after each of the two rows
        assert_eq!(s.matches("\\hline").count(), 3);
        assert_eq!(s.matches("&\n").count(), 6);
        assert!(s.ends_with("\\end{tabular}\n\\end{center}\n"));
    }

    #[test]
    fn borderless_grid_has_no_rules() {
        let mut g = Grid::new(GridStyle::Borderless, 4);
        for i in 0..4 {
            g.push(format!("c{i}\n"));
        }
        let s = g.render();
        assert!(!s.contains("\\hline"));
        assert!(!s.contains('|'));
        assert!(s.contains("c3\n\\\\ \n"));
    }
}
