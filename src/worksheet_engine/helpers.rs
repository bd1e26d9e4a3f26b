//! Shared builders for the stacked-column layout used by most generators.
//!
//! Addition, subtraction, and long multiplication all print their operands
//! right-aligned in a two-column table with the operator in the left column,
//! a rule, and in the answer key the worked rows plus the result. These
//! helpers keep that layout in one place so the topic files only deal with
//! operand sampling.

use crate::worksheet_engine::{
    markup::{large, verb, vspace, Tabular},
    models::Problem,
};

pub const PLUS: &str = "$+$";
pub const MINUS: &str = "$-$";
pub const TIMES: &str = "$\\times$";

/// Gap above every stacked problem.
const TOP_GAP_MM: u32 = 4;

/// Trailing vertical space for the prompt and the solution cell. The prompt
/// leaves room to work; the solution is already taller, so it gets less.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gaps {
    pub prompt: u32,
    pub solution: u32,
}

impl Gaps {
    pub const fn new(prompt: u32, solution: u32) -> Self {
        Gaps { prompt, solution }
    }
}

/// An intermediate line of the worked solution, e.g. a partial product.
#[derive(Debug, Clone)]
pub struct WorkRow {
    pub label: &'static str,
    pub value: String,
}

impl WorkRow {
    pub fn new(label: &'static str, value: impl ToString) -> Self {
        WorkRow { label, value: value.to_string() }
    }
}

/// Operands stacked with the operator beside the last one, then a rule.
fn operand_table(operator: &str, operands: &[String]) -> Tabular {
    let last = operands.len().saturating_sub(1);
    operands
        .iter()
        .enumerate()
        .fold(Tabular::new("cr"), |table, (i, operand)| {
            let label = if i == last { operator } else { "" };
            table.row([label.to_string(), verb(operand)])
        })
        .rule()
}

fn wrap(table: &Tabular, gap_mm: u32) -> String {
    format!("{}{}\n{}", vspace(TOP_GAP_MM), large(&table.render()), vspace(gap_mm))
}

/// Build a stacked-column problem.
///
/// The prompt shows the operands only. The solution repeats them, then any
/// `work` rows followed by a second rule, then `result`.
pub fn stacked(
    operator: &str,
    operands: &[String],
    work: &[WorkRow],
    result: impl ToString,
    gaps: Gaps,
) -> Problem {
    let prompt_table = operand_table(operator, operands);

    let mut solution_table = operand_table(operator, operands);
    if !work.is_empty() {
        for row in work {
            solution_table = solution_table.row([row.label.to_string(), verb(&row.value)]);
        }
        solution_table = solution_table.rule();
    }
    solution_table = solution_table.row([String::new(), verb(result.to_string())]);

    Problem::new(wrap(&solution_table, gaps.solution), wrap(&prompt_table, gaps.prompt))
}

/// Format integer operands for [`stacked`].
pub fn operands<T: ToString>(values: &[T]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}
