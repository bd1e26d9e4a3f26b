//! One page: a grid of problems, rendered twice.
//!
//! The problems are generated once, in order, and both grids are filled from
//! the same list. Slot `i` of the problem grid and slot `i` of the solution
//! grid therefore always show the same operands.

use rand::Rng;
use tracing::debug;

use crate::worksheet_engine::{
    generator::generate_problem,
    markup::Grid,
    models::{GridStyle, OperationKind, Problem},
};

/// Problems per grid row.
pub const COLUMNS: usize = 4;

#[derive(Debug, Clone)]
pub struct Page {
    pub style: GridStyle,
    pub problems: Vec<Problem>,
}

impl Page {
    /// Draw `rows_per_page × COLUMNS` problems of `kind`.
    pub fn build<R: Rng>(rng: &mut R, kind: OperationKind) -> Self {
        let count = kind.rows_per_page() * COLUMNS;
        let problems = (0..count).map(|_| generate_problem(rng, kind)).collect();
        debug!(%kind, count, "built page");
        Page { style: kind.grid_style(), problems }
    }

    /// The student's grid.
    pub fn problem_grid(&self) -> String {
        self.grid(|p| &p.prompt)
    }

    /// The answer-key grid, same slot order.
    pub fn solution_grid(&self) -> String {
        self.grid(|p| &p.solution)
    }

    fn grid<'a>(&'a self, side: impl Fn(&'a Problem) -> &'a String) -> String {
        let mut grid = Grid::new(self.style, COLUMNS);
        for problem in &self.problems {
            grid.push(side(problem).as_str());
        }
        grid.render()
    }
}

/// Build one page and return `(solution_page, problem_page)`.
pub fn build_page<R: Rng>(rng: &mut R, kind: OperationKind) -> (String, String) {
    let page = Page::build(rng, kind);
    (page.solution_grid(), page.problem_grid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn page_sizes_follow_kind_density() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Page::build(&mut rng, OperationKind::Add2).problems.len(), 16);
        assert_eq!(Page::build(&mut rng, OperationKind::Frac1).problems.len(), 40);
        assert_eq!(Page::build(&mut rng, OperationKind::Pow).problems.len(), 40);
        assert_eq!(Page::build(&mut rng, OperationKind::Pct2).problems.len(), 80);
    }

    #[test]
    fn digit_family_uses_borderless_grid() {
        let mut rng = StdRng::seed_from_u64(2);
        let page = Page::build(&mut rng, OperationKind::MultiplyDigit(6));
        assert_eq!(page.style, GridStyle::Borderless);
        let grid = page.problem_grid();
        assert!(!grid.contains("\\hline\n\\end{tabular}\n\\end{center}"));
        assert!(grid.contains("\\\\ \n"));
    }

    #[test]
    fn both_grids_keep_problem_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let page = Page::build(&mut rng, OperationKind::Sub);
        let problems = page.problem_grid();
        let solutions = page.solution_grid();
        let mut last_p = 0;
        let mut last_s = 0;
        for p in &page.problems {
            let at_p = problems[last_p..].find(p.prompt.as_str()).map(|i| i + last_p);
            let at_s = solutions[last_s..].find(p.solution.as_str()).map(|i| i + last_s);
            last_p = at_p.expect("prompt missing or out of order");
            last_s = at_s.expect("solution missing or out of order");
        }
    }
}
