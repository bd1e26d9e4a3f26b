use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::worksheet_engine::{
    markup::{display_math, vspace},
    models::Problem,
    numeric::Fraction,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl FractionOp {
    pub const ALL: [FractionOp; 4] =
        [FractionOp::Add, FractionOp::Subtract, FractionOp::Multiply, FractionOp::Divide];

    pub fn apply(self, lhs: Fraction, rhs: Fraction) -> Fraction {
        match self {
            FractionOp::Add      => lhs + rhs,
            FractionOp::Subtract => lhs - rhs,
            FractionOp::Multiply => lhs * rhs,
            FractionOp::Divide   => lhs / rhs,
        }
    }
}

impl fmt::Display for FractionOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionOp::Add      => write!(f, "+"),
            FractionOp::Subtract => write!(f, "-"),
            FractionOp::Multiply => write!(f, "\\times"),
            FractionOp::Divide   => write!(f, "\\div"),
        }
    }
}

/// Operands as drawn, before any reduction (`6/8` stays `6/8` on the sheet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionProblem {
    pub lhs: (i64, i64),
    pub op: FractionOp,
    pub rhs: (i64, i64),
}

impl FractionProblem {
    /// Numerators are two distinct values from 1..=9 and denominators two
    /// distinct values from 2..=9, each pair drawn from a shuffled pool.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let mut numerators: Vec<i64> = (1..=9).collect();
        numerators.shuffle(rng);
        let mut denominators: Vec<i64> = (2..=9).collect();
        denominators.shuffle(rng);
        let op = FractionOp::ALL[rng.gen_range(0..FractionOp::ALL.len())];
        FractionProblem {
            lhs: (numerators[0], denominators[0]),
            op,
            rhs: (numerators[1], denominators[1]),
        }
    }

    pub fn result(&self) -> Fraction {
        self.op.apply(
            Fraction::new(self.lhs.0, self.lhs.1),
            Fraction::new(self.rhs.0, self.rhs.1),
        )
    }

    fn expression(&self) -> String {
        format!(
            "\\frac{{{}}}{{{}}} {} \\frac{{{}}}{{{}}}",
            self.lhs.0, self.lhs.1, self.op, self.rhs.0, self.rhs.1
        )
    }

    pub fn to_problem(&self) -> Problem {
        let prompt = format!("{}{}\n{}", vspace(4), display_math(&self.expression()), vspace(6));
        let answer = format!("{} = {}", self.expression(), display_result(self.result()));
        let solution = format!("{}{}\n{}", vspace(4), display_math(&answer), vspace(6));
        Problem::new(solution, prompt)
    }
}

/// Whole numbers print bare; a negative fraction puts the sign in front of
/// `\frac` rather than on the numerator.
pub fn display_result(value: Fraction) -> String {
    if value.is_integer() {
        value.numer().to_string()
    } else if value.numer() < 0 {
        format!("-\\frac{{{}}}{{{}}}", value.numer().abs(), value.denom())
    } else {
        format!("\\frac{{{}}}{{{}}}", value.numer(), value.denom())
    }
}

/// frac1: one operation on two single-digit fractions.
pub fn generate<R: Rng>(rng: &mut R) -> Problem {
    FractionProblem::sample(rng).to_problem()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn whole_results_drop_the_denominator() {
        assert_eq!(display_result(Fraction::new(6, 3)), "2");
        assert_eq!(display_result(Fraction::new(-6, 3)), "-2");
        assert_eq!(display_result(Fraction::new(0, 7)), "0");
    }

    #[test]
    fn negative_fraction_sign_sits_outside() {
        assert_eq!(display_result(Fraction::new(-1, 6)), "-\\frac{1}{6}");
        assert_eq!(display_result(Fraction::new(5, 6)), "\\frac{5}{6}");
    }

    #[test]
    fn rendered_problem_shows_unreduced_operands() {
        let p = FractionProblem { lhs: (6, 8), op: FractionOp::Divide, rhs: (3, 4) };
        let problem = p.to_problem();
        assert!(problem.prompt.contains("\\frac{6}{8} \\div \\frac{3}{4}$"));
        assert!(problem.solution.contains("\\frac{6}{8} \\div \\frac{3}{4} = 1$"));
    }

    #[test]
    fn sampled_operands_are_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..300 {
            let p = FractionProblem::sample(&mut rng);
            assert_ne!(p.lhs.0, p.rhs.0);
            assert_ne!(p.lhs.1, p.rhs.1);
            for (n, d) in [p.lhs, p.rhs] {
                assert!((1..=9).contains(&n));
                assert!((2..=9).contains(&d));
            }
        }
    }
}
