use rand::Rng;

use crate::worksheet_engine::{
    markup::{display_math, vspace},
    models::Problem,
};

const MAGNITUDES: [i32; 8] = [2, 3, 4, 5, 6, 7, 8, 9];
/// The first exponent is negative one time in eight.
const FIRST_SIGNS: [i32; 8] = [-1, 1, 1, 1, 1, 1, 1, 1];
const SECOND_SIGNS: [i32; 2] = [-1, 1];

fn pick<R: Rng>(rng: &mut R, pool: &[i32]) -> i32 {
    pool[rng.gen_range(0..pool.len())]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerOp {
    Multiply,
    Divide,
}

impl PowerOp {
    fn symbol(self) -> &'static str {
        match self {
            PowerOp::Multiply => "\\times",
            PowerOp::Divide   => "\\div",
        }
    }
}

/// `base^first op base^second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerProblem {
    pub base: i32,
    pub first: i32,
    pub op: PowerOp,
    pub second: i32,
}

impl PowerProblem {
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let base = pick(rng, &MAGNITUDES);
        let first = pick(rng, &MAGNITUDES) * pick(rng, &FIRST_SIGNS);
        let second = pick(rng, &MAGNITUDES) * pick(rng, &SECOND_SIGNS);
        let op = if rng.gen_bool(0.5) { PowerOp::Multiply } else { PowerOp::Divide };
        PowerProblem { base, first, op, second }
    }

    /// Exponents add under multiplication and subtract under division.
    pub fn result_exponent(&self) -> i32 {
        match self.op {
            PowerOp::Multiply => self.first + self.second,
            PowerOp::Divide   => self.first - self.second,
        }
    }

    fn expression(&self) -> String {
        format!(
            "{b}^{{{}}} {} {b}^{{{}}}",
            self.first,
            self.op.symbol(),
            self.second,
            b = self.base
        )
    }

    pub fn to_problem(&self) -> Problem {
        let prompt = format!("{}{}\n{}", vspace(4), display_math(&self.expression()), vspace(6));
        let answer = format!("{} = {}^{{{}}}", self.expression(), self.base, self.result_exponent());
        let solution = format!("{}{}\n{}", vspace(4), display_math(&answer), vspace(6));
        Problem::new(solution, prompt)
    }
}

/// pow: law of exponents with a shared base.
pub fn generate<R: Rng>(rng: &mut R) -> Problem {
    PowerProblem::sample(rng).to_problem()
}
