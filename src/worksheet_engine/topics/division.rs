use rand::Rng;

use crate::worksheet_engine::{
    markup::{verb, vspace, Tabular},
    models::Problem,
};

pub const DIVIDEND_MIN: u32 = 1000;
pub const DIVIDEND_MAX: u32 = 99_999;

/// A long-division exercise with its worked answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongDivision {
    pub dividend: u32,
    pub divisor: u32,
    pub quotient: u32,
    pub remainder: u32,
}

impl LongDivision {
    /// `divisor` must be non-zero; the sampling ranges start at 2.
    pub fn new(dividend: u32, divisor: u32) -> Self {
        LongDivision {
            dividend,
            divisor,
            quotient: dividend / divisor,
            remainder: dividend % divisor,
        }
    }

    /// Empty division bracket for the student to fill in.
    pub fn prompt(&self) -> String {
        let table = Tabular::new("rcl")
            .row(["", "", ""])
            .cline(2, 3)
            .row([verb(self.divisor), ")".to_string(), verb(self.dividend)]);
        format!("{{\\setlength\\tabcolsep{{2pt}} {}}}\n{}", table.render(), vspace(44))
    }

    /// The `\longdiv` macro from the preamble typesets every step of the
    /// division from the dividend and divisor alone.
    pub fn solution(&self) -> String {
        format!(
            "{{\\small\\quad\\longdiv{{{}}}{{{}}}}}{}",
            self.dividend,
            self.divisor,
            vspace(3)
        )
    }

    pub fn to_problem(&self) -> Problem {
        Problem::new(self.solution(), self.prompt())
    }
}

/// div1: single-digit divisor.
pub fn generate_single<R: Rng>(rng: &mut R) -> Problem {
    let dividend = rng.gen_range(DIVIDEND_MIN..=DIVIDEND_MAX);
    let divisor = rng.gen_range(2..=9);
    LongDivision::new(dividend, divisor).to_problem()
}

/// divm: divisor between 10 and 999.
pub fn generate_multi<R: Rng>(rng: &mut R) -> Problem {
    let dividend = rng.gen_range(DIVIDEND_MIN..=DIVIDEND_MAX);
    let divisor = rng.gen_range(10..=999);
    LongDivision::new(dividend, divisor).to_problem()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forced_operands_give_known_quotient() {
        let d = LongDivision::new(54321, 7);
        assert_eq!(d.quotient, 7760);
        assert_eq!(d.remainder, 1);
        assert_eq!(d.quotient * d.divisor + d.remainder, d.dividend);
    }

    #[test]
    fn solution_encodes_dividend_then_divisor() {
        let p = LongDivision::new(54321, 7).to_problem();
        assert!(p.solution.contains("\\longdiv{54321}{7}"));
        assert!(p.prompt.contains("\\verb|7| & ) & \\verb|54321|"));
        assert!(p.prompt.contains("\\cline{2-3}"));
        assert!(p.prompt.ends_with("\\vspace{44mm}\n"));
    }
}
