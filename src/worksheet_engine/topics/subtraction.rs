use rand::Rng;

use crate::worksheet_engine::{
    helpers::{operands, stacked, Gaps, MINUS},
    models::Problem,
    topics::addition::{SIGNED_MAX, SIGNED_MIN},
};

pub const MINUEND_MIN: i64 = 1001;
pub const MINUEND_MAX: i64 = 4999;

const GAPS: Gaps = Gaps::new(29, 23);

pub fn render_difference(a: i64, b: i64) -> Problem {
    stacked(MINUS, &operands(&[a, b]), &[], a - b, GAPS)
}

/// sub: `B <= A`, so the difference is never negative.
pub fn generate_sub<R: Rng>(rng: &mut R) -> Problem {
    let a = rng.gen_range(MINUEND_MIN..=MINUEND_MAX);
    let b = rng.gen_range(1..=a);
    render_difference(a, b)
}

/// subm: two signed integers.
pub fn generate_mixed<R: Rng>(rng: &mut R) -> Problem {
    let a = rng.gen_range(SIGNED_MIN..=SIGNED_MAX);
    let b = rng.gen_range(SIGNED_MIN..=SIGNED_MAX);
    render_difference(a, b)
}

/// Digits of a no-borrow pair, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoBorrowDigits {
    pub minuend: [u8; 4],
    pub subtrahend: [u8; 4],
}

impl NoBorrowDigits {
    /// Every subtrahend digit is at most the minuend digit above it; a zero
    /// leading digit simply drops out of the printed number.
    pub fn sample<R: Rng>(rng: &mut R) -> Self {
        let mut minuend = [0u8; 4];
        for d in minuend.iter_mut() {
            *d = rng.gen_range(1..=9);
        }
        let mut subtrahend = [0u8; 4];
        for (d, &top) in subtrahend.iter_mut().zip(minuend.iter()) {
            *d = rng.gen_range(0..=top);
        }
        NoBorrowDigits { minuend, subtrahend }
    }

    pub fn minuend(&self) -> i64 {
        to_number(&self.minuend)
    }

    pub fn subtrahend(&self) -> i64 {
        to_number(&self.subtrahend)
    }
}

fn to_number(digits: &[u8]) -> i64 {
    digits.iter().fold(0, |acc, &d| acc * 10 + i64::from(d))
}

/// subnb: four-digit subtraction with no borrowing in any column.
pub fn generate_no_borrow<R: Rng>(rng: &mut R) -> Problem {
    let digits = NoBorrowDigits::sample(rng);
    render_difference(digits.minuend(), digits.subtrahend())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn no_borrow_digits_never_exceed_the_minuend() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let d = NoBorrowDigits::sample(&mut rng);
            for (top, bottom) in d.minuend.iter().zip(d.subtrahend.iter()) {
                assert!(bottom <= top, "borrow needed in {d:?}");
            }
            assert!((1111..=9999).contains(&d.minuend()));
        }
    }

    #[test]
    fn blank_leading_digit_drops_out() {
        let d = NoBorrowDigits { minuend: [3, 5, 7, 9], subtrahend: [0, 2, 0, 4] };
        assert_eq!(d.subtrahend(), 204);
        let p = render_difference(d.minuend(), d.subtrahend());
        assert!(p.prompt.contains("$-$ & \\verb|204|"));
        assert!(p.solution.contains("\\verb|3375|"));
    }

    #[test]
    fn difference_renders_minus_sign_for_negative_results() {
        let p = render_difference(-12, 500);
        assert!(p.solution.contains("\\verb|-512|"));
    }
}
