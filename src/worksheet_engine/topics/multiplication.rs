use rand::Rng;

use crate::worksheet_engine::{
    helpers::{operands, stacked, Gaps, WorkRow, TIMES},
    markup::{large, verb, vspace, Tabular},
    models::Problem,
    numeric::Decimal,
};

// ---------------------------------------------------------------------------
// Single-digit family (mul1, md<d>)
// ---------------------------------------------------------------------------

const SPACER: &str = "\\ ";

fn product_table(a: u32, b: u32, show_product: bool) -> String {
    let product = if show_product { verb(a * b) } else { String::new() };
    Tabular::new("rr")
        .row([String::new(), verb(a)])
        .row([TIMES.to_string(), verb(b)])
        .rule()
        .row([String::new(), product])
        .render_inline()
}

fn product_grid(pairs: &[(u32, u32); 4], show_products: bool) -> String {
    let cells: Vec<String> = pairs
        .iter()
        .map(|&(a, b)| product_table(a, b, show_products))
        .collect();
    let table = Tabular::new("cc")
        .row([SPACER, SPACER])
        .row([cells[0].as_str(), cells[1].as_str()])
        .row([SPACER, SPACER])
        .row([cells[2].as_str(), cells[3].as_str()]);
    format!("{}\n{}", large(&table.render()), vspace(3))
}

/// Four small products laid out two by two.
pub fn render_digit_products(pairs: &[(u32, u32); 4]) -> Problem {
    Problem::new(product_grid(pairs, true), product_grid(pairs, false))
}

/// mul1: four products of random digits in 2..=9.
pub fn generate_digit_products<R: Rng>(rng: &mut R) -> Problem {
    let mut pairs = [(0u32, 0u32); 4];
    for pair in pairs.iter_mut() {
        *pair = (rng.gen_range(2..=9), rng.gen_range(2..=9));
    }
    render_digit_products(&pairs)
}

/// md<d>: four products with the second factor fixed to `digit`.
pub fn generate_times_digit<R: Rng>(rng: &mut R, digit: u8) -> Problem {
    let mut pairs = [(0u32, 0u32); 4];
    for pair in pairs.iter_mut() {
        *pair = (rng.gen_range(2..=9), u32::from(digit));
    }
    render_digit_products(&pairs)
}

// ---------------------------------------------------------------------------
// Long multiplication (mul2, mul3, muls)
// ---------------------------------------------------------------------------

/// `a` times each digit of `b`, ones digit first, each shifted into place.
pub fn partial_products(a: i64, b: i64) -> Vec<i64> {
    let mut partials = Vec::new();
    let mut rest = b.abs();
    let mut place = 1;
    loop {
        partials.push(a * (rest % 10) * place);
        rest /= 10;
        if rest == 0 {
            break;
        }
        place *= 10;
    }
    partials
}

/// Long multiplication with one partial product per digit of `b`; the
/// last partial carries the `+` that sums them.
pub fn render_long_product(a: i64, b: i64, gaps: Gaps) -> Problem {
    let partials = partial_products(a, b);
    let last = partials.len() - 1;
    let work: Vec<WorkRow> = partials
        .iter()
        .enumerate()
        .map(|(i, p)| WorkRow::new(if i == last { "+" } else { "" }, p))
        .collect();
    stacked(TIMES, &operands(&[a, b]), &work, a * b, gaps)
}

/// Build a number from digits, most significant first.
fn from_digits(digits: &[i64]) -> i64 {
    digits.iter().fold(0, |acc, d| acc * 10 + d)
}

/// Sample a `len`-digit number, ones digit first; the leading digit is never 0.
fn sample_digits<R: Rng>(rng: &mut R, len: usize) -> i64 {
    let mut digits: Vec<i64> = (0..len)
        .map(|i| if i + 1 == len { rng.gen_range(1..=9) } else { rng.gen_range(0..=9) })
        .collect();
    digits.reverse();
    from_digits(&digits)
}

/// mul2: two two-digit factors.
pub fn generate_two_digit<R: Rng>(rng: &mut R) -> Problem {
    let a = sample_digits(rng, 2);
    let b = sample_digits(rng, 2);
    render_long_product(a, b, Gaps::new(33, 14))
}

/// mul3: two three-digit factors.
pub fn generate_three_digit<R: Rng>(rng: &mut R) -> Problem {
    let a = sample_digits(rng, 3);
    let b = sample_digits(rng, 3);
    render_long_product(a, b, Gaps::new(33, 8))
}

pub const SINGLE_FACTOR_MIN: i64 = 9999;
pub const SINGLE_FACTOR_MAX: i64 = 19997;

pub fn render_single_digit_product(a: i64, b: i64) -> Problem {
    stacked(TIMES, &operands(&[a, b]), &[], a * b, Gaps::new(20, 16))
}

/// muls: a five-digit number times one digit, no partials.
pub fn generate_single_digit<R: Rng>(rng: &mut R) -> Problem {
    let a = rng.gen_range(SINGLE_FACTOR_MIN..=SINGLE_FACTOR_MAX);
    let b = rng.gen_range(2..=9);
    render_single_digit_product(a, b)
}

// ---------------------------------------------------------------------------
// Decimal multiplication (dmult)
// ---------------------------------------------------------------------------

/// One signed decimal factor: an integer mantissa over a power of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalFactor {
    pub mantissa: i64,
    pub places: u32,
    pub negative: bool,
}

impl DecimalFactor {
    pub fn value(self) -> Decimal {
        let sign = if self.negative { -1 } else { 1 };
        Decimal::scaled(sign * self.mantissa, self.places)
    }

    fn random_sign<R: Rng>(rng: &mut R) -> bool {
        !rng.gen_bool(0.5)
    }
}

/// Partials are worked on the unsigned mantissas; sign and decimal point are
/// placed only in the final product.
pub fn render_decimal_product(a: DecimalFactor, b: DecimalFactor) -> Problem {
    let (fa, fb) = (a.value(), b.value());
    let work: Vec<WorkRow> = partial_products(a.mantissa, b.mantissa)
        .into_iter()
        .map(|p| WorkRow::new("", p))
        .collect();
    stacked(TIMES, &operands(&[fa, fb]), &work, fa * fb, Gaps::new(33, 8))
}

/// dmult: up to four significant digits times two digits, each scaled by
/// 10^-1..10^-4 with a random sign.
pub fn generate_decimal<R: Rng>(rng: &mut R) -> Problem {
    let ones = rng.gen_range(1..=9);
    let tens = rng.gen_range(0..=9);
    let hundreds = rng.gen_range(0..=9);
    let thousands = rng.gen_range(0..=9);
    let a = DecimalFactor {
        mantissa: from_digits(&[thousands, hundreds, tens, ones]),
        places: rng.gen_range(1..=4),
        negative: DecimalFactor::random_sign(rng),
    };

    let ones = rng.gen_range(1..=9);
    let tens = rng.gen_range(1..=9);
    let b = DecimalFactor {
        mantissa: from_digits(&[tens, ones]),
        places: rng.gen_range(1..=4),
        negative: DecimalFactor::random_sign(rng),
    };

    render_decimal_product(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn partial_products_shift_by_place() {
        assert_eq!(partial_products(47, 36), vec![282, 1410]);
        assert_eq!(partial_products(123, 405), vec![615, 0, 49200]);
        assert_eq!(partial_products(123, 405).iter().sum::<i64>(), 123 * 405);
    }

    #[test]
    fn long_product_marks_last_partial_with_plus() {
        let p = render_long_product(47, 36, Gaps::new(33, 14));
        assert!(p.solution.contains("+        & \\verb|1410|"));
        assert!(p.solution.contains("\\verb|1692|"));
        assert!(!p.prompt.contains("1692"));
    }

    #[test]
    fn sampled_factors_have_the_right_width() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            assert!((10..=99).contains(&sample_digits(&mut rng, 2)));
            assert!((100..=999).contains(&sample_digits(&mut rng, 3)));
        }
    }

    #[test]
    fn digit_family_shows_products_only_in_solution() {
        let p = render_digit_products(&[(7, 8), (3, 4), (9, 9), (2, 6)]);
        for product in ["56", "12", "81"] {
            assert!(p.solution.contains(&format!("\\verb|{product}|")));
            assert!(!p.prompt.contains(&format!("\\verb|{product}|")));
        }
        assert_eq!(p.prompt.matches("\\begin{tabular}{rr}").count(), 4);
    }

    #[test]
    fn digit_grid_has_one_spacer_between_pairs() {
        let p = render_digit_products(&[(2, 3), (4, 5), (6, 7), (8, 9)]);
        let outer = p
            .solution
            .split("\\begin{tabular}{cc}\n")
            .nth(1)
            .and_then(|rest| rest.split("\n\\end{tabular}").next())
            .unwrap();
        let rows: Vec<&str> = outer.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].starts_with(SPACER));
        assert!(rows[1].starts_with("\\begin{tabular}{rr}"));
        assert!(rows[2].starts_with(SPACER));
        assert!(rows[3].starts_with("\\begin{tabular}{rr}"));
    }

    #[test]
    fn times_digit_fixes_second_factor() {
        let mut rng = StdRng::seed_from_u64(9);
        let p = generate_times_digit(&mut rng, 7);
        assert_eq!(p.prompt.matches("$\\times$ & \\verb|7|").count(), 4);
    }

    #[test]
    fn decimal_product_is_exact_and_signed() {
        let a = DecimalFactor { mantissa: 1234, places: 2, negative: true };
        let b = DecimalFactor { mantissa: 56, places: 1, negative: false };
        let p = render_decimal_product(a, b);
        assert!(p.prompt.contains("\\verb|-12.34|"));
        assert!(p.prompt.contains("\\verb|5.6|"));
        assert!(p.solution.contains("\\verb|7404|"));
        assert!(p.solution.contains("\\verb|61700|"));
        assert!(p.solution.contains("\\verb|-69.104|"));
    }

    #[test]
    fn decimal_product_of_two_negatives_is_positive() {
        let a = DecimalFactor { mantissa: 5, places: 1, negative: true };
        let b = DecimalFactor { mantissa: 12, places: 1, negative: true };
        let p = render_decimal_product(a, b);
        assert!(p.solution.contains("\\verb|0.60|"));
    }
}
