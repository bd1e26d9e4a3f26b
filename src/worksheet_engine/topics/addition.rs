use rand::Rng;

use crate::worksheet_engine::{
    helpers::{operands, stacked, Gaps, PLUS},
    models::Problem,
};

/// Range of each addend in the multi-addend kinds.
pub const ADDEND_MIN: i64 = 1101;
pub const ADDEND_MAX: i64 = 4099;

/// Range of each operand in the mixed-sign kinds.
pub const SIGNED_MIN: i64 = -999;
pub const SIGNED_MAX: i64 = 999;

fn sum_gaps(addends: usize) -> Gaps {
    match addends {
        0..=2 => Gaps::new(29, 23),
        3     => Gaps::new(26, 20),
        _     => Gaps::new(20, 16),
    }
}

/// add2 / add3 / add4: `addends` positive integers, summed.
pub fn generate_sum<R: Rng>(rng: &mut R, addends: usize) -> Problem {
    let values: Vec<i64> = (0..addends)
        .map(|_| rng.gen_range(ADDEND_MIN..=ADDEND_MAX))
        .collect();
    render_sum(&values)
}

pub fn render_sum(values: &[i64]) -> Problem {
    let total: i64 = values.iter().sum();
    stacked(PLUS, &operands(values), &[], total, sum_gaps(values.len()))
}

/// addm: two signed integers, the sum may be negative.
pub fn generate_mixed<R: Rng>(rng: &mut R) -> Problem {
    let a = rng.gen_range(SIGNED_MIN..=SIGNED_MAX);
    let b = rng.gen_range(SIGNED_MIN..=SIGNED_MAX);
    render_sum(&[a, b])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn three_addends_use_the_three_addend_spacing() {
        let p = render_sum(&[1500, 2000, 3000]);
        assert!(p.solution.contains("\\verb|6500|"));
        assert!(p.prompt.ends_with("\\vspace{26mm}\n"));
        assert!(p.solution.ends_with("\\vspace{20mm}\n"));
    }

    #[test]
    fn mixed_sum_can_be_negative() {
        let p = render_sum(&[-450, 120]);
        assert!(p.prompt.contains("\\verb|-450|"));
        assert!(p.solution.contains("\\verb|-330|"));
    }

    #[test]
    fn four_addends_are_all_shown() {
        let mut rng = StdRng::seed_from_u64(3);
        let p = generate_sum(&mut rng, 4);
        assert_eq!(p.prompt.matches("\\verb|").count(), 4);
        assert_eq!(p.solution.matches("\\verb|").count(), 5);
    }
}
