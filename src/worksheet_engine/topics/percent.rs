use rand::Rng;

use crate::worksheet_engine::{
    markup::{verb, vspace},
    models::Problem,
};

/// `percent`% of `base`, printed with six decimals.
///
/// `percent × base` is an integer number of hundredths, so the value is
/// formatted exactly instead of going through a float.
pub fn render_percent_of(percent: u32, base: u32) -> Problem {
    let hundredths = percent * base;
    let value = format!("{}.{:02}0000", hundredths / 100, hundredths % 100);
    let prompt = format!("{}{}\\% of {}\n", vspace(2).trim_end(), verb(percent), verb(base));
    let solution = format!("{}\\% of {} is {}\n", verb(percent), verb(base), verb(value));
    Problem::new(solution, prompt)
}

/// pct1: a whole percentage of a number between 10 and 1000.
pub fn generate_percent_of<R: Rng>(rng: &mut R) -> Problem {
    let percent = rng.gen_range(1..=100);
    let base = rng.gen_range(10..=1000);
    render_percent_of(percent, base)
}

/// Percent change from `from` to `to`, three decimals.
pub fn percent_change(from: i32, to: i32) -> String {
    let change = 100.0 * f64::from(to - from) / f64::from(from);
    format!("{change:.3}")
}

pub fn render_percent_change(from: i32, to: i32) -> Problem {
    let prompt = format!("{}from {} to {}\n", vspace(2).trim_end(), verb(from), verb(to));
    let solution = format!(
        "({}-{})/{} = {}\\%\n",
        verb(to),
        verb(from),
        verb(from),
        verb(percent_change(from, to))
    );
    Problem::new(solution, prompt)
}

/// pct2: start between 10 and 100, then move down or up by less than the
/// start, so the new value stays positive and differs from the old one.
pub fn generate_percent_change<R: Rng>(rng: &mut R) -> Problem {
    let from = rng.gen_range(10..=100);
    let to = if rng.gen_bool(0.5) {
        from - rng.gen_range(1..from)
    } else {
        from + rng.gen_range(1..from)
    };
    render_percent_change(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_of_is_exact_to_six_places() {
        let p = render_percent_of(7, 250);
        assert!(p.solution.contains("\\verb|17.500000|"));
        assert_eq!(p.prompt, "\\vspace{2mm}\\verb|7|\\% of \\verb|250|\n");
        let q = render_percent_of(33, 17);
        assert!(q.solution.contains("\\verb|5.610000|"));
    }

    #[test]
    fn forced_drop_is_minus_twenty_percent() {
        assert_eq!(percent_change(50, 40), "-20.000");
        let p = render_percent_change(50, 40);
        assert_eq!(p.solution, "(\\verb|40|-\\verb|50|)/\\verb|50| = \\verb|-20.000|\\%\n");
        assert_eq!(p.prompt, "\\vspace{2mm}from \\verb|50| to \\verb|40|\n");
    }

    #[test]
    fn change_rounds_to_three_places() {
        assert_eq!(percent_change(30, 40), "33.333");
        assert_eq!(percent_change(30, 20), "-33.333");
        assert_eq!(percent_change(12, 13), "8.333");
    }
}
