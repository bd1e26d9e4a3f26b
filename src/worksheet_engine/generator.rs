use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::info;

use crate::worksheet_engine::{
    document,
    models::{OperationKind, Problem, Worksheet, WorksheetRequest},
    topics::{addition, division, fractions, multiplication, percent, powers, subtraction},
};

/// Core dispatch: routes one draw to the generator for `kind`.
pub fn generate_problem<R: Rng>(rng: &mut R, kind: OperationKind) -> Problem {
    match kind {
        OperationKind::Add2 => addition::generate_sum(rng, 2),
        OperationKind::Add3 => addition::generate_sum(rng, 3),
        OperationKind::Add4 => addition::generate_sum(rng, 4),
        OperationKind::AddMixed => addition::generate_mixed(rng),

        OperationKind::Sub => subtraction::generate_sub(rng),
        OperationKind::SubNoBorrow => subtraction::generate_no_borrow(rng),
        OperationKind::SubMixed => subtraction::generate_mixed(rng),

        OperationKind::Mul1 => multiplication::generate_digit_products(rng),
        OperationKind::MultiplyDigit(d) => multiplication::generate_times_digit(rng, d),
        OperationKind::Mul2 => multiplication::generate_two_digit(rng),
        OperationKind::Mul3 => multiplication::generate_three_digit(rng),
        OperationKind::MulSingle => multiplication::generate_single_digit(rng),
        OperationKind::DecimalMul => multiplication::generate_decimal(rng),

        OperationKind::Div1 => division::generate_single(rng),
        OperationKind::DivMulti => division::generate_multi(rng),

        OperationKind::Frac1 => fractions::generate(rng),
        OperationKind::Pow => powers::generate(rng),

        OperationKind::Pct1 => percent::generate_percent_of(rng),
        OperationKind::Pct2 => percent::generate_percent_change(rng),
    }
}

/// Build both documents for a request.
///
/// With `rng_seed: None` a seed is drawn from OS entropy first and stored on
/// the result, so any run can be reproduced.
pub fn generate_worksheet(request: WorksheetRequest) -> Worksheet {
    let seed = request
        .rng_seed
        .unwrap_or_else(|| StdRng::from_entropy().next_u64());
    let mut rng = StdRng::seed_from_u64(seed);

    info!(kind = %request.kind, pages = request.pages, seed, "generating worksheet");
    let (problems, solutions) = document::assemble(&mut rng, request.kind, request.pages);

    Worksheet {
        kind: request.kind,
        pages: request.pages,
        seed,
        problems,
        solutions,
    }
}
