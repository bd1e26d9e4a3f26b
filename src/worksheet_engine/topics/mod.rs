//! Problem generators grouped by arithmetic family.
//!
//! Every generator takes the injected random source and returns one
//! [`Problem`](crate::worksheet_engine::models::Problem):
//!
//! ```ignore
//! pub fn generate_<name><R: Rng>(rng: &mut R) -> Problem
//! ```
//!
//! Sampling and rendering are separate steps; the `render_*` functions and
//! the `*Problem` / `LongDivision` types build the markup from given operands.
//! The dispatcher in `generator.rs` maps each operation kind to one of these.

/// add2, add3, add4, addm
pub mod addition;
/// sub, subnb, subm
pub mod subtraction;
/// mul1, md<d>, mul2, mul3, muls, dmult
pub mod multiplication;
/// div1, divm
pub mod division;
/// frac1
pub mod fractions;
/// pow
pub mod powers;
/// pct1, pct2
pub mod percent;
