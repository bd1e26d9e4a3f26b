//! # worksheets
//!
//! Randomised arithmetic practice sheets with matching answer keys, emitted
//! as LaTeX.
//!
//! Each run picks one [`OperationKind`] (two-number addition, long division,
//! fraction arithmetic, percent change, ...) and a page count. The engine
//! draws every problem once and renders it twice: a prompt into the problem
//! sheet and a worked answer into the solution sheet, in the same grid slot.
//!
//! ## How it works
//!
//! 1. Build a [`WorksheetRequest`] with a kind, a page count, and an
//!    optional RNG seed.
//! 2. Call [`generate_worksheet`]. For every page it calls the generator for
//!    the kind once per grid slot (16, 40, or 80 slots depending on how
//!    compact the kind is), lays the prompts and answers into two 4-column
//!    grids, and joins the pages with page breaks.
//! 3. The returned [`Worksheet`] holds both complete documents plus the seed
//!    that produced them. [`output`] writes them to disk and runs the LaTeX
//!    compiler.
//!
//! ## Quick start
//!
//! ```rust
//! use worksheets::{generate_worksheet, OperationKind, WorksheetRequest};
//!
//! let kind: OperationKind = "frac1".parse().unwrap();
//! let sheet = generate_worksheet(WorksheetRequest::new(kind, 2).with_seed(42));
//!
//! assert!(sheet.problems.starts_with("\\documentclass"));
//! assert_eq!(sheet.problems_per_page(), 40);
//!
//! // Same seed, same documents.
//! let again = generate_worksheet(WorksheetRequest::new(kind, 2).with_seed(42));
//! assert_eq!(sheet.solutions, again.solutions);
//! ```

pub mod output;
pub mod worksheet_engine;

// Convenience re-exports so callers can use `worksheets::generate_worksheet`
// directly without reaching into `worksheet_engine::`.
pub use worksheet_engine::{
    generate_problem, generate_worksheet, GridStyle, OperationKind, Problem, Result, Worksheet,
    WorksheetError, WorksheetRequest,
};
