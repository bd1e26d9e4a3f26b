//! Core worksheet engine: problem generation, page layout, and documents.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: operation kinds, problems, requests, worksheets |
//! | `error`     | `WorksheetError` and the crate `Result` alias |
//! | `markup`    | Structured LaTeX builders: tabular rows, page grid |
//! | `numeric`   | Exact fractions and scaled decimals |
//! | `helpers`   | Stacked-column layout shared by the integer generators |
//! | `topics`    | One generator per operation kind, grouped by family |
//! | `generator` | `generate_problem()` dispatch and `generate_worksheet()` |
//! | `page`      | One page of problems rendered as two aligned grids |
//! | `document`  | Preamble, page breaks, postamble for both documents |

pub mod document;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod markup;
pub mod models;
pub mod numeric;
pub mod page;
pub mod topics;

// Re-export the public API surface so callers can use
// `worksheet_engine::generate_worksheet` without reaching into sub-modules.
pub use error::{Result, WorksheetError};
pub use generator::{generate_problem, generate_worksheet};
pub use models::{GridStyle, OperationKind, Problem, Worksheet, WorksheetRequest};
pub use page::{Page, COLUMNS};
