use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::worksheet_engine::error::WorksheetError;

// ---------------------------------------------------------------------------
// Operation kinds
// ---------------------------------------------------------------------------

/// Which kind of arithmetic problem fills the worksheet.
///
/// Parsed from and displayed as the short identifiers used on the command
/// line (`add2`, `md7`, `frac1`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OperationKind {
    /// Two addends.
    Add2,
    /// Three addends.
    Add3,
    /// Four addends.
    Add4,
    /// Mixed-sign addition.
    AddMixed,
    /// Mixed-sign subtraction.
    SubMixed,
    /// Multi-digit subtraction, borrowing allowed.
    Sub,
    /// Four-digit subtraction that never borrows.
    SubNoBorrow,
    /// Random single-digit products.
    Mul1,
    /// Single-digit products with one factor fixed to the digit.
    MultiplyDigit(u8),
    /// Two-digit by two-digit multiplication.
    Mul2,
    /// Three-digit by three-digit multiplication.
    Mul3,
    /// Five-digit number times a single digit.
    MulSingle,
    /// Multiplication of signed decimal numbers.
    DecimalMul,
    /// Long division by a single digit.
    Div1,
    /// Long division by a multi-digit divisor.
    DivMulti,
    /// Arithmetic with single-digit fractions.
    Frac1,
    /// Products and quotients of powers with a shared base.
    Pow,
    /// Percent of a number.
    Pct1,
    /// Percent change.
    Pct2,
}

impl OperationKind {
    /// Every fixed identifier, in usage-listing order. `md<d>` is listed once
    /// as `MultiplyDigit(2)`.
    pub const ALL: [OperationKind; 19] = [
        OperationKind::Add2,
        OperationKind::Add3,
        OperationKind::Add4,
        OperationKind::AddMixed,
        OperationKind::SubMixed,
        OperationKind::Sub,
        OperationKind::SubNoBorrow,
        OperationKind::Mul1,
        OperationKind::Mul2,
        OperationKind::Mul3,
        OperationKind::MulSingle,
        OperationKind::Div1,
        OperationKind::DivMulti,
        OperationKind::MultiplyDigit(2),
        OperationKind::Frac1,
        OperationKind::Pow,
        OperationKind::DecimalMul,
        OperationKind::Pct1,
        OperationKind::Pct2,
    ];

    /// Identifiers that are recognised but have no generator yet, with the
    /// description shown in the usage listing.
    pub const RESERVED: [(&'static str, &'static str); 1] =
        [("reduce", "fractions to reduce to lowest terms")];

    /// One-line description used by the usage listing.
    pub fn description(self) -> &'static str {
        match self {
            OperationKind::Add2             => "two-number integer addition",
            OperationKind::Add3             => "three-number integer addition",
            OperationKind::Add4             => "four-number integer addition",
            OperationKind::AddMixed         => "mixed-sign addition",
            OperationKind::SubMixed         => "mixed-sign subtraction",
            OperationKind::Sub              => "multidigit integer subtraction with borrowing",
            OperationKind::SubNoBorrow      => "multidigit integer subtraction without borrowing",
            OperationKind::Mul1             => "random single-digit multiplication",
            OperationKind::MultiplyDigit(_) => "multiplication practice for one digit",
            OperationKind::Mul2             => "multiply two two-digit integers",
            OperationKind::Mul3             => "multiply two three-digit integers",
            OperationKind::MulSingle        => "multidigit times single-digit multiplication",
            OperationKind::DecimalMul       => "multiplication of decimal numbers",
            OperationKind::Div1             => "single-digit long division",
            OperationKind::DivMulti         => "multi-digit long division",
            OperationKind::Frac1            => "arithmetic with one-digit fractions",
            OperationKind::Pow              => "multiplication and division with powers",
            OperationKind::Pct1             => "percent of a number",
            OperationKind::Pct2             => "percent change",
        }
    }

    /// The operation table printed under the command-line usage.
    pub fn usage_listing() -> String {
        let mut out = String::from("<OP> is one of:\n");
        for kind in Self::ALL {
            let name = match kind {
                OperationKind::MultiplyDigit(_) => "md?".to_string(),
                other => other.to_string(),
            };
            out.push_str(&format!("  {name:<7} - {}\n", kind.description()));
        }
        for (name, description) in Self::RESERVED {
            out.push_str(&format!("  {name:<7} - {description} (reserved)\n"));
        }
        out
    }

    /// Rows of four problems placed on one page. Denser kinds get more rows.
    pub fn rows_per_page(self) -> usize {
        match self {
            OperationKind::Frac1 | OperationKind::Pow => 10,
            OperationKind::Pct1 | OperationKind::Pct2 => 20,
            _ => 4,
        }
    }

    /// The single-digit family already draws its own sub-tables, so its page
    /// grid has no borders. `md0` and `md1` keep the bordered grid.
    pub fn grid_style(self) -> GridStyle {
        match self {
            OperationKind::Mul1 => GridStyle::Borderless,
            OperationKind::MultiplyDigit(d) if d >= 2 => GridStyle::Borderless,
            _ => GridStyle::Bordered,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OperationKind::Add2             => "add2",
            OperationKind::Add3             => "add3",
            OperationKind::Add4             => "add4",
            OperationKind::AddMixed         => "addm",
            OperationKind::SubMixed         => "subm",
            OperationKind::Sub              => "sub",
            OperationKind::SubNoBorrow      => "subnb",
            OperationKind::Mul1             => "mul1",
            OperationKind::MultiplyDigit(d) => return write!(f, "md{d}"),
            OperationKind::Mul2             => "mul2",
            OperationKind::Mul3             => "mul3",
            OperationKind::MulSingle        => "muls",
            OperationKind::DecimalMul       => "dmult",
            OperationKind::Div1             => "div1",
            OperationKind::DivMulti         => "divm",
            OperationKind::Frac1            => "frac1",
            OperationKind::Pow              => "pow",
            OperationKind::Pct1             => "pct1",
            OperationKind::Pct2             => "pct2",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for OperationKind {
    type Err = WorksheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "add2"  => OperationKind::Add2,
            "add3"  => OperationKind::Add3,
            "add4"  => OperationKind::Add4,
            "addm"  => OperationKind::AddMixed,
            "subm"  => OperationKind::SubMixed,
            "sub"   => OperationKind::Sub,
            "subnb" => OperationKind::SubNoBorrow,
            "mul1"  => OperationKind::Mul1,
            "mul2"  => OperationKind::Mul2,
            "mul3"  => OperationKind::Mul3,
            "muls"  => OperationKind::MulSingle,
            "dmult" => OperationKind::DecimalMul,
            "div1"  => OperationKind::Div1,
            "divm"  => OperationKind::DivMulti,
            "frac1" => OperationKind::Frac1,
            "pow"   => OperationKind::Pow,
            "pct1"  => OperationKind::Pct1,
            "pct2"  => OperationKind::Pct2,
            _ if Self::RESERVED.iter().any(|(name, _)| *name == s) => {
                return Err(WorksheetError::NotImplemented(s.to_string()));
            }
            _ => {
                return s
                    .strip_prefix("md")
                    .and_then(single_digit)
                    .map(OperationKind::MultiplyDigit)
                    .ok_or_else(|| WorksheetError::UnknownOperationKind(s.to_string()));
            }
        };
        Ok(kind)
    }
}

fn single_digit(s: &str) -> Option<u8> {
    match s.as_bytes() {
        [b @ b'0'..=b'9'] => Some(b - b'0'),
        _ => None,
    }
}

impl TryFrom<String> for OperationKind {
    type Error = WorksheetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OperationKind> for String {
    fn from(kind: OperationKind) -> Self {
        kind.to_string()
    }
}

// ---------------------------------------------------------------------------
// Problems, pages, worksheets
// ---------------------------------------------------------------------------

/// One generated exercise: the answer-key fragment and the matching prompt
/// fragment, both LaTeX source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub solution: String,
    pub prompt: String,
}

impl Problem {
    pub fn new(solution: impl Into<String>, prompt: impl Into<String>) -> Self {
        Problem { solution: solution.into(), prompt: prompt.into() }
    }
}

/// How the page grid draws its cell borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStyle {
    Bordered,
    Borderless,
}

#[derive(Debug, Clone)]
pub struct WorksheetRequest {
    pub kind: OperationKind,
    pub pages: usize,
    /// `None` draws a fresh seed from OS entropy; the seed actually used is
    /// reported back on the [`Worksheet`].
    pub rng_seed: Option<u64>,
}

impl WorksheetRequest {
    /// One entropy-seeded request for `pages` pages of `kind`.
    pub fn new(kind: OperationKind, pages: usize) -> Self {
        WorksheetRequest { kind, pages, rng_seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

/// The finished pair of documents.
#[derive(Debug, Clone)]
pub struct Worksheet {
    pub kind: OperationKind,
    pub pages: usize,
    pub seed: u64,
    /// Complete LaTeX source of the problem sheet.
    pub problems: String,
    /// Complete LaTeX source of the answer key.
    pub solutions: String,
}

impl Worksheet {
    pub fn problems_per_page(&self) -> usize {
        self.kind.rows_per_page() * crate::worksheet_engine::page::COLUMNS
    }
}
