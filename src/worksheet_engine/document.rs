//! Full documents: shared preamble, pages separated by page breaks, and the
//! closing postamble, produced for the problem sheet and the answer key in
//! one pass.

use rand::Rng;

use crate::worksheet_engine::{models::OperationKind, page::build_page};

/// Letter-size geometry, the `array` package for centred fixed-width
/// columns, and `\longdiv{dividend}{divisor}`, which typesets a complete
/// long division (quotient on top, one subtraction step per non-zero
/// quotient digit).
pub const PREAMBLE: &str = r"\documentclass[12pt]{article}
\usepackage{geometry}
\geometry{letterpaper,left=20mm,top=15mm}
\usepackage{array}
\newcount\gpten % (global) power-of-ten -- tells which digit we are doing
\countdef\rtot2 % running total -- remainder so far
\countdef\LDscratch4 % scratch
\def\longdiv#1#2{%
 \vtop{\normalbaselines \offinterlineskip
   \setbox\strutbox\hbox{\vrule height 2.1ex depth .5ex width0ex}%
   \def\showdig{$\underline{\the\LDscratch\strut}$\cr\the\rtot\strut\cr
       \noalign{\kern-.2ex}}%
   \global\rtot=#1\relax
   \count0=\rtot\divide\count0by#2\edef\quotient{\the\count0}%
   % make list macro out of digits in quotient:
   \def\temp##1{\ifx##1\temp\else \noexpand\dodig ##1\expandafter\temp\fi}%
   \edef\routine{\expandafter\temp\quotient\temp}%
   % process list to give power-of-ten:
   \def\dodig##1{\global\multiply\gpten by10 }\global\gpten=1 \routine
   % to display effect of one digit in quotient (zero ignored):
   \def\dodig##1{\global\divide\gpten by10
      \LDscratch =\gpten
      \multiply\LDscratch  by##1%
      \multiply\LDscratch  by#2%
      \global\advance\rtot-\LDscratch \relax
      \ifnum\LDscratch>0 \showdig \fi % must hide \cr in a macro to skip it
   }%
   \tabskip=0pt
   \halign{\hfil##\cr % \halign for entire division problem
     $\quotient$\strut\cr
     #2$\,\overline{\vphantom{\big)}%
     \hbox{\smash{\raise3.5\fontdimen8\textfont3\hbox{$\big)$}}}%
     \mkern2mu \the\rtot}$\cr\noalign{\kern-.2ex}
     \routine \cr % do each digit in quotient
}}}
\begin{document}
";

pub const POSTAMBLE: &str = "\\end{document}\n";

pub const PAGE_BREAK: &str = "\\newpage\n";

/// Build `pages` pages of `kind` and return the complete
/// `(problem_document, solution_document)` pair.
///
/// Page counts are trusted; zero pages yields two empty documents.
pub fn assemble<R: Rng>(rng: &mut R, kind: OperationKind, pages: usize) -> (String, String) {
    let mut problems = String::from(PREAMBLE);
    let mut solutions = String::from(PREAMBLE);

    for i in 0..pages {
        let (solution_page, problem_page) = build_page(rng, kind);
        problems.push_str(&problem_page);
        solutions.push_str(&solution_page);
        if i + 1 < pages {
            problems.push_str(PAGE_BREAK);
            solutions.push_str(PAGE_BREAK);
        }
    }

    problems.push_str(POSTAMBLE);
    solutions.push_str(POSTAMBLE);
    (problems, solutions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pages_are_separated_but_not_trailed_by_breaks() {
        let mut rng = StdRng::seed_from_u64(4);
        let (problems, solutions) = assemble(&mut rng, OperationKind::Add2, 3);
        assert_eq!(problems.matches(PAGE_BREAK).count(), 2);
        assert_eq!(solutions.matches(PAGE_BREAK).count(), 2);
        assert!(!problems.contains("\\newpage\n\\end{document}"));
        assert_eq!(problems.matches("\\begin{center}").count(), 3);
    }

    #[test]
    fn both_documents_share_preamble_and_postamble() {
        let mut rng = StdRng::seed_from_u64(5);
        let (problems, solutions) = assemble(&mut rng, OperationKind::Div1, 1);
        for doc in [&problems, &solutions] {
            assert!(doc.starts_with(PREAMBLE));
            assert!(doc.ends_with(POSTAMBLE));
        }
        assert!(PREAMBLE.contains("\\def\\longdiv#1#2"));
    }

    #[test]
    fn zero_pages_is_just_the_frame() {
        let mut rng = StdRng::seed_from_u64(6);
        let (problems, _) = assemble(&mut rng, OperationKind::Pow, 0);
        assert_eq!(problems, format!("{PREAMBLE}{POSTAMBLE}"));
    }
}
