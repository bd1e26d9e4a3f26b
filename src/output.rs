//! Getting a [`Worksheet`] onto disk: file names, writing, the LaTeX
//! compiler, and the optional JSON manifest.
//!
//! Nothing in here affects what is generated; the engine never calls into
//! this module.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::worksheet_engine::{
    error::{Result, WorksheetError},
    models::{OperationKind, Worksheet},
};

/// The files one run produces, all derived from a single base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub problems: PathBuf,
    pub solutions: PathBuf,
    pub manifest: PathBuf,
}

impl OutputPaths {
    /// `out/week3` → `out/week3_problems.tex`, `out/week3_solutions.tex`,
    /// `out/week3_manifest.json`.
    pub fn for_base(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let with_suffix = |suffix: &str| {
            let mut name = OsString::from(base.as_os_str());
            name.push(suffix);
            PathBuf::from(name)
        };
        OutputPaths {
            problems: with_suffix("_problems.tex"),
            solutions: with_suffix("_solutions.tex"),
            manifest: with_suffix("_manifest.json"),
        }
    }

    /// The two LaTeX sources, problem sheet first.
    pub fn documents(&self) -> [&Path; 2] {
        [&self.problems, &self.solutions]
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| WorksheetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Write both LaTeX documents.
pub fn write_worksheet(worksheet: &Worksheet, paths: &OutputPaths) -> Result<()> {
    write_file(&paths.problems, &worksheet.problems)?;
    write_file(&paths.solutions, &worksheet.solutions)
}

// ---------------------------------------------------------------------------
// Manifest
// ---------------------------------------------------------------------------

/// Enough to regenerate the same pair of documents later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub operation: OperationKind,
    pub pages: usize,
    pub problems_per_page: usize,
    pub seed: u64,
    pub problems_file: String,
    pub solutions_file: String,
}

impl Manifest {
    pub fn new(worksheet: &Worksheet, paths: &OutputPaths) -> Self {
        Manifest {
            operation: worksheet.kind,
            pages: worksheet.pages,
            problems_per_page: worksheet.problems_per_page(),
            seed: worksheet.seed,
            problems_file: paths.problems.display().to_string(),
            solutions_file: paths.solutions.display().to_string(),
        }
    }
}

pub fn write_manifest(worksheet: &Worksheet, paths: &OutputPaths) -> Result<()> {
    let json = serde_json::to_string_pretty(&Manifest::new(worksheet, paths))?;
    write_file(&paths.manifest, &json)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// External LaTeX compiler, run once per document in the document's own
/// directory so auxiliary files land next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renderer {
    program: String,
}

impl Renderer {
    pub fn new(program: impl Into<String>) -> Self {
        Renderer { program: program.into() }
    }

    /// Runs `<program> -interaction=nonstopmode <file>`, so a broken
    /// document fails the run instead of waiting on the terminal.
    pub fn render(&self, tex: &Path) -> Result<()> {
        let dir = tex
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let file = tex.file_name().map(Path::new).unwrap_or(tex);

        debug!(program = %self.program, file = %tex.display(), "running renderer");
        let status = Command::new(&self.program)
            .arg("-interaction=nonstopmode")
            .arg(file)
            .current_dir(dir)
            .status()
            .map_err(|e| WorksheetError::Render {
                path: tex.to_path_buf(),
                reason: format!("could not start `{}`: {e}", self.program),
            })?;

        if !status.success() {
            return Err(WorksheetError::Render {
                path: tex.to_path_buf(),
                reason: format!("`{}` exited with {status}", self.program),
            });
        }
        info!(file = %tex.display(), "rendered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::worksheet_engine::{generate_worksheet, WorksheetRequest};

    #[test]
    fn paths_derive_from_base_name() {
        let paths = OutputPaths::for_base("out/week3");
        assert_eq!(paths.problems, PathBuf::from("out/week3_problems.tex"));
        assert_eq!(paths.solutions, PathBuf::from("out/week3_solutions.tex"));
        assert_eq!(paths.manifest, PathBuf::from("out/week3_manifest.json"));
    }

    #[test]
    fn writes_both_documents_and_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::for_base(dir.path().join("sheet"));
        let sheet = generate_worksheet(WorksheetRequest::new(OperationKind::Pct1, 1).with_seed(77));

        write_worksheet(&sheet, &paths).unwrap();
        write_manifest(&sheet, &paths).unwrap();

        assert_eq!(fs::read_to_string(&paths.problems).unwrap(), sheet.problems);
        assert_eq!(fs::read_to_string(&paths.solutions).unwrap(), sheet.solutions);

        let manifest: Manifest =
            serde_json::from_str(&fs::read_to_string(&paths.manifest).unwrap()).unwrap();
        assert_eq!(manifest.operation, OperationKind::Pct1);
        assert_eq!(manifest.seed, 77);
        assert_eq!(manifest.problems_per_page, 80);
        let raw = fs::read_to_string(&paths.manifest).unwrap();
        assert!(raw.contains("\"operation\": \"pct1\""));
    }

    #[test]
    fn unwritable_path_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = OutputPaths::for_base(dir.path().join("missing").join("sheet"));
        let sheet = generate_worksheet(WorksheetRequest::new(OperationKind::Add2, 1).with_seed(1));
        let err = write_worksheet(&sheet, &paths).unwrap_err();
        assert!(matches!(err, WorksheetError::Io { .. }));
    }

    #[test]
    fn missing_renderer_is_a_render_error() {
        let renderer = Renderer::new("worksheets-no-such-latex-binary");
        let err = renderer.render(Path::new("sheet_problems.tex")).unwrap_err();
        assert!(matches!(err, WorksheetError::Render { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn renderer_exit_status_is_checked() {
        let dir = tempfile::tempdir().unwrap();
        let tex = dir.path().join("a.tex");
        assert!(Renderer::new("true").render(&tex).is_ok());
        assert!(Renderer::new("false").render(&tex).is_err());
    }
}
