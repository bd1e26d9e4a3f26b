use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use worksheets::output::{write_manifest, write_worksheet, OutputPaths, Renderer};
use worksheets::{generate_worksheet, OperationKind, WorksheetRequest};

/// Generate arithmetic practice worksheets and their answer keys.
#[derive(Parser, Debug)]
#[command(
    name = "worksheets",
    version,
    about = "Generate arithmetic practice worksheets with matching answer keys.",
    arg_required_else_help = true,
    after_help = OperationKind::usage_listing()
)]
struct Cli {
    /// The operation (see the list below)
    op: OperationKind,

    /// Number of pages
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,

    /// Output base name; writes <OUTPUT>_problems.tex and <OUTPUT>_solutions.tex
    output: PathBuf,

    /// Fixed RNG seed, to regenerate an earlier pair of documents
    #[arg(long)]
    seed: Option<u64>,

    /// Only write the LaTeX sources, do not compile them
    #[arg(long)]
    no_render: bool,

    /// LaTeX compiler to run on each document
    #[arg(long, default_value = "pdflatex")]
    renderer: String,

    /// Also write <OUTPUT>_manifest.json with the kind, page count, and seed
    #[arg(long)]
    manifest: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("worksheets=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let request = WorksheetRequest {
        kind: cli.op,
        pages: cli.pages as usize,
        rng_seed: cli.seed,
    };
    let sheet = generate_worksheet(request);

    let paths = OutputPaths::for_base(&cli.output);
    write_worksheet(&sheet, &paths).context("writing LaTeX sources")?;
    if cli.manifest {
        write_manifest(&sheet, &paths).context("writing manifest")?;
    }

    if !cli.no_render {
        let renderer = Renderer::new(cli.renderer);
        for doc in paths.documents() {
            renderer
                .render(doc)
                .with_context(|| format!("compiling {}", doc.display()))?;
        }
    }

    info!(kind = %sheet.kind, pages = sheet.pages, seed = sheet.seed, "worksheet ready");
    Ok(())
}
