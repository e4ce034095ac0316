use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use crate::cli::USAGE;
use crate::dictionary::ExampleSource;
use crate::enrich::{EnrichedRecord, WordEnricher};
use crate::export::{self, DEFAULT_OUTPUT, ExportError};
use crate::input;
use crate::lang::Lang;
use crate::report::format_report;
use crate::translate::Translator;

#[derive(Debug)]
pub struct RunOptions {
    pub target: Lang,
    pub output: PathBuf,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            target: Lang::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[derive(Debug)]
pub enum RunOutcome {
    /// No words were given; only the usage text was printed.
    Usage,
    Completed {
        input_count: usize,
        records: Vec<EnrichedRecord>,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to read word list: {0}")]
    Input(io::Error),

    #[error("failed to write output: {0}")]
    Console(#[from] io::Error),

    #[error("{0}")]
    Export(#[from] ExportError),
}

/// Runs the whole enrichment pipeline, writing diagnostics and the report to `out`.
///
/// Words are processed one at a time in input order. The word-count line reports
/// the resolved input, blanks included.
pub async fn run<W: Write>(
    args: &[String],
    dictionary: &impl ExampleSource,
    translator: &impl Translator,
    options: &RunOptions,
    out: &mut W,
) -> Result<RunOutcome, PipelineError> {
    if args.is_empty() {
        writeln!(out, "{USAGE}")?;
        return Ok(RunOutcome::Usage);
    }

    let words = input::resolve(args).map_err(PipelineError::Input)?;
    writeln!(out, "Starting wordcard")?;
    writeln!(out, "Words: {words:?}")?;
    info!(words = words.len(), lang = %options.target, "processing");

    let enricher = WordEnricher::new(dictionary, translator, &options.target);
    let mut records = Vec::new();
    for word in &words {
        if let Some(record) = enricher.enrich(word, out).await? {
            records.push(record);
        }
    }

    writeln!(out, "Words in input: {}", words.len())?;
    out.write_all(format_report(&records, &options.target).as_bytes())?;

    export::write_csv(&records, &options.output, out)?;
    writeln!(out, "Done. Wrote {}", options.output.display())?;

    Ok(RunOutcome::Completed {
        input_count: words.len(),
        records,
    })
}
