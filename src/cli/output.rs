//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, PolarityArgs};
use crate::error::Result;

/// Corpus statistics for the `stats` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorpusStats {
    pub total_documents: usize,
    pub positive_documents: usize,
    pub negative_documents: usize,
    pub average_length_chars: f64,
}

/// Output a serializable result in the format selected on the command line.
///
/// Human format prints the message followed by the `Display` form of the
/// result; JSON serializes the result alone (with `--pretty` honored), so
/// that mode stays pipeable.
pub fn output_result<T: Serialize + std::fmt::Display>(
    message: &str,
    result: &T,
    args: &PolarityArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 && !message.is_empty() {
                println!("{message}");
            }
            println!("{result}");
        }
        OutputFormat::Json => {
            let rendered = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{rendered}");
        }
    }
    Ok(())
}

impl std::fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "documents: {}", self.total_documents)?;
        writeln!(
            f,
            "labels: {} positive / {} negative",
            self.positive_documents, self.negative_documents
        )?;
        write!(
            f,
            "average length: {:.1} characters",
            self.average_length_chars
        )
    }
}
