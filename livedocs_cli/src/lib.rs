use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Extract literate doc-tests from markdown documentation.",
	long_about = "livedocs scans a documentation file for fenced, language-tagged example \
	              blocks, each labelled by the nearest level-4 heading, and generates an \
	              executable test module for a doctest runner.\n\nAn example becomes a test \
	              when it contains at least one `>>>` prompt line. Adding the word `untested` \
	              to an example's first line excludes it.\n\nQuick start:\n  livedocs           \
	              Extract README.md into test_docs.py\n  livedocs --dry-run Print the generated \
	              module without writing it"
)]
pub struct LivedocsCli {
	/// Path to the documentation file to extract doc-tests from.
	#[arg(default_value = "README.md")]
	pub input: PathBuf,

	/// Path of the generated test module. Overwritten on every run.
	#[arg(long, short, default_value = "test_docs.py")]
	pub output: PathBuf,

	/// Fence language tag that marks extractable example blocks.
	#[arg(long, default_value = "python")]
	pub language: String,

	/// Output format for the extraction summary.
	#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	/// Print the generated module to stdout instead of writing the output
	/// file.
	#[arg(long, default_value_t = false)]
	pub dry_run: bool,

	/// Enable verbose output, including the generated test names and debug
	/// logging.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output.
	Text,
	/// JSON output for programmatic consumption: input and output paths,
	/// generated test names, and the skipped block count.
	Json,
}
