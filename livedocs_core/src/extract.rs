use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::LivedocsResult;
use crate::TestRecord;
use crate::format::render_module;
use crate::format::test_names;
use crate::parser::parse_file;
use crate::record::build_records;

/// Extraction settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
	/// Fence language tag that marks an extractable example block, matched
	/// immediately after the opening fence with no space.
	pub language: String,
}

impl Default for ExtractOptions {
	fn default() -> Self {
		Self {
			language: "python".to_string(),
		}
	}
}

/// Result of extracting doc-tests from a single documentation file.
#[derive(Debug, Clone)]
pub struct Extraction {
	/// Records that survived the `untested` filter, in source order.
	pub records: Vec<TestRecord>,
	/// The complete rendered test module.
	pub module: String,
	/// Number of captured blocks that produced no test (marked untested or
	/// missing a prompt line).
	pub skipped: usize,
}

impl Extraction {
	/// Names of the test functions present in [`Extraction::module`].
	pub fn test_names(&self) -> Vec<String> {
		test_names(&self.records)
	}
}

/// Read `path`, capture its example blocks, and render the test module.
/// Deterministic: the same input bytes always produce the same module.
pub fn extract_file(path: &Path, options: &ExtractOptions) -> LivedocsResult<Extraction> {
	let blocks = parse_file(path, &options.language)?;
	let block_count = blocks.len();
	let records = build_records(blocks);
	let module = render_module(&records);
	let emitted = test_names(&records).len();

	tracing::debug!(
		blocks = block_count,
		records = records.len(),
		tests = emitted,
		"extracted doc-tests from {}",
		path.display()
	);

	Ok(Extraction {
		records,
		module,
		skipped: block_count - emitted,
	})
}

/// Write the rendered module to `path`, replacing any previous content.
pub fn write_module(path: &Path, extraction: &Extraction) -> LivedocsResult<()> {
	std::fs::write(path, &extraction.module)?;
	Ok(())
}
