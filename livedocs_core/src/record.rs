use serde::Deserialize;
use serde::Serialize;

use crate::Block;

/// Marker word that excludes an example from the generated test module.
/// Matched case-insensitively anywhere in the first content line.
pub const UNTESTED_MARKER: &str = "untested";

/// A test candidate derived from a captured [`Block`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestRecord {
	/// The normalized block label, safe for use in a generated identifier.
	pub header: String,
	/// The block's content lines, each keeping its own trailing newline.
	pub body: Vec<String>,
}

/// Normalize a block label into an identifier-safe token: strip the
/// leading markdown hashes and spaces, strip trailing whitespace,
/// lowercase, then replace every character that is not alphanumeric or an
/// underscore with an underscore.
///
/// Pure function: the same label always yields the same token.
pub fn normalize_header(label: &str) -> String {
	label
		.trim_start_matches(['#', ' '])
		.trim_end()
		.to_lowercase()
		.chars()
		.map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
		.collect()
}

/// Turn captured blocks into test records, dropping any block whose first
/// content line is marked [`UNTESTED_MARKER`]. A block with no content
/// lines is kept; it will be dropped later by the prompt filter.
///
/// This step deliberately does not check for `>>>` prompt lines — that
/// filter belongs to the formatter, so the two exclusion rules stay
/// independent.
pub fn build_records(blocks: Vec<Block>) -> Vec<TestRecord> {
	let mut records = vec![];

	for block in blocks {
		let untested = block
			.lines
			.first()
			.is_some_and(|line| line.to_lowercase().contains(UNTESTED_MARKER));

		if untested {
			continue;
		}

		records.push(TestRecord {
			header: normalize_header(&block.label),
			body: block.lines,
		});
	}

	records
}
