use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::LivedocsResult;

/// A markdown fence delimiter. A bare fence closes a block; a fence
/// immediately followed by the configured language tag opens one.
pub const FENCE: &str = "```";

/// Heading prefix that supplies the label for the next example block.
/// Only level-4 headings are treated as doctest labels.
pub const HEADING: &str = "#### ";

/// A fenced example block captured from the documentation source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
	/// Synthesized label: the most recent heading line (trailing whitespace
	/// stripped) plus the 1-based line number of the opening fence, e.g.
	/// `#### Example One L12`.
	pub label: String,
	/// Verbatim lines captured between the fences. Each line keeps its own
	/// trailing newline. Fence lines are never captured.
	pub lines: Vec<String>,
	/// 1-based line number of the opening fence.
	pub line: usize,
}

/// Scanner state. The scanner is either between blocks or inside an open
/// fenced block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
	Idle,
	Capturing,
}

/// Read a documentation file and return all captured example blocks.
/// I/O errors (missing file, permissions, invalid UTF-8) propagate
/// unmodified.
pub fn parse_file(path: &Path, language: &str) -> LivedocsResult<Vec<Block>> {
	let content = std::fs::read_to_string(path)?;
	Ok(parse_blocks(&content, language))
}

/// Scan documentation content line by line and capture every fenced block
/// tagged with `language`.
///
/// Three transitions drive the scan, evaluated in this order for every
/// line:
///
/// 1. on-heading: a `#### ` line replaces the current header in any state.
/// 2. on-fence-close: any fence line moves to `Idle`. A language-tagged
///    opening fence matches this check too, which is what keeps fence
///    lines out of every body — the capture step below never sees
///    `Capturing` for a fence line.
/// 3. on-fence-open: a fence immediately followed by the language tag
///    (no space) moves to `Capturing` and opens a new block seeded with
///    the synthetic label. The block is appended to the results when it
///    opens, so a block left open at end of input is still returned with
///    whatever was captured.
pub fn parse_blocks(content: &str, language: &str) -> Vec<Block> {
	let fence_open = format!("{FENCE}{language}");
	let mut blocks: Vec<Block> = vec![];
	let mut header = String::new();
	let mut state = ScanState::Idle;

	for (index, line) in content.split_inclusive('\n').enumerate() {
		let number = index + 1;

		if line.starts_with(HEADING) {
			header = line.trim_end().to_string();
		}

		if line.starts_with(FENCE) {
			state = ScanState::Idle;
		}

		if state == ScanState::Capturing {
			// The open block is always the most recently appended one.
			if let Some(block) = blocks.last_mut() {
				block.lines.push(line.to_string());
			}
		}

		if line.starts_with(fence_open.as_str()) {
			state = ScanState::Capturing;
			blocks.push(Block {
				label: format!("{header} L{number}"),
				lines: vec![],
				line: number,
			});
		}
	}

	blocks
}
