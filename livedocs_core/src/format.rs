use crate::TestRecord;

/// REPL-style prompt token. A record produces a test only if at least one
/// body line starts with this marker.
pub const PROMPT_MARKER: &str = ">>>";

/// Fixed preamble of the generated module: setup boilerplate for the
/// downstream doctest runner and the wrapper library under test.
pub const MODULE_PREAMBLE: &str = "# -*- coding: utf-8 -*-\n\
	from nose.tools import assert_raises\n\
	from maya import standalone\n\
	standalone.initialize()\n\
	\n\
	from maya import cmds\n\
	import cmdx\n\
	\n";

fn has_prompt(record: &TestRecord) -> bool {
	record
		.body
		.iter()
		.any(|line| line.starts_with(PROMPT_MARKER))
}

/// Render one test function per eligible record.
///
/// Records without a single prompt line are skipped without advancing the
/// counter, so emitted test names are always numbered contiguously from 1.
/// The body lines are joined with four spaces — each line keeps its own
/// trailing newline, the join only supplies the docstring indentation. No
/// assertions are generated; the embedded `>>>` transcript is executed by
/// the downstream doctest runner.
pub fn format_tests(records: &[TestRecord]) -> Vec<String> {
	let mut fragments = vec![];
	let mut count = 0;

	for record in records {
		if !has_prompt(record) {
			continue;
		}

		count += 1;
		let body = record.body.join("    ");
		fragments.push(format!(
			"\ndef test_{count}_{header}():\n    '''Test {header}\n\n    {body}\n    '''\n\n",
			header = record.header,
		));
	}

	fragments
}

/// Names of the test functions that [`format_tests`] would emit, in order.
pub fn test_names(records: &[TestRecord]) -> Vec<String> {
	let mut names = vec![];
	let mut count = 0;

	for record in records {
		if !has_prompt(record) {
			continue;
		}

		count += 1;
		names.push(format!("test_{count}_{}", record.header));
	}

	names
}

/// Render the complete generated module: the fixed preamble followed by
/// every formatted test fragment in source order.
pub fn render_module(records: &[TestRecord]) -> String {
	let mut module = String::from(MODULE_PREAMBLE);
	for fragment in format_tests(records) {
		module.push_str(&fragment);
	}
	module
}
