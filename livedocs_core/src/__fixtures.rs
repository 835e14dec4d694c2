//! Shared fixtures for the unit tests: documentation sources in the shape
//! the extractor consumes, plus pre-built records.

use crate::TestRecord;

/// A documentation file with two extractable examples, one example marked
/// untested, one prompt-less block, and one block in a foreign language.
pub fn readme_fixture() -> String {
	[
		"# Project\n",
		"\n",
		"Some prose.\n",
		"\n",
		"#### Example One\n",
		"\n",
		"```python\n",
		">>> x = 1\n",
		">>> x\n",
		"1\n",
		"```\n",
		"\n",
		"#### Skipped Example\n",
		"\n",
		"```python\n",
		"# This example is UNTESTED on purpose\n",
		">>> broken()\n",
		"```\n",
		"\n",
		"#### Prose Only\n",
		"\n",
		"```python\n",
		"just_code = True\n",
		"```\n",
		"\n",
		"#### Example Two\n",
		"\n",
		"```javascript\n",
		"const x = 1;\n",
		"```\n",
		"\n",
		"```python\n",
		">>> y = 2\n",
		"```\n",
	]
	.concat()
}

/// A single minimal extractable example.
pub fn single_example_fixture() -> String {
	[
		"#### Example One\n",
		"\n",
		"```python\n",
		">>> x = 1\n",
		"```\n",
	]
	.concat()
}

pub fn prompt_record(header: &str) -> TestRecord {
	TestRecord {
		header: header.to_string(),
		body: vec![">>> x = 1\n".to_string()],
	}
}

pub fn plain_record(header: &str) -> TestRecord {
	TestRecord {
		header: header.to_string(),
		body: vec!["x = 1\n".to_string()],
	}
}
