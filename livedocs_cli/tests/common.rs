use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn livedocs_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("livedocs"));
	cmd.env("NO_COLOR", "1");
	cmd
}
