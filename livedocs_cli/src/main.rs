use std::process;

use clap::Parser;
use livedocs_cli::LivedocsCli;
use livedocs_cli::OutputFormat;
use livedocs_core::ExtractOptions;
use livedocs_core::extract_file;
use livedocs_core::write_module;
use owo_colors::OwoColorize;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = LivedocsCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	if args.verbose {
		let filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("livedocs_core=debug"));
		tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(std::io::stderr)
			.with_ansi(use_color)
			.init();
	}

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	if let Err(e) = run(&args) {
		// Render through miette for rich diagnostics where possible.
		match e.downcast::<livedocs_core::LivedocsError>() {
			Ok(livedocs_err) => {
				let report: miette::Report = (*livedocs_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn run(args: &LivedocsCli) -> Result<(), Box<dyn std::error::Error>> {
	let options = ExtractOptions {
		language: args.language.clone(),
	};
	let extraction = extract_file(&args.input, &options)?;
	let names = extraction.test_names();

	if args.dry_run {
		print!("{}", extraction.module);
		return Ok(());
	}

	write_module(&args.output, &extraction)?;

	match args.format {
		OutputFormat::Json => {
			let output = serde_json::json!({
				"input": args.input.display().to_string(),
				"output": args.output.display().to_string(),
				"tests": names,
				"skipped": extraction.skipped,
			});
			println!("{output}");
		}
		OutputFormat::Text => {
			println!(
				"Extracted {} test(s) from {} into {}.",
				names.len(),
				args.input.display(),
				args.output.display()
			);

			if names.is_empty() {
				eprintln!(
					"{} no examples with `>>>` prompt lines were found",
					colored!("warning:", yellow)
				);
			}

			if extraction.skipped > 0 && args.verbose {
				println!(
					"  skipped {} block(s) marked untested or without prompt lines",
					extraction.skipped
				);
			}

			if args.verbose {
				for name in &names {
					println!("  {name}");
				}
			}
		}
	}

	Ok(())
}
