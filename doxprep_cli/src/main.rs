use std::path::Path;
use std::process;

use clap::Parser;
use doxprep_cli::Commands;
use doxprep_cli::DoxprepCli;
use doxprep_core::AnyEmptyResult;
use doxprep_core::DoxprepConfig;
use doxprep_core::ModulePlan;
use doxprep_core::plan_modules;
use doxprep_core::process_modules_with_config;
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
	($text:expr,bold) => {
		if color_enabled() {
			format!("{}", $text.bold())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let DoxprepCli {
		command,
		verbose,
		no_color,
	} = DoxprepCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(verbose, use_color);

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

	let result = match command {
		Some(Commands::Process {
			source_dir,
			dest_dir,
			modules,
			dry_run,
		}) => run_process(&source_dir, &dest_dir, &modules, dry_run, verbose),
		Some(Commands::List {
			source_dir,
			modules,
		}) => run_list(&source_dir, &modules, verbose),
		None => {
			eprintln!("No subcommand specified. Run `doxprep --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<doxprep_core::DoxprepError>() {
			Ok(err) => {
				let report: miette::Report = (*err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool, use_color: bool) {
	let default_filter = if verbose {
		"doxprep_core=debug"
	} else {
		"doxprep_core=warn"
	};
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_ansi(use_color)
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();
}

fn run_process(
	source_dir: &Path,
	dest_dir: &Path,
	modules: &[String],
	dry_run: bool,
	verbose: bool,
) -> AnyEmptyResult {
	let config = DoxprepConfig::load(source_dir)?.unwrap_or_default();

	if dry_run {
		let plans = plan_modules(source_dir, modules, &config)?;
		print_plans(&plans, source_dir);
		return Ok(());
	}

	let summary = process_modules_with_config(source_dir, dest_dir, modules, &config)?;

	println!(
		"Processed {} module(s) into {}.",
		summary.modules.len(),
		dest_dir.display()
	);
	println!(
		"Injected group markers into {} file(s), left {} file(s) untouched.",
		summary.files_injected(),
		summary.files_skipped()
	);

	if verbose {
		for module in &summary.modules {
			println!(
				"  {} ({} injected, {} untouched)",
				module.name, module.files_injected, module.files_skipped
			);
		}
	}

	if !summary.is_ok() {
		eprintln!();
		for failure in &summary.failures {
			let rel = make_relative(&failure.file, dest_dir);
			eprintln!("{} {rel}: {}", colored!("error:", red), failure.message);
		}
		eprintln!(
			"{} file(s) failed preprocessing; their content was staged without group markers.",
			summary.failures.len()
		);
		process::exit(1);
	}

	Ok(())
}

fn run_list(source_dir: &Path, modules: &[String], verbose: bool) -> AnyEmptyResult {
	let config = DoxprepConfig::load(source_dir)?.unwrap_or_default();
	let plans = plan_modules(source_dir, modules, &config)?;

	if plans.is_empty() {
		println!("No modules found.");
		return Ok(());
	}

	println!("{}", colored!("Modules:", bold));
	for plan in &plans {
		let definition = &plan.definition;
		let description = definition
			.descriptor
			.short_description
			.as_deref()
			.unwrap_or("(no description)");
		println!("  {}  {description}", definition.name);

		if verbose {
			for detail in &definition.descriptor.detail_lines {
				println!("      {detail}");
			}
			for subdir in &definition.subdirs {
				println!("      subgroup {}", definition.subgroup_name(subdir));
			}
		}
	}

	println!("\n{} module(s)", plans.len());

	Ok(())
}

/// Print what a processing run would do, without having done it.
fn print_plans(plans: &[ModulePlan], source_dir: &Path) {
	println!("Dry run: {} module(s) selected.", plans.len());

	for plan in plans {
		let eligible: Vec<_> = plan.files.iter().filter(|file| file.eligible).collect();

		println!();
		println!("{}", colored!(&plan.definition.name, bold));
		if let Some(description) = &plan.definition.descriptor.short_description {
			println!("  {description}");
		}
		println!("  would inject {} file(s):", eligible.len());
		for file in eligible {
			let rel = make_relative(&file.path, source_dir);
			println!("    {rel} -> {}", file.group);
		}
	}
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
