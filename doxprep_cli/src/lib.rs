use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Prepare module source trees for grouped Doxygen documentation.",
	long_about = "doxprep copies module source trees into a staging directory and rewrites them \
	              so that Doxygen attributes every symbol to its module's documentation \
	              group.\n\nEach module directory becomes a group, each module subdirectory a \
	              nested subgroup, and group markers are injected into every recognized source \
	              file, inside namespace bodies where necessary.\n\nQuick start:\n  doxprep \
	              process modules build/doc   Stage and rewrite all modules\n  doxprep list \
	              modules                List modules with their descriptions"
)]
pub struct DoxprepCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Copy modules into a staging directory and inject documentation groups.
	///
	/// Every selected module is copied from the source directory into the
	/// destination, its header's declaration block is turned into a group
	/// definition, and recognized source files are rewritten with group
	/// markers. A module index file is written to the destination root.
	///
	/// Individual files that fail preprocessing are reported in the summary
	/// and exit the command with status 1; the rest of the run still
	/// completes.
	Process {
		/// The directory to search for module source files.
		source_dir: PathBuf,

		/// The directory in which to place processed files.
		dest_dir: PathBuf,

		/// Only include these comma-separated modules; defaults to every
		/// immediate subdirectory of the source directory.
		#[arg(long, value_delimiter = ',')]
		modules: Vec<String>,

		/// Preview the run without copying or rewriting anything. Prints the
		/// selected modules and the files that would receive group markers.
		#[arg(long, default_value_t = false)]
		dry_run: bool,
	},
	/// List the selected modules with their descriptions.
	///
	/// Parses every module header's declaration block and prints the module
	/// name and short description without writing anything. Use `--verbose`
	/// to include detail lines and subgroup names.
	List {
		/// The directory to search for module source files.
		source_dir: PathBuf,

		/// Only include these comma-separated modules; defaults to every
		/// immediate subdirectory of the source directory.
		#[arg(long, value_delimiter = ',')]
		modules: Vec<String>,
	},
}
