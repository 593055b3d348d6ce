use std::path::Path;
use std::path::PathBuf;

use ignore::gitignore::Gitignore;
use ignore::gitignore::GitignoreBuilder;
use tracing::debug;
use tracing::warn;

use crate::DoxprepError;
use crate::DoxprepResult;
use crate::config::DoxprepConfig;
use crate::groups::ModuleDefinition;
use crate::groups::render_index;
use crate::header::extract_descriptor;
use crate::inject::add_group_to_file;

/// A contained per-file failure. Failures do not abort the run; they are
/// collected here and surfaced in the summary.
#[derive(Debug, Clone)]
pub struct FileFailure {
	/// The file that failed preprocessing.
	pub file: PathBuf,
	/// Rendered error message.
	pub message: String,
}

/// Per-module outcome of a processing run.
#[derive(Debug, Clone)]
pub struct ModuleReport {
	/// Module name.
	pub name: String,
	/// Short description from the module header.
	pub short_description: Option<String>,
	/// Number of files that received group markers.
	pub files_injected: usize,
	/// Number of files copied through untouched.
	pub files_skipped: usize,
}

/// Result of a full processing run.
#[derive(Debug)]
pub struct ProcessSummary {
	/// One report per processed module, in processing order.
	pub modules: Vec<ModuleReport>,
	/// Contained per-file failures across all modules.
	pub failures: Vec<FileFailure>,
	/// Path of the generated module index file.
	pub index_file: PathBuf,
}

impl ProcessSummary {
	/// True when every file in every module was processed cleanly.
	pub fn is_ok(&self) -> bool {
		self.failures.is_empty()
	}

	/// Total number of files that received group markers.
	pub fn files_injected(&self) -> usize {
		self.modules.iter().map(|m| m.files_injected).sum()
	}

	/// Total number of files copied through untouched.
	pub fn files_skipped(&self) -> usize {
		self.modules.iter().map(|m| m.files_skipped).sum()
	}
}

/// A source file and the group a processing run would attribute it to.
#[derive(Debug, Clone)]
pub struct PlannedFile {
	pub path: PathBuf,
	/// Group name the file's symbols would land in.
	pub group: String,
	/// Whether the filename matches the naming convention and would be
	/// rewritten.
	pub eligible: bool,
}

/// What a processing run would do for one module.
#[derive(Debug)]
pub struct ModulePlan {
	pub definition: ModuleDefinition,
	pub files: Vec<PlannedFile>,
}

/// Resolve which modules a run covers: the explicit `requested` list as
/// given, or every immediate subdirectory of the source root in sorted
/// order.
pub fn select_modules(source_root: &Path, requested: &[String]) -> DoxprepResult<Vec<String>> {
	if !requested.is_empty() {
		return Ok(requested.to_vec());
	}

	immediate_subdirs(source_root)
}

/// Describe what a processing run would do without copying or rewriting
/// anything: each selected module's group definition and the group every
/// source file would be attributed to.
pub fn plan_modules(
	source_root: &Path,
	requested: &[String],
	config: &DoxprepConfig,
) -> DoxprepResult<Vec<ModulePlan>> {
	let selected = select_modules(source_root, requested)?;
	let mut plans = Vec::with_capacity(selected.len());

	for module in &selected {
		let module_dir = source_root.join(module);
		let definition = load_module_definition(&module_dir, module)?;
		let files = grouped_files(&module_dir, &definition)?
			.into_iter()
			.map(|(path, group)| {
				let eligible = path
					.file_name()
					.and_then(|name| name.to_str())
					.is_some_and(|name| config.source.matches(name));
				PlannedFile {
					path,
					group,
					eligible,
				}
			})
			.collect();
		plans.push(ModulePlan { definition, files });
	}

	Ok(plans)
}

/// Process modules with config discovered in the source root.
pub fn process_modules(
	source_root: &Path,
	dest_root: &Path,
	requested: &[String],
) -> DoxprepResult<ProcessSummary> {
	let config = DoxprepConfig::load(source_root)?.unwrap_or_default();
	process_modules_with_config(source_root, dest_root, requested, &config)
}

/// Copy every selected module into `dest_root`, inject group markers, and
/// write the module index file.
///
/// Module definitions are accumulated locally and written once at the end;
/// a failure while preprocessing an individual file is recorded in the
/// summary and the run continues, while everything else (unreadable module
/// headers, missing declaration blocks, I/O failures outside per-file
/// rewriting) aborts the run.
pub fn process_modules_with_config(
	source_root: &Path,
	dest_root: &Path,
	requested: &[String],
	config: &DoxprepConfig,
) -> DoxprepResult<ProcessSummary> {
	let selected = select_modules(source_root, requested)?;
	let gitignore = if config.disable_gitignore {
		Gitignore::empty()
	} else {
		build_gitignore(source_root)
	};

	std::fs::create_dir_all(dest_root)?;

	let mut definitions = Vec::with_capacity(selected.len());
	let mut modules = Vec::with_capacity(selected.len());
	let mut failures = Vec::new();

	for module in &selected {
		debug!(module = %module, "processing module");
		let (definition, report, module_failures) =
			process_module(source_root, dest_root, module, config, &gitignore)?;
		definitions.push(definition);
		modules.push(report);
		failures.extend(module_failures);
	}

	let index_file = dest_root.join(&config.output.index_file);
	std::fs::write(&index_file, render_index(&definitions))?;

	Ok(ProcessSummary {
		modules,
		failures,
		index_file,
	})
}

fn process_module(
	source_root: &Path,
	dest_root: &Path,
	module: &str,
	config: &DoxprepConfig,
	gitignore: &Gitignore,
) -> DoxprepResult<(ModuleDefinition, ModuleReport, Vec<FileFailure>)> {
	let source_dir = source_root.join(module);
	let module_dir = dest_root.join(module);
	copy_tree(&source_dir, &module_dir, gitignore)?;

	let definition = load_module_definition(&module_dir, module)?;

	// The declaration block trips up the documentation generator, so the
	// header never makes it into the staging tree.
	std::fs::remove_file(module_dir.join(format!("{module}.h")))?;

	let mut report = ModuleReport {
		name: module.to_string(),
		short_description: definition.descriptor.short_description.clone(),
		files_injected: 0,
		files_skipped: 0,
	};
	let mut failures = Vec::new();

	for (path, group) in grouped_files(&module_dir, &definition)? {
		match add_group_to_file(&path, &group, &config.source) {
			Ok(true) => {
				debug!(file = %path.display(), group = %group, "injected group markers");
				report.files_injected += 1;
			}
			Ok(false) => report.files_skipped += 1,
			Err(err) => {
				warn!(file = %path.display(), "preprocessing failed: {err}");
				failures.push(FileFailure {
					file: path,
					message: err.to_string(),
				});
			}
		}
	}

	Ok((definition, report, failures))
}

/// Read the module header and directory layout into a [`ModuleDefinition`].
fn load_module_definition(module_dir: &Path, module: &str) -> DoxprepResult<ModuleDefinition> {
	let header_path = module_dir.join(format!("{module}.h"));
	if !header_path.is_file() {
		return Err(DoxprepError::MissingModuleHeader {
			path: header_path.display().to_string(),
		});
	}

	let header_text = std::fs::read_to_string(&header_path)?;
	let descriptor =
		extract_descriptor(&header_text).map_err(|err| err.with_path(&header_path))?;
	let subdirs = immediate_subdirs(module_dir)?;

	Ok(ModuleDefinition::new(module, descriptor, subdirs))
}

/// Pair every file in the module with the group it belongs to: top-level
/// files with the module group, files anywhere under subdirectory `<s>`
/// with the `<module>-<s>` subgroup. The module header is excluded.
fn grouped_files(
	module_dir: &Path,
	definition: &ModuleDefinition,
) -> DoxprepResult<Vec<(PathBuf, String)>> {
	let header_name = format!("{}.h", definition.name);
	let mut files = Vec::new();

	let mut top_level = Vec::new();
	for entry in std::fs::read_dir(module_dir)? {
		let entry = entry?;
		if entry.file_type()?.is_dir() {
			continue;
		}
		if entry.file_name() == header_name.as_str() {
			continue;
		}
		top_level.push(entry.path());
	}
	top_level.sort();
	files.extend(
		top_level
			.into_iter()
			.map(|path| (path, definition.name.clone())),
	);

	for subdir in &definition.subdirs {
		let group = definition.subgroup_name(subdir);
		let mut collected = Vec::new();
		collect_files(&module_dir.join(subdir), &mut collected)?;
		collected.sort();
		files.extend(collected.into_iter().map(|path| (path, group.clone())));
	}

	Ok(files)
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> DoxprepResult<()> {
	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();
		if entry.file_type()?.is_dir() {
			collect_files(&path, files)?;
		} else {
			files.push(path);
		}
	}

	Ok(())
}

fn immediate_subdirs(dir: &Path) -> DoxprepResult<Vec<String>> {
	let mut subdirs = Vec::new();
	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		if entry.file_type()?.is_dir() {
			subdirs.push(entry.file_name().to_string_lossy().into_owned());
		}
	}
	subdirs.sort();

	Ok(subdirs)
}

/// Recursively copy a module tree, skipping files the gitignore matcher
/// rules out.
fn copy_tree(source: &Path, dest: &Path, gitignore: &Gitignore) -> DoxprepResult<()> {
	std::fs::create_dir_all(dest)?;

	for entry in std::fs::read_dir(source)? {
		let entry = entry?;
		let path = entry.path();
		let is_dir = entry.file_type()?.is_dir();

		if gitignore.matched(&path, is_dir).is_ignore() {
			continue;
		}

		let target = dest.join(entry.file_name());
		if is_dir {
			copy_tree(&path, &target, gitignore)?;
		} else {
			std::fs::copy(&path, &target)?;
		}
	}

	Ok(())
}

/// Build a `Gitignore` matcher from the source root's `.gitignore` file (if
/// any).
fn build_gitignore(root: &Path) -> Gitignore {
	let mut builder = GitignoreBuilder::new(root);
	let gitignore_path = root.join(".gitignore");
	if gitignore_path.exists() {
		let _ = builder.add(gitignore_path);
	}
	builder.build().unwrap_or_else(|_| Gitignore::empty())
}
