use crate::header::ModuleDescriptor;
use crate::inject::LINE_ENDING;

/// A fully resolved documentation group definition for one module.
#[derive(Debug, Clone)]
pub struct ModuleDefinition {
	/// Module name, which doubles as the top-level group name.
	pub name: String,
	/// Metadata extracted from the module header.
	pub descriptor: ModuleDescriptor,
	/// Immediate subdirectory names; each becomes a nested subgroup.
	pub subdirs: Vec<String>,
}

impl ModuleDefinition {
	/// Build a definition for `name`. Subdirectories are sorted so the
	/// rendered output is deterministic.
	pub fn new(
		name: impl Into<String>,
		descriptor: ModuleDescriptor,
		mut subdirs: Vec<String>,
	) -> Self {
		subdirs.sort();
		Self {
			name: name.into(),
			descriptor,
			subdirs,
		}
	}

	/// Documentation group tag for one of this module's subdirectories.
	pub fn subgroup_name(&self, subdir: &str) -> String {
		format!("{}-{subdir}", self.name)
	}

	/// Render the `@defgroup` definition block for this module: the group
	/// header with the short description, detail lines as a bullet list,
	/// and one nested `@defgroup` declaration per subdirectory.
	pub fn render(&self) -> String {
		let mut lines = Vec::new();
		lines.push(format!("/** @defgroup {n} {n}", n = self.name));
		lines.push(format!(
			"    {}",
			self.descriptor.short_description.as_deref().unwrap_or_default()
		));
		lines.push(String::new());
		for detail in &self.descriptor.detail_lines {
			lines.push(format!("    - {detail}"));
		}
		lines.push(String::new());
		lines.push("    @{".to_string());
		lines.push("*/".to_string());
		for subdir in &self.subdirs {
			lines.push(String::new());
			lines.push(format!(
				"/** @defgroup {tag} {subdir} */",
				tag = self.subgroup_name(subdir)
			));
		}
		lines.push(String::new());
		lines.push("/** @} */".to_string());

		lines.join(LINE_ENDING)
	}
}

/// Render the module index: every module's definition block joined by a
/// blank-line separator.
pub fn render_index(definitions: &[ModuleDefinition]) -> String {
	definitions
		.iter()
		.map(ModuleDefinition::render)
		.collect::<Vec<_>>()
		.join("\r\n\r\n")
}
