use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub fn doxprep_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("doxprep"));
	cmd.env("NO_COLOR", "1");
	cmd
}

/// Write a module directory with a header, one namespaced top-level source
/// file, one subdirectory source file, and one ineligible file.
pub fn write_module(root: &Path, name: &str) -> Result<(), Box<dyn std::error::Error>> {
	let module_dir = root.join(name);
	std::fs::create_dir_all(module_dir.join("maths"))?;

	let header = format!(
		"/*\n   BEGIN_JUCE_MODULE_DECLARATION\n\n      ID:            {name}\n      vendor:        \
		 juce\n      description:   A sample module for the integration tests.\n      license:       \
		 ISC\n\n   END_JUCE_MODULE_DECLARATION\n*/\n\n#pragma once\n"
	);
	std::fs::write(module_dir.join(format!("{name}.h")), header)?;
	std::fs::write(
		module_dir.join(format!("{name}_basics.h")),
		"namespace juce\n{\n\nclass Range {};\n\n}\n",
	)?;
	std::fs::write(
		module_dir.join("maths").join(format!("{name}_range.h")),
		"int x;\n",
	)?;
	std::fs::write(module_dir.join("readme.txt"), "not a source file\n")?;

	Ok(())
}
