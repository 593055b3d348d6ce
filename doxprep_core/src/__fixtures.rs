use std::path::Path;

use crate::AnyEmptyResult;

/// A module header in the shape shipped by real modules: a banner comment
/// carrying the declaration block, followed by include lines.
pub fn sample_header(name: &str) -> String {
	format!(
		"/*\n  \
		 ==============================================================================\n\n   \
		 BEGIN_JUCE_MODULE_DECLARATION\n\n      ID:               {name}\n      vendor:           \
		 juce\n      version:          7.0.5\n      description:      Sample module used by the \
		 test suite.\n      website:          http://www.juce.com/juce\n      license:          \
		 ISC\n\n   END_JUCE_MODULE_DECLARATION\n\n  \
		 ==============================================================================\n*/\n\n#pragma \
		 once\n"
	)
}

/// Source text with a single namespace wrapping a class.
pub const NAMESPACED_SOURCE: &str = "namespace juce\n{\n\nclass Range {};\n\n}\n";

/// Source text with no namespace at all.
pub const FLAT_SOURCE: &str = "int x;\n";

/// Write a module directory with a header, one namespaced top-level source
/// file, one subdirectory source file, and one ineligible file.
pub fn write_sample_module(root: &Path, name: &str) -> AnyEmptyResult {
	let module_dir = root.join(name);
	std::fs::create_dir_all(module_dir.join("maths"))?;
	std::fs::write(module_dir.join(format!("{name}.h")), sample_header(name))?;
	std::fs::write(module_dir.join(format!("{name}_basics.h")), NAMESPACED_SOURCE)?;
	std::fs::write(
		module_dir.join("maths").join(format!("{name}_range.h")),
		FLAT_SOURCE,
	)?;
	std::fs::write(module_dir.join("readme.txt"), "not a source file\n")?;

	Ok(())
}
