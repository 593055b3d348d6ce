use once_cell::sync::Lazy;
use regex::Regex;

use crate::DoxprepError;
use crate::DoxprepResult;

/// Token opening the declaration block embedded in a module header.
pub const DECLARATION_BEGIN: &str = "BEGIN_JUCE_MODULE_DECLARATION";

/// Token closing the declaration block.
pub const DECLARATION_END: &str = "END_JUCE_MODULE_DECLARATION";

/// Matches a `description:` line inside the declaration block. Leading
/// content before the key is tolerated (comment decoration); the key itself
/// is case-sensitive.
static DESCRIPTION_LINE: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"^.*?description:\s*(.*)$").unwrap());

/// Metadata extracted from a module header's declaration block.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ModuleDescriptor {
	/// Value of the `description:` line, when present.
	pub short_description: Option<String>,
	/// Every other non-blank line of the block, trimmed, in source order.
	pub detail_lines: Vec<String>,
}

/// Extract the declaration block from a module header.
///
/// The block between the first begin token and the first end token after it
/// is used; any later duplicate tokens are ignored. A header missing either
/// token is rejected, since nothing downstream can be generated without
/// the module description.
pub fn extract_descriptor(header_text: &str) -> DoxprepResult<ModuleDescriptor> {
	let begin = header_text
		.find(DECLARATION_BEGIN)
		.ok_or_else(missing_block)?;
	let block_start = begin + DECLARATION_BEGIN.len();
	let end = header_text[block_start..]
		.find(DECLARATION_END)
		.ok_or_else(missing_block)?;
	let block = &header_text[block_start..block_start + end];

	let mut descriptor = ModuleDescriptor::default();
	for line in block.lines() {
		let stripped = line.trim();
		if stripped.is_empty() {
			continue;
		}

		if let Some(captures) = DESCRIPTION_LINE.captures(stripped) {
			// A repeated description line overwrites the previous one.
			descriptor.short_description = Some(captures[1].to_string());
		} else {
			descriptor.detail_lines.push(stripped.to_string());
		}
	}

	Ok(descriptor)
}

fn missing_block() -> DoxprepError {
	DoxprepError::MissingDeclarationBlock {
		path: String::new(),
	}
}
