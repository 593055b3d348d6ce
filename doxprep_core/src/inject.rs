use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::DoxprepError;
use crate::DoxprepResult;
use crate::config::SourceNaming;
use crate::scope::brace_scope_end;

/// Line ending used for every piece of generated documentation text,
/// regardless of the line endings already present in a file.
pub const LINE_ENDING: &str = "\r\n";

/// Group-end marker inserted after grouped content.
const GROUP_END: &str = "\r\n/** @}*/\r\n";

/// Matches a namespace introduction up to and including its opening brace.
///
/// Deliberately shallow: the identifier is any non-whitespace run and
/// nothing about the namespace body is validated here. The word boundary
/// keeps identifiers that merely end in `namespace` from matching.
static NAMESPACE_OPEN: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\s*\bnamespace\s+\S+\s*\{").unwrap());

/// Group-begin marker for `group_name`.
fn group_begin(group_name: &str) -> String {
	format!("{LINE_ENDING}/** @weakgroup {group_name}{LINE_ENDING} *  @{{{LINE_ENDING} */{LINE_ENDING}")
}

/// Wrap the content of `text` in begin/end markers for `group_name`.
///
/// Namespaces cause all kinds of problems for the documentation generator:
/// when the classes in a source file are contained within a namespace, the
/// `@weakgroup` marker has to sit inside that namespace too. Each top-level
/// namespace body therefore receives its own begin/end pair, and the whole
/// text is wrapped in one more pair so top-level content is also grouped.
///
/// Every insertion grows the text and shifts all later offsets, so the scan
/// restarts from just past the freshly inserted end marker instead of
/// caching match positions.
///
/// This is a one-shot transformation, not an idempotent one: running it
/// twice nests a second set of markers.
pub fn inject_group_markers(text: &str, group_name: &str) -> DoxprepResult<String> {
	let begin = group_begin(group_name);
	let mut content = text.to_string();
	let mut cursor = 0;

	while let Some(found) = NAMESPACE_OPEN.find_at(&content, cursor) {
		let brace_idx = found.end() - 1;
		let Some(scope_end) = brace_scope_end(&content, brace_idx)? else {
			return Err(DoxprepError::MalformedNamespace {
				snippet: found.as_str().trim().to_string(),
				path: String::new(),
			});
		};

		let mut rewritten =
			String::with_capacity(content.len() + begin.len() + GROUP_END.len());
		rewritten.push_str(&content[..found.end()]);
		rewritten.push_str(&begin);
		rewritten.push_str(&content[found.end()..scope_end]);
		rewritten.push_str(GROUP_END);
		rewritten.push_str(&content[scope_end..]);
		content = rewritten;

		// Both insertions land before the closing brace, so the next search
		// starts right at that brace in the grown text.
		cursor = scope_end + begin.len() + GROUP_END.len();
	}

	let mut wrapped = String::with_capacity(content.len() + begin.len() + GROUP_END.len());
	wrapped.push_str(&begin);
	wrapped.push_str(&content);
	wrapped.push_str(GROUP_END);
	Ok(wrapped)
}

/// Rewrite the file at `path` with group markers for `group_name`.
///
/// Files whose name does not match the recognized naming convention are left
/// byte-for-byte untouched. Returns whether the file was rewritten.
pub fn add_group_to_file(
	path: &Path,
	group_name: &str,
	naming: &SourceNaming,
) -> DoxprepResult<bool> {
	let Some(filename) = path.file_name().and_then(|name| name.to_str()) else {
		return Ok(false);
	};
	if !naming.matches(filename) {
		return Ok(false);
	}

	let content = std::fs::read_to_string(path)?;
	let rewritten =
		inject_group_markers(&content, group_name).map_err(|err| err.with_path(path))?;
	std::fs::write(path, rewritten)?;

	Ok(true)
}
