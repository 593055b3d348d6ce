use crate::DoxprepError;
use crate::DoxprepResult;

/// Find the closing brace matching the opening brace at `open_pos`.
///
/// Scans forward keeping a nesting depth; every matched span either fully
/// nests within or is disjoint from every other span, which is what lets
/// callers splice text around the pair. Positions are byte offsets (braces
/// are ASCII, so the returned offset is always a char boundary).
///
/// Returns `Ok(None)` when the text ends before the scope closes; an
/// unterminated scope is the caller's call to judge, not an error here.
pub fn brace_scope_end(text: &str, open_pos: usize) -> DoxprepResult<Option<usize>> {
	let bytes = text.as_bytes();
	if bytes.get(open_pos) != Some(&b'{') {
		return Err(DoxprepError::InvalidBracePosition { index: open_pos });
	}

	let mut depth = 1usize;
	let mut pos = open_pos + 1;
	while pos < bytes.len() {
		match bytes[pos] {
			b'{' => depth += 1,
			b'}' => {
				depth -= 1;
				if depth == 0 {
					return Ok(Some(pos));
				}
			}
			_ => {}
		}
		pos += 1;
	}

	Ok(None)
}
