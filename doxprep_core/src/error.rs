use std::path::Path;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum DoxprepError {
	#[error(transparent)]
	#[diagnostic(code(doxprep::io_error))]
	Io(#[from] std::io::Error),

	#[error("no opening brace at offset {index}")]
	#[diagnostic(code(doxprep::invalid_brace_position))]
	InvalidBracePosition { index: usize },

	#[error("could not find the end of namespace `{snippet}` in {path}")]
	#[diagnostic(
		code(doxprep::malformed_namespace),
		help("the namespace body is truncated or its braces are unbalanced")
	)]
	MalformedNamespace { snippet: String, path: String },

	#[error("module header {path} has no declaration block")]
	#[diagnostic(
		code(doxprep::missing_declaration_block),
		help(
			"wrap the module metadata in BEGIN_JUCE_MODULE_DECLARATION / \
			 END_JUCE_MODULE_DECLARATION markers"
		)
	)]
	MissingDeclarationBlock { path: String },

	#[error("module header not found: {path}")]
	#[diagnostic(
		code(doxprep::missing_module_header),
		help("every module directory must contain a `<module>.h` header file")
	)]
	MissingModuleHeader { path: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(doxprep::config_parse),
		help("check that doxprep.toml is valid TOML with [source] and/or [output] sections")
	)]
	ConfigParse(String),
}

impl DoxprepError {
	/// Attach the originating file path to errors raised by the text-level
	/// functions, which have no path of their own.
	pub(crate) fn with_path(self, path: &Path) -> Self {
		match self {
			Self::MalformedNamespace { snippet, .. } => {
				Self::MalformedNamespace {
					snippet,
					path: path.display().to_string(),
				}
			}
			Self::MissingDeclarationBlock { .. } => {
				Self::MissingDeclarationBlock {
					path: path.display().to_string(),
				}
			}
			other => other,
		}
	}
}

pub type DoxprepResult<T> = Result<T, DoxprepError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
