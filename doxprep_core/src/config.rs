use std::path::Path;

use serde::Deserialize;

use crate::DoxprepError;
use crate::DoxprepResult;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 2] = ["doxprep.toml", ".doxprep.toml"];

/// Default name of the generated module index file.
pub const DEFAULT_INDEX_FILE: &str = "juce_modules.dox";

/// Naming convention for source files eligible for group-marker injection.
///
/// Only files whose name starts with `prefix` and whose extension is one of
/// `extensions` are rewritten; everything else is copied through untouched.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct SourceNaming {
	/// Required filename prefix.
	pub prefix: String,
	/// Recognized file extensions, without the leading dot.
	pub extensions: Vec<String>,
}

impl Default for SourceNaming {
	fn default() -> Self {
		Self {
			prefix: "juce_".to_string(),
			extensions: vec!["h".to_string(), "dox".to_string()],
		}
	}
}

impl SourceNaming {
	/// Whether `filename` matches the recognized naming convention.
	pub fn matches(&self, filename: &str) -> bool {
		if !filename.starts_with(&self.prefix) {
			return false;
		}
		let Some((_, extension)) = filename.rsplit_once('.') else {
			return false;
		};
		self.extensions.iter().any(|known| known == extension)
	}
}

/// Output options for a processing run.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
	/// Name of the module index file written to the destination root.
	pub index_file: String,
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			index_file: DEFAULT_INDEX_FILE.to_string(),
		}
	}
}

/// Configuration loaded from a `doxprep.toml` file.
///
/// ```toml
/// [source]
/// prefix = "juce_"
/// extensions = ["h", "dox"]
///
/// [output]
/// index_file = "juce_modules.dox"
/// ```
///
/// Every field is optional; the defaults above describe the stock JUCE
/// module conventions.
#[derive(Debug, Clone, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct DoxprepConfig {
	/// Source file naming convention.
	pub source: SourceNaming,
	/// Output options.
	pub output: OutputConfig,
	/// Disable `.gitignore` integration. By default, files matched by the
	/// source root's `.gitignore` are not copied into the staging directory.
	pub disable_gitignore: bool,
}

impl DoxprepConfig {
	/// Load configuration from the first candidate file found under `root`.
	///
	/// Returns `Ok(None)` when no config file exists, which callers treat as
	/// "use the defaults".
	pub fn load(root: &Path) -> DoxprepResult<Option<Self>> {
		for candidate in CONFIG_FILE_CANDIDATES {
			let path = root.join(candidate);
			if !path.is_file() {
				continue;
			}

			let raw = std::fs::read_to_string(&path)?;
			let config = toml::from_str(&raw)
				.map_err(|e| DoxprepError::ConfigParse(e.to_string()))?;
			return Ok(Some(config));
		}

		Ok(None)
	}
}
