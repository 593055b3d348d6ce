mod common;

use doxprep_core::AnyEmptyResult;

#[test]
fn process_stages_modules_and_writes_index() -> AnyEmptyResult {
	let src = tempfile::tempdir()?;
	let dest = tempfile::tempdir()?;
	let out = dest.path().join("out");
	common::write_module(src.path(), "juce_core")?;
	common::write_module(src.path(), "juce_events")?;

	let mut cmd = common::doxprep_cmd();
	cmd.arg("process")
		.arg(src.path())
		.arg(&out)
		.assert()
		.success()
		.stdout(predicates::str::contains("Processed 2 module(s)"));

	// The module headers never reach the staging tree.
	assert!(!out.join("juce_core").join("juce_core.h").exists());
	assert!(!out.join("juce_events").join("juce_events.h").exists());

	let basics = std::fs::read_to_string(out.join("juce_core").join("juce_core_basics.h"))?;
	assert!(basics.contains("@weakgroup juce_core"));
	let range = std::fs::read_to_string(
		out.join("juce_core").join("maths").join("juce_core_range.h"),
	)?;
	assert!(range.contains("@weakgroup juce_core-maths"));

	// Ineligible files are copied through untouched.
	let readme = std::fs::read_to_string(out.join("juce_core").join("readme.txt"))?;
	assert_eq!(readme, "not a source file\n");

	let index = std::fs::read_to_string(out.join("juce_modules.dox"))?;
	assert!(index.contains("/** @defgroup juce_core juce_core"));
	assert!(index.contains("/** @defgroup juce_events juce_events"));
	assert!(index.contains("A sample module for the integration tests."));

	Ok(())
}

#[test]
fn process_reports_contained_failures() -> AnyEmptyResult {
	let src = tempfile::tempdir()?;
	let dest = tempfile::tempdir()?;
	let out = dest.path().join("out");
	common::write_module(src.path(), "juce_core")?;
	std::fs::write(
		src.path().join("juce_core").join("juce_core_bad.h"),
		"namespace juce {\nint x;\n",
	)?;

	let mut cmd = common::doxprep_cmd();
	cmd.arg("process")
		.arg(src.path())
		.arg(&out)
		.assert()
		.code(1)
		.stderr(predicates::str::contains("failed preprocessing"))
		.stderr(predicates::str::contains("juce_core_bad.h"));

	// The rest of the run still completed.
	let range = std::fs::read_to_string(
		out.join("juce_core").join("maths").join("juce_core_range.h"),
	)?;
	assert!(range.contains("@weakgroup juce_core-maths"));
	assert!(out.join("juce_modules.dox").is_file());

	Ok(())
}

#[test]
fn process_respects_modules_flag() -> AnyEmptyResult {
	let src = tempfile::tempdir()?;
	let dest = tempfile::tempdir()?;
	let out = dest.path().join("out");
	common::write_module(src.path(), "juce_core")?;
	common::write_module(src.path(), "juce_events")?;

	let mut cmd = common::doxprep_cmd();
	cmd.arg("process")
		.arg(src.path())
		.arg(&out)
		.arg("--modules")
		.arg("juce_events")
		.assert()
		.success()
		.stdout(predicates::str::contains("Processed 1 module(s)"));

	assert!(out.join("juce_events").is_dir());
	assert!(!out.join("juce_core").exists());

	Ok(())
}

#[test]
fn process_dry_run_writes_nothing() -> AnyEmptyResult {
	let src = tempfile::tempdir()?;
	let dest = tempfile::tempdir()?;
	let out = dest.path().join("out");
	common::write_module(src.path(), "juce_core")?;

	let mut cmd = common::doxprep_cmd();
	cmd.arg("process")
		.arg(src.path())
		.arg(&out)
		.arg("--dry-run")
		.assert()
		.success()
		.stdout(predicates::str::contains("Dry run: 1 module(s) selected."))
		.stdout(predicates::str::contains("would inject 2 file(s):"));

	assert!(!out.exists());
	// The source tree is untouched, header included.
	assert!(src.path().join("juce_core").join("juce_core.h").is_file());

	Ok(())
}

#[test]
fn process_honors_config_index_name() -> AnyEmptyResult {
	let src = tempfile::tempdir()?;
	let dest = tempfile::tempdir()?;
	let out = dest.path().join("out");
	common::write_module(src.path(), "juce_core")?;
	std::fs::write(
		src.path().join("doxprep.toml"),
		"[output]\nindex_file = \"modules.dox\"\n",
	)?;

	let mut cmd = common::doxprep_cmd();
	cmd.arg("process").arg(src.path()).arg(&out).assert().success();

	assert!(out.join("modules.dox").is_file());
	assert!(!out.join("juce_modules.dox").exists());

	Ok(())
}
