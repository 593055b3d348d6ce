mod common;

use doxprep_core::AnyEmptyResult;

#[test]
fn list_shows_module_descriptions() -> AnyEmptyResult {
	let src = tempfile::tempdir()?;
	common::write_module(src.path(), "juce_core")?;
	common::write_module(src.path(), "juce_events")?;

	let mut cmd = common::doxprep_cmd();
	cmd.arg("list")
		.arg(src.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("juce_core"))
		.stdout(predicates::str::contains(
			"A sample module for the integration tests.",
		))
		.stdout(predicates::str::contains("2 module(s)"));

	Ok(())
}

#[test]
fn list_verbose_shows_details_and_subgroups() -> AnyEmptyResult {
	let src = tempfile::tempdir()?;
	common::write_module(src.path(), "juce_core")?;

	let mut cmd = common::doxprep_cmd();
	cmd.arg("list")
		.arg(src.path())
		.arg("--verbose")
		.assert()
		.success()
		.stdout(predicates::str::contains("vendor:"))
		.stdout(predicates::str::contains("subgroup juce_core-maths"));

	Ok(())
}

#[test]
fn list_fails_without_declaration_block() -> AnyEmptyResult {
	let src = tempfile::tempdir()?;
	let module_dir = src.path().join("juce_broken");
	std::fs::create_dir_all(&module_dir)?;
	std::fs::write(module_dir.join("juce_broken.h"), "#pragma once\n")?;

	let mut cmd = common::doxprep_cmd();
	cmd.arg("list")
		.arg(src.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("no declaration block"));

	Ok(())
}
