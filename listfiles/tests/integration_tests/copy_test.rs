// tests/integration_tests/copy_test.rs
use super::common::{create_config_file, create_test_file, run_options, setup_test_directory};
use anyhow::Result;
use listfiles::{FilterRule, run_pipeline};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_copy_backs_up_existing_file() -> Result<()> {
    let root = setup_test_directory()?;
    let work = TempDir::new()?;
    create_test_file(work.path(), "out/a.txt", "older a")?;

    let config = create_config_file(
        work.path(),
        &[root.path()],
        &[FilterRule::include(r"\.txt$")],
    )?;
    let mut options = run_options(work.path(), config);
    options.copy = true;

    let summary = run_pipeline(&options, &())?;
    assert_eq!(summary.copied, 2);
    assert_eq!(summary.copy_failures, 0);

    let out = work.path().join("out");
    assert_eq!(fs::read_to_string(out.join("a.txt"))?, "alpha");
    assert_eq!(fs::read_to_string(out.join("a.txt.~1~"))?, "older a");
    assert_eq!(fs::read_to_string(out.join("c.txt"))?, "gamma");
    assert!(!out.join("b.log").exists(), "Filtered files are not copied");
    Ok(())
}

#[test]
fn test_copy_disabled_leaves_destination_alone() -> Result<()> {
    let root = setup_test_directory()?;
    let work = TempDir::new()?;
    let config = create_config_file(work.path(), &[root.path()], &[])?;
    let options = run_options(work.path(), config);

    let summary = run_pipeline(&options, &())?;
    assert_eq!(summary.copied, 0);
    assert!(!work.path().join("out").exists());
    Ok(())
}
