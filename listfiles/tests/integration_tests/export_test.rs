// tests/integration_tests/export_test.rs
use super::common::{
    create_config_file, create_test_file, parse_csv, run_options, setup_test_directory,
};
use anyhow::Result;
use listfiles::{OutputFormat, collect, run_pipeline};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_csv_round_trip() -> Result<()> {
    let root = setup_test_directory()?;
    let work = TempDir::new()?;
    let config = create_config_file(work.path(), &[root.path()], &[])?;
    let options = run_options(work.path(), config);

    let summary = run_pipeline(&options, &())?;
    let output = summary.output.expect("listing should be written");
    assert_eq!(output, work.path().join("files.csv"));

    let parsed = parse_csv(&fs::read_to_string(&output)?)?;
    let expected: Vec<(String, String)> = collect(root.path())?
        .into_iter()
        .map(|r| (r.filename.clone(), r.path.display().to_string()))
        .collect();
    assert_eq!(parsed, expected);
    Ok(())
}

#[test]
fn test_csv_round_trip_with_comma_and_quote() -> Result<()> {
    let root = setup_test_directory()?;
    create_test_file(root.path(), "odd, dir/one, \"two\".txt", "odd")?;
    let work = TempDir::new()?;
    let config = create_config_file(work.path(), &[root.path()], &[])?;
    let options = run_options(work.path(), config);

    run_pipeline(&options, &())?;
    let content = fs::read_to_string(options.output_path())?;
    assert!(
        content.contains("\"one, \"\"two\"\".txt\""),
        "Names with a comma or quote are quoted"
    );

    let parsed = parse_csv(&content)?;
    let odd = root.path().join("odd, dir/one, \"two\".txt");
    assert!(parsed.contains(&(
        String::from("one, \"two\".txt"),
        odd.display().to_string()
    )));
    assert_eq!(parsed.len(), 4);
    Ok(())
}

#[test]
fn test_csv_rows_carry_size_and_time() -> Result<()> {
    let root = setup_test_directory()?;
    let work = TempDir::new()?;
    let config = create_config_file(work.path(), &[root.path()], &[])?;
    let options = run_options(work.path(), config);

    run_pipeline(&options, &())?;
    let content = fs::read_to_string(options.output_path())?;
    let row = content
        .lines()
        .find(|line| line.starts_with("a.txt, "))
        .expect("a.txt should be listed");
    let fields: Vec<&str> = row.split(", ").collect();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[2], "5");
    // YYYY-MM-DD HH:MM:SS
    assert_eq!(fields[3].len(), 19);
    assert_eq!(&fields[3][4..5], "-");
    assert_eq!(&fields[3][10..11], " ");
    Ok(())
}

#[test]
fn test_empty_root_gives_header_only() -> Result<()> {
    let root = TempDir::new()?;
    let work = TempDir::new()?;
    let config = create_config_file(work.path(), &[root.path()], &[])?;

    let options = run_options(work.path(), config.clone());
    run_pipeline(&options, &())?;
    assert_eq!(
        fs::read_to_string(options.output_path())?,
        "File, Path, Size, Mod.time\n"
    );

    let mut markdown = run_options(work.path(), config);
    markdown.format = OutputFormat::Markdown;
    run_pipeline(&markdown, &())?;
    assert_eq!(
        fs::read_to_string(work.path().join("files.md"))?,
        "| File | Path | Size | Mod.time |\n| --- | --- | --- | --- |\n"
    );
    Ok(())
}
