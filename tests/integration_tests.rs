use anyhow::Result;
use solid_demos::config::toml_config::{default_products, DemoConfig};
use solid_demos::utils::validation::Validate;
use solid_demos::{build_demos, DemoKind, DemoRunner};
use tempfile::TempDir;

fn config_in(temp_dir: &TempDir) -> DemoConfig {
    let mut config = DemoConfig::default();
    config.shopping_list.output_path = temp_dir
        .path()
        .join("shopping-list.txt")
        .to_string_lossy()
        .into_owned();
    config
}

#[test]
fn test_run_all_demos_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_in(&temp_dir);
    config.validate()?;

    let runner = DemoRunner::new(build_demos(&[DemoKind::All], &config));
    let mut out = Vec::new();
    let count = runner.run(&mut out)?;
    let output = String::from_utf8(out)?;

    assert_eq!(count, 4);
    assert!(output.contains("=== Single responsibility (srp) ==="));
    assert!(output.contains("=== Open/closed (ocp) ==="));
    assert!(output.contains("=== Interface segregation (isp) ==="));
    assert!(output.contains("=== Dependency inversion (dip) ==="));
    assert!(output.contains(" - House is large and blue"));
    assert!(output.contains("John has a child called Matt"));

    let saved = std::fs::read_to_string(temp_dir.path().join("shopping-list.txt"))?;
    assert_eq!(saved, "0: bread\n1: phone");
    Ok(())
}

#[test]
fn test_demos_from_toml_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().join("groceries.txt");
    let normalized_path = output_path.to_string_lossy().replace('\\', "/");

    let config_content = format!(
        r#"
[shopping_list]
entries = ["eggs", "milk"]
output_path = "{}"

[[products]]
name = "Boat"
color = "blue"
size = "large"

[[products]]
name = "Cup"
color = "blue"
size = "small"

[family]
parent = "Ann"
children = ["Bo", "Cy"]
"#,
        normalized_path
    );

    let config_path = temp_dir.path().join("demos.toml");
    std::fs::write(&config_path, config_content)?;
    let config = DemoConfig::from_file(&config_path)?;
    config.validate()?;

    let runner = DemoRunner::new(build_demos(
        &[DemoKind::Srp, DemoKind::Ocp, DemoKind::Dip],
        &config,
    ));
    let mut out = Vec::new();
    runner.run(&mut out)?;
    let output = String::from_utf8(out)?;

    assert!(output.contains(" - Boat is large and blue"));
    assert!(!output.contains(" - Cup is large"));
    assert!(output.contains("Ann has a child called Bo"));
    assert!(output.contains("Ann has a child called Cy"));
    assert!(!output.contains("(isp)"));

    assert_eq!(std::fs::read_to_string(&output_path)?, "0: eggs\n1: milk");
    Ok(())
}

#[test]
fn test_unwritable_output_path_fails_the_run() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = DemoConfig::default();
    config.shopping_list.output_path = temp_dir
        .path()
        .join("no-such-dir")
        .join("list.txt")
        .to_string_lossy()
        .into_owned();

    let runner = DemoRunner::new(build_demos(&[DemoKind::Srp], &config));
    let mut out = Vec::new();
    let err = runner.run(&mut out).unwrap_err();

    assert!(matches!(err, solid_demos::SolidError::IoError(_)));
    Ok(())
}

#[test]
fn test_default_products_match_classic_example() {
    let names: Vec<String> = default_products().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Apple", "Tree", "House"]);
}
