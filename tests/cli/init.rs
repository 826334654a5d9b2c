use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed.get("includes"), Some(&Value::Array(Vec::new())));
    assert_eq!(
        parsed.get("ignores"),
        Some(&serde_json::json!([
            "**/node_modules/**",
            "**/out/**",
            "**/dist/**"
        ]))
    );
    assert_eq!(parsed.get("ignoreTestFiles"), Some(&Value::Bool(false)));

    // 2-space indentation
    assert!(content.contains("\n  \"includes\""));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let result = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Created .loclintrc.json"));
    assert!(test.root().join(".loclintrc.json").exists());

    let content = test.read_file(".loclintrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".loclintrc.json", "{}")?;

    let result = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains(".loclintrc.json already exists"));
    assert_eq!(test.read_file(".loclintrc.json")?, "{}");

    Ok(())
}
