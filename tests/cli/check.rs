use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, PACKAGE_SPECIFIER, run};

#[test]
fn test_duplicate_locator() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file(
        "packages/salesforcedx-vscode-core/test/playwright/editor.test.ts",
        "page.locator('.monaco-editor');\n",
    )?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains(&format!(
        "error: Use `EDITOR` from '{}' instead of duplicating the selector string.  duplicate-locator",
        PACKAGE_SPECIFIER
    )));
    assert!(result.stdout.contains(
        "--> ./packages/salesforcedx-vscode-core/test/playwright/editor.test.ts:1:14"
    ));
    assert!(result.stdout.contains("1 | page.locator('.monaco-editor');"));
    assert!(result.stdout.contains("= help: replace with EDITOR"));
    assert!(result.stdout.contains("1 problem (1 duplicate-locator)"));

    Ok(())
}

#[test]
fn test_clean_files() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file(
        "packages/salesforcedx-vscode-core/test/playwright/editor.test.ts",
        &format!(
            "import {{ EDITOR }} from '{}';\npage.locator(EDITOR);\npage.locator(`${{EDITOR}} .line`);\npage.locator('.custom-selector');\n",
            PACKAGE_SPECIFIER
        ),
    )?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(0));
    // the locators module itself is scanned but never reported
    assert!(
        result
            .stdout
            .contains("Checked 2 source files - no issues found")
    );

    Ok(())
}

#[test]
fn test_prefix_and_substring_matches() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file(
        "packages/core/test/a.ts",
        "page.locator('.monaco-editor[data-uri*=\"x\"]');\npage.locator('div > .tab');\n",
    )?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert!(
        result
            .stdout
            .contains("= help: replace with `${EDITOR}[data-uri*=\"x\"]`")
    );
    assert!(result.stdout.contains("= note: contains locator value \".tab\""));
    assert!(result.stdout.contains("2 problems (2 duplicate-locator)"));

    Ok(())
}

#[test]
fn test_template_and_array_constants() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file(
        "packages/core/test/a.ts",
        "const a = `.monaco-workbench .quick-input-widget`;\nconst b = '.notifications-toasts';\nconst c = '.monaco-workbench .notification-list';\n",
    )?;

    let result = run(test.check_command())?;

    assert!(result.stdout.contains("Use `QUICK_INPUT`"));
    assert_eq!(result.stdout.matches("Use `NOTIFICATIONS`").count(), 2);

    Ok(())
}

#[test]
fn test_relative_import_inside_locators_package() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file(
        "packages/playwright-vscode-ext/src/pages/editor.ts",
        "export const find = () => page.locator('.tab');\n",
    )?;

    let result = run(test.check_command())?;

    assert!(result.stdout.contains("Use `TAB` from '../utils/locators'"));

    Ok(())
}

#[test]
fn test_suppression_comments() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file(
        "packages/core/test/a.ts",
        "// loclint-disable-next-line\npage.locator('.tab');\n/* loclint-disable */\npage.locator('.monaco-editor');\n/* loclint-enable */\n",
    )?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(0));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file("packages/core/test/broken.ts", "page.locator(\n")?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("parse-error"));
    assert!(result.stdout.contains("--> ./packages/core/test/broken.ts"));
    assert!(result.stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_no_repository_root_is_inert() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/a.ts", "page.locator('.monaco-editor');\n")?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_missing_locators_module_is_inert() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("package.json", r#"{"workspaces": ["packages/*"]}"#)?;
    test.write_file("packages/core/test/a.ts", "page.locator('.monaco-editor');\n")?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(0));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file(
        ".loclintrc.json",
        r#"{
            "ignores": ["**/generated/**"]
        }"#,
    )?;
    test.write_file("packages/core/generated/a.ts", "page.locator('.tab');\n")?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(0));

    Ok(())
}

#[test]
fn test_config_ignore_test_files() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file(".loclintrc.json", r#"{"ignoreTestFiles": true}"#)?;
    test.write_file("packages/core/test/a.test.ts", "page.locator('.tab');\n")?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(0));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file(".loclintrc.json", r#"{"ignores": ["[invalid"]}"#)?;

    let result = run(test.check_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_source_root_argument() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file("packages/core/test/a.ts", "page.locator('.tab');\n")?;
    test.write_file("packages/other/test/b.ts", "page.locator('.tab');\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--source-root", "packages/core"]);
    let result = run(cmd)?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("packages/core/test/a.ts:1:14"));
    assert!(!result.stdout.contains("b.ts"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let result = run({
        let mut cmd = test.command();
        cmd.arg("--help");
        cmd
    })?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("check"));
    assert!(result.stdout.contains("fix"));
    assert!(result.stdout.contains("init"));

    Ok(())
}
