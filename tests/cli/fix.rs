use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, PACKAGE_SPECIFIER, run};

const PAGE: &str = "packages/salesforcedx-vscode-core/test/playwright/editor.test.ts";

#[test]
fn test_fix_dry_run() -> Result<()> {
    let test = CliTest::with_locators()?;
    let source = "page.locator('.monaco-editor');\n";
    test.write_file(PAGE, source)?;

    let result = run(test.fix_command())?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains(&format!(
        "--> ./{}:1:14  \".monaco-editor\" -> EDITOR",
        PAGE
    )));
    assert!(result.stdout.contains("Would fix 1 duplicate(s) in 1 file(s)."));
    assert!(result.stdout.contains("Run with --apply to write these fixes."));
    // dry-run leaves the file alone
    assert_eq!(test.read_file(PAGE)?, source);

    Ok(())
}

#[test]
fn test_fix_apply_adds_import() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file(PAGE, "page.locator('.monaco-editor');\n")?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let result = run(cmd)?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Fixed 1 duplicate(s) in 1 file(s)."));
    assert_eq!(
        test.read_file(PAGE)?,
        format!(
            "import {{ EDITOR }} from '{}';\npage.locator(EDITOR);\n",
            PACKAGE_SPECIFIER
        )
    );

    Ok(())
}

#[test]
fn test_fix_apply_merges_imports() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file(
        PAGE,
        r#"import { expect, test } from '@playwright/test';

test('opens the editor', async ({ page }) => {
  await page.locator('.monaco-workbench').click();
  await expect(page.locator('.monaco-editor[data-uri*="apex"]')).toBeVisible();
  await page.locator(`.tab`).click();
});
"#,
    )?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let result = run(cmd)?;
    assert_eq!(result.code, Some(0));

    insta::assert_snapshot!(test.read_file(PAGE)?, @r#"
    import { expect, test } from '@playwright/test';
    import { WORKBENCH, EDITOR, TAB } from '@salesforcedx/vscode-playwright/utils/locators';

    test('opens the editor', async ({ page }) => {
      await page.locator(WORKBENCH).click();
      await expect(page.locator(`${EDITOR}[data-uri*="apex"]`)).toBeVisible();
      await page.locator(TAB).click();
    });
    "#);

    Ok(())
}

#[test]
fn test_fix_is_idempotent() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file(PAGE, "page.locator('.monaco-editor');\npage.locator('.tab');\n")?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    run(cmd)?;
    let first = test.read_file(PAGE)?;

    let result = run(test.check_command())?;
    assert_eq!(result.code, Some(0));

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    run(cmd)?;
    assert_eq!(test.read_file(PAGE)?, first);

    Ok(())
}

#[test]
fn test_fix_inside_locators_package() -> Result<()> {
    let test = CliTest::with_locators()?;
    let file = "packages/playwright-vscode-ext/src/pages/editor.ts";
    test.write_file(
        file,
        "import { Page } from '@playwright/test';\n\nexport const tabs = (page: Page) => page.locator('.tab');\n",
    )?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    run(cmd)?;

    assert_eq!(
        test.read_file(file)?,
        "import { Page } from '@playwright/test';\nimport { TAB } from '../utils/locators';\n\nexport const tabs = (page: Page) => page.locator(TAB);\n"
    );

    Ok(())
}

#[test]
fn test_fix_no_issues() -> Result<()> {
    let test = CliTest::with_locators()?;
    test.write_file(PAGE, "page.locator('.custom');\n")?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let result = run(cmd)?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("no issues found"));
    assert_eq!(test.read_file(PAGE)?, "page.locator('.custom');\n");

    Ok(())
}

#[test]
fn test_fix_apply_jsx_attribute() -> Result<()> {
    let test = CliTest::with_locators()?;
    let file = "packages/salesforcedx-vscode-core/src/view.tsx";
    test.write_file(
        file,
        "export const View = () => <div data-sel=\".monaco-editor\" />;\n",
    )?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let result = run(cmd)?;

    assert_eq!(result.code, Some(0));
    assert_eq!(
        test.read_file(file)?,
        format!(
            "import {{ EDITOR }} from '{}';\nexport const View = () => <div data-sel={{EDITOR}} />;\n",
            PACKAGE_SPECIFIER
        )
    );

    // the rewritten file still parses and is clean
    let result = run(test.check_command())?;
    assert_eq!(result.code, Some(0));

    Ok(())
}

#[test]
fn test_fix_apply_leaves_file_when_output_would_not_parse() -> Result<()> {
    let test = CliTest::with_locators()?;
    let source = "import tab = require('.tab');\n";
    test.write_file(PAGE, source)?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let result = run(cmd)?;

    assert_eq!(result.code, Some(1));
    assert!(
        result
            .stdout
            .contains("1 duplicate(s) could not be fixed automatically:")
    );
    assert!(!result.stdout.contains("Fixed"));
    assert_eq!(test.read_file(PAGE)?, source);

    Ok(())
}
