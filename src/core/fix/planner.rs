//! Decides the text edits that replace a duplicated selector with its
//! locator constant and make sure the constant is imported.

use std::ops::Range;

use crate::core::collect::{FileImports, LiteralKind, StaticLiteral};
use crate::core::matcher::LocatorMatch;

use super::edit::TextEdit;

/// Replacement text for a literal of `kind` whose runtime value is `text`.
///
/// - exact match: the bare constant name
/// - match at the start: a template literal splicing the constant in front of
///   the untouched remainder
/// - match elsewhere: the bare constant name (the surrounding text is dropped)
///
/// JSX attribute values are wrapped in `{...}`.
pub fn plan_replacement(text: &str, kind: LiteralKind, matched: &LocatorMatch) -> String {
    let expr = if matched.is_prefix(text) && !matched.is_exact(text) {
        let rest = &text[matched.value.len()..];
        format!("`${{{}}}{}`", matched.name, rest)
    } else {
        matched.name.clone()
    };

    match kind {
        LiteralKind::JsxAttribute => format!("{{{}}}", expr),
        LiteralKind::String | LiteralKind::Template => expr,
    }
}

/// Edits that import `name` from `import_path`.
///
/// Returns no edits when `name` is already imported from a locators source.
pub fn plan_import_edits(imports: &FileImports, name: &str, import_path: &str) -> Vec<TextEdit> {
    if imports.is_constant_imported(name, import_path) {
        return Vec::new();
    }

    let Some(last_import) = imports.last_import() else {
        return imports
            .first_item_start
            .map(|start| {
                TextEdit::insert(
                    start,
                    format!("import {{ {} }} from '{}';\n", name, import_path),
                )
            })
            .into_iter()
            .collect();
    };

    if let Some(existing) = imports.locators_import(import_path) {
        let edit = match existing.last_specifier_end {
            Some(end) => TextEdit::insert(end, format!(", {}", name)),
            None => TextEdit::insert(existing.source_range.end, format!(" {{ {} }}", name)),
        };
        return vec![edit];
    }

    vec![TextEdit::insert(
        last_import.range.end,
        format!("\nimport {{ {} }} from '{}';", name, import_path),
    )]
}

/// All edits of the fix for `literal`, which occupies `literal_range`.
pub fn plan_fix(
    literal_range: Range<usize>,
    literal: &StaticLiteral,
    matched: &LocatorMatch,
    imports: &FileImports,
    import_path: &str,
) -> Vec<TextEdit> {
    let replacement = plan_replacement(&literal.text, literal.kind, matched);
    let mut edits = vec![TextEdit::replace(literal_range, replacement)];
    edits.extend(plan_import_edits(imports, &matched.name, import_path));
    edits
}
