//! Import statements of a consuming file, with the byte positions the fix
//! planner needs to extend them.

use std::ops::Range;

use swc_common::Spanned;
use swc_ecma_ast::{ImportSpecifier, ModuleDecl, ModuleExportName, ModuleItem};

use crate::core::parsers::ParsedModule;
use crate::core::repo::LOCATORS_PACKAGE_SPECIFIER;

/// Import source suffixes recognized as the locators module.
const LOCATORS_SUFFIXES: &[&str] = &[
    "/locators",
    "./locators",
    "../locators",
    "../../locators",
    "../../../locators",
];

/// Whether an import source refers to the locators module.
pub fn is_locators_source(source: &str, expected_path: &str) -> bool {
    source == expected_path
        || source.contains("locators")
        || source == LOCATORS_PACKAGE_SPECIFIER
        || LOCATORS_SUFFIXES
            .iter()
            .any(|suffix| source.ends_with(suffix))
}

/// One `import ... from '...'` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportStatement {
    /// Module specifier text.
    pub source: String,
    /// Byte range of the whole statement.
    pub range: Range<usize>,
    /// Byte range of the quoted module specifier.
    pub source_range: Range<usize>,
    /// Imported (not local) names of named specifiers; string names excluded.
    pub named: Vec<String>,
    /// End of the last specifier of any kind.
    pub last_specifier_end: Option<usize>,
}

impl ImportStatement {
    pub fn imports_name(&self, name: &str) -> bool {
        self.named.iter().any(|n| n == name)
    }
}

/// Top-level structure of a consuming file relevant to import edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileImports {
    /// Import statements in source order.
    pub imports: Vec<ImportStatement>,
    /// Start of the first top-level item, if the file has any.
    pub first_item_start: Option<usize>,
}

impl FileImports {
    pub fn from_parsed(parsed: &ParsedModule) -> Self {
        let first_item_start = parsed
            .module
            .body
            .first()
            .map(|item| parsed.offset(item.span().lo));

        let imports = parsed
            .module
            .body
            .iter()
            .filter_map(|item| match item {
                ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => Some(import),
                _ => None,
            })
            .filter_map(|import| {
                let source = import.src.value.as_str()?.to_string();
                let named = import
                    .specifiers
                    .iter()
                    .filter_map(|spec| match spec {
                        ImportSpecifier::Named(named) => match &named.imported {
                            Some(ModuleExportName::Ident(ident)) => Some(ident.sym.to_string()),
                            Some(_) => None,
                            None => Some(named.local.sym.to_string()),
                        },
                        _ => None,
                    })
                    .collect();
                let last_specifier_end = import
                    .specifiers
                    .last()
                    .map(|spec| parsed.offset(spec.span().hi));

                Some(ImportStatement {
                    source,
                    range: parsed.range(import.span),
                    source_range: parsed.range(import.src.span),
                    named,
                    last_specifier_end,
                })
            })
            .collect();

        Self {
            imports,
            first_item_start,
        }
    }

    /// Whether `name` is already imported from a recognized locators source.
    pub fn is_constant_imported(&self, name: &str, expected_path: &str) -> bool {
        self.imports
            .iter()
            .any(|import| {
                is_locators_source(&import.source, expected_path) && import.imports_name(name)
            })
    }

    /// First import that pulls from a recognized locators source.
    pub fn locators_import(&self, expected_path: &str) -> Option<&ImportStatement> {
        self.imports
            .iter()
            .find(|import| is_locators_source(&import.source, expected_path))
    }

    pub fn last_import(&self) -> Option<&ImportStatement> {
        self.imports.last()
    }
}
