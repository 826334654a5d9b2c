//! Collects the string literals of a file that may duplicate a locator.

use swc_common::Span;
use swc_ecma_ast::{ExportAll, ImportDecl, JSXAttrValue, Module, NamedExport, Str, Tpl};
use swc_ecma_visit::{Visit, VisitWith};

/// Kind of literal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    /// `'text'` or `"text"`
    String,
    /// `` `text` `` without any `${...}`
    Template,
    /// `"text"` as the value of a JSX attribute, where only a string or an
    /// expression container may appear
    JsxAttribute,
}

/// A literal whose runtime value is statically known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticLiteral {
    pub kind: LiteralKind,
    /// Runtime (cooked) text.
    pub text: String,
    /// Span of the whole literal including quotes or backticks.
    pub span: Span,
}

/// Walks a module once, gathering string literals and expression-free
/// template literals. Template literals with expressions are skipped (their
/// nested literals are still visited), as are import and export module sources.
#[derive(Default)]
struct LiteralCollector {
    literals: Vec<StaticLiteral>,
}

impl LiteralCollector {
    fn record_str(&mut self, node: &Str, kind: LiteralKind) {
        if let Some(text) = node.value.as_str() {
            self.literals.push(StaticLiteral {
                kind,
                text: text.to_string(),
                span: node.span,
            });
        }
    }
}

impl Visit for LiteralCollector {
    fn visit_str(&mut self, node: &Str) {
        self.record_str(node, LiteralKind::String);
    }

    fn visit_jsx_attr_value(&mut self, node: &JSXAttrValue) {
        match node {
            JSXAttrValue::Str(s) => self.record_str(s, LiteralKind::JsxAttribute),
            _ => node.visit_children_with(self),
        }
    }

    fn visit_tpl(&mut self, node: &Tpl) {
        if node.exprs.is_empty() {
            let text = node
                .quasis
                .iter()
                .filter_map(|q| q.cooked.as_ref().and_then(|c| c.as_str()))
                .collect::<String>();
            self.literals.push(StaticLiteral {
                kind: LiteralKind::Template,
                text,
                span: node.span,
            });
        }
        node.visit_children_with(self);
    }

    fn visit_import_decl(&mut self, _: &ImportDecl) {}

    fn visit_named_export(&mut self, _: &NamedExport) {}

    fn visit_export_all(&mut self, _: &ExportAll) {}
}

/// Static literals of `module` in source order.
pub fn collect_literals(module: &Module) -> Vec<StaticLiteral> {
    let mut collector = LiteralCollector::default();
    module.visit_with(&mut collector);
    let mut literals = collector.literals;
    literals.sort_by_key(|lit| lit.span.lo);
    literals
}
