//! Exported declarations of the locators module, reduced to the initializer
//! shapes the table builder understands.

use std::collections::HashMap;

use swc_ecma_ast::{Decl, Expr, Lit, Module, ModuleDecl, ModuleItem, Pat, Tpl};

/// Builder-only `constant name -> resolved value` map.
pub type ScratchMap = HashMap<String, String>;

/// A template literal as cooked text chunks plus, for each `${...}` slot, the
/// referenced identifier (or `None` for any other expression).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLiteral {
    pub quasis: Vec<String>,
    pub references: Vec<Option<String>>,
}

impl TemplateLiteral {
    pub fn from_tpl(tpl: &Tpl) -> Self {
        let quasis = tpl
            .quasis
            .iter()
            .map(|quasi| {
                quasi
                    .cooked
                    .as_ref()
                    .and_then(|cooked| cooked.as_str())
                    .unwrap_or_default()
                    .to_string()
            })
            .collect();
        let references = tpl
            .exprs
            .iter()
            .map(|expr| match unwrap_parens(expr) {
                Expr::Ident(ident) => Some(ident.sym.to_string()),
                _ => None,
            })
            .collect();
        Self { quasis, references }
    }

    /// Concatenate the chunks, following each one with the scratch value of
    /// its reference. Unknown or empty references contribute nothing.
    pub fn resolve(&self, scratch: &ScratchMap) -> String {
        self.quasis
            .iter()
            .enumerate()
            .fold(String::new(), |mut out, (i, text)| {
                out.push_str(text);
                if let Some(Some(name)) = self.references.get(i)
                    && let Some(value) = scratch.get(name)
                {
                    out.push_str(value);
                }
                out
            })
    }
}

/// Initializer shapes of an exported declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Initializer {
    /// `'value'`
    Str(String),
    /// `` `${BASE} .child` ``
    Template(TemplateLiteral),
    /// `OTHER_CONSTANT`
    Reference(String),
    /// ``['.a', `${BASE}.b`]``; holes and spreads are dropped.
    Array(Vec<Initializer>),
    Unsupported,
}

impl Initializer {
    pub fn from_expr(expr: &Expr) -> Self {
        match unwrap_parens(expr) {
            Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
                Some(value) => Self::Str(value.to_string()),
                None => Self::Unsupported,
            },
            Expr::Tpl(tpl) => Self::Template(TemplateLiteral::from_tpl(tpl)),
            Expr::Ident(ident) => Self::Reference(ident.sym.to_string()),
            Expr::Array(array) => Self::Array(
                array
                    .elems
                    .iter()
                    .flatten()
                    .filter(|elem| elem.spread.is_none())
                    .map(|elem| Self::from_expr(&elem.expr))
                    .collect(),
            ),
            _ => Self::Unsupported,
        }
    }
}

/// An exported top-level `const`/`let`/`var` binding with an initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub init: Initializer,
}

/// Collect every exported variable declarator with an identifier binding and
/// an initializer. All other top-level items are discarded.
pub fn collect_declarations(module: &Module) -> Vec<Declaration> {
    module
        .body
        .iter()
        .filter_map(|item| match item {
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => match &export.decl {
                Decl::Var(var) => Some(var),
                _ => None,
            },
            _ => None,
        })
        .flat_map(|var| var.decls.iter())
        .filter_map(|declarator| {
            let Pat::Ident(binding) = &declarator.name else {
                return None;
            };
            let init = declarator.init.as_ref()?;
            Some(Declaration {
                name: binding.id.sym.to_string(),
                init: Initializer::from_expr(init),
            })
        })
        .collect()
}

fn unwrap_parens(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_parens(&paren.expr),
        _ => expr,
    }
}
