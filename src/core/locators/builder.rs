//! Two-pass constant folding of the locators module into a [`LocatorTable`].
//!
//! Pass 1 resolves every declaration against the constants seen so far, in
//! declaration order. Pass 2 recomputes template literals with the complete
//! scratch map and expands arrays. A value resolved in pass 2 is never visible
//! to pass 1 resolutions.

use swc_ecma_ast::Module;

use super::declaration::{Declaration, Initializer, ScratchMap, collect_declarations};
use super::table::LocatorTable;

pub fn build_locator_table(module: &Module) -> LocatorTable {
    build_from_declarations(&collect_declarations(module))
}

pub fn build_from_declarations(declarations: &[Declaration]) -> LocatorTable {
    let mut scratch = ScratchMap::new();
    let mut table = LocatorTable::new();

    for decl in declarations {
        if let Some(value) = resolve_scalar(&decl.init, &scratch) {
            record(&mut scratch, &mut table, &decl.name, value);
        }
    }

    for decl in declarations {
        match &decl.init {
            Initializer::Template(tpl) => {
                let value = tpl.resolve(&scratch);
                record(&mut scratch, &mut table, &decl.name, value);
            }
            Initializer::Array(elements) => {
                for value in elements.iter().filter_map(|e| resolve_element(e, &scratch)) {
                    table.insert(value, decl.name.as_str());
                }
            }
            _ => {}
        }
    }

    table
}

/// Pass 1 resolution: strings, templates and references. Arrays never resolve here.
fn resolve_scalar(init: &Initializer, scratch: &ScratchMap) -> Option<String> {
    let value = match init {
        Initializer::Str(value) => value.clone(),
        Initializer::Template(tpl) => tpl.resolve(scratch),
        Initializer::Reference(name) => scratch.get(name)?.clone(),
        Initializer::Array(_) | Initializer::Unsupported => return None,
    };
    (!value.is_empty()).then_some(value)
}

/// Array elements may only be strings or template literals.
fn resolve_element(init: &Initializer, scratch: &ScratchMap) -> Option<String> {
    let value = match init {
        Initializer::Str(value) => value.clone(),
        Initializer::Template(tpl) => tpl.resolve(scratch),
        _ => return None,
    };
    (!value.is_empty()).then_some(value)
}

fn record(scratch: &mut ScratchMap, table: &mut LocatorTable, name: &str, value: String) {
    if value.is_empty() {
        return;
    }
    table.insert(value.as_str(), name);
    scratch.insert(name.to_string(), value);
}
