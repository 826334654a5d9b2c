use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::ops::Range;
use std::path::Path;
use std::sync::Arc;
use swc_common::{
    BytePos, FileName, FilePathMapping, Globals, Loc, SourceFile, SourceMap, Span, Spanned,
    comments::{Comment, SingleThreadedComments},
};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

const BOM: char = '\u{feff}';

/// Map of byte positions to comments.
pub type CommentMap = HashMap<BytePos, Vec<Comment>>;

/// Comments extracted from SingleThreadedComments during parsing and stored
/// independently of swc's single-threaded containers.
#[derive(Debug, Clone, Default)]
pub struct ExtractedComments {
    pub leading: CommentMap,
    pub trailing: CommentMap,
}

impl ExtractedComments {
    /// This must be called before SingleThreadedComments is dropped.
    pub fn from_swc(comments: &SingleThreadedComments) -> Self {
        let (leading, trailing) = comments.borrow_all();
        Self {
            leading: leading.iter().map(|(k, v)| (*k, v.clone())).collect(),
            trailing: trailing.iter().map(|(k, v)| (*k, v.clone())).collect(),
        }
    }

    /// All comments, leading and trailing, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Comment> {
        self.leading
            .values()
            .chain(self.trailing.values())
            .flatten()
    }
}

/// A parsed TypeScript module together with everything needed to map swc
/// spans back to byte offsets and lines of the original text.
pub struct ParsedModule {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
    pub source_file: Arc<SourceFile>,
    pub comments: ExtractedComments,
    /// Source text as handed to the parser (without a leading BOM).
    pub source: String,
    /// Whether the original text started with a byte order mark.
    pub has_bom: bool,
}

impl ParsedModule {
    /// Byte offset of `pos` within [`ParsedModule::source`].
    pub fn offset(&self, pos: BytePos) -> usize {
        (pos.0 - self.source_file.start_pos.0) as usize
    }

    /// Half-open byte range of `span` within [`ParsedModule::source`].
    pub fn range(&self, span: Span) -> Range<usize> {
        self.offset(span.lo)..self.offset(span.hi)
    }

    pub fn lookup(&self, pos: BytePos) -> Loc {
        self.source_map.lookup_char_pos(pos)
    }

    /// Content of the 1-based `line`, or an empty string when out of range.
    pub fn line_text(&self, loc: &Loc) -> String {
        loc.file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default()
    }

    /// Re-attaches the BOM stripped before parsing, if there was one.
    pub fn restore_bom(&self, text: String) -> String {
        if self.has_bom {
            format!("{}{}", BOM, text)
        } else {
            text
        }
    }
}

/// Whether the file should be parsed with JSX enabled.
fn is_jsx_file(file_path: &str) -> bool {
    matches!(
        Path::new(file_path).extension().and_then(|e| e.to_str()),
        Some("tsx" | "jsx")
    )
}

/// Parse TypeScript (or TSX, based on the file extension) source into an AST.
///
/// Every call uses a fresh SourceMap, so parsed modules can be produced on
/// any rayon worker without sharing state.
pub fn parse_ts_source(code: &str, file_path: &str) -> Result<ParsedModule> {
    use swc_common::GLOBALS;

    let (has_bom, code) = match code.strip_prefix(BOM) {
        Some(rest) => (true, rest),
        None => (false, code),
    };
    let source_map: Arc<SourceMap> = Arc::new(SourceMap::new(FilePathMapping::empty()));

    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map
            .new_source_file(FileName::Real(file_path.into()).into(), code.to_string());

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: is_jsx_file(file_path),
            decorators: true,
            ..Default::default()
        });

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));

        let module = parser.parse_module().map_err(|e| {
            let loc = source_map.lookup_char_pos(e.span().lo);
            anyhow!(
                "{}:{}: {}",
                loc.line,
                loc.col_display + 1,
                e.kind().msg()
            )
        })?;

        let extracted_comments = ExtractedComments::from_swc(&comments);

        Ok(ParsedModule {
            module,
            source_map: source_map.clone(),
            source_file,
            comments: extracted_comments,
            source: code.to_string(),
            has_bom,
        })
    })
}
