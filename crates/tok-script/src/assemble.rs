//! Segment/program assembler: walks a compiled unit segment by segment and
//! produces the indented listing.

use std::fmt;

use crate::cleanup::{strip_accumulator, substitute_strings};
use crate::decode::{decode_segment, tokens, DecodeOptions};
use crate::error::Result;
use crate::format::format_line;
use crate::slots::{SlotTable, VarType};
use crate::symbols::{SymbolTables, KW_ELSE, KW_ENDIF, KW_IF};
use crate::token::{render_all, Token};
use crate::unit::{CompiledUnit, UnitHeader};

const INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub indent: usize,
    pub text: String,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.indent {
            f.write_str(INDENT)?;
        }
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone)]
pub struct Listing {
    pub header: UnitHeader,
    /// Size of the whole unit in bytes, header included.
    pub size: usize,
    pub segment_count: usize,
    pub leading_empty: usize,
    pub lines: Vec<Line>,
    pub slots: SlotTable,
}

impl Listing {
    pub fn banner(&self, file_name: &str) -> [String; 3] {
        [
            format!("// File: {}", file_name),
            format!(
                "// Size: {} bytes, segments: {}, vars: {}",
                self.size, self.segment_count, self.leading_empty
            ),
            String::new(),
        ]
    }

    pub fn render_with_banner(&self, file_name: &str) -> String {
        let mut out: Vec<String> = self.banner(file_name).into();
        out.extend(self.lines.iter().map(Line::to_string));
        out.join("\n")
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// One rendered segment before indentation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSegment<'a> {
    pub first: Option<Token<'a>>,
    pub text: String,
}

/// `int ( ... vN ... )`: the first not-yet-declared slot after the paren.
pub fn detect_declaration(tokens: &[Token<'_>], slots: &SlotTable) -> Option<(u8, VarType)> {
    if tokens.len() < 4 || tokens[1] != Token::Char(b'(') {
        return None;
    }
    let ty = tokens[0].name()?.parse::<VarType>().ok()?;
    tokens[2..].iter().find_map(|t| match *t {
        Token::Variable(slot) if !slots.is_declared(slot) => Some((slot, ty)),
        _ => None,
    })
}

fn closes_block(first: Option<&Token<'_>>) -> bool {
    first.is_some_and(|t| t.is_name(KW_ENDIF) || t.is_name(KW_ELSE))
}

fn opens_block(first: Option<&Token<'_>>) -> bool {
    first.is_some_and(|t| t.is_name(KW_IF) || t.is_name(KW_ELSE))
}

pub struct Decompiler<'a> {
    tables: &'a SymbolTables,
    options: DecodeOptions,
}

impl<'a> Decompiler<'a> {
    pub fn new(tables: &'a SymbolTables) -> Self {
        Self {
            tables,
            options: DecodeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn tables(&self) -> &'a SymbolTables {
        self.tables
    }

    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    /// Decode, record any declaration, then render one segment.
    pub fn render_segment(&self, seg: &[u8], slots: &mut SlotTable) -> RenderedSegment<'a> {
        let toks = tokens(&decode_segment(seg, &self.tables.functions, self.options));

        if let Some((slot, ty)) = detect_declaration(&toks, slots) {
            log::debug!("slot {} declared as {}", slot, ty);
            slots.declare(slot, ty);
        }

        let formatted = format_line(&render_all(&toks, slots));
        let cleaned = strip_accumulator(&formatted);
        let text = substitute_strings(&cleaned, self.tables.strings.as_ref()).into_owned();

        RenderedSegment {
            first: toks.first().copied(),
            text,
        }
    }

    pub fn decompile(&self, bytes: &[u8]) -> Result<Listing> {
        let unit = CompiledUnit::parse(bytes)?;
        Ok(self.decompile_unit(&unit))
    }

    pub fn decompile_unit(&self, unit: &CompiledUnit<'_>) -> Listing {
        let mut slots = SlotTable::new();
        let mut indent = 0usize;
        let mut lines = Vec::new();

        for seg in unit.segments().filter(|s| !s.is_empty()) {
            let rendered = self.render_segment(seg, &mut slots);
            let first = rendered.first.as_ref();

            if closes_block(first) {
                indent = indent.saturating_sub(1);
            }
            lines.push(Line {
                indent,
                text: rendered.text,
            });
            if opens_block(first) {
                indent += 1;
            }
        }

        if indent > 0 {
            log::debug!("unit ends with {} open block(s)", indent);
        }

        Listing {
            header: unit.header,
            size: unit.len(),
            segment_count: unit.segment_count(),
            leading_empty: unit.leading_empty_segments(),
            lines,
            slots,
        }
    }
}
