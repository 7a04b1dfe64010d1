//! String-table usage report: which `STR[n]` indices a set of units touch,
//! under which calls, and on behalf of which side.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::decode::{decode_segment, tokens, DecodeOptions};
use crate::error::Result;
use crate::symbols::{FunctionTable, SymbolTables};
use crate::token::Token;
use crate::unit::CompiledUnit;

pub const NO_CONTEXT: &str = "<none>";

const ASSIGN: &str = "=";

/// Owner named by the first argument of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    SecondPlayer,
    Enemy,
    Neutral,
    /// Returned by `CreateSide`; friend/enemy relations are not followed.
    Created,
}

impl Side {
    pub fn from_getter(name: &str) -> Option<Side> {
        match name {
            "GetPlayerSide" => Some(Side::Player),
            "GetSecondPlayerSide" => Some(Side::SecondPlayer),
            "GetEnemySide" => Some(Side::Enemy),
            "GetNeutralSide" => Some(Side::Neutral),
            "CreateSide" => Some(Side::Created),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StringUse {
    pub name: Option<String>,
    pub count: usize,
    /// Innermost call the reference appeared inside.
    pub contexts: BTreeSet<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub sides: BTreeSet<Side>,
    pub units: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StringUsage {
    entries: BTreeMap<u8, StringUse>,
}

/// One open parenthesis. `call` is `None` for grouping and keyword parens.
struct Frame<'a> {
    call: Option<&'a str>,
    side: Option<Side>,
    first_arg: bool,
}

fn call_name<'a>(tok: Option<&Token<'a>>, functions: &FunctionTable) -> Option<&'a str> {
    match tok {
        Some(&Token::Name { id, name }) if !functions.is_keyword_id(id) => Some(name),
        _ => None,
    }
}

/// `slot = [acc] Getter (...)` binds a side to a slot for the rest of the unit.
fn side_assignment(toks: &[Token<'_>], functions: &FunctionTable) -> Option<(u8, Side)> {
    let Some(&Token::Variable(slot)) = toks.first() else {
        return None;
    };
    match toks.get(1) {
        Some(&Token::Name { name, .. }) if name == ASSIGN => {}
        _ => return None,
    }
    let mut rest = &toks[2..];
    if let Some(Token::Variable(0)) = rest.first() {
        rest = &rest[1..];
    }
    let getter = call_name(rest.first(), functions)?;
    if rest.get(1) != Some(&Token::Char(b'(')) {
        return None;
    }
    Side::from_getter(getter).map(|side| (slot, side))
}

impl StringUsage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collect(
        unit_name: &str,
        unit: &CompiledUnit<'_>,
        tables: &SymbolTables,
        opts: DecodeOptions,
    ) -> Self {
        let functions = &tables.functions;
        let mut usage = Self::new();
        let mut side_slots: BTreeMap<u8, Side> = BTreeMap::new();

        for seg in unit.segments().filter(|s| !s.is_empty()) {
            let toks = tokens(&decode_segment(seg, functions, opts));
            if let Some((slot, side)) = side_assignment(&toks, functions) {
                side_slots.insert(slot, side);
            }

            let mut stack: Vec<Frame<'_>> = Vec::new();
            for (i, tok) in toks.iter().enumerate() {
                if let Some(top) = stack.last_mut() {
                    if top.first_arg {
                        top.first_arg = false;
                        top.side = match *tok {
                            Token::Name { name, .. } => Side::from_getter(name),
                            Token::Variable(slot) => side_slots.get(&slot).copied(),
                            _ => None,
                        };
                    }
                }

                match *tok {
                    Token::Char(b'(') => stack.push(Frame {
                        call: i.checked_sub(1).and_then(|p| call_name(toks.get(p), functions)),
                        side: None,
                        first_arg: true,
                    }),
                    Token::Char(b')') => {
                        stack.pop();
                    }
                    Token::StringRef(idx) => {
                        let enclosing = stack.iter().rev().find(|f| f.call.is_some());
                        let entry = usage.entries.entry(idx).or_insert_with(|| StringUse {
                            name: tables
                                .strings
                                .as_ref()
                                .and_then(|s| s.get(idx as usize))
                                .map(str::to_string),
                            ..Default::default()
                        });
                        entry.count += 1;
                        entry.contexts.insert(
                            enclosing.and_then(|f| f.call).unwrap_or(NO_CONTEXT).to_string(),
                        );
                        if let Some(side) = enclosing.and_then(|f| f.side) {
                            entry.sides.insert(side);
                        }
                        entry.units.insert(unit_name.to_string());
                    }
                    _ => {}
                }
            }
        }

        usage
    }

    pub fn merge(&mut self, other: StringUsage) {
        for (idx, theirs) in other.entries {
            let ours = self.entries.entry(idx).or_default();
            if ours.name.is_none() {
                ours.name = theirs.name;
            }
            ours.count += theirs.count;
            ours.contexts.extend(theirs.contexts);
            ours.sides.extend(theirs.sides);
            ours.units.extend(theirs.units);
        }
    }
    pub fn get(&self, idx: u8) -> Option<&StringUse> {
        self.entries.get(&idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &StringUse)> {
        self.entries.iter().map(|(idx, u)| (*idx, u))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
