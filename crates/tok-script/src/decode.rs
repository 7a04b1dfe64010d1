//! Byte-pair token decoder.
//!
//! Bytes below 0x80 stand alone. Every byte at or above 0x80 opens a pair
//! `(P, S)` with the byte after it, and `P` selects how `S` is read:
//!
//! | P        | S < 0x80 | S >= 0x80                                                  |
//! |----------|----------|------------------------------------------------------------|
//! | 0x80     | char S   | call `S - 0x80` if followed by `80 28`, else keyword `S`   |
//! | 0x81     | char S   | variable `S - 0x80` (or a lone accumulator marker, skipped) |
//! | 0x82     | char S   | string reference `S - 0x80`                                |
//! | >= 0x83  | char S   | see [`decode_extended`]                                    |

use crate::symbols::FunctionTable;
use crate::token::{Spanned, Token};

pub const HIGH_BIT: u8 = 0x80;
pub const PREFIX_FUNCTION: u8 = 0x80;
pub const PREFIX_VARIABLE: u8 = 0x81;
pub const PREFIX_STRING: u8 = 0x82;
pub const PREFIX_EXTENDED: u8 = 0x83;
pub const OPEN_PAREN: u8 = b'(';

/// Second byte of an uncompressed ("high") function call `(id, 0x81) '('`.
pub const HIGH_CALL_MARKER: u8 = 0x81;

/// When a `0x81 0x81` pair is a lone accumulator marker rather than slot 1.
///
/// The shipped tool skips the marker when the byte after the pair is at least
/// 0x81; its own notes say 0x83. Inputs where the two disagree (third byte
/// 0x81 or 0x82) are logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkerSkipRule {
    #[default]
    AtLeast81,
    AtLeast83,
}

impl MarkerSkipRule {
    pub fn threshold(self) -> u8 {
        match self {
            MarkerSkipRule::AtLeast81 => 0x81,
            MarkerSkipRule::AtLeast83 => 0x83,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub marker_rule: MarkerSkipRule,
}

enum Step<'a> {
    Emit(Token<'a>, usize),
    Skip,
}

fn lookup(table: &FunctionTable, id: u8) -> Token<'_> {
    match table.name(id) {
        Some(name) => Token::Name { id, name },
        None => {
            log::trace!("unresolved function/keyword id {}", id);
            Token::Unknown(id)
        }
    }
}

fn decode_function_prefix<'a>(seg: &[u8], i: usize, s: u8, table: &'a FunctionTable) -> Token<'a> {
    let is_call = seg.get(i + 2) == Some(&PREFIX_FUNCTION) && seg.get(i + 3) == Some(&OPEN_PAREN);
    if is_call {
        lookup(table, s - HIGH_BIT)
    } else {
        lookup(table, s)
    }
}

fn decode_variable_prefix<'a>(seg: &[u8], i: usize, s: u8, opts: DecodeOptions) -> Step<'a> {
    if s == PREFIX_VARIABLE {
        if let Some(&ahead) = seg.get(i + 2) {
            let t81 = MarkerSkipRule::AtLeast81.threshold();
            let t83 = MarkerSkipRule::AtLeast83.threshold();
            if (ahead >= t81) != (ahead >= t83) {
                log::debug!(
                    "accumulator marker at {} followed by 0x{:02x}: skip rules disagree",
                    i,
                    ahead
                );
            }
            if ahead >= opts.marker_rule.threshold() {
                return Step::Skip;
            }
        }
    }
    Step::Emit(Token::Variable(s - HIGH_BIT), 2)
}

/// `P >= 0x83`: the prefix itself carries the id.
///
/// - `S == 0x80`: call `P - 0x80` if `(` follows, else keyword `P` when it is
///   one, else variable `P - 0x80`.
/// - `S > 0x80`: keyword `P` when it is one, else high call `P` for
///   `(P, 0x81) '('`, else integer `S - 0x80`.
fn decode_extended<'a>(seg: &[u8], i: usize, p: u8, s: u8, table: &'a FunctionTable) -> Token<'a> {
    let paren_follows = seg.get(i + 2) == Some(&OPEN_PAREN);

    if s == HIGH_BIT {
        if paren_follows {
            return lookup(table, p - HIGH_BIT);
        }
        return match table.keyword(p) {
            Some(name) => Token::Name { id: p, name },
            None => Token::Variable(p - HIGH_BIT),
        };
    }

    if let Some(name) = table.keyword(p) {
        return Token::Name { id: p, name };
    }
    if s == HIGH_CALL_MARKER && paren_follows {
        return lookup(table, p);
    }
    Token::Integer(s - HIGH_BIT)
}

fn decode_one<'a>(seg: &[u8], i: usize, table: &'a FunctionTable, opts: DecodeOptions) -> Step<'a> {
    let p = seg[i];
    if p < HIGH_BIT {
        return Step::Emit(Token::Char(p), 1);
    }

    let Some(&s) = seg.get(i + 1) else {
        log::debug!("orphan prefix 0x{:02x} at end of segment", p);
        return Step::Emit(Token::Terminator, 1);
    };

    if s < HIGH_BIT {
        return Step::Emit(Token::Char(s), 2);
    }

    let token = match p {
        PREFIX_FUNCTION => decode_function_prefix(seg, i, s, table),
        PREFIX_VARIABLE => return decode_variable_prefix(seg, i, s, opts),
        PREFIX_STRING => Token::StringRef(s - HIGH_BIT),
        _ => decode_extended(seg, i, p, s, table),
    };
    Step::Emit(token, 2)
}

/// Decode one segment. Total over any input: every byte ends up in exactly one
/// token span, skipped marker bytes included in the span of the next token.
pub fn decode_segment<'a>(
    seg: &[u8],
    table: &'a FunctionTable,
    opts: DecodeOptions,
) -> Vec<Spanned<'a>> {
    let mut out = Vec::with_capacity(seg.len());
    let mut pending: Option<usize> = None;
    let mut i = 0usize;

    while i < seg.len() {
        match decode_one(seg, i, table, opts) {
            Step::Skip => {
                pending.get_or_insert(i);
                i += 1;
            }
            Step::Emit(token, len) => {
                let offset = pending.take().unwrap_or(i);
                out.push(Spanned {
                    offset,
                    len: i + len - offset,
                    token,
                });
                i += len;
            }
        }
    }

    out
}

pub fn tokens<'a>(spanned: &[Spanned<'a>]) -> Vec<Token<'a>> {
    spanned.iter().map(|s| s.token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    static TABLE: Lazy<FunctionTable> = Lazy::new(FunctionTable::default);

    fn dec(seg: &[u8]) -> Vec<Token<'static>> {
        dec_with(seg, DecodeOptions::default())
    }

    fn dec_with(seg: &[u8], opts: DecodeOptions) -> Vec<Token<'static>> {
        tokens(&decode_segment(seg, &TABLE, opts))
    }

    fn name(id: u8, name: &'static str) -> Token<'static> {
        Token::Name { id, name }
    }

    fn covered(seg: &[u8], opts: DecodeOptions) -> usize {
        let out = decode_segment(seg, &TABLE, opts);
        let mut expected = 0;
        for s in &out {
            assert_eq!(s.offset, expected, "spans must tile the segment");
            expected = s.end();
        }
        out.iter().map(|s| s.len).sum()
    }

    #[test]
    fn ascii_is_standalone() {
        assert_eq!(
            dec(b"a(1,"),
            vec![Token::Char(b'a'), Token::Char(b'('), Token::Char(b'1'), Token::Char(b',')]
        );
    }

    #[test]
    fn low_second_byte_is_a_char_for_every_prefix() {
        for p in [0x80, 0x81, 0x82, 0x83, 0xa5, 0xff] {
            assert_eq!(dec(&[p, b'x']), vec![Token::Char(b'x')], "prefix 0x{:02x}", p);
        }
    }

    #[test]
    fn function_prefix_call_uses_shifted_id() {
        // 0x80 0xAD '80 28' -> Message(
        assert_eq!(
            dec(&[0x80, 0xad, 0x80, 0x28]),
            vec![name(45, "Message"), Token::Char(b'(')]
        );
    }

    #[test]
    fn function_prefix_without_paren_is_raw_keyword() {
        assert_eq!(dec(&[0x80, 0xa5]), vec![name(165, "if")]);
        // standalone '(' is not the 80 28 marker
        assert_eq!(dec(&[0x80, 0xb4, 0x28]), vec![name(180, "="), Token::Char(b'(')]);
    }

    #[test]
    fn function_prefix_unknown_id() {
        assert_eq!(dec(&[0x80, 0xf0]), vec![Token::Unknown(0xf0)]);
    }

    #[test]
    fn variable_prefix() {
        assert_eq!(dec(&[0x81, 0x80]), vec![Token::Variable(0)]);
        assert_eq!(dec(&[0x81, 0x87]), vec![Token::Variable(7)]);
    }

    #[test]
    fn accumulator_marker_is_skipped() {
        // 81 | 81 83 -> v3
        assert_eq!(dec(&[0x81, 0x81, 0x83]), vec![Token::Variable(3)]);
        assert_eq!(covered(&[0x81, 0x81, 0x83], DecodeOptions::default()), 3);
    }

    #[test]
    fn marker_pair_without_lookahead_is_slot_one() {
        assert_eq!(dec(&[0x81, 0x81]), vec![Token::Variable(1)]);
        assert_eq!(dec(&[0x81, 0x81, 0x29]), vec![Token::Variable(1), Token::Char(b')')]);
    }

    #[test]
    fn marker_rule_81_vs_83() {
        let seg = [0x81, 0x81, 0x82, 0x85];
        assert_eq!(
            dec_with(&seg, DecodeOptions { marker_rule: MarkerSkipRule::AtLeast81 }),
            vec![Token::Variable(2), Token::Terminator]
        );
        assert_eq!(
            dec_with(&seg, DecodeOptions { marker_rule: MarkerSkipRule::AtLeast83 }),
            vec![Token::Variable(1), Token::StringRef(5)]
        );

        // both rules agree once the lookahead is 0x83 or above
        let seg = [0x81, 0x81, 0x84];
        for marker_rule in [MarkerSkipRule::AtLeast81, MarkerSkipRule::AtLeast83] {
            assert_eq!(dec_with(&seg, DecodeOptions { marker_rule }), vec![Token::Variable(4)]);
        }
    }

    #[test]
    fn string_prefix() {
        assert_eq!(dec(&[0x82, 0x85]), vec![Token::StringRef(5)]);
        assert_eq!(dec(&[0x82, 0xff]), vec![Token::StringRef(127)]);
    }

    #[test]
    fn extended_call_with_paren() {
        // 0x8E 0x80 '(' -> GetPlayerSide(
        assert_eq!(
            dec(&[0x8e, 0x80, 0x28, 0x29]),
            vec![name(14, "GetPlayerSide"), Token::Char(b'('), Token::Char(b')')]
        );
    }

    #[test]
    fn extended_s80_without_paren() {
        // keyword range -> keyword, else variable P - 0x80
        assert_eq!(dec(&[0xa5, 0x80]), vec![name(165, "if")]);
        assert_eq!(dec(&[0x8e, 0x80]), vec![Token::Variable(14)]);
    }

    #[test]
    fn extended_keyword_and_integer() {
        assert_eq!(dec(&[0xb1, 0x85]), vec![name(177, "TRUE")]);
        assert_eq!(dec(&[0x90, 0x85]), vec![Token::Integer(5)]);
        assert_eq!(dec(&[0x90, 0xff]), vec![Token::Integer(127)]);
    }

    #[test]
    fn extended_high_call() {
        // PlaySound is 142: (0x8E, 0x81) '('
        assert_eq!(
            dec(&[0x8e, 0x81, 0x28]),
            vec![name(142, "PlaySound"), Token::Char(b'(')]
        );
        // without paren the same pair is the integer 1
        assert_eq!(dec(&[0x8e, 0x81]), vec![Token::Integer(1)]);
    }

    #[test]
    fn extended_high_call_unknown() {
        let table = FunctionTable::new(162, Default::default());
        let out = tokens(&decode_segment(&[0x8e, 0x81, 0x28], &table, DecodeOptions::default()));
        assert_eq!(out, vec![Token::Unknown(0x8e), Token::Char(b'(')]);
    }

    #[test]
    fn truncated_prefix_is_terminator() {
        assert_eq!(dec(&[0x41, 0x90]), vec![Token::Char(b'A'), Token::Terminator]);
        assert_eq!(dec(&[0x81]), vec![Token::Terminator]);
    }

    #[test]
    fn every_byte_is_consumed_once() {
        let samples: &[&[u8]] = &[
            &[],
            &[0x80, 0xad, 0x80, 0x28, 0x81, 0x81, 0x83, 0x29, 0x90],
            &[0x81, 0x81, 0x81, 0x83],
            &[0x82, 0x81, 0x82, 0x01, 0xff, 0xff, 0x7f],
            &[0xa4, 0x28, 0x81, 0x80, 0x29],
        ];
        for seg in samples {
            for marker_rule in [MarkerSkipRule::AtLeast81, MarkerSkipRule::AtLeast83] {
                assert_eq!(covered(seg, DecodeOptions { marker_rule }), seg.len());
            }
        }

        let all: Vec<u8> = (1..=255u8).chain((1..=255u8).rev()).collect();
        assert_eq!(covered(&all, DecodeOptions::default()), all.len());
    }
}
