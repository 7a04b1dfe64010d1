use std::borrow::Cow;

use crate::slots::SlotTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Standalone byte, or the low half of a pair whose second byte is below 0x80.
    Char(u8),
    /// Function or keyword resolved through the function table.
    Name { id: u8, name: &'a str },
    Variable(u8),
    StringRef(u8),
    Integer(u8),
    /// Function/keyword id missing from the table.
    Unknown(u8),
    /// Prefix byte with nothing after it.
    Terminator,
}

impl<'a> Token<'a> {
    pub fn render(&self, slots: &SlotTable) -> Cow<'a, str> {
        match *self {
            Token::Char(b) if is_printable(b) => Cow::Owned(char::from(b).to_string()),
            Token::Char(b) => Cow::Owned(format!("<0x{:02x}>", b)),
            Token::Name { name, .. } => Cow::Borrowed(name),
            Token::Variable(slot) => Cow::Owned(slots.name(slot)),
            Token::StringRef(idx) => Cow::Owned(format!("STR[{}]", idx)),
            Token::Integer(v) => Cow::Owned(v.to_string()),
            Token::Unknown(id) => Cow::Owned(format!("UNK_{}", id)),
            Token::Terminator => Cow::Borrowed(";"),
        }
    }

    pub fn is_name(&self, expected: &str) -> bool {
        matches!(self, Token::Name { name, .. } if *name == expected)
    }

    pub fn name(&self) -> Option<&'a str> {
        match *self {
            Token::Name { name, .. } => Some(name),
            _ => None,
        }
    }
}

fn is_printable(b: u8) -> bool {
    (0x20..=0x7e).contains(&b)
}

/// A token together with the byte range it consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned<'a> {
    pub offset: usize,
    pub len: usize,
    pub token: Token<'a>,
}

impl<'a> Spanned<'a> {
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

pub fn render_all<'a>(tokens: &[Token<'a>], slots: &SlotTable) -> Vec<Cow<'a, str>> {
    tokens.iter().map(|t| t.render(slots)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::VarType;

    #[test]
    fn render_variants() {
        let mut slots = SlotTable::new();
        slots.declare(2, VarType::Pos);

        assert_eq!(Token::Char(b'(').render(&slots), "(");
        assert_eq!(Token::Char(0x07).render(&slots), "<0x07>");
        assert_eq!(Token::Char(0x7f).render(&slots), "<0x7f>");
        assert_eq!(Token::Name { id: 165, name: "if" }.render(&slots), "if");
        assert_eq!(Token::Variable(2).render(&slots), "pos_2");
        assert_eq!(Token::Variable(9).render(&slots), "v9");
        assert_eq!(Token::StringRef(5).render(&slots), "STR[5]");
        assert_eq!(Token::Integer(12).render(&slots), "12");
        assert_eq!(Token::Unknown(200).render(&slots), "UNK_200");
        assert_eq!(Token::Terminator.render(&slots), ";");
    }
}
