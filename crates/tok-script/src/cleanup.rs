//! Text rewrites applied to a formatted line.
//!
//! The Lexan compiler parks intermediate results in slot 0 and leaves a
//! reference to it in front of many assignment and comparison operands. The
//! decode is correct either way; these rules only drop that reference so the
//! listing reads like source. Only slot 0 is touched, whatever type it was
//! declared with.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::symbols::StringTable;

/// Display names slot 0 can have.
const ACCUMULATOR: &str = r"(?:v0|int_0|obj_0|pos_0)";

pub struct Rule {
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        let pattern = pattern.replace("ACC", ACCUMULATOR);
        Self {
            name,
            pattern: Regex::new(&pattern).expect("accumulator rule pattern"),
            replacement,
        }
    }

    pub fn apply<'t>(&self, line: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(line, self.replacement)
    }
}

/// Applied in order.
pub static ACCUMULATOR_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new("assign-name", r"= ACC ([A-Z])", "= ${1}"),
        Rule::new("assign-bool", r"= ACC (TRUE|FALSE)", "= ${1}"),
        Rule::new("eq-bool", r"== ACC (TRUE|FALSE)", "== ${1}"),
        Rule::new("eq-int", r"== ACC (\d)", "== ${1}"),
        Rule::new("cmp-operand", r"(^|[ (])(==|!=|>=|<=|>|<) ACC ", "${1}${2} "),
    ]
});

pub fn strip_accumulator(line: &str) -> Cow<'_, str> {
    let mut out = Cow::Borrowed(line);
    for rule in ACCUMULATOR_RULES.iter() {
        let rewritten = match rule.apply(&out) {
            Cow::Owned(s) => Some(s),
            Cow::Borrowed(_) => None,
        };
        if let Some(s) = rewritten {
            log::trace!("{}: {:?} -> {:?}", rule.name, out, s);
            out = Cow::Owned(s);
        }
    }
    out
}

static STRING_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"STR\[(\d+)\]").expect("string ref pattern"));

/// Replace `STR[n]` with the quoted type name. Out-of-range indices, or no
/// table at all, leave the placeholder.
pub fn substitute_strings<'t>(line: &'t str, strings: Option<&StringTable>) -> Cow<'t, str> {
    let Some(strings) = strings else {
        return Cow::Borrowed(line);
    };
    STRING_REF.replace_all(line, |caps: &Captures| {
        let resolved = caps[1].parse::<usize>().ok().and_then(|idx| strings.get(idx));
        match resolved {
            Some(name) => format!("\"{}\"", name),
            None => caps[0].to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_of_boolean() {
        assert_eq!(strip_accumulator("= v0 TRUE"), "= TRUE");
        assert_eq!(strip_accumulator("int_4 = int_0 FALSE;"), "int_4 = FALSE;");
    }

    #[test]
    fn other_slots_are_kept() {
        assert_eq!(strip_accumulator("= v3 TRUE"), "= v3 TRUE");
        assert_eq!(strip_accumulator("= int_10 TRUE"), "= int_10 TRUE");
        assert_eq!(strip_accumulator("== obj_2 5"), "== obj_2 5");
    }

    #[test]
    fn assignment_of_call() {
        assert_eq!(
            strip_accumulator("obj_3 = obj_0 NewObject (STR[87], pos_2);"),
            "obj_3 = NewObject (STR[87], pos_2);"
        );
        // lower-case operand is not a call
        assert_eq!(strip_accumulator("= v0 v5"), "= v0 v5");
    }

    #[test]
    fn comparisons() {
        assert_eq!(strip_accumulator("if (int_1 == pos_0 0)"), "if (int_1 == 0)");
        assert_eq!(strip_accumulator("if (x == v0 TRUE)"), "if (x == TRUE)");
        assert_eq!(strip_accumulator("if (x >= int_0 int_5)"), "if (x >= int_5)");
        assert_eq!(strip_accumulator("if (x != obj_0 obj_7 && y)"), "if (x != obj_7 && y)");
    }

    #[test]
    fn placeholder_bracket_is_not_an_operator() {
        assert_eq!(strip_accumulator("<0x07> v0 x"), "<0x07> v0 x");
        assert_eq!(strip_accumulator("if (<0x3e> int_0 5)"), "if (<0x3e> int_0 5)");
        assert_eq!(strip_accumulator("> v0 x"), "> x");
    }

    #[test]
    fn untouched_line_is_borrowed() {
        assert!(matches!(strip_accumulator("endif"), Cow::Borrowed(_)));
    }

    #[test]
    fn strings_resolve_in_range() {
        let table = StringTable::new(
            ["A", "B", "C", "D", "E", "Harvester"].iter().map(|s| s.to_string()).collect(),
        )
        .unwrap();
        assert_eq!(
            substitute_strings("NewObject (STR[5], STR[6])", Some(&table)),
            "NewObject (\"Harvester\", STR[6])"
        );
        assert_eq!(substitute_strings("STR[5]", None), "STR[5]");
    }
}
