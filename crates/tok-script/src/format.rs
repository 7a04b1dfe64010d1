//! Render a decoded token stream as one line of script.

/// Operators that always get a space on both sides.
pub const SPACED_OPERATORS: [&str; 11] = ["==", "!=", ">=", "<=", ">", "<", "&&", "||", "=", "+", "-"];

fn is_digits(t: &str) -> bool {
    !t.is_empty() && t.bytes().all(|b| b.is_ascii_digit())
}

fn no_space_before(t: &str) -> bool {
    matches!(t, ")" | "," | ";")
}

/// Merge runs of digit tokens (optionally led by a `-` directly before a digit)
/// into one number.
pub fn merge_numbers<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut i = 0usize;

    while i < tokens.len() {
        let t = tokens[i].as_ref();
        let negative = t == "-" && tokens.get(i + 1).is_some_and(|n| is_digits(n.as_ref()));
        if is_digits(t) || negative {
            let mut num = t.to_string();
            i += 1;
            while i < tokens.len() && is_digits(tokens[i].as_ref()) {
                num.push_str(tokens[i].as_ref());
                i += 1;
            }
            out.push(num);
            continue;
        }
        out.push(t.to_string());
        i += 1;
    }

    out
}

pub fn format_line<S: AsRef<str>>(tokens: &[S]) -> String {
    let merged = merge_numbers(tokens);
    let mut out = String::new();

    for (j, t) in merged.iter().enumerate() {
        if j == 0 {
            out.push_str(t);
            continue;
        }
        // operators fall through to the default single space
        if !no_space_before(t) && merged[j - 1] != "(" {
            out.push(' ');
        }
        out.push_str(t);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_merge() {
        assert_eq!(merge_numbers(&["1", "2", "0", ")"]), vec!["120", ")"]);
        assert_eq!(merge_numbers(&["-", "5", "0"]), vec!["-50"]);
        assert_eq!(merge_numbers(&["-", "x"]), vec!["-", "x"]);
        assert_eq!(merge_numbers(&["v1", "2"]), vec!["v1", "2"]);
    }

    #[test]
    fn call_spacing() {
        let line = format_line(&["Message", "(", "1", "2", ",", "STR[5]", ")", ";"]);
        assert_eq!(line, "Message (12, STR[5]);");
    }

    #[test]
    fn operator_spacing() {
        assert_eq!(format_line(&["int_3", "=", "Random", "(", "1", "0", ")"]), "int_3 = Random (10)");
        assert_eq!(format_line(&["if", "(", "v1", "==", "TRUE", ")"]), "if (v1 == TRUE)");
        assert_eq!(format_line(&["v1", "=", "v1", "-", "1"]), "v1 = v1 -1");
        assert_eq!(format_line(&["a", "&&", "b", "||", "c"]), "a && b || c");
    }

    #[test]
    fn every_operator_is_spaced() {
        for op in SPACED_OPERATORS {
            assert_eq!(format_line(&["a", op, "b"]), format!("a {} b", op));
        }
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(format_line::<&str>(&[]), "");
        assert_eq!(format_line(&["endif"]), "endif");
    }

    #[test]
    fn pure() {
        let toks = ["x", "<=", "4", "2"];
        assert_eq!(format_line(&toks), format_line(&toks));
        assert_eq!(format_line(&toks), "x <= 42");
    }
}
