//! Clause marker detection for enumerated terms

/// Check if a character is in the Devanagari block
pub fn is_devanagari_char(c: char) -> bool {
    // Devanagari Unicode range: U+0900 to U+097F
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Check if a character is a Devanagari digit (० to ९)
pub fn is_devanagari_digit(c: char) -> bool {
    ('\u{0966}'..='\u{096F}').contains(&c)
}

fn digit_value(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        c.to_digit(10)
    } else if is_devanagari_digit(c) {
        Some(c as u32 - 0x0966)
    } else {
        None
    }
}

/// Number of the enumerated clause a line opens, if any
///
/// A clause opens with optional leading whitespace, one or more digits
/// (ASCII or Devanagari) and a closing parenthesis, e.g. `3)` or `१२)`.
pub fn clause_number(line: &str) -> Option<u32> {
    let mut chars = line.trim_start().chars();
    let mut number: u32 = 0;
    let mut digits = 0;

    for c in chars.by_ref() {
        match digit_value(c) {
            Some(d) => {
                number = number.saturating_mul(10).saturating_add(d);
                digits += 1;
            }
            None if c == ')' && digits > 0 => return Some(number),
            None => return None,
        }
    }

    None
}

/// Check if a line starts a new enumerated clause
pub fn opens_clause(line: &str) -> bool {
    clause_number(line).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_devanagari_char() {
        assert!(is_devanagari_char('क'));
        assert!(is_devanagari_char('१'));
        assert!(!is_devanagari_char('A'));
        assert!(!is_devanagari_char('ก'));
    }

    #[test]
    fn test_ascii_markers() {
        assert_eq!(clause_number("3) Pay on time"), Some(3));
        assert_eq!(clause_number("   12) Indented"), Some(12));
        assert_eq!(clause_number("10)"), Some(10));
    }

    #[test]
    fn test_devanagari_markers() {
        assert_eq!(clause_number("१२) नियम"), Some(12));
        assert_eq!(clause_number("४) अटी"), Some(4));
    }

    #[test]
    fn test_non_markers() {
        assert!(!opens_clause("continued text 3) later"));
        assert!(!opens_clause(") no digits"));
        assert!(!opens_clause("3. dotted"));
        assert!(!opens_clause("3"));
        assert!(!opens_clause(""));
    }
}
