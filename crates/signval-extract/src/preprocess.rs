//! OCR line cleanup ahead of name-candidate generation.

/// Lines that are signage boilerplate rather than names (compared lowercase).
pub(crate) const STOP_LINES: &[&str] = &[
    "our", "menu", "hours", "open", "closed", "welcome", "visit", "call", "phone", "email",
];

/// Split raw OCR text into trimmed candidate lines, dropping noise.
///
/// Reading order is preserved. A line is dropped when it is shorter than two
/// characters, all digits, a bare `&` or `-`, has no ASCII letter, starts
/// with `www`/`http`, contains `@`, or is a stop word.
#[must_use]
pub fn preprocess_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| is_candidate_line(line))
        .map(str::to_owned)
        .collect()
}

fn is_candidate_line(line: &str) -> bool {
    if line.chars().count() < 2 {
        return false;
    }
    if line == "&" || line == "-" {
        return false;
    }
    if line.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if !line.bytes().any(|b| b.is_ascii_alphabetic()) {
        return false;
    }

    let lower = line.to_lowercase();
    if lower.starts_with("www") || lower.starts_with("http") || lower.contains('@') {
        return false;
    }

    !STOP_LINES.contains(&lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(preprocess_lines("").is_empty());
        assert!(preprocess_lines("\n\n   \n").is_empty());
    }

    #[test]
    fn trims_and_preserves_order() {
        let lines = preprocess_lines("  GLORIA JEAN'S \nCOFFEE SHOP\n 123 Main St");
        assert_eq!(lines, vec!["GLORIA JEAN'S", "COFFEE SHOP", "123 Main St"]);
    }

    #[test]
    fn drops_pure_digits_and_symbols() {
        let lines = preprocess_lines("12345\n&\n-\n$$ 99\nTaco Town");
        assert_eq!(lines, vec!["Taco Town"]);
    }

    #[test]
    fn drops_web_and_email_lines() {
        let lines =
            preprocess_lines("www.tacotown.com\nHTTPS://tacotown.com\nhello@tacotown.com\nTaco Town");
        assert_eq!(lines, vec!["Taco Town"]);
    }

    #[test]
    fn drops_stop_words_case_insensitively() {
        let lines = preprocess_lines("OPEN\nWelcome\nmenu\nOpen Late\nTaco Town");
        assert_eq!(lines, vec!["Open Late", "Taco Town"]);
    }

    #[test]
    fn drops_single_character_lines() {
        let lines = preprocess_lines("A\nBB");
        assert_eq!(lines, vec!["BB"]);
    }
}
