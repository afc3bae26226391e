#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Split {
    Letters,
    Words,
}

/// Splits copy into the pieces a staggered reveal animates one by one.
/// Spaces inside letter splits become non-breaking so the layout holds.
pub fn split_text(text: &str, split: Split) -> Vec<String> {
    match split {
        Split::Words => text.split_whitespace().map(str::to_string).collect(),
        Split::Letters => text
            .chars()
            .map(|c| if c == ' ' { '\u{a0}'.to_string() } else { c.to_string() })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_text("We craft  cinematic experiences.", Split::Words),
            vec!["We", "craft", "cinematic", "experiences."]
        );
    }

    #[test]
    fn test_split_letters_keeps_spaces() {
        assert_eq!(split_text("a b", Split::Letters), vec!["a", "\u{a0}", "b"]);
        assert!(split_text("", Split::Letters).is_empty());
    }
}
