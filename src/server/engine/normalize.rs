/// Title-cases a city, team or arena name.
///
/// Splits on whitespace, lower-cases every token and upper-cases its first character, then
/// joins the tokens with single spaces. Applying it twice yields the same result.
pub fn normalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|token| capitalize_first(&token.to_lowercase()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-cases the first character and leaves the rest untouched.
///
/// A character whose upper-case form spans several characters (`ß`) is kept as is.
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => {
            let mut upper = first.to_uppercase();
            let head = match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => first,
            };
            std::iter::once(head).chain(chars).collect()
        }
        None => String::new(),
    }
}

/// Trims a person's name and upper-cases its first character.
pub fn format_person_name(raw: &str) -> String {
    capitalize_first(raw.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_mixed_tokens() {
        assert_eq!(normalize_name("mc DAVID"), "Mc David");
        assert_eq!(normalize_name("new YORK city"), "New York City");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize_name("  sofia\t  west  "), "Sofia West");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn is_idempotent() {
        for raw in ["mc DAVID", "new YORK city", "ÉCOLE de PARIS", "x", "Already Fine", "ßa", "ﬁeld day"] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn handles_non_ascii_letters() {
        assert_eq!(normalize_name("пловдив"), "Пловдив");
        assert_eq!(normalize_name("ßa"), "ßa");
    }

    #[test]
    fn formats_person_names() {
        assert_eq!(format_person_name("  ivan "), "Ivan");
        assert_eq!(format_person_name("mcDonald"), "McDonald");
        assert_eq!(format_person_name(""), "");
    }
}
