//! Schema identifier derivation.
//!
//! Administrator-authored titles and field names become schema identifiers:
//! PascalCase for type names, camelCase for field names, invalid characters
//! stripped, digit-led leading words dropped. Derivation returns `None`
//! when nothing usable remains — the caller turns that into a diagnostic.

/// Root schema type names field groups may never claim.
pub const RESERVED_TYPE_NAMES: &[&str] = &["Query", "Mutation", "Subscription"];

pub fn is_reserved_type_name(name: &str) -> bool {
    RESERVED_TYPE_NAMES.iter().any(|r| r.eq_ignore_ascii_case(name))
}

/// `true` for a valid schema field name: letters/digits/underscore, not
/// starting with a digit.
pub fn is_valid_field_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Derive a PascalCase schema type name, e.g. `"Hero banner"` → `"HeroBanner"`.
pub fn schema_type_name(raw: &str) -> Option<String> {
    let name: String = usable_words(raw).map(capitalize).collect();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Derive a camelCase schema field name, e.g. `"Sub Title"` → `"subTitle"`.
pub fn schema_field_name(raw: &str) -> Option<String> {
    let mut words = usable_words(raw);
    let mut name = words.next()?.to_ascii_lowercase();
    for word in words {
        name.push_str(&capitalize(word));
    }
    Some(name)
}

fn split_words(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
}

/// Words usable at the front of an identifier: leading words starting with
/// a digit are dropped whole (`"2nd headline"` → `headline`), so the
/// derived name never starts with a digit or a mangled word fragment.
fn usable_words(raw: &str) -> impl Iterator<Item = &str> {
    split_words(raw).skip_while(|w| w.starts_with(|c: char| c.is_ascii_digit()))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_name_pascal_cases_words() {
        assert_eq!(schema_type_name("Hero banner").as_deref(), Some("HeroBanner"));
        assert_eq!(schema_type_name("hero").as_deref(), Some("Hero"));
        assert_eq!(schema_type_name("sub_title").as_deref(), Some("SubTitle"));
    }

    #[test]
    fn type_name_strips_invalid_characters() {
        assert_eq!(
            schema_type_name("Hero! (v2)").as_deref(),
            Some("HeroV2")
        );
    }

    #[test]
    fn type_name_drops_digit_led_leading_words() {
        assert_eq!(schema_type_name("2 Columns").as_deref(), Some("Columns"));
        assert_eq!(schema_type_name("2nd Banner").as_deref(), Some("Banner"));
        assert_eq!(schema_type_name("123").as_deref(), None);
        // Digit-led words later in the name survive intact
        assert_eq!(schema_type_name("Hero 2x").as_deref(), Some("Hero2x"));
    }

    #[test]
    fn type_name_empty_input_is_none() {
        assert_eq!(schema_type_name(""), None);
        assert_eq!(schema_type_name("!!!"), None);
    }

    #[test]
    fn field_name_camel_cases_words() {
        assert_eq!(schema_field_name("Hero").as_deref(), Some("hero"));
        assert_eq!(schema_field_name("sub_title").as_deref(), Some("subTitle"));
        assert_eq!(schema_field_name("Call To Action").as_deref(), Some("callToAction"));
    }

    #[test]
    fn field_name_drops_digit_led_leading_words() {
        assert_eq!(schema_field_name("2nd headline").as_deref(), Some("headline"));
        assert_eq!(schema_field_name("2 column layout").as_deref(), Some("columnLayout"));
        assert_eq!(schema_field_name("42"), None);
    }

    #[test]
    fn reserved_names_case_insensitive() {
        assert!(is_reserved_type_name("Query"));
        assert!(is_reserved_type_name("mutation"));
        assert!(!is_reserved_type_name("QueryHelper"));
    }

    #[test]
    fn field_name_validity() {
        assert!(is_valid_field_name("headline"));
        assert!(is_valid_field_name("_internal"));
        assert!(is_valid_field_name("line2"));
        assert!(!is_valid_field_name("2lines"));
        assert!(!is_valid_field_name("with-dash"));
        assert!(!is_valid_field_name(""));
    }
}
