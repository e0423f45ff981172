//! Identifier case utilities.

/// Check whether a string is a snake_case identifier (e.g., "user_name").
///
/// The first segment must start with a lowercase letter; every following
/// segment is a non-empty run of lowercase letters or digits introduced by a
/// single underscore. A single word without an underscore is not snake_case.
pub fn is_snake_case(s: &str) -> bool {
    let mut segments = s.split('_');

    let head_ok = segments.next().is_some_and(|head| {
        let mut chars = head.chars();
        chars.next().is_some_and(|c| c.is_ascii_lowercase())
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    });
    if !head_ok {
        return false;
    }

    let mut tail_count = 0;
    for segment in segments {
        if segment.is_empty()
            || !segment
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return false;
        }
        tail_count += 1;
    }
    tail_count > 0
}

/// Convert a string to camelCase (e.g., "user_name" -> "userName")
///
/// Only an underscore followed by a lowercase letter is folded; every other
/// character, including an underscore before a digit, is kept as-is.
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == '_' && next.is_ascii_lowercase() => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }
    result
}

/// Convert a string to PascalCase (e.g., "user_name" -> "UserName")
pub fn to_pascal_case(s: &str) -> String {
    let camel = to_camel_case(s);
    let mut chars = camel.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Whether `c` may start a schema identifier.
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Whether `c` may continue a schema identifier.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("user_name"), "userName");
        assert_eq!(to_camel_case("user_profile"), "userProfile");
        assert_eq!(to_camel_case("this_is_a_test"), "thisIsATest");
        assert_eq!(to_camel_case("user_email_address"), "userEmailAddress");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_camel_case_passthrough() {
        assert_eq!(to_camel_case("user"), "user");
        assert_eq!(to_camel_case("userName"), "userName");
        assert_eq!(to_camel_case("UserName"), "UserName");
    }

    #[test]
    fn test_to_camel_case_digit_after_underscore() {
        assert_eq!(to_camel_case("value_1a"), "value_1a");
        assert_eq!(to_camel_case("address_2_line"), "address_2Line");
    }

    #[test]
    fn test_to_camel_case_non_overlapping() {
        assert_eq!(to_camel_case("a__b"), "a_B");
        assert_eq!(to_camel_case("_user"), "User");
        assert_eq!(to_camel_case("user_"), "user_");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("blog_post"), "BlogPost");
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case("UserProfile"), "UserProfile");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_is_snake_case_valid() {
        assert!(is_snake_case("user_name"));
        assert!(is_snake_case("user_profile"));
        assert!(is_snake_case("this_is_a_test"));
        assert!(is_snake_case("user_id"));
        assert!(is_snake_case("value_1a"));
        assert!(is_snake_case("post2_title"));
    }

    #[test]
    fn test_is_snake_case_rejects_single_word() {
        assert!(!is_snake_case("user"));
        assert!(!is_snake_case("name"));
        assert!(!is_snake_case(""));
    }

    #[test]
    fn test_is_snake_case_rejects_other_cases() {
        assert!(!is_snake_case("userName"));
        assert!(!is_snake_case("UserName"));
        assert!(!is_snake_case("USER_NAME"));
        assert!(!is_snake_case("user_Name"));
    }

    #[test]
    fn test_is_snake_case_rejects_bad_underscores() {
        assert!(!is_snake_case("_user_name"));
        assert!(!is_snake_case("user__name"));
        assert!(!is_snake_case("user_name_"));
        assert!(!is_snake_case("1user_name"));
    }

    #[test]
    fn test_converted_snake_case_has_no_underscores() {
        for name in ["user_name", "a_b_c", "post2_title", "created_at"] {
            assert!(is_snake_case(name));
            assert!(!to_camel_case(name).contains('_'));
            let pascal = to_pascal_case(name);
            assert!(!pascal.contains('_'));
            assert!(pascal.starts_with(|c: char| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_identifier_chars() {
        assert!(is_identifier_start('a'));
        assert!(is_identifier_start('_'));
        assert!(!is_identifier_start('1'));
        assert!(is_identifier_char('1'));
        assert!(!is_identifier_char('@'));
    }
}
