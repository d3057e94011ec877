use regex::Regex;
use std::sync::LazyLock;

/// Textual UUID v4: 8-4-4-4-12 hex groups, version nibble `4`, variant nibble `8`..`b`.
pub const UUID_V4_PATTERN: &str =
    r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";

/// Example shown to clients when an identifier is rejected.
pub const UUID_V4_EXAMPLE: &str = "550e8400-e29b-41d4-a716-446655440000";

static UUID_V4: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UUID_V4_PATTERN).expect("UUID v4 pattern is a valid regex"));

/// Returns true when `id` is a version 4 UUID in its hyphenated form.
///
/// Hex digits are matched case-insensitively. Nothing is trimmed, so
/// surrounding whitespace or a trailing newline makes the value invalid.
pub fn is_uuid_v4(id: &str) -> bool {
    UUID_V4.is_match(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_v4_is_accepted() {
        for _ in 0..64 {
            let id = ::uuid::Uuid::new_v4().to_string();
            assert!(is_uuid_v4(&id), "{id} should be accepted");
            assert!(is_uuid_v4(&id.to_uppercase()));
        }
    }

    #[test]
    fn example_is_valid() {
        assert!(is_uuid_v4(UUID_V4_EXAMPLE));
    }

    #[test]
    fn wrong_version_nibble_is_rejected() {
        for version in ['0', '1', '2', '3', '5', '6', '7', '8', 'f'] {
            let id = format!("550e8400-e29b-{version}1d4-a716-446655440000");
            assert!(!is_uuid_v4(&id), "version {version} should be rejected");
        }
    }

    #[test]
    fn wrong_variant_nibble_is_rejected() {
        for variant in ['0', '3', '7', 'c', 'd', 'e', 'f', 'C'] {
            let id = format!("550e8400-e29b-41d4-{variant}716-446655440000");
            assert!(!is_uuid_v4(&id), "variant {variant} should be rejected");
        }
        for variant in ['8', '9', 'a', 'b', 'A', 'B'] {
            let id = format!("550e8400-e29b-41d4-{variant}716-446655440000");
            assert!(is_uuid_v4(&id), "variant {variant} should be accepted");
        }
    }

    #[test]
    fn malformed_shapes_are_rejected() {
        let cases = [
            "",
            "123",
            "not-a-uuid",
            "550e8400e29b41d4a716446655440000",
            "{550e8400-e29b-41d4-a716-446655440000}",
            "550e8400-e29b-41d4-a716-44665544000",
            "550e8400-e29b-41d4-a716-4466554400000",
            "550e8400-e29b-41d4-a716-44665544000g",
            " 550e8400-e29b-41d4-a716-446655440000",
            "550e8400-e29b-41d4-a716-446655440000\n",
            "urn:uuid:550e8400-e29b-41d4-a716-446655440000",
        ];
        for case in cases {
            assert!(!is_uuid_v4(case), "{case:?} should be rejected");
        }
    }
}
