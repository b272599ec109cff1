//! Input rules shared by the catalog managers

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationErrors;

/// Letters, digits and spaces, 2 to 25 characters.
static CATALOG_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 ]{2,25}$").expect("catalog name pattern"));

/// Name rule for services and bundles.
pub fn is_valid_catalog_name(name: &str) -> bool {
    CATALOG_NAME.is_match(name)
}

pub fn is_positive_id(id: i32) -> bool {
    id > 0
}

/// Flattens `validator` errors into a single message, ordered by field name.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let messages: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{}: {}", field, e.code))
            })
        })
        .collect();

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_digits_and_spaces() {
        assert!(is_valid_catalog_name("Voice Calls 24"));
        assert!(is_valid_catalog_name("ab"));
        assert!(is_valid_catalog_name("Abcdefghijklmnopqrstuvwxy"));
    }

    #[test]
    fn rejects_symbols() {
        for name in ["OIT&(&($@&(@$($@", "MDUY**63974((*(Y^#", "data-pack", "sms_500", "caf\u{e9}"] {
            assert!(!is_valid_catalog_name(name), "{name} should be rejected");
        }
    }

    #[test]
    fn enforces_length_bounds() {
        assert!(!is_valid_catalog_name("e"));
        assert!(!is_valid_catalog_name(""));
        assert!(!is_valid_catalog_name("Ajhsjahfdjhsdjhkshdkfhdslsasdasdgsg"));
        assert!(!is_valid_catalog_name("Abcdefghijklmnopqrstuvwxyz"));
    }
}
