//! Name conversions: catalog keys from model names, display titles from field names.

/// Catalog key for a model name: case-folded to lowercase.
/// e.g. "Customer" -> "customer", "OrderLine" -> "orderline"
pub fn catalog_key(name: &str) -> String {
    name.to_lowercase()
}

/// Names with a leading underscore are internal and never published.
pub fn is_internal(name: &str) -> bool {
    name.starts_with('_')
}

/// Title for a snake_case identifier: words split on '_' and capitalized.
/// e.g. "first_name" -> "First Name", "id" -> "Id"
pub fn to_title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split('_').filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_key_folds_case() {
        assert_eq!(catalog_key("OrderLine"), "orderline");
        assert_eq!(catalog_key("order"), "order");
    }

    #[test]
    fn internal_names() {
        assert!(is_internal("_Draft"));
        assert!(!is_internal("Draft_"));
    }

    #[test]
    fn titles_from_snake_case() {
        assert_eq!(to_title("first_name"), "First Name");
        assert_eq!(to_title("id"), "Id");
        assert_eq!(to_title("created__at"), "Created At");
    }
}
