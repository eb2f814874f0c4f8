pub trait ExistsExtension<T> {
    fn exists<P: FnOnce(&T) -> bool>(&self, predicate: P) -> bool;
}

impl <T> ExistsExtension<T> for Option<T> {
    fn exists<P: FnOnce(&T) -> bool>(&self, predicate: P) -> bool {
        match self {
            Some(value) => predicate(value),
            None => false,
        }
    }
}

/// Collapses every run of whitespace into a single space and trims the ends.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<&str>>().join(" ")
}

/// Treats an empty string the same as a missing one.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists() {
        assert!(Some(3).exists(|v| *v == 3));
        assert!(!Some(3).exists(|v| *v == 4));
        assert!(!None::<i32>.exists(|_| true));
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  1425   Store\tSt \n"), "1425 Store St");
        assert_eq!(collapse_whitespace(" \t "), "");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("".into())), None);
        assert_eq!(non_blank(Some("BC".into())), Some("BC".to_owned()));
        assert_eq!(non_blank(None), None);
    }
}
