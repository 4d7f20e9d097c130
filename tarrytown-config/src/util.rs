pub fn parse_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|part| {
            let trimmed = part.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Strip trailing slashes from a public URL prefix. `"/videos/"` becomes
/// `"/videos"`; a bare `"/"` becomes the empty string, which validation
/// rejects.
pub fn normalize_prefix(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_skips_blank_items() {
        assert_eq!(parse_csv(" tapes, ,clips ,"), vec!["tapes", "clips"]);
    }

    #[test]
    fn bool_accepts_common_spellings() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn prefix_loses_trailing_slashes() {
        assert_eq!(normalize_prefix("/videos//"), "/videos");
        assert_eq!(normalize_prefix("/"), "");
    }
}
