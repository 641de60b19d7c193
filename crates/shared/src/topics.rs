/// Split a raw comma-separated topic string into normalized search terms.
///
/// Each segment is trimmed and lowercased; empty segments are dropped, so
/// `"Finance, ,Sports"` yields `["finance", "sports"]`. An empty or
/// whitespace-only input yields an empty list.
pub fn parse_topics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|segment| segment.trim().to_lowercase())
        .filter(|topic| !topic.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_topics() {
        assert_eq!(parse_topics("finance, sports"), vec!["finance", "sports"]);
    }

    #[test]
    fn test_parse_lowercases_and_trims() {
        assert_eq!(
            parse_topics("  Architecture ,FINANCE"),
            vec!["architecture", "finance"]
        );
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        assert_eq!(parse_topics("finance,, ,sports,"), vec!["finance", "sports"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_topics("").is_empty());
        assert!(parse_topics("   ").is_empty());
        assert!(parse_topics(",,,").is_empty());
    }

    #[test]
    fn test_parse_keeps_inner_spaces() {
        assert_eq!(parse_topics("machine learning"), vec!["machine learning"]);
    }
}
