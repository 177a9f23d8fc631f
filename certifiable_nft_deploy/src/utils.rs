/// PRIVATE_KEY holds one or more hex keys, comma separated. Stray whitespace
/// and 0x prefixes are tolerated, empty entries are dropped.
pub fn parse_private_keys(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|key| key.trim().trim_start_matches("0x").to_owned())
        .filter(|key| !key.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_private_keys;

    #[test]
    fn splits_on_commas_and_trims() {
        let keys = parse_private_keys("aa11, 0xbb22 ,cc33");
        assert_eq!(keys, vec!["aa11", "bb22", "cc33"]);
    }

    #[test]
    fn single_key() {
        assert_eq!(parse_private_keys("deadbeef"), vec!["deadbeef"]);
    }

    #[test]
    fn empty_entries_are_dropped() {
        assert!(parse_private_keys("").is_empty());
        assert_eq!(parse_private_keys("aa11,,").len(), 1);
    }
}
