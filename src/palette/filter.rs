//! Query filtering over the combined palette.

use super::ColorEntry;

/// Case-insensitive substring match on name or hex. An empty or
/// whitespace-only query passes everything through unchanged; input order is
/// preserved either way. The result is derived fresh on every call, never
/// cached against a stale custom list.
pub fn filter_entries<'a, I>(all: I, query: &str) -> Vec<&'a ColorEntry>
where
    I: IntoIterator<Item = &'a ColorEntry>,
{
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return all.into_iter().collect();
    }
    all.into_iter()
        .filter(|c| c.name.to_lowercase().contains(&q) || c.hex.to_lowercase().contains(&q))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ColorEntry> {
        vec![
            ColorEntry::builtin("Red", "#EF4444"),
            ColorEntry::builtin("Rose", "#F43F5E"),
            ColorEntry::builtin("Blue", "#3B82F6"),
            ColorEntry::custom("Mint", "#33DD99"),
        ]
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let all = sample();
        let got = filter_entries(&all, "");
        assert_eq!(got.len(), all.len());
        assert!(got.iter().zip(all.iter()).all(|(a, b)| *a == b));

        let got = filter_entries(&all, "   ");
        assert_eq!(got.len(), all.len());
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let all = sample();
        let got = filter_entries(&all, "rO");
        let names: Vec<_> = got.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Rose"]);
    }

    #[test]
    fn test_matches_hex_substring() {
        let all = sample();
        let got = filter_entries(&all, "3dd9");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].name, "Mint");
    }

    #[test]
    fn test_order_preserved_across_matches() {
        let all = sample();
        // 'e' hits Red, Rose, Blue (names) in input order.
        let got = filter_entries(&all, "e");
        let names: Vec<_> = got.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Red", "Rose", "Blue"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let all = sample();
        assert!(filter_entries(&all, "zzz").is_empty());
    }
}
