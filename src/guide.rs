/// Material -> disposal tip, in display order.
pub const TIPS: [(&str, &str); 6] = [
    ("plastic", "Recycle bottles"),
    ("glass", "Separate by color"),
    ("metal", "Aluminium is recyclable"),
    ("organic", "Compostable"),
    ("paper", "Recycle clean paper"),
    ("battery", "Take to recycling center"),
];

/// Lists every tip whose key contains the lowercased query.
///
/// A blank query yields nothing. The query itself is only lowercased, so
/// surrounding spaces still take part in the match.
pub fn search_material(query: &str) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    TIPS.iter()
        .filter(|(key, _)| key.contains(&needle))
        .map(|(key, tip)| format!("{}: {}", key.to_uppercase(), tip))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_queries_return_nothing() {
        assert!(search_material("").is_empty());
        assert!(search_material("   ").is_empty());
    }

    #[test]
    fn partial_key_matches_single_entry() {
        assert_eq!(
            search_material("met"),
            vec!["METAL: Aluminium is recyclable".to_string()]
        );
    }

    #[test]
    fn query_is_case_insensitive() {
        assert_eq!(search_material("GLA"), vec!["GLASS: Separate by color".to_string()]);
    }

    #[test]
    fn multiple_matches_keep_table_order() {
        let found = search_material("a");
        assert_eq!(
            found,
            vec![
                "PLASTIC: Recycle bottles",
                "GLASS: Separate by color",
                "METAL: Aluminium is recyclable",
                "ORGANIC: Compostable",
                "PAPER: Recycle clean paper",
                "BATTERY: Take to recycling center",
            ]
        );

        assert_eq!(
            search_material("r"),
            vec![
                "ORGANIC: Compostable",
                "PAPER: Recycle clean paper",
                "BATTERY: Take to recycling center",
            ]
        );
    }

    #[test]
    fn padded_query_is_not_trimmed_for_matching() {
        assert!(search_material(" metal").is_empty());
    }

    #[test]
    fn unknown_material_returns_nothing() {
        assert!(search_material("wood").is_empty());
    }
}
