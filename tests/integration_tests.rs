use levtrie::prelude::*;

fn matches(pairs: &[(&str, usize)]) -> Matches {
    pairs.iter().map(|(term, d)| (term.to_string(), *d)).collect()
}

fn both_algorithms(trie: &FuzzyTrie, query: &str, max_distance: usize) -> Matches {
    let recursive = trie.fuzzy_match_with(query, max_distance, Algorithm::Recursive);
    let work_stack = trie.fuzzy_match_with(query, max_distance, Algorithm::WorkStack);
    assert_eq!(
        recursive, work_stack,
        "strategies disagree for {:?} at distance {}",
        query, max_distance
    );
    recursive
}

#[test]
fn test_contains_word() {
    let mut trie = FuzzyTrie::new();
    trie.insert("Prinzhorn");

    assert!(trie.contains("Prinzhorn"));
    // Prefix
    assert!(!trie.contains("Prinz"));
    // Suffix
    assert!(!trie.contains("horn"));
    // Case sensitive
    assert!(!trie.contains("prinzhorn"));
    // Diacritics
    assert!(!trie.contains("Prinzhôrn"));
    assert!(!trie.contains("prinzhörn"));
}

#[test]
fn test_prefix_indexed_independently() {
    let trie = FuzzyTrie::from_terms(["Prinzhorn", "Prinz"]);
    assert!(trie.contains("Prinz"));
    assert!(trie.contains("Prinzhorn"));
    assert!(!trie.contains("Prinzh"));
}

#[test]
fn test_fresh_index_contains_nothing() {
    let trie = FuzzyTrie::new();
    assert!(!trie.contains(""));
    assert!(!trie.contains("a"));
    assert!(trie.fuzzy_match("", 3).is_empty());
    assert!(trie.fuzzy_match("abc", 3).is_empty());
}

#[test]
fn test_case_variants() {
    let trie = FuzzyTrie::from_terms(["Prinzhorn", "prinzhorn"]);
    let results = both_algorithms(&trie, "Prinzhorn", 2);
    assert_eq!(results, matches(&[("Prinzhorn", 0), ("prinzhorn", 1)]));
}

#[test]
fn test_diacritic_substitution() {
    let trie = FuzzyTrie::from_terms(["Prinzhorn", "prinzhorn", "Crème fraîche", "👻💩💩👻"]);
    let results = both_algorithms(&trie, "Creme fraîche", 2);
    assert_eq!(results, matches(&[("Crème fraîche", 1)]));
}

#[test]
fn test_emoji_insertion() {
    let trie = FuzzyTrie::from_terms(["Prinzhorn", "prinzhorn", "Crème fraîche", "👻💩💩👻"]);
    let results = both_algorithms(&trie, "👻💩💩💩👻", 2);
    assert_eq!(results, matches(&[("👻💩💩👻", 1)]));
}

#[test]
fn test_zero_budget_is_exact_lookup() {
    let trie = FuzzyTrie::from_terms(["abcd", "abce", "xyz"]);
    assert_eq!(both_algorithms(&trie, "abcd", 0), matches(&[("abcd", 0)]));
    assert!(both_algorithms(&trie, "abc", 0).is_empty());
    assert!(both_algorithms(&trie, "abcde", 0).is_empty());
}

#[test]
fn test_query_shorter_than_only_term() {
    let trie = FuzzyTrie::from_terms(["abcd"]);
    assert!(both_algorithms(&trie, "abc", 0).is_empty());
    assert_eq!(both_algorithms(&trie, "abc", 1), matches(&[("abcd", 1)]));
}

#[test]
fn test_trailing_insertions() {
    let trie = FuzzyTrie::from_terms(["test", "tests", "testing"]);
    let results = both_algorithms(&trie, "test", 3);
    assert_eq!(results, matches(&[("test", 0), ("tests", 1), ("testing", 3)]));

    let results = both_algorithms(&trie, "test", 2);
    assert_eq!(results, matches(&[("test", 0), ("tests", 1)]));
}

#[test]
fn test_empty_query_reaches_short_terms() {
    let trie = FuzzyTrie::from_terms(["a", "ab", "abc"]);
    assert_eq!(both_algorithms(&trie, "", 2), matches(&[("a", 1), ("ab", 2)]));
}

#[test]
fn test_leading_deletions_and_insertions() {
    let trie = FuzzyTrie::from_terms(["word", "sword", "rd"]);
    let results = both_algorithms(&trie, "word", 2);
    assert_eq!(results, matches(&[("word", 0), ("sword", 1), ("rd", 2)]));
}

#[test]
fn test_no_transposition_discount() {
    let trie = FuzzyTrie::from_terms(["tset"]);
    assert!(both_algorithms(&trie, "test", 1).is_empty());
    assert_eq!(both_algorithms(&trie, "test", 2), matches(&[("tset", 2)]));
}

#[test]
fn test_high_distance_returns_all_terms() {
    let terms = ["foo", "bar", "baz", "qux", "quo"];
    let trie = FuzzyTrie::from_terms(terms);
    let results = both_algorithms(&trie, "quuo", 4);

    assert_eq!(results.len(), terms.len());
    for term in terms {
        assert_eq!(results[term], standard_distance("quuo", term), "{}", term);
    }
}

#[test]
fn test_query_longer_than_term() {
    let query = "aahaara";
    let term = "hr";
    let actual_distance = standard_distance(query, term);
    let trie = FuzzyTrie::from_terms([term]);

    assert!(both_algorithms(&trie, query, actual_distance - 1).is_empty());
    assert_eq!(
        both_algorithms(&trie, query, actual_distance),
        matches(&[(term, actual_distance)])
    );
}

#[test]
fn test_results_within_budget() {
    let trie = FuzzyTrie::from_terms(["kitten", "sitting", "mitten", "bitten", "knitting", "kit"]);
    for max_distance in 0..=3 {
        for (term, distance) in both_algorithms(&trie, "kitten", max_distance) {
            assert!(distance <= max_distance);
            assert_eq!(distance, standard_distance("kitten", &term));
        }
    }
}

#[test]
fn test_reinsert_does_not_change_results() {
    let mut once = FuzzyTrie::new();
    once.extend(["alpha", "alps", "alpine"]);
    let mut twice = once.clone();
    twice.extend(["alpha", "alps", "alpine"]);

    assert_eq!(once.len(), twice.len());
    assert_eq!(once.node_count(), twice.node_count());
    for query in ["alpha", "alp", "alpen", ""] {
        assert_eq!(once.fuzzy_match(query, 2), twice.fuzzy_match(query, 2));
        assert_eq!(once.contains(query), twice.contains(query));
    }
}

#[test]
fn test_accumulator_keeps_minimum() {
    let trie = FuzzyTrie::from_terms(["hello", "help", "hell"]);
    let mut acc = Matches::default();

    trie.fuzzy_match_into(&mut acc, "helo", 1);
    assert_eq!(acc, matches(&[("hello", 1), ("help", 1), ("hell", 1)]));

    trie.fuzzy_match_into(&mut acc, "help", 2);
    assert_eq!(acc, matches(&[("hello", 1), ("help", 0), ("hell", 1)]));

    // A worse distance from a later query does not overwrite
    trie.fuzzy_match_into(&mut acc, "hxxx", 3);
    assert_eq!(acc["help"], 0);
    assert_eq!(acc["hello"], 1);
}

#[test]
fn test_candidates_sorted_by_distance() {
    let trie = FuzzyTrie::from_terms(["password", "password1", "passw0rd", "pass", "p@ssword"]);
    let candidates = trie.candidates("password", 1);
    let ranked: Vec<(&str, usize)> = candidates
        .iter()
        .map(|c| (c.term.as_str(), c.distance))
        .collect();

    assert_eq!(
        ranked,
        vec![
            ("password", 0),
            ("p@ssword", 1),
            ("passw0rd", 1),
            ("password1", 1)
        ]
    );
}

#[test]
fn test_dictionary_trait_generic_search() {
    fn search_any<D: Dictionary>(dict: &D, query: &str) -> Matches {
        levtrie::search::fuzzy_match(dict.root(), query, 1, Algorithm::WorkStack)
    }

    let trie = FuzzyTrie::from_terms(["cat", "cart", "dog"]);
    assert_eq!(search_any(&trie, "cat"), matches(&[("cat", 0), ("cart", 1)]));
    assert_eq!(Dictionary::len(&trie), 3);
}

#[test]
fn test_unbounded_budget_returns_every_term() {
    let terms = ["ab", "foo", "bar", "baz", "quux", "Crème"];
    let trie = FuzzyTrie::from_terms(terms);

    assert_eq!(both_algorithms(&FuzzyTrie::from_terms(["ab"]), "x", usize::MAX), matches(&[("ab", 2)]));

    for query in ["x", "", "quuo", "ab", "creme"] {
        let results = both_algorithms(&trie, query, usize::MAX);
        assert_eq!(results.len(), terms.len(), "query {:?}", query);
        for term in terms {
            assert_eq!(results[term], standard_distance(query, term), "{:?} vs {}", query, term);
        }
    }
}

#[test]
fn test_budget_far_above_lengths() {
    let trie = FuzzyTrie::from_terms(["kitten", "sitting", "k"]);
    let wide = both_algorithms(&trie, "kit", 13);
    assert_eq!(wide, both_algorithms(&trie, "kit", usize::MAX));
    assert_eq!(wide, matches(&[("kitten", 3), ("sitting", 5), ("k", 2)]));
}

/// A term of `len` code points with no two neighbors equal.
fn long_term(len: usize) -> String {
    (0..len)
        .map(|i| char::from_u32(0x4E00 + (i % 20_000) as u32).unwrap())
        .collect()
}

#[test]
fn test_long_query_does_not_exhaust_native_stack() {
    let term = long_term(50_000);
    let trie = FuzzyTrie::from_terms([term.as_str(), "short"]);

    let mut typo: Vec<char> = term.chars().collect();
    typo[25_000] = 'x';
    let typo: String = typo.into_iter().collect();

    // The default strategy is recursive
    assert_eq!(trie.fuzzy_match(&term, 1), matches(&[(term.as_str(), 0)]));
    assert_eq!(trie.fuzzy_match(&typo, 1), matches(&[(term.as_str(), 1)]));
    assert_eq!(
        trie.fuzzy_match_with(&typo, 1, Algorithm::Recursive),
        trie.fuzzy_match_with(&typo, 1, Algorithm::WorkStack)
    );
    assert!(trie.fuzzy_match(&term[..3], 1).is_empty());
}
