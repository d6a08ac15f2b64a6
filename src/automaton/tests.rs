#![cfg(test)]

use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::thread;

use proptest::collection::vec;
use proptest::prelude::*;

use super::*;
use crate::alphabet::Alphabet;
use crate::trie::{InvalidSymbolError, NodeId, PatternId};

fn automaton_of(words: &[&str]) -> Automaton {
    Automaton::from_patterns(Alphabet::LOWERCASE, words).expect("test patterns should be valid")
}

/// Runs a search, resolving every match to its position and pattern.
fn found(automaton: &Automaton, text: &str) -> Vec<(usize, String)> {
    automaton
        .search(text)
        .expect("automaton should be built")
        .map(|m| {
            let pattern = automaton.pattern(m.pattern()).expect("matches should have known ids");
            (m.position(), String::from_utf8_lossy(pattern).into_owned())
        })
        .collect()
}

fn expected(matches: &[(usize, &str)]) -> Vec<(usize, String)> {
    matches.iter().map(|(pos, word)| (*pos, word.to_string())).collect()
}

/// Every node of the trie along with the prefix it represents, found by a depth-first walk.
fn prefixes(automaton: &Automaton) -> Vec<(NodeId, Vec<u8>)> {
    let alphabet = automaton.alphabet();
    let mut result = Vec::new();
    let mut stack = vec![(NodeId::ROOT, Vec::new())];

    while let Some((node, prefix)) = stack.pop() {
        for (symbol, child) in automaton.children(node).iter().enumerate() {
            if let Some(child) = child {
                let mut extended = prefix.clone();
                extended.extend(alphabet.symbol(symbol));
                stack.push((*child, extended));
            }
        }
        result.push((node, prefix));
    }

    result
}

/// The node for the longest proper suffix of `prefix` that is also in the trie, found the slow
/// way.
fn longest_suffix_node(automaton: &Automaton, prefix: &[u8]) -> NodeId {
    (1..prefix.len())
        .find_map(|start| automaton.find_node(&prefix[start..]))
        .unwrap_or(NodeId::ROOT)
}

/// Every occurrence of every pattern, found by checking each pattern at each position. Ordered
/// the same way as a search: by end position, then longest first.
fn naive_search(patterns: &[String], text: &str) -> Vec<(usize, String)> {
    let distinct: BTreeSet<&String> = patterns.iter().collect();
    let mut result = Vec::new();

    for end in 0..text.len() {
        for pattern in &distinct {
            if text[..=end].ends_with(pattern.as_str()) {
                result.push((end, pattern.to_string()));
            }
        }
    }

    result.sort_by_key(|(end, pattern)| (*end, Reverse(pattern.len())));
    result
}

#[test]
fn test_overlapping_matches() {
    let automaton = automaton_of(&["he", "she", "his", "hers"]);

    assert_eq!(
        found(&automaton, "ahishers"),
        expected(&[(3, "his"), (5, "she"), (5, "he"), (7, "hers")]),
        "Every occurrence should be reported, including ones nested inside longer matches."
    );
}

#[test]
fn test_repeated_matches() {
    let automaton = automaton_of(&["abc", "bc", "cabc"]);

    assert_eq!(
        found(&automaton, "abcabcabc"),
        expected(&[
            (2, "abc"), (2, "bc"),
            (5, "cabc"), (5, "abc"), (5, "bc"),
            (8, "cabc"), (8, "abc"), (8, "bc"),
        ]),
        "Repeated occurrences should all be reported, longest first at each position."
    );
}

#[test]
fn test_single_symbol_patterns() {
    let automaton = automaton_of(&["a", "aa"]);

    assert_eq!(
        found(&automaton, "aaa"),
        expected(&[(0, "a"), (1, "aa"), (1, "a"), (2, "aa"), (2, "a")]),
        "Single symbol patterns should behave like any other pattern."
    );

    let node = automaton.find_node("a").unwrap();
    assert_eq!(automaton.failure_link(node), Some(NodeId::ROOT));
    let node = automaton.find_node("aa").unwrap();
    assert_eq!(
        automaton.failure_link(node),
        automaton.find_node("a"),
        "A run of one symbol should fall back one symbol at a time."
    );
}

#[test]
fn test_prefix_patterns() {
    let automaton = automaton_of(&["hers", "he", "h"]);

    assert_eq!(
        found(&automaton, "hhers"),
        expected(&[(0, "h"), (1, "h"), (2, "he"), (4, "hers")]),
        "Patterns which are prefixes of other patterns should be reported on the way through."
    );
}

#[test]
fn test_empty_inputs() {
    let automaton = automaton_of(&["abc"]);
    assert!(found(&automaton, "").is_empty(), "Searching an empty text should find nothing.");

    let mut automaton = Automaton::new();
    automaton.build();
    assert!(automaton.is_built());
    assert!(
        found(&automaton, "anything").is_empty(),
        "An automaton without patterns should never match."
    );
    assert_eq!(automaton.node_count(), 1);
}

#[test]
fn test_bytes_outside_alphabet() {
    let automaton = automaton_of(&["he", "hes"]);

    assert_eq!(
        found(&automaton, "he-s HEhe"),
        expected(&[(1, "he"), (8, "he")]),
        "Bytes outside the alphabet should break any match in progress without failing."
    );
}

#[test]
fn test_not_built() {
    let mut automaton = Automaton::new();
    automaton.insert("abc").unwrap();

    assert!(!automaton.is_built());
    assert!(
        matches!(automaton.search("abc"), Err(NotBuiltError)),
        "Searching before building should be rejected."
    );
    assert_eq!(automaton.find_first("abc"), Err(NotBuiltError));
    assert_eq!(automaton.is_match("abc"), Err(NotBuiltError));
    assert_eq!(automaton.scan("abc", |_| Scan::Continue), Err(NotBuiltError));
    assert_eq!(automaton.failure_link(NodeId::ROOT), None);
}

#[test]
fn test_insert_after_build() {
    let mut automaton = Automaton::new();
    assert_eq!(automaton.insert("he"), Ok(PatternId(0)));
    assert_eq!(
        automaton.insert("he-"),
        Err(PatternError::InvalidSymbol(InvalidSymbolError { symbol: b'-', index: 2 }))
    );
    assert!(automaton.insert("").is_err_and(|e| e.is_empty_pattern()));
    automaton.build();

    let nodes = automaton.node_count();
    let links = automaton.links.clone();
    assert_eq!(nodes, 3);

    assert_eq!(automaton.insert("hers"), Err(PatternError::AlreadyBuilt(AlreadyBuiltError)));
    assert_eq!(
        automaton.insert("he"),
        Err(AlreadyBuiltError.into()),
        "Even existing patterns are rejected once built."
    );

    assert!(automaton.is_built(), "A rejected insertion shouldn't unbuild the automaton.");
    assert_eq!(automaton.node_count(), nodes, "A built automaton shouldn't grow.");
    assert_eq!(automaton.len(), 1);
    assert!(!automaton.contains("hers"));
    assert_eq!(automaton.links, links, "The links should be left untouched.");
    assert_eq!(
        found(&automaton, "shers"),
        expected(&[(2, "he")]),
        "Searches should only see the patterns present at build time."
    );
    assert_eq!(
        AlreadyBuiltError.to_string(),
        "patterns can't be inserted into an automaton once it has been built"
    );
}

#[test]
fn test_build_determinism() {
    let words = ["he", "she", "his", "hers", "is", "sh"];
    let first = automaton_of(&words);
    let second = automaton_of(&words);

    assert_eq!(
        first.links, second.links,
        "The same patterns should always produce the same links."
    );

    let mut rebuilt = automaton_of(&words);
    let links = rebuilt.links.clone();
    rebuilt.build();
    assert_eq!(rebuilt.links, links, "Building twice shouldn't change the links.");

    rebuilt.links = None;
    rebuilt.build();
    assert_eq!(rebuilt.links, links, "Recomputing the links should give the same result.");
}

#[test]
fn test_failure_links() {
    let automaton = automaton_of(&["he", "she", "his", "hers"]);
    let link = |prefix: &str| automaton.failure_link(automaton.find_node(prefix).unwrap());

    assert_eq!(automaton.failure_link(NodeId::ROOT), Some(NodeId::ROOT), "The root links to itself.");
    assert_eq!(link("h"), Some(NodeId::ROOT));
    assert_eq!(link("sh"), automaton.find_node("h"));
    assert_eq!(link("she"), automaton.find_node("he"));
    assert_eq!(link("his"), automaton.find_node("s"));
    assert_eq!(link("hers"), automaton.find_node("s"));
    assert_eq!(link("her"), Some(NodeId::ROOT));

    for (node, prefix) in prefixes(&automaton) {
        let failure = automaton.failure_link(node).unwrap();

        if !node.is_root() {
            assert!(
                automaton.depth(failure) < automaton.depth(node),
                "Failure links should always point at a shallower node."
            );
        }
        assert_eq!(
            failure,
            longest_suffix_node(&automaton, &prefix),
            "Failure links should point at the longest proper suffix in the trie."
        );
    }
}

#[test]
fn test_output_links() {
    let automaton = automaton_of(&["he", "she", "hers", "e"]);
    let links = automaton.links().unwrap();
    let node = |prefix: &str| automaton.find_node(prefix).unwrap();

    assert_eq!(links.output(node("she")), Some(node("he")), "Output links skip to terminals.");
    assert_eq!(links.output(node("he")), Some(node("e")), "Output links chain together.");
    assert_eq!(links.output(node("e")), None, "The root is never an output.");
    assert_eq!(links.output(node("sh")), None, "Non-terminal failure chains have no output.");
}

#[test]
fn test_scan_and_first() {
    let automaton = automaton_of(&["he", "she", "his", "hers"]);

    let mut seen = Vec::new();
    automaton
        .scan("ahishers", |m| {
            seen.push(m.pattern());
            if seen.len() == 2 { Scan::Stop } else { Scan::Continue }
        })
        .unwrap();
    assert_eq!(
        seen,
        [automaton.find("his").unwrap(), automaton.find("she").unwrap()],
        "Scanning should stop as soon as the callback asks it to."
    );

    let first = automaton.find_first("ahishers").unwrap().unwrap();
    assert_eq!(first.pattern(), automaton.find("his").unwrap());
    assert_eq!(first.span(), 1..4);
    assert_eq!((first.start(), first.end(), first.len()), (1, 4, 3));
    assert_eq!(first.to_string(), "#2 at 1..4");

    assert_eq!(automaton.is_match("xyz"), Ok(false));
    assert_eq!(automaton.is_match("ushe"), Ok(true));
}

#[test]
fn test_lazy_search() {
    let automaton = automaton_of(&["a"]);
    let mut matches = automaton.search("aaaa").unwrap();

    assert_eq!(matches.next().map(|m| m.position()), Some(0));
    assert_eq!(matches.consumed(), 1, "Only as much text as needed should be read.");
    assert_eq!(matches.count(), 3);

    let restarted = automaton.search("aaaa").unwrap();
    assert_eq!(restarted.count(), 4, "A new search should start from the beginning.");
}

#[test]
fn test_alphabets() {
    assert!(Automaton::with_size(0).is_err());
    assert!(Automaton::with_size(200).is_err(), "a + 200 runs past the byte range.");
    assert!(Automaton::with_size(159).is_ok(), "a through 0xff is the widest range from a.");
    assert!(Automaton::with_size(160).is_err_and(|e| e.is_alphabet_overflow()));
    assert_eq!(Automaton::with_alphabet(Alphabet::BYTES).alphabet().size(), 256);

    let mut automaton = Automaton::with_size(3).unwrap();
    assert!(automaton.insert("abd").is_err_and(|e| e.is_invalid_symbol()));
    automaton.insert("cab").unwrap();
    automaton.build();
    assert_eq!(found(&automaton, "dcabd"), expected(&[(3, "cab")]));

    let patterns: [&[u8]; 2] = [&[0x00, 0xff], &[0xff, 0xff, 0x10]];
    let automaton = Automaton::from_patterns(Alphabet::BYTES, patterns).unwrap();
    let ends: Vec<_> = automaton
        .search(&[0x00_u8, 0xff, 0xff, 0x10][..])
        .unwrap()
        .map(|m| (m.pattern().as_usize(), m.span()))
        .collect();
    assert_eq!(ends, [(0, 0..2), (1, 1..4)], "Any byte should be usable with a full alphabet.");
}

#[test]
fn test_concurrent_searches() {
    let automaton = automaton_of(&["he", "she", "his", "hers"]);
    let single = found(&automaton, "ahishersushers");
    let shared = &automaton;

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || found(shared, "ahishersushers")))
            .collect();

        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                single,
                "Concurrent searches should each see the same matches."
            );
        }
    });
}

proptest! {
    #[test]
    fn prop_search_matches_naive_scan(
        patterns in vec("[abc]{1,5}", 0..8),
        text in "[abcd]{0,40}",
    ) {
        let alphabet = Alphabet::new(b'a', 3).unwrap();
        let automaton = Automaton::from_patterns(alphabet, &patterns).unwrap();

        prop_assert_eq!(found(&automaton, &text), naive_search(&patterns, &text));
    }

    #[test]
    fn prop_failure_links_are_longest_suffixes(patterns in vec("[ab]{1,6}", 1..8)) {
        let alphabet = Alphabet::new(b'a', 2).unwrap();
        let automaton = Automaton::from_patterns(alphabet, &patterns).unwrap();

        for (node, prefix) in prefixes(&automaton) {
            let failure = automaton.failure_link(node).unwrap();
            prop_assert_eq!(failure, longest_suffix_node(&automaton, &prefix));
            prop_assert!(node.is_root() || automaton.depth(failure) < automaton.depth(node));
        }
    }
}
