//! Integration tests for outline tree construction.
//!
//! Drives the tree builder through a fake heading source whose selector
//! picks heading levels, mirroring how a document layer would feed it.

use pdf_outline::{Heading, HeadingSource, Options, Outline};
use proptest::prelude::*;

/// A canned document: `(level, text)` headings in document order. The
/// selector syntax is `//hN` terms joined by `|`, selecting levels.
struct TagSource(Vec<(u32, &'static str)>);

impl TagSource {
    fn heading(level: u32, text: &str) -> Heading {
        Heading::new(level, text, format!("/body/h{}/{}", level, text))
    }

    fn path(level: u32, text: &str) -> String {
        format!("/body/h{}/{}", level, text)
    }
}

impl HeadingSource for TagSource {
    fn query(&self, selector: &str) -> Vec<Heading> {
        let levels: Vec<u32> = selector
            .split('|')
            .filter_map(|term| term.trim().strip_prefix("//h"))
            .filter_map(|n| n.parse().ok())
            .collect();
        self.0
            .iter()
            .filter(|(level, _)| levels.contains(level))
            .map(|&(level, text)| Self::heading(level, text))
            .collect()
    }
}

fn build(headings: Vec<(u32, &'static str)>, selector: &str) -> Outline {
    let options = Options::new().with_outline_selector(selector);
    Outline::from_source(&options, &TagSource(headings))
}

fn assert_parents(outline: &Outline, expected: &[(u32, &str, Option<(u32, &str)>)]) {
    assert_eq!(outline.count(), expected.len());
    for &(level, text, parent) in expected {
        let path = TagSource::path(level, text);
        assert!(outline.contains(&path), "{path} should be in the outline");
        let expected_parent = parent.map(|(pl, pt)| TagSource::path(pl, pt));
        assert_eq!(
            outline.parent_of(&path),
            expected_parent.as_deref(),
            "wrong parent for {path}"
        );
    }
}

#[test]
fn test_single_matching_heading() {
    let outline = build(vec![(1, "T")], "//h1");
    assert_parents(&outline, &[(1, "T", None)]);
}

#[test]
fn test_non_matching_selector_yields_empty_outline() {
    let outline = build(vec![(1, "T")], "//h2 | //h3");
    assert_eq!(outline.count(), 0);
}

#[test]
fn test_deep_heading_without_ancestors_is_root() {
    let outline = build(vec![(3, "A")], "//h2 | //h3");
    assert_parents(&outline, &[(3, "A", None)]);
}

#[test]
fn test_unselected_levels_do_not_nest() {
    // The h4 is not selected, so "c" attaches to "A", not to it.
    let outline = build(vec![(2, "A"), (3, "a"), (4, "b"), (3, "c")], "//h2 | //h3");
    assert_parents(
        &outline,
        &[
            (2, "A", None),
            (3, "a", Some((2, "A"))),
            (3, "c", Some((2, "A"))),
        ],
    );
}

#[test]
fn test_two_subtrees() {
    let outline = build(
        vec![(1, "T"), (2, "A"), (3, "a"), (4, "z"), (2, "B"), (3, "b"), (3, "c")],
        "//h2 | //h3",
    );
    assert_parents(
        &outline,
        &[
            (2, "A", None),
            (3, "a", Some((2, "A"))),
            (2, "B", None),
            (3, "b", Some((2, "B"))),
            (3, "c", Some((2, "B"))),
        ],
    );
}

#[test]
fn test_no_selector_disables_extraction() {
    let outline = Outline::from_source(&Options::new(), &TagSource(vec![(1, "T")]));
    assert_eq!(outline.count(), 0);
}

proptest! {
    /// Level-nesting law: the parent of a node is the nearest earlier node
    /// with a strictly smaller level, or none.
    #[test]
    fn prop_parent_is_nearest_smaller_level(levels in proptest::collection::vec(1u32..=6, 0..40)) {
        let headings: Vec<Heading> = levels
            .iter()
            .enumerate()
            .map(|(index, &level)| Heading::new(level, format!("h{index}"), format!("/n/{index}")))
            .collect();

        let mut outline = Outline::new();
        outline.add_headings(&headings);

        // Forest size equals the number of headings added.
        prop_assert_eq!(outline.count(), headings.len());

        for (index, heading) in headings.iter().enumerate() {
            let expected = headings[..index]
                .iter()
                .rev()
                .find(|earlier| earlier.level < heading.level)
                .map(|earlier| earlier.path.as_str());
            prop_assert_eq!(outline.parent_of(&heading.path), expected);
        }
    }
}
