//! Tests for the keyword taxonomy.

use catalogue_model::{Keyword, KeywordTree, ModelError};

fn names(keywords: &[&Keyword]) -> Vec<String> {
    keywords.iter().map(|k| k.name.clone()).collect()
}

fn sample() -> Vec<Keyword> {
    vec![
        Keyword::new("lifestyle").with_order(2),
        Keyword::new("health").with_order(1),
        Keyword::new("smoking").with_parent("lifestyle").with_order(2),
        Keyword::new("diet").with_parent("lifestyle").with_order(1),
        Keyword::new("alcohol").with_parent("lifestyle"),
        Keyword::new("diabetes").with_parent("health"),
        Keyword::new("type 1").with_parent("diabetes"),
    ]
}

#[test]
fn roots_follow_display_order() {
    let tree = KeywordTree::build(sample()).expect("build tree");
    assert_eq!(tree.len(), 7);
    assert_eq!(names(&tree.roots()), vec!["health", "lifestyle"]);
}

#[test]
fn unordered_siblings_come_last() {
    let tree = KeywordTree::build(sample()).expect("build tree");
    assert_eq!(
        names(&tree.children("lifestyle")),
        vec!["diet", "smoking", "alcohol"]
    );
    assert!(tree.children("unknown").is_empty());
}

#[test]
fn ancestors_nearest_first() {
    let tree = KeywordTree::build(sample()).expect("build tree");
    assert_eq!(
        names(&tree.ancestors("type 1")),
        vec!["diabetes", "health"]
    );
    assert!(tree.ancestors("health").is_empty());
    assert_eq!(tree.depth("type 1"), Some(2));
    assert_eq!(tree.depth("health"), Some(0));
    assert_eq!(tree.depth("missing"), None);
}

#[test]
fn descendants_depth_first() {
    let tree = KeywordTree::build(sample()).expect("build tree");
    assert_eq!(
        names(&tree.descendants("health")),
        vec!["diabetes", "type 1"]
    );
    assert!(tree.descendants("type 1").is_empty());
}

#[test]
fn walk_reports_depths() {
    let tree = KeywordTree::build(sample()).expect("build tree");
    let walked: Vec<(usize, &str)> = tree
        .walk()
        .into_iter()
        .map(|(depth, k)| (depth, k.name.as_str()))
        .collect();
    assert_eq!(
        walked,
        vec![
            (0, "health"),
            (1, "diabetes"),
            (2, "type 1"),
            (0, "lifestyle"),
            (1, "diet"),
            (1, "smoking"),
            (1, "alcohol"),
        ]
    );
}

#[test]
fn missing_parent_becomes_root() {
    let tree = KeywordTree::build(vec![
        Keyword::new("bmi").with_parent("anthropometry"),
        Keyword::new("age"),
    ])
    .expect("build tree");
    assert_eq!(names(&tree.roots()), vec!["age", "bmi"]);
    assert_eq!(names(&tree.orphans()), vec!["bmi"]);
}

#[test]
fn two_node_cycle_is_rejected() {
    let result = KeywordTree::build(vec![
        Keyword::new("a").with_parent("b"),
        Keyword::new("b").with_parent("a"),
        Keyword::new("c"),
    ]);
    assert!(matches!(result, Err(ModelError::KeywordCycle(_))));
}

#[test]
fn duplicate_names_are_rejected() {
    let result = KeywordTree::build(vec![Keyword::new("bmi"), Keyword::new("bmi")]);
    assert_eq!(
        result.unwrap_err(),
        ModelError::DuplicateKeyword("bmi".to_string())
    );
}
