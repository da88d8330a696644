use catalogue_cli::render::{
    cohorts_table, keyword_subtree_table, keyword_tree_table, mappings_table, orphan_notes,
    variable_detail_table, variables_footer, variables_table,
};
use catalogue_client::{Selection, VariablePage};
use catalogue_model::{
    Cohort, Keyword, KeywordTree, NamedRef, Release, TableRef, Variable, VariableDetail,
    VariableMapping, VariableRef,
};
use comfy_table::Table;

fn plain(mut table: Table) -> String {
    table.force_no_tty();
    table.to_string()
}

fn taxonomy() -> KeywordTree {
    KeywordTree::build(vec![
        Keyword::new("bmi").with_parent("anthropometry"),
        Keyword::new("health").with_order(1),
        Keyword::new("anthropometry").with_parent("health"),
        Keyword::new("lifestyle").with_order(2),
    ])
    .expect("build tree")
}

#[test]
fn variables_table_lists_names_and_footer_counts() {
    let mut bmi = Variable::new("bmi").with_label("Body mass index");
    bmi.repeats = vec![NamedRef::new("bmi_1"), NamedRef::new("bmi_2")];
    let page = VariablePage {
        variables: vec![bmi, Variable::new("age")],
        count: 240,
    };

    let rendered = plain(variables_table(&page));
    assert!(rendered.contains("bmi"));
    assert!(rendered.contains("Body mass index"));
    assert!(rendered.contains("age"));
    assert_eq!(variables_footer(&page), "Showing 2 of 240 variables");
}

#[test]
fn detail_table_shows_missing_fields_as_dash() {
    let detail = VariableDetail::new("bmi").with_label("Body mass index");
    let rendered = plain(variable_detail_table(&detail));
    assert!(rendered.contains("Body mass index"));
    assert!(rendered.contains("Unit"));
    assert!(rendered.contains('-'));
}

#[test]
fn keyword_tree_indents_children_and_marks_selection() {
    let tree = taxonomy();
    let selection = Selection::new().with_keywords(["bmi"]);
    let rendered = plain(keyword_tree_table(&tree, &selection));

    assert!(rendered.contains("  anthropometry"));
    assert!(rendered.contains("    bmi"));
    let health = rendered.find("health").expect("health row");
    let lifestyle = rendered.find("lifestyle").expect("lifestyle row");
    assert!(health < lifestyle);
    assert!(rendered.contains('*'));
}

#[test]
fn subtree_starts_at_requested_keyword() {
    let tree = taxonomy();
    let selection = Selection::new();
    let subtree = keyword_subtree_table(&tree, "anthropometry", &selection)
        .expect("known keyword");
    let rendered = plain(subtree);
    assert!(rendered.contains("  bmi"));
    assert!(!rendered.contains("    bmi"));
    assert!(!rendered.contains("health"));

    let missing = keyword_subtree_table(&tree, "missing", &selection);
    assert!(missing.is_none());
}

#[test]
fn orphan_notes_name_the_missing_parent() {
    let keywords = vec![Keyword::new("sleep").with_parent("behaviour")];
    let tree = KeywordTree::build(keywords).expect("build tree");
    assert_eq!(
        orphan_notes(&tree),
        vec!["keyword 'sleep' refers to unknown parent 'behaviour'".to_string()]
    );
}

#[test]
fn cohorts_and_mappings_render_their_rows() {
    let cohorts = vec![Cohort {
        acronym: "ALSPAC".to_string(),
        name: Some("Avon Longitudinal Study".to_string()),
        kind: Some(NamedRef::new("cohort")),
    }];
    let rendered = plain(cohorts_table(&cohorts));
    assert!(rendered.contains("ALSPAC"));
    assert!(rendered.contains("cohort"));

    let mappings = vec![VariableMapping {
        from_table: TableRef {
            release: Some(Release::new("ALSPAC", "1.0.0")),
            name: "core".to_string(),
        },
        to_variable: VariableRef {
            table: None,
            name: "bmi".to_string(),
        },
        match_kind: Some(NamedRef::new("complete")),
    }];
    let rendered = plain(mappings_table(&mappings));
    assert!(rendered.contains("ALSPAC@1.0.0"));
    assert!(rendered.contains("core"));
    assert!(rendered.contains("complete"));
}
