//! Table rendering for catalogue records.
//!
//! Every renderer returns a [`Table`] so callers decide where it goes;
//! the CLI prints them to stdout.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalogue_client::{Selection, VariablePage};
use catalogue_model::{Cohort, Keyword, KeywordTree, VariableDetail, VariableMapping};

const INDENT: &str = "  ";

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// One row per variable, followed by the shown/total footer.
pub fn variables_table(page: &VariablePage) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Variable"),
        header_cell("Label"),
        header_cell("Repeats"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for variable in &page.variables {
        let repeats = variable.repeats.len();
        table.add_row(vec![
            name_cell(&variable.name),
            optional_cell(variable.label.as_deref()),
            if repeats == 0 {
                dim_cell("-")
            } else {
                Cell::new(repeats)
            },
        ]);
    }
    table
}

/// "Showing N of M variables"
pub fn variables_footer(page: &VariablePage) -> String {
    format!(
        "Showing {} of {} variables",
        page.variables.len(),
        page.count
    )
}

/// Field/value listing of one variable, with its repeats spelled out.
pub fn variable_detail_table(detail: &VariableDetail) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Value")]);
    apply_table_style(&mut table);
    let repeats = detail
        .repeats
        .iter()
        .map(|r| r.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let rows = [
        ("Name", Some(detail.name.as_str())),
        ("Label", detail.label.as_deref()),
        ("Format", detail.format_name()),
        ("Unit", detail.unit_name()),
        ("Description", detail.description.as_deref()),
        ("Repeats", (!repeats.is_empty()).then_some(repeats.as_str())),
    ];
    for (field, value) in rows {
        table.add_row(vec![Cell::new(field), optional_cell(value)]);
    }
    table
}

/// The keyword taxonomy, one keyword per row, indented by depth.
///
/// Keywords in `selection` are marked in the first column.
pub fn keyword_tree_table(tree: &KeywordTree, selection: &Selection) -> Table {
    keyword_table(tree.walk(), selection)
}

/// `root` and everything below it, with `root` at depth 0.
///
/// Returns `None` when `root` is not in the taxonomy.
pub fn keyword_subtree_table(
    tree: &KeywordTree,
    root: &str,
    selection: &Selection,
) -> Option<Table> {
    let base = tree.depth(root)?;
    let keyword = tree.get(root)?;
    let below = tree
        .descendants(root)
        .into_iter()
        .map(|k| (tree.depth(&k.name).unwrap_or(base) - base, k));
    let rows = std::iter::once((0, keyword)).chain(below);
    Some(keyword_table(rows, selection))
}

fn keyword_table<'a>(
    rows: impl IntoIterator<Item = (usize, &'a Keyword)>,
    selection: &Selection,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("Keyword"),
        header_cell("Definition"),
    ]);
    apply_table_style(&mut table);
    for (depth, keyword) in rows {
        let marker = if selection.is_selected(&keyword.name) {
            Cell::new("*").fg(Color::Green)
        } else {
            Cell::new("")
        };
        let label = indented(depth, &keyword.name);
        let name = if depth == 0 {
            Cell::new(label)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(label)
        };
        let definition = optional_cell(keyword.definition.as_deref());
        table.add_row(vec![marker, name, definition]);
    }
    table
}

/// `name` prefixed with two spaces per level.
pub fn indented(depth: usize, name: &str) -> String {
    format!("{}{name}", INDENT.repeat(depth))
}

/// Lines describing keywords whose parent was missing.
pub fn orphan_notes(tree: &KeywordTree) -> Vec<String> {
    tree.orphans()
        .into_iter()
        .map(|keyword| {
            format!(
                "keyword '{}' refers to unknown parent '{}'",
                keyword.name,
                keyword.parent_name().unwrap_or_default()
            )
        })
        .collect()
}

pub fn cohorts_table<'a>(cohorts: impl IntoIterator<Item = &'a Cohort>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Acronym"),
        header_cell("Name"),
        header_cell("Type"),
    ]);
    apply_table_style(&mut table);
    for cohort in cohorts {
        table.add_row(vec![
            name_cell(&cohort.acronym),
            optional_cell(cohort.name.as_deref()),
            optional_cell(cohort.type_name()),
        ]);
    }
    table
}

pub fn mappings_table(mappings: &[VariableMapping]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Target"),
        header_cell("Source table"),
        header_cell("Source release"),
        header_cell("Match"),
    ]);
    apply_table_style(&mut table);
    for mapping in mappings {
        let release = mapping.source_release().map(ToString::to_string);
        table.add_row(vec![
            name_cell(mapping.target_name()),
            Cell::new(mapping.source_table_name()),
            optional_cell(release.as_deref()),
            match_cell(mapping.match_name()),
        ]);
    }
    table
}

fn match_cell(name: Option<&str>) -> Cell {
    match name {
        Some(value) if value.eq_ignore_ascii_case("complete") => {
            Cell::new(value).fg(Color::Green)
        }
        Some(value) if value.eq_ignore_ascii_case("partial") => {
            Cell::new(value).fg(Color::Yellow)
        }
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn name_cell(name: &str) -> Cell {
    Cell::new(name).fg(Color::Blue)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(text) if !text.trim().is_empty() => Cell::new(text),
        _ => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
