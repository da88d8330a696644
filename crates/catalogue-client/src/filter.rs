//! Filter composition.
//!
//! Turns selection state into the nested `filter` objects the catalogue's
//! GraphQL schema expects. Every builder is pure and scopes its filter to
//! the configured release.

use catalogue_model::{NamedRef, Release};
use serde::Serialize;

use crate::error::{CatalogueError, Result};

/// `{ "equals": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equals<T> {
    pub equals: Vec<T>,
}

/// `{ "like": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Like {
    pub like: Vec<String>,
}

/// Filter over the `Variables` table.
///
/// Absent constraints are omitted from the serialized object rather than
/// sent as empty lists; the server treats the two differently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariablesFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<Like>,
    pub release: Equals<Release>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Equals<NamedRef>>,
}

/// Identifies a target variable within a release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableKey {
    pub release: Release,
    pub name: String,
}

/// Filter over the `VariableMappings` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingsFilter {
    pub to_variable: Equals<VariableKey>,
}

/// Variables object for the mappings query.
///
/// Without a filter this serializes to `{}`, which fetches every mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MappingsVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<MappingsFilter>,
}

fn release_constraint(release: &Release) -> Equals<Release> {
    Equals {
        equals: vec![release.clone()],
    }
}

fn checked_name(kind: &str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(CatalogueError::MalformedFilter(format!(
            "{kind} name must not be blank"
        )));
    }
    Ok(value.to_string())
}

/// Filter for the variable overview.
///
/// The keyword set is sent as a single `equals` constraint in selection
/// order; whether the server combines the keywords with AND or OR is up to
/// its schema. An empty selection omits the `keywords` key.
pub fn variables_filter<S: AsRef<str>>(
    release: &Release,
    selected_keywords: &[S],
) -> Result<VariablesFilter> {
    let keywords = if selected_keywords.is_empty() {
        None
    } else {
        let equals = selected_keywords
            .iter()
            .map(|keyword| checked_name("keyword", keyword.as_ref()).map(NamedRef::new))
            .collect::<Result<Vec<_>>>()?;
        Some(Equals { equals })
    };

    Ok(VariablesFilter {
        name: None,
        release: release_constraint(release),
        keywords,
    })
}

/// Filter matching a single variable by name.
pub fn variable_detail_filter(release: &Release, name: &str) -> Result<VariablesFilter> {
    Ok(VariablesFilter {
        name: Some(Like {
            like: vec![checked_name("variable", name)?],
        }),
        release: release_constraint(release),
        keywords: None,
    })
}

/// Variables for the mappings query targeting the given variable names.
///
/// No names means no filter at all.
pub fn mappings_variables<I, S>(release: &Release, variable_names: I) -> Result<MappingsVariables>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let equals = variable_names
        .into_iter()
        .map(|name| {
            Ok(VariableKey {
                release: release.clone(),
                name: checked_name("variable", name.as_ref())?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if equals.is_empty() {
        return Ok(MappingsVariables::default());
    }
    Ok(MappingsVariables {
        filter: Some(MappingsFilter {
            to_variable: Equals { equals },
        }),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn lifecycle() -> Release {
        Release::new("LifeCycle", "1.0.0")
    }

    #[test]
    fn keywords_filter_matches_server_shape() {
        let filter = variables_filter(&lifecycle(), &["diabetes"]).unwrap();
        assert_eq!(
            serde_json::to_value(&filter).expect("serialize filter"),
            json!({
                "release": {"equals": [{"resource": {"acronym": "LifeCycle"}, "version": "1.0.0"}]},
                "keywords": {"equals": [{"name": "diabetes"}]}
            })
        );
    }

    #[test]
    fn no_keywords_omits_the_key() {
        let filter = variables_filter::<&str>(&lifecycle(), &[]).unwrap();
        let value = serde_json::to_value(&filter).expect("serialize filter");
        assert!(value.get("keywords").is_none());
        assert!(value.get("name").is_none());
        assert!(value.get("release").is_some());
    }

    #[test]
    fn detail_filter_uses_like() {
        let filter = variable_detail_filter(&lifecycle(), "bmi").unwrap();
        assert_eq!(
            serde_json::to_value(&filter).expect("serialize filter"),
            json!({
                "name": {"like": ["bmi"]},
                "release": {"equals": [{"resource": {"acronym": "LifeCycle"}, "version": "1.0.0"}]}
            })
        );
    }

    #[test]
    fn mappings_filter_per_variable() {
        let variables = mappings_variables(&lifecycle(), ["bmi", "age"]).unwrap();
        let release = json!({"resource": {"acronym": "LifeCycle"}, "version": "1.0.0"});
        assert_eq!(
            serde_json::to_value(&variables).expect("serialize"),
            json!({
                "filter": {"toVariable": {"equals": [
                    {"release": release.clone(), "name": "bmi"},
                    {"release": release, "name": "age"}
                ]}}
            })
        );
    }

    #[test]
    fn no_variables_means_no_filter_key() {
        let names: Vec<String> = Vec::new();
        let variables = mappings_variables(&lifecycle(), names).unwrap();
        assert_eq!(
            serde_json::to_value(&variables).expect("serialize"),
            json!({})
        );
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(matches!(
            variables_filter(&lifecycle(), &["diabetes", "  "]),
            Err(CatalogueError::MalformedFilter(_))
        ));
        assert!(matches!(
            variable_detail_filter(&lifecycle(), ""),
            Err(CatalogueError::MalformedFilter(_))
        ));
        assert!(matches!(
            mappings_variables(&lifecycle(), ["bmi", ""]),
            Err(CatalogueError::MalformedFilter(_))
        ));
    }
}
