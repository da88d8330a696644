//! Keywords and the keyword taxonomy.
//!
//! Keywords arrive from the server as a flat list where each entry may name
//! its parent. [`KeywordTree`] turns that list into a forest ordered for
//! display and rejects inputs that would not form a tree.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::variable::NamedRef;

/// A taxonomy term used to tag variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Display position among siblings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<NamedRef>,
}

impl Keyword {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: None,
            order: None,
            parent: None,
        }
    }

    #[must_use]
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = Some(order);
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(NamedRef::new(parent));
        self
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_ref().map(|p| p.name.as_str())
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Sibling order: explicit `order` ascending, unordered keywords last, then by name.
fn display_cmp(a: &Keyword, b: &Keyword) -> Ordering {
    let by_order = match (a.order, b.order) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_order.then_with(|| a.name.cmp(&b.name))
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    Pending,
    Active,
    Done,
}

/// Keywords arranged as a forest.
///
/// A keyword whose parent is not part of the input is promoted to a root and
/// reported by [`KeywordTree::orphans`].
#[derive(Debug, Clone, Default)]
pub struct KeywordTree {
    keywords: Vec<Keyword>,
    index: HashMap<String, usize>,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    orphans: Vec<usize>,
}

impl KeywordTree {
    /// Builds the taxonomy from a flat keyword list.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateKeyword`] when two keywords share a name
    /// and [`ModelError::KeywordCycle`] when parent links loop back.
    pub fn build(keywords: Vec<Keyword>) -> Result<Self> {
        let mut index = HashMap::with_capacity(keywords.len());
        for (position, keyword) in keywords.iter().enumerate() {
            if index.insert(keyword.name.clone(), position).is_some() {
                return Err(ModelError::DuplicateKeyword(keyword.name.clone()));
            }
        }

        let mut orphans = Vec::new();
        let parents: Vec<Option<usize>> = keywords
            .iter()
            .enumerate()
            .map(|(position, keyword)| {
                let parent = keyword.parent_name()?;
                let found = index.get(parent).copied();
                if found.is_none() {
                    orphans.push(position);
                }
                found
            })
            .collect();

        let mut state = vec![Visit::Pending; keywords.len()];
        for start in 0..keywords.len() {
            let mut path = Vec::new();
            let mut cursor = Some(start);
            while let Some(current) = cursor {
                match state[current] {
                    Visit::Done => break,
                    Visit::Active => {
                        return Err(ModelError::KeywordCycle(keywords[current].name.clone()));
                    }
                    Visit::Pending => {
                        state[current] = Visit::Active;
                        path.push(current);
                        cursor = parents[current];
                    }
                }
            }
            for visited in path {
                state[visited] = Visit::Done;
            }
        }

        let mut children = vec![Vec::new(); keywords.len()];
        let mut roots = Vec::new();
        for (position, parent) in parents.iter().enumerate() {
            match parent {
                Some(parent) => children[*parent].push(position),
                None => roots.push(position),
            }
        }
        let by_display = |a: &usize, b: &usize| display_cmp(&keywords[*a], &keywords[*b]);
        roots.sort_by(by_display);
        for siblings in &mut children {
            siblings.sort_by(by_display);
        }

        Ok(Self {
            keywords,
            index,
            parents,
            children,
            roots,
            orphans,
        })
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Keyword> {
        self.index.get(name).map(|&i| &self.keywords[i])
    }

    pub fn roots(&self) -> Vec<&Keyword> {
        self.resolve(&self.roots)
    }

    /// Direct children in display order; empty for unknown names.
    pub fn children(&self, name: &str) -> Vec<&Keyword> {
        match self.index.get(name) {
            Some(&i) => self.resolve(&self.children[i]),
            None => Vec::new(),
        }
    }

    /// Ancestors of `name`, nearest parent first.
    pub fn ancestors(&self, name: &str) -> Vec<&Keyword> {
        let mut out = Vec::new();
        let mut cursor = self.index.get(name).and_then(|&i| self.parents[i]);
        while let Some(current) = cursor {
            out.push(&self.keywords[current]);
            cursor = self.parents[current];
        }
        out
    }

    /// All keywords below `name`, depth-first in display order.
    pub fn descendants(&self, name: &str) -> Vec<&Keyword> {
        let Some(&start) = self.index.get(name) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        self.collect(&self.children[start], 0, &mut out);
        out.into_iter().map(|(_, keyword)| keyword).collect()
    }

    /// Distance from the root; roots have depth 0.
    pub fn depth(&self, name: &str) -> Option<usize> {
        self.index.get(name)?;
        Some(self.ancestors(name).len())
    }

    /// Every keyword with its depth, in display order.
    pub fn walk(&self) -> Vec<(usize, &Keyword)> {
        let mut out = Vec::with_capacity(self.keywords.len());
        self.collect(&self.roots, 0, &mut out);
        out
    }

    /// Keywords whose parent was missing from the input.
    pub fn orphans(&self) -> Vec<&Keyword> {
        self.resolve(&self.orphans)
    }

    fn resolve(&self, positions: &[usize]) -> Vec<&Keyword> {
        positions.iter().map(|&i| &self.keywords[i]).collect()
    }

    fn collect<'a>(
        &'a self,
        positions: &[usize],
        depth: usize,
        out: &mut Vec<(usize, &'a Keyword)>,
    ) {
        for &position in positions {
            out.push((depth, &self.keywords[position]));
            self.collect(&self.children[position], depth + 1, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_from_json() {
        let json = r#"{
            "name": "bmi",
            "definition": "Body mass",
            "order": 2,
            "parent": {"name": "anthropometry"}
        }"#;
        let keyword: Keyword = serde_json::from_str(json).expect("parse keyword");
        assert_eq!(keyword.parent_name(), Some("anthropometry"));
        assert_eq!(keyword.order, Some(2));
        assert!(!keyword.is_root());
    }

    #[test]
    fn self_parent_is_a_cycle() {
        let keywords = vec![Keyword::new("loop").with_parent("loop")];
        let err = KeywordTree::build(keywords).unwrap_err();
        assert_eq!(err, ModelError::KeywordCycle("loop".to_string()));
    }

    #[test]
    fn empty_input() {
        let tree = KeywordTree::build(Vec::new()).expect("build tree");
        assert!(tree.is_empty());
        assert!(tree.walk().is_empty());
    }
}
