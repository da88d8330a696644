//! Record types for the research-variable catalogue.
//!
//! Every type here mirrors the JSON shape returned by the catalogue's GraphQL
//! endpoint (`camelCase` field names, optional attributes as `Option`).

pub mod cohort;
pub mod de;
pub mod error;
pub mod keyword;
pub mod mapping;
pub mod release;
pub mod variable;

pub use cohort::Cohort;
pub use error::{ModelError, Result};
pub use keyword::{Keyword, KeywordTree};
pub use mapping::{TableRef, VariableMapping, VariableRef};
pub use release::{Release, ResourceRef};
pub use variable::{NamedRef, Variable, VariableDetail};
