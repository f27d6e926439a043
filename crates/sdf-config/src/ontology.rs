//! Ontology output settings.

use serde::{Deserialize, Serialize};

fn default_base_iri() -> String {
    "http://sdformat.org/spec/model".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OntologyConfig {
    /// Base IRI; the default prefix `:` is `{base_iri}#`.
    #[serde(default = "default_base_iri")]
    pub base_iri: String,
}

impl Default for OntologyConfig {
    fn default() -> Self {
        Self {
            base_iri: default_base_iri(),
        }
    }
}
