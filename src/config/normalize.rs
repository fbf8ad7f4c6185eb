//! Normalize either document shape into canonical endpoint specs.

use crate::config::{ConfigDocument, MappingEntry};
use crate::error::ConfigError;

/// Canonical description of one exposed endpoint. `mapping` is API field ->
/// DB column in the document's declared order; never mutated after this pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointSpec {
    pub path: String,
    pub query: String,
    pub mapping: Vec<(String, String)>,
}

/// Produce the ordered spec list from a parsed document.
///
/// Shape A (`endpoints`) takes precedence when both sections are present.
/// Shape B (`mappings`) carries DB column -> API field, so it is inverted
/// here. Duplicate paths are not rejected; table build applies last-wins in
/// document order.
pub fn normalize(doc: &ConfigDocument) -> Result<Vec<EndpointSpec>, ConfigError> {
    if let Some(endpoints) = &doc.endpoints {
        return Ok(endpoints
            .iter()
            .map(|ep| EndpointSpec {
                path: ep.path.clone(),
                query: ep.query.clone(),
                mapping: ep.mapping.clone(),
            })
            .collect());
    }
    if let Some(mappings) = &doc.mappings {
        return Ok(mappings.iter().map(spec_from_mapping).collect());
    }
    Err(ConfigError::MissingSection)
}

fn spec_from_mapping(m: &MappingEntry) -> EndpointSpec {
    EndpointSpec {
        path: m.api_endpoint.clone(),
        query: m.query.clone(),
        mapping: invert(&m.columns),
    }
}

/// Flip DB column -> API field pairs into API field -> DB column.
fn invert(db_to_api: &[(String, String)]) -> Vec<(String, String)> {
    db_to_api
        .iter()
        .map(|(db, api)| (api.clone(), db.clone()))
        .collect()
}
