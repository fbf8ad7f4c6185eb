//! Raw config types matching the two accepted document shapes.

use serde::{Deserialize, Deserializer};

/// A parsed configuration document. Exactly one of `endpoints` (shape A) or
/// `mappings` (shape B) is expected; when both are present, `endpoints` wins.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub endpoints: Option<Vec<EndpointEntry>>,
    #[serde(default)]
    pub mappings: Option<Vec<MappingEntry>>,
}

/// Shape A entry: `mapping` is API field -> DB column.
#[derive(Clone, Debug, Deserialize)]
pub struct EndpointEntry {
    pub path: String,
    pub query: String,
    #[serde(default, deserialize_with = "ordered_string_map")]
    pub mapping: Vec<(String, String)>,
}

/// Shape B entry: `columns` is DB column -> API field (inverted relative to A).
#[derive(Clone, Debug, Deserialize)]
pub struct MappingEntry {
    pub api_endpoint: String,
    pub query: String,
    #[serde(default, deserialize_with = "ordered_string_map")]
    pub columns: Vec<(String, String)>,
}

/// Deserialize a mapping node into key/value pairs in document order.
/// Field order in the document is the field order of mapped row objects,
/// so a plain HashMap would lose information here.
fn ordered_string_map<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PairVisitor;

    impl<'de> serde::de::Visitor<'de> for PairVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            f.write_str("a mapping of string keys to string values")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::MapAccess<'de>,
        {
            let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((k, v)) = map.next_entry::<String, String>()? {
                out.push((k, v));
            }
            Ok(out)
        }
    }

    deserializer.deserialize_map(PairVisitor)
}
