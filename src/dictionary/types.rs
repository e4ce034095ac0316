use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One element of the `GET /entries/en/{word}` response array.
///
/// Only the path down to `example` is modelled; every level may be absent or `null`.
#[derive(Deserialize, Debug)]
pub struct Entry {
    pub meanings: Option<Vec<Meaning>>,
}

#[derive(Deserialize, Debug)]
pub struct Meaning {
    pub definitions: Option<Vec<Definition>>,
}

#[derive(Deserialize, Debug)]
pub struct Definition {
    /// Non-string values are read as absent so sibling examples survive.
    #[serde(default, deserialize_with = "string_or_none")]
    pub example: Option<String>,
}

fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}
