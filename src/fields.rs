use serde::{Deserialize, Serialize};

/// A field mapping that a [`Revision`](crate::Revision) can be built from.
///
/// Every field is optional here. Only `major` is required to create a revision, the rest fall back
/// to their defaults (`0` for numbers, absent for text). Since this derives serde's traits, a
/// mapping can be read straight out of JSON, TOML, or any other serde format:
///
/// ```
/// use revver::prelude::*;
///
/// let fields: RevisionFields = serde_json::from_str(r#"{"major": 2, "codename": "Hyperion"}"#).unwrap();
/// let revision = Revision::from_fields(fields).unwrap();
/// assert_eq!("v2.0.0 Hyperion", revision.to_string());
/// ```
///
/// Numbers may also be given as strings holding a non-negative integer, e.g. `"major": "2"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevisionFields {
    /// The major number. Required.
    #[serde(
        deserialize_with = "numeric::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub major: Option<u64>,

    /// The minor number. Defaults to `0`.
    #[serde(
        deserialize_with = "numeric::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub minor: Option<u64>,

    /// The patch number. Defaults to `0`.
    #[serde(
        deserialize_with = "numeric::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub patch: Option<u64>,

    /// The release codename. Defaults to absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codename: Option<String>,

    /// Commits since the last tag. Defaults to `0`.
    #[serde(
        deserialize_with = "numeric::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub build: Option<u64>,

    /// The abbreviated commit sha. Defaults to absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

mod numeric {
    use serde::{
        de::{Error, Unexpected},
        Deserialize, Deserializer,
    };

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numeric {
        Int(u64),
        Text(String),
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Numeric>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Numeric::Int(value)) => Ok(Some(value)),
            Some(Numeric::Text(text)) => crate::descriptor::parse_number(text.trim())
                .map(Some)
                .ok_or_else(|| {
                    D::Error::invalid_value(Unexpected::Str(&text), &"a non-negative integer")
                }),
        }
    }
}
