//! Front-matter parsing

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Opening and closing line of a front-matter block
pub const DELIMITER: &str = "---";

/// Errors raised while splitting or parsing a front-matter block
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("no front-matter block (file must start with a `---` line)")]
    Missing,

    #[error("front-matter block is not closed by a `---` line")]
    Unterminated,

    #[error("invalid front-matter: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a scalar or a list of scalars")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        // A lone unquoted scalar arrives already resolved by YAML
        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Thumbnail images shown next to a post in the listing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Post author
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    /// URL or site-relative path of the avatar image
    pub avatar: String,
}

/// Keys with a typed field; everything else lands in `extra`
const KNOWN_KEYS: [&str; 7] = [
    "title",
    "description",
    "date",
    "thumbnail",
    "author",
    "tags",
    "pinned",
];

/// Front-matter data of a post
///
/// Typed fields are read without buffering, so plain scalars such as
/// `date: 2024.10` keep their exact text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    pub description: String,
    /// Free-form, never parsed as a date
    pub date: String,
    #[serde(default)]
    pub thumbnail: Option<Thumbnail>,
    pub author: Author,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    /// `None` when the key is absent or null; reads as not pinned
    #[serde(default)]
    pub pinned: Option<bool>,

    /// Additional custom fields, in source order
    #[serde(skip)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Serialize for FrontMatter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("title", &self.title)?;
        map.serialize_entry("description", &self.description)?;
        map.serialize_entry("date", &self.date)?;
        if let Some(thumbnail) = &self.thumbnail {
            map.serialize_entry("thumbnail", thumbnail)?;
        }
        map.serialize_entry("author", &self.author)?;
        map.serialize_entry("tags", &self.tags)?;
        if let Some(pinned) = self.pinned {
            map.serialize_entry("pinned", &pinned)?;
        }
        for (key, value) in &self.extra {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let (yaml, body) = split(content)?;
        let mut fm = serde_yaml::from_str::<FrontMatter>(yaml)?;

        let mut extra: IndexMap<String, serde_yaml::Value> = serde_yaml::from_str(yaml)?;
        extra.retain(|key, _| !KNOWN_KEYS.contains(&key.as_str()));
        fm.extra = extra;

        Ok((fm, body))
    }

    /// Whether the post is pinned to the top of the listing
    pub fn is_pinned(&self) -> bool {
        self.pinned.unwrap_or(false)
    }

    /// Serialize back into a delimited block, including the trailing line break
    pub fn to_block(&self) -> Result<String, FrontMatterError> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(format!("{DELIMITER}\n{yaml}{DELIMITER}\n"))
    }
}

/// Split raw file text into the YAML block and the body that follows it
fn split(content: &str) -> Result<(&str, &str), FrontMatterError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let rest = content
        .strip_prefix(DELIMITER)
        .and_then(strip_line_break)
        .ok_or(FrontMatterError::Missing)?;

    // The block may be empty, so the closing delimiter can open `rest`
    let mut offset = 0;
    loop {
        let line_end = rest[offset..]
            .find('\n')
            .map(|i| offset + i + 1)
            .unwrap_or(rest.len());
        let line = rest[offset..line_end].trim_end_matches(['\n', '\r']);

        if line == DELIMITER {
            return Ok((&rest[..offset], &rest[line_end..]));
        }
        if line_end == rest.len() {
            return Err(FrontMatterError::Unterminated);
        }
        offset = line_end;
    }
}

fn strip_line_break(s: &str) -> Option<&str> {
    s.strip_prefix("\r\n").or_else(|| s.strip_prefix('\n'))
}
