use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of a word list. Usually a string, but whatever JSON the client
/// sent is stored and returned unchanged.
pub type Word = Value;

/// The shared word bank. Serialises to exactly `persons`, `places`, `things`.
///
/// Deserialisation never fails on list contents: a missing or `null` list is
/// empty, elements are kept as-is, and a bare value becomes a one-element
/// list. See [`words_from_json`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordBank {
    #[serde(default, deserialize_with = "lenient_words")]
    pub persons: Vec<Word>,
    #[serde(default, deserialize_with = "lenient_words")]
    pub places: Vec<Word>,
    #[serde(default, deserialize_with = "lenient_words")]
    pub things: Vec<Word>,
}

impl WordBank {
    pub fn new(persons: Vec<Word>, places: Vec<Word>, things: Vec<Word>) -> Self {
        Self { persons, places, things }
    }

    /// Contents written on first start when no word bank exists.
    pub fn defaults() -> Self {
        fn owned(words: &[&str]) -> Vec<Word> {
            words.iter().map(|w| Word::from(*w)).collect()
        }
        Self {
            persons: owned(&["Batman", "Private Bloggins", "The Rock"]),
            places: owned(&["Beach", "Mountain", "Railway"]),
            things: owned(&["Hat", "Selfie", "Pencil"]),
        }
    }

    pub fn len(&self) -> usize {
        self.persons.len() + self.places.len() + self.things.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build from stored column values, defaulting any missing list.
    pub fn from_columns(persons: Option<Value>, places: Option<Value>, things: Option<Value>) -> Self {
        Self {
            persons: persons.map(words_from_json).unwrap_or_default(),
            places: places.map(words_from_json).unwrap_or_default(),
            things: things.map(words_from_json).unwrap_or_default(),
        }
    }

    /// The three lists as JSON arrays, in `persons`, `places`, `things` order.
    pub fn to_columns(&self) -> (Value, Value, Value) {
        (
            Value::Array(self.persons.clone()),
            Value::Array(self.places.clone()),
            Value::Array(self.things.clone()),
        )
    }
}

/// Normalise an arbitrary JSON value into a word list without altering any
/// element.
pub fn words_from_json(value: Value) -> Vec<Word> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    }
}

fn lenient_words<'de, D>(deserializer: D) -> Result<Vec<Word>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.map(words_from_json).unwrap_or_default())
}
