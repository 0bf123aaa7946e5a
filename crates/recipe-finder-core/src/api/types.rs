//! Wire types for the recipe backend.
//!
//! Field names follow the backend's camelCase JSON. Everything here is
//! ephemeral: a response lives for one render pass, except the
//! [`CategoryIndex`] which the controller keeps for a browsing session.

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Reads an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub ingredients: String,
}

/// Response of `POST /search`.
///
/// Either a direct match (`direct_match` with a `recipe`) or a ranked list of
/// candidates in `recipes`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub direct_match: bool,
    #[serde(default)]
    pub recipe: Option<RecipeDetail>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipes: Vec<RecipeSummary>,
    #[serde(default)]
    pub total_found: Option<u64>,
}

impl SearchResponse {
    /// The recipe to jump straight to, if the query named exactly one dish.
    pub fn direct_recipe(&self) -> Option<&RecipeDetail> {
        if self.direct_match {
            self.recipe.as_ref()
        } else {
            None
        }
    }
}

/// One row of a ranked search result.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub name: String,
    pub match_count: u32,
    pub match_percentage: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub missing: Vec<String>,
}

/// Full recipe as returned by `GET /recipe` or embedded in a direct match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecipeDetail {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// Response of `GET /recipe`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecipeLookup {
    /// `{"error": "..."}`. Listed first so an error body always wins.
    NotFound { error: String },
    Found(RecipeDetail),
}

/// A category's entry in the index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryEntry {
    pub count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dishes: Vec<String>,
}

/// Every category the backend knows about, in the order the backend sent them.
///
/// Deserialized from a JSON object keyed by category name. A plain map would
/// lose the server's ordering, which is also the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    entries: Vec<(String, CategoryEntry)>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive lookup by category name.
    pub fn get(&self, name: &str) -> Option<&CategoryEntry> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts or replaces a category, keeping its original position on replace.
    pub fn insert(&mut self, name: impl Into<String>, entry: CategoryEntry) {
        let name = name.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((name, entry)),
        }
    }
}

impl<S: Into<String>> FromIterator<(S, CategoryEntry)> for CategoryIndex {
    fn from_iter<I: IntoIterator<Item = (S, CategoryEntry)>>(iter: I) -> Self {
        let mut index = CategoryIndex::new();
        for (name, entry) in iter {
            index.insert(name, entry);
        }
        index
    }
}

impl<'de> Deserialize<'de> for CategoryIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IndexVisitor;

        impl<'de> Visitor<'de> for IndexVisitor {
            type Value = CategoryIndex;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping category names to {count, dishes}")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut index = CategoryIndex::new();
                while let Some((name, entry)) = map.next_entry::<String, CategoryEntry>()? {
                    index.insert(name, entry);
                }
                Ok(index)
            }
        }

        deserializer.deserialize_map(IndexVisitor)
    }
}
