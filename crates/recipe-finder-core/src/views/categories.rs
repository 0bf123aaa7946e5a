//! Category grouping and dish listings.
//!
//! Categories are split into vegetarian and non-vegetarian by a keyword
//! heuristic on the name alone. It is deliberately fuzzy: "Eggplant Fry"
//! lands in non-vegetarian because it contains "egg". Keep it as is.

use crate::api::CategoryIndex;

/// Substrings that mark a category as non-vegetarian (matched lowercase).
pub const NON_VEG_KEYWORDS: &[&str] = &[
    "chicken", "mutton", "fish", "prawn", "egg", "crab", "duck", "non-veg", "seafood", "soup",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diet {
    Vegetarian,
    NonVegetarian,
}

impl Diet {
    pub fn title(self) -> &'static str {
        match self {
            Diet::Vegetarian => "🥬 Vegetarian",
            Diet::NonVegetarian => "🍗 Non-Vegetarian",
        }
    }

    /// Style modifier for cards in this group.
    pub fn class_suffix(self) -> &'static str {
        match self {
            Diet::Vegetarian => "veg",
            Diet::NonVegetarian => "non-veg",
        }
    }
}

/// Classifies a category by name.
///
/// Keyword matches win, so "Veggie Soup" is non-vegetarian. Everything else,
/// including any name with "veg" but not "non", is vegetarian.
pub fn classify(name: &str) -> Diet {
    let lower = name.to_lowercase();

    if NON_VEG_KEYWORDS.iter().any(|keyword| lower.contains(keyword)) {
        Diet::NonVegetarian
    } else {
        Diet::Vegetarian
    }
}

/// A clickable category tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    pub name: String,
    pub count: u32,
}

impl CategoryCard {
    pub fn count_label(&self) -> String {
        format!("{} dishes", self.count)
    }
}

/// The categories panel: two titled groups, each in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGroups {
    pub vegetarian: Vec<CategoryCard>,
    pub non_vegetarian: Vec<CategoryCard>,
}

impl CategoryGroups {
    pub fn from_index(index: &CategoryIndex) -> Self {
        let mut groups = CategoryGroups::default();
        for (name, entry) in index.iter() {
            let card = CategoryCard {
                name: name.to_string(),
                count: entry.count,
            };
            match classify(name) {
                Diet::Vegetarian => groups.vegetarian.push(card),
                Diet::NonVegetarian => groups.non_vegetarian.push(card),
            }
        }
        groups
    }

    /// Both groups in display order, vegetarian first.
    pub fn groups(&self) -> [(Diet, &[CategoryCard]); 2] {
        [
            (Diet::Vegetarian, self.vegetarian.as_slice()),
            (Diet::NonVegetarian, self.non_vegetarian.as_slice()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.vegetarian.is_empty() && self.non_vegetarian.is_empty()
    }
}

/// The dishes panel for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishList {
    pub category: String,
    pub dishes: Vec<String>,
}

impl DishList {
    /// Looks `category` up by exact name; unknown categories give an empty list.
    pub fn lookup(index: &CategoryIndex, category: &str) -> Self {
        Self {
            category: category.to_string(),
            dishes: index
                .get(category)
                .map(|entry| entry.dishes.clone())
                .unwrap_or_default(),
        }
    }
}
