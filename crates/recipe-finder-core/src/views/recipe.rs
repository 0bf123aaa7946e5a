use crate::api::RecipeDetail;

/// The recipe detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeView {
    pub title: String,
    /// Ingredients in backend order, first character upper-cased.
    pub ingredients: Vec<String>,
    /// Steps verbatim, in order.
    pub instructions: Vec<String>,
}

impl From<&RecipeDetail> for RecipeView {
    fn from(recipe: &RecipeDetail) -> Self {
        Self {
            title: recipe.name.clone(),
            ingredients: recipe.ingredients.iter().map(|i| capitalize_first(i)).collect(),
            instructions: recipe.instructions.clone(),
        }
    }
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
