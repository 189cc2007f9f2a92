use serde::{Deserialize, Serialize};

/// A stored recipe record.
///
/// The field set and names are part of the HTTP contract: responses serialize
/// exactly `{id, title, ingredients, prep_time, cook_time, steps}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique by convention only; the store never enforces uniqueness.
    pub id: i64,
    pub title: String,
    pub ingredients: Vec<String>,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
    pub steps: Vec<String>,
}

/// Partial-update payload for PUT/PATCH `/recipes/{id}`.
///
/// Every record field is patchable, including `id`. Unknown keys in the
/// request body are ignored; fields left out are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipePatch {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub steps: Option<Vec<String>>,
}

impl Recipe {
    /// Merge-update: overwrite only the fields the patch carries.
    pub fn apply(&mut self, patch: RecipePatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(prep_time) = patch.prep_time {
            self.prep_time = prep_time;
        }
        if let Some(cook_time) = patch.cook_time {
            self.cook_time = cook_time;
        }
        if let Some(steps) = patch.steps {
            self.steps = steps;
        }
    }
}
