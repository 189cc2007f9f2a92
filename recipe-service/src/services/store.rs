use crate::models::{Recipe, RecipePatch};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory recipe store shared across request handlers.
///
/// One instance lives for the life of the process, owned by `AppState`.
/// Lookups scan in stored order and the first matching id wins, so duplicate
/// ids (never enforced against) resolve deterministically.
#[derive(Clone)]
pub struct RecipeStore {
    recipes: Arc<RwLock<Vec<Recipe>>>,
}

impl RecipeStore {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Arc::new(RwLock::new(recipes)),
        }
    }

    /// The fixed seed data every process starts with.
    pub fn seeded() -> Self {
        Self::new(seed_recipes())
    }

    pub async fn list(&self) -> Vec<Recipe> {
        self.recipes.read().await.clone()
    }

    /// First record matching `id`, in stored order.
    pub async fn get(&self, id: i64) -> Option<Recipe> {
        self.recipes
            .read()
            .await
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
    }

    /// Applies `patch` to the first record matching `id`, in place. Returns
    /// the updated record, or `None` when no record matches.
    pub async fn update(&self, id: i64, patch: RecipePatch) -> Option<Recipe> {
        let mut recipes = self.recipes.write().await;
        let recipe = recipes.iter_mut().find(|recipe| recipe.id == id)?;
        recipe.apply(patch);
        Some(recipe.clone())
    }
}

fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            title: "Chocolate Chip Cookies".to_string(),
            ingredients: vec![
                "1/2 c. chocolate chips".to_string(),
                "3 1/2 c. all purpose flour".to_string(),
                "1 stick soft butter".to_string(),
                "2 large eggs".to_string(),
                "1/2 tsp. baking powder".to_string(),
                "1/2 c. white sugar".to_string(),
                "1/2 c. brown sugar".to_string(),
                "1 tsp vanilla extract".to_string(),
                "1/2 tsp. salt".to_string(),
            ],
            prep_time: 20,
            cook_time: 15,
            steps: vec![],
        },
        Recipe {
            id: 2,
            title: "Fritatta".to_string(),
            ingredients: vec![
                "eggs".to_string(),
                "cheese".to_string(),
                "asst. diced veggies".to_string(),
                "milk".to_string(),
            ],
            ..Default::default()
        },
    ]
}
