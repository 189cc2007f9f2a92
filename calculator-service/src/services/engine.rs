use crate::models::{Calculator, CalculatorPatch};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle over the single calculator instance.
///
/// One instance lives for the life of the process, owned by `AppState` and
/// cloned into handlers. Every mutation returns the post-operation snapshot,
/// which is what the HTTP layer serializes.
#[derive(Clone, Default)]
pub struct CalculatorEngine {
    state: Arc<RwLock<Calculator>>,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> Calculator {
        self.state.read().await.clone()
    }

    /// Merge-overwrite the fields present in the patch.
    pub async fn overwrite(&self, patch: CalculatorPatch) -> Calculator {
        let mut state = self.state.write().await;
        state.apply(patch);
        state.clone()
    }

    /// Commit the pending operation, if any.
    pub async fn commit(&self) -> Calculator {
        let mut state = self.state.write().await;
        state.commit();
        state.clone()
    }

    /// Durably replace the shared state with a fresh zeroed instance; the
    /// replacement is visible to every subsequent request.
    pub async fn reset(&self) -> Calculator {
        let mut state = self.state.write().await;
        *state = Calculator::default();
        state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn overwrite_then_commit_applies_the_operation() {
        let engine = CalculatorEngine::new();

        engine
            .overwrite(CalculatorPatch {
                display: Some(3.0),
                register: Some(5.0),
                operation: Some(Some("addition".to_string())),
                ..Default::default()
            })
            .await;

        let committed = engine.commit().await;
        assert_eq!(committed.display, 8.0);
        assert_eq!(committed.register, 0.0);
        assert_eq!(committed.tape.len(), 1);
        assert_eq!(committed.tape[0].result, 8.0);
    }

    #[tokio::test]
    async fn reset_is_visible_through_other_handles() {
        let engine = CalculatorEngine::new();
        let other = engine.clone();

        engine
            .overwrite(CalculatorPatch {
                display: Some(42.0),
                ..Default::default()
            })
            .await;

        other.reset().await;

        let state = engine.read().await;
        assert_eq!(state, Calculator::default());
    }
}
