//! Trained models and SHAP explainers, keyed by domain and variant.

use std::collections::BTreeMap;
use std::sync::Arc;

use carbonsense_core::models::{Domain, ModelVariant};
use carbonsense_core::traits::{IExplainer, IRegressionModel};

/// Registered collaborators. Populated once at startup, read-only after.
#[derive(Clone, Default)]
pub struct ModelRegistry {
    models: BTreeMap<(Domain, ModelVariant), Arc<dyn IRegressionModel>>,
    explainers: BTreeMap<(Domain, ModelVariant), Arc<dyn IExplainer>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(
        mut self,
        domain: Domain,
        variant: ModelVariant,
        model: Arc<dyn IRegressionModel>,
    ) -> Self {
        self.register_model(domain, variant, model);
        self
    }

    pub fn with_explainer(
        mut self,
        domain: Domain,
        variant: ModelVariant,
        explainer: Arc<dyn IExplainer>,
    ) -> Self {
        self.register_explainer(domain, variant, explainer);
        self
    }

    pub fn register_model(
        &mut self,
        domain: Domain,
        variant: ModelVariant,
        model: Arc<dyn IRegressionModel>,
    ) {
        tracing::info!(domain = %domain, variant = variant.name(), "model registered");
        self.models.insert((domain, variant), model);
    }

    /// Explainers are only kept for tree variants.
    pub fn register_explainer(
        &mut self,
        domain: Domain,
        variant: ModelVariant,
        explainer: Arc<dyn IExplainer>,
    ) {
        if !variant.is_tree() {
            tracing::warn!(
                domain = %domain,
                variant = variant.name(),
                "ignoring explainer for non-tree model"
            );
            return;
        }
        self.explainers.insert((domain, variant), explainer);
    }

    /// Models for `domain` in variant order (linear, rf, xgb, bayesian).
    pub fn models(
        &self,
        domain: Domain,
    ) -> impl Iterator<Item = (ModelVariant, &Arc<dyn IRegressionModel>)> {
        self.models
            .iter()
            .filter(move |((d, _), _)| *d == domain)
            .map(|((_, variant), model)| (*variant, model))
    }

    pub fn explainer(&self, domain: Domain, variant: ModelVariant) -> Option<&Arc<dyn IExplainer>> {
        self.explainers.get(&(domain, variant))
    }

    pub fn model_count(&self, domain: Domain) -> usize {
        self.models.keys().filter(|(d, _)| *d == domain).count()
    }

    pub fn explainer_count(&self, domain: Domain) -> usize {
        self.explainers.keys().filter(|(d, _)| *d == domain).count()
    }
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("models", &self.models.keys().collect::<Vec<_>>())
            .field("explainers", &self.explainers.keys().collect::<Vec<_>>())
            .finish()
    }
}
