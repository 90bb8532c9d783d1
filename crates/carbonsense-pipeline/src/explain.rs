//! SHAP explanations for tree models.

use carbonsense_core::errors::ModelError;
use carbonsense_core::models::{
    Domain, Explainability, FeatureContribution, FeatureVector, ModelVariant, ShapExplanation,
    ShapValues,
};
use carbonsense_core::traits::IExplainer;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Explain one prediction. A failing explainer fails only this entry.
pub fn explain(
    explainer: &dyn IExplainer,
    variant: ModelVariant,
    features: &FeatureVector,
    prediction: f64,
    domain: Domain,
) -> Explainability {
    let shap = explainer
        .shap_values(features)
        .and_then(|shap| check_shape(shap, variant, features));

    match shap {
        Ok(shap) => {
            let importance = feature_importance(features, &shap);
            Explainability::Success(ShapExplanation {
                base_value: shap.base_value,
                prediction,
                explanation: generate_explanation(&importance, domain),
                feature_importance: importance,
            })
        }
        Err(e) => {
            tracing::warn!(variant = variant.name(), error = %e, "SHAP calculation failed");
            Explainability::Failed {
                error: e.to_string(),
            }
        }
    }
}

fn check_shape(
    shap: ShapValues,
    variant: ModelVariant,
    features: &FeatureVector,
) -> Result<ShapValues, ModelError> {
    if shap.values.len() == features.values.len() {
        Ok(shap)
    } else {
        Err(ModelError::ExplanationFailed {
            model: variant.name().to_string(),
            reason: format!(
                "expected {} SHAP values, got {}",
                features.values.len(),
                shap.values.len()
            ),
        })
    }
}

/// Per-feature contributions, largest absolute SHAP value first.
pub fn feature_importance(features: &FeatureVector, shap: &ShapValues) -> Vec<FeatureContribution> {
    let mut importance: Vec<FeatureContribution> = features
        .names
        .iter()
        .zip(features.values)
        .zip(&shap.values)
        .map(|((name, value), &shap_value)| FeatureContribution {
            feature: (*name).to_string(),
            value,
            shap_value,
            contribution: shap_value,
        })
        .collect();
    importance.sort_by(|a, b| b.shap_value.abs().total_cmp(&a.shap_value.abs()));
    importance
}

/// One or two sentences naming the strongest contributors.
pub fn generate_explanation(importance: &[FeatureContribution], domain: Domain) -> String {
    let Some(top) = importance.first() else {
        return String::new();
    };

    let mut parts = vec![primary_sentence(top, domain)];
    if let Some(second) = importance.get(1).and_then(secondary_sentence) {
        parts.push(second);
    }
    format!("{}.", parts.join(". "))
}

fn primary_sentence(top: &FeatureContribution, domain: Domain) -> String {
    let amount = top.shap_value.abs();
    let hour = top.value as u32;

    match (domain, top.feature.as_str()) {
        (Domain::Transport, "distance_km") => format!(
            "Distance ({:.1} km) is the primary factor, contributing {amount:.3} kg CO2",
            top.value
        ),
        (Domain::Transport, "hour") => {
            let period = if matches!(hour, 7..=9 | 17..=19) {
                "rush hour"
            } else {
                "off-peak"
            };
            format!("Time of day ({hour}:00, {period}) contributes {amount:.3} kg CO2")
        }
        (Domain::Energy, "kWh") => format!(
            "Energy consumption ({:.1} kWh) is the main factor, contributing {amount:.3} kg CO2",
            top.value
        ),
        (Domain::Energy, "hour") => {
            let period = match hour {
                9..=17 => "daytime (cleaner grid from solar)",
                18..=21 => "evening peak (dirtier grid)",
                _ => "night (moderate grid intensity)",
            };
            let effect = if top.shap_value < 0.0 {
                "reducing"
            } else {
                "adding"
            };
            format!("Time ({hour}:00, {period}) is {effect} {amount:.3} kg CO2")
        }
        (_, feature) => format!("{feature} is the primary factor, contributing {amount:.3} kg CO2"),
    }
}

fn secondary_sentence(second: &FeatureContribution) -> Option<String> {
    let amount = second.shap_value.abs();
    match second.feature.as_str() {
        "is_weekend" => {
            let day_type = if second.value == 1.0 {
                "Weekend"
            } else {
                "Weekday"
            };
            let effect = if second.shap_value < 0.0 {
                "reduces"
            } else {
                "increases"
            };
            Some(format!("{day_type} {effect} emissions by {amount:.3} kg CO2"))
        }
        "day_of_week" => {
            let day = DAY_NAMES.get(second.value as usize)?;
            Some(format!("{day} contributes {amount:.3} kg CO2"))
        }
        _ => None,
    }
}
