//! System prompt composition from the bot configuration.

use crate::config::BotConfig;

const ROLE_SENTENCE: &str = "You are an AI assistant specialized in aquaculture business.";

/// Compose the default system prompt for a validated configuration.
///
/// Fragments are emitted in a fixed order and joined with newlines; a
/// fragment is included only when its driving data is non-empty. Without a
/// domain block the caller's default prompt (or the bare role sentence) is
/// returned unchanged.
pub fn compose_system_prompt(config: &BotConfig) -> String {
    let Some(aqua) = &config.aquaculture else {
        return config
            .default_prompt
            .clone()
            .unwrap_or_else(|| ROLE_SENTENCE.to_string());
    };

    let mut prompts = Vec::with_capacity(8);

    prompts.push(ROLE_SENTENCE.to_string());

    prompts.push(format!(
        "Your expertise covers: {}.",
        aqua.knowledge_domains
            .iter()
            .map(|domain| domain.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    ));

    prompts.push(format!(
        "Provide {}-level information in {} language.",
        aqua.expertise_level, aqua.language
    ));

    prompts.push(if aqua.use_industry_terms {
        "Use industry-specific terminology and technical language.".to_string()
    } else {
        "Use simplified language accessible to general audience.".to_string()
    });

    if aqua.validation.require_source_citation {
        prompts.push("Include source citations for technical information and data.".to_string());
    }

    if !aqua.customization.species_specific.is_empty() {
        prompts.push(format!(
            "Specialized in: {}.",
            aqua.customization.species_specific.join(", ")
        ));
    }

    if !aqua.customization.regional_guidelines.is_empty() {
        prompts.push(format!(
            "Follow guidelines for: {}.",
            aqua.customization.regional_guidelines.join(", ")
        ));
    }

    if let Some(default_prompt) = &config.default_prompt {
        if !default_prompt.is_empty() {
            prompts.push(default_prompt.clone());
        }
    }

    prompts.join("\n")
}
