//! Cross-field invariant checks for the domain configuration.
//!
//! These run only after structural defaults are applied. Checks are ordered
//! and each produces a distinct failure message, so callers can tell exactly
//! which rule rejected the configuration.

use std::collections::HashSet;

use super::aquaculture::{AquacultureConfig, DataSource, ExpertiseLevel};
use crate::error::LlmError;

/// Farming methods considered valid per species. Closed table: a species
/// without an entry never validates.
fn valid_methods_for(species: &str) -> Option<&'static [&'static str]> {
    match species {
        "shrimp" => Some(&["intensive", "semi-intensive", "extensive"]),
        "tilapia" => Some(&["cage", "pond", "recirculating"]),
        "pangasius" => Some(&["intensive", "semi-intensive"]),
        _ => None,
    }
}

pub(crate) fn validate_domain(config: &AquacultureConfig) -> Result<(), LlmError> {
    check_knowledge_domains(config)?;
    check_duplicate_data_sources(config)?;
    check_review_threshold(config)?;
    check_alert_system_dependencies(config)?;
    check_citation_sources(config)?;
    check_species_methods(config)?;
    check_advanced_data_sources(config)?;
    Ok(())
}

fn check_knowledge_domains(config: &AquacultureConfig) -> Result<(), LlmError> {
    if config.knowledge_domains.is_empty() {
        return Err(LlmError::ConfigurationError(
            "At least one knowledge domain is required".to_string(),
        ));
    }
    Ok(())
}

fn check_duplicate_data_sources(config: &AquacultureConfig) -> Result<(), LlmError> {
    let mut seen = HashSet::new();
    for source in &config.data_sources {
        if !seen.insert(source) {
            return Err(LlmError::ConfigurationError(format!(
                "Duplicate data source: {source}"
            )));
        }
    }
    Ok(())
}

fn check_review_threshold(config: &AquacultureConfig) -> Result<(), LlmError> {
    let threshold = config.validation.expert_review_threshold;
    if !(0.5..=1.0).contains(&threshold) {
        return Err(LlmError::ConfigurationError(format!(
            "Expert review threshold must be between 0.5 and 1.0, got {threshold}"
        )));
    }
    Ok(())
}

fn check_alert_system_dependencies(config: &AquacultureConfig) -> Result<(), LlmError> {
    let tools = &config.tools;
    if tools.alert_system && !(tools.water_calculator || tools.disease_identifier) {
        return Err(LlmError::ConfigurationError(
            "Alert system requires the water calculator or the disease identifier to be enabled"
                .to_string(),
        ));
    }
    Ok(())
}

fn check_citation_sources(config: &AquacultureConfig) -> Result<(), LlmError> {
    let validation = &config.validation;
    if validation.require_source_citation && validation.fact_check_sources.is_empty() {
        return Err(LlmError::ConfigurationError(
            "Source citation requires at least one fact check source".to_string(),
        ));
    }
    Ok(())
}

fn check_species_methods(config: &AquacultureConfig) -> Result<(), LlmError> {
    let customization = &config.customization;
    for species in &customization.species_specific {
        let Some(methods) = valid_methods_for(species) else {
            return Err(LlmError::ConfigurationError(format!(
                "Unknown species: {species}"
            )));
        };
        let covered = customization
            .farming_methods
            .iter()
            .any(|method| methods.contains(&method.as_str()));
        if !covered {
            return Err(LlmError::ConfigurationError(format!(
                "No valid farming method configured for species: {species}"
            )));
        }
    }
    Ok(())
}

fn check_advanced_data_sources(config: &AquacultureConfig) -> Result<(), LlmError> {
    if config.expertise_level == ExpertiseLevel::Advanced
        && !config.data_sources.contains(&DataSource::ResearchPapers)
    {
        return Err(LlmError::ConfigurationError(
            "Advanced expertise level requires the research_papers data source".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_table_is_closed() {
        assert!(valid_methods_for("shrimp").is_some());
        assert!(valid_methods_for("tilapia").is_some());
        assert!(valid_methods_for("pangasius").is_some());
        assert!(valid_methods_for("salmon").is_none());
        assert!(valid_methods_for("").is_none());
    }

    #[test]
    fn pangasius_has_no_extensive_method() {
        let methods = valid_methods_for("pangasius").unwrap();
        assert!(!methods.contains(&"extensive"));
    }
}
