//! Configuration validation: structural defaults and cross-field invariants.

use aquanet::prelude::*;

fn valid_domain() -> AquacultureConfig {
    AquacultureConfig {
        knowledge_domains: vec![KnowledgeDomain::WaterQuality],
        data_sources: vec![DataSource::IndustryStandards],
        expertise_level: ExpertiseLevel::Intermediate,
        language: Language::En,
        use_industry_terms: true,
        tools: ToolIntegrations::default(),
        validation: AnswerValidation {
            require_source_citation: false,
            ..AnswerValidation::default()
        },
        customization: Customization::default(),
    }
}

fn build_with(domain: AquacultureConfig) -> Result<BotConfig, LlmError> {
    BotConfig::builder()
        .api_key("test-key")
        .aquaculture(domain)
        .build()
}

fn assert_config_error(result: Result<BotConfig, LlmError>, needle: &str) {
    match result {
        Err(LlmError::ConfigurationError(message)) => {
            assert!(
                message.contains(needle),
                "expected message containing {needle:?}, got {message:?}"
            );
        }
        Err(other) => panic!("expected configuration error, got {other:?}"),
        Ok(_) => panic!("expected configuration error, got a valid config"),
    }
}

#[test]
fn defaults_are_applied() {
    let config = BotConfig::builder().api_key("test-key").build().unwrap();

    assert_eq!(config.base_url, "https://api.deepseek.com/v1");
    assert_eq!(config.model, "deepseek-chat");
    assert!((config.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(config.max_tokens, 1000);
    assert_eq!(config.response_mode, ResponseMode::Buffered);
    assert!(config.aquaculture.is_none());
}

#[test]
fn missing_api_key_is_rejected() {
    assert!(BotConfig::builder().build().is_err());
}

#[test]
fn temperature_out_of_range_is_rejected() {
    let result = BotConfig::builder().api_key("k").temperature(1.5).build();
    assert_config_error(result, "Temperature");

    let result = BotConfig::builder().api_key("k").temperature(-0.1).build();
    assert_config_error(result, "Temperature");
}

#[test]
fn zero_max_tokens_is_rejected() {
    let result = BotConfig::builder().api_key("k").max_tokens(0).build();
    assert_config_error(result, "Max tokens");
}

#[test]
fn malformed_base_url_is_rejected() {
    let result = BotConfig::builder()
        .api_key("k")
        .base_url("ftp://example.com")
        .build();
    assert_config_error(result, "Base URL");
}

#[test]
fn duplicate_data_sources_are_rejected() {
    let domain = AquacultureConfig {
        data_sources: vec![DataSource::IndustryStandards, DataSource::IndustryStandards],
        ..valid_domain()
    };
    assert_config_error(build_with(domain), "Duplicate data source");
}

#[test]
fn alert_system_requires_a_monitoring_tool() {
    let base = valid_domain();

    let alert_only = AquacultureConfig {
        tools: ToolIntegrations {
            alert_system: true,
            ..ToolIntegrations::default()
        },
        ..base.clone()
    };
    assert_config_error(build_with(alert_only), "Alert system");

    let with_water_calculator = AquacultureConfig {
        tools: ToolIntegrations {
            alert_system: true,
            water_calculator: true,
            ..ToolIntegrations::default()
        },
        ..base.clone()
    };
    assert!(build_with(with_water_calculator).is_ok());

    let with_disease_identifier = AquacultureConfig {
        tools: ToolIntegrations {
            alert_system: true,
            disease_identifier: true,
            ..ToolIntegrations::default()
        },
        ..base
    };
    assert!(build_with(with_disease_identifier).is_ok());
}

#[test]
fn citation_requires_fact_check_sources() {
    let missing_sources = AquacultureConfig {
        validation: AnswerValidation {
            require_source_citation: true,
            fact_check_sources: vec![],
            ..AnswerValidation::default()
        },
        ..valid_domain()
    };
    assert_config_error(build_with(missing_sources), "fact check source");

    let with_sources = AquacultureConfig {
        validation: AnswerValidation {
            require_source_citation: true,
            fact_check_sources: vec!["FAO technical papers".to_string()],
            ..AnswerValidation::default()
        },
        ..valid_domain()
    };
    assert!(build_with(with_sources).is_ok());
}

#[test]
fn defaulted_domain_block_still_requires_citation_sources() {
    // The documented defaults enable citation with no sources configured, so
    // a fully defaulted block does not validate until sources are supplied
    // or citation is turned off.
    assert_config_error(build_with(AquacultureConfig::default()), "fact check source");
}

#[test]
fn species_must_have_a_compatible_farming_method() {
    let mismatch = AquacultureConfig {
        customization: Customization {
            species_specific: vec!["shrimp".to_string()],
            farming_methods: vec!["cage".to_string()],
            ..Customization::default()
        },
        ..valid_domain()
    };
    assert_config_error(build_with(mismatch), "shrimp");

    let matching = AquacultureConfig {
        customization: Customization {
            species_specific: vec!["shrimp".to_string()],
            farming_methods: vec!["intensive".to_string()],
            ..Customization::default()
        },
        ..valid_domain()
    };
    assert!(build_with(matching).is_ok());
}

#[test]
fn unknown_species_never_validates() {
    let unknown = AquacultureConfig {
        customization: Customization {
            species_specific: vec!["salmon".to_string()],
            farming_methods: vec![
                "intensive".to_string(),
                "semi-intensive".to_string(),
                "extensive".to_string(),
                "cage".to_string(),
                "pond".to_string(),
                "recirculating".to_string(),
            ],
            ..Customization::default()
        },
        ..valid_domain()
    };
    assert_config_error(build_with(unknown), "Unknown species");
}

#[test]
fn advanced_expertise_requires_research_papers() {
    let without_research = AquacultureConfig {
        expertise_level: ExpertiseLevel::Advanced,
        data_sources: vec![DataSource::IndustryStandards, DataSource::CaseStudies],
        ..valid_domain()
    };
    assert_config_error(build_with(without_research), "research_papers");

    let with_research = AquacultureConfig {
        expertise_level: ExpertiseLevel::Advanced,
        data_sources: vec![DataSource::ResearchPapers, DataSource::CaseStudies],
        ..valid_domain()
    };
    assert!(build_with(with_research).is_ok());
}

#[test]
fn review_threshold_must_stay_in_range() {
    for bad in [0.3_f32, 0.49, 1.01, 2.0] {
        let domain = AquacultureConfig {
            validation: AnswerValidation {
                require_source_citation: false,
                expert_review_threshold: bad,
                ..AnswerValidation::default()
            },
            ..valid_domain()
        };
        assert_config_error(build_with(domain), "Expert review threshold");
    }

    for good in [0.5_f32, 0.8, 1.0] {
        let domain = AquacultureConfig {
            validation: AnswerValidation {
                require_source_citation: false,
                expert_review_threshold: good,
                ..AnswerValidation::default()
            },
            ..valid_domain()
        };
        assert!(build_with(domain).is_ok());
    }
}

#[test]
fn empty_knowledge_domains_are_rejected() {
    let domain = AquacultureConfig {
        knowledge_domains: vec![],
        ..valid_domain()
    };
    assert_config_error(build_with(domain), "knowledge domain");
}

#[test]
fn invalid_domain_block_aborts_whole_construction() {
    let invalid = AquacultureConfig {
        data_sources: vec![DataSource::CaseStudies, DataSource::CaseStudies],
        ..valid_domain()
    };
    let result = BotConfig::builder()
        .api_key("test-key")
        .aquaculture(invalid)
        .build();
    assert!(result.is_err());

    // The bot constructor re-validates hand-assembled configs the same way.
    let mut config = BotConfig::builder().api_key("test-key").build().unwrap();
    config.aquaculture = Some(AquacultureConfig {
        data_sources: vec![DataSource::CaseStudies, DataSource::CaseStudies],
        ..valid_domain()
    });
    assert!(AquanetBot::new(config).is_err());
}

#[test]
fn raw_json_config_is_shaped_with_defaults() {
    let raw = serde_json::json!({
        "apiKey": "test-key",
        "aquaculture": {
            "knowledgeDomains": ["water_quality", "disease_management"],
            "dataSources": ["industry_standards"],
            "expertiseLevel": "basic",
            "language": "en",
            "useIndustryTerms": false,
            "validation": { "requireSourceCitation": false }
        }
    });

    let config: BotConfig = serde_json::from_value(raw).unwrap();
    assert_eq!(config.base_url, "https://api.deepseek.com/v1");
    assert_eq!(config.max_tokens, 1000);
    config.validate().unwrap();

    let aqua = config.aquaculture.as_ref().unwrap();
    assert_eq!(aqua.knowledge_domains.len(), 2);
    assert_eq!(aqua.expertise_level, ExpertiseLevel::Basic);
    assert!(!aqua.tools.alert_system);
    assert!(aqua.customization.species_specific.is_empty());
}
