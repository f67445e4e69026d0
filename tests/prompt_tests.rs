//! Prompt composition: fragment presence, ordering and task templates.

use std::collections::HashSet;
use std::str::FromStr;

use aquanet::prelude::*;
use aquanet::prompt::task;

fn domain_for_ordering() -> AquacultureConfig {
    AquacultureConfig {
        knowledge_domains: vec![KnowledgeDomain::WaterQuality],
        data_sources: vec![DataSource::IndustryStandards],
        expertise_level: ExpertiseLevel::Intermediate,
        language: Language::En,
        use_industry_terms: true,
        tools: ToolIntegrations::default(),
        validation: AnswerValidation {
            require_source_citation: true,
            fact_check_sources: vec!["FAO technical papers".to_string()],
            ..AnswerValidation::default()
        },
        customization: Customization::default(),
    }
}

#[test]
fn fragments_appear_in_fixed_order() {
    let config = BotConfig::builder()
        .api_key("test-key")
        .aquaculture(domain_for_ordering())
        .build()
        .unwrap();

    let prompt = compose_system_prompt(&config);
    let lines: Vec<&str> = prompt.lines().collect();

    assert_eq!(
        lines[0],
        "You are an AI assistant specialized in aquaculture business."
    );

    let covers = prompt.find("Your expertise covers: water_quality.").unwrap();
    let level = prompt
        .find("Provide intermediate-level information in en language.")
        .unwrap();
    let terms = prompt
        .find("Use industry-specific terminology and technical language.")
        .unwrap();
    let citations = prompt
        .find("Include source citations for technical information and data.")
        .unwrap();

    assert!(covers < level);
    assert!(level < terms);
    assert!(terms < citations);

    assert!(!prompt.contains("Specialized in:"));
    assert!(!prompt.contains("Follow guidelines for:"));
}

#[test]
fn species_and_regional_fragments_follow_citations() {
    let domain = AquacultureConfig {
        customization: Customization {
            species_specific: vec!["shrimp".to_string()],
            farming_methods: vec!["intensive".to_string()],
            regional_guidelines: vec!["VietGAP".to_string()],
            ..Customization::default()
        },
        ..domain_for_ordering()
    };
    let config = BotConfig::builder()
        .api_key("test-key")
        .aquaculture(domain)
        .build()
        .unwrap();

    let prompt = compose_system_prompt(&config);
    let citations = prompt.find("Include source citations").unwrap();
    let species = prompt.find("Specialized in: shrimp.").unwrap();
    let regional = prompt.find("Follow guidelines for: VietGAP.").unwrap();

    assert!(citations < species);
    assert!(species < regional);
}

#[test]
fn simplified_language_alternative_is_used() {
    let domain = AquacultureConfig {
        use_industry_terms: false,
        ..domain_for_ordering()
    };
    let config = BotConfig::builder()
        .api_key("test-key")
        .aquaculture(domain)
        .build()
        .unwrap();

    let prompt = compose_system_prompt(&config);
    assert!(prompt.contains("Use simplified language accessible to general audience."));
    assert!(!prompt.contains("industry-specific terminology"));
}

#[test]
fn caller_default_prompt_is_appended_last() {
    let config = BotConfig::builder()
        .api_key("test-key")
        .default_prompt("Answer briefly.")
        .aquaculture(domain_for_ordering())
        .build()
        .unwrap();

    let prompt = compose_system_prompt(&config);
    assert!(prompt.ends_with("Answer briefly."));
}

#[test]
fn without_domain_config_the_default_prompt_wins() {
    let with_default = BotConfig::builder()
        .api_key("test-key")
        .default_prompt("You are a terse assistant.")
        .build()
        .unwrap();
    assert_eq!(
        compose_system_prompt(&with_default),
        "You are a terse assistant."
    );

    let without_default = BotConfig::builder().api_key("test-key").build().unwrap();
    assert_eq!(
        compose_system_prompt(&without_default),
        "You are an AI assistant specialized in aquaculture business."
    );
}

#[test]
fn bot_precomposes_the_default_system_prompt() {
    let config = BotConfig::builder()
        .api_key("test-key")
        .aquaculture(domain_for_ordering())
        .build()
        .unwrap();
    let expected = compose_system_prompt(&config);

    let bot = AquanetBot::new(config).unwrap();
    assert_eq!(bot.default_system_prompt(), expected);
}

#[test]
fn task_templates_map_one_to_one() {
    let data = AquacultureData::default();

    let instructions: HashSet<String> = TaskType::ALL
        .iter()
        .map(|task| {
            let prompt = task::user_prompt(*task, &data).unwrap();
            prompt.lines().next().unwrap().to_string()
        })
        .collect();
    assert_eq!(instructions.len(), 8);

    let elaborations: HashSet<String> = TaskType::ALL
        .iter()
        .map(|task| task::system_prompt(*task))
        .collect();
    assert_eq!(elaborations.len(), 8);

    for task in TaskType::ALL {
        assert!(
            task::system_prompt(task)
                .starts_with("You are an expert consultant in the aquaculture industry. ")
        );
    }
}

#[test]
fn user_prompt_embeds_the_pretty_payload() {
    let data = AquacultureData {
        environmental: Some(EnvironmentalData {
            water_quality: Some(WaterQualityReadings {
                temperature: Some(28.5),
                ph: Some(7.8),
                dissolved_oxygen: Some(5.2),
                ..WaterQualityReadings::default()
            }),
            weather: None,
        }),
        ..AquacultureData::default()
    };

    let prompt = task::user_prompt(TaskType::WaterQualityAnalysis, &data).unwrap();
    assert!(prompt.starts_with("Analyze the following water quality parameters"));
    assert!(prompt.contains("\"temperature\": 28.5"));
    assert!(prompt.contains("\"pH\": 7.8"));
    // Absent groups are omitted entirely.
    assert!(!prompt.contains("production"));
    assert!(!prompt.contains("weather"));
}

#[test]
fn task_ids_round_trip() {
    for task in TaskType::ALL {
        assert_eq!(TaskType::from_str(task.as_str()).unwrap(), task);
    }
}

#[test]
fn unknown_task_id_is_unsupported() {
    let result = TaskType::from_str("financial_audit");
    match result {
        Err(LlmError::UnsupportedOperation(message)) => {
            assert!(message.contains("Unsupported task type"));
            assert!(message.contains("financial_audit"));
        }
        other => panic!("expected unsupported operation, got {other:?}"),
    }
}

#[test]
fn task_temperatures_match_their_tiers() {
    let expected = [
        (TaskType::WaterQualityAnalysis, 0.3),
        (TaskType::DiseaseDiagnosis, 0.3),
        (TaskType::CostAnalysis, 0.3),
        (TaskType::FeedingOptimization, 0.5),
        (TaskType::GrowthPrediction, 0.5),
        (TaskType::EnvironmentalImpact, 0.5),
        (TaskType::TechnicalAdvice, 0.7),
        (TaskType::MarketAnalysis, 0.7),
    ];
    for (task, temperature) in expected {
        assert!((task.temperature() - temperature).abs() < f32::EPSILON);
    }
}
