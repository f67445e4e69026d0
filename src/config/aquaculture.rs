//! Domain configuration for the aquaculture advisory persona.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Knowledge domains the assistant may claim expertise in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnowledgeDomain {
    FarmingTechniques,
    WaterQuality,
    DiseaseManagement,
    Breeding,
    FeedManagement,
    Production,
    MarketAnalysis,
    Regulations,
}

impl KnowledgeDomain {
    /// Token used in prompts and serialized configuration.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FarmingTechniques => "farming_techniques",
            Self::WaterQuality => "water_quality",
            Self::DiseaseManagement => "disease_management",
            Self::Breeding => "breeding",
            Self::FeedManagement => "feed_management",
            Self::Production => "production",
            Self::MarketAnalysis => "market_analysis",
            Self::Regulations => "regulations",
        }
    }
}

impl fmt::Display for KnowledgeDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference data sources the assistant may cite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    ResearchPapers,
    IndustryStandards,
    TechnicalGuidelines,
    ExpertKnowledge,
    CaseStudies,
    MarketReports,
}

impl DataSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ResearchPapers => "research_papers",
            Self::IndustryStandards => "industry_standards",
            Self::TechnicalGuidelines => "technical_guidelines",
            Self::ExpertKnowledge => "expert_knowledge",
            Self::CaseStudies => "case_studies",
            Self::MarketReports => "market_reports",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Depth of the information the assistant provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpertiseLevel {
    Basic,
    Intermediate,
    Advanced,
}

impl ExpertiseLevel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExpertiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Answer language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Vi,
    En,
}

impl Language {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vi => "vi",
            Self::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nested settings that specialize the generic assistant into an
/// aquaculture advisory persona.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AquacultureConfig {
    #[serde(default = "default_knowledge_domains")]
    pub knowledge_domains: Vec<KnowledgeDomain>,
    #[serde(default = "default_data_sources")]
    pub data_sources: Vec<DataSource>,
    #[serde(default = "default_expertise_level")]
    pub expertise_level: ExpertiseLevel,
    #[serde(default = "default_language")]
    pub language: Language,
    #[serde(default = "default_true")]
    pub use_industry_terms: bool,
    #[serde(default)]
    pub tools: ToolIntegrations,
    #[serde(default)]
    pub validation: AnswerValidation,
    #[serde(default)]
    pub customization: Customization,
}

impl Default for AquacultureConfig {
    fn default() -> Self {
        Self {
            knowledge_domains: default_knowledge_domains(),
            data_sources: default_data_sources(),
            expertise_level: default_expertise_level(),
            language: default_language(),
            use_industry_terms: true,
            tools: ToolIntegrations::default(),
            validation: AnswerValidation::default(),
            customization: Customization::default(),
        }
    }
}

/// Feature flags for the integrated farm tools.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolIntegrations {
    #[serde(default)]
    pub water_calculator: bool,
    #[serde(default)]
    pub farming_calendar: bool,
    #[serde(default)]
    pub alert_system: bool,
    #[serde(default)]
    pub disease_identifier: bool,
    #[serde(default)]
    pub feed_optimizer: bool,
}

/// Accuracy controls for generated answers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerValidation {
    #[serde(default = "default_true")]
    pub require_source_citation: bool,
    #[serde(default = "default_true")]
    pub confidence_scoring: bool,
    #[serde(default = "default_review_threshold")]
    pub expert_review_threshold: f32,
    #[serde(default)]
    pub fact_check_sources: Vec<String>,
}

impl Default for AnswerValidation {
    fn default() -> Self {
        Self {
            require_source_citation: true,
            confidence_scoring: true,
            expert_review_threshold: default_review_threshold(),
            fact_check_sources: Vec::new(),
        }
    }
}

/// Farm-specific customization of the persona.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customization {
    #[serde(default)]
    pub species_specific: Vec<String>,
    #[serde(default)]
    pub farming_methods: Vec<String>,
    #[serde(default)]
    pub regional_guidelines: Vec<String>,
    #[serde(default)]
    pub custom_prompts: HashMap<String, String>,
}

fn default_knowledge_domains() -> Vec<KnowledgeDomain> {
    vec![KnowledgeDomain::FarmingTechniques]
}

fn default_data_sources() -> Vec<DataSource> {
    vec![DataSource::IndustryStandards]
}

const fn default_expertise_level() -> ExpertiseLevel {
    ExpertiseLevel::Intermediate
}

const fn default_language() -> Language {
    Language::Vi
}

const fn default_true() -> bool {
    true
}

const fn default_review_threshold() -> f32 {
    0.8
}
