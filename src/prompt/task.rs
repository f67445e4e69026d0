//! Task prompt templates and per-task sampling temperatures.
//!
//! Each task type maps one-to-one to a fixed instruction sentence (user
//! prompt), an elaboration sentence (system prompt) and a sampling
//! temperature. There is no fallthrough: unknown task ids are rejected at
//! parse time and never produce a partial prompt.

use std::fmt;
use std::str::FromStr;

use crate::error::LlmError;
use crate::types::AquacultureData;

/// The eight advisory task categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskType {
    WaterQualityAnalysis,
    DiseaseDiagnosis,
    FeedingOptimization,
    GrowthPrediction,
    CostAnalysis,
    TechnicalAdvice,
    MarketAnalysis,
    EnvironmentalImpact,
}

impl TaskType {
    pub const ALL: [TaskType; 8] = [
        Self::WaterQualityAnalysis,
        Self::DiseaseDiagnosis,
        Self::FeedingOptimization,
        Self::GrowthPrediction,
        Self::CostAnalysis,
        Self::TechnicalAdvice,
        Self::MarketAnalysis,
        Self::EnvironmentalImpact,
    ];

    /// Stable task identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WaterQualityAnalysis => "water_quality_analysis",
            Self::DiseaseDiagnosis => "disease_diagnosis",
            Self::FeedingOptimization => "feeding_optimization",
            Self::GrowthPrediction => "growth_prediction",
            Self::CostAnalysis => "cost_analysis",
            Self::TechnicalAdvice => "technical_advice",
            Self::MarketAnalysis => "market_analysis",
            Self::EnvironmentalImpact => "environmental_impact",
        }
    }

    /// Sampling temperature fixed per task: analytical tasks favor
    /// determinism, advisory tasks favor breadth.
    pub const fn temperature(&self) -> f32 {
        match self {
            Self::WaterQualityAnalysis | Self::DiseaseDiagnosis | Self::CostAnalysis => 0.3,
            Self::FeedingOptimization | Self::GrowthPrediction | Self::EnvironmentalImpact => 0.5,
            Self::TechnicalAdvice | Self::MarketAnalysis => 0.7,
        }
    }

    const fn instruction(&self) -> &'static str {
        match self {
            Self::WaterQualityAnalysis => {
                "Analyze the following water quality parameters and provide an assessment with recommendations:"
            }
            Self::DiseaseDiagnosis => {
                "Based on the following symptoms and environmental parameters, diagnose the disease and propose a treatment plan:"
            }
            Self::FeedingOptimization => {
                "Based on the following data, propose an optimized feeding plan:"
            }
            Self::GrowthPrediction => {
                "Based on the following historical data, predict growth and yield:"
            }
            Self::CostAnalysis => {
                "Analyze the production costs and propose optimization measures based on the following data:"
            }
            Self::TechnicalAdvice => {
                "Based on the following information, provide detailed technical advice:"
            }
            Self::MarketAnalysis => {
                "Analyze the market and propose a business strategy based on the following data:"
            }
            Self::EnvironmentalImpact => {
                "Assess the environmental impact and propose sustainable solutions based on the following data:"
            }
        }
    }

    const fn elaboration(&self) -> &'static str {
        match self {
            Self::WaterQualityAnalysis => {
                "Analyze the water quality parameters in detail, assess their suitability, and give concrete recommendations for improvement. Focus on critical parameters such as dissolved oxygen, pH, alkalinity, and the nitrogen compounds."
            }
            Self::DiseaseDiagnosis => {
                "Analyze the disease symptoms and environmental conditions, give an accurate diagnosis, and propose appropriate treatment and prevention measures. Prefer environmentally friendly solutions."
            }
            Self::FeedingOptimization => {
                "Analyze and propose an optimal feeding plan covering feed type, pellet size, frequency, and ration. Consider growth stage, environmental conditions, and economic efficiency."
            }
            Self::GrowthPrediction => {
                "Predict growth and yield from the historical data. Analyze the influencing factors and propose improvements. Provide concrete forecast figures with confidence levels."
            }
            Self::CostAnalysis => {
                "Analyze the cost structure in detail, identify inefficiencies, and propose optimization measures. Calculate ROI figures and suggest cost reduction strategies."
            }
            Self::TechnicalAdvice => {
                "Give comprehensive technical advice on the farming process, including pond preparation, environmental management, disease prevention, and harvesting. Keep recommendations practical for real farm conditions."
            }
            Self::MarketAnalysis => {
                "Analyze market trends, supply and demand, pricing, and competitors. Propose a suitable business strategy and new development opportunities."
            }
            Self::EnvironmentalImpact => {
                "Assess the environmental impact of the farming operation, including waste, resource use, and biodiversity. Propose sustainable and environmentally friendly solutions."
            }
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = LlmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "water_quality_analysis" => Ok(Self::WaterQualityAnalysis),
            "disease_diagnosis" => Ok(Self::DiseaseDiagnosis),
            "feeding_optimization" => Ok(Self::FeedingOptimization),
            "growth_prediction" => Ok(Self::GrowthPrediction),
            "cost_analysis" => Ok(Self::CostAnalysis),
            "technical_advice" => Ok(Self::TechnicalAdvice),
            "market_analysis" => Ok(Self::MarketAnalysis),
            "environmental_impact" => Ok(Self::EnvironmentalImpact),
            other => Err(LlmError::UnsupportedOperation(format!(
                "Unsupported task type: {other}"
            ))),
        }
    }
}

const EXPERT_PREAMBLE: &str = "You are an expert consultant in the aquaculture industry. ";

/// Build the user prompt: the task instruction followed by the
/// pretty-printed data payload.
pub fn user_prompt(task: TaskType, data: &AquacultureData) -> Result<String, LlmError> {
    let payload = serde_json::to_string_pretty(data)?;
    Ok(format!("{}\n{}", task.instruction(), payload))
}

/// Build the task system prompt: expert preamble plus the task elaboration.
pub fn system_prompt(task: TaskType) -> String {
    format!("{EXPERT_PREAMBLE}{}", task.elaboration())
}
