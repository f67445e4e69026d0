//! Task-oriented advisory operations.

use crate::error::LlmError;
use crate::prompt::task::{self, TaskType};
use crate::registry::ProviderRegistry;
use crate::types::{AquacultureData, LlmConfig, LlmInput};

/// Domain service exposing one operation per advisory task type.
///
/// Providers come from the registry, so repeated calls reuse one
/// initialized client per (provider, model) pair. Each operation fixes the
/// sampling temperature of its task type.
pub struct AquacultureService {
    config: LlmConfig,
    registry: ProviderRegistry,
}

impl AquacultureService {
    pub fn new(config: LlmConfig, registry: ProviderRegistry) -> Self {
        Self { config, registry }
    }

    /// Assess water quality readings and recommend corrections.
    pub async fn analyze_water_quality(&self, data: &AquacultureData) -> Result<String, LlmError> {
        self.run_task(TaskType::WaterQualityAnalysis, data).await
    }

    /// Diagnose diseases from symptoms and environmental conditions.
    pub async fn diagnose_diseases(&self, data: &AquacultureData) -> Result<String, LlmError> {
        self.run_task(TaskType::DiseaseDiagnosis, data).await
    }

    /// Propose an optimized feeding plan.
    pub async fn optimize_feeding(&self, data: &AquacultureData) -> Result<String, LlmError> {
        self.run_task(TaskType::FeedingOptimization, data).await
    }

    /// Predict growth and yield from historical data.
    pub async fn predict_growth(&self, data: &AquacultureData) -> Result<String, LlmError> {
        self.run_task(TaskType::GrowthPrediction, data).await
    }

    /// Break down production costs and suggest savings.
    pub async fn analyze_costs(&self, data: &AquacultureData) -> Result<String, LlmError> {
        self.run_task(TaskType::CostAnalysis, data).await
    }

    /// Give technical advice on the farming process.
    pub async fn technical_advice(&self, data: &AquacultureData) -> Result<String, LlmError> {
        self.run_task(TaskType::TechnicalAdvice, data).await
    }

    /// Analyze market conditions and business strategy.
    pub async fn analyze_market(&self, data: &AquacultureData) -> Result<String, LlmError> {
        self.run_task(TaskType::MarketAnalysis, data).await
    }

    /// Assess environmental impact and sustainability options.
    pub async fn assess_environmental_impact(
        &self,
        data: &AquacultureData,
    ) -> Result<String, LlmError> {
        self.run_task(TaskType::EnvironmentalImpact, data).await
    }

    async fn run_task(&self, task: TaskType, data: &AquacultureData) -> Result<String, LlmError> {
        let provider = self.registry.get_or_create(&self.config).await?;

        let input = LlmInput {
            prompt: task::user_prompt(task, data)?,
            system_prompt: Some(task::system_prompt(task)),
            temperature: Some(task.temperature()),
            max_tokens: None,
        };

        let output = provider.query(input).await?;
        Ok(output.content)
    }
}
