//! Structured payloads for aquaculture advisory tasks.
//!
//! Every group is optional; absent fields are omitted from the serialized
//! prompt payload so task prompts stay free of nulls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain data handed to the task prompt composer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AquacultureData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environmental: Option<EnvironmentalData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biological: Option<BiologicalData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<ProductionData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RecordMetadata>,
}

/// Environmental observations around the pond.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_quality: Option<WaterQualityReadings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherReadings>,
}

/// Water quality measurements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterQualityReadings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, rename = "pH", skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dissolved_oxygen: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salinity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ammonia: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nitrite: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alkalinity: Option<f64>,
}

/// Weather conditions at the farm.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReadings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,
}

/// Stock observations: species, growth stage and health indicators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiologicalData {
    pub species: String,
    pub stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feeding_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survival_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease_symptoms: Option<Vec<String>>,
}

/// Production cycle figures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stocking_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harvest_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed_used: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fcr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costs: Option<CostBreakdown>,
}

/// Cost components of a production cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub electricity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<f64>,
}

/// Where and when the data was recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    pub farm_id: String,
    pub pond_id: String,
    pub timestamp: DateTime<Utc>,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_level: Option<f64>,
}
