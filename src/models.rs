use crate::nav::{NavEntry, UiState};
use crate::panels::Output;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilRequest {
    #[serde(rename = "pH")]
    pub ph: String,
    #[serde(rename = "potashLevel")]
    pub potash_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootprintRequest {
    pub electricity: f64,
    pub water: f64,
    pub transport: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyQuery {
    pub lat: String,
    pub lon: String,
    #[serde(rename = "type")]
    pub center_type: String,
}

#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    pub prediction: String,
    #[serde(default)]
    pub waste_type: Option<String>,
    #[serde(default)]
    pub recycling_process: Option<String>,
    #[serde(default)]
    pub dustbin: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SoilReport {
    pub result: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FootprintReport {
    pub footprint: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecyclingCenter {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(rename = "type", default = "general_center_type")]
    pub center_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NearbyReport {
    pub centers: Vec<RecyclingCenter>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

fn general_center_type() -> String {
    "general".to_string()
}

#[derive(Debug, Deserialize)]
pub struct FeaturesClick {
    #[serde(default)]
    pub target: String,
}

#[derive(Debug, Deserialize)]
pub struct GuideForm {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct GuideParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SoilForm {
    #[serde(rename = "pH", default)]
    pub ph: String,
    #[serde(rename = "potashLevel", default)]
    pub potash_level: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FootprintForm {
    #[serde(default)]
    pub electricity: String,
    #[serde(default)]
    pub water: String,
    #[serde(default)]
    pub transport: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NearbyForm {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lon: String,
    #[serde(rename = "centerType", default)]
    pub center_type: String,
}

#[derive(Debug, Serialize)]
pub struct PageSnapshot {
    pub ui: UiState,
    pub active_entry: Option<String>,
    pub entries: Vec<NavEntry>,
    pub guide_query: String,
    pub guide_list: Vec<String>,
    pub result: Output,
    pub soil_result: Output,
    pub footprint_result: Output,
    pub nearby_result: Output,
}
