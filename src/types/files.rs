//! File metadata

use serde::Deserialize;

/// Response for `/files/getInfo`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfoResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(rename = "type")]
    pub file_type: Option<String>,
    pub size: Option<u64>,
    pub filename: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}
