// Hipolabs university directory payloads
// https://github.com/Hipo/university-domains-list-api

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HipolabsUniversity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default, rename = "state-province")]
    pub state_province: Option<String>,
    #[serde(default)]
    pub domains: Option<Vec<String>>,
    #[serde(default)]
    pub web_pages: Option<Vec<String>>,
}
