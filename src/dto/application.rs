use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicationSummary {
    pub id: String,
    pub client_id: String,
    pub name: String,
    pub app_type: String,
    pub logo_url: String,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApplicationDetails {
    pub id: String,
    pub client_id: String,
    pub client_secret: String,
    pub name: String,
    pub description: String,
    pub app_type: String,
    pub logo_url: String,
    pub domain: String,
    pub token_endpoint_auth_method: String,
    pub allowed_callback_urls: Vec<String>,
    pub allowed_logout_urls: Vec<String>,
    pub allowed_web_origins: Vec<String>,
    pub tenant_id: String,
}
