use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct TenantSummary {
    pub tenant_id: String,
    pub friendly_name: String,
    pub region: String,
    pub environment_tag: String,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct TenantSettings {
    pub friendly_name: String,
    pub picture_url: String,
    pub support_email: String,
    pub support_url: String,
    pub default_audience: String,
    pub default_directory: String,
    pub error_page: ErrorPage,
    pub device_flow: DeviceFlow,
    pub flags: TenantFlags,
    pub allowed_logout_urls: Vec<String>,
    pub session_lifetime: u32,
    pub idle_session_lifetime: u32,
    pub sandbox_version: String,
    pub sandbox_versions_available: Vec<String>,
    pub default_redirection_uri: String,
    pub enabled_locales: Vec<String>,
    pub session_cookie: SessionCookie,
    pub tenant_id: String,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorPage {
    pub html: String,
    pub show_log_link: bool,
    pub url: String,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceFlow {
    pub charset: String,
    pub mask: String,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct TenantFlags {
    pub enable_client_connections: bool,
    pub enable_apis_section: bool,
    pub enable_public_signup_user_exists_error: bool,
    pub disable_clickjack_protection_headers: bool,
    pub universal_login: bool,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionCookie {
    pub mode: String,
}
