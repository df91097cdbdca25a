use serde::{Deserialize, Serialize};

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSummary {
    pub id: String,
    pub name: String,
    pub api_type: String,
    pub identifier: String,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiDetails {
    pub id: u32,
    pub name: String,
    pub api_id: String,
    pub api_type: String,
    pub identifier: String,
    pub token_exp: u32,
    pub token_exp_browser: u32,
    pub sign_algorithm: String,
    pub rbac: bool,
    pub permission_acc_token: bool,
    pub allow_skip_user: bool,
    pub allow_off_acc: bool,
    pub tenant_id: String,
}
