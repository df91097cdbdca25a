use crate::dto::{
    DeviceFlow, ErrorPage, SessionCookie, TenantFlags, TenantSettings, TenantSummary,
};
use crate::fixtures::FamilyFixtures;

const TENANT_ID: &str = "dev-ofzd5p1b";
const FRIENDLY_NAME: &str = "Telkom Domain";

pub fn fixtures() -> FamilyFixtures<TenantSummary, TenantSettings> {
    let details = TenantSettings {
        friendly_name: FRIENDLY_NAME.to_string(),
        picture_url: "https://cdn.auth0.com/styleguide/components/1.0.8/media/logos/img/badge.png"
            .to_string(),
        support_email: "support@dev-ofzd5p1b.example.com".to_string(),
        support_url: "https://dev-ofzd5p1b.example.com/support".to_string(),
        default_audience: String::new(),
        default_directory: "Username-Password-Authentication".to_string(),
        error_page: ErrorPage {
            html: String::new(),
            show_log_link: false,
            url: "http://mycompany.com/error/".to_string(),
        },
        device_flow: DeviceFlow {
            charset: "base20".to_string(),
            mask: "****-****".to_string(),
        },
        flags: TenantFlags {
            enable_client_connections: true,
            enable_apis_section: true,
            enable_public_signup_user_exists_error: false,
            disable_clickjack_protection_headers: false,
            universal_login: true,
        },
        allowed_logout_urls: vec!["http://localhost:8080".to_string()],
        session_lifetime: 168,
        idle_session_lifetime: 72,
        sandbox_version: "12".to_string(),
        sandbox_versions_available: vec!["12".to_string(), "16".to_string()],
        default_redirection_uri: String::new(),
        enabled_locales: vec!["en".to_string()],
        session_cookie: SessionCookie {
            mode: "persistent".to_string(),
        },
        tenant_id: TENANT_ID.to_string(),
    };
    let edited = TenantSettings {
        friendly_name: format!("{} edited", FRIENDLY_NAME),
        support_url: "https://dev-ofzd5p1b-edited.example.com/support".to_string(),
        ..details.clone()
    };

    FamilyFixtures {
        list: vec![TenantSummary {
            tenant_id: TENANT_ID.to_string(),
            friendly_name: FRIENDLY_NAME.to_string(),
            region: "au".to_string(),
            environment_tag: "Development".to_string(),
        }],
        details,
        edited,
    }
}
