use crate::dto::{ApplicationDetails, ApplicationSummary};
use crate::fixtures::FamilyFixtures;

const APP_ID: &str = "60dad7c1dff9a6003e8ef701";
const CLIENT_ID: &str = "6XbLBxnKtMOeFfPpcqVJj6e8CmxvBgMb";
const NAME: &str = "Default App";
const APP_TYPE: &str = "Single Page Application";
const LOGO_URL: &str = "https://cdn.auth0.com/manhattan/versions/1.3226.0/assets/spa.svg";
const TENANT_ID: &str = "dev-ofzd5p1b";

pub fn fixtures() -> FamilyFixtures<ApplicationSummary, ApplicationDetails> {
    let details = ApplicationDetails {
        id: APP_ID.to_string(),
        client_id: CLIENT_ID.to_string(),
        client_secret: "Vg0Ea1xTYi9oR2XvVb3CJ7hzW5sLk8NqPd4uFmAy6rKtEcHnSjQwIgZoBlDeMfTx".to_string(),
        name: NAME.to_string(),
        description: "Single page application for the tenant dashboard".to_string(),
        app_type: APP_TYPE.to_string(),
        logo_url: LOGO_URL.to_string(),
        domain: "dev-r5y8heyf.au.auth0.com".to_string(),
        token_endpoint_auth_method: "none".to_string(),
        allowed_callback_urls: vec!["http://localhost:8080/callback".to_string()],
        allowed_logout_urls: vec!["http://localhost:8080".to_string()],
        allowed_web_origins: vec!["http://localhost:8080".to_string()],
        tenant_id: TENANT_ID.to_string(),
    };
    let edited = ApplicationDetails {
        name: format!("{} edited", NAME),
        domain: "dev-r5y8heyf-edited.au.auth0.com".to_string(),
        ..details.clone()
    };

    FamilyFixtures {
        list: vec![
            ApplicationSummary {
                id: APP_ID.to_string(),
                client_id: CLIENT_ID.to_string(),
                name: NAME.to_string(),
                app_type: APP_TYPE.to_string(),
                logo_url: LOGO_URL.to_string(),
            },
            ApplicationSummary {
                id: "60dad7c1dff9a6003e8ef702".to_string(),
                client_id: "kJ2mQx7TfR4nVb9LwZc1YhG8sPdE3uAo".to_string(),
                name: "API Explorer Application".to_string(),
                app_type: "Machine to Machine".to_string(),
                logo_url: "https://cdn.auth0.com/manhattan/versions/1.3226.0/assets/non_interactive.svg"
                    .to_string(),
            },
        ],
        details,
        edited,
    }
}
