use crate::dto::{ApiDetails, ApiSummary};
use crate::fixtures::FamilyFixtures;

const API_ID: &str = "60daccd6dff9a6003e8ef6ef";
const NAME: &str = "Auth0 Management API";
const API_TYPE: &str = "System API";
const IDENTIFIER: &str = "https://dev-r5y8heyf.au.auth0.com/api/v2/";
const TENANT_ID: &str = "dev-ofzd5p1b";

pub fn fixtures() -> FamilyFixtures<ApiSummary, ApiDetails> {
    let details = ApiDetails {
        id: 1,
        name: NAME.to_string(),
        api_id: API_ID.to_string(),
        api_type: API_TYPE.to_string(),
        identifier: IDENTIFIER.to_string(),
        token_exp: 100000,
        token_exp_browser: 10000,
        sign_algorithm: "algorithm signing".to_string(),
        rbac: true,
        permission_acc_token: true,
        allow_skip_user: true,
        allow_off_acc: true,
        tenant_id: TENANT_ID.to_string(),
    };
    let edited = ApiDetails {
        name: format!("{} edited", NAME),
        identifier: "https://dev-r5y8heyf-edited.au.auth0.com/api/v2/".to_string(),
        ..details.clone()
    };

    FamilyFixtures {
        list: vec![ApiSummary {
            id: API_ID.to_string(),
            name: NAME.to_string(),
            api_type: API_TYPE.to_string(),
            identifier: IDENTIFIER.to_string(),
        }],
        details,
        edited,
    }
}
