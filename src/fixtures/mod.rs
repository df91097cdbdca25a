use crate::dto::{
    ApiDetails, ApiSummary, ApplicationDetails, ApplicationSummary, TenantSettings, TenantSummary,
};

mod api;
mod application;
mod tenant;

/// Canned data for one resource family: the list view, the detail view and
/// the detail view as it reads after an update.
#[derive(Clone, Debug)]
pub struct FamilyFixtures<S, D> {
    pub list: Vec<S>,
    pub details: D,
    pub edited: D,
}

/// Every fixture served by the process. Built once at startup and shared
/// read-only between requests.
#[derive(Clone, Debug)]
pub struct Fixtures {
    pub api: FamilyFixtures<ApiSummary, ApiDetails>,
    pub applications: FamilyFixtures<ApplicationSummary, ApplicationDetails>,
    pub tenant: FamilyFixtures<TenantSummary, TenantSettings>,
}

impl Fixtures {
    pub fn new() -> Fixtures {
        Fixtures {
            api: api::fixtures(),
            applications: application::fixtures(),
            tenant: tenant::fixtures(),
        }
    }
}

impl Default for Fixtures {
    fn default() -> Fixtures {
        Fixtures::new()
    }
}
