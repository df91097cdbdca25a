mod api;
mod application;
mod envelope;
mod tenant;

pub use api::{ApiDetails, ApiSummary};
pub use application::{ApplicationDetails, ApplicationSummary};
pub use envelope::{Envelope, NoData};
pub use tenant::{
    DeviceFlow, ErrorPage, SessionCookie, TenantFlags, TenantSettings, TenantSummary,
};
