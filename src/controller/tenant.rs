use crate::controller::ResourceFamily;
use crate::dto::{TenantSettings, TenantSummary};
use crate::fixtures::{FamilyFixtures, Fixtures};

/// Tenant settings. The front-end reaches the detail view as `/tenant/v2/settings`.
pub struct Tenant;

impl ResourceFamily for Tenant {
    const NAME: &'static str = "tenant";
    const LABEL: &'static str = "Tenant";

    type Summary = TenantSummary;
    type Details = TenantSettings;

    fn fixtures(fixtures: &Fixtures) -> &FamilyFixtures<TenantSummary, TenantSettings> {
        &fixtures.tenant
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::controller::Controller;
    use crate::controller::test::{ctx, instant_state};

    #[tokio::test]
    async fn it_should_serve_tenant_settings() {
        let controller = Controller::<Tenant>::new(instant_state());
        let ctx = ctx(&[("tenant_id", "v2"), ("id", "settings")]);

        let settings = controller.get_details(&ctx).await.unwrap();
        assert_eq!(settings.message, "Tenant loaded");
        assert_eq!(settings.data.friendly_name, "Telkom Domain");
        assert!(!settings.data.error_page.show_log_link);

        let updated = controller.update_details(&ctx).await.unwrap();
        assert_eq!(updated.data.friendly_name, "Telkom Domain edited");
        assert_eq!(updated.data.flags, settings.data.flags);
    }
}
