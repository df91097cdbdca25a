use crate::controller::ResourceFamily;
use crate::dto::{ApiDetails, ApiSummary};
use crate::fixtures::{FamilyFixtures, Fixtures};

pub struct Api;

impl ResourceFamily for Api {
    const NAME: &'static str = "api";
    const LABEL: &'static str = "Api";
    const ALIAS: Option<&'static str> = Some("apis");

    type Summary = ApiSummary;
    type Details = ApiDetails;

    fn fixtures(fixtures: &Fixtures) -> &FamilyFixtures<ApiSummary, ApiDetails> {
        &fixtures.api
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::controller::Controller;
    use crate::controller::test::{ctx, instant_state};
    use crate::dto::NoData;

    #[tokio::test]
    async fn it_should_list_same_apis_for_any_tenant() {
        let controller = Controller::<Api>::new(instant_state());
        let first = controller.list(&ctx(&[("tenant_id", "dev-ofzd5p1b")])).await.unwrap();
        let second = controller.list(&ctx(&[("tenant_id", "someone-else")])).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.message, "Api fetched");
        assert_eq!(first.data.len(), 1);
        assert_eq!(first.data[0].id, "60daccd6dff9a6003e8ef6ef");
    }

    #[tokio::test]
    async fn it_should_load_same_details_for_any_id() {
        let controller = Controller::<Api>::new(instant_state());
        let one = controller.get_details(&ctx(&[("id", "a")])).await.unwrap();
        let other = controller.get_details(&ctx(&[("id", "b")])).await.unwrap();

        assert_eq!(one, other);
        assert_eq!(one.message, "Api loaded");
        assert_eq!(one.data.api_id, "60daccd6dff9a6003e8ef6ef");
        assert_eq!(one.data.tenant_id, "dev-ofzd5p1b");
    }

    #[tokio::test]
    async fn it_should_return_edited_details_on_update() {
        let controller = Controller::<Api>::new(instant_state());
        let ctx = ctx(&[("id", "60daccd6dff9a6003e8ef6ef")]).with_body(r#"{"name":"x"}"#.into());
        let updated = controller.update_details(&ctx).await.unwrap();

        assert_eq!(updated.data.name, "Auth0 Management API edited");
        assert_eq!(
            updated.data.identifier,
            "https://dev-r5y8heyf-edited.au.auth0.com/api/v2/"
        );
    }

    #[tokio::test]
    async fn it_should_ignore_body_on_create_and_delete() {
        let controller = Controller::<Api>::new(instant_state());
        let ctx = ctx(&[("tenant_id", "t")]).with_body("not even json".into());

        let created = controller.create(&ctx).await.unwrap();
        assert_eq!(created.message, "create succesful");
        assert_eq!(created.data, NoData);

        let deleted = controller.delete_details(&ctx).await.unwrap();
        assert_eq!(deleted.message, "Api deleted");
        assert_eq!(deleted.data, NoData);
    }
}
