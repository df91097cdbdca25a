use crate::api::{AppError, AppState};
use crate::dto::{Envelope, NoData};
use crate::fixtures::{FamilyFixtures, Fixtures};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Formatter;
use std::marker::PhantomData;
use tracing::{info, warn};

mod api;
mod application;
mod tenant;

pub use api::Api;
pub use application::Application;
pub use tenant::Tenant;

const CREATE_MESSAGE: &str = "create succesful";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    List,
    Create,
    GetDetails,
    UpdateDetails,
    DeleteDetails,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Create => write!(f, "create"),
            Self::GetDetails => write!(f, "get_details"),
            Self::UpdateDetails => write!(f, "update_details"),
            Self::DeleteDetails => write!(f, "delete_details"),
        }
    }
}

/// A group of endpoints that share one fixture shape.
pub trait ResourceFamily: Send + Sync + 'static {
    /// Mount prefix, also the key used in `simulated_errors`.
    const NAME: &'static str;
    /// Used to build response messages, e.g. "Api fetched".
    const LABEL: &'static str;
    /// Extra path segment the front-end uses in front of the resource id.
    const ALIAS: Option<&'static str> = None;

    type Summary: Serialize + Clone + Send + Sync + 'static;
    type Details: Serialize + Clone + Send + Sync + 'static;

    fn fixtures(fixtures: &Fixtures) -> &FamilyFixtures<Self::Summary, Self::Details>;
}

/// What a controller gets to see of a request.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    pub params: HashMap<String, String>,
    pub body: Option<String>,
    pub simulate_error: bool,
}

impl RequestContext {
    pub fn new(params: HashMap<String, String>) -> RequestContext {
        RequestContext {
            params,
            ..Default::default()
        }
    }

    pub fn with_body(mut self, body: String) -> RequestContext {
        self.body = Some(body);
        self
    }

    pub fn with_simulated_error(mut self, simulate_error: bool) -> RequestContext {
        self.simulate_error = simulate_error;
        self
    }

    pub fn tenant_id(&self) -> &str {
        self.params
            .get("tenant_id")
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Serves the five CRUD-shaped operations of a resource family from fixtures.
///
/// Inputs are traced and otherwise ignored: every tenant and every id get the
/// same canned answer, delivered through the latency simulator.
pub struct Controller<R> {
    state: AppState,
    family: PhantomData<fn() -> R>,
}

impl<R: ResourceFamily> Controller<R> {
    pub fn new(state: AppState) -> Controller<R> {
        Controller {
            state,
            family: PhantomData,
        }
    }

    fn fixtures(&self) -> &FamilyFixtures<R::Summary, R::Details> {
        R::fixtures(&self.state.fixtures)
    }

    pub async fn list(&self, ctx: &RequestContext) -> Result<Envelope<Vec<R::Summary>>, AppError> {
        info!("{} list: tenant_id={}", R::NAME, ctx.tenant_id());
        self.respond(Operation::List, ctx, || {
            Envelope::new(format!("{} fetched", R::LABEL), self.fixtures().list.clone())
        })
        .await
    }

    pub async fn create(&self, ctx: &RequestContext) -> Result<Envelope<NoData>, AppError> {
        info!("{} create: tenant_id={}", R::NAME, ctx.tenant_id());
        info!("{} create: body={}", R::NAME, ctx.body());
        self.respond(Operation::Create, ctx, || Envelope::empty(CREATE_MESSAGE))
            .await
    }

    pub async fn get_details(&self, ctx: &RequestContext) -> Result<Envelope<R::Details>, AppError> {
        info!("{} get_details: params={:?}", R::NAME, ctx.params);
        self.respond(Operation::GetDetails, ctx, || {
            Envelope::new(format!("{} loaded", R::LABEL), self.fixtures().details.clone())
        })
        .await
    }

    pub async fn update_details(
        &self,
        ctx: &RequestContext,
    ) -> Result<Envelope<R::Details>, AppError> {
        info!("{} update_details: params={:?}", R::NAME, ctx.params);
        info!("{} update_details: body={}", R::NAME, ctx.body());
        self.respond(Operation::UpdateDetails, ctx, || {
            Envelope::new(format!("{} loaded", R::LABEL), self.fixtures().edited.clone())
        })
        .await
    }

    pub async fn delete_details(&self, ctx: &RequestContext) -> Result<Envelope<NoData>, AppError> {
        info!("{} delete_details: params={:?}", R::NAME, ctx.params);
        self.respond(Operation::DeleteDetails, ctx, || {
            Envelope::empty(format!("{} deleted", R::LABEL))
        })
        .await
    }

    async fn respond<T>(
        &self,
        operation: Operation,
        ctx: &RequestContext,
        envelope: impl FnOnce() -> Envelope<T>,
    ) -> Result<Envelope<T>, AppError> {
        let fail = ctx.simulate_error || self.state.config.simulates_error(R::NAME, operation);
        if fail {
            warn!("{} {}: simulating server error", R::NAME, operation);
        }
        self.state
            .latency
            .delay(|| {
                if fail {
                    Err(AppError::SimulatedServerError)
                } else {
                    Ok(envelope())
                }
            })
            .await
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::api::AppConfig;
    use std::collections::HashSet;

    pub fn instant_state() -> AppState {
        AppState::new(AppConfig {
            delay_ms: 0,
            ..Default::default()
        })
    }

    pub fn ctx(pairs: &[(&str, &str)]) -> RequestContext {
        RequestContext::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn it_should_default_tenant_id_to_empty() {
        assert_eq!(RequestContext::default().tenant_id(), "");
        assert_eq!(ctx(&[("tenant_id", "dev-ofzd5p1b")]).tenant_id(), "dev-ofzd5p1b");
    }

    #[test]
    fn it_should_parse_operation_names() {
        let operations: Vec<Operation> = serde_json::from_str(
            r#"["list", "create", "get_details", "update_details", "delete_details"]"#,
        )
        .unwrap();
        assert_eq!(
            operations.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["list", "create", "get_details", "update_details", "delete_details"]
        );
    }

    #[tokio::test]
    async fn it_should_fail_only_the_configured_operation() {
        let state = AppState::new(AppConfig {
            delay_ms: 0,
            simulated_errors: HashMap::from([(
                "api".to_string(),
                HashSet::from([Operation::Create]),
            )]),
        });
        let controller = Controller::<Api>::new(state);
        let ctx = ctx(&[("tenant_id", "dev-ofzd5p1b")]);

        assert!(matches!(
            controller.create(&ctx).await,
            Err(AppError::SimulatedServerError)
        ));
        assert!(controller.list(&ctx).await.is_ok());
    }

    #[tokio::test]
    async fn it_should_fail_every_operation_when_requested() {
        let controller = Controller::<Tenant>::new(instant_state());
        let ctx = ctx(&[("tenant_id", "t"), ("id", "settings")]).with_simulated_error(true);

        assert!(controller.list(&ctx).await.is_err());
        assert!(controller.create(&ctx).await.is_err());
        assert!(controller.get_details(&ctx).await.is_err());
        assert!(controller.update_details(&ctx).await.is_err());
        assert!(controller.delete_details(&ctx).await.is_err());
    }
}
