use crate::controller::ResourceFamily;
use crate::dto::{ApplicationDetails, ApplicationSummary};
use crate::fixtures::{FamilyFixtures, Fixtures};

pub struct Application;

impl ResourceFamily for Application {
    const NAME: &'static str = "applications";
    const LABEL: &'static str = "Application";

    type Summary = ApplicationSummary;
    type Details = ApplicationDetails;

    fn fixtures(fixtures: &Fixtures) -> &FamilyFixtures<ApplicationSummary, ApplicationDetails> {
        &fixtures.applications
    }
}
