use async_trait::async_trait;
use crud_console_lib::domain::entities::{
    Entity, HelpRequest, MenuItem, MenuItemReview, Organization, RecommendationRequest,
};
use crud_console_lib::domain::validation::{FieldKey, Rule, RuleKind};
use crud_console_lib::infrastructure::ui::HistoryNavigator;
use crud_console_lib::presentation::form::{
    EntityForm, FormSubmission, SubmitAction, SubmitOutcome,
};
use crud_console_lib::shared::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

struct CountingAction<E: Entity> {
    submissions: Mutex<Vec<FormSubmission<E>>>,
}

impl<E: Entity> CountingAction<E> {
    fn new() -> Self {
        Self {
            submissions: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl<E: Entity> SubmitAction<E> for CountingAction<E> {
    type Output = ();

    async fn submit(&self, submission: FormSubmission<E>) -> Result<()> {
        self.submissions.lock().await.push(submission);
        Ok(())
    }
}

fn required_message(field: impl FieldKey) -> Option<&'static str> {
    field.rules().iter().find_map(|rule| match rule {
        Rule::Required { message } => Some(*message),
        _ => None,
    })
}

async fn assert_empty_form_is_blocked<E: Entity>() {
    let action = CountingAction::<E>::new();
    let mut form = EntityForm::<E>::create(Arc::new(HistoryNavigator::new("/")));

    let output = form.submit_with(&action).await.unwrap();
    assert!(output.is_none(), "{} submitted while empty", E::KIND);
    assert!(action.submissions.lock().await.is_empty());

    let errors = form.errors();
    let mut required = 0;
    for field in <E::Field as FieldKey>::ALL {
        match required_message(*field) {
            Some(message) => {
                required += 1;
                assert_eq!(errors.message(*field), Some(message), "{field:?}");
                assert!(errors.get(*field).unwrap().has(RuleKind::Required));
            }
            None => assert!(errors.get(*field).is_none(), "{field:?}"),
        }
    }
    assert_eq!(errors.len(), required, "{}", E::KIND);
    assert_eq!(form.render().messages().len(), required);
}

async fn assert_valid_form_submits_once<E: Entity>(entries: &[(&str, &str)]) {
    let action = CountingAction::<E>::new();
    let mut form = EntityForm::<E>::create(Arc::new(HistoryNavigator::new("/")));
    for (name, value) in entries {
        let field = <E::Field as FieldKey>::from_name(name).unwrap();
        form.set_value(field, *value);
    }

    let output = form.submit_with(&action).await.unwrap();
    assert_eq!(output, Some(()), "{} blocked: {:?}", E::KIND, form.errors());

    let submissions = action.submissions.lock().await;
    assert_eq!(submissions.len(), 1);
    for (name, value) in entries {
        let field = <E::Field as FieldKey>::from_name(name).unwrap();
        assert_eq!(submissions[0].values.get(field), *value);
    }
    assert!(submissions[0].key.is_none());
    submissions[0].draft().unwrap();
}

#[tokio::test]
async fn empty_forms_show_one_required_message_per_field() {
    assert_empty_form_is_blocked::<HelpRequest>().await;
    assert_empty_form_is_blocked::<MenuItemReview>().await;
    assert_empty_form_is_blocked::<RecommendationRequest>().await;
    assert_empty_form_is_blocked::<Organization>().await;
    assert_empty_form_is_blocked::<MenuItem>().await;
}

#[tokio::test]
async fn valid_forms_invoke_submit_action_once() {
    assert_valid_form_submits_once::<HelpRequest>(&[
        ("requesterEmail", "ttnguyen@ucsb.edu"),
        ("teamId", "F24-16"),
        ("tableOrBreakoutRoom", "Table_16"),
        ("requestTime", "2024-11-04T12:45"),
        ("explanation", "Needs_help_with_jpa03"),
        ("solved", "true"),
    ])
    .await;
    assert_valid_form_submits_once::<MenuItemReview>(&[
        ("itemId", "10"),
        ("reviewerEmail", "rohanpreetam21@gmail.com"),
        ("stars", "5"),
        ("dateReviewed", "2022-01-02T12:00"),
        ("comments", "Very good"),
    ])
    .await;
    assert_valid_form_submits_once::<RecommendationRequest>(&[
        ("requesterEmail", "jaydenjardine@cs.ucsb.edu"),
        ("professorEmail", "aubreydrakegraham@ovo.com"),
        ("explanation", "I need a song with you and Ye ASAP."),
        ("dateRequested", "2024-10-31T12:37"),
        ("dateNeeded", "2024-11-07T12:37"),
        ("done", "false"),
    ])
    .await;
    assert_valid_form_submits_once::<Organization>(&[
        ("orgCode", "ZZZ"),
        ("orgTranslationShort", "ZEN"),
        ("orgTranslation", "ZENLESS ZONE"),
        ("inactive", "true"),
    ])
    .await;
    assert_valid_form_submits_once::<MenuItem>(&[
        ("diningCommonsCode", "ortega"),
        ("name", "Baked Pesto Pasta with Chicken"),
        ("station", "Entree Specials"),
    ])
    .await;
}

#[test]
fn malformed_values_get_pattern_messages() {
    use crud_console_lib::domain::entities::{MenuItemReviewField, RecommendationRequestField};

    let mut form = EntityForm::<RecommendationRequest>::create(Arc::new(HistoryNavigator::new("/")));
    form.set_value(RecommendationRequestField::RequesterEmail, "not-an-email");
    form.set_value(RecommendationRequestField::DateNeeded, "next tuesday");
    let SubmitOutcome::Blocked(errors) = form.submit() else {
        panic!("malformed form should be blocked");
    };
    assert_eq!(
        errors.message(RecommendationRequestField::RequesterEmail),
        Some("requesterEmail must be in the format <username>@<domain>.<com>")
    );
    assert_eq!(
        errors.message(RecommendationRequestField::DateNeeded),
        Some("dateNeeded must be in ISO format, e.g. 2024-11-07T12:37")
    );
    assert_eq!(
        errors.message(RecommendationRequestField::ProfessorEmail),
        Some("professorEmail is required.")
    );

    let mut review = EntityForm::<MenuItemReview>::create(Arc::new(HistoryNavigator::new("/")));
    review.set_value(MenuItemReviewField::Stars, "6");
    review.set_value(MenuItemReviewField::ItemId, "-3");
    let SubmitOutcome::Blocked(errors) = review.submit() else {
        panic!("out-of-range rating should be blocked");
    };
    assert_eq!(
        errors.message(MenuItemReviewField::Stars),
        Some("Must give a rating between 0 and 5 stars")
    );
    assert_eq!(
        errors.message(MenuItemReviewField::ItemId),
        Some("Item ID must be an integer, e.g. 1 for item #1")
    );
}

#[test]
fn over_long_organization_fields_hit_max_length() {
    use crud_console_lib::domain::entities::OrganizationField;

    let mut form = EntityForm::<Organization>::create(Arc::new(HistoryNavigator::new("/")));
    form.set_value(OrganizationField::OrgCode, "ZZZ");
    form.set_value(OrganizationField::OrgTranslationShort, "Z".repeat(31));
    form.set_value(OrganizationField::OrgTranslation, "ZENLESS ZONE");
    let SubmitOutcome::Blocked(errors) = form.submit() else {
        panic!("31 characters should be rejected");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.message(OrganizationField::OrgTranslationShort),
        Some("Max length 30 characters")
    );
}

#[test]
fn cancel_goes_back_without_validating() {
    use crud_console_lib::application::ports::{Navigation, Navigator};

    let navigator = Arc::new(HistoryNavigator::new("/helprequest"));
    navigator.navigate(Navigation::To("/helprequest/create".to_string()));

    let form = EntityForm::<HelpRequest>::create(navigator.clone());
    form.cancel();
    assert_eq!(navigator.current().as_deref(), Some("/helprequest"));
    assert!(form.errors().is_empty());
}
