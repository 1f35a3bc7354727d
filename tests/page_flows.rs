mod common;

use common::fixtures;
use common::mocks::FakeBackend;
use crud_console_lib::application::ports::HttpMethod;
use crud_console_lib::domain::entities::{
    HelpRequest, HelpRequestField, MenuItem, MenuItemField, MenuItemReview, MenuItemReviewField,
    Organization, OrganizationField, RecommendationRequest,
};
use crud_console_lib::domain::validation::FieldKey;
use crud_console_lib::domain::value_objects::{ROLE_ADMIN, ROLE_USER};
use crud_console_lib::presentation::pages::{CreateState, EditState, IndexState, SubmitResult};
use crud_console_lib::presentation::table::{CHECK, CROSS};
use serde_json::json;
use std::sync::Arc;

async fn admin_backend() -> Arc<FakeBackend> {
    let backend = Arc::new(FakeBackend::new());
    backend
        .respond(
            HttpMethod::Get,
            "/api/currentUser",
            fixtures::current_user("phtcon@ucsb.edu", &[ROLE_USER, ROLE_ADMIN]),
        )
        .await;
    backend
}

async fn user_backend() -> Arc<FakeBackend> {
    let backend = Arc::new(FakeBackend::new());
    backend
        .respond(
            HttpMethod::Get,
            "/api/currentUser",
            fixtures::current_user("cgaucho@ucsb.edu", &[ROLE_USER]),
        )
        .await;
    backend
}

#[tokio::test]
async fn admin_index_renders_glyphs_and_deletes_one_row() {
    let backend = admin_backend().await;
    let list = fixtures::three_recommendation_requests();
    backend
        .respond(HttpMethod::Get, "/api/recommendationRequest/all", list.clone())
        .await;
    let remaining = json!([list[1].clone(), list[2].clone()]);
    backend
        .respond(HttpMethod::Get, "/api/recommendationRequest/all", remaining)
        .await;
    backend
        .respond(
            HttpMethod::Delete,
            "/api/recommendationRequest",
            json!({"message": "RecommendationRequest with id 1 deleted"}),
        )
        .await;

    let state = common::console(&backend);
    let user = state.current_user().await;
    let mut page = state.index_page::<RecommendationRequest>(user);
    assert_eq!(page.load().await, IndexState::Loaded);

    let rendered = page.render();
    assert_eq!(rendered.title, "Recommendation Requests");
    assert_eq!(rendered.table.rows.len(), 3);
    assert!(rendered.table.rows.iter().all(|row| row.actions.len() == 2));
    assert_eq!(
        rendered.table.cell("RecommendationRequestTable-cell-row-0-col-done"),
        Some(CROSS)
    );
    assert_eq!(
        rendered.table.cell("RecommendationRequestTable-cell-row-1-col-done"),
        Some(CHECK)
    );
    assert_eq!(
        rendered.create_link.map(|link| link.href),
        Some("/recommendationRequest/create".to_string())
    );

    page.delete_row(0).await.unwrap();

    let deletes = backend
        .requests_to(HttpMethod::Delete, "/api/recommendationRequest")
        .await;
    assert_eq!(deletes.len(), 1);
    assert_eq!(
        deletes[0].to_string(),
        "DELETE /api/recommendationRequest?id=1"
    );
    assert_eq!(
        state.notifier.messages(),
        vec!["RecommendationRequest with id 1 deleted".to_string()]
    );
    // 一覧キャッシュが無効化され、再取得される
    assert_eq!(
        backend
            .requests_to(HttpMethod::Get, "/api/recommendationRequest/all")
            .await
            .len(),
        2
    );
    assert_eq!(page.render().table.rows.len(), 2);
}

#[tokio::test]
async fn non_admin_index_has_no_row_actions() {
    let backend = user_backend().await;
    backend
        .respond(
            HttpMethod::Get,
            "/api/menuitemreview/all",
            fixtures::three_menu_item_reviews(),
        )
        .await;

    let state = common::console(&backend);
    let user = state.current_user().await;
    assert!(!user.is_admin());

    let mut page = state.index_page::<MenuItemReview>(user);
    page.load().await;
    let rendered = page.render();
    assert_eq!(rendered.table.rows.len(), 3);
    assert!(rendered.table.rows.iter().all(|row| row.actions.is_empty()));
    assert!(!rendered.table.header_texts().contains(&"Edit"));
    assert!(rendered.create_link.is_none());
}

#[tokio::test]
async fn edit_button_navigates_to_record_route() {
    let backend = admin_backend().await;
    backend
        .respond(HttpMethod::Get, "/api/organizations/all", fixtures::three_organizations())
        .await;

    let state = common::console(&backend);
    let user = state.current_user().await;
    let mut page = state.index_page::<Organization>(user);
    page.load().await;

    page.table().click_edit(1).unwrap();
    assert_eq!(
        state.navigator.current().as_deref(),
        Some("/organizations/edit/SKY")
    );
}

#[tokio::test]
async fn organization_edit_page_prefills_and_updates_mutable_fields() {
    let backend = admin_backend().await;
    backend
        .respond(
            HttpMethod::Get,
            "/api/organizations",
            fixtures::zen_organization(),
        )
        .await;
    backend
        .respond(
            HttpMethod::Put,
            "/api/organizations",
            json!({
                "orgCode": "ZZZ",
                "orgTranslationShort": "ZEN",
                "orgTranslation": "ZENLESS ZONE ZERO",
                "inactive": true
            }),
        )
        .await;

    let state = common::console(&backend);
    let mut page = state.edit_page::<Organization>("ZZZ").unwrap();
    assert!(page.render().form.is_none());
    assert_eq!(page.load().await, EditState::Populated);

    let rendered = page.render();
    assert_eq!(rendered.title, "Edit Organization");
    let form = rendered.form.unwrap();
    assert_eq!(form.submit.label, "Update");
    assert_eq!(form.field("orgCode").unwrap().value, "ZZZ");
    assert!(form.field("orgCode").unwrap().disabled);
    assert_eq!(form.field("orgTranslationShort").unwrap().value, "ZEN");
    assert_eq!(form.field("orgTranslation").unwrap().value, "ZENLESS ZONE");
    assert_eq!(form.field("inactive").unwrap().value, "true");

    page.form_mut()
        .unwrap()
        .set_value(OrganizationField::OrgTranslation, "ZENLESS ZONE ZERO");
    assert!(page.submit().await.is_saved());

    let puts = backend
        .requests_to(HttpMethod::Put, "/api/organizations")
        .await;
    assert_eq!(puts.len(), 1);
    assert_eq!(
        puts[0].params,
        vec![("orgCode".to_string(), "ZZZ".to_string())]
    );
    assert_eq!(
        puts[0].body,
        Some(json!({
            "orgTranslationShort": "ZEN",
            "orgTranslation": "ZENLESS ZONE ZERO",
            "inactive": true
        }))
    );
    assert_eq!(
        state.notifier.messages(),
        vec!["Organization Updated - orgCode: ZZZ".to_string()]
    );
    assert_eq!(state.navigator.current().as_deref(), Some("/organizations"));
    assert_eq!(page.state(), EditState::Submitted);
}

#[tokio::test]
async fn edit_page_stays_loading_when_fetch_fails() {
    let backend = admin_backend().await;
    backend.fail(HttpMethod::Get, "/api/helprequest", 500).await;

    let state = common::console(&backend);
    let mut page = state.edit_page::<HelpRequest>("1").unwrap();
    assert_eq!(page.load().await, EditState::Loading);
    assert!(page.render().form.is_none());
    assert!(state.notifier.messages().is_empty());
}

#[tokio::test]
async fn create_page_posts_query_params_and_refreshes_index() {
    let backend = admin_backend().await;
    backend
        .respond(HttpMethod::Get, "/api/helprequest/all", json!([]))
        .await;
    backend
        .respond(
            HttpMethod::Get,
            "/api/helprequest/all",
            json!([fixtures::one_help_request()]),
        )
        .await;
    backend
        .respond(
            HttpMethod::Post,
            "/api/helprequest/post",
            fixtures::one_help_request(),
        )
        .await;

    let state = common::console(&backend);
    let user = state.current_user().await;
    let mut index = state.index_page::<HelpRequest>(user);
    assert_eq!(index.load().await, IndexState::Empty);
    assert!(index.render().table.rows.is_empty());

    let mut page = state.create_page::<HelpRequest>();
    assert_eq!(page.title(), "Create New HelpRequest");
    assert!(matches!(page.submit().await, SubmitResult::Invalid));
    assert!(backend.requests_to(HttpMethod::Post, "/api/helprequest/post").await.is_empty());

    let form = page.form_mut();
    form.set_value(HelpRequestField::RequesterEmail, "ttnguyen@ucsb.edu");
    form.set_value(HelpRequestField::TeamId, "F24-16");
    form.set_value(HelpRequestField::TableOrBreakoutRoom, "Table_16");
    form.set_value(HelpRequestField::RequestTime, "2024-11-04T12:45");
    form.set_value(HelpRequestField::Explanation, "Needs_help_with_jpa03");
    assert!(page.submit().await.is_saved());
    assert_eq!(page.state(), CreateState::Submitted);

    let posts = backend
        .requests_to(HttpMethod::Post, "/api/helprequest/post")
        .await;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].param("teamId"), Some("F24-16"));
    assert_eq!(posts[0].param("solved"), Some("false"));
    assert!(posts[0].body.is_none());
    assert_eq!(
        state.notifier.messages(),
        vec!["New HelpRequest Created - id: 1 requesterEmail: ttnguyen@ucsb.edu".to_string()]
    );
    assert_eq!(state.navigator.current().as_deref(), Some("/helprequest"));

    assert_eq!(index.load().await, IndexState::Loaded);
    assert_eq!(index.records().len(), 1);
}

#[tokio::test]
async fn failed_create_keeps_page_editable_without_toast() {
    let backend = admin_backend().await;
    backend.fail(HttpMethod::Post, "/api/ucsbdiningcommonsmenuitem/post", 500).await;

    let state = common::console(&backend);
    let mut page = state.create_page::<MenuItem>();
    let form = page.form_mut();
    for (name, value) in [
        ("diningCommonsCode", "ortega"),
        ("name", "Baked Pesto Pasta with Chicken"),
        ("station", "Entree Specials"),
    ] {
        let field = MenuItemField::from_name(name).unwrap();
        form.set_value(field, value);
    }

    assert!(matches!(page.submit().await, SubmitResult::Failed(_)));
    assert_eq!(page.state(), CreateState::Editing);
    assert!(page.render().submit_enabled);
    assert!(state.notifier.messages().is_empty());
    assert_eq!(state.navigator.current().as_deref(), Some("/"));
}

#[tokio::test]
async fn unconvertible_review_values_are_reported_inline() {
    let cases = [
        (
            MenuItemReviewField::DateReviewed,
            "2024-19-39T29:59",
            "DateReviewed must be in ISO format, e.g. 2022-01-02T12:00",
        ),
        (
            MenuItemReviewField::ItemId,
            "99999999999999999999",
            "Item ID must be an integer, e.g. 1 for item #1",
        ),
    ];

    for (field, bad_value, message) in cases {
        let backend = admin_backend().await;
        let state = common::console(&backend);
        let mut page = state.create_page::<MenuItemReview>();
        let form = page.form_mut();
        form.set_value(MenuItemReviewField::ItemId, "7");
        form.set_value(MenuItemReviewField::ReviewerEmail, "cgaucho@ucsb.edu");
        form.set_value(MenuItemReviewField::Stars, "4");
        form.set_value(MenuItemReviewField::DateReviewed, "2024-10-02T12:00");
        form.set_value(MenuItemReviewField::Comments, "good pasta");
        form.set_value(field, bad_value);

        assert!(matches!(page.submit().await, SubmitResult::Invalid));
        assert_eq!(page.state(), CreateState::Editing);
        assert_eq!(page.form().error_message(field), Some(message));
        assert_eq!(page.render().form.unwrap().messages(), vec![message]);
        assert!(
            backend
                .requests_to(HttpMethod::Post, "/api/menuitemreview/post")
                .await
                .is_empty()
        );
    }
}

#[tokio::test]
async fn index_fetch_failure_degrades_to_empty_table() {
    let backend = admin_backend().await;
    backend
        .fail(HttpMethod::Get, "/api/ucsbdiningcommonsmenuitem/all", 503)
        .await;

    let state = common::console(&backend);
    let user = state.current_user().await;
    let mut page = state.index_page::<MenuItem>(user);
    assert_eq!(page.load().await, IndexState::FetchFailed);

    let rendered = page.render();
    assert_eq!(
        rendered.table.header_texts(),
        vec!["id", "DiningCommonsCode", "Name", "Station", "Edit", "Delete"]
    );
    assert!(rendered.table.rows.is_empty());
}

#[tokio::test]
async fn unreachable_current_user_falls_back_to_anonymous() {
    let backend = Arc::new(FakeBackend::new());
    backend.fail(HttpMethod::Get, "/api/currentUser", 502).await;
    backend
        .respond(HttpMethod::Get, "/api/organizations/all", fixtures::three_organizations())
        .await;

    let state = common::console(&backend);
    let user = state.current_user().await;
    assert!(!user.logged_in);

    let mut page = state.index_page::<Organization>(user);
    page.load().await;
    let rendered = page.render();
    assert!(rendered.create_link.is_none());
    assert!(rendered.table.rows.iter().all(|row| row.actions.is_empty()));
}

#[tokio::test]
async fn delete_without_backend_message_uses_default_toast() {
    let backend = admin_backend().await;
    backend
        .respond(HttpMethod::Get, "/api/organizations/all", fixtures::three_organizations())
        .await;
    backend
        .respond(HttpMethod::Delete, "/api/organizations", serde_json::Value::Null)
        .await;

    let state = common::console(&backend);
    let user = state.current_user().await;
    let mut page = state.index_page::<Organization>(user);
    page.load().await;
    page.table().click_delete(0).await.unwrap();

    assert_eq!(
        state.notifier.messages(),
        vec!["Organization with orgCode ZZZ deleted".to_string()]
    );
}
