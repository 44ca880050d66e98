//! Integration tests for the validated request path through the task engine.

use std::sync::Arc;
use std::time::Duration;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskdeck::boundary::{
    error::{ApiError, ApiErrorKind, ErrorPresenter},
    validate::{CreateTaskPayload, TaskFilterParams, UpdateTaskPayload},
};
use taskdeck::config::Environment;
use taskdeck::project::{
    adapters::memory::InMemoryProjectRepository, domain::Project,
    services::ProjectCatalogueService,
};
use taskdeck::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{TaskStatus, TaskView},
    services::TaskQueryService,
};

type TestService =
    TaskQueryService<InMemoryTaskRepository, InMemoryProjectRepository, DefaultClock>;

struct Harness {
    service: TestService,
    catalogue: ProjectCatalogueService<InMemoryProjectRepository, DefaultClock>,
}

#[fixture]
fn harness() -> Harness {
    let projects = Arc::new(InMemoryProjectRepository::new());
    Harness {
        service: TaskQueryService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&projects),
            Arc::new(DefaultClock),
        ),
        catalogue: ProjectCatalogueService::new(projects, Arc::new(DefaultClock)),
    }
}

impl Harness {
    async fn project(&self, name: &str) -> Project {
        self.catalogue
            .create(name)
            .await
            .expect("project creation should succeed")
    }

    async fn create_from_json(&self, body: serde_json::Value) -> Result<TaskView, ApiError> {
        let payload: CreateTaskPayload =
            serde_json::from_value(body).expect("body should deserialise");
        let request = payload.validate()?;
        let task = self.service.create(request).await?;
        self.service
            .find_by_id(task.id())
            .await
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::not_found("Task not found"))
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_from_wire_payload_enriches_the_response(harness: Harness) {
    let alpha = harness.project("Alpha").await;

    let view = harness
        .create_from_json(serde_json::json!({
            "name": "Write the report",
            "status": "in_progress",
            "projectId": alpha.id().to_string(),
        }))
        .await
        .expect("creation should succeed");

    assert_eq!(view.task().name(), "Write the report");
    assert_eq!(view.task().status(), TaskStatus::InProgress);
    let summary = view.project().expect("summary should resolve");
    assert_eq!(summary.name(), "Alpha");

    let value = serde_json::to_value(&view).expect("view should serialise");
    let object = value.as_object().expect("view serialises to an object");
    assert!(object.contains_key("createdAt"));
    assert!(object.contains_key("projectId"));
    let project = object.get("project").and_then(serde_json::Value::as_object);
    assert_eq!(
        project.and_then(|p| p.get("name")).and_then(serde_json::Value::as_str),
        Some("Alpha")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unresolvable_reference_presents_as_not_found(harness: Harness) {
    let err = harness
        .create_from_json(serde_json::json!({
            "name": "Orphan",
            "projectId": "definitely-not-an-id",
        }))
        .await
        .expect_err("creation should fail");

    assert_eq!(err.kind(), ApiErrorKind::NotFound);
    assert_eq!(err.message(), "Project not found");

    let body = ErrorPresenter::new(Environment::Development).present(&err);
    assert_eq!(body.status_code, 404);
    assert_eq!(body.message, "Project not found");
    // Anticipated faults fall back to their message as the dev trace.
    assert_eq!(body.trace.as_deref(), Some("Project not found"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_status_label_presents_as_bad_request(harness: Harness) {
    let err = harness
        .create_from_json(serde_json::json!({
            "name": "Task",
            "status": "paused",
        }))
        .await
        .expect_err("validation should fail");

    assert_eq!(err.kind(), ApiErrorKind::BadRequest);
    assert_eq!(err.message(), "status must be one of todo, in_progress, done");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filtered_listing_from_wire_params(harness: Harness) {
    let alpha = harness.project("Alpha").await;
    for (name, status) in [("first", "todo"), ("second", "done")] {
        harness
            .create_from_json(serde_json::json!({
                "name": name,
                "status": status,
                "projectId": alpha.id().to_string(),
            }))
            .await
            .expect("creation should succeed");
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
    harness
        .create_from_json(serde_json::json!({ "name": "unlinked" }))
        .await
        .expect("creation should succeed");

    let params: TaskFilterParams = serde_json::from_value(serde_json::json!({
        "projectId": alpha.id().to_string(),
        "sortOrder": "asc",
    }))
    .expect("params should deserialise");
    let filter = params.validate().expect("params should validate");
    let views = harness
        .service
        .find_all(filter)
        .await
        .expect("listing should succeed");

    let listed: Vec<&str> = views.iter().map(|view| view.task().name()).collect();
    assert_eq!(listed, vec!["first", "second"]);
}

#[rstest]
#[case::from_bound("createdFrom", "Invalid createdFrom date")]
#[case::to_bound("createdTo", "Invalid createdTo date")]
#[tokio::test(flavor = "multi_thread")]
async fn malformed_date_bound_presents_as_bad_request(
    harness: Harness,
    #[case] field: &str,
    #[case] expected: &str,
) {
    let params: TaskFilterParams =
        serde_json::from_value(serde_json::json!({ field: "13/01/2024" }))
            .expect("params should deserialise");
    let filter = params.validate().expect("shape validation should pass");
    let err = harness
        .service
        .find_all(filter)
        .await
        .expect_err("listing should fail");

    let api_err = ApiError::from(err);
    assert_eq!(api_err.kind(), ApiErrorKind::BadRequest);
    assert_eq!(api_err.message(), expected);
    assert_eq!(api_err.kind().status_code(), 400);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_from_wire_payload_clears_the_reference(harness: Harness) {
    let alpha = harness.project("Alpha").await;
    let view = harness
        .create_from_json(serde_json::json!({
            "name": "Task",
            "projectId": alpha.id().to_string(),
        }))
        .await
        .expect("creation should succeed");

    let payload: UpdateTaskPayload = serde_json::from_value(serde_json::json!({
        "name": "Renamed",
        "projectId": "",
    }))
    .expect("body should deserialise");
    let request = payload.validate().expect("payload should validate");
    let updated = harness
        .service
        .update(view.task().id(), request)
        .await
        .expect("update should succeed")
        .expect("task should exist");

    assert_eq!(updated.name(), "Renamed");
    assert_eq!(updated.project_id(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn remove_then_list_shows_the_task_gone(harness: Harness) {
    let view = harness
        .create_from_json(serde_json::json!({ "name": "doomed" }))
        .await
        .expect("creation should succeed");

    harness
        .service
        .remove(view.task().id())
        .await
        .expect("removal should succeed")
        .expect("task should exist");

    let filter = TaskFilterParams::default()
        .validate()
        .expect("empty params should validate");
    let views = harness
        .service
        .find_all(filter)
        .await
        .expect("listing should succeed");
    assert!(views.is_empty());
}
