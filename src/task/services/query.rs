//! Task query and association engine.
//!
//! Builds typed store queries from untrusted filter input, validates owning
//! project references at write time, and enriches read results with project
//! summaries resolved in one batched lookup per query.

use crate::project::{
    domain::{ProjectId, ProjectSummary},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::{
    domain::{SortOrder, Task, TaskChanges, TaskId, TaskSortKey, TaskStatus, TaskView},
    ports::{TaskQuery, TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use mockable::Clock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    name: String,
    status: Option<TaskStatus>,
    project_id: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: None,
            project_id: None,
        }
    }

    /// Sets the initial status (defaults to `todo` when omitted).
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the raw owning-project reference, validated on create.
    #[must_use]
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

/// Partial-update request payload for a task.
///
/// Absent fields leave the stored values untouched. A blank `project_id`
/// clears the stored reference; a present one is revalidated against the
/// project store exactly as on create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateTaskRequest {
    name: Option<String>,
    status: Option<TaskStatus>,
    project_id: Option<String>,
}

impl UpdateTaskRequest {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a replacement status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the raw project reference (blank clears the stored one).
    #[must_use]
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

/// Untrusted filter input for task listings.
///
/// Every field is independently optional; absent fields impose no
/// constraint. Identifier and date fields arrive as raw strings and are
/// validated by the service, the one place that understands them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    project_id: Option<String>,
    created_from: Option<String>,
    created_to: Option<String>,
    sort_by: TaskSortKey,
    sort_order: SortOrder,
}

impl TaskFilter {
    /// Creates an unconstrained filter with default ordering (newest
    /// first by creation timestamp).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires an exact status match.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Requires an exact owning-project match (raw identifier string).
    #[must_use]
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Sets the inclusive lower creation-timestamp bound (raw date string).
    #[must_use]
    pub fn with_created_from(mut self, created_from: impl Into<String>) -> Self {
        self.created_from = Some(created_from.into());
        self
    }

    /// Sets the inclusive upper creation-timestamp bound (raw date string).
    #[must_use]
    pub fn with_created_to(mut self, created_to: impl Into<String>) -> Self {
        self.created_to = Some(created_to.into());
        self
    }

    /// Sets the sort key.
    #[must_use]
    pub const fn with_sort_by(mut self, sort_by: TaskSortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Sets the sort direction.
    #[must_use]
    pub const fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }
}

/// Service-level errors for task query operations.
#[derive(Debug, Error)]
pub enum TaskQueryError {
    /// A supplied project reference is syntactically invalid or does not
    /// resolve to an existing project.
    #[error("Project not found")]
    ProjectNotFound,

    /// A date bound failed to parse; `field` names the offending bound.
    #[error("Invalid {field} date")]
    InvalidDate {
        /// Wire name of the bound that failed (`createdFrom`/`createdTo`).
        field: &'static str,
        /// The unparseable input.
        value: String,
    },

    /// Task store operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),

    /// Project store operation failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
}

/// Result type for task query service operations.
pub type TaskQueryResult<T> = Result<T, TaskQueryError>;

/// Task query and association service.
///
/// Owns no state beyond its injected collaborators; every operation is a
/// request-scoped transformation over the task and project stores.
#[derive(Clone)]
pub struct TaskQueryService<T, P, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    projects: Arc<P>,
    clock: Arc<C>,
}

/// Trims a raw optional string, mapping blank input to absence.
fn blank_to_none(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parses a creation-timestamp bound: RFC 3339, or a bare `YYYY-MM-DD`
/// date taken as midnight UTC.
fn parse_bound(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<DateTime<Utc>>, TaskQueryError> {
    let Some(raw) = blank_to_none(value) else {
        return Ok(None);
    };
    DateTime::parse_from_rfc3339(raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        })
        .map(Some)
        .map_err(|_| TaskQueryError::InvalidDate {
            field,
            value: raw.to_owned(),
        })
}

impl<T, P, C> TaskQueryService<T, P, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task query service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, projects: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            projects,
            clock,
        }
    }

    /// Creates a new task.
    ///
    /// A present, non-blank project reference must parse and resolve to an
    /// existing project; only then is it attached. Blank or absent
    /// references are stored as absent. The returned record is unenriched:
    /// association is a read-time concern.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::ProjectNotFound`] for an invalid or
    /// unknown project reference, or a repository error.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskQueryResult<Task> {
        let project_id = match blank_to_none(request.project_id.as_deref()) {
            Some(raw) => Some(self.resolve_project_reference(raw).await?),
            None => None,
        };

        let task = Task::new(
            request.name,
            request.status.unwrap_or_default(),
            project_id,
            &*self.clock,
        );
        self.tasks.store(&task).await?;
        Ok(task)
    }

    /// Retrieves a task by identifier, enriched with its resolved project
    /// summary.
    ///
    /// Returns `Ok(None)` when the task does not exist. The enrichment
    /// costs at most one project store lookup.
    ///
    /// # Errors
    ///
    /// Returns a repository error when a store lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskQueryResult<Option<TaskView>> {
        match self.tasks.find_by_id(id).await? {
            Some(task) => {
                let mut views = self.attach_project_summaries(vec![task]).await?;
                Ok(views.pop())
            }
            None => Ok(None),
        }
    }

    /// Lists tasks matching the filter, sorted and enriched.
    ///
    /// All distinct project references across the result set are resolved
    /// in a single batched lookup; tasks whose reference is absent or
    /// dangling get a `null` project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::ProjectNotFound`] for a syntactically
    /// invalid project filter, [`TaskQueryError::InvalidDate`] for a
    /// malformed date bound, or a repository error.
    pub async fn find_all(&self, filter: TaskFilter) -> TaskQueryResult<Vec<TaskView>> {
        let query = build_query(filter)?;
        let tasks = self.tasks.find_filtered(&query).await?;
        self.attach_project_summaries(tasks).await
    }

    /// Applies a partial update to a task.
    ///
    /// The project reference is tri-state: an absent field leaves the
    /// stored reference untouched, a blank value clears it, and a present
    /// value is revalidated exactly as on create. Validation happens before
    /// the existence lookup, so an invalid reference is reported even for
    /// an unknown task.
    ///
    /// Returns the post-update record, or `Ok(None)` when no task with
    /// that identifier exists.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::ProjectNotFound`] for an invalid or
    /// unknown project reference, or a repository error.
    pub async fn update(
        &self,
        id: TaskId,
        request: UpdateTaskRequest,
    ) -> TaskQueryResult<Option<Task>> {
        let project_ref = match request.project_id.as_deref() {
            None => None,
            Some(raw) if raw.trim().is_empty() => Some(None),
            Some(raw) => Some(Some(self.resolve_project_reference(raw.trim()).await?)),
        };

        let changes = TaskChanges {
            name: request.name,
            status: request.status,
            project_ref,
        };
        Ok(self.tasks.update_by_id(id, &changes).await?)
    }

    /// Deletes a task.
    ///
    /// Returns the record as it existed immediately before deletion, or
    /// `Ok(None)` when no such task exists.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the delete fails.
    pub async fn remove(&self, id: TaskId) -> TaskQueryResult<Option<Task>> {
        Ok(self.tasks.delete_by_id(id).await?)
    }

    /// Parses and resolves a non-blank project reference.
    ///
    /// Syntactically invalid and unknown references report the same error:
    /// callers learn only that the project was not found.
    async fn resolve_project_reference(&self, raw: &str) -> TaskQueryResult<ProjectId> {
        let id = ProjectId::parse(raw).map_err(|_| TaskQueryError::ProjectNotFound)?;
        self.projects
            .find_by_id(id)
            .await?
            .map(|_| id)
            .ok_or(TaskQueryError::ProjectNotFound)
    }

    /// Enriches tasks with project summaries via one batched lookup over
    /// the distinct references in the set.
    async fn attach_project_summaries(&self, tasks: Vec<Task>) -> TaskQueryResult<Vec<TaskView>> {
        let mut seen = HashSet::new();
        let ids: Vec<ProjectId> = tasks
            .iter()
            .filter_map(Task::project_id)
            .filter(|id| seen.insert(*id))
            .collect();

        if ids.is_empty() {
            return Ok(tasks
                .into_iter()
                .map(|task| TaskView::new(task, None))
                .collect());
        }

        let projects = self.projects.find_many_by_ids(&ids).await?;
        let summaries: HashMap<ProjectId, ProjectSummary> = projects
            .iter()
            .map(|project| (project.id(), ProjectSummary::of(project)))
            .collect();

        Ok(tasks
            .into_iter()
            .map(|task| {
                let project = task.project_id().and_then(|id| summaries.get(&id).cloned());
                TaskView::new(task, project)
            })
            .collect())
    }
}

/// Builds the typed store query from untrusted filter input.
///
/// The project filter is checked for syntax only: an unknown but
/// well-formed identifier simply matches nothing.
fn build_query(filter: TaskFilter) -> TaskQueryResult<TaskQuery> {
    let project_id = match blank_to_none(filter.project_id.as_deref()) {
        Some(raw) => Some(ProjectId::parse(raw).map_err(|_| TaskQueryError::ProjectNotFound)?),
        None => None,
    };
    let created_from = parse_bound("createdFrom", filter.created_from.as_deref())?;
    let created_to = parse_bound("createdTo", filter.created_to.as_deref())?;

    Ok(TaskQuery {
        status: filter.status,
        project_id,
        created_from,
        created_to,
        sort_by: filter.sort_by,
        sort_order: filter.sort_order,
    })
}
