//! Explicit per-operation request validators.
//!
//! One validator object per operation, invoked before the core. These
//! check shape-level constraints (presence, enum membership); the core
//! re-checks the semantic constraints only it understands — identifier
//! resolution and date parsing.

use crate::auth::services::{LoginRequest, RegisterRequest};
use crate::boundary::error::ApiError;
use crate::task::domain::{SortOrder, TaskSortKey, TaskStatus};
use crate::task::services::{CreateTaskRequest, TaskFilter, UpdateTaskRequest};
use serde::Deserialize;
use thiserror::Error;

/// Shape-level validation failures, phrased for the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestValidationError {
    /// A required field is missing or blank.
    #[error("{0} should not be empty")]
    Empty(&'static str),

    /// The email field is not a plausible address.
    #[error("email must be a valid email address")]
    InvalidEmail,

    /// The status field is outside the enumeration.
    #[error("status must be one of todo, in_progress, done")]
    InvalidStatus,

    /// The sortBy field is outside the allowed set.
    #[error("sortBy must be one of createdAt, status, projectId")]
    InvalidSortKey,

    /// The sortOrder field is outside the allowed set.
    #[error("sortOrder must be one of asc, desc")]
    InvalidSortOrder,
}

impl From<RequestValidationError> for ApiError {
    fn from(err: RequestValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

/// Result type for request validation.
pub type ValidationResult<T> = Result<T, RequestValidationError>;

fn require(field: &'static str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(RequestValidationError::Empty(field));
    }
    Ok(())
}

/// Minimal structural email check: one `@` with non-empty sides and a dot
/// in the domain.
fn require_email(value: &str) -> ValidationResult<()> {
    let Some((local, domain)) = value.split_once('@') else {
        return Err(RequestValidationError::InvalidEmail);
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(RequestValidationError::InvalidEmail);
    }
    Ok(())
}

fn parse_status(value: Option<&str>) -> ValidationResult<Option<TaskStatus>> {
    value
        .map(|raw| TaskStatus::try_from(raw).map_err(|_| RequestValidationError::InvalidStatus))
        .transpose()
}

/// Registration request body.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterPayload {
    /// Login email.
    pub email: String,
    /// Plaintext password (hashed by the core, never stored).
    pub password: String,
    /// Display name.
    pub name: String,
}

impl RegisterPayload {
    /// Validates the payload shape.
    ///
    /// # Errors
    ///
    /// Returns [`RequestValidationError`] for a blank field or an
    /// implausible email.
    pub fn validate(self) -> ValidationResult<RegisterRequest> {
        require("email", &self.email)?;
        require_email(&self.email)?;
        require("password", &self.password)?;
        require("name", &self.name)?;
        Ok(RegisterRequest::new(self.email, self.password, self.name))
    }
}

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginPayload {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

impl LoginPayload {
    /// Validates the payload shape.
    ///
    /// # Errors
    ///
    /// Returns [`RequestValidationError`] for a blank field.
    pub fn validate(self) -> ValidationResult<LoginRequest> {
        require("email", &self.email)?;
        require("password", &self.password)?;
        Ok(LoginRequest::new(self.email, self.password))
    }
}

/// Project creation request body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectPayload {
    /// Project name.
    pub name: String,
}

impl CreateProjectPayload {
    /// Validates the payload shape.
    ///
    /// # Errors
    ///
    /// Returns [`RequestValidationError::Empty`] for a blank name.
    pub fn validate(self) -> ValidationResult<String> {
        require("name", &self.name)?;
        Ok(self.name)
    }
}

/// Task creation request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskPayload {
    /// Task name.
    pub name: String,
    /// Optional status label.
    pub status: Option<String>,
    /// Optional owning-project reference.
    pub project_id: Option<String>,
}

impl CreateTaskPayload {
    /// Validates the payload shape.
    ///
    /// The project reference is passed through raw: only the core can
    /// decide whether it resolves.
    ///
    /// # Errors
    ///
    /// Returns [`RequestValidationError`] for a blank name or an unknown
    /// status label.
    pub fn validate(self) -> ValidationResult<CreateTaskRequest> {
        require("name", &self.name)?;
        let status = parse_status(self.status.as_deref())?;

        let mut request = CreateTaskRequest::new(self.name);
        if let Some(parsed) = status {
            request = request.with_status(parsed);
        }
        if let Some(project_id) = self.project_id {
            request = request.with_project_id(project_id);
        }
        Ok(request)
    }
}

/// Task update request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskPayload {
    /// Replacement name, when present.
    pub name: Option<String>,
    /// Replacement status label, when present.
    pub status: Option<String>,
    /// Project reference: blank clears, present revalidates.
    pub project_id: Option<String>,
}

impl UpdateTaskPayload {
    /// Validates the payload shape.
    ///
    /// # Errors
    ///
    /// Returns [`RequestValidationError::InvalidStatus`] for an unknown
    /// status label.
    pub fn validate(self) -> ValidationResult<UpdateTaskRequest> {
        let status = parse_status(self.status.as_deref())?;

        let mut request = UpdateTaskRequest::new();
        if let Some(name) = self.name {
            request = request.with_name(name);
        }
        if let Some(parsed) = status {
            request = request.with_status(parsed);
        }
        if let Some(project_id) = self.project_id {
            request = request.with_project_id(project_id);
        }
        Ok(request)
    }
}

/// Task listing query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFilterParams {
    /// Optional status filter.
    pub status: Option<String>,
    /// Optional owning-project filter.
    pub project_id: Option<String>,
    /// Optional inclusive lower creation-timestamp bound.
    pub created_from: Option<String>,
    /// Optional inclusive upper creation-timestamp bound.
    pub created_to: Option<String>,
    /// Optional sort key.
    pub sort_by: Option<String>,
    /// Optional sort direction.
    pub sort_order: Option<String>,
}

impl TaskFilterParams {
    /// Validates the parameter shapes and assembles the filter.
    ///
    /// Date and identifier values stay raw: parsing them is the core's
    /// semantic concern, not a shape check.
    ///
    /// # Errors
    ///
    /// Returns [`RequestValidationError`] for an unknown status, sort key,
    /// or sort order.
    pub fn validate(self) -> ValidationResult<TaskFilter> {
        let status = parse_status(self.status.as_deref())?;
        let sort_by = self
            .sort_by
            .as_deref()
            .map(|raw| {
                TaskSortKey::try_from(raw).map_err(|_| RequestValidationError::InvalidSortKey)
            })
            .transpose()?;
        if let Some(raw) = self.sort_order.as_deref() {
            if raw != "asc" && raw != "desc" {
                return Err(RequestValidationError::InvalidSortOrder);
            }
        }

        let mut filter = TaskFilter::new()
            .with_sort_by(sort_by.unwrap_or_default())
            .with_sort_order(SortOrder::from_param(self.sort_order.as_deref()));
        if let Some(parsed) = status {
            filter = filter.with_status(parsed);
        }
        if let Some(project_id) = self.project_id {
            filter = filter.with_project_id(project_id);
        }
        if let Some(created_from) = self.created_from {
            filter = filter.with_created_from(created_from);
        }
        if let Some(created_to) = self.created_to {
            filter = filter.with_created_to(created_to);
        }
        Ok(filter)
    }
}
