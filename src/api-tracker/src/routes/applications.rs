use axum::{
    extract::{Json, Path, State, rejection::JsonRejection, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};

use data_model_tracker::models::{ApplicationError, JobApplicationFields, JobApplicationPayload, NewJobApplication};
use data_model_tracker::repository::SharedRepository;

/// GET /api/applications - List every job application
pub async fn list_applications(State(repo): State<SharedRepository>) -> Result<impl IntoResponse, ApplicationError> {
    let applications = repo.find_all().await?;
    tracing::debug!("Listing {} job applications", applications.len());
    Ok((StatusCode::OK, Json(applications)))
}

/// POST /api/applications - Create a job application
///
/// Any `id` or `createdAt` in the body is ignored: both are assigned here.
pub async fn create_application(
    State(repo): State<SharedRepository>,
    payload: Result<Json<JobApplicationPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Json(payload) = payload?;
    let new = NewJobApplication::now(JobApplicationFields::from(payload));

    let created = repo.insert(new).await?;
    tracing::debug!("Created job application {}", created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/applications/{id} - Get one job application
pub async fn get_application(
    State(repo): State<SharedRepository>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Path(id) = id?;

    match repo.find_by_id(id).await? {
        Some(application) => Ok((StatusCode::OK, Json(application))),
        None => {
            tracing::debug!("Job application {} not found", id);
            Err(ApplicationError::NotFound(id))
        }
    }
}

/// PUT /api/applications/{id} - Replace every field of a job application except `id` and `createdAt`
///
/// Fields missing from the body are cleared.
pub async fn update_application(
    State(repo): State<SharedRepository>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<JobApplicationPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    match repo.update(id, JobApplicationFields::from(payload)).await? {
        Some(updated) => {
            tracing::debug!("Updated job application {}", id);
            Ok((StatusCode::OK, Json(updated)))
        }
        None => {
            tracing::debug!("Job application {} not found for update", id);
            Err(ApplicationError::NotFound(id))
        }
    }
}

/// DELETE /api/applications/{id} - Delete a job application
///
/// Succeeds whether or not the id existed.
pub async fn delete_application(
    State(repo): State<SharedRepository>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApplicationError> {
    let Path(id) = id?;
    repo.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
