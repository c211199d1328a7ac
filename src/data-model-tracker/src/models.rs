use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::prelude::*;
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::SqlType;
use serde::{Deserialize, Deserializer, Serialize};
use std::io::Write;

use crate::repository::RepositoryError;

// SQL type definitions for custom enums
// Note: These types use snake_case to match PostgreSQL type names
#[allow(non_camel_case_types)]
#[derive(SqlType, diesel::query_builder::QueryId, Debug, Clone, Copy)]
#[diesel(postgres_type(name = "job_type"))]
pub struct Job_type;

#[allow(non_camel_case_types)]
#[derive(SqlType, diesel::query_builder::QueryId, Debug, Clone, Copy)]
#[diesel(postgres_type(name = "application_status"))]
pub struct Application_status;

// JobType enum
/// Kind of position applied for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Job_type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    FullTime,
    PartTime,
    Internship,
    Contract,
}

impl ToSql<Job_type, Pg> for JobType {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let s = match self {
            JobType::FullTime => "full_time",
            JobType::PartTime => "part_time",
            JobType::Internship => "internship",
            JobType::Contract => "contract",
        };
        out.write_all(s.as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Job_type, Pg> for JobType {
    fn from_sql(bytes: PgValue) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"full_time" => Ok(JobType::FullTime),
            b"part_time" => Ok(JobType::PartTime),
            b"internship" => Ok(JobType::Internship),
            b"contract" => Ok(JobType::Contract),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

// ApplicationStatus enum
/// Where an application currently stands in the hiring process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Application_status)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    /// Application submitted, no response yet
    Applied,
    /// In the interview loop
    Interview,
    /// Received an offer
    Offer,
    Rejected,
}

impl ToSql<Application_status, Pg> for ApplicationStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        let s = match self {
            ApplicationStatus::Applied => "applied",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Offer => "offer",
            ApplicationStatus::Rejected => "rejected",
        };
        out.write_all(s.as_bytes())?;
        Ok(IsNull::No)
    }
}

impl FromSql<Application_status, Pg> for ApplicationStatus {
    fn from_sql(bytes: PgValue) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"applied" => Ok(ApplicationStatus::Applied),
            b"interview" => Ok(ApplicationStatus::Interview),
            b"offer" => Ok(ApplicationStatus::Offer),
            b"rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

// job_application table model (database representation)
/// A persisted job application. `id` and `created_at` are assigned on insert and never change.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::job_application)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub id: i64,
    pub company_name: Option<String>,
    pub role: Option<String>,
    pub job_type: Option<JobType>,
    pub location: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub application_date: Option<NaiveDate>,
    pub links: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl JobApplication {
    /// Assemble a full record from its identity, writable fields and creation time.
    pub fn from_fields(id: i64, fields: JobApplicationFields, created_at: DateTime<Utc>) -> Self {
        JobApplication {
            id,
            company_name: fields.company_name,
            role: fields.role,
            job_type: fields.job_type,
            location: fields.location,
            status: fields.status,
            application_date: fields.application_date,
            links: fields.links,
            created_at,
        }
    }

    /// The writable portion of this record.
    pub fn fields(&self) -> JobApplicationFields {
        JobApplicationFields {
            company_name: self.company_name.clone(),
            role: self.role.clone(),
            job_type: self.job_type,
            location: self.location.clone(),
            status: self.status,
            application_date: self.application_date,
            links: self.links.clone(),
        }
    }
}

/// Every column a client may write. Used as insert values and as a full-replacement
/// changeset: a `None` here overwrites the stored value with NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::job_application)]
#[diesel(treat_none_as_null = true)]
pub struct JobApplicationFields {
    pub company_name: Option<String>,
    pub role: Option<String>,
    pub job_type: Option<JobType>,
    pub location: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub application_date: Option<NaiveDate>,
    pub links: Vec<String>,
}

/// Insert values for a brand new row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::job_application)]
pub struct NewJobApplication {
    #[diesel(embed)]
    pub fields: JobApplicationFields,
    pub created_at: DateTime<Utc>,
}

impl NewJobApplication {
    /// Stamps the fields with the current time as their creation time.
    pub fn now(fields: JobApplicationFields) -> Self {
        NewJobApplication {
            fields,
            created_at: Utc::now(),
        }
    }
}

// API Payload Types

/// Request body for POST and PUT /api/applications.
///
/// Clients may echo back a full record; `id` and `createdAt` are accepted but ignored.
/// Missing fields are treated as null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationPayload {
    pub company_name: Option<String>,
    pub role: Option<String>,
    pub job_type: Option<JobType>,
    pub location: Option<String>,
    pub status: Option<ApplicationStatus>,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub application_date: Option<NaiveDate>,
    pub links: Option<Vec<String>>,
}

/// Reads `YYYY-MM-DD`, treating `null` and `""` (an untouched date input) as no date.
fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.is_empty() => s.parse::<NaiveDate>().map(Some).map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

impl From<JobApplicationPayload> for JobApplicationFields {
    fn from(payload: JobApplicationPayload) -> Self {
        JobApplicationFields {
            company_name: payload.company_name,
            role: payload.role,
            job_type: payload.job_type,
            location: payload.location,
            status: payload.status,
            application_date: payload.application_date,
            links: payload.links.unwrap_or_default(),
        }
    }
}

// API Error Types

/// Error for the /api/applications endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ApplicationError {
    /// No job application has this id
    #[serde(rename = "not_found")]
    NotFound(i64),
    /// The id in the path is not an integer
    #[serde(rename = "invalid_id")]
    InvalidId(String),
    /// The request body is not a valid job application
    #[serde(rename = "invalid_payload")]
    InvalidPayload(String),
    /// Unknown error occurred
    #[serde(rename = "unknown")]
    Unknown(String),
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
            ApplicationError::InvalidId(_) | ApplicationError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApplicationError::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(e: RepositoryError) -> Self {
        tracing::error!("Repository failure: {}", e);
        ApplicationError::Unknown(e.to_string())
    }
}

/// Malformed JSON, wrong field types and unknown enum variants are all client errors.
impl From<JsonRejection> for ApplicationError {
    fn from(rejection: JsonRejection) -> Self {
        ApplicationError::InvalidPayload(rejection.body_text())
    }
}

impl From<PathRejection> for ApplicationError {
    fn from(rejection: PathRejection) -> Self {
        ApplicationError::InvalidId(rejection.body_text())
    }
}
