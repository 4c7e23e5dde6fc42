//! Volunteer handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Availability, NewVolunteer, UpdateVolunteer, VolunteerFilter, VolunteerResponse, VolunteerStatus};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Status filter accepted by the list endpoint.
///
/// Listing defaults to active registrations; `todos` lists every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusQuery {
    #[default]
    Ativo,
    Inativo,
    Todos,
}

impl StatusQuery {
    fn as_status(self) -> Option<VolunteerStatus> {
        match self {
            StatusQuery::Ativo => Some(VolunteerStatus::Active),
            StatusQuery::Inativo => Some(VolunteerStatus::Inactive),
            StatusQuery::Todos => None,
        }
    }
}

/// List query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListVolunteersQuery {
    /// Status filter (`ativo` when omitted, `todos` for every record)
    #[serde(default)]
    pub status: StatusQuery,
    /// Exact desired role
    pub cargo: Option<String>,
    /// Exact availability
    pub disponibilidade: Option<Availability>,
}

impl From<ListVolunteersQuery> for VolunteerFilter {
    fn from(query: ListVolunteersQuery) -> Self {
        Self {
            status: query.status.as_status(),
            desired_role: query.cargo,
            availability: query.disponibilidade,
        }
    }
}

/// Unwrap the `:id` segment, reporting malformed ids with the JSON error body.
fn volunteer_id(path: Result<Path<Uuid>, PathRejection>) -> AppResult<Uuid> {
    let Path(id) = path.map_err(|e| AppError::bad_request(e.body_text()))?;
    Ok(id)
}

/// Create volunteer routes
pub fn volunteer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_volunteers).post(create_volunteer))
        .route(
            "/:id",
            get(get_volunteer)
                .put(update_volunteer)
                .delete(delete_volunteer),
        )
}

/// Register a new volunteer
#[utoipa::path(
    post,
    path = "/voluntarios",
    tag = "Volunteers",
    request_body = NewVolunteer,
    responses(
        (status = 201, description = "Volunteer registered", body = VolunteerResponse),
        (status = 409, description = "Email already held by an active registration"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_volunteer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewVolunteer>,
) -> AppResult<(StatusCode, Json<VolunteerResponse>)> {
    let volunteer = state.volunteer_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(VolunteerResponse::from(volunteer))))
}

/// List volunteers
#[utoipa::path(
    get,
    path = "/voluntarios",
    tag = "Volunteers",
    params(ListVolunteersQuery),
    responses(
        (status = 200, description = "Matching volunteers in registration order", body = Vec<VolunteerResponse>),
        (status = 422, description = "Invalid filter value")
    )
)]
pub async fn list_volunteers(
    State(state): State<AppState>,
    query: Result<Query<ListVolunteersQuery>, QueryRejection>,
) -> AppResult<Json<Vec<VolunteerResponse>>> {
    let Query(query) = query.map_err(|e| AppError::validation(e.body_text()))?;

    let volunteers = state.volunteer_service.list(query.into()).await?;
    Ok(Json(volunteers.into_iter().map(VolunteerResponse::from).collect()))
}

/// Get volunteer by ID (inactive records included)
#[utoipa::path(
    get,
    path = "/voluntarios/{id}",
    tag = "Volunteers",
    params(
        ("id" = Uuid, Path, description = "Volunteer ID")
    ),
    responses(
        (status = 200, description = "Volunteer registration", body = VolunteerResponse),
        (status = 400, description = "Malformed volunteer ID"),
        (status = 404, description = "Volunteer not found")
    )
)]
pub async fn get_volunteer(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<VolunteerResponse>> {
    let id = volunteer_id(path)?;
    let volunteer = state.volunteer_service.get(id).await?;
    Ok(Json(VolunteerResponse::from(volunteer)))
}

/// Update the supplied fields of a volunteer.
///
/// Field rules are checked by the service after the id lookup, so an
/// unknown id is reported as 404 whatever the payload holds.
#[utoipa::path(
    put,
    path = "/voluntarios/{id}",
    tag = "Volunteers",
    params(
        ("id" = Uuid, Path, description = "Volunteer ID")
    ),
    request_body = UpdateVolunteer,
    responses(
        (status = 200, description = "Volunteer updated", body = VolunteerResponse),
        (status = 400, description = "Malformed volunteer ID"),
        (status = 404, description = "Volunteer not found"),
        (status = 409, description = "Email already held by another active registration"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_volunteer(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateVolunteer>, JsonRejection>,
) -> AppResult<Json<VolunteerResponse>> {
    let id = volunteer_id(path)?;
    let Json(payload) = payload.map_err(|e| AppError::validation(e.body_text()))?;
    let volunteer = state.volunteer_service.update(id, payload).await?;
    Ok(Json(VolunteerResponse::from(volunteer)))
}

/// Soft delete a volunteer
#[utoipa::path(
    delete,
    path = "/voluntarios/{id}",
    tag = "Volunteers",
    params(
        ("id" = Uuid, Path, description = "Volunteer ID")
    ),
    responses(
        (status = 200, description = "Volunteer marked inactive", body = VolunteerResponse),
        (status = 400, description = "Malformed volunteer ID"),
        (status = 404, description = "Volunteer not found")
    )
)]
pub async fn delete_volunteer(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<VolunteerResponse>> {
    let id = volunteer_id(path)?;
    let volunteer = state.volunteer_service.soft_delete(id).await?;
    Ok(Json(VolunteerResponse::from(volunteer)))
}
