//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::volunteer_handler::StatusQuery;
use domain::{Availability, NewVolunteer, UpdateVolunteer, VolunteerResponse, VolunteerStatus};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    info(title = "api-certify", description = "Volunteer registration API"),
    paths(
        crate::handlers::volunteer_handler::create_volunteer,
        crate::handlers::volunteer_handler::list_volunteers,
        crate::handlers::volunteer_handler::get_volunteer,
        crate::handlers::volunteer_handler::update_volunteer,
        crate::handlers::volunteer_handler::delete_volunteer,
    ),
    components(
        schemas(
            NewVolunteer,
            UpdateVolunteer,
            VolunteerResponse,
            VolunteerStatus,
            Availability,
            StatusQuery,
        )
    ),
    tags(
        (name = "Volunteers", description = "Volunteer registration endpoints"),
    )
)]
pub struct ApiDoc;
