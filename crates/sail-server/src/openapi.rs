use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sailing Schedule API",
        version = "0.1.0",
        description = "Sailing-class schedule events extracted from the club's Hebrew schedule page."
    ),
    paths(crate::routes::list_events, crate::routes::health),
    components(schemas(crate::dto::EventsResponse, crate::dto::HealthResponse)),
    tags(
        (name = "events", description = "Extracted schedule events"),
        (name = "system", description = "Health and system status"),
    )
)]
pub struct ApiDoc;
