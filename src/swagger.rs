use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::default::default_route_handler,
        crate::handlers::ping::ping_handler,
        crate::handlers::trigger::send_push_notification_handler,
    ),
    components(
        schemas(
            crate::models::TriggerReqBody,

            crate::models::GenericResponse,
            crate::models::DefaultResponse,
            crate::models::TriggerResponse,
            crate::models::ErrorResponse,
        )
    ),
    tags(
        (name = "Debugging API", description = "API for debugging purposes"),
        (name = "Notification API", description = "API for triggering reminder push notifications")
    )
)]
pub struct ApiDoc;
