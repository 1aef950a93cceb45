use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthDoc {
    pub status: String,
}

#[derive(ToSchema)]
pub struct RestaurantDoc {
    pub id: i64,
    pub name: String,
}

#[derive(ToSchema)]
pub struct RestaurantInputDoc {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(ToSchema)]
pub struct RenameInputDoc {
    pub name: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::restaurants::list,
        crate::routes::restaurants::create,
        crate::routes::restaurants::rename,
        crate::routes::restaurants::remove,
    ),
    components(
        schemas(
            HealthDoc,
            RestaurantDoc,
            RestaurantInputDoc,
            RenameInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "restaurants")
    )
)]
pub struct ApiDoc;
