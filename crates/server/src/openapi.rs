use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct PingDoc { pub success: bool }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct SubmissionInputDoc {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub githubLink: String,
    pub stopwatchTime: String,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct SubmissionDoc {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub githubLink: String,
    pub stopwatchTime: String,
}

#[derive(ToSchema)]
pub struct CreatedDoc { pub message: String, pub id: i64 }

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::ping,
        crate::routes::submissions::submit,
        crate::routes::submissions::read,
        crate::routes::submissions::edit,
        crate::routes::submissions::remove,
        crate::routes::submissions::search,
    ),
    components(
        schemas(
            PingDoc,
            SubmissionInputDoc,
            SubmissionDoc,
            CreatedDoc,
            MessageDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "submissions")
    )
)]
pub struct ApiDoc;
