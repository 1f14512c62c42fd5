//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use super::dto::{SummaryCreatedResponse, SummaryPayload, SummaryResponse, SummaryUpdatePayload};
use super::handlers::{summary, system};
use crate::error::{ErrorBody, ErrorResponse};

/// Generated OpenAPI specification, served at `/api-docs/openapi.json`
/// when the `swagger-ui` feature is enabled.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "summary-api",
        description = "Stores URLs submitted for summarization and serves the resulting records."
    ),
    paths(
        summary::create_summary,
        summary::read_all_summaries,
        summary::read_summary,
        summary::update_summary,
        summary::delete_summary,
        system::ping_handler,
    ),
    components(schemas(
        SummaryPayload,
        SummaryUpdatePayload,
        SummaryCreatedResponse,
        SummaryResponse,
        ErrorResponse,
        ErrorBody,
        system::PingResponse,
    )),
    tags(
        (name = "Summaries", description = "Summary record CRUD"),
        (name = "System", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        assert!(paths.contains(&"/summaries/"));
        assert!(paths.contains(&"/summaries/{id}/"));
        assert!(paths.contains(&"/ping"));
    }

    #[test]
    fn item_path_has_all_methods() {
        let doc = ApiDoc::openapi();
        let Some(item) = doc.paths.paths.get("/summaries/{id}/") else {
            panic!("missing /summaries/{{id}}/");
        };
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
    }
}
