//! Renders the route catalogue and schema registry as an OpenAPI 3.1 document.

use schema::ratelimit::{HeaderKind, HEADERS};
use schema::registry;
use schema::route::{Body, Method, QueryParam, Response, Route, SchemaRef};
use schema::routes;
use schema::security::{self, BOT_TOKEN, OAUTH2};
use utoipa::openapi::content::Content;
use utoipa::openapi::header::HeaderBuilder;
use utoipa::openapi::info::InfoBuilder;
use utoipa::openapi::path::{
    HttpMethod, Operation, OperationBuilder, Parameter, ParameterBuilder, ParameterIn, Paths,
};
use utoipa::openapi::request_body::{RequestBody, RequestBodyBuilder};
use utoipa::openapi::response::{Response as ApiResponse, ResponseBuilder};
use utoipa::openapi::schema::{ArrayBuilder, ComponentsBuilder, ObjectBuilder, Schema, Type};
use utoipa::openapi::server::Server;
use utoipa::openapi::tag::Tag;
use utoipa::openapi::{OpenApi, OpenApiBuilder, Ref, RefOr, Required};

pub const TITLE: &str = "Discord HTTP API";
pub const API_VERSION: &str = "10";

const JSON: &str = "application/json";

pub struct DocumentService<'a> {
    base_url: &'a str,
    routes: &'a [&'static Route],
}

impl<'a> DocumentService<'a> {
    /// # Arguments
    /// - `base_url` - Server URL written into the document, e.g. `https://discord.com/api/v10`
    /// - `routes` - Routes to render, normally `routes::all()`
    pub fn new(base_url: &'a str, routes: &'a [&'static Route]) -> Self {
        Self { base_url, routes }
    }

    /// Builds the complete document.
    ///
    /// Every registry schema is published under `components.schemas`, whether or not a route
    /// refers to it, so the document doubles as the schema catalogue.
    pub fn build(&self) -> OpenApi {
        let mut components = ComponentsBuilder::new()
            .security_scheme(BOT_TOKEN, security::bot_token_scheme())
            .security_scheme(OAUTH2, security::oauth2_scheme());
        for (name, schema) in registry::components() {
            components = components.schema(name, schema);
        }

        let mut paths = Paths::new();
        for route in self.routes {
            paths.add_path_operation(route.path, vec![http_method(route.method)], operation(route));
        }

        let tags = routes::tags_of(self.routes);

        let info = InfoBuilder::new()
            .title(TITLE)
            .version(API_VERSION)
            .description(Some(
                "Wire-level contracts of the Discord REST API: schemas, routes and errors.",
            ))
            .build();

        tracing::debug!(
            "Rendered document with {} routes and {} schemas",
            self.routes.len(),
            registry::entries().len()
        );

        OpenApiBuilder::new()
            .info(info)
            .servers(Some(vec![Server::new(self.base_url)]))
            .paths(paths)
            .components(Some(components.build()))
            .tags(Some(tags.into_iter().map(Tag::new).collect::<Vec<_>>()))
            .build()
    }
}

impl Default for DocumentService<'static> {
    fn default() -> Self {
        Self::new("https://discord.com/api/v10", routes::all())
    }
}

fn http_method(method: Method) -> HttpMethod {
    match method {
        Method::Get => HttpMethod::Get,
        Method::Post => HttpMethod::Post,
        Method::Put => HttpMethod::Put,
        Method::Patch => HttpMethod::Patch,
        Method::Delete => HttpMethod::Delete,
    }
}

fn schema_ref(schema: SchemaRef) -> RefOr<Schema> {
    let item = RefOr::Ref(Ref::from_schema_name(schema.name()));
    match schema {
        SchemaRef::One(_) => item,
        SchemaRef::List(_) => RefOr::T(Schema::Array(ArrayBuilder::new().items(item).build())),
    }
}

fn operation(route: &Route) -> Operation {
    let mut builder = OperationBuilder::new()
        .operation_id(Some(route.operation_id))
        .tag(route.tag)
        .summary(Some(route.summary));

    for param in route.path_params() {
        builder = builder.parameter(
            ParameterBuilder::new()
                .name(param.name)
                .parameter_in(ParameterIn::Path)
                .required(Required::True)
                .schema(Some(param.schema()))
                .build(),
        );
    }

    for param in route.query {
        builder = builder.parameter(query_parameter(param));
    }

    if let Some(body) = &route.body {
        builder = builder.request_body(Some(request_body(body)));
    }

    for response in route.responses {
        builder = builder.response(
            response.status.to_string(),
            RefOr::T(declared_response(response)),
        );
    }

    let error = ResponseBuilder::new()
        .description("Client error response")
        .content(JSON, Content::new(Some(Ref::from_schema_name("ErrorResponse"))))
        .build();
    let ratelimited = with_ratelimit_headers(
        ResponseBuilder::new()
            .description("Too Many Requests")
            .content(
                JSON,
                Content::new(Some(Ref::from_schema_name("RatelimitedResponse"))),
            ),
    );

    let securities = route.security.requirements();
    if !securities.is_empty() {
        builder = builder.securities(Some(securities));
    }

    builder
        .response("429", RefOr::T(ratelimited))
        .response("4XX", RefOr::T(error))
        .build()
}

fn query_parameter(param: &QueryParam) -> Parameter {
    let required = if param.required {
        Required::True
    } else {
        Required::False
    };

    ParameterBuilder::new()
        .name(param.name)
        .parameter_in(ParameterIn::Query)
        .required(required)
        .schema(Some(param.kind.schema()))
        .build()
}

fn request_body(body: &Body) -> RequestBody {
    let required = if body.required {
        Required::True
    } else {
        Required::False
    };

    let mut builder = RequestBodyBuilder::new().required(Some(required));
    for content_type in body.content_types {
        builder = builder.content(
            content_type.as_str(),
            Content::new(Some(schema_ref(body.schema))),
        );
    }

    builder.build()
}

fn declared_response(response: &Response) -> ApiResponse {
    let mut builder = ResponseBuilder::new().description(response.description());
    if let Some(schema) = response.schema {
        builder = builder.content(JSON, Content::new(Some(schema_ref(schema))));
    }

    with_ratelimit_headers(builder)
}

fn with_ratelimit_headers(mut builder: ResponseBuilder) -> ApiResponse {
    for entry in HEADERS {
        let kind = match entry.kind {
            HeaderKind::Integer => Type::Integer,
            HeaderKind::Number => Type::Number,
            HeaderKind::String => Type::String,
        };
        let header = HeaderBuilder::new()
            .schema(RefOr::T(Schema::Object(
                ObjectBuilder::new().schema_type(kind).build(),
            )))
            .description(Some(entry.description))
            .build();

        builder = builder.header(entry.name, header);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn rendered() -> Value {
        serde_json::to_value(DocumentService::default().build()).unwrap()
    }

    /// Tests the document header.
    ///
    /// Expected: OpenAPI 3.1, API version 10 and the configured server URL
    #[test]
    fn renders_info_and_server() {
        let doc = serde_json::to_value(
            DocumentService::new("http://localhost:9000/api/v10", routes::all()).build(),
        )
        .unwrap();

        assert!(doc["openapi"].as_str().unwrap().starts_with("3.1"));
        assert_eq!(doc["info"]["version"], "10");
        assert_eq!(doc["servers"][0]["url"], "http://localhost:9000/api/v10");
    }

    /// Tests that every route becomes exactly one operation.
    ///
    /// Expected: operation count equals route count and ids are preserved
    #[test]
    fn renders_every_route() {
        let doc = rendered();
        let paths = doc["paths"].as_object().unwrap();

        let mut operations = 0;
        for item in paths.values() {
            for method in ["get", "post", "put", "patch", "delete"] {
                if item.get(method).is_some() {
                    operations += 1;
                }
            }
        }
        assert_eq!(operations, routes::all().len());

        let create = &doc["paths"]["/channels/{channel_id}/messages"]["post"];
        assert_eq!(create["operationId"], "create_message");
        assert!(create["requestBody"]["content"]["multipart/form-data"].is_object());
    }

    /// Tests the implicit error responses and rate-limit headers.
    ///
    /// Expected: 4XX and 429 bodies present, declared 200 carries every X-RateLimit header
    #[test]
    fn renders_implicit_responses_and_headers() {
        let doc = rendered();
        let responses = &doc["paths"]["/gateway/bot"]["get"]["responses"];

        assert_eq!(
            responses["4XX"]["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/ErrorResponse"
        );
        assert_eq!(
            responses["429"]["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/RatelimitedResponse"
        );
        for entry in HEADERS {
            assert!(
                responses["200"]["headers"][entry.name].is_object(),
                "missing {}",
                entry.name
            );
        }
    }

    /// Tests security rendering.
    ///
    /// Expected: both schemes declared, bot-or-OAuth2 routes list both alternatives, token
    /// routes list none
    #[test]
    fn renders_security() {
        let doc = rendered();
        let schemes = &doc["components"]["securitySchemes"];
        assert!(schemes["BotToken"].is_object());
        assert_eq!(
            schemes["OAuth2"]["flows"]["authorizationCode"]["tokenUrl"],
            "https://discord.com/api/oauth2/token"
        );

        let me = &doc["paths"]["/users/@me"]["get"]["security"];
        assert_eq!(me.as_array().unwrap().len(), 2);
        assert_eq!(me[1]["OAuth2"][0], "identify");

        let callback =
            &doc["paths"]["/interactions/{interaction_id}/{interaction_token}/callback"]["post"];
        assert!(callback.get("security").is_none());
    }

    /// Tests path and query parameters.
    ///
    /// Expected: snowflake path params refer to SnowflakeType, limit carries its range
    #[test]
    fn renders_parameters() {
        let doc = rendered();
        let params = doc["paths"]["/channels/{channel_id}/messages"]["get"]["parameters"]
            .as_array()
            .unwrap()
            .clone();

        let channel = params.iter().find(|p| p["name"] == "channel_id").unwrap();
        assert_eq!(channel["in"], "path");
        assert_eq!(
            channel["schema"]["$ref"],
            "#/components/schemas/SnowflakeType"
        );

        let limit = params.iter().find(|p| p["name"] == "limit").unwrap();
        assert_eq!(limit["in"], "query");
        assert_eq!(limit["schema"]["maximum"], 100);
    }
}
