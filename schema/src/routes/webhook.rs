use crate::route::SchemaRef::One;
use crate::route::{Body, Method, QueryParam, Response, Route};
use crate::security::Security;

use super::{flag, snowflake};

pub const TAG: &str = "Webhooks";

const THREAD: &[QueryParam] = &[snowflake("thread_id")];

pub(super) const ROUTES: &[Route] = &[
    Route::new("get_webhook", Method::Get, "/webhooks/{webhook_id}")
        .tag(TAG)
        .summary("Get a webhook")
        .responses(&[Response::ok(One("WebhookResponse"))]),
    Route::new("update_webhook", Method::Patch, "/webhooks/{webhook_id}")
        .tag(TAG)
        .summary("Update a webhook's name, avatar or channel")
        .body(Body::json(One("UpdateWebhookRequest")))
        .responses(&[Response::ok(One("WebhookResponse"))]),
    Route::new("delete_webhook", Method::Delete, "/webhooks/{webhook_id}")
        .tag(TAG)
        .summary("Delete a webhook"),
    Route::new("get_webhook_by_token", Method::Get, "/webhooks/{webhook_id}/{webhook_token}")
        .tag(TAG)
        .summary("Get a webhook using its token")
        .security(Security::None)
        .responses(&[Response::ok(One("WebhookResponse"))]),
    Route::new(
        "update_webhook_by_token",
        Method::Patch,
        "/webhooks/{webhook_id}/{webhook_token}",
    )
    .tag(TAG)
    .summary("Update a webhook using its token")
    .security(Security::None)
    .body(Body::json(One("UpdateWebhookRequest")))
    .responses(&[Response::ok(One("WebhookResponse"))]),
    Route::new(
        "delete_webhook_by_token",
        Method::Delete,
        "/webhooks/{webhook_id}/{webhook_token}",
    )
    .tag(TAG)
    .summary("Delete a webhook using its token")
    .security(Security::None),
    Route::new("execute_webhook", Method::Post, "/webhooks/{webhook_id}/{webhook_token}")
        .tag(TAG)
        .summary("Post a message through a webhook")
        .security(Security::None)
        .query(&[flag("wait"), snowflake("thread_id")])
        .body(Body::json_or_multipart(One("IncomingWebhookRequest")))
        .responses(&[
            Response::ok(One("MessageResponse")),
            Response::no_content(),
        ]),
    Route::new(
        "get_original_webhook_message",
        Method::Get,
        "/webhooks/{webhook_id}/{webhook_token}/messages/@original",
    )
    .tag(TAG)
    .summary("Get the original response to an interaction")
    .security(Security::None)
    .query(THREAD)
    .responses(&[Response::ok(One("MessageResponse"))]),
    Route::new(
        "update_original_webhook_message",
        Method::Patch,
        "/webhooks/{webhook_id}/{webhook_token}/messages/@original",
    )
    .tag(TAG)
    .summary("Edit the original response to an interaction")
    .security(Security::None)
    .query(THREAD)
    .body(Body::json_or_multipart(One("IncomingWebhookUpdateRequest")))
    .responses(&[Response::ok(One("MessageResponse"))]),
    Route::new(
        "delete_original_webhook_message",
        Method::Delete,
        "/webhooks/{webhook_id}/{webhook_token}/messages/@original",
    )
    .tag(TAG)
    .summary("Delete the original response to an interaction")
    .security(Security::None)
    .query(THREAD),
    Route::new(
        "get_webhook_message",
        Method::Get,
        "/webhooks/{webhook_id}/{webhook_token}/messages/{message_id}",
    )
    .tag(TAG)
    .summary("Get a message sent by a webhook")
    .security(Security::None)
    .query(THREAD)
    .responses(&[Response::ok(One("MessageResponse"))]),
    Route::new(
        "update_webhook_message",
        Method::Patch,
        "/webhooks/{webhook_id}/{webhook_token}/messages/{message_id}",
    )
    .tag(TAG)
    .summary("Edit a message sent by a webhook")
    .security(Security::None)
    .query(THREAD)
    .body(Body::json_or_multipart(One("IncomingWebhookUpdateRequest")))
    .responses(&[Response::ok(One("MessageResponse"))]),
    Route::new(
        "delete_webhook_message",
        Method::Delete,
        "/webhooks/{webhook_id}/{webhook_token}/messages/{message_id}",
    )
    .tag(TAG)
    .summary("Delete a message sent by a webhook")
    .security(Security::None)
    .query(THREAD),
];
