use crate::route::SchemaRef::{List, One};
use crate::route::{Body, Method, ParamKind, QueryParam, Response, Route};

use super::{limit, snowflake};

pub const TAG: &str = "Messages";

const REACTION_TYPES: &[&str] = &["0", "1"];

pub(super) const ROUTES: &[Route] = &[
    Route::new("list_messages", Method::Get, "/channels/{channel_id}/messages")
        .tag(TAG)
        .summary("List messages in a channel")
        .query(&[
            snowflake("around"),
            snowflake("before"),
            snowflake("after"),
            limit(100),
        ])
        .responses(&[Response::ok(List("MessageResponse"))]),
    Route::new("create_message", Method::Post, "/channels/{channel_id}/messages")
        .tag(TAG)
        .summary("Post a message to a channel")
        .body(Body::json_or_multipart(One("MessageCreateRequest")))
        .responses(&[Response::ok(One("MessageResponse"))]),
    Route::new(
        "bulk_delete_messages",
        Method::Post,
        "/channels/{channel_id}/messages/bulk-delete",
    )
    .tag(TAG)
    .summary("Delete between 2 and 100 messages at once")
    .body(Body::json(One("BulkDeleteMessagesRequest"))),
    Route::new("get_message", Method::Get, "/channels/{channel_id}/messages/{message_id}")
        .tag(TAG)
        .summary("Get a message by id")
        .responses(&[Response::ok(One("MessageResponse"))]),
    Route::new("update_message", Method::Patch, "/channels/{channel_id}/messages/{message_id}")
        .tag(TAG)
        .summary("Edit a message")
        .body(Body::json_or_multipart(One("MessageEditRequest")))
        .responses(&[Response::ok(One("MessageResponse"))]),
    Route::new("delete_message", Method::Delete, "/channels/{channel_id}/messages/{message_id}")
        .tag(TAG)
        .summary("Delete a message"),
    Route::new(
        "crosspost_message",
        Method::Post,
        "/channels/{channel_id}/messages/{message_id}/crosspost",
    )
    .tag(TAG)
    .summary("Publish an announcement channel message to following channels")
    .responses(&[Response::ok(One("MessageResponse"))]),
    Route::new(
        "delete_all_message_reactions",
        Method::Delete,
        "/channels/{channel_id}/messages/{message_id}/reactions",
    )
    .tag(TAG)
    .summary("Remove every reaction from a message"),
    Route::new(
        "list_message_reactions_by_emoji",
        Method::Get,
        "/channels/{channel_id}/messages/{message_id}/reactions/{emoji_name}",
    )
    .tag(TAG)
    .summary("List users who reacted with an emoji")
    .query(&[
        QueryParam::optional("type", ParamKind::EnumLiterals(REACTION_TYPES)),
        snowflake("after"),
        limit(100),
    ])
    .responses(&[Response::ok(List("UserResponse"))]),
    Route::new(
        "delete_all_message_reactions_by_emoji",
        Method::Delete,
        "/channels/{channel_id}/messages/{message_id}/reactions/{emoji_name}",
    )
    .tag(TAG)
    .summary("Remove every reaction for one emoji"),
    Route::new(
        "add_my_message_reaction",
        Method::Put,
        "/channels/{channel_id}/messages/{message_id}/reactions/{emoji_name}/@me",
    )
    .tag(TAG)
    .summary("React to a message as the current user"),
    Route::new(
        "delete_my_message_reaction",
        Method::Delete,
        "/channels/{channel_id}/messages/{message_id}/reactions/{emoji_name}/@me",
    )
    .tag(TAG)
    .summary("Remove the current user's reaction"),
    Route::new(
        "delete_user_message_reaction",
        Method::Delete,
        "/channels/{channel_id}/messages/{message_id}/reactions/{emoji_name}/{user_id}",
    )
    .tag(TAG)
    .summary("Remove another user's reaction"),
    Route::new("list_pinned_messages", Method::Get, "/channels/{channel_id}/pins")
        .tag(TAG)
        .summary("List pinned messages in a channel")
        .responses(&[Response::ok(List("MessageResponse"))]),
    Route::new("pin_message", Method::Put, "/channels/{channel_id}/pins/{message_id}")
        .tag(TAG)
        .summary("Pin a message"),
    Route::new("unpin_message", Method::Delete, "/channels/{channel_id}/pins/{message_id}")
        .tag(TAG)
        .summary("Unpin a message"),
];
