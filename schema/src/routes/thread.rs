use crate::route::SchemaRef::{List, One};
use crate::route::{Body, Method, ParamKind, QueryParam, Response, Route};

use super::{flag, limit, snowflake};

pub const TAG: &str = "Threads";

const ARCHIVED: &[QueryParam] = &[
    QueryParam::optional("before", ParamKind::Timestamp),
    QueryParam::optional("limit", ParamKind::IntRange { min: 2, max: 100 }),
];

pub(super) const ROUTES: &[Route] = &[
    Route::new(
        "create_thread_from_message",
        Method::Post,
        "/channels/{channel_id}/messages/{message_id}/threads",
    )
    .tag(TAG)
    .summary("Start a thread from an existing message")
    .body(Body::json(One("CreateThreadFromMessageRequest")))
    .responses(&[Response::created(One("ThreadResponse"))]),
    Route::new("create_thread", Method::Post, "/channels/{channel_id}/threads")
        .tag(TAG)
        .summary("Start a thread, or a forum post with its first message")
        .body(Body::json_or_multipart(One("CreateThreadRequest")))
        .responses(&[Response::created(One("ThreadResponse"))]),
    Route::new("join_thread", Method::Put, "/channels/{channel_id}/thread-members/@me")
        .tag(TAG)
        .summary("Add the current user to a thread"),
    Route::new("leave_thread", Method::Delete, "/channels/{channel_id}/thread-members/@me")
        .tag(TAG)
        .summary("Remove the current user from a thread"),
    Route::new("list_thread_members", Method::Get, "/channels/{channel_id}/thread-members")
        .tag(TAG)
        .summary("List members of a thread")
        .query(&[flag("with_member"), snowflake("after"), limit(100)])
        .responses(&[Response::ok(List("ThreadMemberResponse"))]),
    Route::new(
        "get_thread_member",
        Method::Get,
        "/channels/{channel_id}/thread-members/{user_id}",
    )
    .tag(TAG)
    .summary("Get one member of a thread")
    .query(&[flag("with_member")])
    .responses(&[Response::ok(One("ThreadMemberResponse"))]),
    Route::new(
        "add_thread_member",
        Method::Put,
        "/channels/{channel_id}/thread-members/{user_id}",
    )
    .tag(TAG)
    .summary("Add a user to a thread"),
    Route::new(
        "delete_thread_member",
        Method::Delete,
        "/channels/{channel_id}/thread-members/{user_id}",
    )
    .tag(TAG)
    .summary("Remove a user from a thread"),
    Route::new(
        "list_public_archived_threads",
        Method::Get,
        "/channels/{channel_id}/threads/archived/public",
    )
    .tag(TAG)
    .summary("List archived public threads, newest first")
    .query(ARCHIVED)
    .responses(&[Response::ok(One("ThreadsResponse"))]),
    Route::new(
        "list_private_archived_threads",
        Method::Get,
        "/channels/{channel_id}/threads/archived/private",
    )
    .tag(TAG)
    .summary("List archived private threads, newest first")
    .query(ARCHIVED)
    .responses(&[Response::ok(One("ThreadsResponse"))]),
    Route::new(
        "list_my_private_archived_threads",
        Method::Get,
        "/channels/{channel_id}/users/@me/threads/archived/private",
    )
    .tag(TAG)
    .summary("List archived private threads the current user has joined")
    .query(&[
        snowflake("before"),
        QueryParam::optional("limit", ParamKind::IntRange { min: 2, max: 100 }),
    ])
    .responses(&[Response::ok(One("ThreadsResponse"))]),
    Route::new("get_active_guild_threads", Method::Get, "/guilds/{guild_id}/threads/active")
        .tag(TAG)
        .summary("List active threads in a guild")
        .responses(&[Response::ok(One("ThreadsResponse"))]),
];
