use crate::route::SchemaRef::{List, One};
use crate::route::{Body, Method, Response, Route};

pub const TAG: &str = "Channels";

pub(super) const ROUTES: &[Route] = &[
    Route::new("get_channel", Method::Get, "/channels/{channel_id}")
        .tag(TAG)
        .summary("Get a channel by id")
        .responses(&[Response::ok(One("ChannelResponse"))]),
    Route::new("update_channel", Method::Patch, "/channels/{channel_id}")
        .tag(TAG)
        .summary("Update a channel's settings")
        .body(Body::json(One("UpdateChannelRequest")))
        .responses(&[Response::ok(One("ChannelResponse"))]),
    Route::new("delete_channel", Method::Delete, "/channels/{channel_id}")
        .tag(TAG)
        .summary("Delete a channel, or close a private message")
        .responses(&[Response::ok(One("ChannelResponse"))]),
    Route::new(
        "set_channel_permission_overwrite",
        Method::Put,
        "/channels/{channel_id}/permissions/{overwrite_id}",
    )
    .tag(TAG)
    .summary("Edit the permission overwrite for a user or role")
    .body(Body::json(One("ChannelPermissionOverwriteRequest"))),
    Route::new(
        "delete_channel_permission_overwrite",
        Method::Delete,
        "/channels/{channel_id}/permissions/{overwrite_id}",
    )
    .tag(TAG)
    .summary("Delete a permission overwrite"),
    Route::new("list_channel_invites", Method::Get, "/channels/{channel_id}/invites")
        .tag(TAG)
        .summary("List invites for a channel")
        .responses(&[Response::ok(List("InviteResponse"))]),
    Route::new("create_channel_invite", Method::Post, "/channels/{channel_id}/invites")
        .tag(TAG)
        .summary("Create an invite for a channel")
        .body(Body::json(One("CreateChannelInviteRequest")).optional())
        .responses(&[Response::ok(One("InviteResponse"))]),
    Route::new("list_channel_webhooks", Method::Get, "/channels/{channel_id}/webhooks")
        .tag(TAG)
        .summary("List webhooks for a channel")
        .responses(&[Response::ok(List("WebhookResponse"))]),
    Route::new("create_webhook", Method::Post, "/channels/{channel_id}/webhooks")
        .tag(TAG)
        .summary("Create a webhook in a channel")
        .body(Body::json(One("CreateWebhookRequest")))
        .responses(&[Response::ok(One("GuildIncomingWebhookResponse"))]),
    Route::new("follow_channel", Method::Post, "/channels/{channel_id}/followers")
        .tag(TAG)
        .summary("Follow an announcement channel into a target channel")
        .body(Body::json(One("FollowChannelRequest")))
        .responses(&[Response::ok(One("FollowedChannelResponse"))]),
    Route::new("trigger_typing_indicator", Method::Post, "/channels/{channel_id}/typing")
        .tag(TAG)
        .summary("Show the typing indicator in a channel"),
];
