use crate::route::SchemaRef::{List, One};
use crate::route::{Body, Method, Response, Route};

use super::flag;

pub const TAG: &str = "Guilds";

pub(super) const ROUTES: &[Route] = &[
    Route::new("get_guild", Method::Get, "/guilds/{guild_id}")
        .tag(TAG)
        .summary("Get a guild by id")
        .query(&[flag("with_counts")])
        .responses(&[Response::ok(One("GuildResponse"))]),
    Route::new("update_guild", Method::Patch, "/guilds/{guild_id}")
        .tag(TAG)
        .summary("Update a guild's settings")
        .body(Body::json(One("GuildPatchRequest")))
        .responses(&[Response::ok(One("GuildResponse"))]),
    Route::new("list_guild_channels", Method::Get, "/guilds/{guild_id}/channels")
        .tag(TAG)
        .summary("List channels in a guild, excluding threads")
        .responses(&[Response::ok(List("GuildChannelResponse"))]),
    Route::new("create_guild_channel", Method::Post, "/guilds/{guild_id}/channels")
        .tag(TAG)
        .summary("Create a channel in a guild")
        .body(Body::json(One("CreateGuildChannelRequest")))
        .responses(&[Response::created(One("GuildChannelResponse"))]),
    Route::new("list_guild_roles", Method::Get, "/guilds/{guild_id}/roles")
        .tag(TAG)
        .summary("List roles in a guild")
        .responses(&[Response::ok(List("GuildRoleResponse"))]),
    Route::new("create_guild_role", Method::Post, "/guilds/{guild_id}/roles")
        .tag(TAG)
        .summary("Create a role")
        .body(Body::json(One("CreateRoleRequest")).optional())
        .responses(&[Response::ok(One("GuildRoleResponse"))]),
    Route::new("update_guild_role", Method::Patch, "/guilds/{guild_id}/roles/{role_id}")
        .tag(TAG)
        .summary("Update a role")
        .body(Body::json(One("UpdateRoleRequest")))
        .responses(&[Response::ok(One("GuildRoleResponse"))]),
    Route::new("delete_guild_role", Method::Delete, "/guilds/{guild_id}/roles/{role_id}")
        .tag(TAG)
        .summary("Delete a role"),
    Route::new("list_guild_invites", Method::Get, "/guilds/{guild_id}/invites")
        .tag(TAG)
        .summary("List invites across every channel of a guild")
        .responses(&[Response::ok(List("InviteResponse"))]),
    Route::new("list_guild_webhooks", Method::Get, "/guilds/{guild_id}/webhooks")
        .tag(TAG)
        .summary("List webhooks across every channel of a guild")
        .responses(&[Response::ok(List("WebhookResponse"))]),
    Route::new("list_guild_voice_regions", Method::Get, "/guilds/{guild_id}/regions")
        .tag(TAG)
        .summary("List voice regions available to a guild")
        .responses(&[Response::ok(List("VoiceRegionResponse"))]),
];
