use crate::route::SchemaRef::{List, One};
use crate::route::{Body, Method, ParamKind, QueryParam, Response, Route};

use super::{limit, snowflake};

pub const TAG: &str = "Members";

pub(super) const ROUTES: &[Route] = &[
    Route::new("list_guild_members", Method::Get, "/guilds/{guild_id}/members")
        .tag(TAG)
        .summary("List guild members ordered by user id")
        .query(&[limit(1000), snowflake("after")])
        .responses(&[Response::ok(List("GuildMemberResponse"))]),
    Route::new("search_guild_members", Method::Get, "/guilds/{guild_id}/members/search")
        .tag(TAG)
        .summary("Search members whose username or nickname starts with a query")
        .query(&[
            QueryParam::required("query", ParamKind::BoundedString { min: 1, max: 100 }),
            limit(1000),
        ])
        .responses(&[Response::ok(List("GuildMemberResponse"))]),
    Route::new("get_guild_member", Method::Get, "/guilds/{guild_id}/members/{user_id}")
        .tag(TAG)
        .summary("Get one member of a guild")
        .responses(&[Response::ok(One("GuildMemberResponse"))]),
    Route::new("update_guild_member", Method::Patch, "/guilds/{guild_id}/members/{user_id}")
        .tag(TAG)
        .summary("Update a member's nickname, roles, voice state or timeout")
        .body(Body::json(One("UpdateGuildMemberRequest")))
        .responses(&[Response::ok(One("GuildMemberResponse"))]),
    Route::new("delete_guild_member", Method::Delete, "/guilds/{guild_id}/members/{user_id}")
        .tag(TAG)
        .summary("Kick a member"),
    Route::new(
        "add_guild_member_role",
        Method::Put,
        "/guilds/{guild_id}/members/{user_id}/roles/{role_id}",
    )
    .tag(TAG)
    .summary("Give a role to a member"),
    Route::new(
        "delete_guild_member_role",
        Method::Delete,
        "/guilds/{guild_id}/members/{user_id}/roles/{role_id}",
    )
    .tag(TAG)
    .summary("Take a role from a member"),
    Route::new("list_guild_bans", Method::Get, "/guilds/{guild_id}/bans")
        .tag(TAG)
        .summary("List bans in a guild")
        .query(&[limit(1000), snowflake("before"), snowflake("after")])
        .responses(&[Response::ok(List("GuildBanResponse"))]),
    Route::new("get_guild_ban", Method::Get, "/guilds/{guild_id}/bans/{user_id}")
        .tag(TAG)
        .summary("Get the ban for a user")
        .responses(&[Response::ok(One("GuildBanResponse"))]),
    Route::new("ban_user_from_guild", Method::Put, "/guilds/{guild_id}/bans/{user_id}")
        .tag(TAG)
        .summary("Ban a user, optionally deleting their recent messages")
        .body(Body::json(One("BanUserFromGuildRequest")).optional()),
    Route::new("unban_user_from_guild", Method::Delete, "/guilds/{guild_id}/bans/{user_id}")
        .tag(TAG)
        .summary("Lift a ban"),
];
