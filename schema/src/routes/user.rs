use crate::oauth2::OAuth2Scopes;
use crate::route::SchemaRef::{List, One};
use crate::route::{Body, Method, Response, Route};
use crate::security::Security;

use super::{flag, limit, snowflake};

pub const TAG: &str = "Users";

pub(super) const ROUTES: &[Route] = &[
    Route::new("get_my_user", Method::Get, "/users/@me")
        .tag(TAG)
        .summary("Get the current user")
        .security(Security::BotOrOAuth2(&[OAuth2Scopes::Identify]))
        .responses(&[Response::ok(One("UserPIIResponse"))]),
    Route::new("update_my_user", Method::Patch, "/users/@me")
        .tag(TAG)
        .summary("Update the bot account's username, avatar or banner")
        .body(Body::json(One("BotAccountPatchRequest")))
        .responses(&[Response::ok(One("UserPIIResponse"))]),
    Route::new("get_user", Method::Get, "/users/{user_id}")
        .tag(TAG)
        .summary("Get a user by id")
        .responses(&[Response::ok(One("UserResponse"))]),
    Route::new("list_my_guilds", Method::Get, "/users/@me/guilds")
        .tag(TAG)
        .summary("List guilds the current user is a member of")
        .security(Security::BotOrOAuth2(&[OAuth2Scopes::Guilds]))
        .query(&[
            snowflake("before"),
            snowflake("after"),
            limit(200),
            flag("with_counts"),
        ])
        .responses(&[Response::ok(List("MyGuildResponse"))]),
    Route::new("leave_guild", Method::Delete, "/users/@me/guilds/{guild_id}")
        .tag(TAG)
        .summary("Leave a guild"),
    Route::new("get_my_guild_member", Method::Get, "/users/@me/guilds/{guild_id}/member")
        .tag(TAG)
        .summary("Get the current user's member object in a guild")
        .security(Security::OAuth2(&[OAuth2Scopes::GuildsMembersRead]))
        .responses(&[Response::ok(One("GuildMemberResponse"))]),
    Route::new("create_dm", Method::Post, "/users/@me/channels")
        .tag(TAG)
        .summary("Open a private channel with a user, or a group DM")
        .security(Security::BotOrOAuth2(&[OAuth2Scopes::GdmJoin]))
        .body(Body::json(One("CreatePrivateChannelRequest")))
        .responses(&[Response::ok(One("ChannelResponse"))]),
];
