use crate::route::SchemaRef::{List, One};
use crate::route::{Body, Method, Response, Route};

pub const TAG: &str = "Emojis";

pub(super) const ROUTES: &[Route] = &[
    Route::new("list_guild_emojis", Method::Get, "/guilds/{guild_id}/emojis")
        .tag(TAG)
        .summary("List custom emojis of a guild")
        .responses(&[Response::ok(List("EmojiResponse"))]),
    Route::new("create_guild_emoji", Method::Post, "/guilds/{guild_id}/emojis")
        .tag(TAG)
        .summary("Upload a custom emoji")
        .body(Body::json(One("CreateGuildEmojiRequest")))
        .responses(&[Response::created(One("EmojiResponse"))]),
    Route::new("get_guild_emoji", Method::Get, "/guilds/{guild_id}/emojis/{emoji_id}")
        .tag(TAG)
        .summary("Get a custom emoji")
        .responses(&[Response::ok(One("EmojiResponse"))]),
    Route::new("update_guild_emoji", Method::Patch, "/guilds/{guild_id}/emojis/{emoji_id}")
        .tag(TAG)
        .summary("Rename a custom emoji or change its roles")
        .body(Body::json(One("UpdateGuildEmojiRequest")))
        .responses(&[Response::ok(One("EmojiResponse"))]),
    Route::new("delete_guild_emoji", Method::Delete, "/guilds/{guild_id}/emojis/{emoji_id}")
        .tag(TAG)
        .summary("Delete a custom emoji"),
];
