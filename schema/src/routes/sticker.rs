use crate::route::SchemaRef::{List, One};
use crate::route::{Body, Method, Response, Route};

pub const TAG: &str = "Stickers";

pub(super) const ROUTES: &[Route] = &[
    Route::new("get_sticker", Method::Get, "/stickers/{sticker_id}")
        .tag(TAG)
        .summary("Get a standard or guild sticker")
        .responses(&[Response::ok(One("StickerResponse"))]),
    Route::new("list_sticker_packs", Method::Get, "/sticker-packs")
        .tag(TAG)
        .summary("List the standard sticker packs")
        .responses(&[Response::ok(One("StickerPackCollectionResponse"))]),
    Route::new("get_sticker_pack", Method::Get, "/sticker-packs/{pack_id}")
        .tag(TAG)
        .summary("Get a standard sticker pack")
        .responses(&[Response::ok(One("StickerPackResponse"))]),
    Route::new("list_guild_stickers", Method::Get, "/guilds/{guild_id}/stickers")
        .tag(TAG)
        .summary("List stickers of a guild")
        .responses(&[Response::ok(List("GuildStickerResponse"))]),
    Route::new("create_guild_sticker", Method::Post, "/guilds/{guild_id}/stickers")
        .tag(TAG)
        .summary("Upload a guild sticker")
        .body(Body::multipart(One("CreateGuildStickerRequest")))
        .responses(&[Response::created(One("GuildStickerResponse"))]),
    Route::new("get_guild_sticker", Method::Get, "/guilds/{guild_id}/stickers/{sticker_id}")
        .tag(TAG)
        .summary("Get a guild sticker")
        .responses(&[Response::ok(One("GuildStickerResponse"))]),
    Route::new(
        "update_guild_sticker",
        Method::Patch,
        "/guilds/{guild_id}/stickers/{sticker_id}",
    )
    .tag(TAG)
    .summary("Update a guild sticker's name, description or tags")
    .body(Body::json(One("UpdateGuildStickerRequest")))
    .responses(&[Response::ok(One("GuildStickerResponse"))]),
    Route::new(
        "delete_guild_sticker",
        Method::Delete,
        "/guilds/{guild_id}/stickers/{sticker_id}",
    )
    .tag(TAG)
    .summary("Delete a guild sticker"),
];
