use crate::oauth2::OAuth2Scopes;
use crate::route::SchemaRef::{List, One};
use crate::route::{Body, Method, Response, Route};
use crate::security::Security;

use super::flag;

pub const TAG: &str = "Commands";

const COMMANDS: Security = Security::BotOrOAuth2(&[OAuth2Scopes::ApplicationsCommandsUpdate]);

const CREATED: &[Response] = &[
    Response::ok(One("ApplicationCommandResponse")),
    Response::created(One("ApplicationCommandResponse")),
];

pub(super) const ROUTES: &[Route] = &[
    Route::new(
        "list_application_commands",
        Method::Get,
        "/applications/{application_id}/commands",
    )
    .tag(TAG)
    .summary("List global commands")
    .security(COMMANDS)
    .query(&[flag("with_localizations")])
    .responses(&[Response::ok(List("ApplicationCommandResponse"))]),
    Route::new(
        "create_application_command",
        Method::Post,
        "/applications/{application_id}/commands",
    )
    .tag(TAG)
    .summary("Create or overwrite a global command with the same name")
    .security(COMMANDS)
    .body(Body::json(One("ApplicationCommandCreateRequest")))
    .responses(CREATED),
    Route::new(
        "bulk_set_application_commands",
        Method::Put,
        "/applications/{application_id}/commands",
    )
    .tag(TAG)
    .summary("Replace every global command")
    .security(COMMANDS)
    .body(Body::json(List("ApplicationCommandUpdateRequest")))
    .responses(&[Response::ok(List("ApplicationCommandResponse"))]),
    Route::new(
        "get_application_command",
        Method::Get,
        "/applications/{application_id}/commands/{command_id}",
    )
    .tag(TAG)
    .summary("Get a global command")
    .security(COMMANDS)
    .responses(&[Response::ok(One("ApplicationCommandResponse"))]),
    Route::new(
        "update_application_command",
        Method::Patch,
        "/applications/{application_id}/commands/{command_id}",
    )
    .tag(TAG)
    .summary("Update a global command")
    .security(COMMANDS)
    .body(Body::json(One("ApplicationCommandPatchRequest")))
    .responses(&[Response::ok(One("ApplicationCommandResponse"))]),
    Route::new(
        "delete_application_command",
        Method::Delete,
        "/applications/{application_id}/commands/{command_id}",
    )
    .tag(TAG)
    .summary("Delete a global command")
    .security(COMMANDS),
    Route::new(
        "list_guild_application_commands",
        Method::Get,
        "/applications/{application_id}/guilds/{guild_id}/commands",
    )
    .tag(TAG)
    .summary("List commands registered in one guild")
    .security(COMMANDS)
    .query(&[flag("with_localizations")])
    .responses(&[Response::ok(List("ApplicationCommandResponse"))]),
    Route::new(
        "create_guild_application_command",
        Method::Post,
        "/applications/{application_id}/guilds/{guild_id}/commands",
    )
    .tag(TAG)
    .summary("Create or overwrite a guild command with the same name")
    .security(COMMANDS)
    .body(Body::json(One("ApplicationCommandCreateRequest")))
    .responses(CREATED),
    Route::new(
        "bulk_set_guild_application_commands",
        Method::Put,
        "/applications/{application_id}/guilds/{guild_id}/commands",
    )
    .tag(TAG)
    .summary("Replace every command registered in one guild")
    .security(COMMANDS)
    .body(Body::json(List("ApplicationCommandUpdateRequest")))
    .responses(&[Response::ok(List("ApplicationCommandResponse"))]),
    Route::new(
        "get_guild_application_command",
        Method::Get,
        "/applications/{application_id}/guilds/{guild_id}/commands/{command_id}",
    )
    .tag(TAG)
    .summary("Get a guild command")
    .security(COMMANDS)
    .responses(&[Response::ok(One("ApplicationCommandResponse"))]),
    Route::new(
        "update_guild_application_command",
        Method::Patch,
        "/applications/{application_id}/guilds/{guild_id}/commands/{command_id}",
    )
    .tag(TAG)
    .summary("Update a guild command")
    .security(COMMANDS)
    .body(Body::json(One("ApplicationCommandPatchRequest")))
    .responses(&[Response::ok(One("ApplicationCommandResponse"))]),
    Route::new(
        "delete_guild_application_command",
        Method::Delete,
        "/applications/{application_id}/guilds/{guild_id}/commands/{command_id}",
    )
    .tag(TAG)
    .summary("Delete a guild command")
    .security(COMMANDS),
];
