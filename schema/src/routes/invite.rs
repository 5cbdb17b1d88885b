use crate::route::SchemaRef::One;
use crate::route::{Method, Response, Route};
use crate::security::Security;

use super::{flag, snowflake};

pub const TAG: &str = "Invites";

pub(super) const ROUTES: &[Route] = &[
    Route::new("get_invite", Method::Get, "/invites/{code}")
        .tag(TAG)
        .summary("Resolve an invite code")
        .security(Security::None)
        .query(&[
            flag("with_counts"),
            flag("with_expiration"),
            snowflake("guild_scheduled_event_id"),
        ])
        .responses(&[Response::ok(One("InviteResponse"))]),
    Route::new("revoke_invite", Method::Delete, "/invites/{code}")
        .tag(TAG)
        .summary("Delete an invite")
        .responses(&[Response::ok(One("InviteResponse"))]),
];
