use crate::route::SchemaRef::One;
use crate::route::{Method, Response, Route};
use crate::security::Security;

pub const TAG: &str = "Gateway";

pub(super) const ROUTES: &[Route] = &[
    Route::new("get_gateway", Method::Get, "/gateway")
        .tag(TAG)
        .summary("Get the gateway websocket URL")
        .security(Security::None)
        .responses(&[Response::ok(One("GatewayResponse"))]),
    Route::new("get_bot_gateway", Method::Get, "/gateway/bot")
        .tag(TAG)
        .summary("Get the gateway URL with recommended shards and session start limits")
        .responses(&[Response::ok(One("GatewayBotResponse"))]),
];
