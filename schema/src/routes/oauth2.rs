use crate::route::SchemaRef::One;
use crate::route::{Method, Response, Route};
use crate::security::Security;

pub const TAG: &str = "OAuth2";

pub(super) const ROUTES: &[Route] = &[
    Route::new("get_my_oauth2_authorization", Method::Get, "/oauth2/@me")
        .tag(TAG)
        .summary("Describe the bearer token's authorization")
        .security(Security::OAuth2(&[]))
        .responses(&[Response::ok(One("OAuth2GetAuthorizationResponse"))]),
    Route::new("get_my_oauth2_application", Method::Get, "/oauth2/applications/@me")
        .tag(TAG)
        .summary("Get the application owning the bot token")
        .responses(&[Response::ok(One("PrivateApplicationResponse"))]),
];
