use crate::route::SchemaRef::One;
use crate::route::{Body, Method, Response, Route};

pub const TAG: &str = "Applications";

pub(super) const ROUTES: &[Route] = &[
    Route::new("get_my_application", Method::Get, "/applications/@me")
        .tag(TAG)
        .summary("Get the application owning the bot token")
        .responses(&[Response::ok(One("PrivateApplicationResponse"))]),
    Route::new("update_my_application", Method::Patch, "/applications/@me")
        .tag(TAG)
        .summary("Update the application owning the bot token")
        .body(Body::json(One("UpdateApplicationRequest")))
        .responses(&[Response::ok(One("PrivateApplicationResponse"))]),
    Route::new("get_application", Method::Get, "/applications/{application_id}")
        .tag(TAG)
        .summary("Get an application by id")
        .responses(&[Response::ok(One("PrivateApplicationResponse"))]),
    Route::new("update_application", Method::Patch, "/applications/{application_id}")
        .tag(TAG)
        .summary("Update an application by id")
        .body(Body::json(One("UpdateApplicationRequest")))
        .responses(&[Response::ok(One("PrivateApplicationResponse"))]),
];
