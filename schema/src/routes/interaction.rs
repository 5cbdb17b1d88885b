use crate::route::SchemaRef::One;
use crate::route::{Body, Method, Route};
use crate::security::Security;

pub const TAG: &str = "Interactions";

pub(super) const ROUTES: &[Route] = &[Route::new(
    "create_interaction_response",
    Method::Post,
    "/interactions/{interaction_id}/{interaction_token}/callback",
)
.tag(TAG)
.summary("Respond to an interaction")
.security(Security::None)
.body(Body::any(One("InteractionCallbackRequest")))];
