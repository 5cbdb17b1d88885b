use crate::route::SchemaRef::List;
use crate::route::{Method, Response, Route};
use crate::security::Security;

pub const TAG: &str = "Voice";

pub(super) const ROUTES: &[Route] = &[Route::new("list_voice_regions", Method::Get, "/voice/regions")
    .tag(TAG)
    .summary("List voice regions")
    .security(Security::None)
    .responses(&[Response::ok(List("VoiceRegionResponse"))])];
