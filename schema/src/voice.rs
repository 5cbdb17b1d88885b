use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct VoiceRegionResponse {
    pub id: String,
    pub name: String,
    /// Closest region to the requesting client.
    pub optimal: bool,
    pub deprecated: bool,
    pub custom: bool,
}
