use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GatewayResponse {
    /// WSS URL to connect to.
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GatewayBotSessionStartLimitResponse {
    pub total: i32,
    pub remaining: i32,
    /// Milliseconds until the limit resets.
    pub reset_after: i64,
    pub max_concurrency: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct GatewayBotResponse {
    pub url: String,
    /// Recommended number of shards.
    pub shards: i32,
    pub session_start_limit: GatewayBotSessionStartLimitResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests that the bot gateway body requires its session start limit.
    ///
    /// Expected: Ok when present, Err when missing
    #[test]
    fn bot_gateway_requires_session_limit() {
        let mut value = json!({
            "url": "wss://gateway.discord.gg",
            "shards": 9,
            "session_start_limit": {
                "total": 1000,
                "remaining": 999,
                "reset_after": 14400000,
                "max_concurrency": 1
            }
        });
        assert!(serde_json::from_value::<GatewayBotResponse>(value.clone()).is_ok());

        value.as_object_mut().unwrap().remove("session_start_limit");
        assert!(serde_json::from_value::<GatewayBotResponse>(value).is_err());
    }
}
