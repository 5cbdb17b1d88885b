//! Authentication schemes accepted by the API and per-route requirements.

use utoipa::openapi::security::{
    ApiKey, ApiKeyValue, AuthorizationCode, Flow, OAuth2, Scopes, SecurityRequirement,
    SecurityScheme,
};

use crate::oauth2::OAuth2Scopes;

pub const BOT_TOKEN: &str = "BotToken";
pub const OAUTH2: &str = "OAuth2";

pub const AUTHORIZATION_URL: &str = "https://discord.com/oauth2/authorize";
pub const TOKEN_URL: &str = "https://discord.com/api/oauth2/token";

/// Who may call a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Security {
    /// Unauthenticated; webhook and interaction token routes authenticate through the path.
    None,
    Bot,
    /// A bearer token holding every listed scope.
    OAuth2(&'static [OAuth2Scopes]),
    /// Either a bot token or a bearer token holding the listed scopes.
    BotOrOAuth2(&'static [OAuth2Scopes]),
}

impl Security {
    /// Alternatives as rendered into an operation's `security` list.
    pub fn requirements(self) -> Vec<SecurityRequirement> {
        let bot = || SecurityRequirement::new(BOT_TOKEN, Vec::<String>::new());
        let oauth2 = |scopes: &[OAuth2Scopes]| {
            SecurityRequirement::new(OAUTH2, scopes.iter().map(|scope| scope.as_str()))
        };

        match self {
            Self::None => Vec::new(),
            Self::Bot => vec![bot()],
            Self::OAuth2(scopes) => vec![oauth2(scopes)],
            Self::BotOrOAuth2(scopes) => vec![bot(), oauth2(scopes)],
        }
    }

    /// Names of the schemes this requirement refers to.
    pub fn scheme_names(self) -> &'static [&'static str] {
        match self {
            Self::None => &[],
            Self::Bot => &[BOT_TOKEN],
            Self::OAuth2(_) => &[OAUTH2],
            Self::BotOrOAuth2(_) => &[BOT_TOKEN, OAUTH2],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bot => "bot",
            Self::OAuth2(_) => "oauth2",
            Self::BotOrOAuth2(_) => "bot_or_oauth2",
        }
    }

    pub fn scopes(self) -> &'static [OAuth2Scopes] {
        match self {
            Self::OAuth2(scopes) | Self::BotOrOAuth2(scopes) => scopes,
            Self::None | Self::Bot => &[],
        }
    }
}

/// `Authorization: Bot <token>` header scheme.
pub fn bot_token_scheme() -> SecurityScheme {
    SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
        "Authorization",
        "Bot token, sent as `Authorization: Bot <token>`",
    )))
}

/// OAuth2 authorization-code flow covering every known scope.
pub fn oauth2_scheme() -> SecurityScheme {
    let scopes = Scopes::from_iter(
        OAuth2Scopes::ALL
            .iter()
            .map(|scope| (scope.as_str(), scope.description())),
    );

    let flow = AuthorizationCode::new(AUTHORIZATION_URL, TOKEN_URL, scopes);

    SecurityScheme::OAuth2(OAuth2::with_description(
        [Flow::AuthorizationCode(flow)],
        "OAuth2 bearer token, sent as `Authorization: Bearer <token>`",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that mixed security renders one requirement per alternative.
    ///
    /// Expected: two requirements for bot-or-OAuth2, none for unauthenticated routes
    #[test]
    fn renders_alternatives() {
        static SCOPES: &[OAuth2Scopes] = &[OAuth2Scopes::Identify];

        assert_eq!(Security::BotOrOAuth2(SCOPES).requirements().len(), 2);
        assert_eq!(Security::Bot.requirements().len(), 1);
        assert!(Security::None.requirements().is_empty());
        assert_eq!(Security::BotOrOAuth2(SCOPES).scopes(), SCOPES);
    }
}
