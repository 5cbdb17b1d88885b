use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::ApplicationResponse;
use crate::user::UserResponse;

str_enum! {
    pub enum OAuth2Scopes {
        Identify = "identify",
        Email = "email",
        Connections = "connections",
        Guilds = "guilds",
        GuildsJoin = "guilds.join",
        GuildsMembersRead = "guilds.members.read",
        GdmJoin = "gdm.join",
        Bot = "bot",
        Rpc = "rpc",
        RpcNotificationsRead = "rpc.notifications.read",
        RpcVoiceRead = "rpc.voice.read",
        RpcVoiceWrite = "rpc.voice.write",
        RpcVideoRead = "rpc.video.read",
        RpcVideoWrite = "rpc.video.write",
        RpcScreenshareRead = "rpc.screenshare.read",
        RpcScreenshareWrite = "rpc.screenshare.write",
        RpcActivitiesWrite = "rpc.activities.write",
        WebhookIncoming = "webhook.incoming",
        MessagesRead = "messages.read",
        ApplicationsBuildsUpload = "applications.builds.upload",
        ApplicationsBuildsRead = "applications.builds.read",
        ApplicationsCommands = "applications.commands",
        ApplicationsCommandsPermissionsUpdate = "applications.commands.permissions.update",
        ApplicationsCommandsUpdate = "applications.commands.update",
        ApplicationsStoreUpdate = "applications.store.update",
        ApplicationsEntitlements = "applications.entitlements",
        ActivitiesRead = "activities.read",
        ActivitiesWrite = "activities.write",
        ActivitiesInvitesWrite = "activities.invites.write",
        RelationshipsRead = "relationships.read",
        Voice = "voice",
        DmChannelsRead = "dm_channels.read",
        RoleConnectionsWrite = "role_connections.write",
        Openid = "openid",
        PresencesRead = "presences.read",
        PresencesWrite = "presences.write",
        AccountGlobalNameUpdate = "account.global_name.update",
        PaymentSourcesCountryCode = "payment_sources.country_code",
    }
}

impl OAuth2Scopes {
    /// Human readable summary shown in the security scheme.
    pub fn description(self) -> &'static str {
        match self {
            Self::Identify => "Read the user's account, without email",
            Self::Email => "Read the user's email address",
            Self::Connections => "Read the user's linked third-party accounts",
            Self::Guilds => "List the user's guilds",
            Self::GuildsJoin => "Join users to a guild",
            Self::GuildsMembersRead => "Read the user's member data in their guilds",
            Self::GdmJoin => "Join users to a group DM",
            Self::Bot => "Add a bot to a guild",
            Self::Rpc => "Control the user's local Discord client",
            Self::RpcNotificationsRead => "Receive notifications pushed to the user over RPC",
            Self::RpcVoiceRead => "Read the user's voice settings over RPC",
            Self::RpcVoiceWrite => "Update the user's voice settings over RPC",
            Self::RpcVideoRead => "Read the user's video status over RPC",
            Self::RpcVideoWrite => "Update the user's video settings over RPC",
            Self::RpcScreenshareRead => "Read the user's screenshare status over RPC",
            Self::RpcScreenshareWrite => "Update the user's screenshare settings over RPC",
            Self::RpcActivitiesWrite => "Update the user's activity over RPC",
            Self::WebhookIncoming => "Create a webhook returned in the token exchange",
            Self::MessagesRead => "Read messages from the user's channels over RPC",
            Self::ApplicationsBuildsUpload => "Upload builds for the user's applications",
            Self::ApplicationsBuildsRead => "Read build data for the user's applications",
            Self::ApplicationsCommands => "Use slash commands in a guild",
            Self::ApplicationsCommandsPermissionsUpdate => "Update command permissions",
            Self::ApplicationsCommandsUpdate => "Update the application's commands",
            Self::ApplicationsStoreUpdate => "Manage the application's store listings",
            Self::ApplicationsEntitlements => "Read the user's entitlements for the application",
            Self::ActivitiesRead => "Read the user's activities",
            Self::ActivitiesWrite => "Update the user's activity",
            Self::ActivitiesInvitesWrite => "Send activity invites",
            Self::RelationshipsRead => "Read the user's friends list",
            Self::Voice => "Connect to voice on the user's behalf",
            Self::DmChannelsRead => "Read the user's DM channels",
            Self::RoleConnectionsWrite => "Update the user's role connection metadata",
            Self::Openid => "Issue an OpenID Connect id token",
            Self::PresencesRead => "Read the user's presence",
            Self::PresencesWrite => "Update the user's presence",
            Self::AccountGlobalNameUpdate => "Update the user's display name",
            Self::PaymentSourcesCountryCode => "Read the country of the user's payment source",
        }
    }
}

/// Details of the bearer token used for the request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct OAuth2GetAuthorizationResponse {
    pub application: ApplicationResponse,
    pub expires: DateTime<Utc>,
    pub scopes: Vec<OAuth2Scopes>,
    /// Present when the `identify` scope was granted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Tests scope literal parsing.
    ///
    /// Expected: dotted scope names accepted, unknown ones rejected
    #[test]
    fn scopes_are_literal() {
        let scope: OAuth2Scopes = serde_json::from_value(json!("guilds.members.read")).unwrap();
        assert_eq!(scope, OAuth2Scopes::GuildsMembersRead);
        assert!(serde_json::from_value::<OAuth2Scopes>(json!("guilds.members.write")).is_err());
    }

    /// Tests that every scope has a distinct wire name.
    ///
    /// Expected: no two scopes share a name
    #[test]
    fn scope_names_are_unique() {
        let mut names: Vec<_> = OAuth2Scopes::ALL.iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), OAuth2Scopes::ALL.len());
    }
}
