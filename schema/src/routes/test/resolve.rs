use super::*;

/// Tests that `@me` beats a snowflake parameter.
///
/// Expected: `/users/@me` resolves to the current user, `/users/1` to the user lookup
#[test]
fn literal_segment_wins() {
    let (route, captures) = resolve(Method::Get, "/users/@me").unwrap();
    assert_eq!(route.operation_id, "get_my_user");
    assert!(captures.is_empty());

    let (route, captures) = resolve(Method::Get, "/users/80351110224678912").unwrap();
    assert_eq!(route.operation_id, "get_user");
    assert_eq!(captures["user_id"], "80351110224678912");
}

/// Tests reaction routes sharing a prefix.
///
/// Expected: `@me` picks the own-reaction route, an id picks the other-user route
#[test]
fn resolves_reaction_routes() {
    let path = "/channels/1/messages/2/reactions/%F0%9F%94%A5";

    let (route, _) = resolve(Method::Delete, &format!("{path}/@me")).unwrap();
    assert_eq!(route.operation_id, "delete_my_message_reaction");

    let (route, captures) = resolve(Method::Delete, &format!("{path}/3")).unwrap();
    assert_eq!(route.operation_id, "delete_user_message_reaction");
    assert_eq!(captures["user_id"], "3");

    let (route, _) = resolve(Method::Get, path).unwrap();
    assert_eq!(route.operation_id, "list_message_reactions_by_emoji");
}

/// Tests webhook message routes.
///
/// Expected: `@original` and a message id resolve to different operations
#[test]
fn resolves_original_webhook_message() {
    let (route, captures) =
        resolve(Method::Patch, "/webhooks/1/tok3n/messages/@original").unwrap();
    assert_eq!(route.operation_id, "update_original_webhook_message");
    assert_eq!(captures["webhook_token"], "tok3n");

    let (route, _) = resolve(Method::Patch, "/webhooks/1/tok3n/messages/5").unwrap();
    assert_eq!(route.operation_id, "update_webhook_message");
}

/// Tests member search against the member lookup.
///
/// Expected: `search` resolves to the search route
#[test]
fn resolves_member_search() {
    let (route, _) = resolve(Method::Get, "/guilds/1/members/search").unwrap();
    assert_eq!(route.operation_id, "search_guild_members");
}

/// Tests paths and methods outside the catalogue.
///
/// Expected: None
#[test]
fn unknown_routes_do_not_resolve() {
    assert!(resolve(Method::Get, "/channels").is_none());
    assert!(resolve(Method::Put, "/channels/1/messages").is_none());
    assert!(resolve(Method::Get, "/nope/1").is_none());
}
