use super::*;

/// Tests that operation ids are unique across the catalogue.
///
/// Expected: every id inserted into the set exactly once
#[test]
fn operation_ids_are_unique() {
    let mut seen = HashSet::new();
    for route in all() {
        assert!(
            seen.insert(route.operation_id),
            "duplicate operation id {}",
            route.operation_id
        );
    }
}

/// Tests that no two routes share a method and path template.
///
/// Verifies the stricter property too: templates that differ only in parameter names would
/// match the same requests, so they are compared with parameters blanked out.
///
/// Expected: every (method, template shape) pair unique
#[test]
fn method_and_path_pairs_are_unique() {
    let mut seen = HashSet::new();
    for route in all() {
        let shape: Vec<&str> = route
            .path
            .split('/')
            .map(|segment| if segment.starts_with('{') { "{}" } else { segment })
            .collect();

        assert!(
            seen.insert((route.method, shape)),
            "ambiguous route {} {}",
            route.method,
            route.path
        );
    }
}

/// Tests that every schema a route refers to is registered.
///
/// Expected: each body and response schema name found in the registry
#[test]
fn referenced_schemas_are_registered() {
    for route in all() {
        for name in route.schema_names() {
            assert!(
                registry::contains(name),
                "{} refers to unregistered schema {}",
                route.operation_id,
                name
            );
        }
    }
}

/// Tests the descriptive fields of every route.
///
/// Expected: non-empty tag and summary, at least one response, templates rooted at `/`
#[test]
fn routes_are_fully_described() {
    for route in all() {
        assert!(!route.tag.is_empty(), "{} has no tag", route.operation_id);
        assert!(!route.summary.is_empty(), "{} has no summary", route.operation_id);
        assert!(!route.responses.is_empty(), "{} has no responses", route.operation_id);
        assert!(route.path.starts_with('/'), "{} path", route.operation_id);
    }
}

/// Tests that path parameter names fall into the two known kinds.
///
/// Expected: string parameters limited to tokens, codes and emoji names
#[test]
fn string_path_params_are_known() {
    let known = ["emoji_name", "webhook_token", "interaction_token", "code"];

    for route in all() {
        for param in route.path_params() {
            if param.kind == PathParamKind::String {
                assert!(
                    known.contains(&param.name),
                    "{} has unexpected parameter {}",
                    route.operation_id,
                    param.name
                );
            }
        }
    }
}

/// Tests that the catalogue covers every API area.
///
/// Expected: all areas present as tags, body-bearing DELETE routes absent
#[test]
fn covers_every_area() {
    let tags = tags();
    for tag in [
        "Channels",
        "Messages",
        "Threads",
        "Guilds",
        "Members",
        "Emojis",
        "Stickers",
        "Users",
        "Applications",
        "Commands",
        "Interactions",
        "Webhooks",
        "Invites",
        "Gateway",
        "OAuth2",
        "Voice",
    ] {
        assert!(tags.contains(&tag), "missing tag {tag}");
    }

    assert!(all()
        .iter()
        .filter(|route| route.method == Method::Get || route.method == Method::Delete)
        .all(|route| route.body.is_none()));
}

/// Tests lookup by operation id.
///
/// Expected: known id found with its template, unknown id absent
#[test]
fn finds_by_operation_id() {
    let route = find("create_message").unwrap();
    assert_eq!(route.method, Method::Post);
    assert_eq!(route.path, "/channels/{channel_id}/messages");

    assert!(find("create_messages").is_none());
}
