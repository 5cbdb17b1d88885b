//! The route catalogue.
//!
//! Each submodule declares the routes of one API area as a `const` slice; [`all`] joins them in
//! a fixed order. Lookups go through [`find`] (by operation id) and [`resolve`] (by method and
//! concrete path).

mod application;
mod channel;
mod command;
mod emoji;
mod gateway;
mod guild;
mod interaction;
mod invite;
mod member;
mod message;
mod oauth2;
mod sticker;
mod thread;
mod user;
mod voice;
mod webhook;

use std::sync::OnceLock;

use crate::route::{Method, ParamKind, PathCaptures, QueryParam, Route};

static ROUTES: OnceLock<Vec<&'static Route>> = OnceLock::new();

/// Every route in the catalogue.
pub fn all() -> &'static [&'static Route] {
    ROUTES.get_or_init(|| {
        [
            channel::ROUTES,
            message::ROUTES,
            thread::ROUTES,
            guild::ROUTES,
            member::ROUTES,
            emoji::ROUTES,
            sticker::ROUTES,
            user::ROUTES,
            application::ROUTES,
            command::ROUTES,
            interaction::ROUTES,
            webhook::ROUTES,
            invite::ROUTES,
            gateway::ROUTES,
            oauth2::ROUTES,
            voice::ROUTES,
        ]
        .into_iter()
        .flatten()
        .collect()
    })
}

pub fn find(operation_id: &str) -> Option<&'static Route> {
    all()
        .iter()
        .copied()
        .find(|route| route.operation_id == operation_id)
}

/// Finds the route serving `method` on a concrete `path`.
///
/// When several templates match, the one with the most literal segments is chosen, so
/// `/users/@me` resolves to the current-user route rather than `/users/{user_id}`.
pub fn resolve(method: Method, path: &str) -> Option<(&'static Route, PathCaptures)> {
    all()
        .iter()
        .filter_map(|route| route.matches(method, path).map(|captures| (*route, captures)))
        .max_by_key(|(route, _)| route.literal_segments())
}

/// Distinct tags in catalogue order.
pub fn tags() -> Vec<&'static str> {
    tags_of(all())
}

/// Distinct tags of `routes`, in the order they first appear.
pub fn tags_of(routes: &[&'static Route]) -> Vec<&'static str> {
    let mut tags = Vec::new();
    for route in routes {
        if !tags.contains(&route.tag) {
            tags.push(route.tag);
        }
    }
    tags
}

const fn limit(max: i64) -> QueryParam {
    QueryParam::optional("limit", ParamKind::IntRange { min: 1, max })
}

const fn snowflake(name: &'static str) -> QueryParam {
    QueryParam::optional(name, ParamKind::Snowflake)
}

const fn flag(name: &'static str) -> QueryParam {
    QueryParam::optional(name, ParamKind::Bool)
}

#[cfg(test)]
mod test;
