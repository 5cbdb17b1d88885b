use schema::route::Route;

use crate::server::error::AppError;

pub struct RouteService<'a> {
    routes: &'a [&'static Route],
}

impl<'a> RouteService<'a> {
    /// Creates a new RouteService over the given catalogue.
    ///
    /// # Arguments
    /// - `routes` - Routes to serve, normally `schema::routes::all()`
    pub fn new(routes: &'a [&'static Route]) -> Self {
        Self { routes }
    }

    /// Lists routes in catalogue order, optionally restricted to one tag.
    ///
    /// Tags compare case-insensitively, so `channels` selects the `Channels` area.
    pub fn list(&self, tag: Option<&str>) -> Vec<&'static Route> {
        self.routes
            .iter()
            .copied()
            .filter(|route| tag.is_none_or(|tag| route.tag.eq_ignore_ascii_case(tag)))
            .collect()
    }

    /// Gets a route by its operation id.
    ///
    /// # Returns
    /// - `Ok(&Route)` - Route found
    /// - `Err(AppError::NotFound)` - No route has this operation id
    pub fn get(&self, operation_id: &str) -> Result<&'static Route, AppError> {
        self.routes
            .iter()
            .copied()
            .find(|route| route.operation_id == operation_id)
            .ok_or_else(|| AppError::NotFound(format!("Unknown operation '{}'", operation_id)))
    }
}

#[cfg(test)]
mod tests {
    use schema::routes;

    use super::*;

    /// Tests listing without a filter.
    ///
    /// Expected: the whole catalogue in order
    #[test]
    fn lists_all_routes() {
        let service = RouteService::new(routes::all());

        let listed = service.list(None);

        assert_eq!(listed.len(), routes::all().len());
        assert_eq!(listed[0].operation_id, routes::all()[0].operation_id);
    }

    /// Tests the tag filter.
    ///
    /// Expected: only Webhooks routes, matched case-insensitively
    #[test]
    fn filters_by_tag() {
        let service = RouteService::new(routes::all());

        let listed = service.list(Some("webhooks"));

        assert!(!listed.is_empty());
        assert!(listed.iter().all(|route| route.tag == "Webhooks"));
        assert!(service.list(Some("Nope")).is_empty());
    }

    /// Tests lookup by operation id.
    ///
    /// Expected: Ok for known ids, Err(AppError::NotFound) otherwise
    #[test]
    fn gets_by_operation_id() {
        let service = RouteService::new(routes::all());

        assert_eq!(service.get("get_gateway").unwrap().path, "/gateway");
        assert!(matches!(
            service.get("get_everything"),
            Err(AppError::NotFound(_))
        ));
    }
}
