use crate::entity::DashboardError;

const ADDRESS_SEGMENT: &str = "address";

/// Page selected by a route string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Address(String),
}

/// Resolves a route string to a page.
///
/// `/` and the empty string select the home page. `/address/<addr>`,
/// `/<addr>` and `<addr>` select the address page; the address is taken as-is.
pub fn parse_route(route: &str) -> Result<Route, DashboardError> {
    let segments: Vec<&str> = route
        .trim()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect();

    match segments.as_slice() {
        [] => Ok(Route::Home),
        [ADDRESS_SEGMENT] => Err(DashboardError::InvalidRoute(route.to_string())),
        [ADDRESS_SEGMENT, address] | [address] => Ok(Route::Address(address.to_string())),
        _ => Err(DashboardError::InvalidRoute(route.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: &str = "0x55d398326f99059ff775485246999027b3197955";

    #[test]
    fn root_is_home() {
        assert_eq!(parse_route("/").unwrap(), Route::Home);
        assert_eq!(parse_route("").unwrap(), Route::Home);
    }

    #[test]
    fn address_forms() {
        let expected = Route::Address(PLAYER.to_string());
        assert_eq!(parse_route(&format!("/address/{}", PLAYER)).unwrap(), expected);
        assert_eq!(parse_route(&format!("/{}", PLAYER)).unwrap(), expected);
        assert_eq!(parse_route(PLAYER).unwrap(), expected);
        assert_eq!(
            parse_route("not-an-address").unwrap(),
            Route::Address("not-an-address".to_string())
        );
    }

    #[test]
    fn extra_segments_are_rejected() {
        assert!(matches!(
            parse_route("/address/a/b"),
            Err(DashboardError::InvalidRoute(_))
        ));
        assert!(matches!(
            parse_route("/a/b"),
            Err(DashboardError::InvalidRoute(_))
        ));
        assert!(matches!(
            parse_route("/address"),
            Err(DashboardError::InvalidRoute(_))
        ));
    }
}
