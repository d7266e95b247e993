//! Route models: the requests each screen can make, and the router state they drive.

use route_setup::screen_ids;

/// Screens known to the router.
#[screen_ids]
pub enum ScreenId {
    A,
    B,
    C,
    D,
    Z,
}

/// Child screen requested by screen A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewARoute {
    B,
    C,
    Z,
}

/// Child screen requested by screen B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewBRoute {
    D { index: usize },
}

impl ViewBRoute {
    pub fn is_d(&self) -> bool {
        matches!(self, ViewBRoute::D { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCRoute {
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDRoute {
    Root,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewZRoute {
    Done,
}

/// Routing state owned by the router. Empty fields mean no child is active.
///
/// `view_b` is only ever set while `view_a` is `Some(ViewARoute::B)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteState {
    pub view_a: Option<ViewARoute>,
    pub view_b: Option<ViewBRoute>,
}

impl RouteState {
    pub fn is_idle(&self) -> bool {
        self.view_a.is_none() && self.view_b.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_nexus::ScreenKey;

    #[test]
    fn test_screen_id_strings() {
        let names: Vec<_> = ScreenId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "Z"]);
        assert_eq!(ScreenId::D.to_string(), "D");
        assert_eq!(<ScreenId as ScreenKey>::all().len(), 5);
    }

    #[test]
    fn test_screen_id_parse_is_exact() {
        assert_eq!("Z".parse::<ScreenId>(), Ok(ScreenId::Z));
        let err = "z".parse::<ScreenId>().unwrap_err();
        assert!(err.contains("Unknown screen: 'z'"));
        assert!(err.contains("A, B, C, D, Z"));
        assert!("Q".parse::<ScreenId>().is_err());
    }

    #[test]
    fn test_route_state_starts_idle() {
        let state = RouteState::default();
        assert!(state.is_idle());
        assert!(ViewBRoute::D { index: 0 }.is_d());
    }
}
