//! Sidebar state for transit directions.

use log::warn;

use super::{DirectionsError, DirectionsProvider, DirectionsRequest, RouteStep, TransitRoute};

/// The directions sidebar.
///
/// Only a successful, non-empty route makes the panel available. Any
/// failure collapses to [`DirectionsPanel::Unavailable`], which exposes no
/// steps and cannot be shown.
///
/// # Examples
/// ```
/// use porto_core::{DirectionsError, DirectionsPanel, RouteStep, TransitRoute};
///
/// let route = TransitRoute::new(vec![RouteStep::new("Take the metro", "30 mins")]);
/// let mut panel = DirectionsPanel::from_outcome(Ok(route));
/// assert!(panel.show());
/// assert_eq!(panel.steps().len(), 1);
///
/// let mut failed = DirectionsPanel::from_outcome(Err(DirectionsError::NoRoute));
/// assert!(!failed.show());
/// assert!(failed.steps().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DirectionsPanel {
    /// No route could be obtained.
    #[default]
    Unavailable,
    /// A route is ready; `visible` tracks the sidebar toggle.
    Available { route: TransitRoute, visible: bool },
}

impl DirectionsPanel {
    /// Build the panel from a provider outcome. The sidebar starts hidden.
    pub fn from_outcome(outcome: Result<TransitRoute, DirectionsError>) -> Self {
        match outcome {
            Ok(route) if route.is_empty() => {
                warn!("directions route has no steps; directions unavailable");
                Self::Unavailable
            }
            Ok(route) => Self::Available {
                route,
                visible: false,
            },
            Err(err) => {
                warn!("directions unavailable: {err}");
                Self::Unavailable
            }
        }
    }

    /// Issue a single request through `provider` and build the panel.
    pub fn request<P>(provider: &P, request: &DirectionsRequest) -> Self
    where
        P: DirectionsProvider + ?Sized,
    {
        Self::from_outcome(provider.route(request))
    }

    /// Steps of the route, empty when unavailable.
    pub fn steps(&self) -> &[RouteStep] {
        match self {
            Self::Unavailable => &[],
            Self::Available { route, .. } => &route.steps,
        }
    }

    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available { .. })
    }

    /// Open the sidebar. Returns `false` when there is nothing to show.
    pub fn show(&mut self) -> bool {
        match self {
            Self::Unavailable => false,
            Self::Available { visible, .. } => {
                *visible = true;
                true
            }
        }
    }

    pub fn hide(&mut self) {
        if let Self::Available { visible, .. } = self {
            *visible = false;
        }
    }

    /// Flip the sidebar between shown and hidden, returning the new state.
    pub fn toggle(&mut self) -> bool {
        if self.is_visible() {
            self.hide();
            false
        } else {
            self.show()
        }
    }

    pub const fn is_visible(&self) -> bool {
        matches!(self, Self::Available { visible: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::{fixture, rstest};

    struct FixedProvider(Result<TransitRoute, DirectionsError>);

    impl DirectionsProvider for FixedProvider {
        fn route(&self, _request: &DirectionsRequest) -> Result<TransitRoute, DirectionsError> {
            self.0.clone()
        }
    }

    #[fixture]
    fn request() -> DirectionsRequest {
        DirectionsRequest::transit(Coord { x: -8.6703, y: 41.2369 }, Coord { x: -8.6090, y: 41.1492 })
    }

    #[rstest]
    fn successful_route_starts_hidden(request: DirectionsRequest) {
        let provider = FixedProvider(Ok(TransitRoute::new(vec![RouteStep::new("Metro", "30 mins")])));
        let panel = DirectionsPanel::request(&provider, &request);
        assert!(panel.is_available());
        assert!(!panel.is_visible());
    }

    #[rstest]
    #[case::service(DirectionsError::ServiceError { status: "ZERO_RESULTS".into(), message: String::new() })]
    #[case::no_route(DirectionsError::NoRoute)]
    #[case::timeout(DirectionsError::Timeout { url: "https://example.test".into(), timeout_secs: 30 })]
    fn failures_leave_nothing_to_show(request: DirectionsRequest, #[case] error: DirectionsError) {
        let mut panel = DirectionsPanel::request(&FixedProvider(Err(error)), &request);
        assert_eq!(panel, DirectionsPanel::Unavailable);
        assert!(!panel.toggle());
        assert!(panel.steps().is_empty());
    }

    #[rstest]
    fn empty_route_is_unavailable() {
        assert_eq!(
            DirectionsPanel::from_outcome(Ok(TransitRoute::default())),
            DirectionsPanel::Unavailable
        );
    }

    #[rstest]
    fn toggle_flips_visibility() {
        let mut panel =
            DirectionsPanel::from_outcome(Ok(TransitRoute::new(vec![RouteStep::new("Walk", "5 mins")])));
        assert!(panel.toggle());
        assert!(panel.is_visible());
        assert!(!panel.toggle());
        assert!(!panel.is_visible());
    }
}
