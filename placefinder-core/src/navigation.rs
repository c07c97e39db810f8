//! Hand the pinned place over to an external navigation application.

use geo::Coord;

use crate::Place;

/// How the external application should route to the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TravelMode {
    /// Turn-by-turn driving directions.
    #[default]
    Driving,
    /// Walking directions.
    Walking,
}

/// Command sent to the navigation collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    /// Destination coordinate.
    pub destination: Coord<f64>,
    /// Destination name, shown by the external application when present.
    pub name: Option<String>,
    /// Requested routing mode.
    pub mode: TravelMode,
}

/// External navigation application.
///
/// Requests are fire-and-forget: implementations report their own failures
/// and return nothing to the caller.
pub trait Navigator {
    /// Start navigation for `request`.
    fn navigate(&mut self, request: NavigationRequest);
}

/// Launch external navigation for the selected place.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placefinder_core::{NavigationLauncher, Place, TravelMode};
/// use placefinder_core::test_support::RecordingNavigator;
///
/// let mut navigator = RecordingNavigator::default();
/// let launcher = NavigationLauncher::new();
///
/// assert!(!launcher.launch(None, &mut navigator));
/// let place = Place::new(Coord { x: 4.9, y: 52.37 });
/// assert!(launcher.launch(Some(&place), &mut navigator));
/// assert_eq!(navigator.requests()[0].mode, TravelMode::Driving);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationLauncher {
    mode: TravelMode,
}

impl NavigationLauncher {
    /// Create a launcher that requests driving directions.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: TravelMode::Driving,
        }
    }

    /// Request `mode` instead of driving.
    #[must_use]
    pub const fn with_mode(mut self, mode: TravelMode) -> Self {
        self.mode = mode;
        self
    }

    /// Mode used for every launch.
    #[must_use]
    pub const fn mode(&self) -> TravelMode {
        self.mode
    }

    /// Navigate to the `selected` place, or do nothing when there is none.
    ///
    /// Returns whether a request was sent to `navigator`.
    pub fn launch(&self, selected: Option<&Place>, navigator: &mut dyn Navigator) -> bool {
        let Some(place) = selected else {
            log::debug!("no place selected; skipping navigation");
            return false;
        };
        navigator.navigate(NavigationRequest {
            destination: place.location,
            name: place.name.clone(),
            mode: self.mode,
        });
        true
    }
}
