//! Current-location handling at the location-services boundary.
//!
//! The location collaborator pushes [`LocationEvent`]s and accepts one-shot
//! location requests. [`LocationTracker`] recentres the map when a requested
//! fix arrives, re-requests once when when-in-use access is granted, and only
//! logs failures.

use geo::Coord;
use thiserror::Error;

use crate::{MapDisplay, Viewport};

/// Authorization state reported by the location collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthorizationStatus {
    /// The user has not answered the permission prompt yet.
    NotDetermined,
    /// Access is blocked by policy.
    Restricted,
    /// The user refused access.
    Denied,
    /// Access granted at all times.
    AuthorizedAlways,
    /// Access granted while the application is in use.
    AuthorizedWhenInUse,
}

/// Failure reported by the location collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// The user or system denied access to location data.
    #[error("location access denied")]
    Denied,
    /// No fix could be obtained.
    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// Event pushed by the location collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationEvent {
    /// New fixes, most relevant first.
    Updated(Vec<Coord<f64>>),
    /// A location request failed.
    Failed(LocationError),
    /// Authorization state changed.
    AuthorizationChanged(AuthorizationStatus),
}

/// Location-services collaborator.
pub trait LocationServices {
    /// Ask the user for when-in-use access.
    fn request_when_in_use_authorization(&mut self);
    /// Request a single current-location fix.
    fn request_location(&mut self);
}

/// React to location events on behalf of the map.
#[derive(Debug, Default)]
pub struct LocationTracker {
    awaiting_fix: bool,
    last_fix: Option<Coord<f64>>,
}

impl LocationTracker {
    /// Create a tracker with no outstanding request.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            awaiting_fix: false,
            last_fix: None,
        }
    }

    /// Most recent fix received, if any.
    #[must_use]
    pub const fn last_fix(&self) -> Option<Coord<f64>> {
        self.last_fix
    }

    /// Whether a location request is outstanding.
    #[must_use]
    pub const fn awaiting_fix(&self) -> bool {
        self.awaiting_fix
    }

    /// Ask for access and request the first fix.
    pub fn start(&mut self, services: &mut dyn LocationServices) {
        services.request_when_in_use_authorization();
        self.request(services);
    }

    /// Handle one location event.
    ///
    /// Returns the viewport the map was recentred on, if any.
    pub fn handle(
        &mut self,
        event: LocationEvent,
        services: &mut dyn LocationServices,
        map: &mut dyn MapDisplay,
    ) -> Option<Viewport> {
        match event {
            LocationEvent::Updated(fixes) => self.on_update(&fixes, map),
            LocationEvent::Failed(err) => {
                log::warn!("location request failed: {err}");
                self.awaiting_fix = false;
                None
            }
            LocationEvent::AuthorizationChanged(AuthorizationStatus::AuthorizedWhenInUse) => {
                self.request(services);
                None
            }
            LocationEvent::AuthorizationChanged(status) => {
                log::debug!("location authorization changed to {status:?}");
                None
            }
        }
    }

    fn on_update(&mut self, fixes: &[Coord<f64>], map: &mut dyn MapDisplay) -> Option<Viewport> {
        let fix = *fixes.first()?;
        self.last_fix = Some(fix);
        if !self.awaiting_fix {
            log::debug!("ignoring unrequested location update");
            return None;
        }
        self.awaiting_fix = false;
        let viewport = Viewport::focused_on(fix);
        map.set_viewport(viewport);
        Some(viewport)
    }

    fn request(&mut self, services: &mut dyn LocationServices) {
        self.awaiting_fix = true;
        services.request_location();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Span;
    use crate::test_support::{LocationCall, RecordingMap, ScriptedLocationServices};
    use rstest::{fixture, rstest};

    #[fixture]
    fn started() -> (LocationTracker, ScriptedLocationServices) {
        let mut tracker = LocationTracker::new();
        let mut services = ScriptedLocationServices::default();
        tracker.start(&mut services);
        (tracker, services)
    }

    #[rstest]
    fn start_requests_authorization_then_location(
        started: (LocationTracker, ScriptedLocationServices),
    ) {
        let (tracker, services) = started;
        assert!(tracker.awaiting_fix());
        assert_eq!(
            services.calls(),
            &[LocationCall::RequestAuthorization, LocationCall::RequestLocation]
        );
    }

    #[rstest]
    fn first_fix_recentres_with_focus_span(started: (LocationTracker, ScriptedLocationServices)) {
        let (mut tracker, mut services) = started;
        let mut map = RecordingMap::default();
        let fix = Coord { x: 151.2, y: -33.9 };

        let recentred = tracker.handle(
            LocationEvent::Updated(vec![fix, Coord { x: 0.0, y: 0.0 }]),
            &mut services,
            &mut map,
        );

        assert_eq!(recentred, Some(Viewport::new(fix, Span::FOCUS)));
        assert_eq!(map.viewport(), Viewport::new(fix, Span::FOCUS));
        assert_eq!(tracker.last_fix(), Some(fix));
    }

    #[rstest]
    fn unrequested_fix_does_not_move_map(started: (LocationTracker, ScriptedLocationServices)) {
        let (mut tracker, mut services) = started;
        let mut map = RecordingMap::default();
        tracker.handle(
            LocationEvent::Updated(vec![Coord { x: 1.0, y: 1.0 }]),
            &mut services,
            &mut map,
        );
        map.reset_calls();

        let recentred = tracker.handle(
            LocationEvent::Updated(vec![Coord { x: 2.0, y: 2.0 }]),
            &mut services,
            &mut map,
        );

        assert!(recentred.is_none());
        assert!(map.calls().is_empty());
        assert_eq!(tracker.last_fix(), Some(Coord { x: 2.0, y: 2.0 }));
    }

    #[rstest]
    fn empty_update_is_ignored(started: (LocationTracker, ScriptedLocationServices)) {
        let (mut tracker, mut services) = started;
        let mut map = RecordingMap::default();
        let recentred = tracker.handle(LocationEvent::Updated(Vec::new()), &mut services, &mut map);
        assert!(recentred.is_none());
        assert!(tracker.awaiting_fix());
    }

    #[rstest]
    fn failure_is_logged_without_retry(started: (LocationTracker, ScriptedLocationServices)) {
        let (mut tracker, mut services) = started;
        let mut map = RecordingMap::default();
        services.reset_calls();

        tracker.handle(
            LocationEvent::Failed(LocationError::Denied),
            &mut services,
            &mut map,
        );

        assert!(services.calls().is_empty());
        assert!(map.calls().is_empty());
    }

    #[rstest]
    #[case(AuthorizationStatus::AuthorizedWhenInUse, 1)]
    #[case(AuthorizationStatus::AuthorizedAlways, 0)]
    #[case(AuthorizationStatus::Denied, 0)]
    #[case(AuthorizationStatus::Restricted, 0)]
    #[case(AuthorizationStatus::NotDetermined, 0)]
    fn only_when_in_use_grant_re_requests(
        started: (LocationTracker, ScriptedLocationServices),
        #[case] status: AuthorizationStatus,
        #[case] expected_requests: usize,
    ) {
        let (mut tracker, mut services) = started;
        let mut map = RecordingMap::default();
        services.reset_calls();

        tracker.handle(
            LocationEvent::AuthorizationChanged(status),
            &mut services,
            &mut map,
        );

        let requests = services
            .calls()
            .iter()
            .filter(|call| **call == LocationCall::RequestLocation)
            .count();
        assert_eq!(requests, expected_requests);
    }
}
