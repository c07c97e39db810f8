//! Navigation hand-off through OpenStreetMap directions links.
//!
//! [`DirectionsLinkNavigator`] turns a [`NavigationRequest`] into a
//! directions URL on an OpenStreetMap website and passes it to an opener
//! callback, e.g. one that launches the system browser. Route computation
//! happens entirely on the remote site.

use std::fmt;

use placefinder_core::{NavigationRequest, Navigator, TravelMode};
use url::Url;

/// Default OpenStreetMap website.
pub const DEFAULT_DIRECTIONS_URL: &str = "https://www.openstreetmap.org/directions";

/// Callback receiving each generated directions link.
pub type LinkOpener = Box<dyn FnMut(&Url) + Send>;

/// [`Navigator`] that produces OpenStreetMap directions links.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use placefinder_core::{NavigationRequest, Navigator, TravelMode};
/// use placefinder_data::navigation::DirectionsLinkNavigator;
///
/// let mut navigator = DirectionsLinkNavigator::default();
/// navigator.navigate(NavigationRequest {
///     destination: Coord { x: -0.1246, y: 51.5007 },
///     name: None,
///     mode: TravelMode::Driving,
/// });
/// let link = navigator.last_link().expect("link generated");
/// assert!(link.as_str().contains("fossgis_osrm_car"));
/// ```
pub struct DirectionsLinkNavigator {
    base: Url,
    opener: Option<LinkOpener>,
    last_link: Option<Url>,
}

impl fmt::Debug for DirectionsLinkNavigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectionsLinkNavigator")
            .field("base", &self.base)
            .field("opener", &self.opener.as_ref().map(|_| "<callback>"))
            .field("last_link", &self.last_link)
            .finish()
    }
}

impl Default for DirectionsLinkNavigator {
    fn default() -> Self {
        Self::with_base(default_base())
    }
}

impl DirectionsLinkNavigator {
    /// Create a navigator targeting the directions page at `base`.
    ///
    /// # Errors
    ///
    /// Returns an error when `base` is not an absolute URL.
    pub fn new(base: &str) -> Result<Self, url::ParseError> {
        Url::parse(base).map(Self::with_base)
    }

    const fn with_base(base: Url) -> Self {
        Self {
            base,
            opener: None,
            last_link: None,
        }
    }

    /// Pass every generated link to `opener`.
    #[must_use]
    pub fn with_opener(mut self, opener: impl FnMut(&Url) + Send + 'static) -> Self {
        self.opener = Some(Box::new(opener));
        self
    }

    /// Most recently generated link.
    #[must_use]
    pub const fn last_link(&self) -> Option<&Url> {
        self.last_link.as_ref()
    }

    /// Directions link for `request`.
    ///
    /// The origin is left empty so the site starts from the viewer's own
    /// position.
    #[must_use]
    pub fn directions_url(&self, request: &NavigationRequest) -> Url {
        let route = format!(
            ";{},{}",
            request.destination.y, request.destination.x
        );
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("engine", engine(request.mode))
            .append_pair("route", &route);
        url
    }
}

impl Navigator for DirectionsLinkNavigator {
    fn navigate(&mut self, request: NavigationRequest) {
        let link = self.directions_url(&request);
        log::debug!(
            "directions to {} via {link}",
            request.name.as_deref().unwrap_or("selected place")
        );
        if let Some(opener) = self.opener.as_mut() {
            opener(&link);
        }
        self.last_link = Some(link);
    }
}

const fn engine(mode: TravelMode) -> &'static str {
    match mode {
        TravelMode::Driving => "fossgis_osrm_car",
        TravelMode::Walking => "fossgis_osrm_foot",
    }
}

#[expect(
    clippy::expect_used,
    reason = "the default directions URL is a compile-time constant"
)]
fn default_base() -> Url {
    Url::parse(DEFAULT_DIRECTIONS_URL).expect("default directions URL should parse")
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;
    use std::sync::{Arc, Mutex};

    fn request(mode: TravelMode) -> NavigationRequest {
        NavigationRequest {
            destination: Coord { x: 2.2945, y: 48.8584 },
            name: Some("Tour Eiffel".to_owned()),
            mode,
        }
    }

    fn param(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.into_owned())
    }

    #[rstest]
    #[case(TravelMode::Driving, "fossgis_osrm_car")]
    #[case(TravelMode::Walking, "fossgis_osrm_foot")]
    fn directions_url_selects_engine(#[case] mode: TravelMode, #[case] expected: &str) {
        let url = DirectionsLinkNavigator::default().directions_url(&request(mode));
        assert_eq!(param(&url, "engine").as_deref(), Some(expected));
    }

    #[rstest]
    fn directions_url_routes_to_latitude_then_longitude() {
        let url = DirectionsLinkNavigator::default().directions_url(&request(TravelMode::Driving));
        assert_eq!(url.path(), "/directions");
        assert_eq!(param(&url, "route").as_deref(), Some(";48.8584,2.2945"));
    }

    #[rstest]
    fn navigate_passes_link_to_opener() {
        let opened = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&opened);
        let mut navigator = DirectionsLinkNavigator::new("http://osm.example.com/directions")
            .expect("valid base")
            .with_opener(move |url| sink.lock().expect("lock").push(url.clone()));

        navigator.navigate(request(TravelMode::Driving));

        let links = opened.lock().expect("lock");
        assert_eq!(links.len(), 1);
        assert_eq!(links.first(), navigator.last_link());
        assert_eq!(
            links.first().map(Url::host_str),
            Some(Some("osm.example.com"))
        );
    }

    #[rstest]
    fn invalid_base_is_rejected() {
        assert!(DirectionsLinkNavigator::new("directions").is_err());
    }
}
