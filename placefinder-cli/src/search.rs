//! Search command implementation for the Placefinder CLI.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use geo::Coord;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use placefinder_core::{
    Annotation, MapDisplay, MapSession, NavigationLauncher, PlaceSearchProvider, ResultRow,
    TravelMode, Viewport,
};
use placefinder_data::navigation::DirectionsLinkNavigator;
use placefinder_data::search::{NominatimConfig, NominatimPlaceSearch};
use serde::{Deserialize, Serialize};

use crate::terminal::{DeviceLocation, ListingView, TerminalMap};
use crate::{
    ARG_DIRECTIONS, ARG_LATITUDE, ARG_LIMIT, ARG_LONGITUDE, ARG_NOMINATIM_URL, ARG_QUERY,
    ARG_SELECT, ARG_TIMEOUT_SECS, ARG_WALKING, CliError, ENV_QUERY,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Search a Nominatim service for places. Results near the \
                 given position rank first. A result can be pinned by its \
                 row number and a directions link printed for it. Every \
                 option can also come from configuration files or \
                 PLACEFINDER_* environment variables.",
    about = "Search places near a position"
)]
#[ortho_config(prefix = "PLACEFINDER")]
pub(crate) struct SearchArgs {
    /// Free-text query, e.g. "coffee" or "10 Downing Street".
    #[arg(value_name = "text")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Latitude of the current position in decimal degrees.
    #[arg(long = ARG_LATITUDE, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) latitude: Option<f64>,
    /// Longitude of the current position in decimal degrees.
    #[arg(long = ARG_LONGITUDE, value_name = "deg", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) longitude: Option<f64>,
    /// Base URL of the Nominatim service.
    #[arg(long = ARG_NOMINATIM_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) nominatim_url: Option<String>,
    /// Maximum number of results.
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<u8>,
    /// Request timeout in seconds.
    #[arg(long = ARG_TIMEOUT_SECS, value_name = "secs")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Pin the result at this row (1-based).
    #[arg(long = ARG_SELECT, value_name = "row")]
    #[serde(default)]
    pub(crate) select: Option<usize>,
    /// Print a directions link to the pinned result.
    #[arg(long = ARG_DIRECTIONS, num_args = 0..=1, default_missing_value = "true")]
    #[serde(default)]
    pub(crate) directions: Option<bool>,
    /// Ask for walking rather than driving directions.
    #[arg(long = ARG_WALKING, num_args = 0..=1, default_missing_value = "true")]
    #[serde(default)]
    pub(crate) walking: Option<bool>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// Resolved `search` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchConfig {
    /// Query text.
    pub(crate) query: String,
    /// Device position, when known.
    pub(crate) position: Option<Coord<f64>>,
    /// Provider settings.
    pub(crate) nominatim: NominatimConfig,
    /// 1-based row to pin.
    pub(crate) select: Option<usize>,
    /// Whether to print a directions link.
    pub(crate) directions: bool,
    /// Travel mode for directions.
    pub(crate) mode: TravelMode,
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let query = args
            .query
            .filter(|text| !text.trim().is_empty())
            .ok_or(CliError::MissingArgument {
                field: ARG_QUERY,
                env: ENV_QUERY,
            })?;
        let position = resolve_position(args.latitude, args.longitude)?;

        let defaults = NominatimConfig::default();
        let mut nominatim =
            NominatimConfig::new(args.nominatim_url.unwrap_or(defaults.base_url))
                .with_limit(args.limit.unwrap_or(defaults.limit));
        if let Some(secs) = args.timeout_secs {
            nominatim = nominatim.with_timeout(Duration::from_secs(secs));
        }

        let mode = if args.walking.unwrap_or(false) {
            TravelMode::Walking
        } else {
            TravelMode::Driving
        };

        Ok(Self {
            query,
            position,
            nominatim,
            select: args.select,
            directions: args.directions.unwrap_or(false),
            mode,
        })
    }
}

fn resolve_position(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Option<Coord<f64>>, CliError> {
    match (latitude, longitude) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(CliError::IncompleteCentre {
            given: ARG_LATITUDE,
            missing: ARG_LONGITUDE,
        }),
        (None, Some(_)) => Err(CliError::IncompleteCentre {
            given: ARG_LONGITUDE,
            missing: ARG_LATITUDE,
        }),
        (Some(lat), Some(lon)) => {
            check_range(ARG_LATITUDE, lat, 90)?;
            check_range(ARG_LONGITUDE, lon, 180)?;
            Ok(Some(Coord { x: lon, y: lat }))
        }
    }
}

fn check_range(field: &'static str, value: f64, limit: u8) -> Result<(), CliError> {
    let bound = f64::from(limit);
    if (-bound..=bound).contains(&value) {
        Ok(())
    } else {
        Err(CliError::InvalidCoordinate {
            field,
            value,
            limit,
        })
    }
}

pub(super) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let provider = NominatimPlaceSearch::with_config(config.nominatim.clone()).map_err(
        |source| CliError::BuildProvider {
            base_url: config.nominatim.base_url.clone(),
            source,
        },
    )?;
    let mut stdout = std::io::stdout().lock();
    run_search_with(&config, Arc::new(provider), &mut stdout)
}

/// Drive one map session through search, selection and directions.
pub(super) fn run_search_with<P>(
    config: &SearchConfig,
    provider: Arc<P>,
    writer: &mut dyn Write,
) -> Result<(), CliError>
where
    P: PlaceSearchProvider + 'static,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    let mut session = MapSession::with_shared_provider(
        provider,
        TerminalMap::default(),
        ListingView::default(),
        DirectionsLinkNavigator::default(),
        DeviceLocation::new(config.position),
    )
    .with_launcher(NavigationLauncher::new().with_mode(config.mode));

    session.start();
    if let Some(event) = session.location_mut().answer() {
        session.location_event(event);
    }

    runtime.block_on(session.search(config.query.clone()));
    log::debug!(
        "search for {:?} returned {} places",
        config.query,
        session.results().len()
    );
    write_rows(writer, session.view().rows(), &config.query)?;

    if let Some(row) = config.select {
        let available = session.results().len();
        let selected = row
            .checked_sub(1)
            .and_then(|index| session.row_selected(index))
            .is_some();
        if !selected {
            return Err(CliError::SelectionOutOfRange { row, available });
        }
        write_pin(writer, session.map().annotation(), session.map().viewport())?;
    }

    if config.directions {
        if session.directions_requested() {
            if let Some(link) = session.navigator().last_link() {
                writeln!(writer, "Directions: {link}").map_err(CliError::WriteOutput)?;
            }
        } else {
            writeln!(writer, "No place pinned; pass --{ARG_SELECT} to choose one.")
                .map_err(CliError::WriteOutput)?;
        }
    }
    Ok(())
}

fn write_rows(
    writer: &mut dyn Write,
    rows: &[ResultRow],
    query: &str,
) -> Result<(), CliError> {
    if rows.is_empty() {
        writeln!(writer, "No places found for {query:?}.").map_err(CliError::WriteOutput)?;
        return Ok(());
    }
    for (number, row) in (1_usize..).zip(rows) {
        writeln!(writer, "{number}. {}", row.title).map_err(CliError::WriteOutput)?;
        if !row.detail.is_empty() {
            writeln!(writer, "   {}", row.detail).map_err(CliError::WriteOutput)?;
        }
    }
    Ok(())
}

fn write_pin(
    writer: &mut dyn Write,
    annotation: Option<&Annotation>,
    viewport: Viewport,
) -> Result<(), CliError> {
    let Some(pin) = annotation else {
        return Ok(());
    };
    let title = pin.title.as_deref().unwrap_or("unnamed place");
    let centre = viewport.centre;
    if pin.subtitle.is_empty() {
        writeln!(writer, "Pinned {title} at {},{}", centre.y, centre.x)
    } else {
        writeln!(
            writer,
            "Pinned {title} ({}) at {},{}",
            pin.subtitle, centre.y, centre.x
        )
    }
    .map_err(CliError::WriteOutput)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SearchConfig, CliError> {
    let merged = SearchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SearchConfig::try_from(merged)
}
