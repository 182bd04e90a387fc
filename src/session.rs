use std::path::Path;

use anyhow::Result;
use tracing::{error, info};

use crate::config::Config;
use crate::filter::{derive_filtered_set, summary, table_rows, FilterSelection};
use crate::lookup::{validate_zip, AreaInfo, Geocoder, LookupError, ZipReport};
use crate::map::{fill_color, focus, match_features, match_states, Boundaries, Focus, MatchedArea, MatchedState};
use crate::wage::{Dataset, WageRecord};

/// Progress of a one-shot resource load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase<T> {
    NotLoaded,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadPhase<T> {
    fn default() -> Self { LoadPhase::NotLoaded }
}

impl<T> LoadPhase<T> {
    #[inline] pub fn is_loaded(&self) -> bool { matches!(self, LoadPhase::Loaded(_)) }

    #[inline] pub fn is_loading(&self) -> bool { matches!(self, LoadPhase::Loading) }

    /// The loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadPhase::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if the load failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// An area feature as drawn for the current selection.
#[derive(Debug, Clone, Copy)]
pub struct AreaView<'a> {
    pub area: MatchedArea<'a>,
    pub fill_color: &'static str,
    pub selected: bool,
}

/// A state outline as drawn for the current selection.
#[derive(Debug, Clone, Copy)]
pub struct StateView<'a> {
    pub state: MatchedState<'a>,
    pub selected: bool,
}

/// The map part of a [`View`], present once boundaries are loaded.
#[derive(Debug, Clone)]
pub struct MapView<'a> {
    pub areas: Vec<AreaView<'a>>,
    pub states: Vec<StateView<'a>>,
    pub focus: Focus,
}

/// Everything derived from the loaded data and the current selection.
#[derive(Debug, Clone)]
pub struct View<'a> {
    pub selection: &'a FilterSelection,
    pub subtitle: String,
    pub filtered: Vec<&'a WageRecord>, // Input order
    pub rows: Vec<&'a WageRecord>,     // Highest annual wage first
    pub map: Option<MapView<'a>>,
}

/// Loaded resources plus the user's current selection.
///
/// Each resource moves through [`LoadPhase`] on its own; a failed load of one
/// leaves the other untouched. Derived output is recomputed from scratch on
/// every [`Session::view`] call.
#[derive(Debug, Clone, Default)]
pub struct Session {
    dataset: LoadPhase<Dataset>,
    boundaries: LoadPhase<Boundaries>,
    selection: FilterSelection,
}

impl Session {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn dataset(&self) -> &LoadPhase<Dataset> { &self.dataset }

    #[inline] pub fn boundaries(&self) -> &LoadPhase<Boundaries> { &self.boundaries }

    #[inline] pub fn selection(&self) -> &FilterSelection { &self.selection }

    pub fn begin_dataset_load(&mut self) {
        self.dataset = LoadPhase::Loading;
    }

    /// Record the outcome of a dataset load. On success the selection is reset
    /// to the dataset's first title with no other filters.
    pub fn finish_dataset_load(&mut self, result: Result<Dataset>) {
        match result {
            Ok(dataset) => {
                info!(records = dataset.len(), titles = dataset.titles().len(), "[session] wage data ready");
                self.selection = FilterSelection::for_dataset(&dataset);
                self.dataset = LoadPhase::Loaded(dataset);
            }
            Err(e) => {
                error!("[session] wage data failed to load: {e:#}");
                self.dataset = LoadPhase::Failed(format!("{e:#}"));
            }
        }
    }

    pub fn begin_boundary_load(&mut self) {
        self.boundaries = LoadPhase::Loading;
    }

    pub fn finish_boundary_load(&mut self, result: Result<Boundaries>) {
        match result {
            Ok(boundaries) => {
                info!(states = boundaries.states().len(), areas = boundaries.areas().len(), "[session] boundaries ready");
                self.boundaries = LoadPhase::Loaded(boundaries);
            }
            Err(e) => {
                error!("[session] boundaries failed to load: {e:#}");
                self.boundaries = LoadPhase::Failed(format!("{e:#}"));
            }
        }
    }

    /// Load the wage CSV at `path`.
    pub fn load_dataset(&mut self, path: &Path) {
        self.begin_dataset_load();
        self.finish_dataset_load(Dataset::read_csv(path));
    }

    /// Load the state and area GeoJSON files.
    pub fn load_boundaries(&mut self, states: &Path, areas: &Path) {
        self.begin_boundary_load();
        self.finish_boundary_load(Boundaries::read_geojson(states, areas));
    }

    /// Load every resource named by `config`.
    pub fn load(&mut self, config: &Config) {
        self.load_dataset(&config.wages);
        self.load_boundaries(&config.states, &config.areas);
    }

    /// Replace the current selection.
    pub fn select(&mut self, selection: FilterSelection) {
        self.selection = selection;
    }

    /// Derive the table and map for the current selection. `None` until the
    /// dataset is loaded.
    pub fn view(&self) -> Option<View<'_>> {
        let dataset = self.dataset.loaded()?;
        let selection = &self.selection;

        let filtered = derive_filtered_set(dataset.records(), selection);
        let rows = table_rows(&filtered, selection.level);
        let map = self.boundaries.loaded().map(|boundaries| map_view(boundaries, dataset, selection));

        Some(View { selection, subtitle: summary(selection), filtered, rows, map })
    }

    /// Describe the area containing (`lat`, `lon`) for the current title.
    /// `Ok(None)` means the point lies outside every area.
    pub fn locate_point(&self, lat: f64, lon: f64) -> Result<Option<AreaInfo>, LookupError> {
        let boundaries = self.boundaries.loaded().ok_or(LookupError::NotLoaded("boundaries"))?;
        let records = self.dataset.loaded().map(Dataset::records).unwrap_or_default();

        let Some(idx) = boundaries.locate_area(lat, lon) else { return Ok(None) };
        let feature = &boundaries.areas()[idx];
        let matched = match_features(std::slice::from_ref(feature), records, &self.selection.title);
        Ok(matched.first().map(AreaInfo::from_matched))
    }

    /// Geocode a zip code and describe the area it falls in.
    pub fn lookup_zip(&self, geocoder: &dyn Geocoder, zip: &str) -> Result<ZipReport, LookupError> {
        let zip = validate_zip(zip)?;
        let place = geocoder.geocode(zip)?;
        let area = self.locate_point(place.lat, place.lon)?;
        Ok(ZipReport { place, area })
    }
}

fn map_view<'a>(boundaries: &'a Boundaries, dataset: &'a Dataset, selection: &FilterSelection) -> MapView<'a> {
    let areas = match_features(boundaries.areas(), dataset.records(), &selection.title);
    let states = match_states(boundaries.states(), dataset.records());
    let focus = focus(&areas, &states, selection);
    let field = selection.wage_field();

    MapView {
        areas: areas.into_iter()
            .map(|area| AreaView {
                fill_color: fill_color(area.wage(field)),
                selected: selection.highlights_area(&area),
                area,
            })
            .collect(),
        states: states.into_iter()
            .map(|state| StateView { selected: selection.highlights_state(&state), state })
            .collect(),
        focus,
    }
}
