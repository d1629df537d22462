use crate::data::model::{Dataset, Field, OxalateTier, Record};
use crate::data::query::{self, BrowseFilter};

/// Placeholder shown in the suggestion list and results area when a query
/// matches nothing.
pub const NO_RESULTS: &str = "No results found";

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// One entry of the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub food_name: String,
    /// `"{serving size} {serving size value} = {oxalate value}"`.
    pub serving_info: String,
    pub oxalate_category: String,
    /// `None` when the category is outside the known vocabulary.
    pub tier: Option<OxalateTier>,
}

impl From<&Record> for ResultRow {
    fn from(rec: &Record) -> Self {
        ResultRow {
            food_name: rec.food_item.clone(),
            serving_info: rec.serving_info(),
            oxalate_category: rec.oxalate_category.clone(),
            tier: rec.tier(),
        }
    }
}

/// Content of the suggestion list under the search box.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Suggestions {
    #[default]
    Hidden,
    /// Query matched nothing; show [`NO_RESULTS`].
    NoMatches,
    /// Food names to offer, in table order.
    Items(Vec<String>),
}

/// Content of the results container.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Results {
    #[default]
    Cleared,
    /// A search or browse ran and matched nothing.
    NoMatches,
    /// Rows sorted by food name.
    Rows(Vec<ResultRow>),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (empty when loading failed).
    pub dataset: Dataset,

    /// Text in the search box.
    pub search_query: String,

    pub suggestions: Suggestions,

    pub results: Results,

    /// Whether the browse section is visible (hidden while showing search
    /// results).
    pub browse_visible: bool,

    /// Current browse selections.
    pub browse: BrowseFilter,

    /// Selector options; secondary/oxalate are scoped to the primary.
    pub primary_options: Vec<String>,
    pub secondary_options: Vec<String>,
    pub oxalate_options: Vec<String>,

    /// Maximum number of suggestion entries.
    pub suggestion_limit: usize,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: Dataset::default(),
            search_query: String::new(),
            suggestions: Suggestions::Hidden,
            results: Results::Cleared,
            browse_visible: true,
            browse: BrowseFilter::default(),
            primary_options: Vec::new(),
            secondary_options: Vec::new(),
            oxalate_options: Vec::new(),
            suggestion_limit: 10,
            status_message: None,
        }
    }
}

impl AppState {
    pub fn new(dataset: Dataset, suggestion_limit: usize) -> Self {
        let mut state = Self {
            suggestion_limit,
            ..Default::default()
        };
        state.set_dataset(dataset);
        state
    }

    /// Install a newly loaded table and reset every selection.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.primary_options = query::distinct_values(&dataset, Field::PrimaryCategory, None);
        self.dataset = dataset;

        self.search_query.clear();
        self.suggestions = Suggestions::Hidden;
        self.results = Results::Cleared;
        self.browse_visible = true;
        self.select_primary(None);
        self.status_message = None;
    }

    // -- Search --------------------------------------------------------------

    /// The search text changed: refresh suggestions.
    pub fn on_search_input(&mut self, query: &str) {
        self.search_query = query.to_string();

        if query.is_empty() {
            self.suggestions = Suggestions::Hidden;
            self.results = Results::Cleared;
            self.browse_visible = true;
            return;
        }

        let matches = query::search(&self.dataset, query);
        self.suggestions = if matches.is_empty() {
            Suggestions::NoMatches
        } else {
            Suggestions::Items(
                matches
                    .into_iter()
                    .take(self.suggestion_limit)
                    .map(|rec| rec.food_item.clone())
                    .collect(),
            )
        };
    }

    /// Enter pressed in the search box.
    pub fn submit_search(&mut self) {
        self.suggestions = Suggestions::Hidden;
        self.show_search_results();
    }

    /// A suggestion was clicked.
    pub fn pick_suggestion(&mut self, food: &str) {
        self.search_query = food.to_string();
        self.suggestions = Suggestions::Hidden;
        self.show_search_results();
    }

    /// Click outside the search box and suggestion list.
    pub fn dismiss_suggestions(&mut self) {
        self.suggestions = Suggestions::Hidden;
    }

    fn show_search_results(&mut self) {
        self.browse_visible = false;
        let matches = query::search(&self.dataset, &self.search_query);
        self.results = sorted_rows(matches);
    }

    // -- Browse --------------------------------------------------------------

    /// Choose (or clear) the primary category.
    pub fn select_primary(&mut self, primary: Option<String>) {
        self.browse.set_primary(primary);

        match self.browse.primary.as_deref() {
            Some(p) => {
                self.secondary_options =
                    query::distinct_values(&self.dataset, Field::SecondaryCategory, Some(p));
                self.oxalate_options =
                    query::distinct_values(&self.dataset, Field::OxalateCategory, Some(p));
            }
            None => {
                self.secondary_options.clear();
                self.oxalate_options.clear();
                self.results = Results::Cleared;
            }
        }
    }

    pub fn select_secondary(&mut self, secondary: Option<String>) {
        self.browse.secondary = secondary;
    }

    pub fn select_oxalate(&mut self, oxalate: Option<String>) {
        self.browse.oxalate = oxalate;
    }

    /// Secondary/oxalate selectors and the browse trigger need a primary.
    pub fn browse_enabled(&self) -> bool {
        self.browse.primary.is_some()
    }

    /// The browse "Search" button was clicked.
    pub fn run_browse(&mut self) {
        self.browse_visible = true;
        let matches = query::filter_records(&self.dataset, &self.browse);
        self.results = sorted_rows(matches);
    }
}

fn sorted_rows(mut matches: Vec<&Record>) -> Results {
    if matches.is_empty() {
        return Results::NoMatches;
    }
    query::sort_by_food_name(&mut matches);
    Results::Rows(matches.into_iter().map(ResultRow::from).collect())
}
