use std::collections::BTreeSet;

use feruca::Collator;

use super::model::{Dataset, Field, Record};

// ---------------------------------------------------------------------------
// Substring search
// ---------------------------------------------------------------------------

/// Records whose food name contains `query`, ignoring case, in table order.
/// An empty query matches nothing.
pub fn search<'a>(dataset: &'a Dataset, query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    dataset
        .records
        .iter()
        .filter(|rec| rec.food_item.to_lowercase().contains(&needle))
        .collect()
}

// ---------------------------------------------------------------------------
// Cascading browse filter
// ---------------------------------------------------------------------------

/// Browse selection: a required primary category narrowed by optional
/// secondary and oxalate categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseFilter {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub oxalate: Option<String>,
}

impl BrowseFilter {
    /// Change the primary category. The refinements depend on the primary,
    /// so they are cleared whenever it is set.
    pub fn set_primary(&mut self, primary: Option<String>) {
        self.primary = primary;
        self.secondary = None;
        self.oxalate = None;
    }
}

/// Apply the browse filter. Without a primary category nothing matches.
pub fn filter_records<'a>(dataset: &'a Dataset, filter: &BrowseFilter) -> Vec<&'a Record> {
    let Some(primary) = filter.primary.as_deref() else {
        return Vec::new();
    };

    let mut filtered: Vec<&Record> = dataset
        .records
        .iter()
        .filter(|rec| rec.primary_category == primary)
        .collect();

    if let Some(secondary) = filter.secondary.as_deref() {
        filtered.retain(|rec| rec.secondary_category == secondary);
    }
    if let Some(oxalate) = filter.oxalate.as_deref() {
        filtered.retain(|rec| rec.oxalate_category == oxalate);
    }
    filtered
}

// ---------------------------------------------------------------------------
// Selector options
// ---------------------------------------------------------------------------

/// Sorted unique values of `field`, optionally restricted to one primary
/// category.
pub fn distinct_values(dataset: &Dataset, field: Field, primary: Option<&str>) -> Vec<String> {
    dataset
        .records
        .iter()
        .filter(|rec| primary.map_or(true, |p| rec.primary_category == p))
        .map(|rec| rec.get(field))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Order a result set by food name for display.
///
/// Names are collated with the Unicode root collation (case and accents
/// compare next to their plain letters); byte order breaks exact ties.
pub fn sort_by_food_name(records: &mut [&Record]) {
    let mut collator = Collator::default();
    records.sort_unstable_by(|a, b| {
        collator
            .collate(a.food_item.as_str(), b.food_item.as_str())
            .then_with(|| a.food_item.cmp(&b.food_item))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: [&str; 7]) -> Record {
        Record::from_fields(values.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record(["Vegetables", "Leafy", "Spinach, raw", "1", "cup", "Very High", "750 mg"]),
            record(["Vegetables", "Leafy", "Kale", "1", "cup", "Low", "15 mg"]),
            record(["Vegetables", "Root", "Beets", "1/2", "cup", "Very High", "76 mg"]),
            record(["Fruit", "Berries", "Raspberries", "1", "cup", "High", "48 mg"]),
            record(["Fruit", "Berries", "Blueberries", "1", "cup", "Low", "4 mg"]),
            record(["Grains", "Cereal", "Spinach pasta", "1", "cup", "Moderate", "12 mg"]),
        ])
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.food_item.clone()).collect()
    }

    #[test]
    fn search_finds_spinach_record() {
        let ds = dataset();
        let hits = search(&ds, "spin");
        assert_eq!(names(&hits), vec!["Spinach, raw", "Spinach pasta"]);
        assert_eq!(hits[0].oxalate_value, "750 mg");
    }

    #[test]
    fn spinach_and_kale_example() {
        let ds = Dataset::from_records(vec![
            record(["Vegetables", "Leafy", "Spinach, raw", "1", "cup", "Very High", "750 mg"]),
            record(["Vegetables", "Leafy", "Kale", "1", "cup", "Low", "15 mg"]),
        ]);

        let hits = search(&ds, "spin");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].food_item, "Spinach, raw");
        assert_eq!(hits[0].oxalate_value, "750 mg");

        let filter = BrowseFilter {
            primary: Some("Vegetables".into()),
            secondary: Some("Leafy".into()),
            oxalate: None,
        };
        let mut browsed = filter_records(&ds, &filter);
        sort_by_food_name(&mut browsed);
        assert_eq!(names(&browsed), vec!["Kale", "Spinach, raw"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let ds = dataset();
        for query in ["BERR", "ale", "s", " ", "Raw"] {
            for rec in search(&ds, query) {
                assert!(rec.food_item.to_lowercase().contains(&query.to_lowercase()));
            }
        }
        assert_eq!(search(&ds, "BERR").len(), 2);
        assert!(search(&ds, "durian").is_empty());
    }

    #[test]
    fn empty_search_returns_nothing() {
        assert!(search(&dataset(), "").is_empty());
    }

    #[test]
    fn browse_requires_primary() {
        let ds = dataset();
        let filter = BrowseFilter {
            primary: None,
            secondary: Some("Leafy".into()),
            oxalate: None,
        };
        assert!(filter_records(&ds, &filter).is_empty());
    }

    #[test]
    fn browse_vegetables_leafy_sorted() {
        let ds = dataset();
        let mut filter = BrowseFilter::default();
        filter.set_primary(Some("Vegetables".into()));
        filter.secondary = Some("Leafy".into());

        let mut hits = filter_records(&ds, &filter);
        sort_by_food_name(&mut hits);
        assert_eq!(names(&hits), vec!["Kale", "Spinach, raw"]);
        assert!(hits
            .iter()
            .all(|r| r.primary_category == "Vegetables" && r.secondary_category == "Leafy"));
    }

    #[test]
    fn browse_oxalate_refinement() {
        let ds = dataset();
        let filter = BrowseFilter {
            primary: Some("Vegetables".into()),
            secondary: None,
            oxalate: Some("Very High".into()),
        };
        let mut hits = filter_records(&ds, &filter);
        sort_by_food_name(&mut hits);
        assert_eq!(names(&hits), vec!["Beets", "Spinach, raw"]);
    }

    #[test]
    fn changing_primary_clears_refinements() {
        let mut filter = BrowseFilter::default();
        filter.set_primary(Some("Vegetables".into()));
        filter.secondary = Some("Leafy".into());
        filter.oxalate = Some("Low".into());

        filter.set_primary(None);
        assert_eq!(filter, BrowseFilter::default());

        filter.set_primary(Some("Fruit".into()));
        assert!(filter.secondary.is_none());
        assert!(filter.oxalate.is_none());
    }

    #[test]
    fn distinct_values_sorted_and_scoped() {
        let ds = dataset();
        assert_eq!(
            distinct_values(&ds, Field::PrimaryCategory, None),
            vec!["Fruit", "Grains", "Vegetables"]
        );
        assert_eq!(
            distinct_values(&ds, Field::SecondaryCategory, Some("Vegetables")),
            vec!["Leafy", "Root"]
        );
        assert_eq!(
            distinct_values(&ds, Field::OxalateCategory, Some("Vegetables")),
            vec!["Low", "Very High"]
        );
        assert!(distinct_values(&ds, Field::SecondaryCategory, Some("Dairy")).is_empty());
    }

    #[test]
    fn results_ignore_case_and_accents_when_ordering() {
        let ds = Dataset::from_records(
            ["Banana", "apple", "Zucchini", "\u{c9}clair"]
                .into_iter()
                .map(|food| record(["Dessert", "Misc", food, "1", "cup", "Low", "1 mg"]))
                .collect(),
        );
        let filter = BrowseFilter {
            primary: Some("Dessert".into()),
            ..Default::default()
        };
        let mut hits = filter_records(&ds, &filter);
        sort_by_food_name(&mut hits);
        assert_eq!(names(&hits), vec!["apple", "Banana", "\u{c9}clair", "Zucchini"]);
    }

    #[test]
    fn distinct_values_keep_byte_order() {
        let ds = Dataset::from_records(vec![
            record(["fruit", "Misc", "Apple", "1", "cup", "Low", "1 mg"]),
            record(["Vegetables", "Misc", "Kale", "1", "cup", "Low", "1 mg"]),
        ]);
        assert_eq!(
            distinct_values(&ds, Field::PrimaryCategory, None),
            vec!["Vegetables", "fruit"]
        );
    }

    #[test]
    fn queries_on_empty_dataset_are_empty() {
        let ds = Dataset::default();
        assert!(search(&ds, "kale").is_empty());
        assert!(distinct_values(&ds, Field::PrimaryCategory, None).is_empty());
        let filter = BrowseFilter {
            primary: Some("Vegetables".into()),
            ..Default::default()
        };
        assert!(filter_records(&ds, &filter).is_empty());
    }
}
