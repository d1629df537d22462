use std::fmt;

// ---------------------------------------------------------------------------
// Field – the seven positional columns of the oxalate table
// ---------------------------------------------------------------------------

/// Number of positional columns every data row must provide.
pub const FIELD_COUNT: usize = 7;

/// One of the positional columns of the source file, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    PrimaryCategory,
    SecondaryCategory,
    FoodItem,
    ServingSize,
    ServingSizeValue,
    OxalateCategory,
    OxalateValue,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::PrimaryCategory => "Primary Category",
            Field::SecondaryCategory => "Secondary Category",
            Field::FoodItem => "Food Item",
            Field::ServingSize => "Serving Size",
            Field::ServingSizeValue => "Serving Size Value",
            Field::OxalateCategory => "Oxalate Category",
            Field::OxalateValue => "Oxalate Value",
        };
        write!(f, "{label}")
    }
}

// ---------------------------------------------------------------------------
// OxalateTier – coarse severity grouping of the oxalate category label
// ---------------------------------------------------------------------------

/// Three-way grouping of the ordinal oxalate category labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OxalateTier {
    Low,
    Moderate,
    High,
}

impl OxalateTier {
    /// Map a free-text category label to its tier.
    ///
    /// Matching is exact but case-insensitive; anything outside the known
    /// vocabulary is unclassified (`None`).
    pub fn classify(category: &str) -> Option<Self> {
        match category.to_lowercase().as_str() {
            "very high" | "high" => Some(OxalateTier::High),
            "moderate" => Some(OxalateTier::Moderate),
            "low" | "very low" | "little or none" => Some(OxalateTier::Low),
            _ => None,
        }
    }
}

impl fmt::Display for OxalateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OxalateTier::Low => write!(f, "low"),
            OxalateTier::Moderate => write!(f, "moderate"),
            OxalateTier::High => write!(f, "high"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the oxalate table
// ---------------------------------------------------------------------------

/// A single food entry (one data row of the source file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub primary_category: String,
    pub secondary_category: String,
    pub food_item: String,
    /// Serving size description, e.g. `"1"` or `"1/2"`.
    pub serving_size: String,
    /// Serving size unit/value, e.g. `"cup"`.
    pub serving_size_value: String,
    /// Ordinal label such as `"Very High"` or `"Little or None"`.
    pub oxalate_category: String,
    /// Oxalate amount as text, units included (`"750 mg"`).
    pub oxalate_value: String,
}

impl Record {
    /// Build a record from split fields. Returns `None` when fewer than
    /// [`FIELD_COUNT`] fields are present; extra trailing fields are ignored.
    pub fn from_fields(fields: Vec<String>) -> Option<Self> {
        if fields.len() < FIELD_COUNT {
            return None;
        }
        let mut it = fields.into_iter();
        Some(Record {
            primary_category: it.next()?,
            secondary_category: it.next()?,
            food_item: it.next()?,
            serving_size: it.next()?,
            serving_size_value: it.next()?,
            oxalate_category: it.next()?,
            oxalate_value: it.next()?,
        })
    }

    /// Borrow the value of a column.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::PrimaryCategory => &self.primary_category,
            Field::SecondaryCategory => &self.secondary_category,
            Field::FoodItem => &self.food_item,
            Field::ServingSize => &self.serving_size,
            Field::ServingSizeValue => &self.serving_size_value,
            Field::OxalateCategory => &self.oxalate_category,
            Field::OxalateValue => &self.oxalate_value,
        }
    }

    /// Serving line shown under the food name: `"1 cup = 750 mg"`.
    pub fn serving_info(&self) -> String {
        format!(
            "{} {} = {}",
            self.serving_size, self.serving_size_value, self.oxalate_value
        )
    }

    pub fn tier(&self) -> Option<OxalateTier> {
        OxalateTier::classify(&self.oxalate_category)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table, records kept in file order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
