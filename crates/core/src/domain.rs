use serde::{Deserialize, Serialize};

/// The closed set of industries a user can pick on the home tab.
///
/// Declared order is display order everywhere the set is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Technology,
    Retail,
    Healthcare,
    Finance,
    Manufacturing,
    Hospitality,
    Education,
    RealEstate,
}

impl Industry {
    pub const ALL: [Industry; 8] = [
        Industry::Technology,
        Industry::Retail,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Manufacturing,
        Industry::Hospitality,
        Industry::Education,
        Industry::RealEstate,
    ];

    /// Stable wire value carried in interactive element payloads.
    pub fn value(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Retail => "retail",
            Self::Healthcare => "healthcare",
            Self::Finance => "finance",
            Self::Manufacturing => "manufacturing",
            Self::Hospitality => "hospitality",
            Self::Education => "education",
            Self::RealEstate => "real_estate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Retail => "Retail",
            Self::Healthcare => "Healthcare",
            Self::Finance => "Finance",
            Self::Manufacturing => "Manufacturing",
            Self::Hospitality => "Hospitality",
            Self::Education => "Education",
            Self::RealEstate => "Real Estate",
        }
    }

    /// Parses a wire value back into the closed set. Unknown values are
    /// rejected rather than checked downstream.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|industry| industry.value() == value)
    }
}

/// The closed set of business categories offered once an industry is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Strategy,
    Marketing,
    Operations,
    Funding,
}

impl Category {
    pub const ALL: [Category; 4] =
        [Category::Strategy, Category::Marketing, Category::Operations, Category::Funding];

    pub fn value(self) -> &'static str {
        match self {
            Self::Strategy => "strategy",
            Self::Marketing => "marketing",
            Self::Operations => "operations",
            Self::Funding => "funding",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Strategy => "Strategy",
            Self::Marketing => "Marketing",
            Self::Operations => "Operations",
            Self::Funding => "Funding",
        }
    }

    /// Each category owns a distinct interactive action id on the home tab.
    pub fn action_id(self) -> &'static str {
        match self {
            Self::Strategy => "home.category.strategy.v1",
            Self::Marketing => "home.category.marketing.v1",
            Self::Operations => "home.category.operations.v1",
            Self::Funding => "home.category.funding.v1",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.value() == value)
    }

    pub fn from_action_id(action_id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.action_id() == action_id)
    }
}

/// Per-user selection record. Lives for the process lifetime only.
///
/// `category` is only meaningful once `industry` is set; handlers enforce
/// that ordering, the record itself does not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub industry: Option<Industry>,
    pub category: Option<Category>,
}
