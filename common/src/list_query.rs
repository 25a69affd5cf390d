//! The full parameter tuple for a product list fetch.

use serde::{Deserialize, Serialize};

use crate::facet_selection::FacetSelection;
use crate::list_const::DEFAULT_PAGE_SIZE;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortBy {
    #[default]
    Id,
    Price,
}

impl SortBy {
    /// Field name understood by the catalog service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Price => "price",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "price" => Self::Price,
            _ => Self::Id,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "Newest",
            Self::Price => "Price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// Everything the catalog service needs to produce one page of results.
/// Built fresh for every fetch so the filter set and the page number
/// always travel together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListQuery {
    pub category_id: u64,
    pub selection: FacetSelection,
    /// Zero-based.
    pub page_number: u64,
    pub page_size: u64,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl ProductListQuery {
    pub fn new(category_id: u64) -> Self {
        Self {
            category_id,
            selection: FacetSelection::new(),
            page_number: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_params_round_trip_their_string_forms() {
        assert_eq!(SortBy::from_str_or_default(SortBy::Price.as_str()), SortBy::Price);
        assert_eq!(SortOrder::from_str_or_default(SortOrder::Desc.as_str()), SortOrder::Desc);
        // unknown values fall back to defaults
        assert_eq!(SortBy::from_str_or_default("bogus"), SortBy::Id);
        assert_eq!(SortOrder::from_str_or_default("bogus"), SortOrder::Asc);
    }
}
