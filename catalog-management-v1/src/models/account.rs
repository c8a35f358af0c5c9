use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Account information.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Option<String>,
    /// Cloudant revision.
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    /// Hide the public catalog in this account.
    #[serde(rename = "hide_IBM_cloud_catalog")]
    pub hide_ibm_cloud_catalog: Option<bool>,
    pub account_filters: Option<Filters>,
    /// Region filter string.
    pub region_filter: Option<String>,
}

/// Filters for account and catalog filters.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    /// -> true - Include all of the public catalog when filtering. Further settings will
    /// specifically exclude some offerings. false - Exclude all of the public catalog when
    /// filtering. Further settings will specifically include some offerings.
    pub include_all: Option<bool>,
    /// Filter against offering properties, keyed by category name.
    pub category_filters: Option<BTreeMap<String, CategoryFilter>>,
    pub id_filters: Option<IdFilter>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryFilter {
    /// -> true - This is an include filter, false - this is an exclude filter.
    pub include: Option<bool>,
    pub filter: Option<FilterTerms>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterTerms {
    /// List of values to match against. If include is true, then if the offering has one of
    /// the values then the offering is included. If include is false, then if the offering
    /// has one of the values then the offering is excluded.
    pub filter_terms: Option<Vec<String>>,
}

/// Offering ids to include or exclude.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IdFilter {
    pub include: Option<FilterTerms>,
    pub exclude: Option<FilterTerms>,
}

/// The accumulated filters for an account. This will return the account filters plus a
/// filter for each catalog the user has access to.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumulatedFilters {
    pub account_filters: Option<Vec<Filters>>,
    pub catalog_filters: Option<Vec<AccumulatedFiltersCatalogFiltersItem>>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumulatedFiltersCatalogFiltersItem {
    pub catalog: Option<AccumulatedFiltersCatalogFiltersItemCatalog>,
    pub filters: Option<Filters>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumulatedFiltersCatalogFiltersItemCatalog {
    pub id: Option<String>,
    pub name: Option<String>,
}
