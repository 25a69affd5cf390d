pub mod products_query;
pub mod stored_prefs;
