//! Fixed pagination constants for product list views.

/// The page sizes the page-size picker offers.
pub const PAGE_SIZES: [u64; 2] = [24, 36];

pub const DEFAULT_PAGE_SIZE: u64 = 24;

/// How many numbered page buttons the pagination control renders at most.
pub const MAX_PAGE_BUTTONS: u64 = 10;
