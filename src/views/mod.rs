//! Server-rendered HTML for the listing and detail screens.

pub mod detail;
pub mod layout;
pub mod listing;

pub use detail::render_detail;
pub use layout::STYLESHEET;
pub use listing::ListingView;
