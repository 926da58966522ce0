pub mod listing;

pub use listing::ListingFormatter;
