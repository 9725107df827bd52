//! Search pipeline: filtering, pagination and the tag index
//!
//! All three are pure functions over a borrowed collection. The session
//! runs them in order (filter, then paginate) each time the view is
//! recomputed, and rebuilds the tag index after every mutation.

pub mod filter;
pub mod paginate;
pub mod tags;

pub use filter::{BookmarkFilterExt, filter};
pub use paginate::{Page, PageControl, paginate, total_pages};
pub use tags::{TagIndex, all_tags};
