//! Service layer: feed listing orchestration, record lookup, pagination
//! arithmetic, and the clock seam.

pub mod clock;
pub mod feed;
pub mod lookup;
pub mod pagination;

pub use clock::{Clock, SystemClock};
pub use feed::FeedService;
pub use lookup::LookupService;
