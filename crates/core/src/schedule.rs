pub mod availability;
pub mod clock;
pub mod hours;
pub mod overlap;
pub mod slots;

pub use availability::available_slots;
pub use clock::ShopClock;
pub use hours::{OpenInterval, OpeningHours};
pub use overlap::{conflicts_with, intervals_overlap};
pub use slots::{SlotGenerator, DEFAULT_GRANULARITY_MINUTES};
