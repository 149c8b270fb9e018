//! Menu data model
//!
//! The dishes a chef has recorded this session, plus the views derived from
//! them (filtered list, per-course statistics). Nothing here touches the
//! terminal or the filesystem.
//!
//! ```
//! use menucard::menu::{Course, CourseFilter, MenuStore, NewEntry};
//!
//! let mut store = MenuStore::new();
//! store.add(NewEntry::new("Lemon Chicken", "", Course::Main, "120")).unwrap();
//! store.add(NewEntry::new("Malva Pudding", "", Course::Dessert, "55.5")).unwrap();
//!
//! assert_eq!(store.filtered_list(CourseFilter::Only(Course::Main)).len(), 1);
//! assert_eq!(store.aggregates().dessert.average, 55.5);
//! assert_eq!(store.aggregates().starter.average, 0.0);
//! ```

mod aggregate;
mod entry;
mod error;
mod store;

pub use aggregate::{Aggregates, CourseStats};
pub use entry::{parse_price, round_cents, Course, CourseFilter, EntryId, MenuEntry, NewEntry};
pub use error::{Field, ValidationError};
pub use store::{MenuStore, StoreEvent};
