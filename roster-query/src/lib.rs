//! # roster-query
//!
//! The list-view pipeline behind every Roster table:
//!
//! ```text
//! store ──▶ filter ──▶ sort ──▶ paginate ──▶ PageResult
//! ```
//!
//! Every stage is a pure function over borrowed records. The whole pipeline
//! re-runs on each interaction; nothing is cached and the store is never
//! mutated. Callers keep their own [`ListState`] and turn it into a
//! [`ListQuery`] per run.

pub mod collation;
pub mod field;
pub mod filter;
pub mod paginate;
pub mod pipeline;
pub mod sort;
pub mod state;

pub use collation::{Collation, DEFAULT_LOCALE};
pub use field::{FieldValue, Queryable};
pub use filter::{filter, FilterQuery, ALL};
pub use paginate::paginate;
pub use pipeline::{query, ListQuery, DEFAULT_PAGE_SIZE};
pub use sort::{order, sort, SortDirection, SortSpec};
pub use state::{ListAction, ListState};
