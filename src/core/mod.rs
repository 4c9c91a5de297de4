//! Domain types shared by the catalog, scorer and session.

pub mod factor;
pub mod item;
pub mod rating;
pub mod responses;

pub use factor::{capitalize, Factor};
pub use item::{AssessmentItem, Keying};
pub use rating::Rating;
pub use responses::Responses;
