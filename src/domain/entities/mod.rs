//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`LinkRecord`] - A stored short link (URL or text) as persisted in the store
//! - [`LiveLink`] - A record paired with its code, as listed on the statistics page
//! - [`ResolvedView`] - What a successful lookup should render
//! - [`Expiration`] - The fixed set of lifetimes a link can be created with
//! - [`NewLink`] / [`CreatedLink`] - Input and output of link creation

pub mod expiration;
pub mod link;

pub use expiration::Expiration;
pub use link::{CreatedLink, LinkRecord, LiveLink, NewLink, ResolvedView};
