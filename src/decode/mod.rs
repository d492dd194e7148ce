//! Response decoder module
//!
//! Turns the body of a listing response into a [`Page`](crate::types::Page).
//!
//! # Overview
//!
//! Listing responses are nested envelopes:
//!
//! ```text
//! { "kind": "Listing",
//!   "data": { "after": "t1_xyz" | null,
//!             "children": [ { "kind": "t1", "data": { "id", "body", "permalink" } } ] } }
//! ```
//!
//! Only the named fields are extracted. Anything else in the payload is
//! ignored, so additions to the source API do not break decoding.

mod listing;

pub use listing::ListingDecoder;
