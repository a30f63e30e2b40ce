//! Route Table
//!
//! Client-side paths and the top-bar view they select.

use crate::models::Key;
use crate::store::Bucket;

pub const NOTES: &str = "/";
pub const TRIAGED: &str = "/triaged";
pub const BIN: &str = "/bin";
pub const LOGIN: &str = "/login";
pub const SETTINGS: &str = "/settings";

/// Top-bar view for a path. Exact match only, so `/notes/3` selects nothing.
pub fn active_view(path: &str) -> Option<Bucket> {
    match path {
        NOTES => Some(Bucket::Notes),
        TRIAGED => Some(Bucket::Triaged),
        BIN => Some(Bucket::Bin),
        _ => None,
    }
}

/// Listing page for a bucket
pub fn listing_path(bucket: Bucket) -> &'static str {
    match bucket {
        Bucket::Notes => NOTES,
        Bucket::Triaged => TRIAGED,
        Bucket::Bin => BIN,
    }
}

/// Single note page, e.g. `/triaged/12`
pub fn note_path(bucket: Bucket, id: Key) -> String {
    format!("/{}/{}", bucket.as_str(), id)
}

/// Pages reachable without a logged in user
pub fn is_public(path: &str) -> bool {
    path == LOGIN
}
