use crate::types::{PostListing, PostRef};

/// Chronologically adjacent posts. Either side may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors<'a> {
    pub previous: Option<&'a PostRef>,
    pub next: Option<&'a PostRef>,
}

impl Neighbors<'_> {
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// Finds the posts published right before and right after `uid` in the
/// listing's chronological order.
pub fn resolve_neighbors<'a>(uid: &str, listing: &'a PostListing) -> Neighbors<'a> {
    let refs = listing.as_slice();

    match refs.iter().position(|post_ref| post_ref.uid == uid) {
        Some(index) => Neighbors {
            previous: index.checked_sub(1).and_then(|i| refs.get(i)),
            next: refs.get(index + 1),
        },
        None => Neighbors::default(),
    }
}
