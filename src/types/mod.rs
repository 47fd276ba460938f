mod fields;
mod listing;
mod pagination;
mod post;

pub use listing::{PostListing, PostRef};
pub use pagination::PostPagination;
pub use post::{ContentBlock, Post, RichTextFragment};

#[cfg(test)]
pub use post::PostData;
