//! In-memory stores backing the editor. Both are plain owned collections;
//! change notification happens one level up, in
//! [`EditorContext`](crate::state::EditorContext).

mod elements;
mod pages;

pub use elements::ElementStore;
pub use pages::PageStore;
