//! Category and note repositories.
//!
//! Both borrow the [`Store`](crate::store::Store) they operate on; they hold
//! no state of their own and can be created wherever a store reference is
//! available.

mod category;
mod note;

pub use category::CategoryRepository;
pub use note::NoteRepository;
