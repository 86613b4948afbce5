pub mod catalog;
pub mod commands;
pub mod errors;
pub mod events;
pub mod item;
pub mod member;
pub mod value_objects;

pub use catalog::Catalog;
pub use errors::*;
pub use events::*;
pub use item::{Item, ItemKind};
pub use member::{LoanEntry, LoanLedger, Member, NO_BORROWED_ITEMS};
pub use value_objects::*;
