mod errors;
mod lending_service;

pub use errors::{LendingApplicationError, Result};
pub use lending_service::{
    MemberLoans, ServiceDependencies, borrow_item, borrowed_items, find_item, find_member,
    library_summary, list_borrowed_items, member_loans, register_item, register_member,
    return_item,
};
