//! Linked lists with index-based access.

mod doubly;
mod singly;

pub use doubly::DoublyLinkedList;
pub use singly::SinglyLinkedList;
