//! Repository module for item CRUD operations

pub mod item;

pub use item::ItemRepository;
