pub mod kind;
pub mod next_opening;
pub mod resolver;
pub mod store;
pub mod summary;
