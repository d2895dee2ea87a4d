pub mod devices;
pub mod filter;
pub mod relationships;
pub mod runner;
pub mod shopping_list;
pub mod specification;

pub use crate::domain::model::{Color, Document, Edge, Entry, Person, Product, Relationship, Size};
pub use crate::domain::ports::{
    Demo, Fax, Filter, MultiFunctionDevice, Printer, RelationshipBrowser, Scanner, Specification,
};
pub use crate::utils::error::Result;
