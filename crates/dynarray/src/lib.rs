#![doc = include_str!("../README.md")]

mod array;
mod error;
mod index;
mod list;
mod sort;

pub use array::*;
pub use error::*;
pub use index::ListIndex;
pub use list::*;
