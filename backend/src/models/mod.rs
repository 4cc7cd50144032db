pub mod movie;
pub mod pagination;

pub use movie::*;
pub use pagination::*;
