pub mod classroom;
pub mod error;
pub mod models;
pub mod requests;

pub use classroom::*;
pub use error::*;
pub use models::*;
pub use requests::*;
