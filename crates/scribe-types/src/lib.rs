pub mod category;
pub mod element;
pub mod id;

pub use category::*;
pub use element::*;
pub use id::*;
