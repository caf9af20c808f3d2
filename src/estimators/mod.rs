pub mod approaches;
pub mod entropy;
pub mod traits;

pub use traits::{GlobalValue, LocalValues};
