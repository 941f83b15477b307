pub mod element;
pub mod error;
pub mod matrix;
pub mod modulus;
pub mod vector;

pub use element::ZmodElement;
pub use error::RingError;
pub use modulus::{SizeTier, Zmod};
