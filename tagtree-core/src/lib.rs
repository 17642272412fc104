#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod macros;

mod scalar;
pub use scalar::*;

mod field;
pub use field::*;

mod layout;
pub use layout::*;

mod error;
pub use error::*;

mod peek;
pub use peek::*;

mod partial;
pub use partial::*;

mod record;
pub use record::*;

mod impls;
