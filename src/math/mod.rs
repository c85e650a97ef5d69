mod vector;
pub use vector::*;

mod ops;

mod convert;
pub use convert::*;
