pub mod codec;
pub mod error;
pub mod replace;

pub use crate::codec::convert::convert;
pub use crate::codec::newline::{Newline, NewlineRewriter};
pub use crate::error::{Result, TencError};
pub use crate::replace::{replace_file_in_place, ReplaceStage, ReplaceTransaction};
