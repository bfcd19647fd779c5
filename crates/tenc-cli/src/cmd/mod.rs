pub mod encode;
pub mod getinfo;
pub mod overwrite;
