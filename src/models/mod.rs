pub mod category;
pub mod dapp;

pub use category::*;
pub use dapp::*;
