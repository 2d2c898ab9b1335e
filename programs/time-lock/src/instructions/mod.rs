pub mod lock;
pub mod withdraw;

pub use lock::*;
pub use withdraw::*;
