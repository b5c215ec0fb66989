pub mod season;
pub mod position;

pub use season::*;
pub use position::*;
