pub mod initialize_season;
pub mod deposit;
pub mod award_points;
pub mod scorekeeper_handoff;
pub mod finalize;
pub mod withdraw;
pub mod views;

pub use initialize_season::*;
pub use deposit::*;
pub use award_points::*;
pub use scorekeeper_handoff::*;
pub use finalize::*;
pub use withdraw::*;
pub use views::*;
