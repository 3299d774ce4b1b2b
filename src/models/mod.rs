// Domain data models

pub mod activity;
pub mod dashboard;
pub mod engagement;
pub mod fitness;
pub mod member;
pub mod membership;
pub mod recommendation;
pub mod trainer;

pub use activity::*;
pub use dashboard::*;
pub use engagement::*;
pub use fitness::*;
pub use member::*;
pub use membership::*;
pub use recommendation::*;
pub use trainer::*;
