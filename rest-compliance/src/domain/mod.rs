mod activity;
mod policy;
mod schedule;
mod shift;

pub use activity::*;
pub use policy::*;
pub use schedule::*;
pub use shift::*;
