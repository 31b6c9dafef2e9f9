pub mod route;
pub mod site;
pub mod volunteer;
pub mod weather;

pub use route::*;
pub use site::*;
pub use volunteer::*;
pub use weather::*;
