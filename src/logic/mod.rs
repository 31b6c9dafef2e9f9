pub mod calculations;
pub mod registry;

pub use registry::SiteRegistry;
