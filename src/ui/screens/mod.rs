pub mod main_menu;
pub mod route_interaction;
pub mod site_registry;

pub use main_menu::MainMenuOption;
pub use route_interaction::RouteInteractionScreen;
pub use site_registry::SiteRegistryScreen;
