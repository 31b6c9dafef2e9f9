use crate::config::Config;
use crate::error::Result;
use crate::logic::SiteRegistry;
use crate::ui::screens::{main_menu, MainMenuOption, RouteInteractionScreen, SiteRegistryScreen};
use crate::ui::Console;
use std::io::{BufRead, Write};
use tracing::debug;

pub struct App {
    pub config: Config,
    pub registry: SiteRegistry,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let registry = SiteRegistry::new(config.registry.max_sites);
        Self {
            config,
            registry,
            should_quit: false,
        }
    }

    /// Main dispatch loop; returns once the exit option is chosen.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        while !self.should_quit {
            main_menu::show(console)?;
            let choice = console.read_int("main menu option")?;
            console.skip_line();
            debug!(choice, "main menu choice");

            match MainMenuOption::from_choice(choice) {
                Some(MainMenuOption::RouteInteraction) => {
                    RouteInteractionScreen::new(&self.config).run(console)?;
                }
                Some(MainMenuOption::SiteRegistry) => {
                    SiteRegistryScreen::new(&mut self.registry).run(console)?;
                }
                Some(MainMenuOption::Exit) => {
                    console.say("Saliendo del programa.")?;
                    self.quit();
                }
                None => console.say("Opción no válida.")?,
            }
        }
        Ok(())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
