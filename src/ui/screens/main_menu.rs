use crate::error::Result;
use crate::ui::Console;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuOption {
    RouteInteraction,
    SiteRegistry,
    Exit,
}

impl MainMenuOption {
    pub fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(MainMenuOption::RouteInteraction),
            2 => Some(MainMenuOption::SiteRegistry),
            3 => Some(MainMenuOption::Exit),
            _ => None,
        }
    }
}

pub fn show<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say("# Bienvenido a la aplicación principal.")?;
    console.say("# Te presentamos las siguientes opciones, ingresa:")?;
    console.say("# 1. Para la aplicación de Interacción de Rutas Ecológicas COP 16")?;
    console.say("# 2. Para la aplicación de Gestión de Lugares Biodiversos COP 16")?;
    console.say("# 3. Para salir del programa.")
}
