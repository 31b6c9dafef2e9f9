use crate::error::Result;
use crate::logic::SiteRegistry;
use crate::models::Site;
use crate::ui::Console;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteMenuOption {
    Register,
    TopDepartment,
    Back,
}

impl SiteMenuOption {
    pub fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(SiteMenuOption::Register),
            2 => Some(SiteMenuOption::TopDepartment),
            3 => Some(SiteMenuOption::Back),
            _ => None,
        }
    }
}

/// Sub-menu for registering biodiversity sites and querying them.
pub struct SiteRegistryScreen<'a> {
    registry: &'a mut SiteRegistry,
}

impl<'a> SiteRegistryScreen<'a> {
    pub fn new(registry: &'a mut SiteRegistry) -> Self {
        Self { registry }
    }

    /// Loops until the volunteer goes back to the main menu.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        loop {
            show_menu(console)?;
            let choice = console.read_int("site menu option")?;
            console.skip_line();
            debug!(choice, "site menu choice");

            match SiteMenuOption::from_choice(choice) {
                Some(SiteMenuOption::Register) => self.register(console)?,
                Some(SiteMenuOption::TopDepartment) => self.report_top_department(console)?,
                Some(SiteMenuOption::Back) => {
                    console.say("Regresando al menú principal.")?;
                    return Ok(());
                }
                None => console.say("Opción no válida.")?,
            }
        }
    }

    fn register<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        if self.registry.is_full() {
            warn!(
                capacity = self.registry.capacity(),
                "site registry is full"
            );
            return console.say(capacity_message(self.registry.capacity()));
        }

        console.say("# Ingresa el nombre del lugar biodiverso:")?;
        let name = console.read_line("site name")?;
        console.say("# Ingresa el departamento del lugar:")?;
        let department = console.read_line("site department")?;
        console.say("# Ingresa el área del lugar (en hectáreas):")?;
        let area_ha = console.read_int("site area")?;
        console.skip_line();

        match self.registry.register(Site::new(name, department, area_ha)) {
            Ok(index) => {
                info!(index, total = self.registry.len(), "site registered");
                console.say("# Lugar registrado exitosamente.")
            }
            Err(full) => console.say(capacity_message(full.capacity)),
        }
    }

    fn report_top_department<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<()> {
        match self.registry.top_department() {
            Some((department, count)) => {
                debug!(department = %department, count, "top department");
                console.say(format!(
                    "# El departamento con más lugares biodiversos registrados es: {} con {} lugares.",
                    department, count
                ))
            }
            None => console.say("# No se han registrado lugares."),
        }
    }
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    console.say("# Bienvenido a la aplicación de Gestión de Lugares Biodiversos COP 16 Cali - Colombia.")?;
    console.say("# Te presentamos las siguientes opciones, ingresa:")?;
    console.say("# 1. Para registrar un lugar con diversidad biológica")?;
    console.say("# 2. Para consultar el departamento que tiene más lugares con diversidad biológica registrados hasta el momento.")?;
    console.say("# 3. Para salir al menú principal.")
}

fn capacity_message(capacity: usize) -> String {
    format!(
        "# Se ha alcanzado el límite de {} lugares registrados.",
        capacity
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_with(registry: &mut SiteRegistry, input: &str) -> (Result<()>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = SiteRegistryScreen::new(registry).run(&mut console);
        let output = String::from_utf8(console.into_output()).unwrap();
        (result, output)
    }

    #[test]
    fn register_then_query() {
        let mut registry = SiteRegistry::default();
        let input = "1\nFarallones de Cali\nValle\n150000\n\
                     1\nParque Munchique\nCauca\n44000\n\
                     1\nLaguna de Sonso\nValle\n2045\n\
                     2\n3\n";
        let (result, output) = run_with(&mut registry, input);
        assert!(result.is_ok());

        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.sites()[2],
            Site::new("Laguna de Sonso", "Valle", 2045)
        );
        assert_eq!(output.matches("# Lugar registrado exitosamente.").count(), 3);
        assert!(output.contains(
            "# El departamento con más lugares biodiversos registrados es: Valle con 2 lugares.\n"
        ));
        assert!(output.ends_with("Regresando al menú principal.\n"));
    }

    #[test]
    fn query_on_empty_registry() {
        let mut registry = SiteRegistry::default();
        let (result, output) = run_with(&mut registry, "2\n3\n");
        assert!(result.is_ok());
        assert!(output.contains("# No se han registrado lugares.\n"));
        assert!(!output.contains("El departamento con más"));
    }

    #[test]
    fn tie_reports_first_registered_department() {
        let mut registry = SiteRegistry::default();
        let (_, output) = run_with(&mut registry, "1\nUno\nA\n1\n1\nDos\nB\n1\n2\n3\n");
        assert!(output.contains("registrados es: A con 1 lugares."));
    }

    #[test]
    fn full_registry_refuses_without_reading_fields() {
        let mut registry = SiteRegistry::new(1);
        registry.register(Site::new("Uno", "Valle", 1)).unwrap();

        // Only menu options follow: no name/department/area prompts are consumed.
        let (result, output) = run_with(&mut registry, "1\n3\n");
        assert!(result.is_ok());
        assert!(output.contains("# Se ha alcanzado el límite de 1 lugares registrados.\n"));
        assert!(!output.contains("# Ingresa el nombre del lugar biodiverso:"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn thirty_first_registration_is_rejected() {
        let mut registry = SiteRegistry::default();
        let mut input = String::new();
        for i in 0..31 {
            input.push_str(&format!("1\nLugar {}\nValle\n{}\n", i, i));
        }
        input.push_str("3\n");

        // The rejected attempt reads no fields, so its three lines are
        // interpreted as menu choices: "Lugar 30" is not a number.
        let (result, output) = run_with(&mut registry, &input);
        assert!(result.is_err());
        assert_eq!(registry.len(), 30);
        assert!(output.contains("# Se ha alcanzado el límite de 30 lugares registrados."));
        assert_eq!(output.matches("# Lugar registrado exitosamente.").count(), 30);
    }

    #[test]
    fn unknown_option_redisplays_menu() {
        let mut registry = SiteRegistry::default();
        let (result, output) = run_with(&mut registry, "7\n3\n");
        assert!(result.is_ok());
        assert!(output.contains("Opción no válida.\n"));
        assert_eq!(output.matches("# 1. Para registrar").count(), 2);
    }

    #[test]
    fn area_may_be_followed_by_unit() {
        let mut registry = SiteRegistry::default();
        let (result, _) = run_with(&mut registry, "1\nBosque de Yotoco\nValle\n559 ha\n3\n");
        assert!(result.is_ok());
        assert_eq!(registry.sites()[0].area_ha, 559);
    }

    #[test]
    fn site_menu_choices() {
        assert_eq!(SiteMenuOption::from_choice(1), Some(SiteMenuOption::Register));
        assert_eq!(
            SiteMenuOption::from_choice(2),
            Some(SiteMenuOption::TopDepartment)
        );
        assert_eq!(SiteMenuOption::from_choice(3), Some(SiteMenuOption::Back));
        assert_eq!(SiteMenuOption::from_choice(4), None);
    }
}
