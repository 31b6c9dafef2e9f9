use crate::config::Config;
use crate::error::Result;
use crate::logic::calculations::{buses_required, total_people};
use crate::models::{Route, RouteDescriptor, Volunteer, WeatherReading};
use crate::ui::Console;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Volunteer walk registration: route details, weather check and bus count.
pub struct RouteInteractionScreen<'a> {
    config: &'a Config,
}

impl<'a> RouteInteractionScreen<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let volunteer = self.ask_volunteer(console)?;
        console.say(volunteer.greeting())?;

        let descriptor = self.select_route(console)?;
        console.say(route_summary(descriptor.as_ref()))?;

        let participants = ask_int(
            console,
            "# ¿Cuántos participantes acudirán a la caminata el día de hoy?",
            "participants",
        )?;
        let guides = ask_int(
            console,
            "# ¿Cuántos guías acudirán a la caminata el día de hoy?",
            "guides",
        )?;
        let total = total_people(participants, guides);

        let reading = self.ask_weather(console)?;
        let good_day = reading.is_good_for_walking(&self.config.weather);
        debug!(
            temperature_c = reading.temperature_c,
            humidity_percent = reading.humidity_percent,
            good_day,
            "weather checked"
        );
        if good_day {
            console.say("# ¡Hace un buen día para caminar por Cali!")?;
        }

        let buses = buses_required(total, self.config.transport.bus_capacity);
        info!(total, buses, "walk logistics computed");
        console.say(format!(
            "# Al ser un total de {} personas que harán parte de la actividad, se necesitarán un total de: {} buses para llevarla a cabo de manera exitosa. ¡Nos vemos en la COP16!",
            total, buses
        ))
    }

    fn ask_volunteer<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Volunteer> {
        console.say("# Bienvenido voluntario a la aplicación de Interacción de Rutas Ecológicas COP 16 Cali - Colombia. ¿Cuál es tu nombre?")?;
        let name = console.read_line("volunteer name")?;
        console.say("# Por favor, digita tu cédula.")?;
        let national_id = console.read_line("volunteer national id")?;
        let volunteer = Volunteer { name, national_id };
        debug!(?volunteer, "volunteer identified");
        Ok(volunteer)
    }

    /// An unknown selector is reported and yields no descriptor; the walk
    /// registration carries on with blank details.
    fn select_route<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<Option<RouteDescriptor>> {
        console.say("# ¿Qué ruta registrarás el día de hoy?")?;
        for route in Route::ALL {
            console.say(format!("{}. {}", route.number(), route))?;
        }
        let choice = console.read_int("route")?;
        console.skip_line();

        match Route::from_choice(choice) {
            Some(route) => {
                let descriptor = route.descriptor();
                debug!(
                    route = %route,
                    minutes = descriptor.duration().num_minutes(),
                    "route selected"
                );
                Ok(Some(descriptor))
            }
            None => {
                debug!(choice, "invalid route selector");
                console.say("# Opción de ruta inválida.")?;
                Ok(None)
            }
        }
    }

    fn ask_weather<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
    ) -> Result<WeatherReading> {
        console.say("# Ingresar la temperatura en grados centígrados °C")?;
        let temperature_c = console.read_float("temperature")?;
        console.say("# Ingresar el porcentaje de humedad relativa")?;
        let humidity_percent = console.read_float("humidity")?;
        Ok(WeatherReading::new(temperature_c, humidity_percent))
    }
}

fn ask_int<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
    what: &'static str,
) -> Result<i32> {
    console.say(prompt)?;
    console.read_int(what)
}

/// Blank fields when no route was selected.
pub fn route_summary(descriptor: Option<&RouteDescriptor>) -> String {
    let (meeting_point, start, end) = match descriptor {
        Some(d) => (d.meeting_point.to_string(), d.start_label(), d.end_label()),
        None => Default::default(),
    };
    format!(
        "# La Ruta seleccionada tiene como punto de encuentro {}, iniciando a las {}, y termina a las {}.",
        meeting_point, start, end
    )
}
