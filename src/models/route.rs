use chrono::{NaiveTime, TimeDelta};

/// Ecological walking routes offered to volunteers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Farallones,
    Oriente,
    Ladera,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Farallones, Route::Oriente, Route::Ladera];

    pub fn from_choice(choice: i32) -> Option<Self> {
        match choice {
            1 => Some(Route::Farallones),
            2 => Some(Route::Oriente),
            3 => Some(Route::Ladera),
            _ => None,
        }
    }

    pub fn number(&self) -> i32 {
        match self {
            Route::Farallones => 1,
            Route::Oriente => 2,
            Route::Ladera => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Route::Farallones => "Ruta de los Farallones",
            Route::Oriente => "Ruta del Oriente",
            Route::Ladera => "Ruta de Ladera",
        }
    }

    pub fn descriptor(&self) -> RouteDescriptor {
        match self {
            Route::Farallones => RouteDescriptor {
                meeting_point: "Calle 16 - Universidad del Valle",
                start: clock(6, 40),
                end: clock(16, 0),
            },
            Route::Oriente => RouteDescriptor {
                meeting_point: "Bulevar del Río",
                start: clock(7, 0),
                end: clock(13, 0),
            },
            Route::Ladera => RouteDescriptor {
                meeting_point: "Bulevar del Río",
                start: clock(7, 0),
                end: clock(13, 30),
            },
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where and when a route's walk meets and ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub meeting_point: &'static str,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl RouteDescriptor {
    pub fn start_label(&self) -> String {
        format_clock(self.start)
    }

    pub fn end_label(&self) -> String {
        format_clock(self.end)
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

fn clock(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// 12-hour clock with lowercase suffix, e.g. `6:40 am`.
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%-I:%M %P").to_string()
}
