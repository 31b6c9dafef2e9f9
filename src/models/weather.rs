use crate::config::WeatherConfig;

/// Conditions reported by the volunteer before a walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherReading {
    pub temperature_c: f64,
    pub humidity_percent: f64,
}

impl WeatherReading {
    pub fn new(temperature_c: f64, humidity_percent: f64) -> Self {
        Self {
            temperature_c,
            humidity_percent,
        }
    }

    /// Both readings inside the inclusive comfort window.
    pub fn is_good_for_walking(&self, window: &WeatherConfig) -> bool {
        (window.min_temp_c..=window.max_temp_c).contains(&self.temperature_c)
            && (window.min_humidity..=window.max_humidity).contains(&self.humidity_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn good(temp: f64, humidity: f64) -> bool {
        WeatherReading::new(temp, humidity).is_good_for_walking(&WeatherConfig::default())
    }

    #[test]
    fn window_bounds_are_inclusive() {
        assert!(good(20.0, 40.0));
        assert!(good(25.0, 60.0));
        assert!(good(22.5, 50.0));
    }

    #[test]
    fn just_outside_the_window() {
        assert!(!good(19.9, 50.0));
        assert!(!good(25.1, 60.0));
        assert!(!good(22.0, 39.9));
        assert!(!good(22.0, 60.1));
    }

    #[test]
    fn both_readings_must_fit() {
        assert!(!good(30.0, 50.0));
        assert!(!good(22.0, 80.0));
    }

    #[test]
    fn nan_is_never_walking_weather() {
        assert!(!good(f64::NAN, 50.0));
        assert!(!good(22.0, f64::NAN));
    }

    #[test]
    fn custom_window() {
        let window = WeatherConfig {
            min_temp_c: 15.0,
            max_temp_c: 18.0,
            min_humidity: 70.0,
            max_humidity: 90.0,
        };
        assert!(WeatherReading::new(16.0, 85.0).is_good_for_walking(&window));
        assert!(!WeatherReading::new(20.0, 50.0).is_good_for_walking(&window));
    }
}
