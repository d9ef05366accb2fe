// 🏠 Home Automation Facade
// One call fans out a fixed sequence of subsystem actions

// ============================================================================
// SUBSYSTEMS
// ============================================================================

// The four subsystems are independent; only the facade sequences them.
// Each action returns its report line so routines can be checked end to end.

#[derive(Debug, Default)]
pub struct Lights;

impl Lights {
    pub fn turn_on(&self) -> String {
        "Lights turned on".to_string()
    }

    pub fn turn_off(&self) -> String {
        "Lights turned off".to_string()
    }

    pub fn dim(&self, percentage: u8) -> String {
        format!("Lights dimmed to {}%", percentage)
    }
}

#[derive(Debug, Default)]
pub struct AudioSystem;

impl AudioSystem {
    pub fn turn_on(&self) -> String {
        "Audio system turned on".to_string()
    }

    pub fn turn_off(&self) -> String {
        "Audio system turned off".to_string()
    }

    pub fn set_volume(&self, level: u8) -> String {
        format!("Volume set to {}", level)
    }

    pub fn play_movie(&self) -> String {
        "Movie audio playing".to_string()
    }
}

#[derive(Debug, Default)]
pub struct Thermostat;

impl Thermostat {
    pub fn set_temperature(&self, celsius: i32) -> String {
        format!("Temperature set to {}°C", celsius)
    }

    pub fn turn_off(&self) -> String {
        "Thermostat turned off".to_string()
    }
}

#[derive(Debug, Default)]
pub struct SecuritySystem;

impl SecuritySystem {
    pub fn arm(&self) -> String {
        "Security system armed".to_string()
    }

    pub fn disarm(&self) -> String {
        "Security system disarmed".to_string()
    }
}

// ============================================================================
// FACADE
// ============================================================================

/// Owns all four subsystems. Each routine issues its fixed, ordered call
/// sequence with no branching and no recovery, prints the actions, and
/// returns them for inspection.
#[derive(Debug, Default)]
pub struct HomeAutomationFacade {
    lights: Lights,
    audio: AudioSystem,
    thermostat: Thermostat,
    security: SecuritySystem,
}

impl HomeAutomationFacade {
    pub fn new() -> Self {
        HomeAutomationFacade::default()
    }

    pub fn good_morning(&self) -> Vec<String> {
        self.report(vec![
            self.lights.turn_on(),
            self.thermostat.set_temperature(22),
            self.security.disarm(),
            "Good morning routine completed!".to_string(),
        ])
    }

    pub fn good_night(&self) -> Vec<String> {
        self.report(vec![
            self.lights.turn_off(),
            self.audio.turn_off(),
            self.thermostat.set_temperature(18),
            self.security.arm(),
            "Good night routine completed!".to_string(),
        ])
    }

    pub fn movie_mode(&self) -> Vec<String> {
        self.report(vec![
            self.lights.dim(20),
            self.audio.turn_on(),
            self.audio.set_volume(70),
            self.audio.play_movie(),
            "Movie mode activated!".to_string(),
        ])
    }

    fn report(&self, actions: Vec<String>) -> Vec<String> {
        for action in &actions {
            println!("   {}", action);
        }
        actions
    }
}

// ============================================================================
// DEMO
// ============================================================================

/// Console walkthrough: the three routines in their fixed order.
pub fn run() -> anyhow::Result<()> {
    println!("   Demonstrating Facade Pattern...");

    let home = HomeAutomationFacade::new();

    println!("   Good morning routine:");
    home.good_morning();

    println!("   Good night routine:");
    home.good_night();

    println!("   Movie mode:");
    home.movie_mode();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_good_morning_sequence() {
        let home = HomeAutomationFacade::new();
        assert_eq!(
            home.good_morning(),
            vec![
                "Lights turned on",
                "Temperature set to 22°C",
                "Security system disarmed",
                "Good morning routine completed!",
            ]
        );
    }

    #[test]
    fn test_good_night_sequence() {
        let home = HomeAutomationFacade::new();
        assert_eq!(
            home.good_night(),
            vec![
                "Lights turned off",
                "Audio system turned off",
                "Temperature set to 18°C",
                "Security system armed",
                "Good night routine completed!",
            ]
        );
    }

    #[test]
    fn test_movie_mode_sequence() {
        let home = HomeAutomationFacade::new();
        assert_eq!(
            home.movie_mode(),
            vec![
                "Lights dimmed to 20%",
                "Audio system turned on",
                "Volume set to 70",
                "Movie audio playing",
                "Movie mode activated!",
            ]
        );
    }
}
