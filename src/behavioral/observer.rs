// 🌡️ Weather Broadcast
// One station pushes every new sample to its current set of display devices

use serde::{Deserialize, Serialize};

// ============================================================================
// SAMPLE
// ============================================================================

/// Snapshot of the station's sensors, delivered whole to every subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
}

// ============================================================================
// DISPLAY DEVICES
// ============================================================================

/// The closed set of display endpoints a station can feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayKind {
    Phone,
    Tv,
    Web,
}

impl DisplayKind {
    pub fn name(&self) -> &'static str {
        match self {
            DisplayKind::Phone => "Phone Display",
            DisplayKind::Tv => "TV Display",
            DisplayKind::Web => "Web Display",
        }
    }
}

/// A subscribed display. Remembers the last sample it was handed so the
/// delivery contract is observable.
#[derive(Debug, Clone)]
struct DisplayDevice {
    kind: DisplayKind,
    last_reading: Option<WeatherSample>,
}

impl DisplayDevice {
    fn new(kind: DisplayKind) -> Self {
        DisplayDevice {
            kind,
            last_reading: None,
        }
    }

    fn update(&mut self, sample: WeatherSample) {
        self.last_reading = Some(sample);
        println!("   {}", self.readout(&sample));
    }

    /// Each device formats the same sample its own way.
    fn readout(&self, s: &WeatherSample) -> String {
        match self.kind {
            DisplayKind::Phone => format!(
                "📱 Phone Display: Temp={}°C, Humidity={}%, Pressure={}hPa",
                s.temperature, s.humidity, s.pressure
            ),
            DisplayKind::Tv => format!(
                "📺 TV Display: Temperature: {}°C, Humidity: {}%, Pressure: {}hPa",
                s.temperature, s.humidity, s.pressure
            ),
            DisplayKind::Web => format!(
                "🌐 Web Display: T:{}°C | H:{}% | P:{}hPa",
                s.temperature, s.humidity, s.pressure
            ),
        }
    }
}

// ============================================================================
// STATION
// ============================================================================

/// Subject side of the broadcast. The subscriber list has set semantics:
/// a device subscribes at most once and removal of an absent device is a
/// no-op. Both operations report whether the set changed.
#[derive(Debug, Default)]
pub struct WeatherStation {
    displays: Vec<DisplayDevice>,
    current: Option<WeatherSample>,
}

impl WeatherStation {
    pub fn new() -> Self {
        WeatherStation {
            displays: Vec::new(),
            current: None,
        }
    }

    /// Add a display unless it is already subscribed. Returns whether the
    /// subscription was added.
    pub fn subscribe(&mut self, kind: DisplayKind) -> bool {
        if self.displays.iter().any(|d| d.kind == kind) {
            return false;
        }
        self.displays.push(DisplayDevice::new(kind));
        println!("   Observer subscribed: {}", kind.name());
        true
    }

    /// Remove a display. Returns whether it was subscribed in the first place.
    pub fn unsubscribe(&mut self, kind: DisplayKind) -> bool {
        match self.displays.iter().position(|d| d.kind == kind) {
            Some(position) => {
                self.displays.remove(position);
                println!("   Observer unsubscribed: {}", kind.name());
                true
            }
            None => false,
        }
    }

    /// Store a new sample and synchronously push it to every subscriber in
    /// subscription order.
    pub fn set_measurements(&mut self, temperature: f32, humidity: f32, pressure: f32) {
        self.current = Some(WeatherSample {
            temperature,
            humidity,
            pressure,
        });
        self.notify_observers();
    }

    pub fn notify_observers(&mut self) {
        if let Some(sample) = self.current {
            for display in &mut self.displays {
                display.update(sample);
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.displays.len()
    }

    /// Last sample delivered to the given display, if it is subscribed.
    pub fn last_reading_of(&self, kind: DisplayKind) -> Option<WeatherSample> {
        self.displays
            .iter()
            .find(|d| d.kind == kind)
            .and_then(|d| d.last_reading)
    }
}

// ============================================================================
// DEMO
// ============================================================================

/// Console walkthrough: three displays come online, the weather changes,
/// one display drops off, the weather changes again.
pub fn run() -> anyhow::Result<()> {
    println!("   Demonstrating Observer Pattern...");

    let mut station = WeatherStation::new();

    station.subscribe(DisplayKind::Phone);
    station.subscribe(DisplayKind::Tv);
    station.subscribe(DisplayKind::Web);

    println!("   Updating weather data...");
    station.set_measurements(25.5, 65.0, 1013.25);

    station.unsubscribe(DisplayKind::Tv);

    println!("   Updating weather data again...");
    station.set_measurements(28.0, 70.0, 1012.0);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscriber_receives_latest_sample() {
        let mut station = WeatherStation::new();
        assert!(station.subscribe(DisplayKind::Phone));

        station.set_measurements(25.5, 65.0, 1013.25);
        station.set_measurements(28.0, 70.0, 1012.0);

        let reading = station.last_reading_of(DisplayKind::Phone).unwrap();
        assert_eq!(reading.temperature, 28.0);
        assert_eq!(reading.humidity, 70.0);
        assert_eq!(reading.pressure, 1012.0);
    }

    #[test]
    fn test_unsubscribed_display_stops_receiving() {
        let mut station = WeatherStation::new();
        station.subscribe(DisplayKind::Phone);
        station.subscribe(DisplayKind::Tv);

        station.set_measurements(25.5, 65.0, 1013.25);
        assert!(station.unsubscribe(DisplayKind::Tv));

        station.set_measurements(28.0, 70.0, 1012.0);

        // The TV is gone from the set; only the phone saw the second sample.
        assert_eq!(station.last_reading_of(DisplayKind::Tv), None);
        assert_eq!(
            station.last_reading_of(DisplayKind::Phone).unwrap().temperature,
            28.0
        );
    }

    #[test]
    fn test_double_subscribe_keeps_one_entry() {
        let mut station = WeatherStation::new();
        assert!(station.subscribe(DisplayKind::Web));
        assert!(!station.subscribe(DisplayKind::Web));
        assert_eq!(station.subscriber_count(), 1);
    }

    #[test]
    fn test_unsubscribe_absent_is_noop() {
        let mut station = WeatherStation::new();
        assert!(!station.unsubscribe(DisplayKind::Phone));
        assert_eq!(station.subscriber_count(), 0);
    }

    #[test]
    fn test_delivery_in_subscription_order() {
        let mut station = WeatherStation::new();
        station.subscribe(DisplayKind::Web);
        station.subscribe(DisplayKind::Phone);

        station.set_measurements(20.0, 50.0, 1000.0);

        let kinds: Vec<DisplayKind> = station.displays.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![DisplayKind::Web, DisplayKind::Phone]);
    }
}
