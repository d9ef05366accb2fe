// ⚙️ Configuration Manager
// One process-wide settings instance, constructed lazily on first access

use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::{OnceLock, RwLock};
use uuid::Uuid;

/// Sentinel returned by `get_setting` for a key that was never stored.
/// A miss is an answer, not an error.
pub const SETTING_NOT_FOUND: &str = "not set";

static INSTANCE: OnceLock<ConfigurationManager> = OnceLock::new();

/// Process-wide settings store. The `OnceLock` guarantees at-most-one
/// construction even if the first accesses race; everything after that is
/// reads and writes through the inner lock.
#[derive(Debug)]
pub struct ConfigurationManager {
    instance_id: Uuid,
    settings: RwLock<BTreeMap<String, String>>,
}

impl ConfigurationManager {
    fn new() -> Self {
        ConfigurationManager {
            instance_id: Uuid::new_v4(),
            settings: RwLock::new(BTreeMap::new()),
        }
    }

    /// The single instance. First call constructs it; every later call
    /// returns the same reference.
    pub fn instance() -> &'static ConfigurationManager {
        INSTANCE.get_or_init(ConfigurationManager::new)
    }

    /// Identity assigned at construction. Two handles to the instance always
    /// report the same id.
    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn set_setting(&self, key: &str, value: &str) {
        let mut settings = self.settings.write().unwrap();
        settings.insert(key.to_string(), value.to_string());
    }

    /// Stored value for `key`, or [`SETTING_NOT_FOUND`].
    pub fn get_setting(&self, key: &str) -> String {
        let settings = self.settings.read().unwrap();
        settings
            .get(key)
            .cloned()
            .unwrap_or_else(|| SETTING_NOT_FOUND.to_string())
    }

    /// Current settings as JSON. Keys come out in map order, so the snapshot
    /// is stable for identical contents.
    pub fn snapshot_json(&self) -> Result<String> {
        let settings = self.settings.read().unwrap();
        Ok(serde_json::to_string(&*settings)?)
    }
}

// ============================================================================
// DEMO
// ============================================================================

/// Console walkthrough: two accessor calls, proof they are the same
/// instance, settings written through one handle and read through the other.
pub fn run() -> Result<()> {
    println!("   Demonstrating Singleton Pattern...");

    let config1 = ConfigurationManager::instance();
    let config2 = ConfigurationManager::instance();

    println!("   Config1 ID: {}", config1.instance_id());
    println!("   Config2 ID: {}", config2.instance_id());
    println!("   Same instance? {}", std::ptr::eq(config1, config2));

    config1.set_setting("Database", "localhost");
    config1.set_setting("Port", "5432");

    println!("   Database: {}", config2.get_setting("Database"));
    println!("   Port: {}", config2.get_setting("Port"));
    println!("   Snapshot: {}", config1.snapshot_json()?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: the instance is genuinely global, so each test uses its own keys.

    #[test]
    fn test_accessor_returns_identical_references() {
        let a = ConfigurationManager::instance();
        let b = ConfigurationManager::instance();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.instance_id(), b.instance_id());
    }

    #[test]
    fn test_write_via_one_handle_visible_via_other() {
        let writer = ConfigurationManager::instance();
        let reader = ConfigurationManager::instance();

        writer.set_setting("test_visibility_key", "shared");
        assert_eq!(reader.get_setting("test_visibility_key"), "shared");
    }

    #[test]
    fn test_missing_key_yields_sentinel() {
        let config = ConfigurationManager::instance();
        assert_eq!(config.get_setting("test_never_written"), SETTING_NOT_FOUND);
    }

    #[test]
    fn test_snapshot_contains_written_setting() {
        let config = ConfigurationManager::instance();
        config.set_setting("test_snapshot_key", "42");

        let snapshot = config.snapshot_json().unwrap();
        assert!(snapshot.contains("\"test_snapshot_key\":\"42\""));
    }
}
