//! Shared fixtures for the behavioral specs

use serde::{Deserialize, Serialize};
use serde_json::json;
use silt_core::{Aggregate, EntityCore, EntityError, EventRecord};
use silt_repo::{Repository, RepositoryConfig};
use silt_store::MemoryStore;

/// Running-total counter entity
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Counter {
    pub core: EntityCore,
    pub total: i64,
    #[serde(skip)]
    pub delivered: Vec<String>,
}

impl Counter {
    pub fn with_id(id: &str) -> Self {
        let mut counter = Self::default();
        counter.init(id);
        counter
    }

    pub fn init(&mut self, id: &str) {
        self.core.id = id.to_string();
        self.core.digest("init", vec![json!(id)]);
        self.core.enqueue("initialized", vec![json!(id)]);
    }

    pub fn add_one(&mut self) {
        self.total += 1;
        self.core.digest("addOne", vec![]);
    }

    pub fn add(&mut self, amount: i64) {
        self.total += amount;
        self.core.digest("add", vec![json!(amount)]);
    }
}

impl Aggregate for Counter {
    const KIND: &'static str = "counter";

    fn core(&self) -> &EntityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn replay_event(&mut self, record: &EventRecord) -> Result<(), EntityError> {
        match record.method.as_str() {
            "init" => {
                self.core.id = record
                    .params
                    .first()
                    .and_then(|v| v.as_str())
                    .unwrap_or_default()
                    .to_string();
            }
            "addOne" => self.total += 1,
            "add" => {
                self.total += record.params.first().and_then(|v| v.as_i64()).unwrap_or(0);
            }
            other => {
                return Err(EntityError::Replay {
                    version: record.version,
                    reason: format!("unknown method: {other}"),
                })
            }
        }
        Ok(())
    }

    fn snapshot(&self) -> Result<serde_json::Value, EntityError> {
        Ok(serde_json::to_value(self)?)
    }

    fn restore(payload: serde_json::Value) -> Result<Self, EntityError> {
        Ok(serde_json::from_value(payload)?)
    }

    fn notify(&mut self, name: &str, _args: &[serde_json::Value]) {
        self.delivered.push(name.to_string());
    }
}

/// Counter repository over a shared in-memory store
pub fn counter_repo(store: &MemoryStore, frequency: u64) -> Repository<Counter, MemoryStore> {
    let config = RepositoryConfig::new("entities").with_snapshot_frequency(frequency);
    Repository::new(store.clone(), config)
}
