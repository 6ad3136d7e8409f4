use anyhow::{Context, Result};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-call configuration written by the provisioning service before the
/// call is connected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallConfig {
    /// Agent handling the call
    pub agent_id: Uuid,
    /// Workspace the call was dialed from, if any
    #[serde(default)]
    pub workspace_id: Option<Uuid>,
    /// System prompt provisioned for the call
    #[serde(default)]
    pub prompt: String,
}

/// Redis-backed reader for provisioned call configuration.
/// ConnectionManager multiplexes internally and is Clone; each operation
/// clones it to get a mutable handle.
#[derive(Clone)]
pub struct CallConfigCache {
    conn: ConnectionManager,
}

impl CallConfigCache {
    /// Connect to redis at the given URL
    pub async fn connect(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url).context("Invalid redis URL")?;
        let conn = ConnectionManager::new(client)
            .await
            .context("Failed to connect to redis")?;
        Ok(Self { conn })
    }

    fn key(call_sid: &str) -> String {
        format!("call_prompt:{call_sid}")
    }

    /// Fetch the provisioned configuration for a call, if present
    pub async fn get(&self, call_sid: &str) -> Result<Option<CallConfig>> {
        let mut conn = self.conn.clone();
        let data: Option<String> = conn
            .get(Self::key(call_sid))
            .await
            .context("Failed to fetch call config from redis")?;

        match data {
            Some(json) => {
                let config =
                    serde_json::from_str(&json).context("Failed to parse stored call config")?;
                Ok(Some(config))
            }
            None => Ok(None),
        }
    }

    /// Delete the provisioned configuration for a call. Returns whether a
    /// key was actually removed.
    pub async fn delete(&self, call_sid: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let removed: i64 = conn
            .del(Self::key(call_sid))
            .await
            .context("Failed to delete call config from redis")?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_config_from_provisioned_json() {
        let json = r#"{
            "agent_id": "7f2c1e9a-4b53-4a2e-9c1d-8e5f6a7b8c9d",
            "workspace_id": null,
            "prompt": "You are a friendly booking assistant."
        }"#;

        let config: CallConfig = serde_json::from_str(json).unwrap();

        assert_eq!(
            config.agent_id,
            "7f2c1e9a-4b53-4a2e-9c1d-8e5f6a7b8c9d".parse::<Uuid>().unwrap()
        );
        assert!(config.workspace_id.is_none());
        assert!(config.prompt.starts_with("You are"));
    }

    #[test]
    fn test_cache_key_format() {
        assert_eq!(CallConfigCache::key("CA123"), "call_prompt:CA123");
    }
}
