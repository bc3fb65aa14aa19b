//! Loaded configurations, one per tenant
//!
//! Several applications can share one process. Each passes its own
//! `TenantId` and gets back the configuration loaded for it; nothing is
//! inferred from the calling thread.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use log::debug;

use crate::error::{Error, Result};
use crate::phases::orchestrator::LoadedConfig;

/// Opaque key of one deployment unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TenantId(String);

impl TenantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Registry of loaded configurations keyed by tenant.
#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    entries: Arc<Mutex<HashMap<TenantId, Arc<LoadedConfig>>>>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<TenantId, Arc<LoadedConfig>>>> {
        self.entries.lock().map_err(|_| Error::LockPoisoned {
            context: "configuration registry".to_string(),
        })
    }

    /// Returns the tenant's configuration, loading it on first use.
    ///
    /// The loader runs without the lock held. When two callers load the
    /// same tenant concurrently, the first stored result is kept and
    /// returned to both.
    pub fn get_or_load<F>(&self, tenant: &TenantId, loader: F) -> Result<Arc<LoadedConfig>>
    where
        F: FnOnce() -> Result<LoadedConfig>,
    {
        if let Some(loaded) = self.get(tenant)? {
            return Ok(loaded);
        }

        debug!("Loading configuration for tenant {}", tenant);
        let loaded = Arc::new(loader()?);

        let mut entries = self.lock()?;
        Ok(Arc::clone(
            entries.entry(tenant.clone()).or_insert(loaded),
        ))
    }

    pub fn get(&self, tenant: &TenantId) -> Result<Option<Arc<LoadedConfig>>> {
        Ok(self.lock()?.get(tenant).cloned())
    }

    /// Stores a configuration, replacing any previous one.
    pub fn insert(&self, tenant: TenantId, loaded: LoadedConfig) -> Result<()> {
        self.lock()?.insert(tenant, Arc::new(loaded));
        Ok(())
    }

    /// Drops the tenant's configuration, returning it if one was loaded.
    pub fn release(&self, tenant: &TenantId) -> Result<Option<Arc<LoadedConfig>>> {
        let released = self.lock()?.remove(tenant);
        if released.is_some() {
            debug!("Released configuration for tenant {}", tenant);
        }
        Ok(released)
    }

    /// Registered tenants, sorted.
    pub fn tenants(&self) -> Result<Vec<TenantId>> {
        let mut tenants: Vec<TenantId> = self.lock()?.keys().cloned().collect();
        tenants.sort();
        Ok(tenants)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }
}
