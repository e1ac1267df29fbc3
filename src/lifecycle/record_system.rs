use tracing::{error, info};

use crate::clients::RecordClient;
use crate::config::ServiceConfig;
use crate::model::{TaxRecordCreate, Tid};
use crate::record_actor::ServiceError;

/// Owns the running record actor.
///
/// # Example
///
/// ```ignore
/// let system = RecordSystem::new(&config.service);
/// system.seed(&config.seed).await?;
///
/// let mut browser = RecordBrowser::new(system.record_client.clone());
/// browser.mount().await;
///
/// drop(browser);
/// system.shutdown().await?;
/// ```
pub struct RecordSystem {
    /// Client for interacting with the record actor
    pub record_client: RecordClient,

    /// Task handle for the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl RecordSystem {
    /// Creates the record actor and spawns it on the current Tokio runtime.
    pub fn new(config: &ServiceConfig) -> Self {
        let (record_actor, record_client) =
            crate::record_actor::new(config.buffer_size, config.first_tid);
        let handle = tokio::spawn(record_actor.run(()));

        Self {
            record_client,
            handle,
        }
    }

    /// Adds each record in order, stopping at the first failure.
    pub async fn seed(&self, records: &[TaxRecordCreate]) -> Result<Vec<Tid>, ServiceError> {
        let mut tids = Vec::with_capacity(records.len());
        for params in records {
            tids.push(self.record_client.create_record(params.clone()).await?);
        }
        if !tids.is_empty() {
            info!(count = tids.len(), "Seeded tax records");
        }
        Ok(tids)
    }

    /// Gracefully shuts down the record actor.
    ///
    /// Dropping the last client closes the channel and ends the actor loop, so
    /// every clone handed out (e.g. to a browser) must be dropped first or this
    /// waits forever.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.record_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
