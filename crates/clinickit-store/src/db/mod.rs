//! Document store access layer.

mod appointments;
mod patients;

pub use appointments::AppointmentRepository;
pub use patients::PatientRepository;

use bson::doc;
use mongodb::{Client, Database};
use tracing::info;

use crate::config::{StoreConfig, DB_NAME};
use crate::error::{StoreError, StoreResult};

/// Handle to the clinic document store.
///
/// Constructed once at the composition root and passed to whoever needs a
/// repository; the driver client multiplexes all concurrent operations over
/// its own internal pool, so this layer adds no pooling, queuing, or
/// backpressure of its own. There is no explicit teardown: the connection
/// is released when the handle is dropped at process exit.
pub struct Store {
    client: Client,
    database: Database,
}

impl Store {
    /// Connect and verify the store is reachable.
    ///
    /// The driver establishes connections lazily, so a `ping` is issued here
    /// to make an unreachable store fail fast with
    /// [`StoreError::Connection`]. The attempt is not retried; recovery is
    /// left to the process supervisor.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(StoreError::Connection)?;
        let database = client.database(DB_NAME);
        database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(StoreError::Connection)?;
        info!(database = DB_NAME, "connected to document store");
        Ok(Self { client, database })
    }

    /// Repository over the patients collection.
    pub fn patients(&self) -> PatientRepository {
        PatientRepository::new(&self.database)
    }

    /// Repository over the appointments collection.
    pub fn appointments(&self) -> AppointmentRepository {
        AppointmentRepository::new(&self.database)
    }

    /// The underlying driver client (for advanced operations).
    pub fn client(&self) -> &Client {
        &self.client
    }
}
