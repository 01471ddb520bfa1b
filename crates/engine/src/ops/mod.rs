use sea_orm::DatabaseConnection;

use crate::ResultEngine;

mod access;
mod forecast;
mod goals;
mod transactions;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
///
/// Reads go through it too: a forecast must see the user's balance and the
/// transaction set as one snapshot.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// Entry point to the transaction/goal store and the forecast service.
///
/// Holds no per-user state: every call reads what it needs inside its own DB
/// transaction, so one `Engine` can be shared across concurrent requests.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
