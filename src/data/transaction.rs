use std::time::Instant;

use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseTransaction, DbBackend, DbErr, IsolationLevel,
    TransactionTrait,
};
use tracing::debug;

/// Isolation level and access mode requested when a transaction begins.
#[derive(Clone, Debug)]
pub struct TransactionOptions {
    pub isolation_level: IsolationLevel,
    pub access_mode: AccessMode,
}

impl TransactionOptions {
    pub fn read_write(isolation_level: IsolationLevel) -> Self {
        Self {
            isolation_level,
            access_mode: AccessMode::ReadWrite,
        }
    }

    pub fn read_only(isolation_level: IsolationLevel) -> Self {
        Self {
            isolation_level,
            access_mode: AccessMode::ReadOnly,
        }
    }

    /// Options actually passed to the driver for the given backend.
    ///
    /// SQLite has no per-transaction isolation or access mode (its transactions are always
    /// serializable), so nothing is requested there.
    fn for_backend(&self, backend: DbBackend) -> (Option<IsolationLevel>, Option<AccessMode>) {
        match backend {
            DbBackend::Sqlite => (None, None),
            _ => (
                Some(self.isolation_level.clone()),
                Some(self.access_mode.clone()),
            ),
        }
    }
}

impl Default for TransactionOptions {
    fn default() -> Self {
        Self::read_write(IsolationLevel::ReadCommitted)
    }
}

/// Wrapper around [`DatabaseTransaction`] that tracks which unit it belongs to and when it
/// was started.
///
/// The transaction is released exactly once: [`commit`](Self::commit) and
/// [`rollback`](Self::rollback) consume the wrapper, and dropping it without either rolls the
/// transaction back.
pub struct TrackedTransaction {
    txn: DatabaseTransaction,
    description: String,
    pub created_at: Instant,
}

impl TrackedTransaction {
    /// Begin a transaction for the unit described by `description`.
    pub async fn begin<C>(
        db: &C,
        options: &TransactionOptions,
        description: &str,
    ) -> Result<Self, DbErr>
    where
        C: ConnectionTrait + TransactionTrait<Transaction = DatabaseTransaction>,
    {
        let (isolation_level, access_mode) = options.for_backend(db.get_database_backend());
        let txn = db.begin_with_config(isolation_level, access_mode).await?;

        debug!("STARTED transaction for {}", description);

        Ok(Self {
            txn,
            description: description.to_string(),
            created_at: Instant::now(),
        })
    }

    pub async fn commit(self) -> Result<(), DbErr> {
        let Self {
            txn,
            description,
            created_at,
        } = self;

        txn.commit().await?;

        debug!(
            "COMMITTED transaction for {} after {:?}",
            description,
            created_at.elapsed()
        );

        Ok(())
    }

    pub async fn rollback(self) -> Result<(), DbErr> {
        let Self {
            txn,
            description,
            created_at,
        } = self;

        txn.rollback().await?;

        debug!(
            "ROLLED_BACK transaction for {} after {:?}",
            description,
            created_at.elapsed()
        );

        Ok(())
    }

    /// Get a reference to the underlying transaction
    pub fn as_ref(&self) -> &DatabaseTransaction {
        &self.txn
    }
}
