//! Request-scoped unit of work.
//!
//! A [`Session`] owns one pooled connection inside a transaction for the
//! lifetime of a single request. Committing consumes it. Dropping it without
//! a commit rolls the transaction back and hands the connection back to the
//! pool, so every exit path (early `?` return, handler error, panic unwind)
//! releases it.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    /// Acquire a connection from the pool and open a transaction on it.
    pub async fn begin(pool: &PgPool) -> Result<Self, sqlx::Error> {
        let tx = pool.begin().await?;
        tracing::trace!("Session opened");
        Ok(Self { tx })
    }

    /// The connection repositories run their queries on.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Commit all work done through this session.
    pub async fn commit(self) -> Result<(), sqlx::Error> {
        self.tx.commit().await?;
        tracing::trace!("Session committed");
        Ok(())
    }
}
