use std::sync::Arc;

use async_trait::async_trait;
use futures::future::BoxFuture;
use sqlx::{PgPool, Postgres, Transaction};
use tokio::sync::Mutex;
use tracing::debug;

use crate::application::{
    app_error::{AppError, AppResult},
    interface::db::DBSession,
};

struct SessionState {
    pool: PgPool,
    transaction: Option<Transaction<'static, Postgres>>,
}

/// Per-request unit of work. The transaction is opened by the first gateway
/// call and shared by every gateway built from the same session.
#[derive(Clone)]
pub struct SqlxSession {
    state: Arc<Mutex<SessionState>>,
}

impl SqlxSession {
    pub fn new_lazy(pool: PgPool) -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState {
                pool,
                transaction: None,
            })),
        }
    }

    pub async fn with_tx<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(&'a mut Transaction<'static, Postgres>) -> BoxFuture<'a, AppResult<T>>,
    {
        let mut state = self.state.lock().await;
        if state.transaction.is_none() {
            let tx = state.pool.begin().await?;
            state.transaction = Some(tx);
        }
        let tx = state
            .transaction
            .as_mut()
            .ok_or(AppError::DatabaseError(sqlx::Error::PoolClosed))?;
        f(tx).await
    }
}

#[async_trait]
impl DBSession for SqlxSession {
    async fn commit(&self) -> AppResult<()> {
        let mut state = self.state.lock().await;
        if let Some(tx) = state.transaction.take() {
            tx.commit().await?;
        }
        Ok(())
    }

    async fn rollback(&self) -> AppResult<()> {
        let mut state = self.state.lock().await;
        match state.transaction.take() {
            Some(tx) => tx.rollback().await?,
            None => debug!("Rollback requested without an open transaction"),
        }
        Ok(())
    }
}
