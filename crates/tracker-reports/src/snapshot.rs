use sea_orm::{
    AccessMode, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, DbErr,
    IsolationLevel, RuntimeErr, TransactionTrait,
};

/// Open a read-only transaction that sees one consistent snapshot, so a list
/// cannot be unpublished halfway through a report.
///
/// SQLite has no per-transaction isolation settings; its transactions are
/// already serialisable.
pub async fn begin_read(db: &DatabaseConnection) -> Result<DatabaseTransaction, DbErr> {
    if matches!(db, DatabaseConnection::Disconnected) {
        return Err(DbErr::Conn(RuntimeErr::Internal(
            "database is disconnected".to_string(),
        )));
    }

    match db.get_database_backend() {
        DbBackend::Sqlite => db.begin().await,
        _ => {
            db.begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disconnected_store_fails_instead_of_panicking() {
        let result = begin_read(&DatabaseConnection::Disconnected).await;
        assert!(matches!(result, Err(DbErr::Conn(_))));
    }
}
