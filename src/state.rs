use sea_orm::DatabaseConnection;

/// Shared handler state. Each request borrows the connection pool and
/// releases its connection when the handler returns.
#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
}

impl AppState {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self { orm }
    }
}
