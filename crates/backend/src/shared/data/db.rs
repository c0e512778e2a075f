use std::path::Path;

use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

/// Подключение к sqlite и минимальный bootstrap схемы. Соединение
/// возвращается вызывающему и дальше передаётся явно через конструкторы,
/// без глобального состояния.
pub async fn initialize_database(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    let conn = Database::connect(&db_url).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

/// Создание таблицы product, если её ещё нет.
pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let check_product_table = r#"
        SELECT name FROM sqlite_master
        WHERE type='table' AND name='product';
    "#;
    let product_table_exists = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_product_table.to_string(),
        ))
        .await?;

    if product_table_exists.is_empty() {
        tracing::info!("Creating product table");
        // Кроме id все колонки nullable: обязательность полей обеспечивает
        // валидатор, а не схема
        let create_product_table_sql = r#"
            CREATE TABLE product (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT,
                price REAL,
                short_desc TEXT,
                long_desc TEXT,
                thumbnail TEXT,
                image TEXT,
                created_on TEXT,
                updated_on TEXT,
                deleted_on TEXT,
                active INTEGER
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_product_table_sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}
