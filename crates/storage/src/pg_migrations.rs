//! PostgreSQL schema migrations for voyage storage.

use sqlx::PgPool;

const TABLES: [&str; 5] = [
    r#"
    CREATE TABLE IF NOT EXISTS trips (
        id TEXT PRIMARY KEY,
        destination TEXT NOT NULL,
        start_date TIMESTAMPTZ NOT NULL,
        end_date TIMESTAMPTZ NOT NULL,
        flight TEXT,
        lodging TEXT,
        transportation TEXT,
        status TEXT NOT NULL DEFAULT 'Idea',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS budgets (
        id TEXT PRIMARY KEY,
        trip_id TEXT NOT NULL UNIQUE REFERENCES trips(id) ON DELETE CASCADE,
        daily NUMERIC NOT NULL DEFAULT 0,
        pre_trip NUMERIC NOT NULL DEFAULT 0,
        spent NUMERIC NOT NULL DEFAULT 0,
        total NUMERIC NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS expenses (
        id TEXT PRIMARY KEY,
        budget_id TEXT NOT NULL REFERENCES budgets(id) ON DELETE CASCADE,
        amount NUMERIC NOT NULL,
        description TEXT NOT NULL,
        expense_type TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS daily_plans (
        id TEXT PRIMARY KEY,
        trip_id TEXT NOT NULL REFERENCES trips(id) ON DELETE CASCADE,
        date TIMESTAMPTZ,
        day_number INTEGER,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS activities (
        id TEXT PRIMARY KEY,
        daily_plan_id TEXT NOT NULL REFERENCES daily_plans(id) ON DELETE CASCADE,
        title TEXT NOT NULL,
        description TEXT,
        time TEXT,
        budget NUMERIC NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
];

const INDEXES: [&str; 4] = [
    "CREATE INDEX IF NOT EXISTS idx_trips_start_date ON trips (start_date)",
    "CREATE INDEX IF NOT EXISTS idx_expenses_budget ON expenses (budget_id, created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_daily_plans_trip ON daily_plans (trip_id, day_number)",
    "CREATE INDEX IF NOT EXISTS idx_activities_daily_plan ON activities (daily_plan_id, time)",
];

/// Run all PostgreSQL migrations. Every statement is idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    for sql in TABLES.iter().chain(INDEXES.iter()) {
        sqlx::query(sql).execute(pool).await?;
    }
    tracing::info!("PostgreSQL schema up to date");
    Ok(())
}
