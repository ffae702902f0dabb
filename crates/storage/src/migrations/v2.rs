//! Migration v2: indexes backing foreign-key lookups and list ordering

pub(super) const SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_trips_start_date ON trips(start_date);
CREATE INDEX IF NOT EXISTS idx_expenses_budget ON expenses(budget_id, created_at);
CREATE INDEX IF NOT EXISTS idx_daily_plans_trip ON daily_plans(trip_id, day_number);
CREATE INDEX IF NOT EXISTS idx_activities_daily_plan ON activities(daily_plan_id, time);
";
