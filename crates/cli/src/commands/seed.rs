//! Development seed data.
//!
//! Wipes every trip (cascading to budgets, expenses, plans and activities)
//! and loads two sample trips. Expenses go through `ExpenseService` so each
//! seeded budget's `spent` matches its expenses.

use anyhow::{Result, bail};
use chrono::{DateTime, Duration, TimeZone as _, Utc};
use voyage_core::{
    ActivityInput, BudgetInput, DailyPlanInput, Decimal, ExpenseInput, ExpenseType, TripInput,
    TripStatus,
};
use voyage_http::AppState;

use crate::open_state;

struct SampleTrip {
    destination: &'static str,
    start: (i32, u32, u32),
    days: i64,
    status: TripStatus,
    flight: Option<&'static str>,
    lodging: Option<&'static str>,
    /// daily, pre-trip, total; in cents
    budget: (i64, i64, i64),
    expenses: &'static [(&'static str, i64, ExpenseType)],
    /// day number, activities as (title, time, budget in cents)
    plans: &'static [(i32, &'static [(&'static str, Option<&'static str>, i64)])],
}

const SAMPLES: &[SampleTrip] = &[
    SampleTrip {
        destination: "Paris",
        start: (2025, 6, 1),
        days: 4,
        status: TripStatus::Booked,
        flight: Some("AF 1234"),
        lodging: Some("Hotel du Nord"),
        budget: (15_000, 80_000, 140_000),
        expenses: &[
            ("Return flight", 42_000, ExpenseType::PreTrip),
            ("Museum pass", 7_800, ExpenseType::PreTrip),
            ("Dinner in Le Marais", 6_450, ExpenseType::Daily),
        ],
        plans: &[
            (1, &[("Check in", Some("15:00"), 0), ("Seine walk", Some("18:30"), 0)]),
            (2, &[("Louvre", Some("09:00"), 2_200), ("Picnic lunch", None, 1_500)]),
        ],
    },
    SampleTrip {
        destination: "Kyoto",
        start: (2025, 10, 12),
        days: 6,
        status: TripStatus::Planning,
        flight: None,
        lodging: Some("Machiya near Gion"),
        budget: (20_000, 150_000, 270_000),
        expenses: &[("Rail pass", 33_000, ExpenseType::PreTrip)],
        plans: &[(1, &[("Fushimi Inari at dawn", Some("06:00"), 0)])],
    },
];

pub(crate) async fn run() -> Result<()> {
    if std::env::var("VOYAGE_ENV").as_deref() != Ok("development") {
        bail!("seed wipes all data; set VOYAGE_ENV=development to run it");
    }
    let state = open_state().await?;

    let removed = state.trip_service.clear().await?;
    tracing::info!(removed, "Cleared existing trips");

    for sample in SAMPLES {
        seed_trip(&state, sample).await?;
    }
    tracing::info!(trips = SAMPLES.len(), "Seed complete");
    Ok(())
}

async fn seed_trip(state: &AppState, sample: &SampleTrip) -> Result<()> {
    let start_date = date(sample.start)?;
    let trip = state
        .trip_service
        .create(TripInput {
            destination: sample.destination.to_owned(),
            start_date,
            end_date: start_date + Duration::days(sample.days),
            flight: sample.flight.map(str::to_owned),
            lodging: sample.lodging.map(str::to_owned),
            transportation: None,
            status: sample.status,
        })
        .await?;

    let (daily, pre_trip, total) = sample.budget;
    let budget = state
        .budget_service
        .update(
            &trip.id,
            BudgetInput {
                daily: cents(daily),
                pre_trip: cents(pre_trip),
                spent: Decimal::ZERO,
                total: cents(total),
            },
        )
        .await?;

    for &(description, amount, expense_type) in sample.expenses {
        state
            .expense_service
            .create(ExpenseInput {
                budget_id: budget.id.clone(),
                amount: cents(amount),
                description: description.to_owned(),
                expense_type,
            })
            .await?;
    }

    for &(day_number, activities) in sample.plans {
        let plan = state
            .daily_plan_service
            .create(DailyPlanInput {
                trip_id: trip.id.clone(),
                date: Some(start_date + Duration::days(i64::from(day_number - 1))),
                day_number: Some(day_number),
            })
            .await?;
        for &(title, time, budget) in activities {
            state
                .activity_service
                .create(ActivityInput {
                    daily_plan_id: plan.plan.id.clone(),
                    title: title.to_owned(),
                    description: None,
                    time: time.map(str::to_owned),
                    budget: cents(budget),
                })
                .await?;
        }
    }

    tracing::info!(trip_id = %trip.id, destination = sample.destination, "Seeded trip");
    Ok(())
}

fn cents(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

fn date((year, month, day): (i32, u32, u32)) -> Result<DateTime<Utc>> {
    match Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single() {
        Some(instant) => Ok(instant),
        None => bail!("invalid seed date {year}-{month}-{day}"),
    }
}
