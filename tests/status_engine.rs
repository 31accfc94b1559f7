use chrono::{DateTime, Duration, TimeZone, Utc, Weekday};
use store_status::{
    find_next_open_day, resolve, summarize, DaySchedule, ManualStatus, OverrideState,
    StatusConfig, StatusKind, StatusResolver, StatusResult, StoreRecord, WeeklySchedule,
};

const UTC_MINUS_SIX: i32 = -360;

/// Wall-clock time in UTC-6 on the given May 2024 day (13th is a Monday).
fn business(day: u32, hour: i64, minute: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, 6, 0, 0).unwrap()
        + Duration::hours(hour)
        + Duration::minutes(minute)
}

fn every_day(timing: DaySchedule) -> WeeklySchedule {
    let mut schedule = WeeklySchedule::new();
    let mut day = Weekday::Sun;
    for _ in 0..7 {
        schedule.set_day(day, timing.clone());
        day = day.succ();
    }
    schedule
}

fn eight_to_six() -> WeeklySchedule {
    every_day(DaySchedule::new_open("08:00", "18:00"))
}

#[test]
fn vacation_beats_any_schedule() {
    let schedules = [
        None,
        Some(eight_to_six()),
        Some(every_day(DaySchedule::new_closed())),
        Some(every_day(DaySchedule::new_open("nope", "18:00"))),
    ];
    let state = OverrideState::vacation(Some("Volvemos el 3 de junio".to_string()));
    for schedule in &schedules {
        for hour in [0, 9, 17, 23] {
            let result = resolve(
                schedule.as_ref(),
                &state,
                business(15, hour, 40),
                UTC_MINUS_SIX,
            );
            assert_eq!(
                result,
                StatusResult {
                    status: StatusKind::Vacation,
                    status_message: Some("Volvemos el 3 de junio".to_string()),
                    opens_at: None,
                    closes_at: None,
                }
            );
        }
    }
}

#[test]
fn vacation_without_message_uses_default_text() {
    let result = resolve(
        Some(&eight_to_six()),
        &OverrideState::vacation(None),
        business(15, 12, 0),
        UTC_MINUS_SIX,
    );
    assert_eq!(result.status, StatusKind::Vacation);
    assert_eq!(result.status_message.as_deref(), Some("Cerrado por vacaciones"));
}

#[test]
fn malformed_hours_degrade_to_closed_or_manual_status() {
    let broken = [
        DaySchedule::new_open("ocho", "18:00"),
        DaySchedule::new_open("08:00", "25:00"),
        DaySchedule {
            open: None,
            close: Some("18:00".to_string()),
            closed: false,
        },
        DaySchedule {
            open: None,
            close: None,
            closed: false,
        },
    ];
    for timing in broken {
        let schedule = every_day(timing);
        let closed = resolve(
            Some(&schedule),
            &OverrideState::none(),
            business(14, 10, 0),
            UTC_MINUS_SIX,
        );
        assert_eq!(
            closed,
            StatusResult {
                status: StatusKind::Closed,
                status_message: None,
                opens_at: None,
                closes_at: None,
            }
        );

        let manual = resolve(
            Some(&schedule),
            &OverrideState::manual(ManualStatus::Open),
            business(14, 10, 0),
            UTC_MINUS_SIX,
        );
        assert_eq!(manual.status, StatusKind::Open);
        assert_eq!(manual.status_message, None);
    }
}

#[test]
fn store_without_schedule() {
    let result = resolve(None, &OverrideState::none(), business(14, 10, 0), UTC_MINUS_SIX);
    assert_eq!(result.status, StatusKind::Closed);
    assert_eq!(result.status_message, None);

    let result = resolve(
        None,
        &OverrideState::manual(ManualStatus::Closed),
        business(14, 10, 0),
        UTC_MINUS_SIX,
    );
    assert_eq!(result.status, StatusKind::Closed);
}

#[test]
fn closing_minute_counts_as_closed() {
    let result = resolve(
        Some(&eight_to_six()),
        &OverrideState::none(),
        business(14, 18, 0),
        UTC_MINUS_SIX,
    );
    assert_eq!(result.status, StatusKind::Closed);
    assert_eq!(result.status_message.as_deref(), Some("Cerrado"));
    assert_eq!(result.opens_at.as_deref(), Some("Mié 08:00"));
    assert_eq!(result.closes_at, None);

    let before = resolve(
        Some(&eight_to_six()),
        &OverrideState::none(),
        business(14, 17, 59),
        UTC_MINUS_SIX,
    );
    assert_eq!(before.status, StatusKind::ClosingSoon);
}

#[test]
fn closing_soon_threshold() {
    let open = resolve(
        Some(&eight_to_six()),
        &OverrideState::none(),
        business(14, 17, 29),
        UTC_MINUS_SIX,
    );
    assert_eq!(open.status, StatusKind::Open);
    assert_eq!(open.status_message, None);
    assert_eq!(open.opens_at.as_deref(), Some("08:00"));
    assert_eq!(open.closes_at.as_deref(), Some("18:00"));

    let soon = resolve(
        Some(&eight_to_six()),
        &OverrideState::none(),
        business(14, 17, 30),
        UTC_MINUS_SIX,
    );
    assert_eq!(
        soon,
        StatusResult {
            status: StatusKind::ClosingSoon,
            status_message: Some("Cierra en 30 min".to_string()),
            opens_at: Some("08:00".to_string()),
            closes_at: Some("18:00".to_string()),
        }
    );

    // Inside the window, so 17:31 is closing soon as well
    let later = resolve(
        Some(&eight_to_six()),
        &OverrideState::none(),
        business(14, 17, 31),
        UTC_MINUS_SIX,
    );
    assert_eq!(later.status, StatusKind::ClosingSoon);
    assert_eq!(later.status_message.as_deref(), Some("Cierra en 29 min"));
}

#[test]
fn before_opening_messages() {
    let soon = resolve(
        Some(&eight_to_six()),
        &OverrideState::none(),
        business(14, 7, 15),
        UTC_MINUS_SIX,
    );
    assert_eq!(
        soon,
        StatusResult {
            status: StatusKind::Closed,
            status_message: Some("Abre en 45 min".to_string()),
            opens_at: Some("08:00".to_string()),
            closes_at: Some("18:00".to_string()),
        }
    );

    let early = resolve(
        Some(&eight_to_six()),
        &OverrideState::none(),
        business(14, 5, 0),
        UTC_MINUS_SIX,
    );
    assert_eq!(early.status_message.as_deref(), Some("Abre 08:00"));
}

#[test]
fn wednesday_only_store_queried_on_thursday() {
    let schedule = every_day(DaySchedule::new_closed())
        .with_day(Weekday::Wed, DaySchedule::new_open("10:00", "16:00"));

    let next = find_next_open_day(&schedule, Weekday::Thu).unwrap();
    assert_eq!(next.day, Weekday::Wed);
    assert_eq!(next.day_index, 3);

    // 2024-05-16 is a Thursday
    let result = resolve(
        Some(&schedule),
        &OverrideState::none(),
        business(16, 12, 0),
        UTC_MINUS_SIX,
    );
    assert_eq!(
        result,
        StatusResult {
            status: StatusKind::Closed,
            status_message: Some("Cerrado hoy".to_string()),
            opens_at: Some("Mié 10:00".to_string()),
            closes_at: None,
        }
    );
}

#[test]
fn fully_closed_store_never_reports_an_opening() {
    let schedule = every_day(DaySchedule::new_closed());
    let result = resolve(
        Some(&schedule),
        &OverrideState::none(),
        business(14, 12, 0),
        UTC_MINUS_SIX,
    );
    assert_eq!(result.status_message.as_deref(), Some("Cerrado hoy"));
    assert_eq!(result.opens_at, None);

    // Only Tuesday is open, and Tuesday is already over
    let tuesday_only = schedule.with_day(Weekday::Tue, DaySchedule::new_open("08:00", "12:00"));
    let result = resolve(
        Some(&tuesday_only),
        &OverrideState::none(),
        business(14, 15, 0),
        UTC_MINUS_SIX,
    );
    assert_eq!(result.status, StatusKind::Closed);
    assert_eq!(result.status_message.as_deref(), Some("Cerrado"));
    assert_eq!(result.opens_at, None);

    let unconfigured = resolve(
        Some(&WeeklySchedule::new()),
        &OverrideState::none(),
        business(14, 12, 0),
        UTC_MINUS_SIX,
    );
    assert_eq!(unconfigured.status_message.as_deref(), Some("Cerrado hoy"));
    assert_eq!(unconfigured.opens_at, None);
}

#[test]
fn resolving_twice_gives_the_same_result() {
    let schedule = eight_to_six();
    let state = OverrideState::none();
    let now = business(14, 17, 45);
    assert_eq!(
        resolve(Some(&schedule), &state, now, UTC_MINUS_SIX),
        resolve(Some(&schedule), &state, now, UTC_MINUS_SIX)
    );
}

#[test]
fn business_zone_not_utc_decides_the_day() {
    // Tuesday 02:00 UTC is still Monday 20:00 in UTC-6
    let schedule = WeeklySchedule::new()
        .with_day(Weekday::Mon, DaySchedule::new_open("19:00", "23:00"))
        .with_day(Weekday::Tue, DaySchedule::new_closed());
    let now = Utc.with_ymd_and_hms(2024, 5, 14, 2, 0, 0).unwrap();
    let result = resolve(Some(&schedule), &OverrideState::none(), now, UTC_MINUS_SIX);
    assert_eq!(result.status, StatusKind::Open);

    let in_utc = resolve(Some(&schedule), &OverrideState::none(), now, 0);
    assert_eq!(in_utc.status_message.as_deref(), Some("Cerrado hoy"));
    assert_eq!(in_utc.opens_at.as_deref(), Some("Lun 19:00"));
}

#[test]
fn resolves_stored_records() {
    let store = StoreRecord::from_json(
        r#"{
            "manualStatus": null,
            "vacationMessage": null,
            "schedule": {
                "monday":    { "open": "09:00", "close": "19:00", "closed": false },
                "tuesday":   { "open": "09:00", "close": "19:00", "closed": false },
                "wednesday": { "closed": true },
                "sunday":    { "open": null, "close": null, "closed": true }
            }
        }"#,
    )
    .unwrap();
    let resolver = StatusResolver::new(StatusConfig::from_config("{}").unwrap());

    let result = StatusResult::from(resolver.resolve_store(&store, business(15, 11, 0)));
    assert_eq!(result.status, StatusKind::Closed);
    assert_eq!(result.status_message.as_deref(), Some("Cerrado hoy"));
    assert_eq!(result.opens_at.as_deref(), Some("Lun 09:00"));

    let result = resolver.resolve_store(&store, business(13, 18, 50)).to_result();
    assert_eq!(result.status, StatusKind::ClosingSoon);
    assert_eq!(result.status_message.as_deref(), Some("Cierra en 10 min"));
}

#[test]
fn result_serializes_for_the_api() {
    let result = resolve(
        Some(&eight_to_six()),
        &OverrideState::none(),
        business(14, 17, 50),
        UTC_MINUS_SIX,
    );
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({
            "status": "CLOSING_SOON",
            "statusMessage": "Cierra en 10 min",
            "opensAt": "08:00",
            "closesAt": "18:00"
        })
    );
}

#[test]
fn summary_of_stored_schedule() {
    let schedule = WeeklySchedule::from_json(
        r#"{ "saturday": { "open": "10:00", "close": "14:00", "closed": false } }"#,
    )
    .unwrap();
    let summary = summarize(Some(&schedule)).unwrap();
    let closed: Vec<bool> = summary.iter().map(|day| day.closed).collect();
    assert_eq!(closed, [true, true, true, true, true, false, true]);
    assert_eq!(summary[5].label, "Sábado");
    assert_eq!(summary[5].open.as_deref(), Some("10:00"));
    assert_eq!(summarize(None), None);
}

#[test]
fn padded_and_single_digit_times_come_out_as_hh_mm() {
    let schedule = WeeklySchedule::new()
        .with_day(Weekday::Mon, DaySchedule::new_closed())
        .with_day(Weekday::Tue, DaySchedule::new_open(" 9:00 ", "18:00"));

    let result = resolve(
        Some(&schedule),
        &OverrideState::none(),
        business(13, 19, 0),
        UTC_MINUS_SIX,
    );
    assert_eq!(result.opens_at.as_deref(), Some("Mar 09:00"));

    let result = resolve(
        Some(&schedule),
        &OverrideState::none(),
        business(14, 5, 0),
        UTC_MINUS_SIX,
    );
    assert_eq!(
        result,
        StatusResult {
            status: StatusKind::Closed,
            status_message: Some("Abre 09:00".to_string()),
            opens_at: Some("09:00".to_string()),
            closes_at: Some("18:00".to_string()),
        }
    );
}
