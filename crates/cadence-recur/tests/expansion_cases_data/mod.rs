use chrono::NaiveDate;

pub struct ExpansionCase {
    pub name: &'static str,
    pub definition: &'static str,
    pub exceptions: &'static str,
    pub start_range: &'static str,
    pub end_range: &'static str,
    pub expected: &'static [&'static str],
}

impl ExpansionCase {
    pub fn start(&self) -> NaiveDate {
        self.start_range.parse().expect("valid case start")
    }

    pub fn end(&self) -> NaiveDate {
        self.end_range.parse().expect("valid case end")
    }
}

#[expect(clippy::too_many_lines)]
pub fn expansion_cases() -> Vec<ExpansionCase> {
    vec![
        ExpansionCase {
            name: "daily_basic",
            definition: r#"{
                "id": "daily", "title": "Standup", "startTime": "09:00", "endTime": "09:15",
                "timezone": "UTC", "startDate": "2024-01-01", "organizer": "1",
                "createdAt": "2023-12-01T12:00:00Z",
                "recurrencePattern": {"type": "daily", "interval": 1, "endType": "never"}
            }"#,
            exceptions: "[]",
            start_range: "2024-01-01",
            end_range: "2024-01-04",
            expected: &["2024-01-01", "2024-01-02", "2024-01-03"],
        },
        ExpansionCase {
            name: "weekly_multi_day",
            definition: r#"{
                "id": "weekly", "title": "Sync", "startTime": "10:00", "endTime": "11:00",
                "timezone": "America/New_York", "startDate": "2024-01-01", "organizer": "1",
                "createdAt": "2023-12-01T12:00:00Z",
                "recurrencePattern": {"type": "weekly", "interval": 1, "daysOfWeek": [1, 3], "endType": "never"}
            }"#,
            exceptions: "[]",
            start_range: "2024-01-01",
            end_range: "2024-01-15",
            expected: &["2024-01-01", "2024-01-03", "2024-01-08", "2024-01-10"],
        },
        ExpansionCase {
            name: "weekly_cancellation",
            definition: r#"{
                "id": "weekly", "title": "Sync", "startTime": "10:00", "endTime": "11:00",
                "timezone": "America/New_York", "startDate": "2024-01-01", "organizer": "1",
                "createdAt": "2023-12-01T12:00:00Z",
                "recurrencePattern": {"type": "weekly", "interval": 1, "daysOfWeek": [1, 3], "endType": "never"}
            }"#,
            exceptions: r#"[{"date": "2024-01-03", "isCancelled": true}]"#,
            start_range: "2024-01-01",
            end_range: "2024-01-15",
            expected: &["2024-01-01", "2024-01-08", "2024-01-10"],
        },
        ExpansionCase {
            name: "biweekly_design_review",
            definition: r#"{
                "id": "rm2", "title": "Design Review", "startTime": "14:00", "endTime": "15:30",
                "timezone": "America/New_York", "startDate": "2023-06-07", "organizer": "2",
                "createdAt": "2023-06-01T12:00:00Z",
                "recurrencePattern": {"type": "biweekly", "interval": 1, "daysOfWeek": [3], "endType": "never"}
            }"#,
            exceptions: "[]",
            start_range: "2023-06-01",
            end_range: "2023-08-01",
            expected: &["2023-06-07", "2023-06-21", "2023-07-05", "2023-07-19"],
        },
        ExpansionCase {
            name: "monthly_clamp_leap_year",
            definition: r#"{
                "id": "monthly", "title": "Close", "startTime": "16:00", "endTime": "17:00",
                "timezone": "Europe/Berlin", "startDate": "2024-01-31", "organizer": "3",
                "createdAt": "2023-12-01T12:00:00Z",
                "recurrencePattern": {"type": "monthly", "interval": 1, "dayOfMonth": 31,
                    "endType": "after", "endAfterOccurrences": 4}
            }"#,
            exceptions: "[]",
            start_range: "2024-01-01",
            end_range: "2025-01-01",
            expected: &["2024-01-31", "2024-02-29", "2024-03-31", "2024-04-30"],
        },
        ExpansionCase {
            name: "quarterly_end_on",
            definition: r#"{
                "id": "quarterly", "title": "Board", "startTime": "09:00", "endTime": "12:00",
                "timezone": "UTC", "startDate": "2023-11-30", "organizer": "3",
                "createdAt": "2023-11-01T12:00:00Z",
                "recurrencePattern": {"type": "monthly", "interval": 3, "dayOfMonth": 30,
                    "endType": "on", "endDate": "2024-08-30"}
            }"#,
            exceptions: "[]",
            start_range: "2023-01-01",
            end_range: "2025-01-01",
            expected: &["2023-11-30", "2024-02-29", "2024-05-30", "2024-08-30"],
        },
        ExpansionCase {
            name: "yearly_review",
            definition: r#"{
                "id": "yearly", "title": "Annual Review", "startTime": "13:00", "endTime": "14:00",
                "timezone": "UTC", "startDate": "2023-03-15", "organizer": "4",
                "createdAt": "2023-01-01T12:00:00Z",
                "recurrencePattern": {"type": "yearly", "interval": 1, "monthOfYear": 3,
                    "dayOfMonth": 15, "endType": "never"}
            }"#,
            exceptions: r#"[{"date": "2025-03-15", "isCancelled": false, "changes": {"location": "Offsite"}}]"#,
            start_range: "2024-01-01",
            end_range: "2027-01-01",
            expected: &["2024-03-15", "2025-03-15", "2026-03-15"],
        },
        ExpansionCase {
            name: "after_count_before_window",
            definition: r#"{
                "id": "short", "title": "Onboarding", "startTime": "09:00", "endTime": "10:00",
                "timezone": "UTC", "startDate": "2024-01-01", "organizer": "1",
                "createdAt": "2023-12-01T12:00:00Z",
                "recurrencePattern": {"type": "daily", "interval": 2,
                    "endType": "after", "endAfterOccurrences": 3}
            }"#,
            exceptions: "[]",
            start_range: "2024-02-01",
            end_range: "2024-03-01",
            expected: &[],
        },
    ]
}
