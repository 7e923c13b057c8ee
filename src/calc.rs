use crate::time_value::TimeValue;
use crate::types::CalculationPayload;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Clock time `minutes` after midnight, wrapped into one day.
fn clock(minutes: i64) -> TimeValue {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
    TimeValue::new((wrapped / 60) as u32, (wrapped % 60) as u32)
}

/// Leave times for a working day.
///
/// The regular end is start + work + lunch; the overtime goal is worked on top
/// of it and the comp-time goal is taken off it.
pub fn summarize(payload: &CalculationPayload) -> String {
    let regular_end = payload.start.total_minutes()
        + payload.work.total_minutes()
        + payload.lunch.total_minutes();
    let with_overtime = regular_end + payload.ot.total_minutes();
    let with_comp_time = regular_end - payload.ct.total_minutes();

    format!(
        "Regular end: {}\nWith overtime: {} (+{})\nWith comp time: {} (-{})",
        clock(regular_end),
        clock(with_overtime),
        payload.ot,
        clock(with_comp_time),
        payload.ct,
    )
}
