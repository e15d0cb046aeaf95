//! Amortization schedule generation

mod row;
pub mod generator;
pub mod set;

pub use row::{PeriodLimit, Schedule, ScheduleRow, Termination};
pub use generator::{generate as generate_schedule, BALANCE_EPSILON, SAFETY_MARGIN_PERIODS};
pub use set::{build_schedules, build_schedules_for_term, schedule_for, ScheduleSet};
