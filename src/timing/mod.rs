pub mod business_time;
pub mod daily;
pub mod schedule;
pub mod time_of_day;
