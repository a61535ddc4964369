pub mod hours;
pub mod salon;

pub use hours::{
    weekday_name, BusinessHours, DayHours, HoursLookup, KeyedHours, OrderedHours, WeeklyHours,
};
pub use salon::{Address, Salon, PROVIDER_ROLE, UNISEX};
