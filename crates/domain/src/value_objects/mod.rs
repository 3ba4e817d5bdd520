//! Value objects with validated ranges

mod clock;
mod percentage;
mod wind_direction;

pub use clock::{ClockHour, DayOfWeek, InvalidClockHour, InvalidDayOfWeek};
pub use percentage::{InvalidPercentage, Percentage};
pub use wind_direction::{InvalidWindDirection, WindDirection};
