//! # nereus-calendar
//!
//! Pure date arithmetic for the proleptic Gregorian calendar, plus the
//! season-window logic the UNSEEN pipeline is built on.
//!
//! Unlike a fixed 365-day model calendar, observed SST series carry real
//! leap days, so every day count here is evaluated for a concrete year.
//! The most delicate piece is [`SeasonWindow`]: a season such as DJF
//! starts in one calendar year and finishes in the next, and its length
//! changes whenever February falls inside the window.
//!
//! ## Quick start
//!
//! ```
//! use nereus_calendar::{Date, SeasonWindow, is_leap_year};
//!
//! let jja = SeasonWindow::new(&[6, 7, 8]).unwrap();
//! let (start, ndays) = jja.span(2023).unwrap();
//! assert_eq!(start, Date::new(2023, 6, 1).unwrap());
//! assert_eq!(ndays, 92); // June + July + August, every year
//!
//! let djf = SeasonWindow::new(&[12, 1, 2]).unwrap();
//! // December 2023 + January/February 2024 (leap year).
//! assert_eq!(djf.span(2023).unwrap().1, 91);
//! assert!(is_leap_year(2024));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Leap-year test and per-month day counts |
//! | `date` | Validated Gregorian date with epoch-day conversion |
//! | `season` | Season windows with year rollover and day counts |
//! | `error` | Error types |

mod date;
mod error;
mod month;
mod season;

pub use date::{Date, date_sequence};
pub use error::CalendarError;
pub use month::{days_in_month, is_leap_year};
pub use season::SeasonWindow;
