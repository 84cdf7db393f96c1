//! # nereus-risk
//!
//! Exceedance risk of a focus event against the pooled extreme-event
//! distribution.
//!
//! Two views of the same question: [`risk_by_strength`] asks how likely
//! the focus event and stronger variants of it are under the present
//! climate, [`risk_by_time`] asks how the likelihood of the fixed event
//! changes as the detrending pivot moves through past and projected
//! years.

mod error;
mod result;
mod strength;
mod time;

pub use error::RiskError;
pub use result::{StrengthRisk, TimeRisk};
pub use strength::risk_by_strength;
pub use time::risk_by_time;
