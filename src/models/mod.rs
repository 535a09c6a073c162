//! View-model types handed to the dashboard UI after a location lookup

mod dashboard;
mod flood;
mod tides;
mod traffic;
mod weather;

pub use dashboard::{Advisory, AdvisoryKind, DashboardData};
pub use flood::{FloodLevel, FloodRisk, CANAL_WARNING_THRESHOLD_M};
pub use tides::{TideEvent, TideKind};
pub use traffic::{TrafficEstimate, TrafficStatus};
pub use weather::CurrentConditions;
