//! State core of the crypto box claimer.
//!
//! `AppStore` owns every collection the views render and runs each mutation
//! as apply → persist → derive wizard step → notify.

pub mod clock;
pub mod config;
pub mod display;
pub mod ids;
pub mod messages;
pub mod notify;
pub mod store;
pub mod wizard;

pub use clock::{Clock, SystemClock};
pub use config::StoreConfig;
pub use notify::{NoopNotifier, Notifier, RecordingNotifier};
pub use store::{AppStore, BlockReason, MonitoringOutcome, StatusSummary};
pub use wizard::derive_step;
