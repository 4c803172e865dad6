pub mod aggregator;
pub mod cleaner;
pub mod engine;
pub mod export;
pub mod pipeline;
pub mod reporter;
pub mod validator;

pub use crate::domain::model::{CleanTicket, FieldValue, GroupKey, TicketRecord};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::domain::report::{EscalationMetrics, FinalReport};
pub use crate::utils::error::Result;
