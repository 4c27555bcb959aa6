pub mod calculator;
pub mod numerology;
pub mod service;
pub mod tables;

pub use crate::domain::model::{CalculateSubmission, LuckyNumberRequest, LuckyNumberResult};
pub use crate::domain::ports::{Clock, ConfigProvider};
pub use crate::utils::error::Result;
