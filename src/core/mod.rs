pub mod etl;
pub mod pipeline;
pub mod projection;

pub use crate::domain::model::{Document, Record, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
