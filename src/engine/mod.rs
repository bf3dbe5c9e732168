mod messages;
mod worker;

pub use messages::{FetchRequest, FetchResponse, PushSnapshot};
pub use worker::{DataWorker, execute};
