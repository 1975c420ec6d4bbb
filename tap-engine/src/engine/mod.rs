mod error;
mod runtime;

pub use self::{error::TapError, runtime::MonitorRuntime};

pub mod prelude {
    pub use super::{MonitorRuntime, TapError};
}
