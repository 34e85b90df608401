pub(crate) mod drivers;
pub(crate) mod employees;
pub(crate) mod error;

pub(crate) use error::ApiError;
