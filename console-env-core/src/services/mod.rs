//! Service layer modules

pub mod logging;
