pub mod pull_request;
pub mod review;
pub mod activity;

pub use pull_request::*;
pub use review::*;
pub use activity::*;
