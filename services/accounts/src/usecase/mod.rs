pub mod account;
pub mod approval;
pub mod billing;
pub mod bootstrap;
pub mod quota;
pub mod register;
