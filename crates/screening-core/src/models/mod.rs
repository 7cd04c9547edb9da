pub mod diagnosis;
pub mod fundus;
pub mod labs;
pub mod measurement;
pub mod parameter;
pub mod patient;
pub mod session;
