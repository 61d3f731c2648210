pub mod ports;
pub mod conversation;
pub mod controller;
pub mod event_bus;
