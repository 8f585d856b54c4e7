mod chart_controller;

pub use chart_controller::configure;
