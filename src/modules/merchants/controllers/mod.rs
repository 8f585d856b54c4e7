mod merchant_controller;

pub use merchant_controller::configure;
