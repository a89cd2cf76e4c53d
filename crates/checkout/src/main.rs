//! Checkout entry point.

use std::process::ExitCode;

use checkout::{Config, REFERENCE_CART};

fn main() -> ExitCode {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    checkout::init_tracing(&config);

    // 2. Build, pay, and fulfill the reference order
    let order = match checkout::run_checkout(&REFERENCE_CART, &config) {
        Ok(order) => order,
        Err(e) => {
            tracing::error!(error = %e, "checkout failed");
            return ExitCode::FAILURE;
        }
    };

    // 3. Print the paid order
    match serde_json::to_string_pretty(&order) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize order");
            ExitCode::FAILURE
        }
    }
}
