//! daiex-recipe - packaging recipe for the daiex library.
//!
//! This binary declares the library's dependencies, configures and builds
//! it with CMake and installs it into a package folder.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match daiex_recipe::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
