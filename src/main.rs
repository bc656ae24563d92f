// src/main.rs

use std::process;

use devloop::{cli, logging};

#[tokio::main]
async fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("devloop: {err}");
        process::exit(1);
    }

    match devloop::run(args).await {
        Ok(code) => process::exit(code),
        Err(err) => {
            let code = err.exit_code();
            eprintln!("devloop: {err}");
            process::exit(code);
        }
    }
}
