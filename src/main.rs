use clap::Parser;
use small_calc::app::commands;
use small_calc::utils::logger;
use small_calc::{CalcError, CliConfig, Command, Operation};

fn report_error(e: &CalcError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let (op, operands) = match &config.command {
        Command::Add { operands } => (Operation::Add, operands),
        Command::Multiply { operands } => (Operation::Multiply, operands),
        Command::Verify { suite } => {
            let report = match commands::verify(suite.as_deref()).await {
                Ok(report) => report,
                Err(e) => report_error(&e),
            };
            match commands::render_report(&report, config.format) {
                Ok(out) => println!("{}", out),
                Err(e) => report_error(&e),
            }
            if !report.is_success() {
                std::process::exit(commands::CASES_FAILED_EXIT_CODE);
            }
            return;
        }
    };

    let output = commands::calculate(op, operands)
        .and_then(|calc| commands::render_calculation(&calc, config.format));
    match output {
        Ok(out) => println!("{}", out),
        Err(e) => report_error(&e),
    }
}
