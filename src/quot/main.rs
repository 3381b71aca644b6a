use clap::{CommandFactory, Parser};
use quot::divide::divide;
use quot::selftest::{self, Report};

mod args;
use args::Cli;

fn main() {
    let cli = Cli::parse();

    if cli.test {
        let report = selftest::run_all();
        print_report(&report);
        std::process::exit(if report.all_passed() { 0 } else { 1 });
    }

    let (Some(a), Some(b)) = (cli.a, cli.b) else {
        // Missing flags are a usage error, not a computation error, so the
        // exit code is distinct from the division failure path.
        let _ = Cli::command().print_help();
        std::process::exit(2)
    };

    match divide(a, b) {
        // Debug formatting keeps the trailing `.0` on whole quotients,
        // so `--a 10 --b 2` prints `5.0` rather than `5`.
        Ok(quotient) => println!("{quotient:?}"),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_report(report: &Report) {
    for result in &report.results {
        match &result.failure {
            None => println!("ok   {}", result.name),
            Some(detail) => println!("FAIL {} ({detail})", result.name),
        }
    }
    println!(
        "{}/{} checks passed",
        report.passed_count(),
        report.results.len()
    );
}
