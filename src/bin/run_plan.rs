//! JSON request runner for the finance engine
//!
//! Reads a snake_case JSON request body for one of the five calculators,
//! validates and executes it, and prints the JSON response with monetary
//! fields rounded to cents. The same request/response shapes back the
//! platform's HTTP handlers.
//!
//! ```text
//! run_plan compound --request request.json --pretty
//! echo '{"job_type":"EMPLOYEE",...}' | run_plan reserve
//! ```

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use finance_engine::planning::{
    CashVsInstallmentsComparator, EmergencyReserveSizer, InstallmentInput, ReserveInput,
    ReservePolicy, RetirementPlan, RetirementProjector,
};
use finance_engine::projection::{
    CompoundInterestCalculator, CompoundInterestInput, SimpleInterestCalculator,
    SimpleInterestInput,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Calculator {
    Simple,
    Compound,
    Retirement,
    Reserve,
    Installments,
}

#[derive(Debug, Parser)]
#[command(
    name = "run_plan",
    about = "Run a finance engine calculator on a JSON request"
)]
struct Args {
    /// Which calculator to run
    #[arg(value_enum)]
    calculator: Calculator,

    /// Path to the JSON request body; reads stdin when omitted
    #[arg(short, long)]
    request: Option<PathBuf>,

    /// Override the reserve policy table with a job_type,months CSV
    #[arg(long)]
    reserve_policy: Option<PathBuf>,

    /// Pretty-print the JSON response
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let body = match &args.request {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading request from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading request from stdin")?;
            buf
        }
    };
    log::info!("dispatching {:?} request ({} bytes)", args.calculator, body.len());

    let response = dispatch(&args, &body)?;

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", rendered);

    Ok(())
}

fn dispatch(args: &Args, body: &str) -> Result<serde_json::Value> {
    let response = match args.calculator {
        Calculator::Simple => {
            let input: SimpleInterestInput =
                serde_json::from_str(body).context("parsing simple interest request")?;
            serde_json::to_value(SimpleInterestCalculator::new().execute(&input)?)?
        }
        Calculator::Compound => {
            let input: CompoundInterestInput =
                serde_json::from_str(body).context("parsing compound interest request")?;
            serde_json::to_value(CompoundInterestCalculator::new().execute(&input)?)?
        }
        Calculator::Retirement => {
            let input: RetirementPlan =
                serde_json::from_str(body).context("parsing retirement request")?;
            serde_json::to_value(RetirementProjector::new().execute(&input)?)?
        }
        Calculator::Reserve => {
            let input: ReserveInput =
                serde_json::from_str(body).context("parsing reserve request")?;
            let sizer = match &args.reserve_policy {
                Some(path) => {
                    let policy = ReservePolicy::from_csv_path(path).map_err(|e| {
                        anyhow::anyhow!("loading reserve policy from {}: {}", path.display(), e)
                    })?;
                    EmergencyReserveSizer::with_policy(policy)
                }
                None => EmergencyReserveSizer::new(),
            };
            serde_json::to_value(sizer.execute(&input)?)?
        }
        Calculator::Installments => {
            let input: InstallmentInput =
                serde_json::from_str(body).context("parsing installments request")?;
            serde_json::to_value(CashVsInstallmentsComparator::new().execute(&input)?)?
        }
    };
    Ok(response)
}
