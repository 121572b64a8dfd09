//! Finance Engine CLI
//!
//! Command-line walkthrough of a retirement projection

use finance_engine::{
    planning::{RetirementPlan, RetirementProjector},
    projection::{CompoundInterestCalculator, CompoundInterestInput},
    RateType,
};
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    println!("Finance Engine v0.1.0");
    println!("=====================\n");

    // Example plan: 30 year old investing 20% of income until 60
    let plan = RetirementPlan {
        age: 30,
        retirement_age: 60,
        life_expectancy: 85,
        initial_deposit: 10_000.0,
        monthly_income: 8_000.0,
        income_investment_percentage: 20.0,
        interest: 8.0,
        interest_type: RateType::Annual,
        goal_income: 7_000.0,
        goal_patrimony: 1_500_000.0,
    };

    println!("Plan:");
    println!("  Age: {} -> retire at {} -> live to {}", plan.age, plan.retirement_age, plan.life_expectancy);
    println!("  Initial deposit: ${:.2}", plan.initial_deposit);
    println!("  Monthly contribution: ${:.2} ({}% of ${:.2})",
        plan.monthly_income * plan.income_investment_percentage / 100.0,
        plan.income_investment_percentage,
        plan.monthly_income,
    );
    println!("  Rate: {}% {:?}", plan.interest, plan.interest_type);
    println!("  Goals: ${:.2}/month income, ${:.2} patrimony", plan.goal_income, plan.goal_patrimony);
    println!();

    let projector = RetirementProjector::new();
    let projection = projector.execute(&plan).expect("retirement projection failed");

    // Re-run the accumulation phase standalone to show the schedule
    let calculator = CompoundInterestCalculator::new();
    let accumulation = calculator
        .execute(&CompoundInterestInput {
            initial_deposit: plan.initial_deposit,
            monthly_deposit: plan.monthly_income * plan.income_investment_percentage / 100.0,
            interest: plan.interest,
            interest_type: plan.interest_type,
            period_in_months: plan.accumulation_months(),
        })
        .expect("accumulation projection failed");

    println!("Accumulation schedule ({} months):", accumulation.len());
    println!("{:>5} {:>12} {:>12} {:>14} {:>14} {:>14}",
        "Month", "Deposit", "Interest", "TotalDeposit", "TotalInterest", "TotalAmount");
    println!("{}", "-".repeat(76));

    for (month, entry) in accumulation.months.iter().take(24) {
        println!("{:>5} {:>12.2} {:>12.2} {:>14.2} {:>14.2} {:>14.2}",
            month,
            entry.deposit,
            entry.interest,
            entry.total_deposit,
            entry.total_interest,
            entry.total_amount,
        );
    }

    if accumulation.len() > 24 {
        println!("... ({} more months)", accumulation.len() - 24);
    }

    // Write full schedule to CSV
    let csv_path = "accumulation_schedule.csv";
    let mut file = File::create(csv_path).expect("Unable to create CSV file");

    writeln!(file, "Month,Deposit,Interest,TotalDeposit,TotalInterest,TotalAmount").unwrap();
    for (month, entry) in &accumulation.months {
        writeln!(file, "{},{:.2},{:.2},{:.2},{:.2},{:.2}",
            month,
            entry.deposit,
            entry.interest,
            entry.total_deposit,
            entry.total_interest,
            entry.total_amount,
        ).unwrap();
    }

    println!("\nFull schedule written to: {}", csv_path);

    println!("\nRetirement outlook:");
    println!("  Patrimony at retirement: ${:.2}", projection.patrimony_at_retirement);
    println!("  Patrimony goal achieved: {}", projection.achieved_goal_patrimony);
    println!("  Max sustainable expense: ${:.2}/month", projection.max_monthly_expense);
    println!("  Income goal achieved: {}", projection.achieved_goal_income);
    println!("  Heritage at age {}: ${:.2}", plan.life_expectancy, projection.heritage);

    // Milestone months for quick sanity checks
    println!("\nKey milestones:");
    let milestones = [1, 12, 60, 120, 240, 360];
    for &m in &milestones {
        if let Some(entry) = accumulation.month(m) {
            println!("  Month {:>3}: Interest={:.2} TotalAmount={:.2}",
                m, entry.interest, entry.total_amount);
        }
    }
}
