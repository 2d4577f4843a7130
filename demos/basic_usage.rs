//! # EngEcon Basic Usage Example
//!
//! Demonstrates the factor functions on a few everyday engineering-economy
//! questions, using the builder pattern API.

use engecon::prelude::*;

fn main() {
    println!("EngEcon Basic Usage Example");
    println!("===========================");
    println!();

    // A machine costs 50,000 today. What uniform annual payment repays it
    // over 10 years at 8%?
    let price = 50_000.0;
    let recovery = uniform_series_capital_recovery().i(0.08).n(10).call();
    println!("=== Capital Recovery (A/P, 8%, 10) ===");
    println!("  Factor:          {recovery:.6}");
    println!("  Annual payment:  {:.2}", price * recovery);

    // How much does a single 10,000 deposit grow to in 20 years at 6%?
    let deposit = 10_000.0;
    let growth = single_payment_compound_amount().i(0.06).n(20).call();
    println!("\n=== Compound Amount (F/P, 6%, 20) ===");
    println!("  Factor:          {growth:.6}");
    println!("  Future value:    {:.2}", deposit * growth);

    // Maintenance starts at zero and rises 500 per year for 15 years at 10%.
    // What is that gradient worth today?
    let increment = 500.0;
    let gradient = arithmetic_gradient_present_worth().i(0.10).n(15).call();
    println!("\n=== Arithmetic Gradient (P/G, 10%, 15) ===");
    println!("  Factor:          {gradient:.6}");
    println!("  Present worth:   {:.2}", increment * gradient);

    // Revenue of 1,000 next year growing 5% per year for 10 years, money
    // worth 8%.
    let first_payment = 1_000.0;
    let geometric = geometric_series_present_worth().g(0.05).i(0.08).n(10).call();
    println!("\n=== Geometric Series (P/A, 5%, 8%, 10) ===");
    println!("  Factor:          {geometric:.6}");
    println!("  Present worth:   {:.2}", first_payment * geometric);

    // The same sinking fund under discrete and continuous compounding.
    let discrete = uniform_series_sinking_fund().i(0.08).n(20).call();
    let continuous = continuous_compounding_sinking_fund()
        .r(eff_i_to_cont_r(0.08))
        .n(20)
        .call();
    println!("\n=== Sinking Fund, Both Conventions (20 periods) ===");
    println!("  Discrete 8%:               {discrete:.6}");
    println!("  Continuous at ln(1.08):    {continuous:.6}");

    // Functional-notation shorthand gives the same numbers.
    println!("\n=== Functional Notation ===");
    println!("  (A/P, 8%, 10) via AP():    {:.6}", AP(0.08, 10));
    println!("  (F/P, 6%, 20) via FP():    {:.6}", FP(0.06, 20));
}
