//! # Compound Interest Factor Table
//!
//! Prints a discrete compound interest table for one rate, in the layout
//! found at the back of engineering-economy texts.

use engecon::prelude::*;

fn main() {
    let rate = 0.10;
    let periods = 20u32;

    println!("Discrete compounding factor table, i = {:.1}%", rate * 100.0);
    println!();
    println!(
        "{:>3}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
        "n", "F/P", "P/F", "A/F", "A/P", "F/A", "P/A", "P/G", "A/G"
    );

    for n in 1..=periods {
        println!(
            "{:>3}  {:>10.4}  {:>10.4}  {:>10.4}  {:>10.4}  {:>10.4}  {:>10.4}  {:>10.4}  {:>10.4}",
            n,
            FP(rate, n),
            PF(rate, n),
            AF(rate, n),
            AP(rate, n),
            FA(rate, n),
            PA(rate, n),
            PG(rate, n),
            AG(rate, n),
        );
    }
}
