//! Basic usage walkthrough for lognum.
//!
//! Run with: cargo run --example basic_usage

use lognum::format::{mix, sci};
use lognum::LogNum;

fn main() {
    println!("=== lognum basic usage ===\n");

    // Construction: native numbers, decimal strings, or the
    // "<mantissa>e<exponent>" form for magnitudes past native range.
    let coins = LogNum::new(1_250_000.0);
    let stars = LogNum::from("2.5e500");
    let beyond = LogNum::from("e100000000000000");

    println!("coins  = {coins}");
    println!("stars  = {stars}");
    println!("beyond = {beyond}\n");

    // Arithmetic never leaves the log domain.
    let doubled = stars * 2.0;
    let grown = stars.pow(2.0);
    println!("stars * 2  = {}", sci(doubled, 2, 2));
    println!("stars ^ 2  = {}", sci(grown, 2, 2));

    // Operands too far apart simply keep the larger one.
    let unchanged = stars + coins;
    println!("stars + coins = {} (gap beyond precision)\n", sci(unchanged, 2, 2));

    // Comparison and clamping.
    println!("coins < stars: {}", coins < stars);
    println!("coins - stars = {} (clamped at zero)\n", (coins - stars).to_mix());

    // Softcap: growth above a threshold is flattened, continuous at it.
    let capped = stars.softcap(LogNum::from("1e400"), 0.5);
    println!("softcap(stars, 1e400, 0.5) = {}", sci(capped, 2, 2));

    // Formatting: suffix notation below 1e30, scientific past it.
    println!("\nmix(coins)   = {}", mix(coins, 2));
    println!("sci(coins)   = {}", sci(coins, 2, 2));
    println!("mix(stars)   = {}", mix(stars, 2));
    println!("sci(beyond)  = {}", sci(beyond, 2, 2));
}
