//! Example: Basic option pricing with Black-Scholes-Merton
//!
//! Run with: cargo run --example basic_pricing

use bsm_options::prelude::*;

fn main() {
    // Raw parameter tuple, exactly as an external caller would supply it
    let raw = RawOptionInput::new(
        31.45,  // asset price
        22.75,  // strike
        3.5,    // time to expiration (years)
        0.05,   // 5% risk-free rate
        0.5,    // 50% volatility
        "C",    // call, short token form
        0.02,   // 2% dividend yield
    );

    println!("=== Black-Scholes-Merton Pricing ===\n");

    let params = match validate_and_normalize(&raw) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid option input: {}", e);
            return;
        }
    };

    println!("Spot:     ${:.2}", params.asset_price);
    println!("Strike:   ${:.2}", params.strike_price);
    println!("Time:     {:.2} years", params.time_to_expiration);
    println!("Rate:     {:.1}%", params.risk_free_rate * 100.0);
    println!("Div:      {:.1}%", params.dividend_yield * 100.0);
    println!("Vol:      {:.1}%\n", params.volatility * 100.0);

    println!("d1: {:.6}", d1(&params));
    println!("d2: {:.6}\n", d2(&params));

    let call_price = bs_price(&params).unwrap();
    println!("Call Price: ${:.4}", call_price);

    let put_raw = RawOptionInput::new(31.45, 22.75, 3.5, 0.05, 0.5, "P", 0.02);
    let put_params = validate_and_normalize(&put_raw).unwrap();
    let put_price = bs_price(&put_params).unwrap();
    println!("Put Price:  ${:.4}", put_price);

    // Verify put-call parity: C - P = S*e^(-qT) - K*e^(-rT)
    let parity_lhs = call_price - put_price;
    let parity_rhs = params.asset_price * (-params.dividend_yield * params.time_to_expiration).exp()
        - params.strike_price * (-params.risk_free_rate * params.time_to_expiration).exp();
    println!("\nPut-Call Parity Check:");
    println!("  C - P = {:.4}", parity_lhs);
    println!("  S*e^(-qT) - K*e^(-rT) = {:.4}", parity_rhs);
    println!("  Difference: {:.6}", (parity_lhs - parity_rhs).abs());
}
