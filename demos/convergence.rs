use lms_ar::ar::UniformNoise;
use lms_ar::{simulate_with_noise, Params};

fn main() {
    const SAMPLE_COUNT: usize = 5000;
    const SEED: u64 = 42;

    println!("Comparing LMS step sizes ({SAMPLE_COUNT} samples, noise seed {SEED})");
    println!();
    println!("mu        w1         w2         |w - w_opt|   steady state MSE");
    println!("-----------------------------------------------------------------");

    for mu in [0.001, 0.01, 0.05, 0.2, 1.0, 4.0].iter() {
        let params = Params::new(SAMPLE_COUNT, 0.0, 0.0, *mu);
        // Same seed for every step size, so all runs see the same signal
        let simulation = simulate_with_noise(&params, &mut UniformNoise::seeded(SEED));
        let summary = simulation.summary();
        print!(
            "{:<9} {:<10.5} {:<10.5} {:<13.5} {:.5}",
            mu,
            summary.final_weights[0],
            summary.final_weights[1],
            summary.weight_error,
            summary.steady_state_mse
        );
        if !summary.peak_weight.is_finite() || summary.weight_error > 1e3 {
            println!("  <- diverged");
        } else {
            println!();
        }
    }

    let params = Params::new(SAMPLE_COUNT, 0.0, 0.0, 0.05);
    let simulation = simulate_with_noise(&params, &mut UniformNoise::seeded(SEED));
    println!();
    println!(
        "Optimal weights: w1 = {:.5}, w2 = {:.5}",
        simulation.w_opt[0], simulation.w_opt[1]
    );
}
