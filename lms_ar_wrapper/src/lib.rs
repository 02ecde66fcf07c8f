//! C ABI for running simulations from a browser (WASM) or native front end.
//!
//! Call `lms_ar_simulate` and then copy the series out with the getters,
//! which read the most recent result.

#[macro_use]
extern crate lazy_static;

use std::sync::{Mutex, MutexGuard};

use lms_ar::ar::UniformNoise;
use lms_ar::{simulate_with_noise, Params, Simulation};

lazy_static! {
    static ref LAST_SIMULATION: Mutex<Option<Simulation>> = Mutex::new(None);
}

fn last_simulation() -> MutexGuard<'static, Option<Simulation>> {
    match LAST_SIMULATION.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn run(sample_count: f64, u1: f64, u2: f64, mu: f64, mut noise: UniformNoise) -> bool {
    match Params::try_from_numbers(sample_count, u1, u2, mu) {
        Ok(params) => {
            let simulation = simulate_with_noise(&params, &mut noise);
            *last_simulation() = Some(simulation);
            true
        }
        Err(_) => false,
    }
}

fn copy_series<F>(raw_buffer: *mut f64, max_size: usize, series: F) -> usize
where
    F: Fn(&Simulation) -> &[f64],
{
    let guard = last_simulation();
    let simulation = match guard.as_ref() {
        Some(simulation) => simulation,
        None => return 0,
    };
    let values = series(simulation);
    let len = values.len().min(max_size);
    if len == 0 || raw_buffer.is_null() {
        return 0;
    }
    let target_buffer: &mut [f64] = unsafe { std::slice::from_raw_parts_mut(raw_buffer, len) };
    target_buffer.copy_from_slice(&values[..len]);
    len
}

#[no_mangle]
pub extern "C" fn allocate_f64_array(size: usize) -> *mut f64 {
    let mut buf = Vec::<f64>::with_capacity(size);
    let ptr = buf.as_mut_ptr();
    std::mem::forget(buf);
    ptr
}

/// Runs a simulation with fresh noise. Returns false, keeping the previous
/// result, if `sample_count` is not a non-negative whole number.
#[no_mangle]
pub extern "C" fn lms_ar_simulate(sample_count: f64, u1: f64, u2: f64, mu: f64) -> bool {
    run(sample_count, u1, u2, mu, UniformNoise::new())
}

/// Like `lms_ar_simulate`, with reproducible noise.
#[no_mangle]
pub extern "C" fn lms_ar_simulate_seeded(
    sample_count: f64,
    u1: f64,
    u2: f64,
    mu: f64,
    seed: u64,
) -> bool {
    run(sample_count, u1, u2, mu, UniformNoise::seeded(seed))
}

/// The number of samples of the last simulation, 0 if there is none.
#[no_mangle]
pub extern "C" fn lms_ar_sample_count() -> usize {
    last_simulation().as_ref().map(|s| s.len()).unwrap_or(0)
}

#[no_mangle]
pub extern "C" fn lms_ar_get_mse(raw_buffer: *mut f64, max_size: usize) -> usize {
    copy_series(raw_buffer, max_size, |s| &s.mse[..])
}

#[no_mangle]
pub extern "C" fn lms_ar_get_w1(raw_buffer: *mut f64, max_size: usize) -> usize {
    copy_series(raw_buffer, max_size, |s| &s.w1[..])
}

#[no_mangle]
pub extern "C" fn lms_ar_get_w2(raw_buffer: *mut f64, max_size: usize) -> usize {
    copy_series(raw_buffer, max_size, |s| &s.w2[..])
}

/// Writes the two optimal weights to `raw_buffer`. Returns false if there is
/// no result yet or the buffer is null.
#[no_mangle]
pub extern "C" fn lms_ar_get_w_opt(raw_buffer: *mut f64) -> bool {
    if raw_buffer.is_null() {
        return false;
    }
    match last_simulation().as_ref() {
        Some(simulation) => {
            let w_opt: &mut [f64] = unsafe { std::slice::from_raw_parts_mut(raw_buffer, 2) };
            w_opt.copy_from_slice(&simulation.w_opt);
            true
        }
        None => false,
    }
}
