//! Custom cargo commands for bkvocab.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests, with and without default features
//!   cargo xtask check     - Quick check (check + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target for a short time

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["metric_properties", "range_query"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (check + tests + clippy + fuzz smoke)
  test      Run all Rust tests, default and minimal feature sets
  check     Quick check (cargo check + clippy)
  bench     Run benchmarks
  fuzz      Run each fuzz target for 30 seconds (needs cargo-fuzz, nightly)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("bkvocab Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    test()?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Fuzz smoke run...");
    run_fuzz(10)?;
    println!("✓ Fuzz targets clean\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test", "--quiet"])?;
    // Sequential batch path and raw (unnormalized) loader
    run_cargo(&["test", "--quiet", "--no-default-features"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

fn fuzz() -> Result<()> {
    run_fuzz(30)
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn run_fuzz(seconds: u32) -> Result<()> {
    let max_time = format!("-max_total_time={}", seconds);
    for &target in FUZZ_TARGETS {
        println!("  fuzzing {} for {}s", target, seconds);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", max_time.as_str()])?;
    }
    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let fuzz_dir = root.join("fuzz/fuzz_targets");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT", "--include=*.rs"])
        .current_dir(&fuzz_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 4 {
        bail!(
            "Expected at least 4 INVARIANT markers in fuzz targets, found {}. Someone may have removed checks!",
            count
        );
    }

    Ok(())
}
