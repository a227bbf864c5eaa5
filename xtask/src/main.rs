//! Custom cargo commands for the pivot crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask kani      - Run Kani model checking proofs
//!   cargo xtask fuzz      - Run each fuzz target briefly
//!   cargo xtask check     - Quick check (no Kani, no fuzzing)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets
const FUZZ_TARGETS: &[&str] = &[
    "partition_median",
    "rotated_search",
    "monotonic_stack",
    "digit_removal",
    "batch_queries",
];

/// Seconds per fuzz target in `cargo xtask fuzz`
const FUZZ_SECONDS: u32 = 30;

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (tests in both profiles + clippy + Kani)
  test      Run all Rust tests
  kani      Run Kani proofs only
  fuzz      Run each fuzz target for {}s (needs cargo-fuzz and nightly)
  check     Quick check (cargo test + clippy, no Kani)
  bench     Run benchmarks
"#,
        FUZZ_SECONDS
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("Pivot Verification Suite");
    println!("==========================================\n");

    // Step 1: Check contract markers
    println!("[1/5] Checking contract assertions...");
    check_contract_markers()?;
    println!("✓ Contract assertions present\n");

    // Step 2: Debug tests (contracts active)
    println!("[2/5] Running Rust tests (debug, contracts on)...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    // Step 3: Release tests (contracts compiled out)
    println!("[3/5] Running Rust tests (release, contracts off)...");
    run_cargo(&["test", "--release", "--quiet"])?;
    println!("✓ Release tests passed\n");

    // Step 4: Clippy
    println!("[4/5] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    // Step 5: Kani
    println!("[5/5] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs verified\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");
    println!("\nSafe to commit changes.");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Run Kani proofs in the standalone crate
fn kani() -> Result<()> {
    let kani_dir = project_root()?.join("kani-proofs");
    if !kani_dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }
    if !has_cargo_subcommand("kani") {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }

    run_cargo_in(&kani_dir, &["kani"])
}

/// Run every fuzz target for a short, fixed time
fn fuzz() -> Result<()> {
    let fuzz_dir = project_root()?.join("fuzz");
    if !has_cargo_subcommand("fuzz") {
        bail!("cargo-fuzz not installed (cargo install cargo-fuzz)");
    }

    let max_time = format!("-max_total_time={}", FUZZ_SECONDS);
    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] Fuzzing {}...", i + 1, FUZZ_TARGETS.len(), target);
        run_cargo_in(
            &fuzz_dir,
            &["+nightly", "fuzz", "run", target, "--", &max_time],
        )?;
    }

    println!("\n✓ No fuzz failures");
    Ok(())
}

/// Quick check (no Kani)
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
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
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn has_cargo_subcommand(name: &str) -> bool {
    Command::new("cargo")
        .args([name, "--version"])
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Every algorithm module must keep calling into the contract checks.
fn check_contract_markers() -> Result<()> {
    let root = project_root()?;

    let contracts = std::fs::read_to_string(root.join("src/verify/contracts.rs"))
        .context("Failed to read src/verify/contracts.rs")?;
    let assertions = contracts.matches("Contract violation").count();
    if assertions < 7 {
        bail!(
            "Expected at least 7 contract assertions in contracts.rs, found {}",
            assertions
        );
    }

    let callers = [
        "src/search/partition.rs",
        "src/search/rotated.rs",
        "src/search/occurrence.rs",
        "src/stack/next_greater.rs",
        "src/stack/digits.rs",
    ];
    for file in callers {
        let source = std::fs::read_to_string(root.join(file))
            .with_context(|| format!("Failed to read {}", file))?;
        if !source.contains("check_") {
            bail!("{} no longer calls any contract check", file);
        }
    }

    Ok(())
}
