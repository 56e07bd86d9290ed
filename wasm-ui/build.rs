//! Build script that stamps the footer with build information.
//!
//! Sets at compile time:
//! - BUILD_HOST: short hostname of the build machine
//! - BUILD_COMMIT: short git commit SHA
//! - BUILD_TIMESTAMP: UTC time in ISO 8601

use std::process::Command;

/// Trimmed stdout of a command, or "unknown" if it cannot run.
fn capture(program: &str, args: &[&str]) -> String {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

fn main() {
    let stamps = [
        ("BUILD_HOST", capture("hostname", &["-s"])),
        ("BUILD_COMMIT", capture("git", &["rev-parse", "--short", "HEAD"])),
        ("BUILD_TIMESTAMP", capture("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"])),
    ];
    for (name, value) in stamps {
        println!("cargo:rustc-env={}={}", name, value);
    }

    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
}
