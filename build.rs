//! Build script to inject version and git SHA at compile time.
//!
//! Environment variables (set by CI or fall back to defaults):
//! - PAGE_BEHAVIOR_VERSION: Version string (defaults to CARGO_PKG_VERSION)
//! - PAGE_BEHAVIOR_GIT_SHA: Git commit SHA (defaults to "unknown" or git rev-parse)

use std::process::Command;

fn main() {
    let version = std::env::var("PAGE_BEHAVIOR_VERSION").unwrap_or_else(|_| {
        std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".into())
    });
    println!("cargo:rustc-env=PAGE_BEHAVIOR_VERSION={}", version);

    // Prefer the explicit override, then the CI checkout SHA, then git itself
    let git_sha = std::env::var("PAGE_BEHAVIOR_GIT_SHA")
        .or_else(|_| {
            std::env::var("GITHUB_SHA").map(|s| s.chars().take(7).collect::<String>())
        })
        .unwrap_or_else(|_| get_git_sha());
    println!("cargo:rustc-env=PAGE_BEHAVIOR_GIT_SHA={}", git_sha);

    println!("cargo:rerun-if-env-changed=PAGE_BEHAVIOR_VERSION");
    println!("cargo:rerun-if-env-changed=PAGE_BEHAVIOR_GIT_SHA");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
}

fn get_git_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .and_then(|o| String::from_utf8(o.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".into())
}
