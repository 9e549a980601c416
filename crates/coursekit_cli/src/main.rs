//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `coursekit_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("coursekit_core ping={}", coursekit_core::ping());
    println!("coursekit_core version={}", coursekit_core::core_version());
}
