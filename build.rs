// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Build script to emit custom cfg flags based on feature selection.
//!
//! - `#[cfg(checked_mutations)]` is set when the `check_mutations` feature is on,
//!   and makes every coloring mutation re-run the consistency checker.

fn main() {
    // Declare the custom cfg names to avoid warnings
    println!("cargo:rustc-check-cfg=cfg(checked_mutations)");

    #[cfg(feature = "check_mutations")]
    println!("cargo:rustc-cfg=checked_mutations");
}
