use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let target = env::var("TARGET").unwrap();
    if !target.contains("avr") {
        // Host builds only carry the game core and its tests
        return;
    }

    // Configure for ATmega128
    println!("cargo:rustc-link-arg=-mmcu=atmega128");

    // Pass CPU frequency for timing calculations
    println!("cargo:rustc-env=MCU_FREQ_HZ=16000000");

    // Debug builds log every spawn over the console
    if env::var("PROFILE").unwrap() == "debug" {
        println!("cargo:rustc-cfg=feature=\"debug\"");
    }

    println!("cargo:warning=Building whack-a-mole for ATmega128 at 16MHz");
}
