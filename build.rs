#![allow(clippy::indexing_slicing, clippy::exit, clippy::unwrap_used)]
fn main() {
    // The linker calls back into this executable with arguments on failure.
    explain_link_error();

    // Host builds (unit and integration tests) link without the ESP32 scripts.
    if std::env::var_os("CARGO_FEATURE_HARDWARE").is_none() {
        return;
    }

    if std::env::var("PROFILE").unwrap_or_default() == "release" {
        println!("cargo:rustc-env=DEFMT_LOG=off");
    }

    println!("cargo:rustc-link-arg=-Tdefmt.x");
    println!("cargo:rustc-link-arg=-Tlinkall.x");
    println!(
        "cargo:rustc-link-arg=-Wl,--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}

fn explain_link_error() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        return;
    }

    let kind = &args[1];
    let what = &args[2];

    if kind != "undefined-symbol" {
        std::process::exit(1);
    }

    match what.as_str() {
        "_defmt_timestamp" | "_defmt_acquire" => {
            eprintln!();
            eprintln!(
                "💡 no defmt logger linked - the firmware binary needs `use esp_println as _;` and the `defmt.x` linker script"
            );
            eprintln!();
        }
        "_stack_start" => {
            eprintln!();
            eprintln!("💡 `linkall.x` is missing - build with `--features hardware` for an ESP32 target");
            eprintln!();
        }
        "esp_rtos_initialized" | "esp_rtos_yield_task" => {
            eprintln!();
            eprintln!("💡 call `esp_rtos::start` before entering the control loop");
            eprintln!();
        }
        _ => (),
    }

    std::process::exit(0);
}
