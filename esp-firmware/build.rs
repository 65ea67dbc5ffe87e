// Build-Script: Wird vor dem Kompilieren ausgeführt
// Konfiguriert den Linker für ESP32-C6 Embedded Rust

/// Standard-Poll-Intervall in Millisekunden
const DEFAULT_POLL_INTERVAL_MS: &str = "1";

/// Standard-Startmodus
const DEFAULT_STARTUP_MODE: &str = "normal";

fn main() {
    // Lade .env file für optionale Overrides
    // Ohne .env gelten die Defaults (1 ms, normal)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("ℹ️  .env file nicht gefunden ({}), nutze Defaults", e);
    }

    println!("cargo:rerun-if-env-changed=POLL_INTERVAL_MS");
    println!("cargo:rerun-if-env-changed=STARTUP_MODE");

    // Poll-Intervall: positive Ganzzahl in Millisekunden
    let poll_interval =
        std::env::var("POLL_INTERVAL_MS").unwrap_or_else(|_| DEFAULT_POLL_INTERVAL_MS.into());
    match poll_interval.parse::<u64>() {
        Ok(ms) if ms > 0 => {}
        _ => {
            eprintln!(
                "❌ POLL_INTERVAL_MS='{}' ist ungültig (erwartet: positive Ganzzahl)",
                poll_interval
            );
            std::process::exit(1);
        }
    }
    println!("cargo:rustc-env=POLL_INTERVAL_MS={}", poll_interval);

    // Startmodus: "normal" oder "self-test"
    let startup_mode =
        std::env::var("STARTUP_MODE").unwrap_or_else(|_| DEFAULT_STARTUP_MODE.into());
    if startup_mode != "normal" && startup_mode != "self-test" {
        eprintln!(
            "❌ STARTUP_MODE='{}' ist ungültig (erwartet: normal | self-test)",
            startup_mode
        );
        std::process::exit(1);
    }
    println!("cargo:rustc-env=STARTUP_MODE={}", startup_mode);

    // Registriere hilfsbereiten Error-Handler für Linker-Fehler
    linker_be_nice();

    // Füge Linker-Skripte hinzu:

    // 1. defmt.x - defmt Logging-Support
    //    Definiert Symbole für defmt's binäres Log-Format
    println!("cargo:rustc-link-arg=-Tdefmt.x");

    // 2. linkall.x - ESP32 Memory-Layout
    //    WICHTIG: Muss als LETZTES kommen (sonst Probleme mit flip-link)
    //    Definiert Flash/RAM-Layout und Startup-Code
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

// Error-Handler: Zeigt hilfreiche Tipps bei Linker-Fehlern
// Wird vom Linker als "--error-handling-script" aufgerufen
fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();

    // Wenn vom Linker aufgerufen (mit Error-Typ und Symbol-Name)
    if args.len() > 2 {
        let kind = &args[1]; // Fehler-Typ (z.B. "undefined-symbol")
        let what = &args[2]; // Symbol-Name (z.B. "_defmt_...")

        match kind.as_str() {
            "undefined-symbol" => match what.as_str() {
                what if what.starts_with("_defmt_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and `esp-println` has the `defmt-espflash` feature"
                    );
                    eprintln!();
                }
                "_stack_start" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                }
                what if what.starts_with("esp_rtos_") => {
                    eprintln!();
                    eprintln!(
                        "💡 `esp-rtos` scheduler symbols missing. Make sure `esp_rtos::start` is called before spawning tasks."
                    );
                    eprintln!();
                }
                _ => (),
            },
            // we don't have anything helpful for "missing-lib" yet
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    match std::env::current_exe() {
        Ok(exe) => println!(
            "cargo:rustc-link-arg=--error-handling-script={}",
            exe.display()
        ),
        Err(e) => eprintln!("⚠️  Linker-Hilfe nicht verfügbar: {}", e),
    }
}
