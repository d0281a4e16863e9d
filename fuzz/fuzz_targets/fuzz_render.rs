#![no_main]
use libfuzzer_sys::fuzz_target;
use mlog::{CallSite, Console, ConsoleConfig, Level, Record, TerminalState};

fuzz_target!(|data: (&str, &str, u8)| {
    let (config, message, width) = data;
    // Arbitrary TOML and strftime patterns must never make rendering panic
    let Ok(config) = ConsoleConfig::from_toml(config) else {
        return;
    };
    let console = Console::from_config(config);
    let error = "fuzz";
    let record = Record::new(Level::Error, message, CallSite::new(message, 1)).error(&error);
    let _ = console.render(
        &mut std::io::sink(),
        &record,
        TerminalState::sized(u16::from(width)),
    );
});
