#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::process;

use log::error;

fn main() {
    // 32-bit engines need more stack than the platform default; run the
    // whole shell on a thread with an enlarged one.
    #[cfg(all(windows, target_pointer_width = "32"))]
    let code = {
        const STACK_SIZE: usize = 8 * 1024 * 1024;
        std::thread::Builder::new()
            .name("cef-shell-main".into())
            .stack_size(STACK_SIZE)
            .spawn(run_shell)
            .map_or_else(|_| run_shell(), |shell| shell.join().unwrap_or(1))
    };
    #[cfg(not(all(windows, target_pointer_width = "32")))]
    let code = run_shell();

    process::exit(code);
}

fn run_shell() -> i32 {
    match cef_shell::run(None) {
        Ok(code) => code,
        Err(source) => {
            error!("[Bootstrap] {source:#}");
            1
        }
    }
}
