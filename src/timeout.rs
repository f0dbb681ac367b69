use core::time;
use std::process;
use std::thread;
use std::time::Instant;

/// Exit code used when the wall clock limit is hit.
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Starts a watchdog thread that terminates the process once `max_duration`
/// seconds have passed. The algorithms themselves are never interrupted.
pub fn initialize_timeout(max_duration: u64) {
    let start_time = Instant::now();
    let spawned = thread::Builder::new()
        .name("timeout".into())
        .spawn(move || loop {
            thread::sleep(time::Duration::from_millis(10));
            if start_time.elapsed().as_secs() >= max_duration {
                eprintln!("c timeout after {} seconds", max_duration);
                process::exit(TIMEOUT_EXIT_CODE);
            }
        });
    if let Err(e) = spawned {
        eprintln!("c failed to start timeout watchdog: {}", e);
    }
}
