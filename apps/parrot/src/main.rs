//! Parrot diagnostics entry point
//!
//! For the host: standard main() function, logging through env_logger
//! (`RUST_LOG` overrides the default `debug` filter).
//! For firmware: entry point is parrot_main() in lib.rs (built as staticlib)

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let code = parrot::run();

    // Show the estimate moving once the allocator has handed out memory.
    let before = hal::get_free_memory();
    let buffer: Vec<u8> = vec![0; 64 * 1024];
    log::debug!(
        "allocated {} bytes, free heap moved by {} bytes",
        buffer.len(),
        before - hal::get_free_memory()
    );
    parrot::print_free_ram();
    drop(buffer);
    parrot::print_free_ram();

    std::process::exit(code);
}
