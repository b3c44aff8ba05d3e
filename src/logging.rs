//! Debug-build logging
//!
//! The UI owns the terminal, so log records go to
//! `<cache dir>/studyvault/studyvault.log`. Filtered by `RUST_LOG`,
//! defaulting to debug output for this crate only. Release builds install
//! no logger.

#[cfg(debug_assertions)]
pub fn init() {
    use std::fs::{self, OpenOptions};
    use std::io::Write;

    let Some(dir) = dirs::cache_dir().map(|d| d.join("studyvault")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("studyvault.log"))
    else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("studyvault=debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(not(debug_assertions))]
pub fn init() {}
