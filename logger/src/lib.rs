use colored::Colorize;
use middleware::logger::LoggerMiddleware;

pub mod middleware {
    pub mod logger;
}

/// Installs the global logger: colored lines on stdout, plain copy appended
/// to `log_file`.
pub fn setup(log_file: &str) -> Result<(), fern::InitError> {
    dispatch(log_file)?.apply()?;
    Ok(())
}

fn dispatch(log_file: &str) -> Result<fern::Dispatch, fern::InitError> {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            let color = match record.level() {
                log::Level::Info => "green",
                log::Level::Warn => "yellow",
                log::Level::Error => "red",
                log::Level::Debug => "magenta",
                log::Level::Trace => "bright black",
            };
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%H:%M:%S]"),
                record.target(),
                record.level().to_string().color(color),
                message
            ))
        })
        .level(level)
        .level_for("sqlx", log::LevelFilter::Warn)
        .level_for("hyper", log::LevelFilter::Off)
        .level_for("rustls", log::LevelFilter::Off)
        .chain(std::io::stdout())
        .chain(fern::log_file(log_file)?))
}

pub fn middleware(console_logging_enabled: bool) -> LoggerMiddleware {
    LoggerMiddleware::new(console_logging_enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_creates_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("server.log");
        dispatch(path.to_str().unwrap()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn dispatch_fails_for_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("server.log");
        assert!(dispatch(path.to_str().unwrap()).is_err());
    }
}
