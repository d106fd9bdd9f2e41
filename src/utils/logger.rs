use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// `RUST_LOG` wins when it parses; otherwise registrar events at info, or
/// debug when verbose.
fn registrar_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    if let Some(directives) = rust_log.and_then(|d| EnvFilter::try_new(d).ok()) {
        return directives;
    }
    if verbose {
        EnvFilter::new("uni_registrar=debug,info")
    } else {
        EnvFilter::new("uni_registrar=info")
    }
}

/// 報表輸出走 stdout，日誌一律寫到 stderr
pub fn init_cli_logger(verbose: bool, format: LogFormat) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let registry =
        tracing_subscriber::registry().with(registrar_filter(rust_log.as_deref(), verbose));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(registrar_filter(None, false).to_string(), "uni_registrar=info");
        assert!(registrar_filter(None, true)
            .to_string()
            .contains("uni_registrar=debug"));
    }

    #[test]
    fn test_rust_log_overrides_verbosity() {
        let filter = registrar_filter(Some("warn"), true);
        assert_eq!(filter.to_string(), "warn");
    }
}
