use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::Directive, EnvFilter};

pub fn setup_tracing_logger() {
    let log_builder = tracing_subscriber::fmt()
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    // RUST_LOG wins; otherwise info
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    // chatty dependencies
    for crate_name in ["hyper", "h2"] {
        if let Ok(directive) = format!("{}=warn", crate_name).parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
    }

    log_builder.with_env_filter(filter).init();
}
