//! Tracing subscriber setup shared by both binaries

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::Directive;

/// Build the env filter: `RUST_LOG` if set, INFO otherwise, with the
/// AWS SDK held at WARN unless explicitly requested.
fn env_filter() -> EnvFilter {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    if std::env::var("RUST_LOG").is_ok() {
        return filter;
    }
    ["aws_config=warn", "aws_smithy_runtime=warn", "aws_sdk_workspaces=warn"]
        .iter()
        .filter_map(|d| d.parse::<Directive>().ok())
        .fold(filter, |f, d| f.add_directive(d))
}

/// Initialize logging for the Lambda runtime.
///
/// CloudWatch timestamps every line and does not render ANSI colours.
pub fn init_lambda() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();
}

/// Initialize logging for interactive CLI use
pub fn init_cli() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}
