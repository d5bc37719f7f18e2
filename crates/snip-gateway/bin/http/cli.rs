use clap::{Parser, ValueEnum};
use snip_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "SNIP_GATEWAY_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "SNIP_GATEWAY_PUBLIC_BASE_URL";
pub const GENERATOR_ENV: &str = "SNIP_GATEWAY_GENERATOR";
pub const SEQ_OFFSET_ENV: &str = "SNIP_GATEWAY_SEQ_OFFSET";
pub const MAX_ATTEMPTS_ENV: &str = "SNIP_GATEWAY_MAX_ATTEMPTS";
pub const LOG_FORMAT_ENV: &str = "SNIP_GATEWAY_LOG_FORMAT";
pub const OTLP_ENDPOINT_ENV: &str = "SNIP_GATEWAY_OTLP_ENDPOINT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_ATTEMPTS: &str = "3";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    /// First 8 hex digits of a random UUID.
    #[value(name = "random")]
    Random,
    /// 8 hex digit counter.
    #[value(name = "sequential")]
    Sequential,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Random => write!(f, "random"),
            GeneratorArg::Sequential => write!(f, "sequential"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "snip-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix for short urls, e.g. `https://sho.rt`. Derived from each
    /// request's scheme and host when unset.
    #[arg(long, env = PUBLIC_BASE_URL_ENV)]
    pub public_base_url: Option<String>,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Random
    )]
    pub generator: GeneratorArg,

    /// Starting counter of the sequential generator.
    #[arg(long, env = SEQ_OFFSET_ENV, default_value_t = 0)]
    pub seq_offset: u32,

    /// Candidate ids tried per shorten request before reporting a conflict.
    #[arg(
        long,
        env = MAX_ATTEMPTS_ENV,
        default_value = DEFAULT_MAX_ATTEMPTS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_attempts: u32,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,

    /// gRPC endpoint of an OTLP collector; span export is off when unset.
    #[arg(long, env = OTLP_ENDPOINT_ENV)]
    pub otlp_endpoint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = CLI::try_parse_from(["snip-gateway"]).unwrap();

        assert_eq!(cli.listen_addr, DEFAULT_LISTEN_ADDR.parse().unwrap());
        assert_eq!(cli.public_base_url, None);
        assert_eq!(cli.generator, GeneratorArg::Random);
        assert_eq!(cli.seq_offset, 0);
        assert_eq!(cli.max_attempts, 3);
        assert_eq!(cli.log_format, LogFormatArg::Text);
        assert_eq!(cli.otlp_endpoint, None);
    }

    #[test]
    fn explicit_arguments() {
        let cli = CLI::try_parse_from([
            "snip-gateway",
            "--listen-addr",
            "0.0.0.0:9000",
            "--public-base-url",
            "https://sho.rt",
            "--generator",
            "sequential",
            "--seq-offset",
            "42",
            "--max-attempts",
            "1",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.listen_addr.port(), 9000);
        assert_eq!(cli.public_base_url.as_deref(), Some("https://sho.rt"));
        assert_eq!(cli.generator, GeneratorArg::Sequential);
        assert_eq!(cli.seq_offset, 42);
        assert_eq!(cli.max_attempts, 1);
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
    }

    #[test]
    fn zero_attempts_is_rejected() {
        assert!(CLI::try_parse_from(["snip-gateway", "--max-attempts", "0"]).is_err());
    }
}
