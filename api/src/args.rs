use clap::{Args as ClapArgs, Parser};
use gutcheck_core::domain::{
    common::{AuthConfig, DatabaseConfig, GutcheckConfig, LLMConfig},
    ingredient_normalization::value_objects::NormalizationConfig,
    trigger_analysis::value_objects::TriggerAnalysisConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "gutcheck-api", version, about = "Food intolerance trigger analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub db: DatabaseArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub llm: LLMArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(flatten)]
    pub normalization: NormalizationArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(id = "server_host", long = "server-host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(id = "server_port", long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "server-tls-cert-path", env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    #[arg(long = "server-tls-key-path", env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DatabaseArgs {
    #[arg(id = "database_host", long = "database-host", env = "DATABASE_HOST", default_value = "localhost")]
    pub host: String,

    #[arg(id = "database_port", long = "database-port", env = "DATABASE_PORT", default_value_t = 5432)]
    pub port: u16,

    #[arg(long = "database-user", env = "DATABASE_USER", default_value = "postgres")]
    pub user: String,

    #[arg(
        long = "database-password",
        env = "DATABASE_PASSWORD",
        default_value = "postgres"
    )]
    pub password: String,

    #[arg(long = "database-name", env = "DATABASE_NAME", default_value = "gutcheck")]
    pub name: String,

    #[arg(
        long = "database-run-migrations",
        env = "DATABASE_RUN_MIGRATIONS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub run_migrations: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AuthArgs {
    /// HS256 secret shared with the identity provider.
    #[arg(long = "jwt-secret", env = "JWT_SECRET")]
    pub jwt_secret: String,

    #[arg(long = "jwt-audience", env = "JWT_AUDIENCE", default_value = "authenticated")]
    pub jwt_audience: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LLMArgs {
    /// Leave empty to disable LLM-assisted ingredient matching.
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", default_value = "")]
    pub gemini_api_key: String,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 20)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct AnalysisArgs {
    #[arg(
        long = "min-consumption-threshold",
        env = "MIN_CONSUMPTION_THRESHOLD",
        default_value_t = 3
    )]
    pub min_consumption_threshold: u32,

    #[arg(long = "min-logs-threshold", env = "MIN_LOGS_THRESHOLD", default_value_t = 5)]
    pub min_logs_threshold: u32,

    #[arg(long = "confidence-level", env = "CONFIDENCE_LEVEL", default_value_t = 0.95)]
    pub confidence_level: f64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct NormalizationArgs {
    #[arg(
        long = "fuzzy-match-threshold",
        env = "FUZZY_MATCH_THRESHOLD",
        default_value_t = 0.75
    )]
    pub fuzzy_threshold: f64,

    #[arg(
        long = "llm-fallback-threshold",
        env = "LLM_FALLBACK_THRESHOLD",
        default_value_t = 0.9
    )]
    pub llm_fallback_threshold: f64,

    #[arg(
        long = "max-normalized-matches",
        env = "MAX_NORMALIZED_MATCHES",
        default_value_t = 5
    )]
    pub max_matches: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    /// Default filter when `RUST_LOG` is unset.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for GutcheckConfig {
    fn from(args: Args) -> Self {
        Self {
            database: DatabaseConfig {
                host: args.db.host,
                port: args.db.port,
                username: args.db.user,
                password: args.db.password,
                name: args.db.name,
                run_migrations: args.db.run_migrations,
            },
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                jwt_audience: args.auth.jwt_audience,
            },
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                timeout_secs: args.llm.timeout_secs,
            },
            analysis: TriggerAnalysisConfig {
                min_consumption_threshold: args.analysis.min_consumption_threshold,
                min_logs_threshold: args.analysis.min_logs_threshold,
                confidence_level: args.analysis.confidence_level,
            },
            normalization: NormalizationConfig {
                fuzzy_threshold: args.normalization.fuzzy_threshold,
                llm_fallback_threshold: args.normalization.llm_fallback_threshold,
                max_matches: args.normalization.max_matches,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_everything_but_the_secret() {
        let args = Args::parse_from(["gutcheck-api", "--jwt-secret", "s3cret"]);

        assert_eq!(args.server.port, 3333);
        assert_eq!(args.analysis.min_logs_threshold, 5);
        assert!(args.db.run_migrations);

        let config = GutcheckConfig::from(args);
        assert!(!config.llm.is_enabled());
        assert_eq!(config.normalization.max_matches, 5);
        assert_eq!(config.auth.jwt_audience, "authenticated");
    }

    #[test]
    fn origins_are_comma_separated() {
        let args = Args::parse_from([
            "gutcheck-api",
            "--jwt-secret",
            "s",
            "--server-allowed-origins",
            "https://a.example,https://b.example",
        ]);
        assert_eq!(args.server.allowed_origins.len(), 2);
    }
}
