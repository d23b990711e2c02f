use crate::{database::ids::IdStrategy, protocol::OutputFormat};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "hospital-db")]
#[command(about = "Hospital appointment scheduling console for PostgreSQL")]
pub struct Config {
    /// Database name
    pub dbname: String,

    /// Port the PostgreSQL server listens on
    pub port: u16,

    /// Database user
    pub user: String,

    #[arg(long, env = "HOSPITAL_DB_HOST", default_value = "localhost")]
    pub host: String,

    /// Empty when not given
    #[arg(long, env = "HOSPITAL_DB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// How ids of new doctors, patients and appointments are chosen
    #[arg(long, env = "HOSPITAL_ID_STRATEGY", value_enum, default_value_t = IdStrategy::Max)]
    pub id_strategy: IdStrategy,

    #[arg(long, env = "HOSPITAL_OUTPUT", value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Create missing tables and sequences before showing the menu
    #[arg(long)]
    pub init_schema: bool,
}

impl Config {
    /// libpq keyword/value connection string.
    pub fn conn_info(&self) -> String {
        format!(
            "host={} port={} dbname={} user={} password={}",
            quote_conninfo_value(&self.host),
            self.port,
            quote_conninfo_value(&self.dbname),
            quote_conninfo_value(&self.user),
            quote_conninfo_value(self.password.as_deref().unwrap_or("")),
        )
    }

    /// Connection target without credentials, for display.
    pub fn display_url(&self) -> String {
        format!("postgresql://{}:{}/{}", self.host, self.port, self.dbname)
    }
}

fn quote_conninfo_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}
