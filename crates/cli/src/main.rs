use clap::Parser;
use ferrous_dig_domain::{CliOverrides, DnsQuestion, ResolverOptions};
use output::OutputFormat;
use query_plan::QueryPlan;
use tracing::{debug, info};

mod bootstrap;
mod di;
mod output;
mod query_plan;

#[derive(Parser)]
#[command(name = "ferrous-dig")]
#[command(version)]
#[command(about = "Ferrous Dig - command-line DNS lookup client")]
struct Cli {
    /// Names, record types, classes and @nameservers in any order
    #[arg(value_name = "ARGS")]
    args: Vec<String>,

    /// Domain name to query
    #[arg(short = 'q', long = "query", value_name = "NAME")]
    names: Vec<String>,

    /// Record type to query (A, AAAA, MX, ...)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    types: Vec<String>,

    /// Query class (IN, CH, HS, ...)
    #[arg(short = 'c', long = "class", value_name = "CLASS")]
    classes: Vec<String>,

    /// Nameserver to use, e.g. 1.1.1.1, tcp://9.9.9.9, tls://dns.quad9.net
    #[arg(short = 'n', long = "nameserver", value_name = "NAMESERVER")]
    nameservers: Vec<String>,

    /// Reverse lookup: query PTR records for the given addresses
    #[arg(short = 'x', long)]
    reverse: bool,

    /// Label count below which search domains are tried first
    #[arg(long)]
    ndots: Option<u32>,

    /// Apply the system search list to relative names
    #[arg(long)]
    search: bool,

    /// Per-query timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Print results as JSON
    #[arg(short = 'J', long)]
    json: bool,

    /// Print only the answer addresses
    #[arg(long, conflicts_with = "json")]
    short: bool,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.short {
            OutputFormat::Short
        } else {
            OutputFormat::Table
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        ndots: cli.ndots,
        search: cli.search.then_some(true),
        timeout_secs: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let plan = QueryPlan::build(
        &cli.args,
        &cli.names,
        &cli.types,
        &cli.classes,
        &cli.nameservers,
        cli.reverse,
    )?;
    if plan.names.is_empty() {
        anyhow::bail!("no domain name to query, see --help");
    }

    let raw_nameservers = if plan.nameservers.is_empty() {
        config.lookup.nameservers.clone()
    } else {
        plan.nameservers.clone()
    };

    let use_cases = di::UseCases::new(&config);

    let options = ResolverOptions::new(config.lookup.ndots, Vec::new(), config.lookup.search);
    let loaded = use_cases
        .load_nameservers
        .execute(&raw_nameservers, options)
        .await?;

    let questions = DnsQuestion::plan(&plan.names, &plan.types, &plan.classes);
    info!(
        questions = questions.len(),
        nameservers = loaded.nameservers.len(),
        "Starting lookup"
    );
    debug!(options = ?loaded.options, "Resolver options");

    let responses = use_cases
        .lookup
        .execute(&loaded.nameservers, &questions, &loaded.options)
        .await;

    print!("{}", output::render(&responses, cli.output_format())?);

    if !matches!(cli.output_format(), OutputFormat::Json) {
        for failure in output::failures(&responses) {
            eprintln!("{}", failure);
        }
    }

    if responses.iter().all(|r| r.outcome.is_err()) {
        anyhow::bail!("all lookups failed");
    }

    Ok(())
}
