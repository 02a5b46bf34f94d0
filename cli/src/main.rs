use clap::{Args, Parser, Subcommand};
use roster::family::FamilyClient;
use roster::programs::{self, ProgramFilter};
use roster::types::{Credentials, NewAccount, NewFamily, ProgramRegistration};
use roster::{ApiConfig, ApiError, ApiRequest, ApiResponse, Transport, TransportError};
use serde::Serialize;
use serde_json::json;


#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing session token; pass --token or set ROSTER_TOKEN")]
    MissingToken,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "sportsid", about = "SportsID registration API CLI")]
struct Cli {
    #[arg(long, env = "ROSTER_API_URL", default_value = roster::config::DEFAULT_API_URL)]
    base_url: String,

    #[arg(long, env = "ROSTER_API_TIMEOUT_SECS", default_value_t = roster::config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    #[arg(long, env = "ROSTER_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and print the token and user.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and print the token and user.
    Register(RegisterArgs),
    /// Print the user behind the current token.
    Me,
    Family(FamilyCommand),
    Programs(ProgramsCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    phone: Option<String>,
}

#[derive(Args, Debug)]
struct FamilyCommand {
    #[command(subcommand)]
    command: FamilySubcommand,
}

#[derive(Subcommand, Debug)]
enum FamilySubcommand {
    List,
    Create(FamilyArgs),
}

#[derive(Args, Debug)]
struct FamilyArgs {
    #[arg(long)]
    family_name: String,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    zip_code: Option<String>,
}

#[derive(Args, Debug)]
struct ProgramsCommand {
    #[command(subcommand)]
    command: ProgramsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProgramsSubcommand {
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "")]
        sport: String,
        #[arg(long, default_value = "")]
        location: String,
    },
    Show {
        program_id: String,
    },
    Register {
        program_id: String,
        /// Parent name.
        #[arg(long)]
        name: String,
        #[arg(long)]
        child: String,
        #[arg(long)]
        email: String,
    },
}

/// `roster::Transport` over reqwest with a per-request timeout.
struct ReqwestTransport {
    client: reqwest::Client,
    config: ApiConfig,
}

impl ReqwestTransport {
    fn new(config: ApiConfig) -> Result<Self, CliError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn transport_error(&self, error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::Timeout(self.config.timeout_secs())
        } else {
            TransportError::Unreachable(error.to_string())
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.config.url(&request.path);
        let mut builder = match request.method {
            roster::Method::Get => self.client.get(&url),
            roster::Method::Post => self.client.post(&url),
        };
        if let Some(authorization) = request.authorization() {
            builder = builder.header(reqwest::header::AUTHORIZATION, authorization);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| self.transport_error(&e))?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| self.transport_error(&e))?;
        Ok(ApiResponse::from_text(status, &text))
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let transport = ReqwestTransport::new(ApiConfig::new(&cli.base_url, cli.timeout_secs))?;
    let token = cli.token.as_deref().map(str::trim).filter(|t| !t.is_empty());

    match cli.command {
        Command::Login { email, password } => {
            let auth = roster::auth::login(&transport, &Credentials { email, password }).await?;
            print_json(&json!({ "token": auth.token, "user": auth.user }))
        }
        Command::Register(args) => {
            let auth = roster::auth::register(&transport, &new_account(args)).await?;
            print_json(&json!({ "token": auth.token, "user": auth.user }))
        }
        Command::Me => {
            let token = token.ok_or(CliError::MissingToken)?;
            print_json(&roster::auth::current_user(&transport, token).await?)
        }
        Command::Family(family) => run_family(&transport, token, family).await,
        Command::Programs(programs) => run_programs(&transport, programs).await,
    }
}

async fn run_family(transport: &ReqwestTransport, token: Option<&str>, family: FamilyCommand) -> Result<(), CliError> {
    let token = token.ok_or(CliError::MissingToken)?;
    let client = FamilyClient::new(transport);
    match family.command {
        FamilySubcommand::List => print_json(&client.list(Some(token)).await?),
        FamilySubcommand::Create(args) => {
            client.create(Some(token), &new_family(args)).await?;
            print_json(&client.list(Some(token)).await?)
        }
    }
}

async fn run_programs(transport: &ReqwestTransport, programs: ProgramsCommand) -> Result<(), CliError> {
    match programs.command {
        ProgramsSubcommand::List { search, sport, location } => {
            let filter = ProgramFilter { search, sport_type: sport, location };
            let catalog = programs::list_programs(transport).await?;
            print_json(&filter.apply(&catalog))
        }
        ProgramsSubcommand::Show { program_id } => print_json(&programs::get_program(transport, &program_id).await?),
        ProgramsSubcommand::Register { program_id, name, child, email } => {
            let registration = ProgramRegistration { name, child, email, program_id };
            programs::register_for_program(transport, &registration).await?;
            println!("Registration submitted!");
            Ok(())
        }
    }
}

fn new_account(args: RegisterArgs) -> NewAccount {
    NewAccount {
        email: args.email,
        password: args.password,
        first_name: args.first_name,
        last_name: args.last_name,
        phone: args.phone.filter(|p| !p.trim().is_empty()),
    }
}

fn new_family(args: FamilyArgs) -> NewFamily {
    NewFamily {
        family_name: args.family_name,
        address: args.address.unwrap_or_default(),
        city: args.city.unwrap_or_default(),
        state: args.state.unwrap_or_default(),
        zip_code: args.zip_code.unwrap_or_default(),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
