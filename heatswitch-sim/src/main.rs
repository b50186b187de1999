use clap::{Parser, Subcommand, ValueEnum};
use heatswitch_model::{ApiDoc, BuildingClass, SimulationInput, SubsidyBonuses};
use heatswitch_sim::service::{
    handle_subsidy_request, parse_simulation_request, read_request_body, simulate_with_subsidy,
};
use heatswitch_sim::simulate;
use serde_json::json;
use tracing::{Level, info};
use utoipa::OpenApi;

#[derive(Parser, Debug)]
#[command(author, version, about = "Heating life-cycle cost comparison and subsidy estimate")]
struct Cli {
    /// Log defaulted inputs and run summaries to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare fossil and heat pump costs for a request file (`-` reads stdin).
    Simulate {
        input: String,
        /// First simulated calendar year, overrides the request.
        #[arg(long)]
        start_year: Option<i32>,
        /// Estimate the heat pump subsidy first and use it in the comparison.
        #[arg(long, value_enum)]
        subsidy: Option<SubsidyBranch>,
        #[arg(long, requires = "subsidy")]
        climate_bonus: bool,
        #[arg(long, requires = "subsidy")]
        income_bonus: bool,
        #[arg(long, requires = "subsidy")]
        efficiency_bonus: bool,
        #[arg(long)]
        pretty: bool,
    },
    /// Estimate the subsidy for a request file (`-` reads stdin).
    Subsidy {
        input: String,
        #[arg(long)]
        pretty: bool,
    },
    /// Print the reference comparison request.
    Template,
    /// Print the OpenAPI schema components of all requests and results.
    Schema,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SubsidyBranch {
    Wohn,
    Nichtwohn,
}

impl SubsidyBranch {
    fn bonuses(
        self,
        climate: bool,
        income: bool,
        efficiency: bool,
    ) -> (BuildingClass, SubsidyBonuses) {
        match self {
            SubsidyBranch::Wohn => (
                BuildingClass::Residential,
                SubsidyBonuses {
                    climate_speed: climate,
                    income,
                    efficiency,
                    non_residential_efficiency: false,
                },
            ),
            SubsidyBranch::Nichtwohn => (
                BuildingClass::NonResidential,
                SubsidyBonuses {
                    non_residential_efficiency: efficiency,
                    ..SubsidyBonuses::default()
                },
            ),
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Simulate {
            input,
            start_year,
            subsidy,
            climate_bonus,
            income_bonus,
            efficiency_bonus,
            pretty,
        } => {
            let body = read_request_body(&input)?;
            let mut request: SimulationInput = parse_simulation_request(&body)?;
            if start_year.is_some() {
                request.start_year = start_year;
            }
            match subsidy {
                Some(branch) => {
                    let (building_class, bonuses) =
                        branch.bonuses(climate_bonus, income_bonus, efficiency_bonus);
                    let (subsidy, result) =
                        simulate_with_subsidy(request, building_class, bonuses)?;
                    info!(funding = subsidy.funding_amount, "subsidy applied to comparison");
                    let combined = json!({ "subsidy": subsidy, "simulation": result });
                    println!("{}", to_json(&combined, pretty)?);
                }
                None => println!("{}", to_json(&simulate(&request), pretty)?),
            }
        }
        Command::Subsidy { input, pretty } => {
            let body = read_request_body(&input)?;
            println!("{}", handle_subsidy_request(&body, pretty)?);
        }
        Command::Template => {
            println!("{}", to_json(&SimulationInput::default(), true)?);
        }
        Command::Schema => {
            println!("{}", ApiDoc::openapi().to_pretty_json()?);
        }
    }

    Ok(())
}
