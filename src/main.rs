//! Offer Projection CLI
//!
//! Command-line interface for projecting and emailing coffee equipment
//! sales offers

use anyhow::Context;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use log::debug;
use offer_projection::mail::{send_offer, EmailJsTransport, MailConfig};
use offer_projection::offer::load_offers;
use offer_projection::report::{OfferRenderer, PlainDocumentExporter, TextRenderer};
use offer_projection::scenario::SummaryRow;
use offer_projection::{
    reduce, Action, AppState, Notice, OfferForm, OfferRunner, ProjectionConfig, ProjectionEngine,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "offer_projection", version, about = "Coffee equipment sales-offer projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project a single offer and print the card
    Project {
        #[command(flatten)]
        inputs: InputArgs,

        /// Show annual instead of monthly figures
        #[arg(long)]
        annual: bool,

        /// Emit the projection as JSON instead of the card
        #[arg(long)]
        json: bool,

        /// Payback months at or above which the verdict is DO NOT
        #[arg(long, default_value_t = 8.0)]
        payback_threshold: f64,
    },

    /// Project a whole offer book from CSV and write a summary CSV
    Batch {
        /// Offer book CSV (Customer,Machine,...,CoffeeCost)
        #[arg(long)]
        input: PathBuf,

        /// Output path for the summary CSV
        #[arg(long)]
        output: PathBuf,

        /// Payback months at or above which the verdict is DO NOT
        #[arg(long, default_value_t = 8.0)]
        payback_threshold: f64,
    },

    /// Project an offer and email the rendered card to a recipient
    Send {
        #[command(flatten)]
        inputs: InputArgs,

        /// Recipient email address
        #[arg(long)]
        to: String,

        /// Show annual instead of monthly figures on the sent card
        #[arg(long)]
        annual: bool,

        /// TOML file overriding the EmailJS endpoint and credentials
        #[arg(long)]
        mail_config: Option<PathBuf>,
    },
}

/// The seven offer form fields, accepted exactly as the form does:
/// empty or unparsable values coerce to zero rather than erroring.
#[derive(Args, Debug)]
struct InputArgs {
    /// Machine cost in EUR
    #[arg(long, default_value = "")]
    machine: String,

    /// First grinder cost in EUR
    #[arg(long, default_value = "")]
    grinder1: String,

    /// Second grinder cost in EUR
    #[arg(long, default_value = "")]
    grinder2: String,

    /// Advertising cost in EUR
    #[arg(long, default_value = "")]
    advertising: String,

    /// Monthly coffee consumption in kg
    #[arg(long, default_value = "")]
    consumption_kg: String,

    /// Selling price per kg in EUR
    #[arg(long, default_value = "")]
    price_per_kg: String,

    /// Coffee purchase cost per kg in EUR
    #[arg(long, default_value = "13.5")]
    coffee_cost: String,
}

impl InputArgs {
    fn to_form(&self) -> OfferForm {
        OfferForm {
            machine: self.machine.clone(),
            grinder1: self.grinder1.clone(),
            grinder2: self.grinder2.clone(),
            advertising: self.advertising.clone(),
            consumption_kg: self.consumption_kg.clone(),
            price_per_kg: self.price_per_kg.clone(),
            coffee_cost: self.coffee_cost.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Project {
            inputs,
            annual,
            json,
            payback_threshold,
        } => run_project(&inputs, annual, json, payback_threshold),
        Command::Batch {
            input,
            output,
            payback_threshold,
        } => run_batch(&input, &output, payback_threshold),
        Command::Send {
            inputs,
            to,
            annual,
            mail_config,
        } => run_send(&inputs, to, annual, mail_config.as_deref()).await,
    }
}

fn run_project(
    inputs: &InputArgs,
    annual: bool,
    json: bool,
    payback_threshold: f64,
) -> anyhow::Result<()> {
    let engine = ProjectionEngine::new(ProjectionConfig {
        payback_threshold_months: payback_threshold,
    });
    let offer_inputs = inputs.to_form().to_inputs();
    let projection = engine.project(&offer_inputs);

    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
    } else {
        print!("{}", TextRenderer.render(&offer_inputs, &projection, annual));
    }

    Ok(())
}

fn run_batch(
    input: &std::path::Path,
    output: &std::path::Path,
    payback_threshold: f64,
) -> anyhow::Result<()> {
    let offers = load_offers(input)
        .with_context(|| format!("loading offer book from {}", input.display()))?;
    println!("Loaded {} offers from {}", offers.len(), input.display());

    let runner = OfferRunner::with_config(ProjectionConfig {
        payback_threshold_months: payback_threshold,
    });
    let projections = runner.run_batch(&offers);

    let mut writer = csv::Writer::from_path(output)
        .with_context(|| format!("creating summary file {}", output.display()))?;
    for (offer, projection) in offers.iter().zip(&projections) {
        writer.serialize(SummaryRow::new(offer, projection))?;
    }
    writer.flush()?;

    println!("Summary written to {}", output.display());
    Ok(())
}

async fn run_send(
    inputs: &InputArgs,
    to: String,
    annual: bool,
    mail_config: Option<&std::path::Path>,
) -> anyhow::Result<()> {
    let config = match mail_config {
        Some(path) => MailConfig::from_toml_path(path)
            .with_context(|| format!("loading mail config from {}", path.display()))?,
        None => MailConfig::default(),
    };

    // Drive the session through the reducer so send gating matches the tool
    let mut state = reduce(AppState::default(), Action::Start);
    state.form = inputs.to_form();
    state.show_annual = annual;
    state = reduce(state, Action::SetRecipient(to));
    state = reduce(state, Action::SendStarted);

    if !state.send_in_flight {
        if let Some(notice) = state.notice {
            println!("{}", notice.message());
        }
        return Ok(());
    }

    let offer_inputs = state.form.to_inputs();
    let projection = ProjectionEngine::default().project(&offer_inputs);
    let transport = EmailJsTransport::new(config);

    let outcome = send_offer(
        &TextRenderer,
        &PlainDocumentExporter::new(),
        &transport,
        &offer_inputs,
        &projection,
        state.show_annual,
        &state.recipient,
    )
    .await;

    state = match outcome {
        Ok(()) => reduce(state, Action::SendSucceeded { sent_at: Local::now() }),
        Err(err) => {
            // One generic notice for the user; the cause goes to the debug log
            debug!("send pipeline failed: {:?}", err);
            reduce(state, Action::SendFailed)
        }
    };

    if let Some(notice) = state.notice {
        println!("{}", notice.message());
    }
    for entry in &state.log {
        println!(
            "{} -> {}",
            entry.sent_at.format("%Y-%m-%d %H:%M:%S"),
            entry.recipient
        );
    }

    if matches!(state.notice, Some(Notice::SendFailed)) {
        std::process::exit(1);
    }
    Ok(())
}
