use anyhow::Context;
use clap::Parser;
use generator::profile::GeneratorConfig;
use log::info;
use report::model::ReportModel;
use std::path::PathBuf;
use workflow::config::WorkflowConfig;
use workflow::runner::Runner;
use xcorrcore::Padding;

mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Cross-correlate a sequence with a small kernel")]
struct Args {
    /// Load a workflow config from YAML; flags below override its fields
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Input samples, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    input: Vec<f64>,
    /// Kernel weights, comma separated (defaults to 1,1,1)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    kernel: Vec<f64>,
    /// Padding mode: `same` or `valid`
    #[arg(long)]
    padding: Option<String>,
    /// Generate a random input of this length instead of passing --input
    #[arg(long)]
    generate: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Emit the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Append a one-line run summary to this file
    #[arg(long)]
    report: Option<PathBuf>,
}

fn build_config(args: &Args) -> anyhow::Result<WorkflowConfig> {
    let padding = args
        .padding
        .as_deref()
        .map(|mode| {
            mode.parse::<Padding>()
                .with_context(|| format!("parsing --padding {}", mode))
        })
        .transpose()?;
    let kernel = (!args.kernel.is_empty()).then(|| args.kernel.clone());
    let sequence = (!args.input.is_empty()).then(|| args.input.clone());

    let mut config = match &args.workflow {
        Some(path) => {
            let mut config = WorkflowConfig::load(path)?;
            if let Some(kernel) = kernel {
                config.kernel = kernel;
            }
            if let Some(padding) = padding {
                config.padding = padding;
            }
            if sequence.is_some() {
                config.sequence = sequence;
            }
            config
        }
        None => WorkflowConfig::from_args(
            kernel.unwrap_or_else(|| WorkflowConfig::default().kernel),
            padding.unwrap_or_default(),
            sequence,
        ),
    };

    if let Some(length) = args.generate {
        config.sequence = None;
        config.generator = Some(GeneratorConfig {
            length,
            seed: args.seed,
            ..Default::default()
        });
    }

    Ok(config)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = build_config(&args)?;
    let samples = config.resolve_sequence()?;
    let runner = Runner::new(config);

    let result = runner.execute(&samples)?;
    info!(
        "correlated {} samples into {} windows",
        result.input.len(),
        result.windows
    );

    let model = ReportModel::new(&runner.config().kernel, runner.config().padding, &result);
    println!("{}", report::writer::render(&model, args.json)?);

    if let Some(path) = &args.report {
        report::writer::append_summary(&model, path)?;
    }

    Ok(())
}
