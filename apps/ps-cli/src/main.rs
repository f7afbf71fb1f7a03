mod document;

use clap::{Parser, Subcommand, ValueEnum};
use document::{CliError, CliResult, Format, load_document, render};
use ps_characterize::{
    BetOptions, EnthalpyOptions, MesoPsdSettings, MicroPsdSettings, analyse_bet_many, area_bet,
    initial_enthalpy_point, initial_enthalpy_polynomial, psd_mesoporous, psd_microporous,
};
use ps_core::{AdsorbentMode, LoadingUnit, PressureMode, PsError};
use ps_isotherm::{Branch, PointIsotherm};
use ps_materials::{AdsorbateList, GasRegistry};
use ps_modelfit::{IsothermModel, LevenbergMarquardt, fit_model_branch};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "poresight")]
#[command(about = "poresight - adsorption isotherm characterisation", long_about = None)]
struct Cli {
    /// Output format for results
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    /// Convert the isotherm to relative pressure before analysis
    #[arg(long, global = true)]
    relative: bool,

    /// Convert loadings to this unit before analysis (mol, mmol, cm3 STP)
    #[arg(long, global = true)]
    loading_unit: Option<String>,

    /// Convert the adsorbent basis before analysis (mass, volume)
    #[arg(long, global = true)]
    basis: Option<String>,

    /// Take saturation pressures from CoolProp (needs the `coolprop` feature)
    #[arg(long, global = true)]
    coolprop: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

impl From<OutputFormat> for Format {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Json => Format::Json,
            OutputFormat::Yaml => Format::Yaml,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of an isotherm document
    Info {
        /// Path to the isotherm document (JSON or YAML)
        path: PathBuf,
    },
    /// BET specific surface area
    Bet {
        /// Path(s) to isotherm documents; several run in parallel
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Lower relative-pressure limit
        #[arg(long, requires = "max")]
        min: Option<f64>,
        /// Upper relative-pressure limit
        #[arg(long, requires = "min")]
        max: Option<f64>,
        /// Log the selected window and transformed points
        #[arg(short, long)]
        verbose: bool,
    },
    /// Micropore size distribution (Horvath-Kawazoe)
    PsdMicro {
        /// Path to the isotherm document
        path: PathBuf,
        /// Pore geometry: slit, cylinder or sphere
        #[arg(long, default_value = "slit")]
        geometry: String,
        /// Isotherm branch: adsorption or desorption
        #[arg(long, default_value = "adsorption")]
        branch: String,
        /// Solid parameter set
        #[arg(long, default_value = "Carbon(HK)")]
        solid: String,
        /// Fit this model first and use its loadings
        #[arg(long)]
        smooth: Option<String>,
        #[arg(short, long)]
        verbose: bool,
    },
    /// Mesopore size distribution (BJH or Dollimore-Heal)
    PsdMeso {
        /// Path to the isotherm document
        path: PathBuf,
        /// BJH or DH
        #[arg(long, default_value = "BJH")]
        method: String,
        /// Thickness curve: Halsey or Harkins-Jura
        #[arg(long, default_value = "Halsey")]
        thickness: String,
        /// Isotherm branch: adsorption or desorption
        #[arg(long, default_value = "desorption")]
        branch: String,
        #[arg(short, long)]
        verbose: bool,
    },
    /// Fit a model isotherm
    Fit {
        /// Path to the isotherm document
        path: PathBuf,
        /// Henry, Langmuir, DSLangmuir, Quadratic, BET or TemkinApprox
        #[arg(long)]
        model: String,
        /// Isotherm branch: adsorption or desorption
        #[arg(long, default_value = "adsorption")]
        branch: String,
    },
    /// Initial enthalpy of adsorption from calorimetric data
    Enthalpy {
        /// Path to the isotherm document
        path: PathBuf,
        /// Only use points below this pressure
        #[arg(long)]
        max_range: Option<f64>,
        /// Polynomial degree
        #[arg(long, default_value_t = 2)]
        degree: usize,
        /// Report the lowest-loading point instead of the polynomial intercept
        #[arg(long)]
        point: bool,
    },
}

#[derive(Serialize)]
struct FitReport {
    model: String,
    branch: Branch,
    params: BTreeMap<String, f64>,
    rmse: f64,
    pressure_range: (f64, f64),
}

#[derive(Serialize)]
struct BetReport<'a> {
    path: &'a Path,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<ps_characterize::BetResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(feature = "coolprop")]
fn gas_registry(cli: &Cli) -> CliResult<Box<dyn GasRegistry>> {
    if cli.coolprop {
        return Ok(Box::new(ps_materials::CoolPropSaturation::new(
            AdsorbateList::builtin(),
        )));
    }
    Ok(Box::new(AdsorbateList::builtin()))
}

#[cfg(not(feature = "coolprop"))]
fn gas_registry(cli: &Cli) -> CliResult<Box<dyn GasRegistry>> {
    if cli.coolprop {
        return Err(PsError::configuration("built without the `coolprop` feature").into());
    }
    Ok(Box::new(AdsorbateList::builtin()))
}

fn run(cli: &Cli) -> CliResult<()> {
    let gases = gas_registry(cli)?;
    let format = Format::from(cli.format);

    match &cli.command {
        Commands::Info { path } => {
            let iso = prepare(cli, path, gases.as_ref())?;
            println!("{}", iso.summary());
        }
        Commands::Bet {
            paths,
            min,
            max,
            verbose,
        } => {
            let options = BetOptions {
                limits: min.zip(*max),
                verbose: *verbose,
                ..BetOptions::default()
            };
            cmd_bet(cli, paths, gases.as_ref(), &options, format)?;
        }
        Commands::PsdMicro {
            path,
            geometry,
            branch,
            solid,
            smooth,
            verbose,
        } => {
            let iso = prepare(cli, path, gases.as_ref())?;
            let settings = MicroPsdSettings {
                pore_geometry: geometry.clone(),
                branch: branch.clone(),
                adsorbent_model: solid.clone(),
                smoothing_model: smooth.clone(),
                verbose: *verbose,
                ..MicroPsdSettings::default()
            };
            let psd = psd_microporous(&iso, gases.as_ref(), &settings, None)?;
            println!("{}", render(&psd, format)?);
        }
        Commands::PsdMeso {
            path,
            method,
            thickness,
            branch,
            verbose,
        } => {
            let iso = prepare(cli, path, gases.as_ref())?;
            let settings = MesoPsdSettings {
                psd_model: method.clone(),
                thickness_model: thickness.clone(),
                branch: branch.clone(),
                verbose: *verbose,
                ..MesoPsdSettings::default()
            };
            let psd = psd_mesoporous(&iso, gases.as_ref(), &settings, None)?;
            println!("{}", render(&psd, format)?);
        }
        Commands::Fit {
            path,
            model,
            branch,
        } => {
            let iso = prepare(cli, path, gases.as_ref())?;
            let model: IsothermModel = model.parse()?;
            let branch: Branch = branch.parse()?;
            let fitted = fit_model_branch(&iso, branch, model, &LevenbergMarquardt::default())?;
            let report = FitReport {
                model: model.key().to_string(),
                branch,
                params: model
                    .param_names()
                    .iter()
                    .zip(fitted.params())
                    .map(|(name, value)| (name.to_string(), *value))
                    .collect(),
                rmse: fitted.rmse(),
                pressure_range: fitted.pressure_range(),
            };
            println!("{}", render(&report, format)?);
        }
        Commands::Enthalpy {
            path,
            max_range,
            degree,
            point,
        } => {
            let iso = prepare(cli, path, gases.as_ref())?;
            let options = EnthalpyOptions {
                max_range: *max_range,
                degree: *degree,
                ..EnthalpyOptions::default()
            };
            if *point {
                let h = initial_enthalpy_point(&iso, &options)?;
                println!("{}", render(&BTreeMap::from([("initial_enthalpy", h)]), format)?);
            } else {
                let fit = initial_enthalpy_polynomial(&iso, &options)?;
                println!("{}", render(&fit, format)?);
            }
        }
    }
    Ok(())
}

/// Load a document and apply the requested conversions.
fn prepare(cli: &Cli, path: &Path, gases: &dyn GasRegistry) -> CliResult<PointIsotherm> {
    let doc = load_document(path)?;
    let mut iso = doc.isotherm()?;
    debug!(path = %path.display(), points = iso.len(), "loaded isotherm");

    if cli.relative {
        let outcome = iso.convert_pressure_mode(PressureMode::Relative, gases)?;
        info!(?outcome, "pressure mode");
    }
    if let Some(unit) = &cli.loading_unit {
        let unit: LoadingUnit = unit.parse()?;
        iso.convert_loading_unit(unit)?;
    }
    if let Some(basis) = &cli.basis {
        let basis: AdsorbentMode = basis.parse()?;
        iso.convert_adsorbent_mode(basis, &doc.sample_list())?;
    }
    Ok(iso)
}

fn cmd_bet(
    cli: &Cli,
    paths: &[PathBuf],
    gases: &dyn GasRegistry,
    options: &BetOptions,
    format: Format,
) -> CliResult<()> {
    if let [path] = paths {
        let iso = prepare(cli, path, gases)?;
        let result = area_bet(&iso, gases, options, None)?;
        println!("{}", render(&result, format)?);
        return Ok(());
    }

    let isotherms = paths
        .iter()
        .map(|path| prepare(cli, path, gases))
        .collect::<Result<Vec<_>, CliError>>()?;
    let reports: Vec<BetReport<'_>> = paths
        .iter()
        .zip(analyse_bet_many(&isotherms, gases, options))
        .map(|(path, outcome)| match outcome {
            Ok(result) => BetReport {
                path,
                result: Some(result),
                error: None,
            },
            Err(e) => BetReport {
                path,
                result: None,
                error: Some(e.to_string()),
            },
        })
        .collect();
    println!("{}", render(&reports, format)?);
    Ok(())
}
