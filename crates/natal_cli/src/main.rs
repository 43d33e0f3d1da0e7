mod output;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::debug;
use natal_config::{CliConfig, ConfigError, OutputFormat, load_config};
use natal_rs::{ALL_PLANETS, NatalError, UtcDate, deg_to_dms};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::output::{Style, render_angles, render_chart, render_houses, render_longitudes};

#[derive(Parser)]
#[command(name = "natal", version, about = "Natal chart CLI")]
struct Cli {
    /// Path to a TOML config file (default: $NATAL_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Output format: text or json (overrides the config)
    #[arg(long, global = true)]
    format: Option<OutputFormat>,
    /// Log at debug level (RUST_LOG still applies)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct When {
    /// Birth date and time (YYYY-MM-DDThh:mm[:ss][Z])
    #[arg(long)]
    date: String,
    /// UTC offset of --date in minutes, east positive (CEST = 120)
    #[arg(long, allow_negative_numbers = true)]
    offset: Option<i32>,
}

#[derive(Args)]
struct Place {
    /// Latitude in degrees, north positive
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full natal chart: angles, houses and planets
    Chart {
        #[command(flatten)]
        when: When,
        #[command(flatten)]
        place: Place,
    },
    /// Julian Day (UT) of a date
    Jd {
        #[command(flatten)]
        when: When,
    },
    /// Greenwich and local sidereal time
    Sidereal {
        #[command(flatten)]
        when: When,
        /// Longitude in degrees, east positive
        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
    },
    /// Ascendant, Midheaven, Descendant and Imum Coeli
    Angles {
        #[command(flatten)]
        when: When,
        #[command(flatten)]
        place: Place,
    },
    /// Placidus house cusps
    Houses {
        #[command(flatten)]
        when: When,
        #[command(flatten)]
        place: Place,
    },
    /// Longitudes and retrograde flags of the ten bodies
    Planets {
        #[command(flatten)]
        when: When,
    },
    /// Zodiac sign of an ecliptic longitude
    Sign {
        /// Ecliptic longitude in degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_negative_numbers = true)]
        deg: f64,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Natal(#[from] NatalError),
    #[error("missing {0}: pass --{0} or set it under [location] in the config")]
    MissingLocation(&'static str),
    #[error("{0} is not a finite angle")]
    NonFinite(f64),
    #[error("cannot encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn finite(deg: f64) -> Result<f64, CliError> {
    if deg.is_finite() { Ok(deg) } else { Err(CliError::NonFinite(deg)) }
}

struct Context {
    config: CliConfig,
    format: OutputFormat,
    style: Style,
}

impl Context {
    /// Parse `--date` and fold the offset (flag, else config) into UTC.
    fn utc(&self, when: &When) -> Result<UtcDate, CliError> {
        let date: UtcDate = when.date.parse()?;
        let offset = when.offset.unwrap_or(self.config.utc_offset_minutes);
        if offset == 0 {
            return Ok(date);
        }
        let utc = natal_rs::local_to_utc(date, offset)?;
        debug!("local {date} at offset {offset} min -> {utc}");
        Ok(utc)
    }

    fn latitude(&self, place: &Place) -> Result<f64, CliError> {
        place
            .lat
            .or(self.config.location.latitude)
            .ok_or(CliError::MissingLocation("lat"))
    }

    fn longitude(&self, lon: Option<f64>) -> Result<f64, CliError> {
        lon.or(self.config.location.longitude)
            .ok_or(CliError::MissingLocation("lon"))
    }

    fn emit(&self, value: &impl Serialize, text: impl FnOnce() -> String) -> Result<(), CliError> {
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
            OutputFormat::Text => print!("{}", text()),
        }
        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.output.format);
    let ctx = Context {
        style: Style::new(&config.output),
        config,
        format,
    };

    match cli.command {
        Commands::Chart { when, place } => {
            let date = ctx.utc(&when)?;
            let chart = natal_rs::compute_chart(date, ctx.latitude(&place)?, ctx.longitude(place.lon)?)?;
            ctx.emit(&chart, || render_chart(&ctx.style, &chart))
        }

        Commands::Jd { when } => {
            let date = ctx.utc(&when)?;
            let jd = natal_rs::julian_day(date)?;
            ctx.emit(&json!({ "utc": date.to_string(), "jd_ut": jd }), || {
                format!("{jd:.6}\n")
            })
        }

        Commands::Sidereal { when, lon } => {
            let date = ctx.utc(&when)?;
            let lon = ctx.longitude(lon)?;
            let (gmst, lst) = natal_rs::sidereal_time(date, lon)?;
            ctx.emit(
                &json!({ "gmst_deg": gmst, "lst_deg": lst, "longitude_deg": lon }),
                || {
                    format!(
                        "GMST  {}  ({:.4} h)\nLST   {}  ({:.4} h)\n",
                        ctx.style.angle(gmst),
                        gmst / 15.0,
                        ctx.style.angle(lst),
                        lst / 15.0
                    )
                },
            )
        }

        Commands::Angles { when, place } => {
            let date = ctx.utc(&when)?;
            let angles = natal_rs::angles(date, ctx.latitude(&place)?, ctx.longitude(place.lon)?)?;
            ctx.emit(&angles, || render_angles(&ctx.style, &angles))
        }

        Commands::Houses { when, place } => {
            let date = ctx.utc(&when)?;
            let houses = natal_rs::houses(date, ctx.latitude(&place)?, ctx.longitude(place.lon)?)?;
            ctx.emit(&houses, || render_houses(&ctx.style, &houses))
        }

        Commands::Planets { when } => {
            let date = ctx.utc(&when)?;
            let longitudes = natal_rs::planet_longitudes(date)?;
            let mut rows = Vec::with_capacity(ALL_PLANETS.len());
            for (&planet, &lon) in &longitudes {
                rows.push((planet, lon, natal_rs::retrograde(planet, date)?));
            }
            let value: Vec<_> = rows
                .iter()
                .map(|&(planet, lon, retrograde)| {
                    json!({ "planet": planet, "longitude_deg": lon, "retrograde": retrograde })
                })
                .collect();
            ctx.emit(&value, || render_longitudes(&ctx.style, &rows))
        }

        Commands::Sign { lon } => {
            let info = natal_rs::sign(finite(lon)?);
            ctx.emit(&info, || {
                format!(
                    "{} ({:?}, {:?}) - {} ({:.4} deg in sign)\n",
                    info.sign.name(),
                    info.sign.element(),
                    info.sign.modality(),
                    info.dms,
                    info.degrees_in_sign
                )
            })
        }

        Commands::Dms { deg } => {
            let d = deg_to_dms(finite(deg)?);
            ctx.emit(&d, || {
                format!("{} deg {} min {:.2} sec\n", d.degrees, d.minutes, d.seconds)
            })
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
