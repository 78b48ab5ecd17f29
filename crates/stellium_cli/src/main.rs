use clap::{Parser, Subcommand};
use stellium_core::{Body, Engine, FixedDeltaT, from_julian_day, julian_day};
use stellium_houses::{HouseSystem, houses};

#[derive(Parser)]
#[command(name = "stellium", about = "Stellium ephemeris CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apparent geocentric ecliptic position of a body
    Position {
        /// Body name (sun, moon, mercury, ... , node, chiron) or code
        body: String,
        /// UT datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long, conflicts_with = "jd")]
        date: Option<String>,
        /// Julian Day in UT
        #[arg(long)]
        jd: Option<f64>,
        /// Delta-T in seconds (TT - UT at the epoch)
        #[arg(long, default_value = "69.0")]
        delta_t: f64,
    },
    /// House cusps for a date and location
    Houses {
        /// Geographic latitude in degrees, north positive
        lat: f64,
        /// Geographic longitude in degrees, east positive
        lon: f64,
        /// UT datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long, conflicts_with = "jd")]
        date: Option<String>,
        /// Julian Day in UT
        #[arg(long)]
        jd: Option<f64>,
        /// House system code: P, K, O, R, C, E, W, B, M, T
        #[arg(long, default_value = "P")]
        system: char,
        /// Delta-T in seconds (TT - UT at the epoch)
        #[arg(long, default_value = "69.0")]
        delta_t: f64,
    },
    /// Convert a UT datetime to a Julian Day
    Jd {
        /// UT datetime (YYYY-MM-DDThh:mm:ssZ)
        date: String,
    },
    /// Convert a Julian Day to a UT calendar date
    Calendar {
        /// Julian Day in UT
        jd: f64,
    },
}

fn parse_body(s: &str) -> Body {
    if let Ok(code) = s.parse::<i32>() {
        return Body::from_code(code).unwrap_or_else(|| {
            eprintln!("Invalid body code: {code}");
            std::process::exit(1);
        });
    }
    match s.to_lowercase().as_str() {
        "sun" => Body::Sun,
        "moon" => Body::Moon,
        "mercury" => Body::Mercury,
        "venus" => Body::Venus,
        "mars" => Body::Mars,
        "jupiter" => Body::Jupiter,
        "saturn" => Body::Saturn,
        "uranus" => Body::Uranus,
        "neptune" => Body::Neptune,
        "pluto" => Body::Pluto,
        "node" | "meannode" | "mean-node" => Body::MeanNode,
        "chiron" => Body::Chiron,
        _ => {
            eprintln!("Invalid body name: {s}");
            eprintln!("Valid: Sun, Moon, Mercury..Pluto, Node, Chiron, or a numeric code");
            std::process::exit(1);
        }
    }
}

fn parse_ut(s: &str) -> Result<f64, String> {
    // Parse "YYYY-MM-DDThh:mm:ssZ" or "YYYY-MM-DDThh:mm:ss"
    let s = s.trim_end_matches('Z');
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        return Err(format!("expected YYYY-MM-DDThh:mm:ssZ, got {s}"));
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        return Err(format!("invalid date/time format: {s}"));
    }
    let year: i32 = date_parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = date_parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = date_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour: u32 = time_parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = time_parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: f64 = time_parts[2].parse().map_err(|e| format!("{e}"))?;
    let hour_frac = hour as f64 + minute as f64 / 60.0 + second / 3600.0;
    Ok(julian_day(year, month, day, hour_frac))
}

fn resolve_jd(date: Option<String>, jd: Option<f64>) -> f64 {
    match (date, jd) {
        (Some(s), None) => parse_ut(&s).unwrap_or_else(|e| {
            eprintln!("Invalid date: {e}");
            std::process::exit(1);
        }),
        (None, Some(jd)) => jd,
        _ => {
            eprintln!("Provide exactly one of --date or --jd");
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Position {
            body,
            date,
            jd,
            delta_t,
        } => {
            let body = parse_body(&body);
            let jd_ut = resolve_jd(date, jd);
            let engine = Engine::new(FixedDeltaT::new(delta_t));
            let pos = engine.position(body, jd_ut).unwrap_or_else(|e| {
                eprintln!("Position failed: {e}");
                std::process::exit(1);
            });
            let motion = if pos.is_retrograde() { "R" } else { "D" };
            println!("{body:?} @ JD {jd_ut:.6} UT");
            println!(
                "  lon {:10.6} deg  lat {:9.6} deg  dist {:.8} AU",
                pos.longitude, pos.latitude, pos.distance
            );
            println!(
                "  speed {:+.6} deg/day ({motion})  lat {:+.6} deg/day  dist {:+.8} AU/day",
                pos.longitude_speed, pos.latitude_speed, pos.distance_speed
            );
        }

        Commands::Houses {
            lat,
            lon,
            date,
            jd,
            system,
            delta_t,
        } => {
            let jd_ut = resolve_jd(date, jd);
            let system = HouseSystem::from_code(system);
            let h = houses(&FixedDeltaT::new(delta_t), jd_ut, lat, lon, system);
            println!("{system:?} houses @ JD {jd_ut:.6} UT, lat {lat:.4}, lon {lon:.4}");
            println!("  ASC {:10.6}  MC {:10.6}  ARMC {:10.6}", h.ascendant, h.mc, h.armc);
            for i in 1..=12 {
                println!("  cusp {i:2}: {:10.6}", h.cusps[i]);
            }
        }

        Commands::Jd { date } => {
            let jd = parse_ut(&date).unwrap_or_else(|e| {
                eprintln!("Invalid date: {e}");
                std::process::exit(1);
            });
            println!("{jd:.6}");
        }

        Commands::Calendar { jd } => {
            let d = from_julian_day(jd);
            let hour = d.hour.floor();
            let min_frac = (d.hour - hour) * 60.0;
            let minute = min_frac.floor();
            let second = (min_frac - minute) * 60.0;
            println!(
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                d.year, d.month, d.day, hour as u32, minute as u32, second
            );
        }
    }
}
