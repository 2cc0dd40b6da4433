//! fretwise command-line front end: prints voicings, fretboard positions, roles and
//! labels as text or JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use fretwise::{
    classify, interval_name, ChordShape, Engine, EngineConfig, FunctionalRole, LabelPair,
    PitchClass,
};

/// Chord and scale diagrams data: voicings, fretboard positions, roles and labels
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// YAML configuration (formulas, tuning, labels, max-fret); built-in defaults otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Keyboard voicing of a formula over a root
    Voicing {
        root: String,
        formula: String,
        #[arg(long, short, default_value_t = 0)]
        inversion: usize,
    },
    /// Every fretboard position of a formula over a root
    Positions {
        root: String,
        formula: String,
        #[arg(long, allow_negative_numbers = true)]
        max_fret: Option<i32>,
    },
    /// Functional role and interval of a note over a root
    Classify { root: String, note: String },
    /// Bilingual label of a note name
    Label { note: String },
    /// Notes of a chord shape, one fret per string, -1 for muted
    Shape {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        frets: Vec<i32>,
        /// Also check that every sounding string belongs to FORMULA over this root
        #[arg(long, requires = "formula")]
        root: Option<String>,
        #[arg(long, requires = "root")]
        formula: Option<String>,
    },
    /// List catalog formulas
    Formulas,
}

#[derive(Serialize)]
struct VoiceOut {
    value: i32,
    note: &'static str,
    label: LabelPair,
    role: FunctionalRole,
}

#[derive(Serialize)]
struct PositionOut {
    string: usize,
    fret: u32,
    note: &'static str,
    role: FunctionalRole,
}

#[derive(Serialize)]
struct ClassifyOut {
    role: FunctionalRole,
    interval: &'static str,
}

#[derive(Serialize)]
struct StringOut {
    string: usize,
    fret: i32,
    note: Option<&'static str>,
}

#[derive(Serialize)]
struct ShapeOut {
    strings: Vec<StringOut>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fits: Option<bool>,
}

#[derive(Serialize)]
struct FormulaOut<'a> {
    name: &'a str,
    offsets: &'a [u8],
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "using configuration file");
            EngineConfig::load(path)?
        }
        None => EngineConfig::builtin()?,
    };
    let engine = Engine::new(config);
    debug!(command = ?cli.command, "running");

    match &cli.command {
        Command::Voicing {
            root,
            formula,
            inversion,
        } => {
            let root_pc = PitchClass::from_name(root)?;
            let voicing = engine.voicing(root, formula, *inversion)?;
            let voices: Vec<VoiceOut> = voicing
                .notes()
                .iter()
                .map(|&value| {
                    let pc = PitchClass::from_semitones(value);
                    VoiceOut {
                        value,
                        note: pc.name(),
                        label: engine.config().labels.for_pitch_class(pc),
                        role: classify(root_pc, pc),
                    }
                })
                .collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&voices)?);
            } else {
                for v in &voices {
                    println!("{:>3}  {:<12} {}", v.value, v.label.inline(), v.role);
                }
            }
        }
        Command::Positions {
            root,
            formula,
            max_fret,
        } => {
            let root_pc = PitchClass::from_name(root)?;
            let positions = engine.positions(root, formula, *max_fret)?;
            let mut out = Vec::with_capacity(positions.len());
            for p in positions {
                let pc = engine.note_at(p.string, p.fret)?;
                out.push(PositionOut {
                    string: p.string,
                    fret: p.fret,
                    note: pc.name(),
                    role: classify(root_pc, pc),
                });
            }
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for p in &out {
                    println!(
                        "string {} fret {:>2}  {:<3} {}",
                        p.string, p.fret, p.note, p.role
                    );
                }
            }
        }
        Command::Classify { root, note } => {
            let root = PitchClass::from_name(root)?;
            let note = PitchClass::from_name(note)?;
            let out = ClassifyOut {
                role: classify(root, note),
                interval: interval_name(root, note),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{} ({})", out.role, out.interval);
            }
        }
        Command::Label { note } => {
            let pair = engine.label(note)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&pair)?);
            } else {
                println!("{}", pair.stacked());
            }
        }
        Command::Shape {
            frets,
            root,
            formula,
        } => {
            let shape = ChordShape::from_frets(frets)?;
            let notes = engine.shape_notes(&shape)?;
            let strings: Vec<StringOut> = shape
                .to_frets()
                .into_iter()
                .zip(notes)
                .enumerate()
                .map(|(string, (fret, pc))| StringOut {
                    string,
                    fret,
                    note: pc.map(PitchClass::name),
                })
                .collect();
            let fits = match (root, formula) {
                (Some(root), Some(formula)) => Some(engine.shape_fits(&shape, root, formula)?),
                _ => None,
            };
            if cli.json {
                let out = ShapeOut { strings, fits };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for s in &strings {
                    println!("string {}: {}", s.string, s.note.unwrap_or("X"));
                }
                if let Some(fits) = fits {
                    println!("fits: {}", fits);
                }
            }
        }
        Command::Formulas => {
            let out: Vec<FormulaOut> = engine
                .config()
                .catalog
                .iter()
                .map(|f| FormulaOut {
                    name: f.name(),
                    offsets: f.offsets(),
                })
                .collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                for f in &out {
                    println!("{:<18} {:?}", f.name, f.offsets);
                }
            }
        }
    }

    Ok(())
}
