use clap::{Parser, Subcommand};
use octasphere_geometry::{MeshStats, emit_polyhedron};
use octasphere_input::{InputEvent, LoopControl, drain, parse_script};
use octasphere_kernel::{Level, ViewState};
use octasphere_render::{DebugTextRenderer, RenderView, present_frame};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "octasphere-cli", about = "Headless tools for the octasphere viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Generate the subdivided polyhedron and print statistics about it
    Mesh {
        /// Subdivision level (0-5)
        #[arg(short, long, default_value = "2")]
        level: u32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Apply a scripted event sequence, then render frames headlessly
    Simulate {
        /// Number of frames to render after the events are applied
        #[arg(short, long, default_value = "1")]
        frames: u64,
        /// Comma-separated events: +, -, esc, quit, other, dy=<f32>, dx=<f32>
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        events: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Serialize)]
struct MeshReport {
    level: Level,
    #[serde(flatten)]
    stats: MeshStats,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    events: usize,
    exited: bool,
    frames_rendered: u64,
    state: ViewState,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_frame: Option<String>,
}

fn mesh_report(level: Level) -> MeshReport {
    let mut vertices = Vec::new();
    emit_polyhedron(level.depth(), &mut vertices);
    MeshReport {
        level,
        stats: MeshStats::from_vertices(&vertices),
    }
}

/// Drain `events` into a fresh state, then render up to `frames` frames.
///
/// An exit event ends the run before anything is rendered, the same way the
/// interactive loop never reaches its next frame.
fn simulate(events: &[InputEvent], frames: u64) -> SimulationReport {
    let mut state = ViewState::default();
    let exited = drain(events.iter().copied(), &mut state) == LoopControl::Exit;

    let mut renderer = DebugTextRenderer::new();
    let view = RenderView::default();
    let mut last_frame = None;
    let mut frames_rendered = 0;
    if !exited {
        for _ in 0..frames {
            last_frame = Some(present_frame(&mut renderer, &mut state, &view));
            frames_rendered += 1;
        }
    }

    SimulationReport {
        events: events.len(),
        exited,
        frames_rendered,
        state,
        last_frame,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Info => {
            println!("octasphere-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: {}", octasphere_kernel::crate_info());
            println!("geometry: {}", octasphere_geometry::crate_info());
            println!("input: {}", octasphere_input::crate_info());
            println!("render: {}", octasphere_render::crate_info());
            println!(
                "levels: {}..={}",
                Level::MIN.depth(),
                Level::MAX.depth()
            );
        }
        Commands::Mesh { level, json } => {
            let level = Level::new(level)?;
            let report = mesh_report(level);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let s = &report.stats;
                println!("Level {}:", report.level);
                println!("  triangles: {}", s.triangles);
                println!("  vertices: {} ({} distinct)", s.vertices, s.distinct_positions);
                println!("  radius: {:.4}..{:.4}", s.min_radius, s.max_radius);
                println!(
                    "  bounds: ({:.2}, {:.2}, {:.2})..({:.2}, {:.2}, {:.2})",
                    s.bounds_min[0],
                    s.bounds_min[1],
                    s.bounds_min[2],
                    s.bounds_max[0],
                    s.bounds_max[1],
                    s.bounds_max[2]
                );
            }
        }
        Commands::Simulate {
            frames,
            events,
            json,
        } => {
            let events = parse_script(&events)?;
            tracing::debug!(count = events.len(), frames, "simulating");
            let report = simulate(&events, frames);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!(
                    "Applied {} events, rendered {} frames{}",
                    report.events,
                    report.frames_rendered,
                    if report.exited { " (exit requested)" } else { "" }
                );
                println!(
                    "State: yaw={:.2} pitch={:.2} level={}",
                    report.state.yaw(),
                    report.state.pitch(),
                    report.state.level()
                );
                if let Some(frame) = &report.last_frame {
                    print!("{frame}");
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use octasphere_kernel::{INITIAL_YAW, YAW_STEP};

    #[test]
    fn mesh_report_counts() {
        let report = mesh_report(Level::new(3).unwrap());
        assert_eq!(report.stats.triangles, 8 * 64);
        assert!(report.stats.min_radius < 1.0);
    }

    #[test]
    fn mesh_report_json_is_flat() {
        let report = mesh_report(Level::MIN);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["level"], 0);
        assert_eq!(json["triangles"], 8);
    }

    #[test]
    fn simulate_clamps_level() {
        let events = parse_script("+,+,+,+,+,+,+,+,+,+").unwrap();
        let report = simulate(&events, 1);
        assert_eq!(report.state.level(), Level::MAX);
        assert!(!report.exited);
        assert!(report.last_frame.unwrap().contains("Triangles: 8192"));
    }

    #[test]
    fn simulate_clamps_pitch() {
        let events = parse_script("dy=-200").unwrap();
        let report = simulate(&events, 0);
        assert_eq!(report.state.pitch(), -70.0);
        assert_eq!(report.frames_rendered, 0);
    }

    #[test]
    fn simulate_advances_yaw_per_frame() {
        let report = simulate(&[], 10);
        assert_eq!(report.frames_rendered, 10);
        assert!((report.state.yaw() - (INITIAL_YAW + 10.0 * YAW_STEP)).abs() < 1e-4);
    }

    #[test]
    fn nan_motion_is_rejected_before_simulation() {
        assert!(parse_script("dy=nan").is_err());
        let report = simulate(&parse_script("dy=30,dy=90").unwrap(), 1);
        assert_eq!(report.state.pitch(), 70.0);
        assert!(!report.last_frame.unwrap().contains("NaN"));
    }

    #[test]
    fn simulate_stops_on_escape() {
        let events = parse_script("+,esc,+").unwrap();
        let report = simulate(&events, 5);
        assert!(report.exited);
        assert_eq!(report.frames_rendered, 0);
        assert_eq!(report.state.level().depth(), 3);
    }

    #[test]
    fn cli_rejects_level_above_max() {
        assert!(Level::new(6).is_err());
        let cli = Cli::try_parse_from(["octasphere-cli", "mesh", "--level", "6"]).unwrap();
        let Commands::Mesh { level, .. } = cli.command else {
            panic!("expected mesh command");
        };
        assert!(Level::new(level).is_err());
    }

    #[test]
    fn cli_accepts_hyphenated_scripts() {
        let cli =
            Cli::try_parse_from(["octasphere-cli", "simulate", "--events", "-,dy=-5"]).unwrap();
        let Commands::Simulate { events, .. } = cli.command else {
            panic!("expected simulate command");
        };
        assert_eq!(parse_script(&events).unwrap().len(), 2);
    }
}
