use clap::{Parser, Subcommand};
use rebound_render::{DebugTextRenderer, RenderView, Renderer};
use rebound_scene::demo::bounce_scene;
use rebound_sim::{BounceParams, SimEvent, Simulation};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rebound-cli", about = "Headless host for the bounce demo")]
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
    /// Run the simulation and print the trajectory
    Trajectory {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "60")]
        frames: u64,
        /// Per-frame velocity increment
        #[arg(long, default_value = "0.009")]
        gravity: f64,
    },
    /// Run the simulation, then replay its event log and compare states
    Replay {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "1000")]
        frames: u64,
    },
    /// Print the demo scene
    Scene,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("rebound-cli v{}", env!("CARGO_PKG_VERSION"));
            let sim = Simulation::new();
            println!(
                "sim: tick={} height={} rest_height={}",
                sim.tick(),
                sim.body().height(),
                sim.body().rest_height()
            );
            println!("scene: {} nodes", bounce_scene().scene.len());
        }
        Commands::Trajectory { frames, gravity } => {
            let params = BounceParams {
                gravity,
                ..BounceParams::default()
            };
            println!("Trajectory: frames={frames}, gravity={gravity}");

            let mut sim = Simulation::with_params(params);
            for _ in 0..frames {
                sim.step();
                for event in sim.drain_events() {
                    match event {
                        SimEvent::Stepped {
                            tick,
                            height,
                            velocity,
                        } => {
                            println!("frame {tick:>6}  height={height:>9.4}  velocity={velocity:>9.4}");
                        }
                        SimEvent::Rebounded {
                            tick,
                            impact_velocity,
                            rebound_velocity,
                        } => {
                            tracing::debug!(
                                tick,
                                impact_velocity,
                                rebound_velocity,
                                "rebound"
                            );
                        }
                        SimEvent::Rested {
                            tick,
                            relaunch_height,
                            next_rest_height,
                        } => {
                            println!(
                                "frame {tick:>6}  at rest, relaunching from {relaunch_height} (next: {next_rest_height})"
                            );
                        }
                    }
                }
            }
        }
        Commands::Replay { frames } => {
            println!("Deterministic replay: frames={frames}");

            // Run 1
            let mut sim = Simulation::new();
            for _ in 0..frames {
                sim.step();
            }
            let events = sim.events().to_vec();

            // Replay from events
            let replayed = Simulation::replay(*sim.params(), &events);

            println!(
                "Run 1:  tick={} height={:.6} rest_height={} hash={:#x}",
                sim.tick(),
                sim.body().height(),
                sim.body().rest_height(),
                sim.state_hash()
            );
            println!(
                "Replay: tick={} height={:.6} rest_height={} hash={:#x}",
                replayed.tick(),
                replayed.body().height(),
                replayed.body().rest_height(),
                replayed.state_hash()
            );
            println!(
                "Match: {}",
                if sim.state_hash() == replayed.state_hash() {
                    "OK"
                } else {
                    "MISMATCH"
                }
            );
        }
        Commands::Scene => {
            let demo = bounce_scene();
            let view = demo
                .scene
                .first_camera()
                .map(RenderView::from)
                .unwrap_or_default();
            print!("{}", DebugTextRenderer::new().render(&demo.scene, &view));
        }
    }

    Ok(())
}
