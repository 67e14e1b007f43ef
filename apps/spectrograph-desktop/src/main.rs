mod app;

use anyhow::Result;
use app::{GpuApp, ViewerConfig};
use clap::{Parser, Subcommand};
use spectrograph_input::NormalizedPointer;
use spectrograph_render::{CameraRig, FramePlan, RecordingRenderer, Renderer, aspect_ratio};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(
    name = "spectrograph-desktop",
    about = "Line segment viewer with a pointer-driven camera"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding line.vert.wgsl and line.frag.wgsl
    #[arg(long, default_value = "shaders")]
    shader_dir: PathBuf,

    /// Open a regular window instead of borderless fullscreen
    #[arg(long)]
    windowed: bool,

    /// Surface width in pixels (windowed mode and `plan`)
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Surface height in pixels (windowed mode and `plan`)
    #[arg(long, default_value_t = 720)]
    height: u32,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the frame that would be drawn for a pointer position, without a GPU
    Plan {
        /// Normalized pointer x in [-1, 1]
        #[arg(allow_negative_numbers = true)]
        x: f32,
        /// Normalized pointer y in [-1, 1], positive is up
        #[arg(allow_negative_numbers = true)]
        y: f32,
    },
}

fn print_plan(pointer: NormalizedPointer, width: u32, height: u32) {
    let camera = CameraRig::default();
    let angles = camera.angles(pointer);
    let eye = camera.eye_position(angles);
    println!(
        "pointer=({:.3}, {:.3}) yaw={:.2} pitch={:.2} eye=({:.3}, {:.3}, {:.3})",
        pointer.x, pointer.y, angles.yaw_degrees, angles.pitch_degrees, eye.x, eye.y, eye.z
    );

    let mut renderer = RecordingRenderer::new();
    let plan = FramePlan::new(camera.view_matrix(angles), aspect_ratio(width, height));
    renderer.draw(&plan);
    for frame in renderer.frames() {
        print!("{frame}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    if let Some(Commands::Plan { x, y }) = cli.command {
        print_plan(NormalizedPointer::new(x, y), cli.width, cli.height);
        return Ok(());
    }

    tracing::info!("spectrograph-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = GpuApp::new(ViewerConfig {
        shader_dir: cli.shader_dir,
        windowed: cli.windowed,
        width: cli.width,
        height: cli.height,
    });
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.take_startup_error() {
        return Err(e);
    }
    Ok(())
}
