// What you SEE:
// • A dark window. Move the mouse over it: the picture shows through in tiles around
//   the cursor, spreads a little, and fades back to dark when you stop.
// • Resize the window: the heat grid is rebuilt for the new size (reveal resets).
// • C clears the reveal. ESC quits.

mod draw;

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use clap::Parser;
use draw::Drawer;
use log::{error, info, warn};
use thermal_reveal::types::frame_from_rgb;
use thermal_reveal::{Error, FrameBuffer, RevealConfig, RevealEngine, SoftwareSurface, logging};

/// Colour behind unrevealed tiles.
const BACKGROUND: u32 = 0x00_10_10_14;

#[derive(Parser, Debug)]
#[command(about = "Reveal a picture by moving heat around with the mouse")]
struct Args {
    /// Picture to reveal (any format the `image` crate decodes).
    image: PathBuf,
    /// Initial window width in pixels.
    #[arg(long, default_value_t = 800)]
    width: usize,
    /// Initial window height in pixels.
    #[arg(long, default_value_t = 600)]
    height: usize,
    /// Side length of one reveal tile, in pixels.
    #[arg(long, default_value_t = 20.0)]
    cell_size: f32,
    /// Fraction of heat kept per tick.
    #[arg(long, default_value_t = 0.98)]
    decay: f32,
    /// How strongly heat moves toward the neighbour average per tick.
    #[arg(long, default_value_t = 0.15)]
    diffusion: f32,
    /// Heat needed before a tile starts to show.
    #[arg(long, default_value_t = 0.1)]
    threshold: f32,
    /// Cursor reach, in cells.
    #[arg(long, default_value_t = 4)]
    radius: u32,
    /// Ticks per second (the simulation is per tick, so this also sets its speed).
    #[arg(long, default_value_t = 60)]
    fps: usize,
    /// Log debug output.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> RevealConfig {
        RevealConfig {
            cell_size: self.cell_size,
            decay: self.decay,
            diffusion: self.diffusion,
            threshold: self.threshold,
            influence_radius: self.radius,
        }
    }
}

/// Decode the picture off the UI thread; the engine keeps simulating until it lands.
fn load_in_background(path: PathBuf) -> Receiver<Result<FrameBuffer, Error>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let loaded = image::open(&path)
            .map(|img| frame_from_rgb(&img.to_rgb8()))
            .map_err(|e| Error::ImageLoad(format!("{}: {e}", path.display())));
        // The receiver only disappears when the window has already closed.
        let _ = tx.send(loaded);
    });
    rx
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    logging::init(args.verbose);

    /* --- Engine + surface sized to the window --- */
    let mut drawer = Drawer::new("Thermal Reveal", args.width, args.height, args.fps)?;
    let (mut w, mut h) = drawer.size();
    let mut engine: RevealEngine<FrameBuffer> =
        RevealEngine::new(w as f32, h as f32, args.config())?;
    let mut surface = SoftwareSurface::new(w, h, BACKGROUND);

    let mut pending = Some(load_in_background(args.image.clone()));
    info!("loading {}", args.image.display());

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Picture arrives whenever the loader finishes. */
        match pending.as_ref().map(Receiver::try_recv) {
            Some(Ok(Ok(img))) => {
                engine.set_image(img);
                pending = None;
            }
            Some(Ok(Err(e))) => {
                // Stays dark forever; that's a valid state, not a crash.
                error!("{e}");
                pending = None;
            }
            Some(Err(TryRecvError::Disconnected)) => {
                warn!("image loader exited without a result");
                pending = None;
            }
            Some(Err(TryRecvError::Empty)) | None => {}
        }

        /* 2) Layout changes: rebuild grid + surface. */
        let size = drawer.size();
        if size != (w, h) {
            (w, h) = size;
            engine.resize(w as f32, h as f32);
            surface.resize(w, h);
        }
        if drawer.c_pressed_once() {
            engine.resize(w as f32, h as f32);
        }

        /* 3) Pointer: hovering heats, leaving stops heating. */
        match drawer.mouse_pos() {
            Some((mx, my)) => engine.pointer_move(mx, my),
            None => engine.pointer_leave(),
        }

        /* 4) Tick + present. */
        engine.render(&mut surface);
        drawer.present(surface.frame())?;
    }

    engine.destroy();
    Ok(())
}
