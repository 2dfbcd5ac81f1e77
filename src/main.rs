use std::{fs, path::PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;

use engine::prelude::*;

mod view;

pub const APP_NAME: &str = "fovview";

#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = "Show what a viewer can see on a map")]
struct Args {
    /// Map file, one character per cell, `@` marks the viewer.
    map: PathBuf,

    #[arg(long, help = "Visibility config file")]
    config: Option<PathBuf>,

    #[arg(
        long,
        default_value = "640x480",
        value_parser = parse_resolution,
        help = "Display size in pixels, WIDTHxHEIGHT"
    )]
    resolution: IVec2,

    #[arg(long, default_value = "", help = "Moves to make, hjkl or wasd")]
    walk: String,

    #[arg(long, value_parser = parse_point, help = "Center the grid on X,Y")]
    focus: Option<IVec2>,

    #[arg(long, value_parser = parse_point, help = "Cast a ray to X,Y")]
    ray: Option<IVec2>,
}

fn parse_pair(s: &str, sep: char) -> Result<IVec2> {
    let Some((a, b)) = s.split_once(sep) else {
        bail!("expected two numbers separated by '{sep}'");
    };
    Ok(ivec2(a.trim().parse()?, b.trim().parse()?))
}

fn parse_resolution(s: &str) -> Result<IVec2> {
    parse_pair(s, 'x')
}

fn parse_point(s: &str) -> Result<IVec2> {
    parse_pair(s, ',')
}

fn direction(c: char) -> Option<IVec2> {
    match c {
        'k' | 'w' => Some(DIR_4[0]),
        'l' | 'd' => Some(DIR_4[1]),
        'j' | 's' => Some(DIR_4[2]),
        'h' | 'a' => Some(DIR_4[3]),
        _ => None,
    }
}

/// Player whose view can be pointed somewhere else.
struct Camera {
    player: Player,
    focus: Option<IVec2>,
}

impl Viewer for Camera {
    fn location(&self) -> IVec2 {
        self.player.location()
    }

    fn focus(&self) -> IVec2 {
        self.focus.unwrap_or_else(|| self.player.location())
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<FovConfig> {
    let Some(path) = path else {
        return Ok(Default::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let config: FovConfig = idm::from_str(&text)
        .map_err(|e| anyhow!("parsing {}: {e}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    let map: TileMap = fs::read_to_string(&args.map)
        .with_context(|| format!("reading {}", args.map.display()))?
        .parse()?;
    let Some(spawn) = map.spawn() else {
        bail!("{}: no '@' viewer position on map", args.map.display());
    };

    let mut camera = Camera {
        player: Player::new(spawn),
        focus: args.focus,
    };
    for c in args.walk.chars() {
        let Some(dir) = direction(c) else {
            bail!("bad move '{c}'");
        };
        if !camera.player.step(&map, dir) {
            log::info!("blocked moving {dir} from {}", camera.location());
        }
    }

    let mut fov = FieldOfView::new(&config, args.resolution)?;
    fov.update(&map, &camera)?;

    if let Some(target) = args.ray {
        let hit = fov.cast_ray(&map, camera.location(), target)?;
        println!(
            "ray to {target}: {}",
            if hit { "reached" } else { "blocked" }
        );
    }

    print!("{}", view::render(&fov, &map, camera.location()));
    log::info!("{} cells visible", fov.cells().visible_points().count());

    Ok(())
}
