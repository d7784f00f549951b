//! CLI probe for the Mercator view projection.
//!
//! Prints a forward/inverse round-trip table over a lattice of canvas
//! points plus the distortion tensor along a meridian, for eyeballing a
//! (bounds, viewport) pairing before wiring it into a host map.
//!
//! Usage:
//!   cargo run --bin probe-mercator -- --bbox 85,-85,180,-180 --size 1024x512 --step 4

use velocity_common::{GeoBounds, Viewport};
use velocity_projection::MercatorProjection;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut bounds = GeoBounds::new(85.0, -85.0, 180.0, -180.0);
    let mut viewport = Viewport::sized(1024.0, 512.0);
    let mut step = 4usize;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bbox" | "-b" => {
                i += 1;
                if i < args.len() {
                    bounds = parse_bbox(&args[i]);
                }
            }
            "--size" | "-s" => {
                i += 1;
                if i < args.len() {
                    viewport = parse_size(&args[i]);
                }
            }
            "--step" => {
                i += 1;
                if i < args.len() {
                    step = args[i].parse().expect("Invalid step count");
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    if let Err(e) = viewport.validate().and_then(|_| bounds.validate()) {
        eprintln!("Rejecting input: {}", e);
        std::process::exit(1);
    }

    let proj = MercatorProjection::new(bounds, viewport);

    println!("Mercator View Probe");
    println!("===================");
    println!(
        "Bounds: N{} S{} E{} W{}   Canvas: {}x{}",
        bounds.north, bounds.south, bounds.east, bounds.west, viewport.width, viewport.height
    );
    println!();

    println!("Round trip over a {0}x{0} lattice:", step + 1);
    println!("{:-<78}", "");
    println!(
        "{:>8} {:>8} {:>12} {:>12} {:>14} {:>14}",
        "x", "y", "lon", "lat", "x err", "y err"
    );
    println!("{:-<78}", "");

    let mut max_err = 0.0f64;
    for iy in 0..=step {
        for ix in 0..=step {
            let x = viewport.width * ix as f64 / step as f64;
            let y = viewport.height * iy as f64 / step as f64;
            let (lon, lat) = proj.canvas_to_geo(x, y);
            let (x2, y2) = proj.geo_to_canvas(lon, lat);
            let (ex, ey) = ((x2 - x).abs(), (y2 - y).abs());
            max_err = max_err.max(ex).max(ey);
            println!(
                "{:>8.1} {:>8.1} {:>12.6} {:>12.6} {:>14.3e} {:>14.3e}",
                x, y, lon, lat, ex, ey
            );
        }
    }
    println!("{:-<78}", "");
    println!("Max round-trip error: {:.3e} px", max_err);
    println!();

    let (center_lon, _) = bounds.center();
    println!("Distortion tensor along the {center_lon}° meridian:");
    println!("{:-<78}", "");
    println!(
        "{:>8} {:>15} {:>15} {:>15} {:>15}",
        "lat", "d0", "d1", "d2", "d3"
    );
    println!("{:-<78}", "");
    let south = bounds.south.min(bounds.north);
    let north = bounds.south.max(bounds.north);
    for t in 0..=8 {
        let lat = south + (north - south) * t as f64 / 8.0;
        let (x, y) = proj.geo_to_canvas(center_lon, lat);
        let d = proj.distortion(center_lon, lat, x, y);
        println!(
            "{:>8.2} {:>15.5e} {:>15.5e} {:>15.5e} {:>15.5e}",
            lat,
            d[(0, 0)],
            d[(1, 0)],
            d[(0, 1)],
            d[(1, 1)]
        );
    }
    println!("{:-<78}", "");
}

fn parse_bbox(s: &str) -> GeoBounds {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse().expect("Invalid bbox number"))
        .collect();
    if parts.len() != 4 {
        eprintln!("Expected --bbox N,S,E,W, got '{}'", s);
        std::process::exit(1);
    }
    GeoBounds::new(parts[0], parts[1], parts[2], parts[3])
}

fn parse_size(s: &str) -> Viewport {
    let parts: Vec<f64> = s
        .split('x')
        .map(|p| p.trim().parse().expect("Invalid size number"))
        .collect();
    if parts.len() != 2 {
        eprintln!("Expected --size WIDTHxHEIGHT, got '{}'", s);
        std::process::exit(1);
    }
    Viewport::sized(parts[0], parts[1])
}

fn print_help() {
    println!("Mercator view projection probe");
    println!();
    println!("Usage: probe-mercator [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -b, --bbox N,S,E,W    Geographic bounds in degrees (default 85,-85,180,-180)");
    println!("  -s, --size WxH        Canvas size in pixels (default 1024x512)");
    println!("      --step N          Lattice subdivisions per axis (default 4)");
    println!("  -h, --help            Show this help");
}
