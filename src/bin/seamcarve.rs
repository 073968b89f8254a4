use clap::{App, Arg};
use failure::Error;
use seamcarve::SeamCarver;
use std::process;

fn run() -> Result<(), Error> {
    let matches = App::new("seamcarve")
        .version("0.1.0")
        .about("Content-aware image resizing through seam carving")
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("PIXELS")
                .help("Target width; defaults to the input width")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("PIXELS")
                .help("Target height; defaults to the input height")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .get_matches();

    let image = image::open(matches.value_of("input").unwrap())?.to_rgb();
    let (width, height) = image.dimensions();

    let new_width = match matches.value_of("width") {
        Some(w) => w.parse()?,
        None => width,
    };
    let new_height = match matches.value_of("height") {
        Some(h) => h.parse()?,
        None => height,
    };

    let mut carver = SeamCarver::new(image);
    carver.carve(new_width, new_height)?;
    carver.picture().save(matches.value_of("output").unwrap())?;
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("seamcarve: {}", err);
        process::exit(1);
    }
}
