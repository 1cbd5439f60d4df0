use seammark::{calculate_energy, energy_to_image, energy_to_seam, paint_seam, SeamError};
use std::process;

use clap::{App, Arg};

fn run() -> Result<(), SeamError> {
    let matches = App::new("seammark")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Find the minimum-energy seam of an image and paint it red")
        .arg(
            Arg::with_name("input")
                .help("The image to analyze")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the copy with the seam highlighted")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("energymap")
                .long("energy-map")
                .value_name("PATH")
                .takes_value(true)
                .help("Also write the normalized energy map as a grayscale image"),
        )
        .get_matches();

    let image = image::open(matches.value_of("input").unwrap())?;
    let mut canvas = image.to_rgb();

    let energies = calculate_energy(&canvas)?;
    if let Some(path) = matches.value_of("energymap") {
        energy_to_image(&energies).save(path)?;
    }

    let seam = energy_to_seam(energies.grid());
    println!("The seam size: {}", seam.len());
    println!("The seam path: {}", seam);

    paint_seam(&mut canvas, &seam);
    canvas.save(matches.value_of("output").unwrap())?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("seammark: {}", err);
        process::exit(1);
    }
}
