use clap::{App, Arg};
use seamtarget::{calculate_energy, energy_to_image, retarget_with, CumulativeTable, GreedyScan};

fn main() -> Result<(), failure::Error> {
    let matches = App::new("seamtarget")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image retargeting")
        .arg(
            Arg::with_name("input")
                .help("The image to retarget")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .required_unless("dump-energy")
                .help("Target width in pixels"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .required_unless("dump-energy")
                .help("Target height in pixels"),
        )
        .arg(
            Arg::with_name("finder")
                .long("finder")
                .takes_value(true)
                .possible_values(&["greedy", "table"])
                .default_value("greedy")
                .help("Seam search strategy"),
        )
        .arg(
            Arg::with_name("dump-energy")
                .long("dump-energy")
                .help("Write the energy map as a grayscale image instead of retargeting"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log each seam removal"),
        )
        .get_matches();

    if matches.is_present("verbose") {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap();
    let img = image::open(input)?.to_rgb();

    if matches.is_present("dump-energy") {
        let energy = calculate_energy(&img)?;
        energy_to_image(&energy).save(output)?;
        return Ok(());
    }

    let new_width: u32 = matches.value_of("width").unwrap().parse()?;
    let new_height: u32 = matches.value_of("height").unwrap().parse()?;

    let carved = if matches.value_of("finder") == Some("table") {
        retarget_with(&img, new_width, new_height, &CumulativeTable)?
    } else {
        retarget_with(&img, new_width, new_height, &GreedyScan)?
    };

    let (width, height) = carved.dimensions();
    carved.save(output)?;
    eprintln!("{}: {}x{} -> {}: {}x{}", input, img.width(), img.height(), output, width, height);
    Ok(())
}
