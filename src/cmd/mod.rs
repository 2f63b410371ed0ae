mod samples;

use std::io::Write;

#[cfg(feature = "log")]
use crate::logger::CONSOLE_LOGGER;
#[allow(unused_imports)]
#[cfg(not(feature = "log"))]
use crate::logger::{debug, info};
#[allow(unused_imports)]
#[cfg(feature = "log")]
use log::{debug, info, LevelFilter};
use clap::Parser;

use crate::error::PrintError;
use crate::ip::Shape;

pub use samples::print_samples;

#[derive(Parser, Debug)]
#[command(
    name = "printIp",
    about = "print integers, containers, tuples and strings as ip addresses",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cmd {
    #[cfg(feature = "log")]
    #[arg(short, action = clap::ArgAction::Count, help = "Set verbosity level")]
    debug: u8,
    #[cfg_attr(not(feature = "log"), allow(dead_code))]
    #[arg(short, long, help = "Don't log anything")]
    quiet: bool,
    #[arg(
        short,
        long = "shape",
        value_enum,
        help = "Print only samples of this shape, can be repeated"
    )]
    shapes: Vec<Shape>,
}

impl Cmd {
    /// Shapes selected on the command line, every shape when none was given.
    pub fn selected_shapes(&self) -> Vec<Shape> {
        if self.shapes.is_empty() {
            vec![Shape::Integral, Shape::Sequence, Shape::Tuple, Shape::Text]
        } else {
            self.shapes.clone()
        }
    }

    #[cfg_attr(not(feature = "log"), allow(unused_variables))]
    pub fn main(&self) -> Result<(), PrintError> {
        #[cfg(feature = "log")]
        match log::set_logger(&CONSOLE_LOGGER) {
            Ok(()) => log::set_max_level(if self.quiet {
                LevelFilter::Off
            } else {
                match self.debug {
                    v if v >= 2 => LevelFilter::Debug,
                    1 => LevelFilter::Info,
                    _ => LevelFilter::Warn,
                }
            }),
            Err(e) => eprintln!("cannot install logger: {}", e),
        }

        let shapes = self.selected_shapes();
        info!("printing samples of shapes {:?}", shapes);
        let mut out = std::io::stdout().lock();
        let printed = print_samples(&shapes, &mut out)?;
        out.flush()?;
        debug!("printed {} samples", printed);
        Ok(())
    }
}
