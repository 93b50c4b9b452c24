use std::{
    env,
    fs::File,
    io::{self, BufReader},
};

use nmea_route::{Route, route_from_log};

fn read_route(path: Option<String>) -> io::Result<Route> {
    match path {
        Some(path) => route_from_log(BufReader::new(File::open(path)?)),
        None => route_from_log(io::stdin().lock()),
    }
}

fn main() {
    env_logger::init();

    match read_route(env::args().nth(1)) {
        Ok(route) => {
            for position in route {
                println!(
                    "{:.6},{:.6},{:.1}",
                    position.latitude(),
                    position.longitude(),
                    position.altitude()
                );
            }
        }
        Err(e) => {
            eprintln!("Failed to read log: {e}");
            std::process::exit(1);
        }
    }
}
